use std::path::{Path, PathBuf};
use std::sync::Arc;

use prodapi_products::ProductRegistry;

/// State shared by all handlers, injected as an `Extension`.
pub struct AppServices {
    registry: Arc<dyn ProductRegistry>,
    openapi_path: PathBuf,
}

impl AppServices {
    pub fn new<R>(registry: R, openapi_path: PathBuf) -> Self
    where
        R: ProductRegistry + 'static,
    {
        Self {
            registry: Arc::new(registry),
            openapi_path,
        }
    }

    pub fn registry(&self) -> &dyn ProductRegistry {
        self.registry.as_ref()
    }

    pub fn openapi_path(&self) -> &Path {
        &self.openapi_path
    }
}
