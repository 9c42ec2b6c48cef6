//! Product registry: the ordered in-memory collection and the five operations over it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{RegistryError, RegistryResult};
use crate::product::{Product, ProductId, ProductInput, ProductPatch};

/// Registry abstraction handed to the HTTP layer.
///
/// An absent `input`/`patch` means the request carried no usable body.
pub trait ProductRegistry: Send + Sync {
    fn list(&self) -> Vec<Product>;
    fn get(&self, id: ProductId) -> RegistryResult<Product>;
    fn create(&self, input: Option<ProductInput>) -> RegistryResult<Product>;
    fn update(&self, id: ProductId, patch: Option<ProductPatch>) -> RegistryResult<Product>;
    /// Remove the product and return it.
    fn delete(&self, id: ProductId) -> RegistryResult<Product>;
}

impl<R> ProductRegistry for Arc<R>
where
    R: ProductRegistry + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> RegistryResult<Product> {
        (**self).get(id)
    }

    fn create(&self, input: Option<ProductInput>) -> RegistryResult<Product> {
        (**self).create(input)
    }

    fn update(&self, id: ProductId, patch: Option<ProductPatch>) -> RegistryResult<Product> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: ProductId) -> RegistryResult<Product> {
        (**self).delete(id)
    }
}

/// The records present when the process starts.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Notebook", 3500.00, Some(10)),
        Product::new(2, "Mouse", 120.50, Some(50)),
    ]
}

/// In-memory registry. One mutex guards the whole collection, so each operation
/// (including id assignment on create) runs as a single critical section.
#[derive(Debug, Default)]
pub struct InMemoryProductRegistry {
    inner: Mutex<Vec<Product>>,
}

impl InMemoryProductRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the two seed records.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Mutex::new(products),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every mutation leaves the vector consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_id(products: &[Product]) -> ProductId {
        products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }
}

impl ProductRegistry for InMemoryProductRegistry {
    fn list(&self) -> Vec<Product> {
        self.lock().clone()
    }

    fn get(&self, id: ProductId) -> RegistryResult<Product> {
        self.lock()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RegistryError::not_found(id))
    }

    fn create(&self, input: Option<ProductInput>) -> RegistryResult<Product> {
        let input = input.ok_or_else(|| RegistryError::validation("missing body"))?;

        let mut products = self.lock();
        let id = Self::next_id(&products);
        let product = input.into_product(id)?;
        tracing::debug!(id, "assigned product id");

        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, id: ProductId, patch: Option<ProductPatch>) -> RegistryResult<Product> {
        let mut products = self.lock();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RegistryError::not_found(id))?;

        let patch = patch.ok_or_else(|| RegistryError::validation("missing body"))?;
        patch.validate()?;

        product.apply(patch);
        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> RegistryResult<Product> {
        let mut products = self.lock();
        let pos = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RegistryError::not_found(id))?;
        Ok(products.remove(pos))
    }
}
