//! OpenAPI document and interactive documentation page.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub const OPENAPI_URL: &str = "/static/swagger.yaml";
pub const APP_NAME: &str = "API de Produtos";

const SWAGGER_UI_VERSION: &str = "5";

/// Serve the OpenAPI document as JSON. The YAML file is read and parsed on every
/// request so edits show up without a restart.
pub async fn openapi_document(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let path = services.openapi_path();

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read OpenAPI document: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                errors::MSG_DOCS_UNAVAILABLE,
            );
        }
    };

    match parse_openapi(&raw) {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "invalid OpenAPI document: {e}");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, errors::MSG_DOCS_UNAVAILABLE)
        }
    }
}

pub fn parse_openapi(raw: &str) -> Result<serde_json::Value, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}

/// Swagger UI page pointing at [`OPENAPI_URL`].
pub async fn docs_ui() -> Html<String> {
    Html(render_docs_page(APP_NAME, OPENAPI_URL))
}

fn render_docs_page(title: &str, spec_url: &str) -> String {
    let cdn = format!("https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}");
    format!(
        r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <link rel="stylesheet" href="{cdn}/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="{cdn}/swagger-ui-bundle.js"></script>
  <script src="{cdn}/swagger-ui-standalone-preset.js"></script>
  <script>
    window.onload = function () {{
      window.ui = SwaggerUIBundle({{
        url: "{spec_url}",
        dom_id: "#swagger-ui",
        deepLinking: true,
        presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
        layout: "StandaloneLayout"
      }});
    }};
  </script>
</body>
</html>
"##
    )
}
