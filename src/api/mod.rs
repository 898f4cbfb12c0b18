use actix_web::{error::JsonPayloadError, web};

use crate::errors::{AppError, FieldError};

pub mod empresas;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod obrigacoes;
pub mod openapi;

/// Registers every route of the service together with the extractor
/// configuration that turns malformed input into validation errors.
pub fn init(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.app_data(json_config(max_body_bytes))
        .app_data(path_config())
        .configure(health::init_routes)
        .configure(empresas::init_routes)
        .configure(obrigacoes::init_routes);
}

fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| match err {
            JsonPayloadError::Deserialize(e) => {
                AppError::Validation(vec![FieldError::new("body", e.to_string())]).into()
            }
            JsonPayloadError::ContentType => AppError::Validation(vec![FieldError::new(
                "body",
                "expected an application/json body",
            )])
            .into(),
            other => other.into(),
        })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::Validation(vec![FieldError::new("path", err.to_string())]).into()
    })
}
