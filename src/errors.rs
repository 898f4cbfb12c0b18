use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Field-level detail attached to a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Uniform error body returned by every handler.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbError(DbErr),

    #[error("Dados inválidos")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal,
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                log::warn!("Foreign key violation: {}", detail);
                AppError::Conflict("Violação de integridade referencial".to_string())
            }
            _ => AppError::DbError(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DbError(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::DbError(err) = self {
            log::error!("Database error: {}", err);
        }

        let details = match self {
            AppError::Validation(fields) => Some(fields.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DbError(_) => "DB_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Internal => "INTERNAL",
        }
    }

    pub fn empresa_not_found() -> Self {
        AppError::NotFound("Empresa não encontrada".to_string())
    }

    pub fn obrigacao_not_found() -> Self {
        AppError::NotFound("Obrigação Acessória não encontrada".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_missing_entity() {
        assert_eq!(AppError::empresa_not_found().to_string(), "Empresa não encontrada");
        assert_eq!(
            AppError::obrigacao_not_found().to_string(),
            "Obrigação Acessória não encontrada"
        );
        assert_eq!(
            AppError::empresa_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let err = AppError::Validation(vec![FieldError::new("email", "invalid")]);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn plain_db_errors_stay_internal() {
        let err = AppError::from(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, AppError::DbError(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
