use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    errors::{AppError, FieldError},
    services::validation::Validate,
};

/// JSON body that has the shape of `T` and passes `T`'s validation rules.
///
/// Both checks run during extraction, so a handler taking a
/// `ValidatedJson<T>` never opens a unit of work for bad input.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // Syntax errors, content type and size limits stay with `JsonConfig`.
        let body = web::Json::<Value>::from_request(req, payload);
        Box::pin(async move {
            let web::Json(value) = body.await?;
            let input = parse_body::<T>(value)?;
            Ok(ValidatedJson(input))
        })
    }
}

/// Deserializes `value` into `T`, reporting the path of the offending field,
/// then applies `T`'s validation rules.
pub fn parse_body<T>(value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let input: T = serde_path_to_error::deserialize(value)
        .map_err(|err| AppError::Validation(vec![field_error(err)]))?;
    input.validate()?;
    Ok(input)
}

fn field_error(err: serde_path_to_error::Error<serde_json::Error>) -> FieldError {
    let path = err.path().to_string();
    let message = err.into_inner().to_string();

    // A missing field is reported against its parent, "." for the root object.
    let field = if path == "." {
        missing_field(&message).unwrap_or("body").to_string()
    } else {
        path
    };
    FieldError::new(field, message)
}

fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.split('`').next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{empresas::EmpresaCreate, obrigacoes::ObrigacaoAcessoriaCreate};
    use serde_json::json;

    fn details(err: AppError) -> Vec<FieldError> {
        match err {
            AppError::Validation(fields) => fields,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_type_names_the_field() {
        let err = parse_body::<ObrigacaoAcessoriaCreate>(json!({
            "nome": "D",
            "periodicidade": "mensal",
            "empresa_id": "x"
        }))
        .unwrap_err();
        assert_eq!(details(err)[0].field, "empresa_id");
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = parse_body::<EmpresaCreate>(json!({
            "nome": "Empresa A",
            "endereco": "Rua A, 123",
            "email": "empresaa@exemplo.com",
            "telefone": "1234567890"
        }))
        .unwrap_err();
        let fields = details(err);
        assert_eq!(fields[0].field, "cnpj");
        assert!(fields[0].message.contains("missing field"));
    }

    #[test]
    fn non_object_body_is_reported_against_body() {
        let err = parse_body::<EmpresaCreate>(json!([1, 2, 3])).unwrap_err();
        assert_eq!(details(err)[0].field, "body");
    }

    #[test]
    fn well_formed_body_still_goes_through_validation() {
        let err = parse_body::<EmpresaCreate>(json!({
            "nome": "Empresa A",
            "cnpj": "12.345.678/0001-99",
            "endereco": "Rua A, 123",
            "email": "sem-arroba",
            "telefone": "1234567890"
        }))
        .unwrap_err();
        assert_eq!(details(err)[0].field, "email");
    }
}
