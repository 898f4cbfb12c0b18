//! Field-level validation rules for input DTOs, evaluated before any
//! persistence call.

use regex::Regex;

use crate::errors::{AppError, FieldError};

lazy_static::lazy_static! {
    // Letters and digits are Unicode classes so internationalized addresses
    // (`usuário@exemplo.com.br`, `contato@câmara.br`) pass.
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@([\p{L}\p{N}]([\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+\p{L}{2,}$"
    ).unwrap();
}

/// Rules an input DTO must satisfy once it has the right shape.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Collects field errors and turns them into a single `AppError::Validation`.
#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !is_valid_email(value) {
            self.errors.push(FieldError::new(
                field,
                "value is not a valid email address",
            ));
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}
