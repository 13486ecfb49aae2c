//! Required-field validation for records built in code.
//!
//! Decoding already rejects missing required fields. A record assembled via
//! `Default` and setters may still have required fields unset; validation
//! reports the first one as [`ModelError::MissingField`] with its path.

use lsp_model_either::{Either, Either3};

use crate::codec::{LspAny, LspObject};
use crate::ModelError;

pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

/// Fails with `MissingField` when a required field is unset, otherwise
/// validates the value re-rooted at `field`.
pub fn required<T: Validate>(value: &Option<T>, field: &str) -> Result<(), ModelError> {
    match value {
        Some(value) => value.validate().map_err(|e| e.within(field)),
        None => Err(ModelError::missing_field(field)),
    }
}

/// Validates an optional field if it is set.
pub fn optional<T: Validate>(value: &Option<T>, field: &str) -> Result<(), ModelError> {
    match value {
        Some(value) => value.validate().map_err(|e| e.within(field)),
        None => Ok(()),
    }
}

macro_rules! leaf {
    ($($t:ty),*) => {
        $(impl Validate for $t {
            fn validate(&self) -> Result<(), ModelError> {
                Ok(())
            }
        })*
    };
}

leaf!(String, bool, i32, u32, LspObject);

/// A required `LspAny` holding JSON `null` would encode as a missing field.
impl Validate for LspAny {
    fn validate(&self) -> Result<(), ModelError> {
        if self.as_value().is_null() {
            return Err(ModelError::missing_field(""));
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ModelError> {
        for (i, item) in self.iter().enumerate() {
            item.validate().map_err(|e| e.at_index(i))?;
        }
        Ok(())
    }
}

impl<L: Validate, R: Validate> Validate for Either<L, R> {
    fn validate(&self) -> Result<(), ModelError> {
        self.map(Validate::validate, Validate::validate)
    }
}

impl<A: Validate, B: Validate, C: Validate> Validate for Either3<A, B, C> {
    fn validate(&self) -> Result<(), ModelError> {
        self.map(Validate::validate, Validate::validate, Validate::validate)
    }
}
