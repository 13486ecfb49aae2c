//! lsp-model-either - tagged unions for polymorphic protocol fields.
//!
//! A protocol field that may carry one of several structurally different
//! values is typed as [`Either`] (two alternatives) or [`Either3`] (three
//! alternatives, stored as a nested [`Either`]). Exactly one alternative is
//! occupied at any time; asking for the other one is a programming error
//! reported as [`EitherError::WrongVariant`].

mod either;
mod either3;
mod error;

pub use either::{Either, Side};
pub use either3::Either3;
pub use error::EitherError;
