//! lsp-model - typed Language Server Protocol records.
//!
//! Many protocol fields are polymorphic: the same key may carry a string, a
//! structured object, or a list of either. Such fields are typed as
//! [`Either`]/[`Either3`] and decoded by inspecting the JSON shape through an
//! ordered [`codec::ShapeTable`]; the wire format never carries a type tag.
//!
//! Layout:
//! - [`codec`]: JSON kind classification, shape tables, `FromJson`/`ToJson`.
//! - [`guard`]: the non-null precondition used by required-field setters.
//! - [`groups`]: optional field groups shared by unrelated option records.
//! - [`protocol`]: the records themselves.

pub mod codec;
pub mod error;
pub mod groups;
pub mod guard;
pub mod protocol;
pub mod validate;

pub use codec::{decode, encode, encode_checked, FromJson, JsonKind, ToJson};
pub use error::ModelError;
pub use guard::require;
pub use validate::Validate;

pub use lsp_model_either::{Either, Either3, EitherError, Side};
