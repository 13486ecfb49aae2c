use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EitherError {
    /// The queried alternative is not the occupied one.
    #[error("wrong variant: requested {requested}, but {occupied} is occupied")]
    WrongVariant {
        requested: &'static str,
        occupied: &'static str,
    },
}

impl EitherError {
    pub(crate) fn wrong_variant(requested: &'static str, occupied: &'static str) -> Self {
        Self::WrongVariant {
            requested,
            occupied,
        }
    }
}
