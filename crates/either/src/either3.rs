//! Three-way tagged union built on a nested [`Either`].

use std::fmt;

use crate::{Either, EitherError};

/// A value holding exactly one of `A`, `B` or `C`.
///
/// Stored as `Either<A, Either<B, C>>` so that generic code written against
/// the two-way union (codecs, traversal) handles it without a special case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Either3<A, B, C>(Either<A, Either<B, C>>);

impl<A, B, C> Either3<A, B, C> {
    pub fn for_first(first: A) -> Self {
        Self(Either::Left(first))
    }

    pub fn for_second(second: B) -> Self {
        Self(Either::Right(Either::Left(second)))
    }

    pub fn for_third(third: C) -> Self {
        Self(Either::Right(Either::Right(third)))
    }

    pub fn is_first(&self) -> bool {
        self.0.is_left()
    }

    pub fn is_second(&self) -> bool {
        matches!(self.0, Either::Right(Either::Left(_)))
    }

    pub fn is_third(&self) -> bool {
        matches!(self.0, Either::Right(Either::Right(_)))
    }

    pub fn first(&self) -> Option<&A> {
        self.0.left()
    }

    pub fn second(&self) -> Option<&B> {
        self.0.right().and_then(Either::left)
    }

    pub fn third(&self) -> Option<&C> {
        self.0.right().and_then(Either::right)
    }

    pub fn get_first(&self) -> Result<&A, EitherError> {
        self.first()
            .ok_or_else(|| EitherError::wrong_variant("first", self.occupied()))
    }

    pub fn get_second(&self) -> Result<&B, EitherError> {
        self.second()
            .ok_or_else(|| EitherError::wrong_variant("second", self.occupied()))
    }

    pub fn get_third(&self) -> Result<&C, EitherError> {
        self.third()
            .ok_or_else(|| EitherError::wrong_variant("third", self.occupied()))
    }

    /// Applies the function matching the occupied alternative.
    pub fn map<T>(
        &self,
        on_first: impl FnOnce(&A) -> T,
        on_second: impl FnOnce(&B) -> T,
        on_third: impl FnOnce(&C) -> T,
    ) -> T {
        match &self.0 {
            Either::Left(a) => on_first(a),
            Either::Right(Either::Left(b)) => on_second(b),
            Either::Right(Either::Right(c)) => on_third(c),
        }
    }

    pub fn as_either(&self) -> &Either<A, Either<B, C>> {
        &self.0
    }

    pub fn into_either(self) -> Either<A, Either<B, C>> {
        self.0
    }

    fn occupied(&self) -> &'static str {
        self.map(|_| "first", |_| "second", |_| "third")
    }
}

impl<A, B, C> From<Either<A, Either<B, C>>> for Either3<A, B, C> {
    fn from(inner: Either<A, Either<B, C>>) -> Self {
        Self(inner)
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Either3<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
