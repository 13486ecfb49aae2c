//! Two-way tagged union.

use std::fmt;

use crate::EitherError;

/// Which alternative of an [`Either`] is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value holding exactly one of `L` or `R`.
///
/// Equality and hashing are structural: two unions are equal only when they
/// occupy the same side with equal values, and the hash mixes the side
/// discriminant with the occupied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn for_left(left: L) -> Self {
        Self::Left(left)
    }

    pub fn for_right(right: R) -> Self {
        Self::Right(right)
    }

    pub fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    pub fn left(&self) -> Option<&L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    pub fn right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Returns the left value, or [`EitherError::WrongVariant`] when the
    /// right side is occupied.
    pub fn get_left(&self) -> Result<&L, EitherError> {
        self.left()
            .ok_or_else(|| EitherError::wrong_variant(Side::Left.as_str(), self.side().as_str()))
    }

    /// Returns the right value, or [`EitherError::WrongVariant`] when the
    /// left side is occupied.
    pub fn get_right(&self) -> Result<&R, EitherError> {
        self.right()
            .ok_or_else(|| EitherError::wrong_variant(Side::Right.as_str(), self.side().as_str()))
    }

    pub fn left_mut(&mut self) -> Option<&mut L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    pub fn right_mut(&mut self) -> Option<&mut R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Consumes the union, handing the union back unchanged when the left
    /// side is not occupied.
    pub fn into_left(self) -> Result<L, Self> {
        match self {
            Self::Left(l) => Ok(l),
            other => Err(other),
        }
    }

    pub fn into_right(self) -> Result<R, Self> {
        match self {
            Self::Right(r) => Ok(r),
            other => Err(other),
        }
    }

    /// Applies the function matching the occupied side.
    pub fn map<T>(&self, on_left: impl FnOnce(&L) -> T, on_right: impl FnOnce(&R) -> T) -> T {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// By-value counterpart of [`Either::map`].
    pub fn map_into<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => fmt::Display::fmt(l, f),
            Self::Right(r) => fmt::Display::fmt(r, f),
        }
    }
}
