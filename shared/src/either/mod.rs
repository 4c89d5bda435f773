//! Either type - a value that is exactly one of a failure or a success.
//!
//! `Either<L, R>` carries business failures (`Left`) and successes (`Right`)
//! through the service layer without resorting to panics. Sequences of
//! independent results are reduced with the collectors in [`collectors`]:
//!
//! - [`FirstFailure`] stops at the first `Left` in encounter order
//! - [`AllFailures`] reports every `Left` as a [`NonEmptyVec`]
//!
//! # Example
//!
//! ```
//! use neta_shared::either::{Either, EitherIteratorExt};
//!
//! let checks: Vec<Either<String, u32>> = vec![Either::right(1), Either::right(2)];
//! assert_eq!(checks.into_iter().collect_first_failure(), Either::right(vec![1, 2]));
//! ```

pub mod collectors;
mod non_empty;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use collectors::{
    all_failures, collect_chunked, first_failure, AllFailures, EitherCollector, EitherIteratorExt,
    FirstFailure,
};
pub use non_empty::{optional_list, NonEmptyIteratorExt, NonEmptyVec};

/// Errors raised when an `Either` cannot be constructed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EitherError {
    #[error("Invalid state: {side} payload is absent")]
    InvalidState { side: &'static str },
}

/// A value that is either a failure (`Left`) or a success (`Right`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// Failure payload
    Left(L),
    /// Success payload
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Creates a `Left` holding `value`
    #[inline]
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` holding `value`
    #[inline]
    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a `Left` from a payload that may be missing
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::InvalidState`] when `value` is `None`.
    pub fn try_left(value: Option<L>) -> Result<Self, EitherError> {
        value
            .map(Self::Left)
            .ok_or(EitherError::InvalidState { side: "left" })
    }

    /// Creates a `Right` from a payload that may be missing
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::InvalidState`] when `value` is `None`.
    pub fn try_right(value: Option<R>) -> Result<Self, EitherError> {
        value
            .map(Self::Right)
            .ok_or(EitherError::InvalidState { side: "right" })
    }

    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns a view of the failure payload, `None` for a `Right`
    #[inline]
    pub const fn get_left(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a view of the success payload, `None` for a `Left`
    #[inline]
    pub const fn get_right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides, leaving `self` untouched
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a `Right`; a `Left` passes through unchanged
    ///
    /// ```
    /// use neta_shared::either::Either;
    ///
    /// let failed: Either<&str, i32> = Either::left("boom");
    /// assert_eq!(failed.map(|n| n * 2), Either::left("boom"));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, function: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a dependent computation, short-circuiting on `Left`
    #[inline]
    pub fn flat_map<R2, F>(self, function: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Converts the failure payload; a `Right` passes through unchanged
    #[inline]
    pub fn map_left<L2, F>(self, function: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a recovery computation on the failure side
    #[inline]
    pub fn flat_map_left<L2, F>(self, function: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Turns a `Right` into a `Left` when `predicate` reports a failure
    ///
    /// ```
    /// use neta_shared::either::Either;
    ///
    /// let age: Either<String, u32> = Either::right(12);
    /// let adult = age.filter(|n| (*n < 18).then(|| "minor".to_string()));
    /// assert_eq!(adult, Either::left("minor".to_string()));
    /// ```
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&R) -> Option<L>,
    {
        match self {
            Self::Right(value) => match predicate(&value) {
                Some(failure) => Self::Left(failure),
                None => Self::Right(value),
            },
            left => left,
        }
    }

    /// Turns a `Left` into a `Right` when `predicate` yields a replacement
    pub fn filter_left<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&L) -> Option<R>,
    {
        match self {
            Self::Left(value) => match predicate(&value) {
                Some(success) => Self::Right(success),
                None => Self::Left(value),
            },
            right => right,
        }
    }

    /// Eliminates the union; exactly one of the two functions runs
    #[inline]
    pub fn fold<U, F, G>(self, on_left: F, on_right: G) -> U
    where
        F: FnOnce(L) -> U,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Side-effecting elimination
    pub fn if_left_or_else<F, G>(self, on_left: F, on_right: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Bridges into `?`-based code, converting the failure with `to_error`
    ///
    /// # Errors
    ///
    /// Returns `to_error(left)` when this is a `Left`.
    pub fn ok_or_else<E, F>(self, to_error: F) -> Result<R, E>
    where
        F: FnOnce(L) -> E,
    {
        match self {
            Self::Left(value) => Err(to_error(value)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Converts into a `Result`, `Left` becoming `Err`
    ///
    /// # Errors
    ///
    /// Returns the failure payload when this is a `Left`.
    pub fn into_result(self) -> Result<R, L> {
        self.ok_or_else(|value| value)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(f, "Left[{}]", value),
            Self::Right(value) => write!(f, "Right[{}]", value),
        }
    }
}
