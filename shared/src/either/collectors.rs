//! Reduction policies folding many `Either` values into one.
//!
//! Each policy is an accumulator with three steps:
//!
//! - `add` feeds one element, in sequence order
//! - `combine` merges two partial accumulators; `a.combine(b)` treats every
//!   element of `a` as preceding every element of `b`
//! - `finish` produces the aggregated `Either`
//!
//! `combine` is associative, so a sequence may be folded in chunks and the
//! partial results merged in order with the same outcome as a sequential fold.

use std::mem;

use super::{Either, NonEmptyVec};

/// An accumulator reducing `Either<Left, Right>` values into `Output`
pub trait EitherCollector: Default {
    type Left;
    type Right;
    type Output;

    /// Feeds the next element of the sequence
    fn add(&mut self, item: Either<Self::Left, Self::Right>);

    /// Merges `other`, whose elements all follow those already in `self`
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Whether a `Left` has been seen, letting callers skip remaining work
    fn has_failure(&self) -> bool;

    /// Produces the aggregated result
    fn finish(self) -> Self::Output;

    /// Folds a whole sequence sequentially
    fn collect<I>(items: I) -> Self::Output
    where
        I: IntoIterator<Item = Either<Self::Left, Self::Right>>,
    {
        let mut accumulator = Self::default();
        for item in items {
            accumulator.add(item);
        }
        accumulator.finish()
    }
}

/// Keeps the first `Left` in encounter order, or every `Right` if none failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstFailure<L, R> {
    left: Option<L>,
    right: Vec<R>,
}

impl<L, R> Default for FirstFailure<L, R> {
    fn default() -> Self {
        Self {
            left: None,
            right: Vec::new(),
        }
    }
}

impl<L, R> EitherCollector for FirstFailure<L, R> {
    type Left = L;
    type Right = R;
    type Output = Either<L, Vec<R>>;

    fn add(&mut self, item: Either<L, R>) {
        match item {
            Either::Left(value) => {
                if self.left.is_none() {
                    self.left = Some(value);
                    self.right = Vec::new();
                }
            }
            Either::Right(value) => {
                if self.left.is_none() {
                    self.right.push(value);
                }
            }
        }
    }

    fn combine(mut self, other: Self) -> Self {
        if self.left.is_some() {
            return self;
        }
        if other.left.is_some() {
            return other;
        }
        self.right.extend(other.right);
        self
    }

    fn has_failure(&self) -> bool {
        self.left.is_some()
    }

    fn finish(self) -> Either<L, Vec<R>> {
        match self.left {
            Some(failure) => Either::Left(failure),
            None => Either::Right(self.right),
        }
    }
}

/// Keeps every `Left` in encounter order, or every `Right` if none failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllFailures<L, R> {
    left: Vec<L>,
    right: Vec<R>,
}

impl<L, R> Default for AllFailures<L, R> {
    fn default() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

impl<L, R> EitherCollector for AllFailures<L, R> {
    type Left = L;
    type Right = R;
    type Output = Either<NonEmptyVec<L>, Vec<R>>;

    fn add(&mut self, item: Either<L, R>) {
        match item {
            Either::Left(value) => {
                if self.left.is_empty() {
                    self.right = Vec::new();
                }
                self.left.push(value);
            }
            Either::Right(value) => {
                if self.left.is_empty() {
                    self.right.push(value);
                }
            }
        }
    }

    fn combine(mut self, other: Self) -> Self {
        if !self.left.is_empty() {
            self.left.extend(other.left);
            return self;
        }
        if !other.left.is_empty() {
            return other;
        }
        self.right.extend(other.right);
        self
    }

    fn has_failure(&self) -> bool {
        !self.left.is_empty()
    }

    fn finish(self) -> Either<NonEmptyVec<L>, Vec<R>> {
        match NonEmptyVec::from_vec(self.left) {
            Some(failures) => Either::Left(failures),
            None => Either::Right(self.right),
        }
    }
}

/// An empty first-failure accumulator
pub fn first_failure<L, R>() -> FirstFailure<L, R> {
    FirstFailure::default()
}

/// An empty all-failures accumulator
pub fn all_failures<L, R>() -> AllFailures<L, R> {
    AllFailures::default()
}

/// Folds `items` in chunks of `chunk_size`, then merges the partial
/// accumulators in sequence order
///
/// A `chunk_size` of zero is treated as one.
pub fn collect_chunked<C, I>(items: I, chunk_size: usize) -> C::Output
where
    C: EitherCollector,
    I: IntoIterator<Item = Either<C::Left, C::Right>>,
{
    let chunk_size = chunk_size.max(1);
    let mut partials = Vec::new();
    let mut current = C::default();
    let mut filled = 0;

    for item in items {
        current.add(item);
        filled += 1;
        if filled == chunk_size {
            partials.push(mem::take(&mut current));
            filled = 0;
        }
    }
    partials.push(current);

    partials
        .into_iter()
        .reduce(C::combine)
        .unwrap_or_default()
        .finish()
}

/// Collector shortcuts for iterators of `Either`
pub trait EitherIteratorExt<L, R>: Iterator<Item = Either<L, R>> + Sized {
    /// `Left(first failure)` or `Right(all successes in order)`
    fn collect_first_failure(self) -> Either<L, Vec<R>> {
        FirstFailure::<L, R>::collect(self)
    }

    /// `Left(every failure in order)` or `Right(all successes in order)`
    fn collect_all_failures(self) -> Either<NonEmptyVec<L>, Vec<R>> {
        AllFailures::<L, R>::collect(self)
    }
}

impl<L, R, I> EitherIteratorExt<L, R> for I where I: Iterator<Item = Either<L, R>> {}
