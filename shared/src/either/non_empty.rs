//! A list that always holds at least one element

use std::ops::Deref;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A `Vec` guaranteed to contain at least one element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T>(Vec<T>);

impl<T> NonEmptyVec<T> {
    /// Creates a list holding a single element
    pub fn new(first: T) -> Self {
        Self(vec![first])
    }

    /// Wraps `values`, returning `None` when it is empty
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self(values))
        }
    }

    /// The first element, which always exists
    pub fn head(&self) -> &T {
        &self.0[0]
    }

    /// The last element, which always exists
    pub fn last_item(&self) -> &T {
        &self.0[self.0.len() - 1]
    }

    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    /// Appends every element of `other`, keeping order
    pub fn append(&mut self, other: NonEmptyVec<T>) {
        self.0.extend(other.0);
    }

    /// Applies `function` to every element
    pub fn map<U, F>(self, function: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec(self.0.into_iter().map(function).collect())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(values: NonEmptyVec<T>) -> Self {
        values.0
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Serialize> Serialize for NonEmptyVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Self::from_vec(values).ok_or_else(|| de::Error::custom("expected at least one element"))
    }
}

/// Returns `None` for an empty list, otherwise the list as a [`NonEmptyVec`]
///
/// Pairs with [`Either::filter`](super::Either::filter): a list of problems
/// becomes the failure only when there is at least one.
pub fn optional_list<T>(values: Vec<T>) -> Option<NonEmptyVec<T>> {
    NonEmptyVec::from_vec(values)
}

/// Collects any iterator into an optional [`NonEmptyVec`]
pub trait NonEmptyIteratorExt: Iterator + Sized {
    fn to_optional_list(self) -> Option<NonEmptyVec<Self::Item>> {
        optional_list(self.collect())
    }
}

impl<I: Iterator> NonEmptyIteratorExt for I {}
