// Copyright 2025 Cowboy AI, LLC.

//! Formal vocabulary for nouns and the guards that inspect them.
//!
//! Data carriers are marked with [`ValueObject`]; they hold structure only.
//! Behaviour lives elsewhere: combining operations in [`crate::algebra`] and
//! boolean tests in [`Specification`] implementations, which serve as the
//! trailing guard of a type-test match (see [`crate::matching`]).

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

/// Root trait for all domain concepts
pub trait DomainConcept: Send + Sync + 'static {}

/// Value Objects are immutable and compared by value
///
/// # Properties
/// - Immutable after creation
/// - No identity beyond their attributes
/// - Compared and hashed by structural equality
pub trait ValueObject: DomainConcept + Clone + PartialEq + Eq + Hash + Debug {}

/// Reusable guard over a bound value.
pub trait Specification<T>: DomainConcept {
    /// Whether `candidate` passes the guard
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Require both guards; `other` only runs when `self` passes
    fn and<S>(self, other: S) -> Both<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Both(self, other)
    }
}

/// Conjunction of two guards, built by [`Specification::and`].
#[derive(Debug, Clone, Copy)]
pub struct Both<L, R>(L, R);

impl<L: DomainConcept, R: DomainConcept> DomainConcept for Both<L, R> {}

impl<T, L, R> Specification<T> for Both<L, R>
where
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) && self.1.is_satisfied_by(candidate)
    }
}

/// Lifts a predicate closure into a [`Specification`].
pub struct Guard<T, F> {
    predicate: F,
    _target: PhantomData<fn(&T)>,
}

impl<T, F> Guard<T, F>
where
    F: Fn(&T) -> bool,
{
    /// Wrap a predicate
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            _target: PhantomData,
        }
    }
}

impl<T, F> DomainConcept for Guard<T, F>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
}

impl<T, F> Specification<T> for Guard<T, F>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.predicate)(candidate)
    }
}
