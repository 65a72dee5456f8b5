//! Equality, ordering and hashing.
//!
//! Two outcomes are equal when both hold equal values or both hold equal
//! errors; a value-holding outcome never equals an error-holding one.
//! Ordering is lexicographic on `(side, payload)` with every value-holding
//! outcome ordered before every error-holding one.
use crate::outcome::core::Outcome;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

impl<V: PartialEq, E: PartialEq, P> PartialEq for Outcome<V, E, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<V: Eq, E: Eq, P> Eq for Outcome<V, E, P> {}

impl<V: PartialOrd, E: PartialOrd, P> PartialOrd for Outcome<V, E, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.repr.partial_cmp(&other.repr)
    }
}

impl<V: Ord, E: Ord, P> Ord for Outcome<V, E, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl<V: Hash, E: Hash, P> Hash for Outcome<V, E, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}
