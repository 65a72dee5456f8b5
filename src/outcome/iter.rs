use crate::outcome::core::{Outcome, Repr};

impl<V, E, P> Outcome<V, E, P> {
    /// Iterates over the value: one item for a value-holding outcome, none otherwise.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&V> {
        self.value_opt().into_iter()
    }

    /// Iterates mutably over the value.
    #[inline]
    pub fn iter_mut(&mut self) -> core::option::IntoIter<&mut V> {
        match &mut self.repr {
            Repr::Value(value) => Some(value).into_iter(),
            Repr::Error(_) => None.into_iter(),
        }
    }
}

impl<V, E, P> IntoIterator for Outcome<V, E, P> {
    type Item = V;
    type IntoIter = core::option::IntoIter<V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, V, E, P> IntoIterator for &'a Outcome<V, E, P> {
    type Item = &'a V;
    type IntoIter = core::option::IntoIter<&'a V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects an iterator of outcomes, stopping at the first error.
///
/// # Examples
///
/// ```
/// use terminus_outcome::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.value(), &vec![1, 2]);
///
/// let first_error: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("bad"), Outcome::failure("worse")]
///         .into_iter()
///         .collect();
/// assert_eq!(*first_error.error(), "bad");
/// ```
impl<V, E, P, C> FromIterator<Outcome<V, E, P>> for Outcome<C, E, P>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E, P>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome.repr {
                Repr::Value(value) => Some(value),
                Repr::Error(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::failure(error),
            None => Outcome::success(collected),
        }
    }
}
