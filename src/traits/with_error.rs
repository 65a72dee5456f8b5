use crate::Outcome;

/// Abstraction over types that carry an error variant which can be remapped.
///
/// Implemented for both `Result` and [`Outcome`], so generic code (and the
/// [`attempt!`](crate::attempt) macro) can accept either.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use terminus_outcome::traits::WithError;
/// use terminus_outcome::Outcome;
///
/// let result: Result<i32, &str> = Err("read failed");
/// let mapped = result.fmap_error(|e| format!("Error: {}", e));
/// assert_eq!(mapped, Err("Error: read failed".to_string()));
///
/// let outcome = Outcome::<i32, u32>::failure(404);
/// assert_eq!(outcome.to_result(), Err(404));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// This operation leaves the success case untouched and only transforms the error.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into a `Result`.
    ///
    /// For types that are already `Result`, this is a no-op.
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> Result<Self::Success, E> {
        self
    }
}

impl<V, E, P> WithError<E> for Outcome<V, E, P> {
    type Success = V;
    type ErrorOutput<G> = Outcome<V, G, P>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_error(f)
    }

    #[inline]
    fn to_result(self) -> Result<Self::Success, E> {
        self.into_result()
    }
}
