use crate::outcome::core::{Outcome, Repr};

/// Combinators.
///
/// Every combinator consumes `self` and invokes at most one callback, chosen by
/// the discriminant at the moment of the call. The callback's result fixes the
/// discriminant of the new outcome; nothing is re-checked afterwards.
impl<V, E, P> Outcome<V, E, P> {
    /// Transforms the value, passing an error through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let a = Outcome::<i32, String>::success(42);
    /// assert_eq!(a.map(|x| x + 1), Outcome::success(43));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E, P>
    where
        F: FnOnce(V) -> U,
    {
        match self.repr {
            Repr::Value(value) => Outcome::success(f(value)),
            Repr::Error(error) => Outcome::failure(error),
        }
    }

    /// Transforms the error, passing a value through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<i32, u16>::failure(404);
    /// let mapped = outcome.map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(mapped.error(), "HTTP 404");
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, g: F) -> Outcome<V, G, P>
    where
        F: FnOnce(E) -> G,
    {
        match self.repr {
            Repr::Value(value) => Outcome::success(value),
            Repr::Error(error) => Outcome::failure(g(error)),
        }
    }

    /// Chains a fallible step. An error short-circuits and `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// fn halve(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(halve).and_then(halve), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).and_then(halve).and_then(halve), Outcome::failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E, P>
    where
        F: FnOnce(V) -> Outcome<U, E, P>,
    {
        match self.repr {
            Repr::Value(value) => f(value),
            Repr::Error(error) => Outcome::failure(error),
        }
    }

    /// Recovers from or translates an error. A value passes through and `h` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::failure("cache miss");
    /// let recovered: Outcome<i32, String> = outcome.or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered.value_or(-1), 0);
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, h: F) -> Outcome<V, G, P>
    where
        F: FnOnce(E) -> Outcome<V, G, P>,
    {
        match self.repr {
            Repr::Value(value) => Outcome::success(value),
            Repr::Error(error) => h(error),
        }
    }

    /// Transforms whichever side is held.
    #[inline]
    pub fn map_both<U, G, F, H>(self, on_value: F, on_error: H) -> Outcome<U, G, P>
    where
        F: FnOnce(V) -> U,
        H: FnOnce(E) -> G,
    {
        match self.repr {
            Repr::Value(value) => Outcome::success(on_value(value)),
            Repr::Error(error) => Outcome::failure(on_error(error)),
        }
    }

    /// Applies `f` to the value, or returns `default` for an error.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(V) -> U,
    {
        match self.repr {
            Repr::Value(value) => f(value),
            Repr::Error(_) => default,
        }
    }

    /// Folds both sides into a single value.
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_error: D, on_value: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(V) -> U,
    {
        match self.repr {
            Repr::Value(value) => on_value(value),
            Repr::Error(error) => on_error(error),
        }
    }

    /// Calls `f` with a reference to the value, if any.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Repr::Value(value) = &self.repr {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error, if any.
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Repr::Error(error) = &self.repr {
            f(error);
        }
        self
    }

    /// Returns `next` if a value is held, otherwise this outcome's error.
    #[inline]
    pub fn and<U>(self, next: Outcome<U, E, P>) -> Outcome<U, E, P> {
        match self.repr {
            Repr::Value(_) => next,
            Repr::Error(error) => Outcome::failure(error),
        }
    }

    /// Returns this outcome if it holds a value, otherwise `fallback`.
    #[inline]
    pub fn or<G>(self, fallback: Outcome<V, G, P>) -> Outcome<V, G, P> {
        match self.repr {
            Repr::Value(value) => Outcome::success(value),
            Repr::Error(_) => fallback,
        }
    }

    /// Rebuilds the outcome under another access policy.
    ///
    /// The held side and payload are moved as-is; only the contract applied
    /// to later accesses changes.
    #[inline]
    pub fn into_policy<Q>(self) -> Outcome<V, E, Q> {
        Outcome::from_repr(self.repr)
    }

    /// Converting move into wider payload types, preserving the populated side.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminus_outcome::Outcome;
    ///
    /// let narrow = Outcome::<u8, &str>::success(7);
    /// let wide: Outcome<u32, String> = narrow.convert();
    /// assert_eq!(*wide.value(), 7u32);
    /// ```
    #[inline]
    pub fn convert<V2, E2>(self) -> Outcome<V2, E2, P>
    where
        V2: From<V>,
        E2: From<E>,
    {
        self.map_both(V2::from, E2::from)
    }
}

impl<V, E, P> Outcome<Outcome<V, E, P>, E, P> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<V, E, P> {
        self.and_then(|inner| inner)
    }
}

impl<V: Clone, E: Clone, P> Outcome<&V, &E, P> {
    /// Clones the borrowed payload into an owned outcome.
    #[inline]
    pub fn cloned(self) -> Outcome<V, E, P> {
        self.map_both(V::clone, E::clone)
    }
}
