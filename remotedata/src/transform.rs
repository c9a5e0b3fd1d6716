//! Combinators that turn one `RemoteData` into another.
//!
//! Every combinator here consumes its receiver and builds a new value. None of
//! them can fail: each is defined for all four variants.
use crate::RemoteData;

impl<E, A> RemoteData<E, A> {
    /// Transform both sides at once: `failure` runs on a `Failure`, `success` on a
    /// `Success`, and `NotAsked`/`Loading` pass through untouched.
    ///
    /// [`RemoteData::map`] and [`RemoteData::map_err`] are both defined in terms
    /// of this function.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let describe = |r: RemoteData<u16, &str>| r.map_both(|code| format!("http {}", code), str::len);
    ///
    /// assert_eq!(describe(RemoteData::Failure(404)), RemoteData::Failure("http 404".to_string()));
    /// assert_eq!(describe(RemoteData::Success("hello")), RemoteData::Success(5));
    /// assert_eq!(describe(RemoteData::Loading), RemoteData::Loading);
    /// ```
    pub fn map_both<C, B>(
        self,
        failure: impl FnOnce(E) -> C,
        success: impl FnOnce(A) -> B,
    ) -> RemoteData<C, B> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(data) => RemoteData::Success(success(data)),
            RemoteData::Failure(error) => RemoteData::Failure(failure(error)),
        }
    }

    /// Transform the `Success` payload with `f`. Every other variant is returned as-is.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let r: RemoteData<String, i32> = RemoteData::Success(5);
    /// assert_eq!(r.map(|x| x * 2), RemoteData::Success(10));
    /// ```
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> RemoteData<E, B> {
        self.map_both(|error| error, f)
    }

    /// Transform the `Failure` payload with `f`. Every other variant is returned as-is.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> RemoteData<F, A> {
        self.map_both(f, |data| data)
    }

    /// Chain a dependent fetch. `f` only runs on `Success`, and whatever it
    /// returns becomes the result. A `Failure` keeps its error; `NotAsked` and
    /// `Loading` pass through.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let parse = |s: &str| -> RemoteData<String, u8> {
    ///     s.parse::<u8>().map_err(|_| format!("bad number: {}", s)).into()
    /// };
    ///
    /// assert_eq!(RemoteData::Success("12").flat_map(parse), RemoteData::Success(12));
    /// assert_eq!(
    ///     RemoteData::Success("x").flat_map(parse),
    ///     RemoteData::Failure("bad number: x".to_string())
    /// );
    /// assert_eq!(RemoteData::Loading.flat_map(parse), RemoteData::Loading);
    /// ```
    pub fn flat_map<B>(self, f: impl FnOnce(A) -> RemoteData<E, B>) -> RemoteData<E, B> {
        match self {
            RemoteData::Success(data) => f(data),
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::NotAsked => RemoteData::NotAsked,
        }
    }

    /// Combine two values with `f`, keeping the leftmost non-`Success` state.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let name: RemoteData<&str, &str> = RemoteData::Success("ada");
    /// let age: RemoteData<&str, u8> = RemoteData::Success(36);
    /// assert_eq!(
    ///     RemoteData::map2(name, age, |n, a| format!("{} ({})", n, a)),
    ///     RemoteData::Success("ada (36)".to_string())
    /// );
    /// ```
    pub fn map2<B, C>(
        a: RemoteData<E, A>,
        b: RemoteData<E, B>,
        f: impl FnOnce(A, B) -> C,
    ) -> RemoteData<E, C> {
        a.map(move |a| move |b: B| f(a, b)).and_map(b)
    }

    /// Three-argument form of [`RemoteData::map2`].
    pub fn map3<B, C, D>(
        a: RemoteData<E, A>,
        b: RemoteData<E, B>,
        c: RemoteData<E, C>,
        f: impl FnOnce(A, B, C) -> D,
    ) -> RemoteData<E, D> {
        a.map(move |a| move |b: B| move |c: C| f(a, b, c))
            .and_map(b)
            .and_map(c)
    }
}

impl<E, F> RemoteData<E, F> {
    /// Apply the function held in a `Success` to the payload of `other`.
    ///
    /// The receiver takes precedence: if it is `Failure`, `Loading` or `NotAsked`,
    /// that state is the result no matter what `other` holds. Only a `Success`
    /// receiver looks at `other`, via `other.map(f)`.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let inc: RemoteData<&str, _> = RemoteData::Success(|x: i32| x + 1);
    /// assert_eq!(inc.and_map(RemoteData::Success(41)), RemoteData::Success(42));
    ///
    /// let broken: RemoteData<&str, fn(i32) -> i32> = RemoteData::Failure("first");
    /// let also_broken: RemoteData<&str, i32> = RemoteData::Failure("second");
    /// assert_eq!(broken.and_map(also_broken), RemoteData::Failure("first"));
    /// ```
    pub fn and_map<A, B>(self, other: RemoteData<E, A>) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            RemoteData::Success(f) => other.map(f),
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::NotAsked => RemoteData::NotAsked,
        }
    }
}
