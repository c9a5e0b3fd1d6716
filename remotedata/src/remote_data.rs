/// The state of some remote request that produces an `A` or fails with an `E`.
///
/// Exactly one variant is active at a time. `NotAsked` and `Loading` carry no
/// data; `Success` and `Failure` own their payloads. Combinators consume the value
/// and return a new one, so a payload is never altered after construction.
///
/// # Lifecycle
///
/// A caller usually starts from [`RemoteData::NotAsked`] (also the [`Default`]),
/// replaces it with [`RemoteData::Loading`] when the request starts, and finally
/// with [`RemoteData::Success`] or [`RemoteData::Failure`] once it resolves.
///
/// ```rust
/// # use remotedata::RemoteData;
/// let mut state: RemoteData<String, u8> = RemoteData::default();
/// assert!(state.is_not_asked());
///
/// state = RemoteData::Loading;
/// assert!(state.is_pending());
///
/// state = Ok(3).into();
/// assert_eq!(state, RemoteData::Success(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RemoteData<E, A> {
    /// no request has been made yet
    NotAsked,
    /// a request is in flight
    Loading,
    /// the request completed with `A`
    Success(A),
    /// the request completed with error `E`
    Failure(E),
}

impl<E, A> RemoteData<E, A> {
    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteData::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure(_))
    }

    /// `true` once the request has resolved, either way
    pub fn is_complete(&self) -> bool {
        self.is_success() || self.is_failure()
    }

    /// `true` while there is no outcome yet (`NotAsked` or `Loading`)
    pub fn is_pending(&self) -> bool {
        !self.is_complete()
    }

    /// Borrow the payload, producing a `RemoteData<&E, &A>` with the same variant.
    ///
    /// Useful for running combinators without giving up ownership of `self`.
    pub fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Success(data) => RemoteData::Success(data),
            RemoteData::Failure(error) => RemoteData::Failure(error),
        }
    }

    /// Eliminate a `RemoteData`, running exactly one of the four functions.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let label = |r: RemoteData<&str, u32>| {
    ///     r.fold(
    ///         || "idle".to_string(),
    ///         || "loading...".to_string(),
    ///         |e| format!("error: {}", e),
    ///         |n| format!("{} items", n),
    ///     )
    /// };
    ///
    /// assert_eq!(label(RemoteData::Loading), "loading...");
    /// assert_eq!(label(RemoteData::Success(3)), "3 items");
    /// ```
    pub fn fold<T>(
        self,
        not_asked: impl FnOnce() -> T,
        loading: impl FnOnce() -> T,
        failure: impl FnOnce(E) -> T,
        success: impl FnOnce(A) -> T,
    ) -> T {
        match self {
            RemoteData::NotAsked => not_asked(),
            RemoteData::Loading => loading(),
            RemoteData::Success(data) => success(data),
            RemoteData::Failure(error) => failure(error),
        }
    }
}

impl<E, A> Default for RemoteData<E, A> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(data) => RemoteData::Success(data),
            Err(error) => RemoteData::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RemoteData;

    fn all_variants() -> Vec<RemoteData<&'static str, i32>> {
        vec![
            RemoteData::NotAsked,
            RemoteData::Loading,
            RemoteData::Success(1),
            RemoteData::Failure("boom"),
        ]
    }

    #[test]
    fn exactly_one_predicate_holds() {
        for r in all_variants() {
            let flags = [r.is_not_asked(), r.is_loading(), r.is_success(), r.is_failure()];
            assert_eq!(flags.iter().filter(|x| **x).count(), 1, "{:?}", r);
            assert_ne!(r.is_complete(), r.is_pending());
        }
    }

    #[test]
    fn default_is_not_asked() {
        let r: RemoteData<(), ()> = RemoteData::default();
        assert_eq!(r, RemoteData::NotAsked);
    }

    #[test]
    fn from_result() {
        let ok: RemoteData<String, u8> = Ok(7).into();
        let err: RemoteData<String, u8> = Err("nope".to_string()).into();

        assert_eq!(ok, RemoteData::Success(7));
        assert_eq!(err, RemoteData::Failure("nope".to_string()));
    }

    #[test]
    fn as_ref_keeps_variant_and_owner() {
        let owned: RemoteData<String, Vec<u8>> = RemoteData::Success(vec![1, 2, 3]);
        let len = owned.as_ref().map(|v| v.len());

        assert_eq!(len, RemoteData::Success(3));
        assert_eq!(owned, RemoteData::Success(vec![1, 2, 3]));
    }

    #[test]
    fn fold_runs_one_branch() {
        let names: Vec<String> = all_variants()
            .into_iter()
            .map(|r| {
                r.fold(
                    || "not asked".to_string(),
                    || "loading".to_string(),
                    |e| format!("failure {}", e),
                    |a| format!("success {}", a),
                )
            })
            .collect();

        assert_eq!(
            names,
            vec!["not asked", "loading", "success 1", "failure boom"]
        );
    }
}
