//! Getting plain values back out of a `RemoteData`.
//!
//! Prefer [`RemoteData::get_or_else`], [`RemoteData::get_or_else_with`] or a
//! `match` over [`RemoteData::get_or_none`]: an `Option` forgets which of the
//! three other states the value was in.
use crate::RemoteData;

impl<E, A> RemoteData<E, A> {
    /// `Some` with the payload of a `Success`, `None` for every other variant.
    pub fn get_or_none(self) -> Option<A> {
        match self {
            RemoteData::Success(data) => Some(data),
            _ => None,
        }
    }

    /// The payload of a `Success`, or `default` otherwise.
    ///
    /// `default` is evaluated before the call; use
    /// [`RemoteData::get_or_else_with`] when it is expensive to build.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let loading: RemoteData<(), &str> = RemoteData::Loading;
    /// assert_eq!(loading.get_or_else("placeholder"), "placeholder");
    /// ```
    pub fn get_or_else(self, default: A) -> A {
        self.get_or_none().unwrap_or(default)
    }

    /// The payload of a `Success`, or the result of calling `default` otherwise.
    ///
    /// `default` is never called on `Success`, and called exactly once in every
    /// other case.
    ///
    /// ```rust
    /// # use remotedata::RemoteData;
    /// let ready: RemoteData<(), Vec<u8>> = RemoteData::Success(vec![1]);
    /// let fallback = ready.get_or_else_with(|| unreachable!("not evaluated on success"));
    /// assert_eq!(fallback, vec![1]);
    /// ```
    pub fn get_or_else_with(self, default: impl FnOnce() -> A) -> A {
        match self {
            RemoteData::Success(data) => data,
            _ => default(),
        }
    }

    /// `Some` with the payload of a `Failure`, `None` for every other variant.
    pub fn error(self) -> Option<E> {
        match self {
            RemoteData::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// The outcome as a `Result`, or `None` while the request has not completed.
    pub fn into_result(self) -> Option<Result<A, E>> {
        match self {
            RemoteData::Success(data) => Some(Ok(data)),
            RemoteData::Failure(error) => Some(Err(error)),
            RemoteData::Loading | RemoteData::NotAsked => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RemoteData;
    use std::cell::Cell;

    type R = RemoteData<&'static str, u32>;

    #[test]
    fn get_or_none() {
        assert_eq!(R::Success(4).get_or_none(), Some(4));
        assert_eq!(R::Failure("e").get_or_none(), None);
        assert_eq!(R::Loading.get_or_none(), None);
        assert_eq!(R::NotAsked.get_or_none(), None);
    }

    #[test]
    fn get_or_else_eager() {
        assert_eq!(R::Success(4).get_or_else(0), 4);
        assert_eq!(R::Failure("e").get_or_else(0), 0);
        assert_eq!(R::Loading.get_or_else(0), 0);
        assert_eq!(R::NotAsked.get_or_else(0), 0);
    }

    #[test]
    fn get_or_else_with_is_lazy() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            99
        };

        assert_eq!(R::Success(4).get_or_else_with(supplier), 4);
        assert_eq!(calls.get(), 0);

        for r in [R::Failure("e"), R::Loading, R::NotAsked] {
            calls.set(0);
            assert_eq!(r.get_or_else_with(supplier), 99);
            assert_eq!(calls.get(), 1);
        }
    }

    #[test]
    fn error_and_into_result() {
        assert_eq!(R::Failure("e").error(), Some("e"));
        assert_eq!(R::Success(1).error(), None);

        assert_eq!(R::Success(1).into_result(), Some(Ok(1)));
        assert_eq!(R::Failure("e").into_result(), Some(Err("e")));
        assert_eq!(R::Loading.into_result(), None);
        assert_eq!(R::NotAsked.into_result(), None);
    }
}
