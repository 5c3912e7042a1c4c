//! Lens lifts over `Option`, `Result`, and sequences.
//!
//! A lens on `S` can be lifted to operate on containers of `S`, so that
//! structural conditions (an absent value, an earlier failure, a batch of
//! values) compose with ordinary field access. The `Result` lift is the
//! backbone of the structural adapter: it lets a field failure flow
//! through the same lens that reads and writes the field.

use std::marker::PhantomData;

use super::lens::Lens;

/// Lifts a lens to operate over `Option`-wrapped sources.
///
/// `get` is `None` when the whole is absent and the original accessor
/// otherwise. `set` on an absent whole stays absent; setting an absent
/// part leaves the whole unchanged.
///
/// # Example
///
/// ```
/// use adaptics::optics::{Lens, lift_option};
/// use adaptics::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i64 }
///
/// let lens = lift_option(lens!(Counter, count));
///
/// assert_eq!(lens.get(&Some(Counter { count: 3 })), Some(3));
/// assert_eq!(lens.get(&None), None);
/// ```
pub fn lift_option<S, A, L>(lens: L) -> OptionLens<L, S, A>
where
    L: Lens<S, A>,
{
    OptionLens::new(lens)
}

/// A lens lifted over `Option`. See [`lift_option`].
pub struct OptionLens<L, S, A> {
    inner: L,
    _marker: PhantomData<fn(S) -> A>,
}

impl<L, S, A> OptionLens<L, S, A> {
    /// Wraps a lens for use over `Option`-wrapped sources.
    #[must_use]
    pub const fn new(inner: L) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Lens<Option<S>, Option<A>> for OptionLens<L, S, A>
where
    L: Lens<S, A>,
{
    fn get(&self, source: &Option<S>) -> Option<A> {
        source.as_ref().map(|whole| self.inner.get(whole))
    }

    fn set(&self, source: Option<S>, value: Option<A>) -> Option<S> {
        match (source, value) {
            (Some(whole), Some(part)) => Some(self.inner.set(whole, part)),
            (source, _) => source,
        }
    }
}

impl<L: Clone, S, A> Clone for OptionLens<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

/// Lifts a lens to operate over `Result`-wrapped sources.
///
/// `get` maps the success payload through the original getter and passes
/// a failure through unchanged. `set` requires both the container and the
/// incoming value to be successes; otherwise the first failure observed
/// propagates, with a container failure taking precedence over a value
/// failure.
///
/// # Example
///
/// ```
/// use adaptics::optics::{Lens, lift_result};
/// use adaptics::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i64 }
///
/// let lens = lift_result::<_, _, _, String>(lens!(Counter, count));
///
/// assert_eq!(lens.get(&Ok(Counter { count: 3 })), Ok(3));
/// assert_eq!(lens.get(&Err("boom".to_string())), Err("boom".to_string()));
///
/// let updated = lens.set(Ok(Counter { count: 0 }), Ok(5));
/// assert_eq!(updated, Ok(Counter { count: 5 }));
/// ```
pub fn lift_result<S, A, L, E>(lens: L) -> ResultLens<L, S, A, E>
where
    L: Lens<S, A>,
    E: Clone,
{
    ResultLens::new(lens)
}

/// A lens lifted over `Result`. See [`lift_result`].
pub struct ResultLens<L, S, A, E> {
    inner: L,
    _marker: PhantomData<fn(S, E) -> A>,
}

impl<L, S, A, E> ResultLens<L, S, A, E> {
    /// Wraps a lens for use over `Result`-wrapped sources.
    #[must_use]
    pub const fn new(inner: L) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A, E> Lens<Result<S, E>, Result<A, E>> for ResultLens<L, S, A, E>
where
    L: Lens<S, A>,
    E: Clone,
{
    fn get(&self, source: &Result<S, E>) -> Result<A, E> {
        match source {
            Ok(whole) => Ok(self.inner.get(whole)),
            Err(error) => Err(error.clone()),
        }
    }

    fn set(&self, source: Result<S, E>, value: Result<A, E>) -> Result<S, E> {
        source.and_then(|whole| value.map(|part| self.inner.set(whole, part)))
    }
}

impl<L: Clone, S, A, E> Clone for ResultLens<L, S, A, E> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

/// Lifts a lens to operate pairwise over sequences.
///
/// `get` maps every element through the original getter. `set` zips the
/// sources with the incoming parts and truncates to the shorter of the
/// two sequences; a length mismatch is not an error. The truncation is
/// long-standing documented behavior, kept as-is.
///
/// # Example
///
/// ```
/// use adaptics::optics::{Lens, lift_sequence};
/// use adaptics::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i64 }
///
/// let lens = lift_sequence(lens!(Counter, count));
///
/// let counters = vec![Counter { count: 1 }, Counter { count: 2 }];
/// assert_eq!(lens.get(&counters), vec![1, 2]);
///
/// let updated = lens.set(counters, vec![10, 20, 30]);
/// assert_eq!(updated, vec![Counter { count: 10 }, Counter { count: 20 }]);
/// ```
pub fn lift_sequence<S, A, L>(lens: L) -> SequenceLens<L, S, A>
where
    L: Lens<S, A>,
{
    SequenceLens::new(lens)
}

/// A lens lifted pairwise over `Vec`. See [`lift_sequence`].
pub struct SequenceLens<L, S, A> {
    inner: L,
    _marker: PhantomData<fn(S) -> A>,
}

impl<L, S, A> SequenceLens<L, S, A> {
    /// Wraps a lens for pairwise use over sequences.
    #[must_use]
    pub const fn new(inner: L) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Lens<Vec<S>, Vec<A>> for SequenceLens<L, S, A>
where
    L: Lens<S, A>,
{
    fn get(&self, source: &Vec<S>) -> Vec<A> {
        source.iter().map(|whole| self.inner.get(whole)).collect()
    }

    fn set(&self, source: Vec<S>, value: Vec<A>) -> Vec<S> {
        // Truncates to the shorter side on length mismatch.
        source
            .into_iter()
            .zip(value)
            .map(|(whole, part)| self.inner.set(whole, part))
            .collect()
    }
}

impl<L: Clone, S, A> Clone for SequenceLens<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;

    #[derive(Clone, PartialEq, Debug)]
    struct Counter {
        count: i64,
    }

    #[test]
    fn test_option_lens_absent_whole() {
        let lens = lift_option(lens!(Counter, count));
        assert_eq!(lens.get(&None), None);
        assert_eq!(lens.set(None, Some(3)), None);
    }

    #[test]
    fn test_option_lens_absent_part_leaves_whole() {
        let lens = lift_option(lens!(Counter, count));
        let whole = Some(Counter { count: 4 });
        assert_eq!(lens.set(whole, None), Some(Counter { count: 4 }));
    }

    #[test]
    fn test_result_lens_container_failure_takes_precedence() {
        let lens = lift_result::<_, _, _, &str>(lens!(Counter, count));
        let updated = lens.set(Err("container"), Err("value"));
        assert_eq!(updated, Err("container"));
    }

    #[test]
    fn test_result_lens_value_failure_propagates() {
        let lens = lift_result::<_, _, _, &str>(lens!(Counter, count));
        let updated = lens.set(Ok(Counter { count: 0 }), Err("value"));
        assert_eq!(updated, Err("value"));
    }

    #[test]
    fn test_sequence_lens_truncates_to_shorter() {
        let lens = lift_sequence(lens!(Counter, count));
        let counters = vec![Counter { count: 1 }, Counter { count: 2 }];

        let shorter = lens.set(counters.clone(), vec![9]);
        assert_eq!(shorter, vec![Counter { count: 9 }]);

        let longer = lens.set(counters, vec![7, 8, 9]);
        assert_eq!(longer, vec![Counter { count: 7 }, Counter { count: 8 }]);
    }
}
