//! Product combinators for lenses: `split` and `fanout`.
//!
//! These are the arrow-style `***` and `&&&` operators, expressed as
//! named functions.

use std::marker::PhantomData;

use super::lens::Lens;

/// Combines two lenses over independent sources into a lens over pairs.
///
/// Each side reads and writes its own half of the pair; the sides never
/// interact.
///
/// # Example
///
/// ```
/// use adaptics::optics::{Lens, split};
/// use adaptics::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i64 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Label { text: String }
///
/// let both = split(lens!(Counter, count), lens!(Label, text));
///
/// let pair = (Counter { count: 1 }, Label { text: "a".to_string() });
/// assert_eq!(both.get(&pair), (1, "a".to_string()));
/// ```
pub fn split<S, A, T, B, L1, L2>(left: L1, right: L2) -> SplitLens<L1, L2, S, A, T, B>
where
    L1: Lens<S, A>,
    L2: Lens<T, B>,
{
    SplitLens::new(left, right)
}

/// Two lenses applied side by side over a pair. See [`split`].
pub struct SplitLens<L1, L2, S, A, T, B> {
    left: L1,
    right: L2,
    _marker: PhantomData<fn(S, T) -> (A, B)>,
}

impl<L1, L2, S, A, T, B> SplitLens<L1, L2, S, A, T, B> {
    /// Creates a new split lens from the two sides.
    #[must_use]
    pub const fn new(left: L1, right: L2) -> Self {
        Self {
            left,
            right,
            _marker: PhantomData,
        }
    }
}

impl<L1, L2, S, A, T, B> Lens<(S, T), (A, B)> for SplitLens<L1, L2, S, A, T, B>
where
    L1: Lens<S, A>,
    L2: Lens<T, B>,
{
    fn get(&self, source: &(S, T)) -> (A, B) {
        (self.left.get(&source.0), self.right.get(&source.1))
    }

    fn set(&self, source: (S, T), value: (A, B)) -> (S, T) {
        (
            self.left.set(source.0, value.0),
            self.right.set(source.1, value.1),
        )
    }
}

impl<L1: Clone, L2: Clone, S, A, T, B> Clone for SplitLens<L1, L2, S, A, T, B> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}

/// Combines two lenses over the same source into a lens producing a pair.
///
/// `set` applies the left update first and the right update second, so
/// when the two lenses overlap on a target, the right side wins.
///
/// # Example
///
/// ```
/// use adaptics::optics::{Lens, fanout};
/// use adaptics::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let xy = fanout(lens!(Point, x), lens!(Point, y));
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(xy.get(&point), (1, 2));
/// assert_eq!(xy.set(point, (10, 20)), Point { x: 10, y: 20 });
/// ```
pub fn fanout<S, A, B, L1, L2>(left: L1, right: L2) -> FanoutLens<L1, L2, S, A, B>
where
    L1: Lens<S, A>,
    L2: Lens<S, B>,
{
    FanoutLens::new(left, right)
}

/// Two lenses over one source producing a pair. See [`fanout`].
pub struct FanoutLens<L1, L2, S, A, B> {
    left: L1,
    right: L2,
    _marker: PhantomData<fn(S) -> (A, B)>,
}

impl<L1, L2, S, A, B> FanoutLens<L1, L2, S, A, B> {
    /// Creates a new fanout lens from the two sides.
    #[must_use]
    pub const fn new(left: L1, right: L2) -> Self {
        Self {
            left,
            right,
            _marker: PhantomData,
        }
    }
}

impl<L1, L2, S, A, B> Lens<S, (A, B)> for FanoutLens<L1, L2, S, A, B>
where
    L1: Lens<S, A>,
    L2: Lens<S, B>,
{
    fn get(&self, source: &S) -> (A, B) {
        (self.left.get(source), self.right.get(source))
    }

    fn set(&self, source: S, value: (A, B)) -> S {
        // Left first, then right: on a shared target the right side wins.
        self.right.set(self.left.set(source, value.0), value.1)
    }
}

impl<L1: Clone, L2: Clone, S, A, B> Clone for FanoutLens<L1, L2, S, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}
