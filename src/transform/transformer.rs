//! The value-transformer trait and its core combinators.

use std::marker::PhantomData;

/// A bidirectional, possibly-failing conversion between two
/// representations.
///
/// A value transformer is a pair of pure functions: `transform` carries a
/// `Value` to its `Transformed` representation and `reverse_transform`
/// carries it back. Either direction may fail with `Error`.
///
/// No law requires exact round-tripping - lossy, defaulting transformers
/// are legal - but a transformer must be consistent: a value produced by
/// a successful `transform` must not make `reverse_transform` fail for a
/// transformer that claims reversibility.
///
/// # Example
///
/// ```
/// use adaptics::transform::{FunctionTransformer, ValueTransformer};
///
/// let stringly = FunctionTransformer::new(
///     |value: i64| Ok::<_, String>(value.to_string()),
///     |text: String| text.parse::<i64>().map_err(|e| e.to_string()),
/// );
///
/// assert_eq!(stringly.transform(1), Ok("1".to_string()));
/// assert_eq!(stringly.reverse_transform("2".to_string()), Ok(2));
/// assert!(stringly.reverse_transform("2.5".to_string()).is_err());
/// ```
pub trait ValueTransformer {
    /// The domain-side representation.
    type Value;
    /// The external-side representation.
    type Transformed;
    /// The failure type of both directions.
    type Error;

    /// Carries a value to its transformed representation.
    ///
    /// # Errors
    ///
    /// Returns the transformer's error when the value cannot be
    /// converted.
    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error>;

    /// Carries a transformed representation back to a value.
    ///
    /// # Errors
    ///
    /// Returns the transformer's error when the representation has the
    /// wrong shape or cannot be converted back.
    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error>;

    /// Swaps the two directions of this transformer.
    ///
    /// # Example
    ///
    /// ```
    /// use adaptics::transform::{FunctionTransformer, ValueTransformer};
    ///
    /// let stringly = FunctionTransformer::new(
    ///     |value: i64| Ok::<_, String>(value.to_string()),
    ///     |text: String| text.parse::<i64>().map_err(|e| e.to_string()),
    /// );
    ///
    /// let parsed = stringly.flip();
    /// assert_eq!(parsed.transform("3".to_string()), Ok(3));
    /// assert_eq!(parsed.reverse_transform(4), Ok("4".to_string()));
    /// ```
    fn flip(self) -> Flipped<Self>
    where
        Self: Sized,
    {
        Flipped::new(self)
    }

    /// Chains this transformer with another whose domain is this
    /// transformer's codomain.
    ///
    /// The forward direction runs this transformer first, then `other`;
    /// the reverse direction runs `other` first, then this transformer.
    /// The first failing stage short-circuits the pipeline.
    fn compose<V>(self, other: V) -> Composed<Self, V>
    where
        Self: Sized,
        V: ValueTransformer<Value = Self::Transformed, Error = Self::Error>,
    {
        Composed::new(self, other)
    }
}

impl<V> ValueTransformer for Box<V>
where
    V: ValueTransformer + ?Sized,
{
    type Value = V::Value;
    type Transformed = V::Transformed;
    type Error = V::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        (**self).transform(value)
    }

    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        (**self).reverse_transform(value)
    }
}

/// A value transformer implemented from a closure pair.
///
/// # Type Parameters
///
/// - `A`: The domain-side representation
/// - `B`: The external-side representation
/// - `E`: The failure type
/// - `F`: The forward closure type
/// - `R`: The reverse closure type
pub struct FunctionTransformer<A, B, E, F, R>
where
    F: Fn(A) -> Result<B, E>,
    R: Fn(B) -> Result<A, E>,
{
    forward: F,
    reverse: R,
    _marker: PhantomData<fn(A, E) -> B>,
}

impl<A, B, E, F, R> FunctionTransformer<A, B, E, F, R>
where
    F: Fn(A) -> Result<B, E>,
    R: Fn(B) -> Result<A, E>,
{
    /// Creates a new transformer from a forward and a reverse closure.
    #[must_use]
    pub const fn new(forward: F, reverse: R) -> Self {
        Self {
            forward,
            reverse,
            _marker: PhantomData,
        }
    }
}

impl<A, B, E, F, R> ValueTransformer for FunctionTransformer<A, B, E, F, R>
where
    F: Fn(A) -> Result<B, E>,
    R: Fn(B) -> Result<A, E>,
{
    type Value = A;
    type Transformed = B;
    type Error = E;

    fn transform(&self, value: A) -> Result<B, E> {
        (self.forward)(value)
    }

    fn reverse_transform(&self, value: B) -> Result<A, E> {
        (self.reverse)(value)
    }
}

impl<A, B, E, F, R> Clone for FunctionTransformer<A, B, E, F, R>
where
    F: Fn(A) -> Result<B, E> + Clone,
    R: Fn(B) -> Result<A, E> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            reverse: self.reverse.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, B, E, F, R> std::fmt::Debug for FunctionTransformer<A, B, E, F, R>
where
    F: Fn(A) -> Result<B, E>,
    R: Fn(B) -> Result<A, E>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionTransformer")
            .finish_non_exhaustive()
    }
}

/// A transformer with its two directions exchanged. See
/// [`ValueTransformer::flip`].
#[derive(Clone, Debug)]
pub struct Flipped<V> {
    inner: V,
}

impl<V> Flipped<V> {
    /// Wraps a transformer with its directions exchanged.
    #[must_use]
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> ValueTransformer for Flipped<V>
where
    V: ValueTransformer,
{
    type Value = V::Transformed;
    type Transformed = V::Value;
    type Error = V::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        self.inner.reverse_transform(value)
    }

    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        self.inner.transform(value)
    }
}

/// Two transformers chained end to end. See
/// [`ValueTransformer::compose`].
#[derive(Clone, Debug)]
pub struct Composed<V1, V2> {
    first: V1,
    second: V2,
}

impl<V1, V2> Composed<V1, V2> {
    /// Chains two transformers; `first` runs first in the forward
    /// direction.
    #[must_use]
    pub const fn new(first: V1, second: V2) -> Self {
        Self { first, second }
    }
}

impl<V1, V2> ValueTransformer for Composed<V1, V2>
where
    V1: ValueTransformer,
    V2: ValueTransformer<Value = V1::Transformed, Error = V1::Error>,
{
    type Value = V1::Value;
    type Transformed = V2::Transformed;
    type Error = V1::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        self.first
            .transform(value)
            .and_then(|intermediate| self.second.transform(intermediate))
    }

    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        self.second
            .reverse_transform(value)
            .and_then(|intermediate| self.first.reverse_transform(intermediate))
    }
}
