//! Transformer lifts over `Option` and sequences.

use super::transformer::ValueTransformer;

/// Lifts a transformer over `Option`, substituting a default for absence.
///
/// An absent input transforms to `default`; reverse-transforming a value
/// equal to `default` yields `None`. This requires equality on the
/// transformed representation, which is a real constraint: the lift is
/// only available when `Transformed: PartialEq`.
///
/// The lift is deliberately lossy: a present value that happens to
/// transform to the default will reverse to `None`.
///
/// # Example
///
/// ```
/// use adaptics::transform::{FunctionTransformer, ValueTransformer, with_default};
///
/// let identity = FunctionTransformer::new(
///     |value: i64| Ok::<_, String>(value),
///     |value: i64| Ok::<_, String>(value),
/// );
///
/// let defaulted = with_default(identity, 0);
/// assert_eq!(defaulted.transform(None), Ok(0));
/// assert_eq!(defaulted.transform(Some(7)), Ok(7));
/// assert_eq!(defaulted.reverse_transform(0), Ok(None));
/// assert_eq!(defaulted.reverse_transform(7), Ok(Some(7)));
/// ```
pub fn with_default<V>(transformer: V, default: V::Transformed) -> OptionTransformer<V>
where
    V: ValueTransformer,
    V::Transformed: Clone + PartialEq,
{
    OptionTransformer::new(transformer, default)
}

/// A transformer lifted over `Option` with a default transformed value.
/// See [`with_default`].
pub struct OptionTransformer<V>
where
    V: ValueTransformer,
{
    inner: V,
    default: V::Transformed,
}

impl<V> Clone for OptionTransformer<V>
where
    V: ValueTransformer + Clone,
    V::Transformed: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            default: self.default.clone(),
        }
    }
}

impl<V> std::fmt::Debug for OptionTransformer<V>
where
    V: ValueTransformer,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionTransformer")
            .finish_non_exhaustive()
    }
}

impl<V> OptionTransformer<V>
where
    V: ValueTransformer,
{
    /// Wraps a transformer, mapping absence to `default`.
    #[must_use]
    pub const fn new(inner: V, default: V::Transformed) -> Self {
        Self { inner, default }
    }
}

impl<V> ValueTransformer for OptionTransformer<V>
where
    V: ValueTransformer,
    V::Transformed: Clone + PartialEq,
{
    type Value = Option<V::Value>;
    type Transformed = V::Transformed;
    type Error = V::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        match value {
            Some(value) => self.inner.transform(value),
            None => Ok(self.default.clone()),
        }
    }

    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        if value == self.default {
            Ok(None)
        } else {
            self.inner.reverse_transform(value).map(Some)
        }
    }
}

/// Lifts a transformer element-wise over sequences.
///
/// Both directions apply the inner transformer to every element and
/// short-circuit on the first element failure: the sequence operation
/// fails with that element's own error and no partial output is
/// returned.
///
/// # Example
///
/// ```
/// use adaptics::transform::{FunctionTransformer, ValueTransformer, sequence};
///
/// let stringly = FunctionTransformer::new(
///     |value: i64| Ok::<_, String>(value.to_string()),
///     |text: String| text.parse::<i64>().map_err(|e| e.to_string()),
/// );
///
/// let elements = sequence(stringly);
/// assert_eq!(
///     elements.transform(vec![1, 2]),
///     Ok(vec!["1".to_string(), "2".to_string()]),
/// );
/// assert!(elements
///     .reverse_transform(vec!["1".to_string(), "oops".to_string()])
///     .is_err());
/// ```
pub fn sequence<V>(transformer: V) -> SequenceTransformer<V>
where
    V: ValueTransformer,
{
    SequenceTransformer::new(transformer)
}

/// A transformer lifted element-wise over `Vec`. See [`sequence`].
#[derive(Clone, Debug)]
pub struct SequenceTransformer<V> {
    inner: V,
}

impl<V> SequenceTransformer<V> {
    /// Wraps a transformer for element-wise use over sequences.
    #[must_use]
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> ValueTransformer for SequenceTransformer<V>
where
    V: ValueTransformer,
{
    type Value = Vec<V::Value>;
    type Transformed = Vec<V::Transformed>;
    type Error = V::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        value
            .into_iter()
            .map(|element| self.inner.transform(element))
            .collect()
    }

    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        value
            .into_iter()
            .map(|element| self.inner.reverse_transform(element))
            .collect()
    }
}
