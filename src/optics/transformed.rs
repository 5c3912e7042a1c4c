//! Lifting a lens through a value transformer.
//!
//! `transformed` turns a lens focused on a field of type `B` into a lens
//! whose part is the transformed representation `C`, routing reads
//! through `transform` and writes through `reverse_transform`. The
//! resulting lens operates over `Result`-wrapped values so that
//! structural failures and codec failures flow through uniformly; it is
//! the shape a [`Specification`](crate::adapter::Specification) entry
//! wants.

use std::marker::PhantomData;

use super::lens::Lens;
use super::lifted::{ResultLens, lift_result};
use crate::transform::ValueTransformer;

/// Lifts a plain field lens through a value transformer.
///
/// Produces a `Lens<Result<S, E>, Result<C, E>>` where `C` is the
/// transformed representation of the field. Reading applies the
/// transformer's forward direction after the getter; writing applies the
/// reverse direction before the setter. Any failure short-circuits and
/// surfaces unchanged.
///
/// # Example
///
/// ```
/// use adaptics::lens;
/// use adaptics::optics::{Lens, transformed};
/// use adaptics::transform::FunctionTransformer;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i64 }
///
/// let stringly = FunctionTransformer::new(
///     |value: i64| Ok::<_, String>(value.to_string()),
///     |text: String| text.parse::<i64>().map_err(|e| e.to_string()),
/// );
///
/// let lens = transformed(lens!(Counter, count), stringly);
///
/// assert_eq!(lens.get(&Ok(Counter { count: 7 })), Ok("7".to_string()));
///
/// let updated = lens.set(Ok(Counter { count: 0 }), Ok("41".to_string()));
/// assert_eq!(updated, Ok(Counter { count: 41 }));
/// ```
pub fn transformed<S, L, V>(
    lens: L,
    transformer: V,
) -> TransformedLens<ResultLens<L, S, V::Value, V::Error>, V, Result<S, V::Error>>
where
    L: Lens<S, V::Value>,
    V: ValueTransformer,
    V::Error: Clone,
{
    TransformedLens::new(lift_result(lens), transformer)
}

/// Lifts an already `Result`-lifted lens through a value transformer.
///
/// Use this when the lens has been through [`lift_result`] (or is itself
/// a `TransformedLens`) and a further codec stage should be appended.
pub fn transformed_lifted<RS, L, V>(lens: L, transformer: V) -> TransformedLens<L, V, RS>
where
    L: Lens<RS, Result<V::Value, V::Error>>,
    V: ValueTransformer,
{
    TransformedLens::new(lens, transformer)
}

/// A lens whose part is the transformed representation of the focused
/// field. See [`transformed`].
pub struct TransformedLens<L, V, RS> {
    lens: L,
    transformer: V,
    _marker: PhantomData<fn(RS)>,
}

impl<L, V, RS> TransformedLens<L, V, RS> {
    /// Combines a `Result`-lifted lens with a value transformer.
    #[must_use]
    pub const fn new(lens: L, transformer: V) -> Self {
        Self {
            lens,
            transformer,
            _marker: PhantomData,
        }
    }
}

impl<L, V, RS> Lens<RS, Result<V::Transformed, V::Error>> for TransformedLens<L, V, RS>
where
    L: Lens<RS, Result<V::Value, V::Error>>,
    V: ValueTransformer,
{
    fn get(&self, source: &RS) -> Result<V::Transformed, V::Error> {
        self.lens
            .get(source)
            .and_then(|value| self.transformer.transform(value))
    }

    fn set(&self, source: RS, value: Result<V::Transformed, V::Error>) -> RS {
        let reversed = value.and_then(|transformed| self.transformer.reverse_transform(transformed));
        self.lens.set(source, reversed)
    }
}

impl<L: Clone, V: Clone, RS> Clone for TransformedLens<L, V, RS> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.transformer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;
    use crate::transform::FunctionTransformer;

    #[derive(Clone, PartialEq, Debug)]
    struct Counter {
        count: i64,
    }

    fn stringly() -> impl ValueTransformer<Value = i64, Transformed = String, Error = String> {
        FunctionTransformer::new(
            |value: i64| Ok(value.to_string()),
            |text: String| text.parse::<i64>().map_err(|error| error.to_string()),
        )
    }

    #[test]
    fn test_get_applies_forward_transform() {
        let lens = transformed(lens!(Counter, count), stringly());
        assert_eq!(lens.get(&Ok(Counter { count: 7 })), Ok("7".to_string()));
    }

    #[test]
    fn test_set_applies_reverse_transform() {
        let lens = transformed(lens!(Counter, count), stringly());
        let updated = lens.set(Ok(Counter { count: 0 }), Ok("41".to_string()));
        assert_eq!(updated, Ok(Counter { count: 41 }));
    }

    #[test]
    fn test_reverse_failure_surfaces_unchanged() {
        let lens = transformed(lens!(Counter, count), stringly());
        let updated = lens.set(Ok(Counter { count: 0 }), Ok("not a number".to_string()));
        assert!(updated.is_err());
    }

    #[test]
    fn test_failed_container_passes_through_get() {
        let lens = transformed(lens!(Counter, count), stringly());
        assert_eq!(lens.get(&Err("upstream".to_string())), Err("upstream".to_string()));
    }
}
