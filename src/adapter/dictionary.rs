//! The structural adapter over keyed dictionaries.

use std::collections::HashMap;

use super::specification::Specification;
use crate::optics::Lens;
use crate::transform::ValueTransformer;

/// A bidirectional mapping between a model type and an external data
/// representation.
///
/// `encode` carries a model to its representation; `decode` folds a
/// representation into an existing model instance, field by field. The
/// decode-into-base shape is what makes partial updates possible: keys
/// absent from the payload leave the corresponding fields of the base
/// untouched.
pub trait Adapter {
    /// The domain model type.
    type Model;
    /// The external data representation.
    type Data;
    /// The failure type of both directions.
    type Error;

    /// Encodes a model into its external representation.
    ///
    /// # Errors
    ///
    /// Returns the first field failure observed; no partial output is
    /// produced.
    fn encode(&self, model: &Self::Model) -> Result<Self::Data, Self::Error>;

    /// Decodes an external representation into an existing model.
    ///
    /// # Errors
    ///
    /// Returns a structural error when the data has the wrong shape, or
    /// the first field failure observed while folding.
    fn decode(&self, model: Self::Model, data: Self::Data) -> Result<Self::Model, Self::Error>;
}

impl<A> Adapter for Box<A>
where
    A: Adapter + ?Sized,
{
    type Model = A::Model;
    type Data = A::Data;
    type Error = A::Error;

    fn encode(&self, model: &Self::Model) -> Result<Self::Data, Self::Error> {
        (**self).encode(model)
    }

    fn decode(&self, model: Self::Model, data: Self::Data) -> Result<Self::Model, Self::Error> {
        (**self).decode(model, data)
    }
}

type DictionaryTransformer<D, E> =
    Box<dyn ValueTransformer<Value = HashMap<String, D>, Transformed = D, Error = E> + Send + Sync>;

type BaseValue<M, D, E> = Box<dyn Fn(&D) -> Result<M, E> + Send + Sync>;

/// A structural adapter built from a field [`Specification`].
///
/// The adapter owns three collaborators:
///
/// - the specification, mapping field names to lens-plus-transformer
///   accessors;
/// - a dictionary transformer converting between the intermediate
///   key-to-value map and the concrete external representation;
/// - a base-value closure supplying the instance `reverse_transform`
///   decodes into (decode updates an existing instance field by field
///   rather than constructing one from scratch).
///
/// Adapters are stateless across calls: construct once, share freely,
/// reuse for every encode and decode.
///
/// # Example
///
/// ```
/// use adaptics::adapter::{Adapter, DictionaryAdapter, Specification};
/// use adaptics::bridge;
/// use adaptics::lens;
/// use adaptics::optics::transformed;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i64 }
///
/// let adapter = DictionaryAdapter::new(
///     Specification::new()
///         .field("count", transformed(lens!(Counter, count), bridge::int64())),
///     bridge::dictionary(),
///     |_| Ok(Counter { count: 0 }),
/// );
///
/// let data = adapter.encode(&Counter { count: 1 }).unwrap();
/// assert_eq!(adapter.decode(Counter { count: 0 }, data), Ok(Counter { count: 1 }));
/// ```
pub struct DictionaryAdapter<M, D, E> {
    specification: Specification<M, D, E>,
    dictionary_transformer: DictionaryTransformer<D, E>,
    value: BaseValue<M, D, E>,
}

impl<M, D, E> DictionaryAdapter<M, D, E> {
    /// Creates an adapter from a specification, a dictionary
    /// transformer, and a base-value closure.
    pub fn new<V, F>(specification: Specification<M, D, E>, dictionary_transformer: V, value: F) -> Self
    where
        V: ValueTransformer<Value = HashMap<String, D>, Transformed = D, Error = E>
            + Send
            + Sync
            + 'static,
        F: Fn(&D) -> Result<M, E> + Send + Sync + 'static,
    {
        Self {
            specification,
            dictionary_transformer: Box::new(dictionary_transformer),
            value: Box::new(value),
        }
    }
}

impl<M, D, E> Adapter for DictionaryAdapter<M, D, E>
where
    M: Clone,
{
    type Model = M;
    type Data = D;
    type Error = E;

    fn encode(&self, model: &M) -> Result<D, E> {
        let source: Result<M, E> = Ok(model.clone());
        let mut dictionary = HashMap::with_capacity(self.specification.len());
        for (key, lens) in self.specification.iter() {
            dictionary.insert(key.to_string(), lens.get(&source)?);
        }

        self.dictionary_transformer.transform(dictionary)
    }

    fn decode(&self, model: M, data: D) -> Result<M, E> {
        let mut dictionary = self.dictionary_transformer.reverse_transform(data)?;

        let mut accumulator: Result<M, E> = Ok(model);
        for (key, lens) in self.specification.iter() {
            // Absent keys leave the accumulator untouched: decode is a
            // partial update.
            if let Some(value) = dictionary.remove(key) {
                accumulator = lens.set(accumulator, Ok(value));
                if accumulator.is_err() {
                    break;
                }
            }
        }

        accumulator
    }
}

impl<M, D, E> ValueTransformer for DictionaryAdapter<M, D, E>
where
    M: Clone,
{
    type Value = M;
    type Transformed = D;
    type Error = E;

    fn transform(&self, value: M) -> Result<D, E> {
        self.encode(&value)
    }

    fn reverse_transform(&self, value: D) -> Result<M, E> {
        let base = (self.value)(&value)?;
        self.decode(base, value)
    }
}

impl<M, D, E> std::fmt::Debug for DictionaryAdapter<M, D, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DictionaryAdapter")
            .field("specification", &self.specification)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;
    use crate::optics::transformed;
    use crate::transform::FunctionTransformer;

    #[derive(Clone, PartialEq, Debug)]
    struct Counter {
        count: i64,
    }

    // A minimal keyed representation: either a scalar or a map.
    #[derive(Clone, PartialEq, Debug)]
    enum Data {
        Number(i64),
        Map(HashMap<String, Data>),
    }

    fn number() -> impl ValueTransformer<Value = i64, Transformed = Data, Error = String> {
        FunctionTransformer::new(
            |value: i64| Ok(Data::Number(value)),
            |data: Data| match data {
                Data::Number(value) => Ok(value),
                Data::Map(_) => Err("expected a number".to_string()),
            },
        )
    }

    fn map() -> impl ValueTransformer<Value = HashMap<String, Data>, Transformed = Data, Error = String>
    {
        FunctionTransformer::new(
            |value: HashMap<String, Data>| Ok(Data::Map(value)),
            |data: Data| match data {
                Data::Map(value) => Ok(value),
                Data::Number(_) => Err("expected a map".to_string()),
            },
        )
    }

    fn adapter() -> DictionaryAdapter<Counter, Data, String> {
        DictionaryAdapter::new(
            Specification::new().field("count", transformed(lens!(Counter, count), number())),
            map(),
            |_| Ok(Counter { count: 0 }),
        )
    }

    #[test]
    fn test_encode() {
        let data = adapter().encode(&Counter { count: 1 }).unwrap();
        let expected: HashMap<String, Data> =
            [("count".to_string(), Data::Number(1))].into_iter().collect();
        assert_eq!(data, Data::Map(expected));
    }

    #[test]
    fn test_decode() {
        let payload: HashMap<String, Data> =
            [("count".to_string(), Data::Number(3))].into_iter().collect();
        let decoded = adapter().decode(Counter { count: 0 }, Data::Map(payload));
        assert_eq!(decoded, Ok(Counter { count: 3 }));
    }

    #[test]
    fn test_decode_empty_payload_leaves_base() {
        let decoded = adapter().decode(Counter { count: 0 }, Data::Map(HashMap::new()));
        assert_eq!(decoded, Ok(Counter { count: 0 }));
    }

    #[test]
    fn test_decode_wrong_shape() {
        let decoded = adapter().decode(Counter { count: 0 }, Data::Number(1));
        assert_eq!(decoded, Err("expected a map".to_string()));
    }

    #[test]
    fn test_transformer_view_uses_base_value() {
        let payload: HashMap<String, Data> =
            [("count".to_string(), Data::Number(9))].into_iter().collect();
        assert_eq!(
            adapter().reverse_transform(Data::Map(payload)),
            Ok(Counter { count: 9 }),
        );
    }
}
