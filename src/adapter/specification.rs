//! Field specifications for structural adapters.

use std::collections::BTreeMap;

use crate::optics::Lens;

/// The lens shape a specification entry stores: focused on one field,
/// lifted over `Result`, with the field already carried to its
/// transformed representation.
pub type FieldLens<M, D, E> = Box<dyn Lens<Result<M, E>, Result<D, E>> + Send + Sync>;

/// A mapping from field name to a lens-plus-transformer accessor.
///
/// A specification declares, field by field, how a model of type `M`
/// corresponds to keys holding data of type `D`. Each entry is a lens
/// over `Result`-wrapped values - typically built with
/// [`transformed`](crate::optics::transformed) - so structural failures
/// flow through uniformly with codec failures.
///
/// Keys are unique; inserting a key twice replaces the earlier entry.
/// Entries are folded in a fixed but unspecified order; callers must not
/// rely on it.
///
/// # Example
///
/// ```
/// use adaptics::adapter::Specification;
/// use adaptics::bridge::{self, AnyValue, BridgeError};
/// use adaptics::lens;
/// use adaptics::optics::transformed;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { count: i64 }
///
/// let specification: Specification<Counter, AnyValue, BridgeError> =
///     Specification::new()
///         .field("count", transformed(lens!(Counter, count), bridge::int64()));
///
/// assert_eq!(specification.len(), 1);
/// ```
pub struct Specification<M, D, E> {
    fields: BTreeMap<String, FieldLens<M, D, E>>,
}

impl<M, D, E> Specification<M, D, E> {
    /// Creates an empty specification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field entry, consuming and returning the specification so
    /// declarations read as a chain.
    #[must_use]
    pub fn field<L>(mut self, key: impl Into<String>, lens: L) -> Self
    where
        L: Lens<Result<M, E>, Result<D, E>> + Send + Sync + 'static,
    {
        self.fields.insert(key.into(), Box::new(lens));
        self
    }

    /// Iterates the entries in fold order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldLens<M, D, E>)> {
        self.fields.iter().map(|(key, lens)| (key.as_str(), lens))
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<M, D, E> Default for Specification<M, D, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, D, E> std::fmt::Debug for Specification<M, D, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Specification")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;
    use crate::optics::lift_result;

    #[derive(Clone, PartialEq, Debug)]
    struct Pair {
        first: i64,
        second: i64,
    }

    #[test]
    fn test_duplicate_key_replaces_entry() {
        let specification: Specification<Pair, i64, String> = Specification::new()
            .field("value", lift_result(lens!(Pair, first)))
            .field("value", lift_result(lens!(Pair, second)));

        assert_eq!(specification.len(), 1);

        let (_, lens) = specification.iter().next().unwrap();
        let source = Ok(Pair {
            first: 1,
            second: 2,
        });
        assert_eq!(lens.get(&source), Ok(2));
    }

    #[test]
    fn test_iteration_order_is_deterministic() {
        let specification: Specification<Pair, i64, String> = Specification::new()
            .field("b", lift_result(lens!(Pair, second)))
            .field("a", lift_result(lens!(Pair, first)));

        let keys: Vec<_> = specification.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
