//! Structural adapters: keyed aggregate transformers.
//!
//! An adapter combines a field [`Specification`] - a mapping from field
//! name to a lens routed through a value transformer - with a container
//! transformer for the keyed representation itself, producing one
//! encode/decode pair for a whole aggregate.
//!
//! Encoding folds the specification into a key-to-value map, abandoning
//! the fold on the first field failure, then bridges the map to the
//! external representation. Decoding bridges back first, then folds the
//! present keys into a base instance; keys absent from the payload leave
//! the base's fields untouched (partial update).
//!
//! Self-referential adapters for recursive domain types are built with
//! [`fix`], which breaks the construction-time cycle with a
//! [`LazyAdapter`].

mod dictionary;
mod lazy;
mod specification;

pub use dictionary::{Adapter, DictionaryAdapter};
pub use lazy::{LazyAdapter, fix};
pub use specification::{FieldLens, Specification};
