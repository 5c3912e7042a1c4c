//! Deferred adapters and the fixpoint combinator.
//!
//! A recursive domain type (a tree node holding children of its own
//! type) needs an adapter that references itself. Constructing such an
//! adapter directly would recurse forever at construction time, so the
//! self-reference is routed through [`LazyAdapter`]: a deferred cell
//! whose thunk is only evaluated when a value actually flows through the
//! recursive field. [`fix`] ties the knot.

use std::sync::{Arc, OnceLock};

use super::dictionary::Adapter;
use crate::transform::ValueTransformer;

/// An adapter resolved on first use.
///
/// Wraps a thunk producing the underlying adapter and forwards both the
/// [`Adapter`] and [`ValueTransformer`] contracts to the thunk's result.
/// The result is memoized in a `OnceLock`, so concurrent first use from
/// several threads evaluates the thunk once; this is safe because
/// adapters are referentially transparent.
pub struct LazyAdapter<A> {
    thunk: Arc<dyn Fn() -> A + Send + Sync>,
    cell: OnceLock<A>,
}

impl<A> LazyAdapter<A> {
    /// Creates a lazy adapter from a thunk.
    ///
    /// The thunk is not invoked until the first `encode`, `decode`,
    /// `transform`, or `reverse_transform` call.
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        Self {
            thunk: Arc::new(thunk),
            cell: OnceLock::new(),
        }
    }

    /// Resolves the underlying adapter, evaluating the thunk on first
    /// use.
    pub fn force(&self) -> &A {
        self.cell.get_or_init(|| (self.thunk)())
    }
}

impl<A> Clone for LazyAdapter<A> {
    /// Clones share the thunk but not the memo cell; the clone resolves
    /// independently on its own first use.
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
            cell: OnceLock::new(),
        }
    }
}

impl<A> std::fmt::Debug for LazyAdapter<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LazyAdapter")
            .field("resolved", &self.cell.get().is_some())
            .finish_non_exhaustive()
    }
}

impl<A> Adapter for LazyAdapter<A>
where
    A: Adapter,
{
    type Model = A::Model;
    type Data = A::Data;
    type Error = A::Error;

    fn encode(&self, model: &Self::Model) -> Result<Self::Data, Self::Error> {
        self.force().encode(model)
    }

    fn decode(&self, model: Self::Model, data: Self::Data) -> Result<Self::Model, Self::Error> {
        self.force().decode(model, data)
    }
}

impl<A> ValueTransformer for LazyAdapter<A>
where
    A: ValueTransformer,
{
    type Value = A::Value;
    type Transformed = A::Transformed;
    type Error = A::Error;

    fn transform(&self, value: Self::Value) -> Result<Self::Transformed, Self::Error> {
        self.force().transform(value)
    }

    fn reverse_transform(&self, value: Self::Transformed) -> Result<Self::Value, Self::Error> {
        self.force().reverse_transform(value)
    }
}

/// The fixpoint combinator for self-referential adapters.
///
/// `fix(f)` hands `f` a lazy reference to the adapter being built and
/// returns the adapter `f` constructs with it. The lazy reference only
/// re-enters `fix` when a value flows through it, so construction
/// terminates even though the adapter logically contains itself;
/// recursion depth during encode and decode is bounded by the depth of
/// the value, not by the adapter graph.
///
/// # Example
///
/// ```
/// use adaptics::adapter::{Adapter, DictionaryAdapter, LazyAdapter, Specification, fix};
/// use adaptics::bridge::{self, AnyValue, BridgeError};
/// use adaptics::lens;
/// use adaptics::optics::transformed;
/// use adaptics::transform::{ValueTransformer, sequence};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Node { children: Vec<Node> }
///
/// type NodeAdapter = DictionaryAdapter<Node, AnyValue, BridgeError>;
///
/// let adapter = fix(|adapter: LazyAdapter<NodeAdapter>| {
///     DictionaryAdapter::new(
///         Specification::new().field(
///             "children",
///             transformed(lens!(Node, children), sequence(adapter).compose(bridge::array())),
///         ),
///         bridge::dictionary(),
///         |_| Ok(Node { children: vec![] }),
///     )
/// });
///
/// let tree = Node {
///     children: vec![Node { children: vec![] }, Node { children: vec![] }],
/// };
///
/// let data = adapter.encode(&tree).unwrap();
/// assert_eq!(adapter.decode(Node { children: vec![] }, data), Ok(tree));
/// ```
pub fn fix<A, F>(f: F) -> A
where
    F: Fn(LazyAdapter<A>) -> A + Clone + Send + Sync + 'static,
    A: 'static,
{
    let rest = f.clone();
    f(LazyAdapter::new(move || fix(rest.clone())))
}
