//! State record contract: a state type plus its partial update.

use std::fmt::Debug;

/// A pipeline state record.
///
/// `Update` is what a node returns: the subset of fields it writes. `merge` consumes the
/// current state and returns the next one; fields missing from the update keep their
/// current value and no field is ever removed.
///
/// # Example
///
/// ```rust
/// use agentry::graph::StateSchema;
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { label: String, count: u32 }
///
/// #[derive(Debug, Default)]
/// struct CounterUpdate { count: Option<u32> }
///
/// impl StateSchema for Counter {
///     type Update = CounterUpdate;
///     fn merge(self, update: CounterUpdate) -> Self {
///         Counter { count: update.count.unwrap_or(self.count), ..self }
///     }
/// }
///
/// let s = Counter { label: "a".into(), count: 1 }.merge(CounterUpdate { count: Some(2) });
/// assert_eq!((s.label.as_str(), s.count), ("a", 2));
/// ```
pub trait StateSchema: Clone + Send + Sync + Debug + 'static {
    /// Partial update produced by one node.
    type Update: Debug + Send + 'static;

    /// Applies `update` by whole-field replacement and returns the new state.
    fn merge(self, update: Self::Update) -> Self;
}
