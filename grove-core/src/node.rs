use crate::actor::Actor;
use crate::attrs::AttrKey;
use crate::error::EvalError;
use crate::outcome::Outcome;
use crate::tick::TickContext;

/// Stable identity of a stateful node.
///
/// Nodes that keep per-actor state (the resumable selectors, debounce, the
/// tree driver) are given an id at construction and store that state on the
/// actor under [`NodeId::state_key`]. Ids share the attribute id space, so a
/// tree author keeps node ids and domain attribute ids from colliding the
/// same way they keep two attribute ids apart: by picking distinct numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Attribute key under which a node with this id keeps per-actor state
    /// of type `T`.
    pub const fn state_key<T: 'static>(self) -> AttrKey<T> {
        AttrKey::new(self.0)
    }
}

/// One node of a behavior tree.
///
/// `evaluate` does the node's work for one actor on one tick and reports an
/// [`Outcome`]; contract violations abort the walk with an [`EvalError`]
/// instead. Nodes take `&self`: a tree is immutable once built and shared
/// across actors, so everything a node remembers between ticks goes in the
/// actor's attribute store, not in the node.
///
/// `reset` clears whatever per-actor state the node keeps, recursively for
/// nodes with children. It must be idempotent; the engine calls it both when
/// a subtree resolves and, from the driver, before re-activating a resolved
/// tree. The default is the correct no-op for stateless nodes.
pub trait Node<A: Actor>: Send + Sync {
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError>;

    fn reset(&self, _actor: &mut A) {}
}

impl<A: Actor> Node<A> for Box<dyn Node<A>> {
    #[inline]
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        (**self).evaluate(actor, tick)
    }

    #[inline]
    fn reset(&self, actor: &mut A) {
        (**self).reset(actor)
    }
}
