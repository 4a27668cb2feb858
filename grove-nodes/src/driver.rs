//! The per-tick entry point.

use grove_core::{Actor, EvalError, Node, NodeId, Outcome, TickContext};
use grove_tools::{emit as trace_emit, TraceEvent};

/// A built behavior tree plus its tick entry point.
///
/// The tree owns its root and nothing else; every piece of evaluation state,
/// including the outcome of the last walk, is stored on the actor under this
/// tree's id. One `Tree` value therefore serves any number of actors, each
/// with an independent notion of "where was I".
///
/// [`Tree::tick`] is the only way a host is meant to evaluate a tree: it
/// guarantees that a tree whose previous walk resolved starts its next
/// activation from scratch, while a `Running` tree resumes untouched.
pub struct Tree<A>
where
    A: Actor,
{
    id: NodeId,
    root: Box<dyn Node<A>>,
}

impl<A> Tree<A>
where
    A: Actor,
{
    pub fn new(id: NodeId, root: Box<dyn Node<A>>) -> Self {
        Self { id, root }
    }

    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Evaluate the tree once for this actor.
    ///
    /// If the previous walk resolved (anything but `Running`), the whole
    /// tree is reset for this actor first. A hard error aborts the walk and
    /// leaves the stored outcome as it was.
    pub fn tick(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        let key = self.id.state_key::<Outcome>();
        let last = actor.attributes().get(key).copied().unwrap_or_default();
        if last != Outcome::Running {
            self.root.reset(actor);
        }

        let outcome = self.root.evaluate(actor, tick)?;
        actor.attributes_mut().set(key, outcome);

        let tag = match outcome {
            Outcome::Ready => "tree.ready",
            Outcome::Success => "tree.success",
            Outcome::Running => "tree.running",
            Outcome::Failed => "tree.failed",
            Outcome::Error => "tree.error",
        };
        trace_emit(
            actor.attributes_mut(),
            TraceEvent::new(tick.tick, tag).with_a(self.id.raw()),
        );

        Ok(outcome)
    }

    /// Outcome of the most recent completed walk for this actor, or `Ready`
    /// if no walk has completed.
    pub fn last_outcome(&self, actor: &A) -> Outcome {
        actor
            .attributes()
            .get(self.id.state_key::<Outcome>())
            .copied()
            .unwrap_or_default()
    }

    /// Drop all per-actor state below this tree, including the stored
    /// outcome. The next [`Tree::tick`] behaves like the first ever.
    pub fn reset(&self, actor: &mut A) {
        self.root.reset(actor);
        actor.attributes_mut().remove(self.id.state_key::<Outcome>());
    }
}
