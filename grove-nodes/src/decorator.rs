//! Decorator nodes: single-child wrappers.
//!
//! There is no decorator base type. Holding one boxed child and delegating
//! from `evaluate` is the entire pattern; a custom decorator is an ordinary
//! [`Node`] impl that does the same with its own pre/post behavior. What
//! ships here: [`Inverter`] for negating checks, [`Debounce`] for
//! rate-limiting, [`EmitOnSuccess`] for notifying the host.

use grove_core::{Actor, EvalError, Node, NodeId, Outcome, Signal, TickContext};
use grove_tools::{emit as trace_emit, TraceEvent};

/// Swaps the child's `Success` and `Failed`; everything else passes through.
pub struct Inverter<A>
where
    A: Actor,
{
    child: Box<dyn Node<A>>,
}

impl<A> Inverter<A>
where
    A: Actor,
{
    pub fn new(child: Box<dyn Node<A>>) -> Self {
        Self { child }
    }
}

impl<A> Node<A> for Inverter<A>
where
    A: Actor,
{
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        Ok(self.child.evaluate(actor, tick)?.invert())
    }

    fn reset(&self, actor: &mut A) {
        self.child.reset(actor);
    }
}

/// Rate-limits a child: after a success, attempts inside the cool-down
/// window fail without evaluating the child at all.
///
/// The last-success timestamp lives on the actor under this node's id.
/// `reset` clears the child but not the timestamp: the cool-down window
/// holds across resets and re-activations of the subtree.
pub struct Debounce<A>
where
    A: Actor,
{
    id: NodeId,
    child: Box<dyn Node<A>>,
    cool_down: f64,
}

impl<A> Debounce<A>
where
    A: Actor,
{
    pub fn new(id: NodeId, child: Box<dyn Node<A>>, cool_down: f64) -> Self {
        Self {
            id,
            child,
            cool_down,
        }
    }
}

impl<A> Node<A> for Debounce<A>
where
    A: Actor,
{
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        let key = self.id.state_key::<f64>();
        if let Some(last) = actor.attributes().get(key).copied() {
            // Boundary is part of the window: a new attempt at exactly
            // last + cool_down still fails.
            if tick.time <= last + self.cool_down {
                trace_emit(
                    actor.attributes_mut(),
                    TraceEvent::new(tick.tick, "debounce.skip").with_a(self.id.raw()),
                );
                return Ok(Outcome::Failed);
            }
        }
        let outcome = self.child.evaluate(actor, tick)?;
        if outcome == Outcome::Success {
            actor.attributes_mut().set(key, tick.time);
        }
        Ok(outcome)
    }

    fn reset(&self, actor: &mut A) {
        self.child.reset(actor);
    }
}

/// Emits a signal to the host when the child succeeds.
///
/// The child's outcome is returned unchanged; emission is a side effect of
/// `Success` and nothing else. The signal is built from the actor at the
/// moment of success, so payloads can carry fresh attribute values.
pub struct EmitOnSuccess<A, F>
where
    A: Actor,
{
    child: Box<dyn Node<A>>,
    make_signal: F,
}

impl<A, F> EmitOnSuccess<A, F>
where
    A: Actor,
{
    pub fn new(child: Box<dyn Node<A>>, make_signal: F) -> Self {
        Self { child, make_signal }
    }
}

impl<A, F> Node<A> for EmitOnSuccess<A, F>
where
    A: Actor,
    F: Fn(&A) -> Signal + Send + Sync,
{
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        let outcome = self.child.evaluate(actor, tick)?;
        if outcome == Outcome::Success {
            let signal = (self.make_signal)(actor);
            tick.emit(signal);
        }
        Ok(outcome)
    }

    fn reset(&self, actor: &mut A) {
        self.child.reset(actor);
    }
}
