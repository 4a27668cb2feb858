//! Selector nodes: multi-child combinators.
//!
//! [`Concurrent`] evaluates all of its children in one pass and folds their
//! outcomes. [`Priority`] and [`Sequence`] are resumable scans over the same
//! machinery with opposite polarity: a priority stops at the first child
//! that is not a dead end, a sequence stops at the first child that is. Both
//! persist their scan position on the actor while a child is `Running`, so
//! the next call continues where this one stopped instead of re-running
//! settled children. Declared child order is the behavior; there is no
//! priority weight other than position.

use grove_core::{Actor, EvalError, Node, NodeId, Outcome, TickContext};
use grove_tools::{emit as trace_emit, TraceEvent};

/// Evaluates every child in one pass, stopping early only at the failure
/// threshold.
///
/// "Concurrent" means one synchronous pass over all children within the
/// tick, not threads. Reaching `num_fail` failed children fails the node
/// immediately and the rest of the pass is skipped; whatever the already
/// evaluated children wrote stays written. If the pass completes, all
/// children succeeding is a `Success`, anything abnormal (`Error`, `Ready`)
/// propagates, and otherwise the node is `Running`.
pub struct Concurrent<A>
where
    A: Actor,
{
    children: Vec<Box<dyn Node<A>>>,
    num_fail: usize,
}

impl<A> Concurrent<A>
where
    A: Actor,
{
    /// Failure threshold defaults to 1: the first failed child fails the
    /// node.
    pub fn new(children: Vec<Box<dyn Node<A>>>) -> Self {
        Self {
            children,
            num_fail: 1,
        }
    }

    /// Number of failed children that fails the whole node. A threshold of
    /// zero fails before evaluating anything.
    pub fn with_num_fail(mut self, num_fail: usize) -> Self {
        self.num_fail = num_fail;
        self
    }
}

impl<A> Node<A> for Concurrent<A>
where
    A: Actor,
{
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        if self.num_fail == 0 {
            return Ok(Outcome::Failed);
        }
        let mut failed = 0;
        let mut abnormal = None;
        let mut all_success = true;
        for child in &self.children {
            match child.evaluate(actor, tick)? {
                Outcome::Success => {}
                Outcome::Failed => {
                    all_success = false;
                    failed += 1;
                    if failed >= self.num_fail {
                        return Ok(Outcome::Failed);
                    }
                }
                Outcome::Running => {
                    all_success = false;
                }
                other => {
                    all_success = false;
                    if abnormal.is_none() {
                        abnormal = Some(other);
                    }
                }
            }
        }
        if let Some(outcome) = abnormal {
            return Ok(outcome);
        }
        if all_success {
            Ok(Outcome::Success)
        } else {
            Ok(Outcome::Running)
        }
    }

    fn reset(&self, actor: &mut A) {
        for child in &self.children {
            child.reset(actor);
        }
    }
}

/// Scan `children` from the persisted resume position. The first outcome in
/// `stop_states` decides the result; a scan that runs out of children yields
/// `final_state`.
///
/// The resume position lives on the actor under the selector's id. It is
/// persisted only for a `Running` result and removed otherwise, and a scan
/// whose last evaluated child was the final one wraps the position back to
/// the front, stop or no stop, so a selector never resumes past its own
/// end.
fn scan<A>(
    id: NodeId,
    children: &[Box<dyn Node<A>>],
    stop_states: &[Outcome],
    final_state: Outcome,
    actor: &mut A,
    tick: &mut TickContext<'_>,
) -> Result<Outcome, EvalError>
where
    A: Actor,
{
    if children.is_empty() {
        return Ok(final_state);
    }

    let key = id.state_key::<usize>();
    let mut start = actor.attributes().get(key).copied().unwrap_or(0);
    if start >= children.len() {
        start = 0;
    }
    if start > 0 {
        trace_emit(
            actor.attributes_mut(),
            TraceEvent::new(tick.tick, "selector.resume")
                .with_a(id.raw())
                .with_b(start as u64),
        );
    }

    let mut result = final_state;
    let mut at = start;
    for (i, child) in children.iter().enumerate().skip(start) {
        at = i;
        let outcome = child.evaluate(actor, tick)?;
        if stop_states.contains(&outcome) {
            result = outcome;
            break;
        }
    }

    if at == children.len() - 1 {
        at = 0;
    }

    if result == Outcome::Running {
        actor.attributes_mut().set(key, at);
    } else {
        actor.attributes_mut().remove(key);
    }
    Ok(result)
}

fn reset_children<A>(id: NodeId, children: &[Box<dyn Node<A>>], actor: &mut A)
where
    A: Actor,
{
    for child in children {
        child.reset(actor);
    }
    actor.attributes_mut().remove(id.state_key::<usize>());
}

/// Tries children in order and takes the first that is not a dead end.
///
/// A `Failed` child means "this option doesn't apply, try the next"; any
/// other outcome settles the node. When every option is a dead end the
/// priority itself fails. A `Running` branch holds the selector: the next
/// call resumes at that branch without re-checking the ones before it.
/// The exception is a `Running` branch in the last position, where the
/// wrap rule in [`scan`] re-scans from the front and higher-priority
/// branches get to preempt the idling one.
pub struct Priority<A>
where
    A: Actor,
{
    id: NodeId,
    children: Vec<Box<dyn Node<A>>>,
}

impl<A> Priority<A>
where
    A: Actor,
{
    const STOP_STATES: &'static [Outcome] = &[
        Outcome::Success,
        Outcome::Running,
        Outcome::Error,
        Outcome::Ready,
    ];

    pub fn new(id: NodeId, children: Vec<Box<dyn Node<A>>>) -> Self {
        Self { id, children }
    }
}

impl<A> Node<A> for Priority<A>
where
    A: Actor,
{
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        let outcome = scan(
            self.id,
            &self.children,
            Self::STOP_STATES,
            Outcome::Failed,
            actor,
            tick,
        )?;
        if outcome != Outcome::Running {
            self.reset(actor);
        }
        Ok(outcome)
    }

    fn reset(&self, actor: &mut A) {
        reset_children(self.id, &self.children, actor);
    }
}

/// Runs children in order for as long as they succeed.
///
/// A `Failed` child fails the sequence at that step; running out of children
/// means every step succeeded. A `Running` step holds the sequence and the
/// next call resumes at that step, with one caveat from the wrap rule in
/// [`scan`]: a step that is still `Running` in the final position restarts
/// the sequence from the first step on the next call. Steps that must not
/// re-run belong before the waits, not after them.
pub struct Sequence<A>
where
    A: Actor,
{
    id: NodeId,
    children: Vec<Box<dyn Node<A>>>,
}

impl<A> Sequence<A>
where
    A: Actor,
{
    const STOP_STATES: &'static [Outcome] = &[
        Outcome::Failed,
        Outcome::Running,
        Outcome::Error,
        Outcome::Ready,
    ];

    pub fn new(id: NodeId, children: Vec<Box<dyn Node<A>>>) -> Self {
        Self { id, children }
    }
}

impl<A> Node<A> for Sequence<A>
where
    A: Actor,
{
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        let outcome = scan(
            self.id,
            &self.children,
            Self::STOP_STATES,
            Outcome::Success,
            actor,
            tick,
        )?;
        if outcome != Outcome::Running {
            self.reset(actor);
        }
        Ok(outcome)
    }

    fn reset(&self, actor: &mut A) {
        reset_children(self.id, &self.children, actor);
    }
}
