//! Built-in leaf actions.
//!
//! Leaves are the terminal nodes of a tree: they read and write the actor's
//! attributes and have no children. The built-ins cover the common cases
//! (flag checks, slot writes, counters, time-based waits); anything beyond
//! them is a custom [`Node`] impl or a [`Task`]/[`Condition`] closure.
//!
//! Two of the leaves draw the line between soft and hard failure.
//! [`CheckValue`] treats a missing attribute as an ordinary `Failed`, because
//! probing a slot nothing has written yet is legitimate. [`Wait`] and
//! [`IncreaseValue`] treat a missing attribute as an [`EvalError`], because
//! they only make sense downstream of the action that initializes their slot.

use std::ops::AddAssign;

use grove_core::{Actor, AttrKey, EvalError, Node, Outcome, TickContext};

/// Attribute values that can be read as a yes/no answer.
///
/// Numbers are truthy when nonzero, strings when non-empty. Implement this
/// for domain types to make them checkable with [`CheckValue`].
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for u32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for u64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for usize {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for &'static str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// Succeeds when the attribute exists and reads as truthy, fails otherwise.
///
/// A missing slot is a plain `Failed`, not an error: checks are the guard
/// clauses of a tree and are expected to probe state that may not be there
/// yet.
pub struct CheckValue<T: 'static> {
    key: AttrKey<T>,
}

impl<T: 'static> CheckValue<T> {
    pub fn new(key: AttrKey<T>) -> Self {
        Self { key }
    }
}

impl<A, T> Node<A> for CheckValue<T>
where
    A: Actor,
    T: Truthy + Send + Sync + 'static,
{
    fn evaluate(&self, actor: &mut A, _tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        match actor.attributes().get(self.key) {
            Some(value) if value.is_truthy() => Ok(Outcome::Success),
            _ => Ok(Outcome::Failed),
        }
    }
}

/// Writes a fixed value into an attribute slot. Always succeeds.
pub struct SetValue<T: 'static> {
    key: AttrKey<T>,
    value: T,
}

impl<T: 'static> SetValue<T> {
    pub fn new(key: AttrKey<T>, value: T) -> Self {
        Self { key, value }
    }
}

impl<A, T> Node<A> for SetValue<T>
where
    A: Actor,
    T: Clone + Send + Sync + 'static,
{
    fn evaluate(&self, actor: &mut A, _tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        actor.attributes_mut().set(self.key, self.value.clone());
        Ok(Outcome::Success)
    }
}

/// Stamps the current tick time into an attribute slot. Always succeeds.
///
/// Pairs with [`Wait`]: stamp a start time in one step, wait on it in a
/// later one.
pub struct SetCurrentTime {
    key: AttrKey<f64>,
}

impl SetCurrentTime {
    pub fn new(key: AttrKey<f64>) -> Self {
        Self { key }
    }
}

impl<A: Actor> Node<A> for SetCurrentTime {
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        actor.attributes_mut().set(self.key, tick.time);
        Ok(Outcome::Success)
    }
}

/// Runs until `duration` seconds have passed since the stamped start time.
///
/// The start slot must already hold a time (see [`SetCurrentTime`]); waiting
/// on a slot nothing has stamped is a wiring error. `Success` fires on the
/// first tick where at least `duration` has elapsed, boundary included.
pub struct Wait {
    key: AttrKey<f64>,
    duration: f64,
}

impl Wait {
    pub fn new(key: AttrKey<f64>, duration: f64) -> Self {
        Self { key, duration }
    }
}

impl<A: Actor> Node<A> for Wait {
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        let start = actor
            .attributes()
            .get(self.key)
            .copied()
            .ok_or(EvalError::MissingAttribute {
                node: "Wait",
                key: self.key.id(),
            })?;
        if tick.time >= start + self.duration {
            Ok(Outcome::Success)
        } else {
            Ok(Outcome::Running)
        }
    }
}

/// Runs forever.
///
/// The usual last branch of a priority selector: when nothing above it
/// applies, the actor idles and the tree stays `Running` until the situation
/// changes.
pub struct Idle;

impl<A: Actor> Node<A> for Idle {
    fn evaluate(&self, _actor: &mut A, _tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        Ok(Outcome::Running)
    }
}

/// Adds a delta to an existing numeric attribute. Always succeeds.
///
/// The slot must already exist; incrementing a counter nothing has
/// initialized is a wiring error, not a reason to invent a zero.
pub struct IncreaseValue<T: 'static> {
    key: AttrKey<T>,
    delta: T,
}

impl<T: 'static> IncreaseValue<T> {
    /// Increment by one.
    pub fn new(key: AttrKey<T>) -> Self
    where
        T: From<u8>,
    {
        Self {
            key,
            delta: T::from(1),
        }
    }

    /// Increment by an arbitrary delta. Signed types decrement with a
    /// negative delta.
    pub fn by(key: AttrKey<T>, delta: T) -> Self {
        Self { key, delta }
    }
}

impl<A, T> Node<A> for IncreaseValue<T>
where
    A: Actor,
    T: AddAssign + Copy + Send + Sync + 'static,
{
    fn evaluate(&self, actor: &mut A, _tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        let value = actor
            .attributes_mut()
            .get_mut(self.key)
            .ok_or(EvalError::MissingAttribute {
                node: "IncreaseValue",
                key: self.key.id(),
            })?;
        *value += self.delta;
        Ok(Outcome::Success)
    }
}

/// Closure check against the actor: `Success` when it holds, `Failed` when
/// it doesn't.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<A, F> Node<A> for Condition<F>
where
    A: Actor,
    F: Fn(&A) -> bool + Send + Sync,
{
    fn evaluate(&self, actor: &mut A, _tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        if (self.cond)(actor) {
            Ok(Outcome::Success)
        } else {
            Ok(Outcome::Failed)
        }
    }
}

/// Closure leaf with full access to the actor and the tick context.
///
/// The escape hatch for one-off behaviors that don't warrant a named node
/// type. Stateless by construction; a task that needs memory between ticks
/// should be a real [`Node`] impl with a [`NodeId`].
///
/// [`NodeId`]: grove_core::NodeId
pub struct Task<F> {
    run: F,
}

impl<F> Task<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<A, F> Node<A> for Task<F>
where
    A: Actor,
    F: Fn(&mut A, &mut TickContext<'_>) -> Result<Outcome, EvalError> + Send + Sync,
{
    fn evaluate(&self, actor: &mut A, tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        (self.run)(actor, tick)
    }
}
