use grove_core::{
    Actor, AttrKey, Attributes, EvalError, Node, NodeId, NullSignalSink, Outcome, TickContext,
};
use grove_nodes::Sequence;

const SEQ: NodeId = NodeId::new(90);
const STARTED: AttrKey<bool> = AttrKey::new(10);

#[derive(Default)]
struct Rig {
    attrs: Attributes,
    evaluated: Vec<&'static str>,
}

impl Actor for Rig {
    fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }
}

struct Probe {
    name: &'static str,
    result: Outcome,
}

impl Probe {
    fn new(name: &'static str, result: Outcome) -> Self {
        Self { name, result }
    }
}

impl Node<Rig> for Probe {
    fn evaluate(&self, actor: &mut Rig, _tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        actor.evaluated.push(self.name);
        Ok(self.result)
    }
}

/// Runs on the first evaluation, succeeds on every one after, until reset.
struct StartThenFinish {
    name: &'static str,
}

impl Node<Rig> for StartThenFinish {
    fn evaluate(&self, actor: &mut Rig, _tick: &mut TickContext<'_>) -> Result<Outcome, EvalError> {
        actor.evaluated.push(self.name);
        if actor.attrs.get(STARTED).copied().unwrap_or(false) {
            Ok(Outcome::Success)
        } else {
            actor.attrs.set(STARTED, true);
            Ok(Outcome::Running)
        }
    }

    fn reset(&self, actor: &mut Rig) {
        actor.attrs.remove(STARTED);
    }
}

fn eval(node: &Sequence<Rig>, rig: &mut Rig) -> Result<Outcome, EvalError> {
    let mut signals = NullSignalSink;
    let mut ctx = TickContext::new(0, 0.0, &mut signals);
    node.evaluate(rig, &mut ctx)
}

fn cursor(rig: &Rig) -> Option<usize> {
    rig.attrs.get(SEQ.state_key::<usize>()).copied()
}

#[test]
fn failed_step_stops_the_scan() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(Probe::new("a", Outcome::Success)) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("b", Outcome::Failed)),
            Box::new(Probe::new("c", Outcome::Success)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Failed));
    assert_eq!(rig.evaluated, vec!["a", "b"]);
    assert_eq!(cursor(&rig), None);
}

#[test]
fn all_steps_succeeding_succeeds() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(Probe::new("a", Outcome::Success)) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("b", Outcome::Success)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Success));
    assert_eq!(rig.evaluated, vec!["a", "b"]);
}

#[test]
fn empty_sequence_succeeds() {
    let seq: Sequence<Rig> = Sequence::new(SEQ, Vec::new());
    let mut rig = Rig::default();
    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Success));
}

#[test]
fn resumes_at_the_running_step() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(StartThenFinish { name: "start" }) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("after", Outcome::Success)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(rig.evaluated, vec!["start"]);
    assert_eq!(cursor(&rig), Some(0));

    // The same call that finishes the step carries on to the next one.
    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Success));
    assert_eq!(rig.evaluated, vec!["start", "start", "after"]);

    // Terminal result cleared the cursor and reset the children.
    assert_eq!(cursor(&rig), None);
    assert_eq!(rig.attrs.get(STARTED), None);
}

#[test]
fn running_mid_sequence_keeps_earlier_steps_settled() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(Probe::new("a", Outcome::Success)) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("b", Outcome::Running)),
            Box::new(Probe::new("c", Outcome::Success)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(rig.evaluated, vec!["a", "b"]);
    assert_eq!(cursor(&rig), Some(1));

    // "a" is settled; the next call starts straight at "b".
    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(rig.evaluated, vec!["a", "b", "b"]);
}

#[test]
fn running_final_step_wraps_to_the_front() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(Probe::new("a", Outcome::Success)) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("b", Outcome::Running)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(cursor(&rig), Some(0));

    // A run stopped on the last step restarts from the first.
    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(rig.evaluated, vec!["a", "b", "a", "b"]);
}

#[test]
fn failure_resets_partial_progress() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(StartThenFinish { name: "start" }) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("flaky", Outcome::Failed)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Failed));
    assert_eq!(cursor(&rig), None);
    assert_eq!(rig.attrs.get(STARTED), None);

    // After the failure the sequence starts over, not mid-way.
    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(rig.evaluated, vec!["start", "start", "flaky", "start"]);
}

#[test]
fn reset_is_idempotent() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(StartThenFinish { name: "start" }) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("after", Outcome::Success)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(cursor(&rig), Some(0));

    seq.reset(&mut rig);
    assert_eq!(cursor(&rig), None);
    assert_eq!(rig.attrs.get(STARTED), None);

    seq.reset(&mut rig);
    assert_eq!(cursor(&rig), None);

    // A reset sequence starts from the first step again.
    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Running));
    assert_eq!(rig.evaluated, vec!["start", "start"]);
}

#[test]
fn error_stops_the_scan_and_propagates() {
    let seq = Sequence::new(
        SEQ,
        vec![
            Box::new(Probe::new("a", Outcome::Success)) as Box<dyn Node<Rig>>,
            Box::new(Probe::new("b", Outcome::Error)),
            Box::new(Probe::new("c", Outcome::Success)),
        ],
    );
    let mut rig = Rig::default();

    assert_eq!(eval(&seq, &mut rig), Ok(Outcome::Error));
    assert_eq!(rig.evaluated, vec!["a", "b"]);
    assert_eq!(cursor(&rig), None);
}
