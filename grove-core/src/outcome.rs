#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of evaluating a node for one actor on one tick.
///
/// Outcomes are plain values: nodes report them, combinators fold them, and
/// nothing here carries a payload. `Running` is the one outcome with memory
/// attached to it: a node that reports `Running` expects to be evaluated
/// again next tick, and the resumable selectors persist their position so
/// that the re-evaluation picks up where it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Not evaluated yet. The built-in combinators never produce this; it is
    /// the initial marker for "no walk has resolved here".
    #[default]
    Ready,
    /// The unit of work completed on this tick.
    Success,
    /// Work is in progress; evaluate again next tick.
    Running,
    /// The unit of work did not complete. No retry is implied.
    Failed,
    /// Abnormal but recoverable condition, reserved for custom nodes.
    Error,
}

impl Outcome {
    #[inline]
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    #[inline]
    pub fn is_running(self) -> bool {
        self == Outcome::Running
    }

    #[inline]
    pub fn is_failed(self) -> bool {
        self == Outcome::Failed
    }

    /// Swap `Success` and `Failed`; every other outcome is returned as is.
    #[inline]
    pub fn invert(self) -> Outcome {
        match self {
            Outcome::Success => Outcome::Failed,
            Outcome::Failed => Outcome::Success,
            other => other,
        }
    }
}
