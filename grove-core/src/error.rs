use thiserror::Error;

/// Hard failure raised during a tree walk.
///
/// This is the other side of the line from [`Outcome::Failed`]: a `Failed`
/// outcome is a behavior not working out and is part of normal control flow,
/// while an `EvalError` means the tree itself is wired wrong, for example an
/// action that requires an attribute nothing has initialized. Walks abort on
/// the first hard error and leave no partial continuation state behind for
/// the aborted call.
///
/// [`Outcome::Failed`]: crate::Outcome::Failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A node needs an attribute that is missing from the actor, and the
    /// node's contract treats that as a wiring bug rather than a `Failed`.
    #[error("{node} requires attribute id={key}, which is missing on the actor")]
    MissingAttribute {
        /// Name of the node type that raised the error.
        node: &'static str,
        /// Raw id of the missing attribute key.
        key: u64,
    },
}
