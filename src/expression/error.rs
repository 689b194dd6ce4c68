/// Compilation of a postfix expression failed.
///
/// Deliberately carries no position or reason: an unknown token, a missing
/// operand and leftover tokens all report the same error. The reason is
/// emitted as a `tracing` debug event at the failure site.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("parse error in expression")]
pub struct ExprError;
