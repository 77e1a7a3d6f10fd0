//! `stringify` rule: expression -> (value, source text) pair

use crate::error::host_contract_violation;
use macroforge_core::ast::{Expr, StringLit, SyntaxNode};

/// Expands a `stringify` invocation.
///
/// `stringify(x + y)` becomes `(x + y, "x + y")`: the argument expression
/// unchanged, paired with a string literal holding the exact text the
/// author wrote, comments and whitespace included.
///
/// The host guarantees a single argument; any other arity aborts as a
/// host-contract violation.
pub fn expand(node: &SyntaxNode) -> SyntaxNode {
    let args = match node {
        SyntaxNode::Call { args, .. } => args,
        other => host_contract_violation(&format!(
            "stringify invoked on a {} instead of an argument list",
            other.kind()
        )),
    };
    let arg = match args.as_slice() {
        [arg] => arg,
        _ => host_contract_violation(&format!(
            "stringify invoked with {} arguments, expected exactly one",
            args.len()
        )),
    };

    tracing::trace!(source = %arg.source_text(), "expanding stringify");

    let text = StringLit::text(arg.source_text());
    SyntaxNode::Expr(Expr::Tuple(vec![arg.clone(), Expr::Str(text)]))
}

#[cfg(test)]
#[path = "stringify_tests.rs"]
mod tests;
