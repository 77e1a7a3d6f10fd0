//! `url` rule: static string literal -> checked URL construction

use crate::error::{host_contract_violation, Diagnostic, Result};
use macroforge_core::ast::{Expr, SyntaxNode};
use url::Url;

/// Expands a `url` invocation.
///
/// The argument must be a string literal made of exactly one text run, with
/// no interpolation. The shape check runs before the parse check, so a
/// non-static literal is reported as such even when its text would also
/// fail to parse.
///
/// The literal is parsed with [`url::Url`] at expansion time; on success
/// the emitted fragment re-parses the same literal at the point of use
/// through the asserted construction path, which cannot be observed to
/// fail because the parse already succeeded here.
pub fn expand(node: &SyntaxNode) -> Result<SyntaxNode> {
    let args = match node {
        SyntaxNode::Call { args, .. } => args,
        other => host_contract_violation(&format!(
            "url invoked on a {} instead of an argument list",
            other.kind()
        )),
    };
    let lit = match args.as_slice() {
        [Expr::Str(lit)] => lit,
        _ => return Err(Diagnostic::requires_static_string_literal(node.span())),
    };
    let Some(text) = lit.static_text() else {
        return Err(Diagnostic::requires_static_string_literal(lit.span));
    };

    if let Err(parse_err) = Url::parse(text) {
        tracing::debug!(literal = %lit, error = %parse_err, "rejecting url literal");
        return Err(Diagnostic::malformed_url(lit.to_string(), lit.span));
    }

    tracing::trace!(literal = %lit, "expanding url");
    Ok(SyntaxNode::Expr(Expr::UrlCtor(lit.clone())))
}

#[cfg(test)]
#[path = "static_url_tests.rs"]
mod tests;
