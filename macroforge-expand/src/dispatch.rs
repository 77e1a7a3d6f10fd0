//! Routes invocations to their transformation rule

use crate::error::Diagnostic;
use crate::{instance_counted, static_url, stringify};
use macroforge_core::ast::SyntaxNode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of transformation rules.
///
/// A sum type dispatched through one exhaustive `match`, not an open
/// registry: the rule set is fixed, and the compiler checks completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    Stringify,
    StaticUrl,
    InstanceCounted,
}

/// The host asked for a rule name outside the closed set.
///
/// Rejected at the name-parse boundary, before dispatch; the dispatcher
/// itself never sees an unknown rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for RuleId {
    type Err = UnknownRule;

    fn from_str(name: &str) -> std::result::Result<Self, UnknownRule> {
        match name {
            "Stringify" => Ok(RuleId::Stringify),
            "StaticURL" => Ok(RuleId::StaticUrl),
            "InstanceCounted" => Ok(RuleId::InstanceCounted),
            other => Err(UnknownRule(other.to_string())),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleId::Stringify => "Stringify",
            RuleId::StaticUrl => "StaticURL",
            RuleId::InstanceCounted => "InstanceCounted",
        };
        f.write_str(name)
    }
}

/// Outcome of one expansion: a fragment for the host to splice in place of
/// the invocation site, or a diagnostic for it to surface.
pub type ExpansionResult = std::result::Result<SyntaxNode, Diagnostic>;

/// Expands one invocation site.
///
/// Pure routing: forwards the node to the selected rule and returns the
/// rule's outcome unchanged. Each call is independent; the engine keeps no
/// state between expansions.
pub fn expand(rule: RuleId, node: &SyntaxNode) -> ExpansionResult {
    tracing::debug!(%rule, input = node.kind(), "dispatching expansion");
    match rule {
        RuleId::Stringify => Ok(stringify::expand(node)),
        RuleId::StaticUrl => static_url::expand(node),
        RuleId::InstanceCounted => Ok(instance_counted::expand(node)),
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
