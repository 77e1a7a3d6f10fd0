//! `counted` rule: adds an instance counter to a type's member list

use crate::error::host_contract_violation;
use macroforge_core::ast::{
    Expr, Field, Initializer, Member, MemberGroup, Param, Stmt, SyntaxNode,
};

const COUNT_NAME: &str = "count";
const COUNT_TYPE: &str = "Int";

/// Expands a `counted` attribute on a type's member list.
///
/// Emits additions only; the host merges them with the untouched original
/// members. The additions are a zero-initialized `count` field followed by
/// one replacement for every initializer in the group, each gaining a
/// trailing `count: Int` parameter and a trailing `self.count = count`
/// assignment. Original parameters, body statements, and initializer order
/// are preserved exactly.
///
/// A group with no initializers yields no additions.
pub fn expand(node: &SyntaxNode) -> SyntaxNode {
    let group = match node {
        SyntaxNode::Members(group) => group,
        other => host_contract_violation(&format!(
            "counted invoked on a {} instead of a member group",
            other.kind()
        )),
    };

    let initializers: Vec<&Initializer> = group.initializers().collect();
    if initializers.is_empty() {
        return SyntaxNode::Members(MemberGroup::empty());
    }

    tracing::debug!(initializers = initializers.len(), "expanding counted members");

    let mut members = Vec::with_capacity(initializers.len() + 1);
    members.push(Member::Field(Field {
        name: COUNT_NAME.to_string(),
        ty: COUNT_TYPE.to_string(),
        mutable: true,
        init: Some(Expr::raw("0")),
    }));
    members.extend(
        initializers
            .into_iter()
            .map(|init| Member::Init(with_counter(init))),
    );

    SyntaxNode::Members(MemberGroup::new(members))
}

/// Builds the replacement for one initializer: the original plus the
/// trailing counter parameter and assignment.
fn with_counter(init: &Initializer) -> Initializer {
    let mut params = init.params.clone();
    params.push(Param::new(COUNT_NAME, COUNT_TYPE));

    let mut body = init.body.clone();
    body.push(Stmt::AssignField {
        field: COUNT_NAME.to_string(),
        value: COUNT_NAME.to_string(),
    });

    Initializer {
        params,
        body,
        span: init.span,
    }
}

#[cfg(test)]
#[path = "instance_counted_tests.rs"]
mod tests;
