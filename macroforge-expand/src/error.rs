//! Diagnostics reported to the author of an invocation site

use macroforge_core::ast::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an expansion could not produce a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DiagnosticKind {
    #[error("requires a static string literal")]
    RequiresStaticStringLiteral,

    /// Carries the offending literal as written, so the author can find it
    /// without re-deriving which argument failed.
    #[error("the input URL is malformed: {0}")]
    MalformedUrl(String),
}

/// A failed expansion, surfaced to the user by the host.
///
/// Built once at the failure site and returned unchanged through the
/// dispatcher; never thrown across rule boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Option<Span>) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span,
        }
    }

    pub fn requires_static_string_literal(span: Option<Span>) -> Self {
        Self::new(DiagnosticKind::RequiresStaticStringLiteral, span)
    }

    pub fn malformed_url(literal: impl Into<String>, span: Option<Span>) -> Self {
        Self::new(DiagnosticKind::MalformedUrl(literal.into()), span)
    }
}

pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Aborts the current expansion because the host handed the engine an
/// invocation that violates a documented structural precondition.
///
/// This is not a user error and must never surface as a [`Diagnostic`]:
/// a conforming host checks invocation shape before dispatching, so
/// reaching this path means the engine's own contract was broken.
#[cold]
#[track_caller]
pub(crate) fn host_contract_violation(what: &str) -> ! {
    tracing::error!(violation = what, "host contract violation");
    panic!("host contract violation: {what}");
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
