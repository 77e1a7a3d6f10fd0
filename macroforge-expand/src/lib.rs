//! Macroforge expansion engine
//!
//! This crate implements the transformation rules the host compiler
//! dispatches invocation sites to:
//! - `stringify`: expression -> (value, source text) pair
//! - `url`: static string literal -> checked URL construction
//! - `counted`: member list -> instance-counter additions
//!
//! Each rule is a pure function of its input node: it validates shape,
//! then either synthesizes a replacement fragment or returns a
//! [`Diagnostic`] for the host to surface. Inputs are never mutated.

pub mod dispatch;
pub mod error;
pub mod instance_counted;
pub mod static_url;
pub mod stringify;

pub use dispatch::{expand, ExpansionResult, RuleId, UnknownRule};
pub use error::{Diagnostic, DiagnosticKind, Result};
