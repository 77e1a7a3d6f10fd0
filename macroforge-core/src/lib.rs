//! Core syntax types for Macroforge
//!
//! This crate provides the building blocks shared by the expansion rules:
//! - Syntax node representation (expressions, string literals, member
//!   declarations)
//! - Source spans
//! - Rendering of nodes back to host surface syntax

pub mod ast;

pub use ast::{
    Expr, Field, Initializer, Member, MemberGroup, Param, Segment, Span, Stmt, StringLit,
    SyntaxNode,
};
