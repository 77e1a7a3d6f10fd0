//! Syntax tree for expansion inputs and outputs
//!
//! Nodes arrive from the host's parser and are treated as read-only; rules
//! build new nodes instead of rewriting the host's tree in place. Every node
//! renders back to host surface syntax through `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range into the host's source buffer.
///
/// Optional on every node that carries one: synthesized nodes have no
/// source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Opaque host expression, kept exactly as written.
    Raw { text: String, span: Option<Span> },

    /// String literal expression.
    Str(StringLit),

    /// Parenthesized sequence of expressions.
    Tuple(Vec<Expr>),

    /// URL construction that asserts success at the point of use.
    ///
    /// Only synthesized after the literal has been proven parseable, so the
    /// assertion cannot be observed to fail.
    UrlCtor(StringLit),
}

impl Expr {
    /// An opaque expression with no source location.
    pub fn raw(text: impl Into<String>) -> Self {
        Expr::Raw {
            text: text.into(),
            span: None,
        }
    }

    /// An opaque expression covering `span` in the host's source buffer.
    pub fn raw_spanned(text: impl Into<String>, span: Span) -> Self {
        Expr::Raw {
            text: text.into(),
            span: Some(span),
        }
    }

    pub fn as_string_lit(&self) -> Option<&StringLit> {
        match self {
            Expr::Str(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Expr::Raw { span, .. } => *span,
            Expr::Str(lit) => lit.span,
            Expr::Tuple(_) | Expr::UrlCtor(_) => None,
        }
    }

    /// The exact source text of this expression as the author wrote it.
    ///
    /// For opaque expressions this is the verbatim text the host captured,
    /// whitespace and all; synthesized forms render instead.
    pub fn source_text(&self) -> String {
        match self {
            Expr::Raw { text, .. } => text.clone(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Raw { text, .. } => f.write_str(text),
            Expr::Str(lit) => write!(f, "{lit}"),
            Expr::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Expr::UrlCtor(lit) => write!(f, "URL({lit})!"),
        }
    }
}

/// One segment of a string literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// A run of literal text, unescaped.
    Text(String),

    /// An interpolated expression.
    Interpolation(Expr),
}

/// A string literal: an ordered list of text runs and interpolations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLit {
    pub segments: Vec<Segment>,
    pub span: Option<Span>,
}

impl StringLit {
    /// A literal holding a single text run.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Text(content.into())],
            span: None,
        }
    }

    /// The literal's content when it is exactly one uninterpolated text run.
    ///
    /// Adjacent text runs are not coalesced; a literal split into several
    /// runs by the host's tokenizer does not count as static.
    pub fn static_text(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [Segment::Text(text)] => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for StringLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => escape_into(text, f)?,
                Segment::Interpolation(expr) => write!(f, "\\({expr})")?,
            }
        }
        f.write_str("\"")
    }
}

fn escape_into(text: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            _ => write!(f, "{c}")?,
        }
    }
    Ok(())
}

/// A declared parameter, `name: Type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

/// A statement in an initializer body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// Opaque host statement, kept exactly as written.
    Raw(String),

    /// `self.<field> = <value>` member assignment.
    AssignField { field: String, value: String },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Raw(text) => f.write_str(text),
            Stmt::AssignField { field, value } => write!(f, "self.{field} = {value}"),
        }
    }
}

/// An initializer declaration: ordered parameters plus an ordered body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub span: Option<Span>,
}

impl Initializer {
    pub fn new(params: Vec<Param>, body: Vec<Stmt>) -> Self {
        Self {
            params,
            body,
            span: None,
        }
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("init(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")?;
        if self.body.is_empty() {
            return f.write_str(" {}");
        }
        f.write_str(" { ")?;
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{stmt}")?;
        }
        f.write_str(" }")
    }
}

/// A stored-property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub mutable: bool,
    pub init: Option<Expr>,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.mutable { "var" } else { "let" };
        write!(f, "{keyword} {}: {}", self.name, self.ty)?;
        if let Some(init) = &self.init {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

/// One member of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Field(Field),
    Init(Initializer),

    /// Any other member declaration, kept as written.
    Raw(String),
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Field(field) => write!(f, "{field}"),
            Member::Init(init) => write!(f, "{init}"),
            Member::Raw(text) => f.write_str(text),
        }
    }
}

/// An ordered list of member declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberGroup {
    pub members: Vec<Member>,
    pub span: Option<Span>,
}

impl MemberGroup {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            span: None,
        }
    }

    /// A group with no members, used for no-op additions.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The initializer declarations in this group, in declaration order.
    pub fn initializers(&self) -> impl Iterator<Item = &Initializer> {
        self.members.iter().filter_map(|member| match member {
            Member::Init(init) => Some(init),
            _ => None,
        })
    }
}

impl fmt::Display for MemberGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}

/// A parsed fragment handed to the engine, or one synthesized by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxNode {
    /// The ordered argument list of a freestanding invocation site.
    Call { args: Vec<Expr>, span: Option<Span> },

    /// A single expression.
    Expr(Expr),

    /// A type's member declarations.
    Members(MemberGroup),
}

impl SyntaxNode {
    /// An invocation-site node with no source location.
    pub fn call(args: Vec<Expr>) -> Self {
        SyntaxNode::Call { args, span: None }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxNode::Call { span, .. } => *span,
            SyntaxNode::Expr(expr) => expr.span(),
            SyntaxNode::Members(group) => group.span,
        }
    }

    /// Shape name used in host-contract violation reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SyntaxNode::Call { .. } => "argument list",
            SyntaxNode::Expr(_) => "expression",
            SyntaxNode::Members(_) => "member group",
        }
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxNode::Call { args, .. } => {
                f.write_str("(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            SyntaxNode::Expr(expr) => write!(f, "{expr}"),
            SyntaxNode::Members(group) => write!(f, "{group}"),
        }
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
