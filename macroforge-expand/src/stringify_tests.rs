#[cfg(test)]
mod tests {
    use crate::stringify;
    use macroforge_core::ast::{Expr, Segment, Span, StringLit, SyntaxNode};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn expanded_pair(node: &SyntaxNode) -> (Expr, StringLit) {
        match stringify::expand(node) {
            SyntaxNode::Expr(Expr::Tuple(items)) => match items.as_slice() {
                [value, Expr::Str(text)] => (value.clone(), text.clone()),
                other => panic!("expected a two-element tuple, got {other:?}"),
            },
            other => panic!("expected a tuple expression, got {other:?}"),
        }
    }

    // ===== Expansion Tests =====

    #[test]
    fn test_value_is_argument_unchanged() {
        let arg = Expr::raw_spanned("x + y", Span::new(12, 17));
        let node = SyntaxNode::call(vec![arg.clone()]);

        let (value, _) = expanded_pair(&node);
        assert_eq!(value, arg);
    }

    #[test]
    fn test_text_is_exact_source() {
        let node = SyntaxNode::call(vec![Expr::raw("x + y")]);
        let (_, text) = expanded_pair(&node);
        assert_eq!(text.static_text(), Some("x + y"));
    }

    #[test]
    fn test_whitespace_and_comments_preserved() {
        let source = "x  +\t y /* carried */";
        let node = SyntaxNode::call(vec![Expr::raw(source)]);
        let (_, text) = expanded_pair(&node);
        assert_eq!(text.static_text(), Some(source));
    }

    #[test]
    fn test_rendered_fragment() {
        let node = SyntaxNode::call(vec![Expr::raw("x + y")]);
        let fragment = stringify::expand(&node);
        assert_eq!(fragment.to_string(), "(x + y, \"x + y\")");
    }

    #[test]
    fn test_quotes_in_source_escape_in_render_only() {
        let source = "greet(\"hi\")";
        let node = SyntaxNode::call(vec![Expr::raw(source)]);

        let (_, text) = expanded_pair(&node);
        // Content is byte-for-byte; escaping happens only when rendering.
        assert_eq!(text.static_text(), Some(source));
        assert_eq!(
            stringify::expand(&node).to_string(),
            "(greet(\"hi\"), \"greet(\\\"hi\\\")\")"
        );
    }

    #[test]
    fn test_string_literal_argument() {
        let lit = StringLit {
            segments: vec![
                Segment::Text("n = ".to_string()),
                Segment::Interpolation(Expr::raw("n")),
            ],
            span: None,
        };
        let node = SyntaxNode::call(vec![Expr::Str(lit.clone())]);

        let (value, text) = expanded_pair(&node);
        assert_eq!(value, Expr::Str(lit));
        assert_eq!(text.static_text(), Some("\"n = \\(n)\""));
    }

    #[test]
    fn test_input_not_mutated() {
        let node = SyntaxNode::call(vec![Expr::raw("a * b")]);
        let before = node.clone();
        let _ = stringify::expand(&node);
        assert_eq!(node, before);
    }

    #[test]
    fn test_repeated_expansion_is_identical() {
        let node = SyntaxNode::call(vec![Expr::raw("x + y")]);
        assert_eq!(stringify::expand(&node), stringify::expand(&node));
    }

    // ===== Contract Tests =====

    #[test]
    #[should_panic(expected = "host contract violation")]
    fn test_zero_arguments_is_fatal() {
        let node = SyntaxNode::call(vec![]);
        let _ = stringify::expand(&node);
    }

    #[test]
    #[should_panic(expected = "host contract violation")]
    fn test_extra_arguments_are_fatal() {
        let node = SyntaxNode::call(vec![Expr::raw("a"), Expr::raw("b")]);
        let _ = stringify::expand(&node);
    }

    #[test]
    #[should_panic(expected = "host contract violation")]
    fn test_non_call_input_is_fatal() {
        let node = SyntaxNode::Expr(Expr::raw("x"));
        let _ = stringify::expand(&node);
    }

    // ===== Round-Trip Property =====

    proptest! {
        #[test]
        fn prop_source_text_round_trips(source in "\\PC*") {
            let node = SyntaxNode::call(vec![Expr::raw(source.clone())]);
            let fragment = stringify::expand(&node);

            let text = match fragment {
                SyntaxNode::Expr(Expr::Tuple(ref items)) => match items.as_slice() {
                    [_, Expr::Str(text)] => text.clone(),
                    _ => unreachable!(),
                },
                _ => unreachable!(),
            };
            prop_assert_eq!(text.static_text(), Some(source.as_str()));
        }
    }
}
