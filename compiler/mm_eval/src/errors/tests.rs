use super::*;
use pretty_assertions::assert_eq;

fn at(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

#[test]
fn test_messages() {
    let cases = [
        (EvalError::invalid_character('x', at(4, 5)), "invalid character 'x'"),
        (EvalError::empty_expression(at(0, 0)), "empty expression"),
        (
            EvalError::unbalanced(Imbalance::UnmatchedClose, at(7, 8)),
            "unbalanced parentheses: unmatched ')'",
        ),
        (
            EvalError::unbalanced(
                Imbalance::MisplacedOperands {
                    found: "operation `M`".into(),
                },
                at(7, 8),
            ),
            "unbalanced parentheses: expected '(' before the operands, found operation `M`",
        ),
        (
            EvalError::wrong_arity(Some('m'), 3, at(9, 10)),
            "m expects 2 operands, got 3",
        ),
        (
            EvalError::wrong_arity(None, 1, at(3, 4)),
            "expected 2 operands, got 1",
        ),
        (
            EvalError::unknown_operation(None, at(5, 6)),
            "missing operation before '('",
        ),
        (
            EvalError::unknown_operation(Some("value 3".into()), at(5, 6)),
            "expected operation `m` or `M`, found value 3",
        ),
        (EvalError::incomplete(0, at(3, 3)), "incomplete expression"),
        (
            EvalError::incomplete(2, at(3, 3)),
            "incomplete expression: 2 unclosed '('",
        ),
        (
            EvalError::empty_stack(StackError::EmptyPop, at(0, 1)),
            "internal error: pop from an empty stack",
        ),
    ];
    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
        assert_eq!(error.message(), expected);
    }
}

#[test]
fn test_overflow_message_names_literal() {
    let error = EvalError::integer_overflow("99999999999999999999", at(0, 20));
    assert!(error.to_string().contains("99999999999999999999"));
    assert_eq!(error.code(), ErrorCode::E0002);
}

#[test]
fn test_codes() {
    assert_eq!(EvalError::invalid_character('?', at(0, 1)).code(), ErrorCode::E0001);
    assert_eq!(EvalError::empty_expression(at(0, 0)).code(), ErrorCode::E1001);
    assert_eq!(
        EvalError::unbalanced(Imbalance::UnmatchedClose, at(0, 1)).code(),
        ErrorCode::E1002
    );
    assert_eq!(EvalError::wrong_arity(None, 0, at(0, 1)).code(), ErrorCode::E1003);
    assert_eq!(EvalError::unknown_operation(None, at(0, 1)).code(), ErrorCode::E1004);
    assert_eq!(EvalError::incomplete(1, at(0, 0)).code(), ErrorCode::E1005);
    assert_eq!(
        EvalError::empty_stack(StackError::EmptyPeek, at(0, 0)).code(),
        ErrorCode::E9001
    );
}

#[test]
fn test_span_is_kept() {
    let error = EvalError::invalid_character('#', at(3, 4));
    assert_eq!(error.span, at(3, 4));
}
