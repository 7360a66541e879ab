use ifx_ir::{BinaryOp, Postfix, PostfixToken};
use pretty_assertions::assert_eq;

use crate::{evaluate, EvalError};

fn operand(digit: u8) -> PostfixToken {
    PostfixToken::Operand(digit)
}

fn op(op: BinaryOp) -> PostfixToken {
    PostfixToken::Op(op)
}

#[test]
fn test_single_operand() {
    let postfix = Postfix::new(vec![operand(7)]);
    assert_eq!(evaluate(&postfix), Ok(7));
}

#[test]
fn test_addition() {
    // 3 4 + = 7
    let postfix = Postfix::new(vec![operand(3), operand(4), op(BinaryOp::Add)]);
    assert_eq!(evaluate(&postfix), Ok(7));
}

#[test]
fn test_operand_order_for_subtraction() {
    // 8 3 - = 5: the second pop is the left operand.
    let postfix = Postfix::new(vec![operand(8), operand(3), op(BinaryOp::Sub)]);
    assert_eq!(evaluate(&postfix), Ok(5));
}

#[test]
fn test_precedence_respecting_sequence() {
    // 3 4 2 * + = 11 (postfix of "3+4*2")
    let postfix = Postfix::new(vec![
        operand(3),
        operand(4),
        operand(2),
        op(BinaryOp::Mul),
        op(BinaryOp::Add),
    ]);
    assert_eq!(evaluate(&postfix), Ok(11));
}

#[test]
fn test_division_truncates_toward_zero() {
    // 8 3 / = 2
    let postfix = Postfix::new(vec![operand(8), operand(3), op(BinaryOp::Div)]);
    assert_eq!(evaluate(&postfix), Ok(2));
}

#[test]
fn test_division_by_zero() {
    let postfix = Postfix::new(vec![operand(8), operand(0), op(BinaryOp::Div)]);
    assert_eq!(evaluate(&postfix), Err(EvalError::DivisionByZero));
}

#[test]
fn test_too_many_operators_is_malformed() {
    // 1 + : the operator finds only one operand.
    let postfix = Postfix::new(vec![operand(1), op(BinaryOp::Add)]);
    assert!(matches!(
        evaluate(&postfix),
        Err(EvalError::MalformedExpression(_))
    ));
}

#[test]
fn test_empty_postfix_is_malformed() {
    let postfix = Postfix::default();
    assert!(matches!(
        evaluate(&postfix),
        Err(EvalError::MalformedExpression(_))
    ));
}

#[test]
fn test_extra_operands_return_last_result() {
    // 1 2 3 + : permissive evaluation returns 5 and ignores the stray 1.
    let postfix = Postfix::new(vec![
        operand(1),
        operand(2),
        operand(3),
        op(BinaryOp::Add),
    ]);
    assert_eq!(evaluate(&postfix), Ok(5));
}
