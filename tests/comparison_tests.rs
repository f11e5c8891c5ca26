use ramus::{Ast, BinOp, Value};

#[test]
fn greater_than() {
    let e = Ast::bin(BinOp::Gt, Ast::num(5.0), Ast::num(3.0));
    assert_eq!(e.print(), "5 > 3");
    assert_eq!(e.evaluate().unwrap(), Value::Bool(true));

    let e = Ast::bin(BinOp::Gt, Ast::num(3.0), Ast::num(5.0));
    assert_eq!(e.evaluate().unwrap(), Value::Bool(false));
}

#[test]
fn less_than() {
    let e = Ast::bin(BinOp::Lt, Ast::num(2.0), Ast::num(4.0));
    assert_eq!(e.print(), "2 < 4");
    assert_eq!(e.evaluate().unwrap(), Value::Bool(true));

    let e = Ast::bin(BinOp::Lt, Ast::num(6.0), Ast::num(4.0));
    assert_eq!(e.evaluate().unwrap(), Value::Bool(false));
}

#[test]
fn equality() {
    let e = Ast::bin(BinOp::Eq, Ast::num(7.0), Ast::num(7.0));
    assert_eq!(e.print(), "7 = 7");
    assert_eq!(e.evaluate().unwrap(), Value::Bool(true));

    let e = Ast::bin(BinOp::Eq, Ast::num(8.0), Ast::num(10.0));
    assert_eq!(e.evaluate().unwrap(), Value::Bool(false));
}

#[test]
fn negative_operands() {
    // -5 > -3 is false
    let e = Ast::bin(BinOp::Gt, Ast::num(-5.0), Ast::num(-3.0));
    assert_eq!(e.print(), "-5 > -3");
    assert_eq!(e.evaluate().unwrap(), Value::Bool(false));
}

#[test]
fn zero_against_negative() {
    // 0 > -3 is true
    let e = Ast::bin(BinOp::Gt, Ast::num(0.0), Ast::num(-3.0));
    assert_eq!(e.print(), "0 > -3");
    assert_eq!(e.evaluate().unwrap(), Value::Bool(true));
}

#[test]
fn comparison_over_arithmetic_operands() {
    // 2 + 3 > 4 * 5 is false
    let e = Ast::bin(
        BinOp::Gt,
        Ast::bin(BinOp::Add, Ast::num(2.0), Ast::num(3.0)),
        Ast::bin(BinOp::Mul, Ast::num(4.0), Ast::num(5.0)),
    );
    assert_eq!(e.print(), "2 + 3 > 4 * 5");
    assert_eq!(e.evaluate().unwrap(), Value::Bool(false));
}
