use pl0_parse::ast::{AddOp, Condition, Expression, Factor, Statement, Term};
use pl0_parse::errors::{Pl0Error, Pl0Result};
use pl0_parse::frontend::parser::MAX_NESTING_DEPTH;
use pl0_parse::parse;
use pretty_assertions::assert_eq;

fn dump(source: &str) -> Pl0Result<String> {
    Ok(parse(source)?.to_string())
}

#[test]
fn test_const_var_and_assignment() -> Pl0Result<()> {
    assert_eq!(
        dump("const x = 1; var y; y := x + 1 .")?,
        "(program (block (const (x 1)) (var y) (assign y (+ x 1))) .)"
    );
    Ok(())
}

#[test]
fn test_assignment_tree_shape() -> Pl0Result<()> {
    let tree = parse("const x = 1; var y; y := x + 1 .")?;
    let block = &tree.block;
    assert_eq!(block.const_decl.consts.len(), 1);
    assert_eq!(block.const_decl.consts[0].0.name, "x");
    assert_eq!(block.const_decl.consts[0].1.value, 1);
    assert_eq!(block.var_decl.idents.len(), 1);
    assert_eq!(block.var_decl.idents[0].name, "y");
    match &block.statement {
        Statement::Assign { name, expr } => {
            assert_eq!(name.name, "y");
            match expr {
                Expression::Binary { op: AddOp::Plus, lhs, rhs } => {
                    assert!(matches!(
                        **lhs,
                        Expression::Term { sign: None, term: Term::Factor(Factor::Ident(_)) }
                    ));
                    assert!(matches!(rhs, Term::Factor(Factor::Number(n)) if n.value == 1));
                }
                other => panic!("Expected Binary '+' expression, got: {:?}", other),
            }
        }
        other => panic!("Expected Assign statement, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_if_odd_call() -> Pl0Result<()> {
    assert_eq!(
        dump("if odd 7 then call foo .")?,
        "(program (block (if (odd 7) (call foo))) .)"
    );
    let tree = parse("if odd 7 then call foo .")?;
    match &tree.block.statement {
        Statement::If { condition, body } => {
            assert!(matches!(condition, Condition::Odd(_)));
            assert!(matches!(&**body, Statement::Call { name } if name.name == "foo"));
        }
        other => panic!("Expected If statement, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_begin_end_keeps_source_order() -> Pl0Result<()> {
    assert_eq!(
        dump("begin x := 1; y := 2 end .")?,
        "(program (block (begin (assign x 1) (assign y 2))) .)"
    );
    Ok(())
}

#[test]
fn test_missing_factor() {
    let result = parse("x := .");
    if let Err(Pl0Error::SyntaxError { expected, found, line, column }) = result {
        assert_eq!(expected, "identifier, number or '('");
        assert_eq!(found, "'.'");
        assert_eq!((line, column), (1, 6));
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_missing_separator_in_var_declaration() {
    let result = parse("var x y .");
    if let Err(Pl0Error::SyntaxError { expected, found, line, column }) = result {
        assert_eq!(expected, "',' or ';'");
        assert_eq!(found, "identifier 'y'");
        assert_eq!((line, column), (1, 7));
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_missing_separator_in_const_declaration() {
    let result = parse("const x = 1 y = 2; .");
    if let Err(Pl0Error::SyntaxError { expected, found, .. }) = result {
        assert_eq!(expected, "',' or ';'");
        assert_eq!(found, "identifier 'y'");
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_missing_trailing_dot() {
    let result = parse("x := 1");
    if let Err(Pl0Error::SyntaxError { expected, found, .. }) = result {
        assert_eq!(expected, "'.'");
        assert_eq!(found, "end of input");
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_trailing_garbage_after_dot() {
    let result = parse("x := 1 . y");
    if let Err(Pl0Error::SyntaxError { expected, found, .. }) = result {
        assert_eq!(expected, "end of input");
        assert_eq!(found, "identifier 'y'");
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_lone_dot_is_an_empty_program() -> Pl0Result<()> {
    assert_eq!(dump(".")?, "(program (block (empty)) .)");
    Ok(())
}

#[test]
fn test_nested_procedures() -> Pl0Result<()> {
    let source = "var x; procedure p; procedure q; x := 2; x := 1; call p .";
    assert_eq!(
        dump(source)?,
        "(program (block (var x) (procedure p (block (procedure q (block (assign x 2))) \
         (assign x 1))) (call p)) .)"
    );
    Ok(())
}

#[test]
fn test_multiplication_binds_tighter_than_addition() -> Pl0Result<()> {
    assert_eq!(
        dump("x := 1 + 2 * 3 .")?,
        "(program (block (assign x (+ 1 (* 2 3)))) .)"
    );
    Ok(())
}

#[test]
fn test_addition_is_left_associative() -> Pl0Result<()> {
    assert_eq!(
        dump("x := 1 - 2 - 3 .")?,
        "(program (block (assign x (- (- 1 2) 3))) .)"
    );
    Ok(())
}

#[test]
fn test_division_is_left_associative() -> Pl0Result<()> {
    assert_eq!(
        dump("x := 8 / 4 / 2 .")?,
        "(program (block (assign x (/ (/ 8 4) 2))) .)"
    );
    Ok(())
}

#[test]
fn test_unary_sign_binds_first_term_only() -> Pl0Result<()> {
    assert_eq!(
        dump("x := -1 + 2 .")?,
        "(program (block (assign x (+ (- 1) 2))) .)"
    );
    assert_eq!(
        dump("x := +y * 2 .")?,
        "(program (block (assign x (+ (* y 2)))) .)"
    );
    Ok(())
}

#[test]
fn test_parentheses_override_precedence() -> Pl0Result<()> {
    assert_eq!(
        dump("x := (1 + 2) * 3 .")?,
        "(program (block (assign x (* (paren (+ 1 2)) 3))) .)"
    );
    Ok(())
}

#[test]
fn test_empty_statement_after_last_semicolon() -> Pl0Result<()> {
    // 'end' cannot start a statement, so the trailing ';' is followed by
    // the empty alternative rather than an error.
    assert_eq!(
        dump("begin x := 1; end .")?,
        "(program (block (begin (assign x 1) (empty))) .)"
    );
    Ok(())
}

#[test]
fn test_while_loop() -> Pl0Result<()> {
    assert_eq!(
        dump("while x < 10 do x := x + 1 .")?,
        "(program (block (while (< x 10) (assign x (+ x 1)))) .)"
    );
    Ok(())
}

#[test]
fn test_all_comparison_operators() -> Pl0Result<()> {
    for op in ["=", "#", "<", "<=", ">", ">="] {
        let source = format!("if 1 {} 2 then call p .", op);
        let expected = format!("(program (block (if ({} 1 2) (call p))) .)", op);
        assert_eq!(dump(&source)?, expected);
    }
    Ok(())
}

#[test]
fn test_condition_without_comparison_operator() {
    let result = parse("if 1 2 then call p .");
    if let Err(Pl0Error::SyntaxError { expected, found, .. }) = result {
        assert_eq!(expected, "'=', '#', '<', '<=', '>' or '>='");
        assert_eq!(found, "number 2");
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_multiline_error_position() {
    let result = parse("var x;\nx := ;\n.");
    if let Err(Pl0Error::SyntaxError { line, column, .. }) = result {
        assert_eq!((line, column), (2, 6));
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}

#[test]
fn test_deep_nesting_is_rejected() {
    let depth = MAX_NESTING_DEPTH + 10;
    let source = format!("x := {}1{} .", "(".repeat(depth), ")".repeat(depth));
    let result = parse(&source);
    if let Err(Pl0Error::NestingTooDeep { limit, .. }) = result {
        assert_eq!(limit, MAX_NESTING_DEPTH);
    } else {
        panic!("Expected NestingTooDeep, but got: {:?}", result);
    }
}

#[test]
fn test_moderate_nesting_is_fine() -> Pl0Result<()> {
    let source = format!("x := {}1{} .", "(".repeat(20), ")".repeat(20));
    parse(&source)?;
    Ok(())
}

#[test]
fn test_condition_with_compound_expressions() -> Pl0Result<()> {
    assert_eq!(
        dump("if x + 1 # y * 2 then x := 0 .")?,
        "(program (block (if (# (+ x 1) (* y 2)) (assign x 0))) .)"
    );
    Ok(())
}

#[test]
fn test_keywords_cannot_be_identifiers() {
    // 'call' expects an identifier, and 'while' is reserved.
    let result = parse("call while .");
    if let Err(Pl0Error::SyntaxError { expected, found, .. }) = result {
        assert_eq!(expected, "identifier");
        assert_eq!(found, "'while'");
    } else {
        panic!("Expected SyntaxError, but got: {:?}", result);
    }
}
