use lox_ir::{AstPrinter, Expr, Stmt, TokenKind};
use pretty_assertions::assert_eq;

use crate::{parse, ParseErrorKind, ParseOutput};

fn parse_source(source: &str) -> ParseOutput {
    let lexed = lox_lexer::lex(source);
    assert!(!lexed.has_errors(), "scan errors in test source: {:?}", lexed.errors);
    parse(&lexed.tokens)
}

/// Parse cleanly and render with the AST printer.
fn render(source: &str) -> String {
    let out = parse_source(source);
    assert!(out.errors.is_empty(), "unexpected errors: {:?}", out.errors);
    AstPrinter::new().print_program(&out.statements)
}

fn error_messages(source: &str) -> Vec<String> {
    parse_source(source)
        .errors
        .iter()
        .map(|e| format!("[line {}] {e}", e.line()))
        .collect()
}

#[test]
fn empty_program() {
    assert_eq!(render(""), "");
    let out = parse(&[]);
    assert!(out.statements.is_empty());
    assert!(!out.has_errors());
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(render("1 + 2 * 3 - 4;"), "(; (- (+ 1 (* 2 3)) 4))\n");
    assert_eq!(render("1 - 2 - 3;"), "(; (- (- 1 2) 3))\n");
    assert_eq!(render("8 / 4 / 2;"), "(; (/ (/ 8 4) 2))\n");
}

#[test]
fn comparison_binds_tighter_than_equality() {
    assert_eq!(render("1 < 2 == true;"), "(; (== (< 1 2) true))\n");
    assert_eq!(render("a != b >= c;"), "(; (!= a (>= b c)))\n");
}

#[test]
fn unary_and_grouping() {
    assert_eq!(render("!-x;"), "(; (! (- x)))\n");
    assert_eq!(render("(1 + 2) * 3;"), "(; (* (group (+ 1 2)) 3))\n");
    assert_eq!(render("-123 * (45.67);"), "(; (* (- 123) (group 45.67)))\n");
}

#[test]
fn logical_operators() {
    assert_eq!(render("a or b and c;"), "(; (or a (and b c)))\n");
    assert_eq!(render("a and b or c;"), "(; (or (and a b) c))\n");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(render("a = b = c;"), "(; (= a (= b c)))\n");
    assert_eq!(render("a = 1 or 2;"), "(; (= a (or 1 2)))\n");
}

#[test]
fn calls_chain_left_to_right() {
    assert_eq!(render("f();"), "(; (call f))\n");
    assert_eq!(render("f(1)(2, 3);"), "(; (call (call f 1) 2 3))\n");
    assert_eq!(render("f(a + 1, g(b));"), "(; (call f (+ a 1) (call g b)))\n");
}

#[test]
fn call_keeps_closing_paren() {
    let out = parse_source("f(\n1\n);");
    let Stmt::Expression(Expr::Call { paren, .. }) = &out.statements[0] else {
        panic!("expected a call statement, got {:?}", out.statements[0]);
    };
    assert_eq!(paren.kind, TokenKind::RightParen);
    assert_eq!(paren.line, 3);
}

#[test]
fn literals() {
    assert_eq!(
        render("print nil; print true; print false; print \"hi\"; print 2.5;"),
        "(print nil)\n(print true)\n(print false)\n(print hi)\n(print 2.5)\n"
    );
}

#[test]
fn variable_declarations() {
    assert_eq!(render("var a; var b = a;"), "(var a)\n(var b a)\n");
}

#[test]
fn blocks_nest() {
    assert_eq!(
        render("{ var a = 1; { print a; } }"),
        "(block (var a 1) (block (print a)))\n"
    );
}

#[test]
fn if_else_binds_to_nearest_if() {
    assert_eq!(
        render("if (a) if (b) print 1; else print 2;"),
        "(if a (if b (print 1) (print 2)))\n"
    );
    assert_eq!(render("if (a) print 1;"), "(if a (print 1))\n");
}

#[test]
fn while_loop() {
    assert_eq!(
        render("while (i < 3) i = i + 1;"),
        "(while (< i 3) (; (= i (+ i 1))))\n"
    );
}

#[test]
fn for_desugars_to_while() {
    assert_eq!(
        render("for (var i = 0; i < 3; i = i + 1) print i;"),
        "(block (var i 0) (while (< i 3) (block (print i) (; (= i (+ i 1))))))\n"
    );
}

#[test]
fn for_with_empty_clauses() {
    assert_eq!(render("for (;;) print 1;"), "(while true (print 1))\n");
    assert_eq!(
        render("for (i = 0; ; ) print i;"),
        "(block (; (= i 0)) (while true (print i)))\n"
    );
}

#[test]
fn function_declarations() {
    assert_eq!(
        render("fun add(a, b) { return a + b; }"),
        "(fun add (a b) (return (+ a b)))\n"
    );
    assert_eq!(
        render("fun noop() { return; }"),
        "(fun noop () (return))\n"
    );
}

#[test]
fn nested_function_return_is_allowed() {
    assert_eq!(
        render("fun outer() { fun inner() { return 1; } return inner; }"),
        "(fun outer () (fun inner () (return 1)) (return inner))\n"
    );
}

#[test]
fn missing_expression() {
    assert_eq!(
        error_messages("print ;"),
        vec!["[line 1] Error at ';': Expect expression."]
    );
}

#[test]
fn errors_at_end_of_input() {
    assert_eq!(
        error_messages("print 1"),
        vec!["[line 1] Error at end: Expect ';' after value."]
    );
    assert_eq!(
        error_messages("{ print 1;\n"),
        vec!["[line 2] Error at end: Expect '}' after block."]
    );
}

#[test]
fn synchronize_reports_each_broken_statement() {
    let out = parse_source("var = 1;\nprint 2;\nvar x 3;\nprint 4;");
    let messages: Vec<_> = out
        .errors
        .iter()
        .map(|e| format!("[line {}] {e}", e.line()))
        .collect();
    assert_eq!(
        messages,
        vec![
            "[line 1] Error at '=': Expect variable name.",
            "[line 3] Error at '3': Expect ';' after variable declaration.",
        ]
    );
    assert_eq!(
        AstPrinter::new().print_program(&out.statements),
        "(print 2)\n(print 4)\n"
    );
}

#[test]
fn synchronize_stops_before_statement_keyword() {
    let out = parse_source("print (1 + ;\nprint 2;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(
        AstPrinter::new().print_program(&out.statements),
        "(print 2)\n"
    );
}

#[test]
fn errors_inside_blocks_recover_locally() {
    let out = parse_source("{ print ; print 1; }\nprint 2;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(
        AstPrinter::new().print_program(&out.statements),
        "(block (print 1))\n(print 2)\n"
    );
}

#[test]
fn invalid_assignment_target_reports_and_continues() {
    let out = parse_source("1 + 2 = 3;\nprint 4;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, ParseErrorKind::InvalidAssignmentTarget);
    assert_eq!(out.errors[0].to_string(), "Error at '=': Invalid assignment target.");
    assert_eq!(
        AstPrinter::new().print_program(&out.statements),
        "(; (+ 1 2))\n(print 4)\n"
    );
}

#[test]
fn grouped_variable_is_not_assignable() {
    let out = parse_source("(a) = 1;");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, ParseErrorKind::InvalidAssignmentTarget);
}

#[test]
fn too_many_arguments_reports_and_continues() {
    let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
    let source = format!("f({});", args.join(", "));
    let out = parse_source(&source);

    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, ParseErrorKind::TooManyArguments);
    assert_eq!(out.errors[0].token.lexeme, "255");
    let Stmt::Expression(Expr::Call { arguments, .. }) = &out.statements[0] else {
        panic!("expected a call statement");
    };
    assert_eq!(arguments.len(), 256);
}

#[test]
fn exactly_255_arguments_is_fine() {
    let args: Vec<String> = (0..255).map(|i| i.to_string()).collect();
    let out = parse_source(&format!("f({});", args.join(", ")));
    assert!(!out.has_errors());
}

#[test]
fn too_many_parameters_reports_and_continues() {
    let params: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
    let source = format!("fun f({}) {{}}", params.join(", "));
    let out = parse_source(&source);

    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, ParseErrorKind::TooManyParameters);
    let Stmt::Function(decl) = &out.statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(decl.arity(), 256);
}

#[test]
fn return_at_top_level_is_reported() {
    let out = parse_source("return 1;");
    assert_eq!(
        out.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["Error at 'return': Can't return from top-level code."]
    );
    assert_eq!(out.statements.len(), 1);
}

#[test]
fn function_header_errors() {
    assert_eq!(
        error_messages("fun (a) {}"),
        vec!["[line 1] Error at '(': Expect function name."]
    );
    assert_eq!(
        error_messages("fun f(a b) {}"),
        vec!["[line 1] Error at 'b': Expect ')' after parameters."]
    );
    assert_eq!(
        error_messages("fun f() print 1;"),
        vec!["[line 1] Error at 'print': Expect '{' before function body."]
    );
}

#[test]
fn control_flow_header_errors() {
    assert_eq!(
        error_messages("if a) print 1;"),
        vec!["[line 1] Error at 'a': Expect '(' after 'if'."]
    );
    assert_eq!(
        error_messages("while (a print 1;"),
        vec!["[line 1] Error at 'print': Expect ')' after condition."]
    );
    assert_eq!(
        error_messages("for (var i = 0; i < 1 i = i + 1) print i;"),
        vec!["[line 1] Error at 'i': Expect ';' after loop condition."]
    );
}

#[test]
fn deeply_nested_groupings_do_not_overflow() {
    let depth = 2_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
    let out = parse_source(&source);
    assert!(!out.has_errors());
    assert_eq!(out.statements.len(), 1);
}
