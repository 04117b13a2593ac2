//! Driver commands: files, the prompt, and the token/AST dumps.

mod common;

use std::io::Write;

use common::{session, stderr_of, stdout_of};
use lox_diagnostic::{ColorMode, TerminalEmitter};
use loxc::commands::{dump_ast, dump_tokens, run_file_with, run_prompt_with};
use loxc::exit;
use pretty_assertions::assert_eq;

fn script(source: &str) -> tempfile::NamedTempFile {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(file) => file,
        Err(err) => panic!("could not create temp file: {err}"),
    };
    if let Err(err) = file.write_all(source.as_bytes()) {
        panic!("could not write temp file: {err}");
    }
    file
}

fn emitter() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn run_file_success() {
    let file = script("var greeting = \"hi\";\nprint greeting;");
    let mut lox = session();
    assert_eq!(run_file_with(file.path(), &mut lox), 0);
    assert_eq!(stdout_of(&lox), "hi\n");
}

#[test]
fn run_file_exit_codes() {
    let mut lox = session();
    let syntax = script("print ;");
    assert_eq!(run_file_with(syntax.path(), &mut lox), exit::DATA_ERR);

    let mut lox = session();
    let runtime = script("print -\"x\";");
    assert_eq!(run_file_with(runtime.path(), &mut lox), exit::SOFTWARE);
    assert_eq!(stderr_of(&lox), "Operand must be a number.\n[line 1]\n");
}

#[test]
fn run_file_missing() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => panic!("could not create temp dir: {err}"),
    };
    let mut lox = session();
    let status = run_file_with(&dir.path().join("nope.lox"), &mut lox);
    assert_eq!(status, exit::IO_ERR);
}

#[test]
fn prompt_keeps_globals_and_resets_errors() {
    let input = "var a = 1;\nprint a +;\nprint a + 1;\nfun f() { return a * 10; }\nprint f();\n";
    let mut prompt = Vec::new();
    let mut lox = session();

    let result = run_prompt_with(input.as_bytes(), &mut prompt, &mut lox);
    assert!(result.is_ok());
    assert_eq!(stdout_of(&lox), "2\n10\n");
    assert_eq!(
        stderr_of(&lox),
        "[line 1] Error at ';': Expect expression.\n"
    );
    assert_eq!(text(&prompt), "> > > > > > \n");
    assert!(!lox.had_error());
}

#[test]
fn prompt_recovers_after_runtime_error() {
    let input = "var x = \"s\";\n{ var x = 1; x(); }\nprint x;\n";
    let mut prompt = Vec::new();
    let mut lox = session();

    let result = run_prompt_with(input.as_bytes(), &mut prompt, &mut lox);
    assert!(result.is_ok());
    assert_eq!(stdout_of(&lox), "s\n");
    assert!(!lox.had_runtime_error());
}

#[test]
fn prompt_continues_after_stack_overflow() {
    let input = "fun spin() { return spin(); }\nspin();\nfun one() { return 1; }\nprint one();\n";
    let mut prompt = Vec::new();
    let mut lox = session();

    let result = run_prompt_with(input.as_bytes(), &mut prompt, &mut lox);
    assert!(result.is_ok());
    assert_eq!(stdout_of(&lox), "1\n");
    assert_eq!(stderr_of(&lox), "Stack overflow.\n[line 1]\n");
    assert_eq!(lox.interpreter().call_depth(), 0);
}

#[test]
fn token_dump() {
    let mut out = Vec::new();
    let mut diags = emitter();
    let status = dump_tokens("var x = 12.5;\nprint \"hi\";", &mut out, &mut diags);

    assert_eq!(status, 0);
    assert_eq!(
        text(&out),
        "VAR var nil\n\
         IDENTIFIER x nil\n\
         EQUAL = nil\n\
         NUMBER 12.5 12.5\n\
         SEMICOLON ; nil\n\
         PRINT print nil\n\
         STRING \"hi\" hi\n\
         SEMICOLON ; nil\n\
         EOF  nil\n"
    );
    assert_eq!(text(diags.get_ref()), "");
}

#[test]
fn token_dump_reports_scan_errors() {
    let mut out = Vec::new();
    let mut diags = emitter();
    let status = dump_tokens("1 ^ 2", &mut out, &mut diags);

    assert_eq!(status, exit::DATA_ERR);
    assert_eq!(text(&out), "NUMBER 1 1\nNUMBER 2 2\nEOF  nil\n");
    assert_eq!(text(diags.get_ref()), "[line 1] Error: Unexpected character.\n");
}

#[test]
fn ast_dump() {
    let mut out = Vec::new();
    let mut diags = emitter();
    let status = dump_ast(
        "for (var i = 0; i < 2; i = i + 1) print i;\nfun f(x) { return -x; }",
        &mut out,
        &mut diags,
    );

    assert_eq!(status, 0);
    assert_eq!(
        text(&out),
        "(block (var i 0) (while (< i 2) (block (print i) (; (= i (+ i 1))))))\n\
         (fun f (x) (return (- x)))\n"
    );
}

#[test]
fn ast_dump_reports_parse_errors() {
    let mut out = Vec::new();
    let mut diags = emitter();
    let status = dump_ast("print 1;\nvar 2;\nprint 3;", &mut out, &mut diags);

    assert_eq!(status, exit::DATA_ERR);
    assert_eq!(text(&out), "(print 1)\n(print 3)\n");
    assert_eq!(
        text(diags.get_ref()),
        "[line 2] Error at '2': Expect variable name.\n"
    );
}
