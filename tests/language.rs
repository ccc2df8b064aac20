use std::fs::{self};

use matlang::{
    error::{RuntimeError, SyntaxErrors},
    get_result,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn program_corpus_works() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "m"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read \
                                                                     {expected_path:?}: {e}")
                                                         });

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = get_result(&source, &mut out) {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }
        let actual = String::from_utf8(out).expect("print output is UTF-8");
        assert_eq!(actual, expected, "unexpected output from {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn run(src: &str) -> Result<(String, Option<Value>), Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    let returned = get_result(src, &mut out)?;
    Ok((String::from_utf8(out)?, returned))
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok((output, _)) => assert_eq!(output, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_runtime_error(src: &str, kind: &str) {
    let mut out = Vec::new();
    match get_result(src, &mut out) {
        Ok(_) => panic!("Script succeeded but was expected to fail with {kind}"),
        Err(e) => match e.downcast_ref::<RuntimeError>() {
            Some(error) => assert_eq!(error.kind(), kind, "error: {error}"),
            None => panic!("Expected a runtime error, got: {e}"),
        },
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x = 1 + 2 * 3; print x;", "7\n");
    assert_output("x = (1 + 2) * 3; print x;", "9\n");
    assert_output("print 7 / 2, 7 / 2.0;", "3 3.5\n");
    assert_output("print 1 - 2.5;", "-1.5\n");
    assert_output("print -4 + 1;", "-3\n");
}

#[test]
fn compound_assignments() {
    assert_output("a = 1; a += 2; print a;", "3\n");
    assert_output("a = 10; a -= 4; a *= 2; a /= 3; print a;", "4\n");
    assert_output("a = 1; a += 0.5; print a;", "1.5\n");
}

#[test]
fn strings_and_comparisons() {
    assert_output("s = \"ab\" + \"cd\"; print s;", "abcd\n");
    assert_output("print \"x\" == \"x\", 1 < 2, 2 <= 1, 1 == 1.0, 3 != 3;",
                  "true true false true false\n");
}

#[test]
fn matrix_literals_and_printing() {
    assert_output("A = [1, 2; 3, 4]; print A;", "[[1, 2], [3, 4]]\n");
    assert_output("print [];", "[]\n");
    assert_output("print [1.5, 2];", "[[1.5, 2]]\n");
}

#[test]
fn identity_is_neutral_for_matrix_product() {
    assert_output("print eye(3) * ones(3, 3);",
                  "[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]\n");
}

#[test]
fn elementwise_product_with_ones_keeps_identity() {
    assert_output("print eye(3) .* ones(3, 3);",
                  "[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]\n");
}

#[test]
fn identity_is_symmetric() {
    assert_output("print eye(3)';", "[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]\n");
}

#[test]
fn transpose_and_matrix_product() {
    assert_output("A = [1, 2; 3, 4]; print A';", "[[1, 3], [2, 4]]\n");
    assert_output("A = [1, 2; 3, 4]; B = [1, 0; 0, 1]; print A * B;", "[[1, 2], [3, 4]]\n");
    assert_output("print [1, 2, 3] * [1; 2; 3];", "[[14]]\n");
    assert_output("print [1; 2] * [3, 4];", "[[3, 4], [6, 8]]\n");
}

#[test]
fn elementwise_and_scalar_operations() {
    assert_output("print [1, 2] .+ [3, 4];", "[[4, 6]]\n");
    assert_output("print [6, 8] ./ [3, 4];", "[[2, 2]]\n");
    assert_output("print 2 * ones(1, 2);", "[[2.0, 2.0]]\n");
    assert_output("print 10 - [1, 2];", "[[9, 8]]\n");
    assert_output("print [4, 8] / 2;", "[[2, 4]]\n");
    assert_output("print -[1, 2];", "[[-1, -2]]\n");
}

#[test]
fn builtin_constructors() {
    assert_output("print zeros(2, 3);", "[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]\n");
    assert_output("print ones(2);", "[[1.0, 1.0], [1.0, 1.0]]\n");
    assert_output("print eye(2, 3);", "[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]\n");
    assert_output("print zeros(0);", "[]\n");
}

#[test]
fn indexing_reads_rows_and_elements() {
    assert_output("print zeros(2, 3)[0, 0];", "0.0\n");
    assert_output("A = [1, 2; 3, 4]; print A[1, 0], A[1];", "3 [[3, 4]]\n");
}

#[test]
fn indexing_writes_rows_and_elements() {
    assert_output("A = zeros(2, 2); A[0, 1] = 5.0; print A;", "[[0.0, 5.0], [0.0, 0.0]]\n");
    assert_output("A = zeros(2, 2); A[1] = [1.0, 2.0]; print A;", "[[0.0, 0.0], [1.0, 2.0]]\n");
    assert_output("A = ones(2, 2); A[1, 1] += 2; print A[1, 1];", "3.0\n");
}

#[test]
fn indexed_write_does_not_alias_copies() {
    assert_output("A = zeros(1, 2); B = A; B[0, 0] = 1.0; print A, B;",
                  "[[0.0, 0.0]] [[1.0, 0.0]]\n");
}

#[test]
fn if_else_and_blocks() {
    assert_output("x = 3; if (x > 2) print 1; else print 2;", "1\n");
    assert_output("x = 1; if (x > 2) print 1; else print 2;", "2\n");
    assert_output("x = 1; if (x > 2) { print 1; } else { print 2; print 3; }", "2\n3\n");
    assert_output("if (1 > 0) if (1 > 2) print 1; else print 2;", "2\n");
}

#[test]
fn for_loops_are_inclusive() {
    assert_output("for i = 1:3 print i;", "1\n2\n3\n");
    assert_output("for i = 5:1:-2 print i;", "5\n3\n1\n");
    assert_output("for i = 0:6:3 print i;", "0\n3\n6\n");
    assert_output("for i = 3:1 print i;", "");
}

#[test]
fn for_loop_sum() {
    assert_output("s = 0; for i = 1:10 s += i; print s;", "55\n");
}

#[test]
fn while_loop_with_break_and_continue() {
    assert_output("i = 0; while (i < 10) { i += 1; if (i == 3) break; } print i;", "3\n");
    assert_output("i = 0; while (i < 5) { i += 1; if (i == 2) continue; print i; }",
                  "1\n3\n4\n5\n");
    assert_output("for i = 1:5 { if (i == 2) continue; if (i == 4) break; print i; }",
                  "1\n3\n");
}

#[test]
fn break_only_leaves_the_innermost_loop() {
    assert_output("for i = 1:2 { for j = 1:3 { if (j == 2) break; print i, j; } }",
                  "1 1\n2 1\n");
}

#[test]
fn return_stops_the_program_with_a_value() {
    let (output, returned) = run("print 1; return 2 + 3; print 2;").unwrap();
    assert_eq!(output, "1\n");
    assert_eq!(returned, Some(Value::Integer(5)));

    let (output, returned) = run("for i = 1:10 { if (i == 2) return i; print i; }").unwrap();
    assert_eq!(output, "1\n");
    assert_eq!(returned, Some(Value::Integer(2)));
}

#[test]
fn block_bindings_are_contained() {
    assert_output("x = 1; { x = 2; } print x;", "2\n");
    assert_runtime_error("{ y = 1; } print y;", "UnknownVariable");
    assert_runtime_error("for i = 1:2 { t = i; } print t;", "UnknownVariable");
    assert_runtime_error("for i = 1:2 print i; print i;", "UnknownVariable");
}

#[test]
fn bare_loop_bodies_use_the_enclosing_frame() {
    assert_output("i = 0; while (i < 2) i += 1; print i;", "2\n");
    assert_output("if (1 < 2) z = 4; print z;", "4\n");
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_error("print 1 / 0;", "DivisionByZeroError");
    assert_runtime_error("print 1.0 / 0;", "DivisionByZeroError");
    assert_runtime_error("print [1, 2] ./ [1, 0];", "DivisionByZeroError");
}

#[test]
fn runtime_error_stops_output() {
    let mut out = Vec::new();
    let error = get_result("print 1 / 0; print 2;", &mut out).unwrap_err();
    assert!(out.is_empty());
    assert_eq!(error.to_string(), "[line 1] DivisionByZeroError: Division by zero");
}

#[test]
fn runtime_errors_report_their_line() {
    let mut out = Vec::new();
    let error = get_result("x = 1;\ny = 2;\nprint z;", &mut out).unwrap_err();
    assert_eq!(error.to_string(), "[line 3] UnknownVariable: Undefined variable 'z'");
}

#[test]
fn shape_errors() {
    assert_runtime_error("print ones(2, 2) + ones(3, 3);", "DimensionError");
    assert_runtime_error("print ones(2, 3) * ones(2, 3);", "DimensionError");
    assert_runtime_error("print [1, 2] .* [1, 2, 3];", "DimensionError");
    assert_runtime_error("print [1, 2; 3];", "DimensionError");
    assert_runtime_error("A = zeros(2, 2); A[0] = [1.0, 2.0, 3.0];", "DimensionError");
}

#[test]
fn index_errors() {
    assert_runtime_error("print zeros(2, 3)[5, 5];", "IndexError");
    assert_runtime_error("A = zeros(2, 3); print A[2];", "IndexError");
    assert_runtime_error("A = zeros(2, 3); print A[0 - 1, 0];", "IndexError");
}

#[test]
fn type_errors() {
    assert_runtime_error("print 1 .+ 2;", "TypeError");
    assert_runtime_error("if (1) print 1;", "TypeError");
    assert_runtime_error("A = zeros(2, 2); print A[0.5, 0];", "TypeError");
    assert_runtime_error("print 3';", "TypeError");
    assert_runtime_error("print zeros(1.5);", "TypeError");
    assert_runtime_error("for i = 1.0:3 print i;", "TypeError");
    assert_runtime_error("print 1 + \"a\";", "TypeError");
}

#[test]
fn unknown_operator_errors() {
    assert_runtime_error("print \"a\" - \"b\";", "UnknownOperatorError");
    assert_runtime_error("print -\"a\";", "UnknownOperatorError");
    assert_runtime_error("print eye(2) == eye(2);", "UnknownOperatorError");
}

#[test]
fn overflow_and_loop_bounds() {
    assert_runtime_error("x = 9223372036854775807; x += 1;", "Overflow");
    assert_runtime_error("for i = 1:3:0 print i;", "InvalidLoopBounds");
    assert_runtime_error("print zeros(0 - 1);", "DimensionError");
}

#[test]
fn oversized_matrices_are_dimension_errors() {
    assert_runtime_error("print zeros(4294967296, 4294967296)[0, 0];", "DimensionError");
    assert_runtime_error("print eye(4294967296, 4294967296)[0, 0];", "DimensionError");
    assert_runtime_error("A = ones(4294967296, 0); B = ones(0, 4294967296); C = A * B;",
                         "DimensionError");
    assert_output("E = zeros(4294967296, 0); print E';", "[]\n");
}

#[test]
fn large_integers_promote_to_float() {
    assert_output("x = 9007199254740993; print x * 1.0 == 9007199254740992.0;", "true\n");
    assert_output("print 9007199254740993 < 1.5;", "false\n");
    assert_output("print 9223372036854775807 + 0.0 > 0.0;", "true\n");
}

#[test]
fn syntax_errors_prevent_execution() {
    let mut out = Vec::new();
    let error = get_result("print 1; x = ; print 2;", &mut out).unwrap_err();
    assert!(out.is_empty());

    let errors = error.downcast_ref::<SyntaxErrors>().expect("syntax errors");
    assert_eq!(errors.0.len(), 1);
    assert_eq!(errors.to_string(), "Syntax error at line 1: unexpected token ';' (value=;)");
}

#[test]
fn comparisons_are_not_associative() {
    assert_failure("print 1 < 2 < 3;");
    assert_success("print (1 < 2) == (2 < 3);");
}

#[test]
fn comments_and_newlines() {
    assert_output("# header\nx = 2; # two\nprint x; # done\n", "2\n");
}

#[test]
fn stray_break_stops_the_program() {
    assert_output("print 1; break; print 2;", "1\n");
}
