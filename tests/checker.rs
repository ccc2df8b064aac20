use matlang::{
    check_source,
    interpreter::{
        checker::{
            TypeChecker,
            types::{Type, promote},
        },
        parser::parse_source,
    },
};

fn diagnostics(src: &str) -> Vec<String> {
    check_source(src).unwrap_or_else(|e| panic!("Script did not parse: {e}"))
                     .iter()
                     .map(ToString::to_string)
                     .collect()
}

fn assert_clean(src: &str) {
    let found = diagnostics(src);
    assert!(found.is_empty(), "unexpected diagnostics for {src}: {found:?}");
}

fn assert_diagnostics(src: &str, expected: &[&str]) {
    assert_eq!(diagnostics(src), expected, "source: {src}");
}

#[test]
fn well_typed_matrix_program() {
    assert_clean("A = zeros(2, 3);
                  B = A';
                  C = A * B;
                  print C[0, 1];
                  for i = 0:1 print A[i];
                  D = [1, 2.5; 3, 4] .* ones(2, 2);
                  s = \"a\" + \"b\";");
}

#[test]
fn undefined_variables_are_reported_once() {
    assert_diagnostics("print x;", &["[line 1] Undefined variable 'x'"]);
    assert_diagnostics("y = x + 1; z = y * 2;", &["[line 1] Undefined variable 'x'"]);
    assert_diagnostics("u += 1;", &["[line 1] Undefined variable 'u'"]);
}

#[test]
fn first_assignment_fixes_the_type() {
    assert_diagnostics("x = 1; x = \"one\";", &["[line 1] Cannot assign string to int"]);
    assert_diagnostics("x = 1; x = 2.5;", &["[line 1] Cannot assign float to int"]);
    assert_diagnostics("M = ones(2, 2); M = ones(3, 3);",
                       &["[line 1] Cannot assign matrix<float>[3x3] to matrix<float>[2x2]"]);
    assert_clean("n = 2; M = zeros(n, 2); M = ones(4, 2);");
}

#[test]
fn compound_assignment_must_keep_the_type() {
    assert_diagnostics("x = 1; x += 0.5;",
                       &["[line 1] Result of '+=' (float) not assignable to int"]);
    assert_clean("x = 1.5; x += 1; x *= 2;");
    assert_clean("s = \"a\"; s += \"b\";");
}

#[test]
fn matrix_product_requires_conformable_operands() {
    assert_diagnostics("A = zeros(2, 3); B = A * A;",
                       &["[line 1] Matrix dimensions incompatible for multiplication: \
                          matrix<float>[2x3] * matrix<float>[2x3]"]);
    assert_clean("A = zeros(2, 3); B = A * zeros(3, 5); C = B' * B;");
    assert_clean("n = 3; A = zeros(n, n); B = A * ones(2, 2);");
}

#[test]
fn other_matrix_operators_compare_total_shapes() {
    assert_diagnostics("x = ones(2, 2) + ones(3, 3);",
                       &["[line 1] Matrix dimensions must match for '+': matrix<float>[2x2] \
                          vs matrix<float>[3x3]"]);
    assert_diagnostics("A = ones(3); C = A ./ zeros(3, 1);",
                       &["[line 1] Matrix dimensions must match for './': matrix<float>[3x3] \
                          vs matrix<float>[3x1]"]);
    assert_clean("x = ones(2, 2) - eye(2) .- zeros(2);");
}

#[test]
fn block_matrices_use_their_total_shape() {
    assert_clean("B = [eye(2), zeros(2, 2)]; C = B + ones(2, 4); P = B * B';");
    assert_diagnostics("B = [eye(2), zeros(2, 2)]; D = B + ones(2, 2);",
                       &["[line 1] Matrix dimensions must match for '+': \
                          matrix<matrix<float>[2x2]>[1x2] vs matrix<float>[2x2]"]);
}

#[test]
fn elementwise_operators_require_matrices() {
    assert_diagnostics("x = 1 .+ 2;",
                       &["[line 1] Element-wise '.+' requires matrices, found int and int"]);
    assert_diagnostics("x = ones(2) .* 2;",
                       &["[line 1] Element-wise '.*' requires matrices, found \
                          matrix<float>[2x2] and int"]);
}

#[test]
fn scalar_operator_table() {
    assert_diagnostics("x = \"a\" - \"b\";",
                       &["[line 1] Operator '-' is not defined for string and string"]);
    assert_diagnostics("x = 1 + \"a\";",
                       &["[line 1] Operator '+' is not defined for int and string"]);
    assert_diagnostics("x = -\"a\";", &["[line 1] Unary '-' is not defined for string"]);
    assert_clean("x = 7 / 2; x = 3; y = 1 + 2.0; y = 0.5;");
}

#[test]
fn comparisons_produce_bool() {
    assert_clean("b = 1 < 2.5; b = \"a\" == \"b\"; b = b == b;");
    assert_diagnostics("b = \"a\" < 1;", &["[line 1] Cannot compare string with int using '<'"]);
    assert_diagnostics("b = (1 < 2) < (2 < 3);",
                       &["[line 1] Cannot compare bool with bool using '<'"]);
}

#[test]
fn conditions_must_be_bool() {
    assert_diagnostics("if (1) print 1;", &["[line 1] Expected bool in if condition, got int"]);
    assert_diagnostics("while (zeros(1)) ;",
                       &["[line 1] Expected bool in while condition, got matrix<float>[1x1]"]);
    assert_clean("if (1 == 1.0) print 1; else print 2;");
}

#[test]
fn loop_control_outside_of_loops() {
    assert_diagnostics("break;", &["[line 1] Break outside of the \"while\" or \"for\" loop"]);
    assert_diagnostics("{ continue; }",
                       &["[line 1] Continue outside of the \"while\" or \"for\" loop"]);
    assert_diagnostics("if (1 < 2) break;",
                       &["[line 1] Break outside of the \"while\" or \"for\" loop"]);
    assert_clean("while (1 < 2) { if (1 < 2) { break; } }");
    assert_clean("for i = 1:3 { { continue; } }");
}

#[test]
fn loop_flag_ends_with_the_loop() {
    assert_diagnostics("for i = 1:3 print i;\nbreak;",
                       &["[line 2] Break outside of the \"while\" or \"for\" loop"]);
}

#[test]
fn indexing_checks() {
    assert_diagnostics("A = zeros(2, 3); x = A[2, 0];",
                       &["[line 1] Index 2 out of bounds for dimension 0 of matrix A (size 2)"]);
    assert_diagnostics("A = zeros(2, 3); x = A[0, 3];",
                       &["[line 1] Index 3 out of bounds for dimension 1 of matrix A (size 3)"]);
    assert_diagnostics("A = zeros(2, 3); x = A[0.5, 0];",
                       &["[line 1] Index must be int, found float"]);
    assert_diagnostics("s = 1; x = s[0];", &["[line 1] Cannot index into int"]);
    assert_diagnostics("x = zeros(2, 3)[5, 5];",
                       &["[line 1] Index 5 out of bounds for dimension 0 of matrix (size 2)",
                         "[line 1] Index 5 out of bounds for dimension 1 of matrix (size 3)"]);
}

#[test]
fn indexing_selects_rows_and_elements() {
    assert_clean("A = zeros(2, 3); r = A[1]; r = [1.0, 2.0, 3.0]; e = A[1, 2]; e = 0.5;");
    assert_diagnostics("A = zeros(2, 3); r = A[1]; r = ones(2, 3);",
                       &["[line 1] Cannot assign matrix<float>[2x3] to matrix<float>[1x3]"]);
}

#[test]
fn indexed_assignment() {
    assert_clean("A = zeros(2, 2); A[0, 0] = 1; A[1] = [1.0, 2.0]; A[0, 1] += 2;");
    assert_diagnostics("A = zeros(2, 2); A[0, 0] = \"s\";",
                       &["[line 1] Cannot assign string to float"]);
    assert_diagnostics("B[0] = 1;", &["[line 1] Undefined variable 'B'"]);
}

#[test]
fn matrix_literal_checks() {
    assert_diagnostics("M = [1, 2; 3];",
                       &["[line 1] Jagged matrix literal (rows with different lengths)"]);
    assert_diagnostics("M = [1, \"a\"];",
                       &["[line 1] Inconsistent element types in matrix: int vs string"]);
    assert_clean("M = [1, 2.5]; M = [1.5, 2.0]; E = []; E = zeros(0);");
}

#[test]
fn builtin_call_checks() {
    assert_diagnostics("E = eye(2, 3);", &["[line 1] eye expects a square shape, got 2x3"]);
    assert_diagnostics("Z = zeros(1.5);",
                       &["[line 1] Argument 0 of 'zeros' must be int, found float"]);
    assert_clean("n = 4; Z = zeros(n); E = eye(n, n); O = ones(2, n);");
    assert_clean("A = ones(3); B = A * eye(3); C = A + zeros(3, 3);");
}

#[test]
fn transpose_swaps_extents() {
    assert_diagnostics("x = 3';", &["[line 1] Transpose requires a matrix, found int"]);
    assert_clean("A = zeros(2, 3)'; B = A * zeros(2, 2);");
}

#[test]
fn ranges_iterate_integers() {
    assert_diagnostics("for i = 1.5:3 print i;", &["[line 1] Range start must be int, found float"]);
    assert_diagnostics("for i = 1:3:0 print i;", &["[line 1] Range step cannot be zero"]);
    assert_diagnostics("for i = 1:3 { x = i; x = 2.5; }",
                       &["[line 1] Cannot assign float to int"]);
}

#[test]
fn blocks_scope_their_bindings() {
    assert_clean("{ y = 1; } y = \"s\";");
    assert_diagnostics("x = 1; { x = \"s\"; }", &["[line 1] Cannot assign string to int"]);
    assert_diagnostics("{ y = 1; } print y;", &["[line 1] Undefined variable 'y'"]);
}

#[test]
fn checking_continues_after_errors() {
    assert_diagnostics("x = 1 .+ 2;\nbreak;\nprint y;",
                       &["[line 1] Element-wise '.+' requires matrices, found int and int",
                         "[line 2] Break outside of the \"while\" or \"for\" loop",
                         "[line 3] Undefined variable 'y'"]);
}

#[test]
fn each_run_starts_from_a_fresh_scope() {
    let mut checker = TypeChecker::new();
    assert!(checker.check(&parse_source("x = 1;").program).is_empty());

    let errors = checker.check(&parse_source("print x;").program);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 1);
}

#[test]
fn syntax_errors_are_returned_instead() {
    assert!(check_source("x = ;").is_err());
}

#[test]
fn type_display_and_compatibility() {
    assert_eq!(Type::matrix(Type::Float, Some(2), None).to_string(), "matrix<float>[2x?]");
    assert_eq!(Type::Range(Box::new(Type::Int)).to_string(), "range<int>");

    let known = Type::matrix(Type::Float, Some(2), Some(2));
    let open = Type::matrix(Type::Float, None, Some(2));
    assert!(open.accepts(&known));
    assert!(known.accepts(&open));
    assert!(!known.accepts(&Type::matrix(Type::Int, Some(2), Some(2))));
    assert!(!Type::Float.accepts(&Type::Int));

    assert_eq!(promote(&Type::Int, &Type::Int), Some(Type::Int));
    assert_eq!(promote(&Type::Int, &Type::Float), Some(Type::Float));
    assert_eq!(promote(&Type::Str, &Type::Int), None);
}
