use matlang::{
    ast::{Expr, Literal, Statement},
    error::ParseError,
    interpreter::{
        parser::{ParseOutcome, parse_source},
        printer::render_tree,
    },
};

fn parse_ok(src: &str) -> ParseOutcome {
    let outcome = parse_source(src);
    assert!(!outcome.had_errors(), "unexpected syntax errors: {:?}", outcome.errors);
    outcome
}

fn assert_tree(src: &str, expected: &str) {
    assert_eq!(render_tree(&parse_ok(src).program), expected, "source: {src}");
}

fn error_messages(src: &str) -> Vec<String> {
    parse_source(src).errors.iter().map(ToString::to_string).collect()
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_tree("x = 1 + 2 * 3;", "=\n|  x\n|  +\n|  |  1\n|  |  *\n|  |  |  2\n|  |  |  3\n");
}

#[test]
fn additive_operators_are_left_associative() {
    assert_tree("x = 1 - 2 - 3;", "=\n|  x\n|  -\n|  |  -\n|  |  |  1\n|  |  |  2\n|  |  3\n");
    assert_tree("x = a .* b ./ c;",
                "=\n|  x\n|  ./\n|  |  .*\n|  |  |  a\n|  |  |  b\n|  |  c\n");
}

#[test]
fn transpose_binds_tighter_than_negation() {
    assert_tree("y = -a';", "=\n|  y\n|  UNARY -\n|  |  TRANSPOSE\n|  |  |  a\n");
}

#[test]
fn indexing_applies_to_any_primary() {
    assert_tree("print zeros(2, 3)[0, 0];",
                "PRINT\n|  INDEX\n|  |  zeros\n|  |  |  2\n|  |  |  3\n|  |  0\n|  |  0\n");
    assert_tree("print a[1]';", "PRINT\n|  TRANSPOSE\n|  |  INDEX\n|  |  |  a\n|  |  |  1\n");
}

#[test]
fn index_assignment_targets() {
    assert_tree("m[0, 1] += 2.5;", "+=\n|  INDEX\n|  |  m\n|  |  0\n|  |  1\n|  2.5\n");
}

#[test]
fn matrix_literals() {
    assert_tree("A = [1, 2; 3, 4];",
                "=\n|  A\n|  MATRIX\n|  |  ROW\n|  |  |  1\n|  |  |  2\n|  |  ROW\n|  |  |  3\n|  |  |  4\n");
    assert_tree("E = [];", "=\n|  E\n|  MATRIX\n");
}

#[test]
fn dangling_else_binds_to_the_nearest_if() {
    let outcome = parse_ok("if (a < 1) if (b < 1) print 1; else print 2;");
    let [Statement::If { then_branch,
                         else_branch,
                         .. }] = outcome.program.statements.as_slice()
    else {
        panic!("expected a single if statement");
    };
    assert!(else_branch.is_none());
    assert!(matches!(**then_branch, Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn for_ranges_with_and_without_step() {
    assert_tree("for i = 1:n print i;",
                "FOR\n|  i\n|  RANGE\n|  |  1\n|  |  n\n|  PRINT\n|  |  i\n");
    assert_tree("for i = 10:0:-5 ;",
                "FOR\n|  i\n|  RANGE\n|  |  10\n|  |  0\n|  |  UNARY -\n|  |  |  5\n|  EMPTY\n");
}

#[test]
fn literals_keep_their_kind() {
    let outcome = parse_ok("print 1, 2.0, .5, 1e3, \"s\";");
    let [Statement::Print { values, .. }] = outcome.program.statements.as_slice() else {
        panic!("expected a print statement");
    };
    let literals = values.iter()
                         .map(|value| match value {
                             Expr::Literal { value, .. } => value.clone(),
                             other => panic!("expected a literal, got {other:?}"),
                         })
                         .collect::<Vec<_>>();
    assert_eq!(literals,
               vec![Literal::Int(1),
                    Literal::Float(2.0),
                    Literal::Float(0.5),
                    Literal::Float(1000.0),
                    Literal::Str("s".to_string())]);
}

#[test]
fn statements_record_their_line() {
    let outcome = parse_ok("x = 1;\n\ny = 2;\n# comment\nprint \"a\nb\";\nz = 3;");
    let lines = outcome.program
                       .statements
                       .iter()
                       .map(Statement::line_number)
                       .collect::<Vec<_>>();
    assert_eq!(lines, vec![1, 3, 5, 7]);
}

#[test]
fn comparisons_are_not_associative() {
    assert_eq!(error_messages("x = 1 < 2 < 3;"),
               vec!["Syntax error at line 1: unexpected token LT (value=<)"]);
}

#[test]
fn float_tokens_report_their_source_text() {
    assert_eq!(error_messages("x = 1 1.;"),
               vec!["Syntax error at line 1: unexpected token FLOATNUM (value=1.)"]);
    assert_eq!(error_messages("x = 1 2.50e1;"),
               vec!["Syntax error at line 1: unexpected token FLOATNUM (value=2.50e1)"]);
}

#[test]
fn recovers_at_the_next_statement() {
    let outcome = parse_source("x = ;\ny = * 2;\nprint 3;");
    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(outcome.errors[0].line(), Some(1));
    assert_eq!(outcome.errors[1].line(), Some(2));
    assert_eq!(outcome.program.statements.len(), 1);
}

#[test]
fn recovers_inside_blocks() {
    let outcome = parse_source("{ x = ; y = 1; } print y;");
    assert_eq!(outcome.errors.len(), 1);
    let [Statement::Block { statements, .. }, Statement::Print { .. }] =
        outcome.program.statements.as_slice()
    else {
        panic!("expected a block and a print, got {:?}", outcome.program.statements);
    };
    assert_eq!(statements.len(), 1);
}

#[test]
fn unclosed_block_is_reported_at_end_of_input() {
    let outcome = parse_source("{ x = 1;");
    assert_eq!(outcome.errors, vec![ParseError::UnexpectedEndOfInput]);
    assert_eq!(outcome.errors[0].to_string(), "Syntax error at EOF (unexpected end of file)");
}

#[test]
fn stray_closing_brace_is_dropped() {
    let outcome = parse_source("} x = 1;");
    assert_eq!(error_messages("} x = 1;"),
               vec!["Syntax error at line 1: unexpected token '}' (value=})"]);
    assert_eq!(outcome.program.statements.len(), 1);
}

#[test]
fn illegal_characters_come_first() {
    let messages = error_messages("a = 1 $ 2;");
    assert_eq!(messages,
               vec!["Illegal character '$' at line 1",
                    "Syntax error at line 1: unexpected token INTNUM (value=2)"]);
}

#[test]
fn builtins_take_one_or_two_arguments() {
    assert!(parse_source("x = zeros(2);").errors.is_empty());
    assert!(parse_source("x = eye(2, 2);").errors.is_empty());
    assert!(parse_source("x = ones();").had_errors());
    assert!(parse_source("x = ones(1, 2, 3);").had_errors());
}

#[test]
fn printed_source_parses_to_the_same_tree() {
    let src = "\
A = [1, 2.5; -3, 4]';
B = zeros(2)[1] .+ eye(2, 2) * A;
s = \"text\";
k = 0;
for i = 1:10:2 {
  if (i >= 5) break; else if (i == 3) continue;
  k += -i;
  m[0, 1] /= 2;
}
while ((k < 3) == (1 != 2)) { k *= 2; ; }
if (k > 1) { print k, s; } else print A[0, 1];
{ return (1 + 2) - 3 / 4 ./ 5; }
";
    let original = parse_ok(src);
    let printed = original.program.to_string();
    let reparsed = parse_ok(&printed);

    assert_eq!(render_tree(&reparsed.program), render_tree(&original.program));
    assert_eq!(reparsed.program.to_string(), printed);
}
