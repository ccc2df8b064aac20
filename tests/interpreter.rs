use matlang::{
    ast::{Expr, Literal, Program, Statement},
    interpreter::{
        evaluator::core::{Flow, Interpreter},
        parser::parse_source,
        value::{core::Value, matrix::Matrix},
    },
};

fn run(src: &str) -> String {
    let outcome = parse_source(src);
    assert!(!outcome.had_errors(), "syntax errors: {:?}", outcome.errors);

    let mut interpreter = Interpreter::new(Vec::new());
    if let Err(e) = interpreter.run(&outcome.program) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(interpreter.into_inner()).expect("UTF-8 output")
}

fn int(n: i64) -> Value {
    Value::Integer(n)
}

#[test]
fn globals_survive_the_run() {
    let outcome = parse_source("x = 2; z = 0; { y = 3; } for i = 1:2 { z = i; w = i; }");
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.run(&outcome.program).unwrap();

    assert_eq!(interpreter.frames.len(), 1);
    assert_eq!(interpreter.lookup("x"), Ok(&int(2)));
    assert_eq!(interpreter.lookup("z"), Ok(&int(2)));
    assert_eq!(interpreter.lookup("y").unwrap_err().kind(), "UnknownVariable");
    assert_eq!(interpreter.lookup("w").unwrap_err().kind(), "UnknownVariable");
    assert_eq!(interpreter.lookup("i").unwrap_err().kind(), "UnknownVariable");
}

#[test]
fn every_run_starts_fresh() {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.run(&parse_source("x = 1;").program).unwrap();
    interpreter.run(&parse_source("y = 1;").program).unwrap();

    assert!(interpreter.lookup("x").is_err());
    assert_eq!(interpreter.lookup("y"), Ok(&int(1)));
}

#[test]
fn frames_are_popped_after_errors() {
    let mut interpreter = Interpreter::new(Vec::new());
    let result = interpreter.run(&parse_source("for i = 1:3 { { x = 1 / 0; } }").program);

    assert_eq!(result.unwrap_err().kind(), "DivisionByZeroError");
    assert_eq!(interpreter.frames.len(), 1);
}

#[test]
fn loop_variable_reassignment_does_not_change_iteration() {
    assert_eq!(run("n = 0; for i = 1:3 { i = 10; n += 1; } print n;"), "3\n");
}

#[test]
fn statements_report_control_flow() {
    let mut interpreter = Interpreter::new(Vec::new());

    assert_eq!(interpreter.exec_statement(&Statement::Break { line: 1 }), Ok(Flow::Break));
    assert_eq!(interpreter.exec_statement(&Statement::Continue { line: 1 }),
               Ok(Flow::Continue));

    let value = Expr::Literal { value: Literal::Int(4),
                                line:  1, };
    assert_eq!(interpreter.exec_statement(&Statement::Return { value, line: 1 }),
               Ok(Flow::Return(int(4))));
}

#[test]
fn return_value_is_handed_back() {
    let program = parse_source("x = [1, 2]; return x';").program;
    let mut interpreter = Interpreter::new(Vec::new());
    let returned = interpreter.run(&program).unwrap();

    let expected = Matrix::from_rows(vec![vec![int(1)], vec![int(2)]]).unwrap();
    assert_eq!(returned, Some(Value::from(expected)));
}

#[test]
fn empty_program_does_nothing() {
    let mut interpreter = Interpreter::new(Vec::new());
    assert_eq!(interpreter.run(&Program { statements: Vec::new() }), Ok(None));
    assert!(interpreter.into_inner().is_empty());
}

#[test]
fn eval_index_selects_rows_and_elements() {
    let matrix = Value::from(Matrix::from_rows(vec![vec![int(1), int(2)],
                                                    vec![int(3), int(4)]]).unwrap());

    let element = Interpreter::<Vec<u8>>::eval_index(&matrix, &[int(1), int(0)]);
    assert_eq!(element, Ok(int(3)));

    let row = Interpreter::<Vec<u8>>::eval_index(&matrix, &[int(0)]).unwrap();
    assert_eq!(row.to_string(), "[[1, 2]]");

    let error = Interpreter::<Vec<u8>>::eval_index(&matrix, &[int(0), int(2)]).unwrap_err();
    assert_eq!(error.to_string(),
               "IndexError: Index 2 out of bounds for dimension 1 of matrix (size 2)");
}

#[test]
fn matrix_construction_and_access() {
    let jagged = Matrix::from_rows(vec![vec![int(1), int(2)], vec![int(3)]]);
    assert_eq!(jagged.unwrap_err().kind(), "DimensionError");

    let mut matrix = Matrix::filled(2, 3, &Value::Real(0.0)).unwrap();
    matrix.set(1, 2, int(7)).unwrap();
    assert_eq!(matrix.get(1, 2), Ok(&int(7)));
    assert_eq!(matrix.transpose().shape(), (3, 2));
    assert_eq!(matrix.transpose().get(2, 1), Ok(&int(7)));
    assert!(matrix.set(2, 0, int(1)).is_err());

    let row = Matrix::filled(1, 3, &int(5)).unwrap();
    matrix.set_row(0, &row).unwrap();
    assert_eq!(matrix.row(0).unwrap(), row);
    assert!(matrix.set_row(0, &Matrix::filled(1, 2, &int(5)).unwrap()).is_err());

    let too_large = Matrix::identity(usize::MAX, 2).unwrap_err();
    assert_eq!(too_large.kind(), "DimensionError");
    assert!(Matrix::filled(usize::MAX, 0, &int(0)).is_ok());
}

#[test]
fn values_print_like_the_language() {
    assert_eq!(Value::Real(3.0).to_string(), "3.0");
    assert_eq!(Value::Real(0.5).to_string(), "0.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Str("raw text".to_string()).to_string(), "raw text");
    assert_eq!(Value::from(Matrix::identity(2, 2).unwrap()).to_string(), "[[1.0, 0.0], [0.0, 1.0]]");
}

#[test]
fn print_joins_values_with_spaces() {
    assert_eq!(run("print 1, 2.5, \"three\", 1 < 2;"), "1 2.5 three true\n");
}
