use calcd::calc::{parse_operation, MessageError, ParsedOperation};

#[test]
fn test_parse_well_formed_body() {
    let op = parse_operation(r#"{"num1":3,"operator":"+","num2":4}"#).unwrap();

    assert_eq!(
        op,
        ParsedOperation {
            operand1: 3.0,
            operator: '+',
            operand2: 4.0,
        }
    );
}

#[test]
fn test_parse_decimal_and_negative_operands() {
    let op = parse_operation(r#"{"num1":-2.5,"operator":"*","num2":1e3}"#).unwrap();

    assert_eq!(op.operand1, -2.5);
    assert_eq!(op.operator, '*');
    assert_eq!(op.operand2, 1000.0);
}

#[test]
fn test_parse_second_operand_without_closing_brace() {
    let op = parse_operation(r#""num1":1,"operator":"-","num2":2"#).unwrap();
    assert_eq!(op.operand2, 2.0);
}

#[test]
fn test_parse_missing_num2_marker() {
    let result = parse_operation(r#"{"num1":3,"operator":"+"}"#);
    assert_eq!(result, Err(MessageError::MissingMarker("\"num2\":")));
}

#[test]
fn test_parse_missing_num1_marker() {
    let result = parse_operation(r#"{"operator":"+","num2":4}"#);
    assert!(matches!(result, Err(MessageError::MissingMarker(_))));
}

#[test]
fn test_parse_reordered_fields_fail() {
    let result = parse_operation(r#"{"operator":"+","num1":3,"num2":4}"#);
    assert!(matches!(result, Err(MessageError::MissingMarker(_))));
}

#[test]
fn test_parse_operator_at_end_of_input() {
    let result = parse_operation(r#"{"num1":3,"operator":""#);
    assert_eq!(result, Err(MessageError::MissingOperator));
}

#[test]
fn test_parse_whitespace_in_number_fails() {
    let result = parse_operation(r#"{"num1": 3,"operator":"+","num2":4}"#);
    assert!(matches!(result, Err(MessageError::InvalidNumber { .. })));

    let result = parse_operation(r#"{"num1":3,"operator":"+","num2":4 }"#);
    assert!(matches!(result, Err(MessageError::InvalidNumber { .. })));
}

#[test]
fn test_parse_non_numeric_operand() {
    let result = parse_operation(r#"{"num1":"three","operator":"+","num2":4}"#);
    assert!(matches!(result, Err(MessageError::InvalidNumber { .. })));
}

#[test]
fn test_parse_does_not_validate_operator() {
    let op = parse_operation(r#"{"num1":3,"operator":"%","num2":4}"#).unwrap();
    assert_eq!(op.operator, '%');
}

#[test]
fn test_parse_tolerates_malformed_json_around_markers() {
    let op = parse_operation(r#"garbage "num1":8, junk "operator":"/ more "num2":2} trailing"#)
        .unwrap();

    assert_eq!(op.operand1, 8.0);
    assert_eq!(op.operator, '/');
    assert_eq!(op.operand2, 2.0);
}
