use calcd::interactive;

fn session(input: &str) -> anyhow::Result<String> {
    let mut out = Vec::new();
    interactive::run(input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_prompts_and_result() {
    let out = session("3\n*\n4\n").unwrap();

    assert_eq!(
        out,
        "Basic Calculator\n\
         Enter first number: \
         Enter operator (+, -, *, /): \
         Enter second number: \
         Result: 12\n"
    );
}

#[test]
fn test_single_line_input() {
    let out = session("7.5 - 2\n").unwrap();
    assert!(out.ends_with("Result: 5.5\n"));
}

#[test]
fn test_operator_glued_to_second_number() {
    let out = session("9 /3\n").unwrap();
    assert!(out.ends_with("Result: 3\n"));
}

#[test]
fn test_result_uses_six_significant_digits() {
    let out = session("1 / 3\n").unwrap();
    assert!(out.ends_with("Result: 0.333333\n"), "{out}");

    let out = session("2 / 3\n").unwrap();
    assert!(out.ends_with("Result: 0.666667\n"), "{out}");
}

#[test]
fn test_large_result_uses_scientific_notation() {
    let out = session("1e20 * 1\n").unwrap();
    assert!(out.ends_with("Result: 1e+20\n"), "{out}");

    let out = session("1234 * 1000\n").unwrap();
    assert!(out.ends_with("Result: 1.234e+06\n"), "{out}");
}

#[test]
fn test_small_result_uses_scientific_notation() {
    let out = session("1 / 200000\n").unwrap();
    assert!(out.ends_with("Result: 5e-06\n"), "{out}");
}

#[test]
fn test_division_by_zero() {
    let out = session("1 / 0\n").unwrap();
    assert!(out.ends_with("Error: Division by zero!\n"));
}

#[test]
fn test_invalid_operator() {
    let out = session("1 % 2\n").unwrap();
    assert!(out.ends_with("Error: Invalid operator!\n"));
}

#[test]
fn test_bad_number_is_an_error() {
    assert!(session("one + 2\n").is_err());
}

#[test]
fn test_premature_eof_is_an_error() {
    assert!(session("1 +\n").is_err());
}
