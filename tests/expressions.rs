use argand::evaluate;

fn assert_evaluates(source: &str, expected: &str) {
    match evaluate(source) {
        Ok(result) => assert_eq!(result, expected, "for `{source}`"),
        Err(error) => panic!("`{source}` failed: {error}"),
    }
}

fn assert_fails(source: &str, expected: &str) {
    match evaluate(source) {
        Ok(result) => panic!("`{source}` evaluated to `{result}`, expected a failure"),
        Err(error) => assert_eq!(error.to_string(), expected, "for `{source}`"),
    }
}

#[test]
fn literals_and_arithmetic() {
    assert_evaluates("4+5i", "4+5i");
    assert_evaluates("3+i-2i*2", "3-3i");
    assert_evaluates("2.3 + i", "2.3+i");
    assert_evaluates("-3 + -10", "-13");
    assert_evaluates("3 + +2", "5");
}

#[test]
fn scientific_notation() {
    assert_evaluates("3e10", "30000000000");
    assert_evaluates("3e5 * i", "300000i");
}

#[test]
fn leading_dot_literals() {
    assert_evaluates(".5 * 2", "1");
    assert_evaluates(".5i", "0.5i");
}

#[test]
fn power_and_roots() {
    assert_evaluates("(3 + i) ^ 2", "8.000000000000002+6.000000000000001i");
    assert_evaluates("4 ^ 2", "16");
    assert_evaluates("root(4)", "2");
    assert_evaluates("sin(PI / 4) * root(2)", "1");
}

#[test]
fn logarithms() {
    assert_evaluates("log(2, 4)", "2");
    assert_evaluates("log(2, (3 - i))", "1.6609640474436813-0.4641879292313103i");
    assert_evaluates("ln(1)", "0");
}

#[test]
fn constants() {
    assert_evaluates("E", "2.718281828459045");

    let pi = evaluate("PI").unwrap();
    assert_eq!(evaluate("Pi").unwrap(), pi);
    assert_eq!(evaluate("pi").unwrap(), pi);
}

#[test]
fn logarithm_bridge_constants() {
    assert_evaluates("LOGEI", "1.5707963267948966i");
    assert_evaluates("LOGIE", "-0.6366197723675814i");
    assert_eq!(evaluate("ln(i)").unwrap(), evaluate("LOGEI").unwrap());
}

#[test]
fn negative_zero_renders_as_zero() {
    assert_evaluates("-0", "0");
    assert_evaluates("-0i", "0");
    assert_evaluates("0 - 0", "0");
}

#[test]
fn operators_share_the_multiplicative_level() {
    // `^` associates left with `*` and `/`, so the power binds first only
    // when it appears first.
    assert_evaluates("2 ^ 3 ^ 2", "64");
    assert_evaluates("2 * 3 ^ 2", "36");
    assert_evaluates("16 / 4 / 2", "2");
}

#[test]
fn lexer_failures() {
    assert_fails("3..", "Expecting decimal digits after the dot sign");
    assert_fails("3i4", "Unexpected numbers after imaginary part");
    assert_fails("3e", "Unexpected <end> after the exponent sign");
    assert_fails("3ei", "Unexpected character i after the exponent sign");
    assert_fails("$", "Unknown token from character $");
}

#[test]
fn parser_failures() {
    assert_fails("3,", "Unexpected token ,");
    assert_fails("sin(2", "Expecting ) in a function call \"sin\"");
    assert_fails("sin(", "Unexpected termination of expression");
    assert_fails("3 + *2", "Parse error, can not process token *");
    assert_fails("(3 + 2i) * (3 + 2i", "Expecting )");
}

#[test]
fn name_resolution_failures() {
    assert_fails("sin2", "Unknown identifier");
    assert_fails("sin2(3)", "Unknown function sin2");
}

#[test]
fn arity_failures() {
    assert_fails("sin(1, 2)", "sin function can have only one parameter");
    assert_fails("sin()", "sin function can have only one parameter");
    assert_fails("log(4)", "log function must have two parameters");
    assert_fails("log()", "log function must have two parameters");
}

#[test]
fn domain_failures() {
    assert_fails("3 / 0", "You cannot devide by 0");
    assert_fails("0 ^ 0", "You cannot rise 0 to the power of 0");
    assert_fails("root(.5, 3)",
                 "The parameter has to be a integer bigger than 1. Got '0.5' instead.");
    assert_fails("root(1, 3)",
                 "The parameter has to be a integer bigger than 1. Got '1' instead.");
    assert_fails("root(4, 0)", "Complex number can't be zero");
    assert_fails("root(3+i, 2)",
                 "Complex number cannot have imaginary part. Use `power` instead");
}

#[test]
fn extra_arguments_are_ignored_for_two_parameter_functions() {
    assert_evaluates("log(2, 4, 100)", "2");
    assert_evaluates("root(2, 4, 100)", "2");
}

#[test]
fn rendered_results_evaluate_to_themselves() {
    for source in ["4+5i", "3+i-2i*2", "(3 + i) ^ 2", "3e5 * i", "-3 + -10", "4-i"] {
        let rendered = evaluate(source).unwrap();
        assert_eq!(evaluate(&rendered).unwrap(), rendered, "for `{source}`");
    }
}

#[test]
fn whitespace_is_skipped() {
    assert_evaluates("3\t+\u{00A0}2", "5");
}
