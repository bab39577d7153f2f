use std::fs;

use dbgexpr::{
    config::EvalConfig,
    error::{EvalError, ExprError, LexError},
    evaluate, evaluate_with,
    interpreter::machine::MachineSnapshot,
};
use walkdir::WalkDir;

fn machine() -> MachineSnapshot {
    MachineSnapshot::new().with_register("$a0", 5)
                          .with_register("$t0", -2)
                          .with_register("$sp", 0x1000)
                          .with_register("$pc", 0x8000_0000)
                          .with_memory(0x1000, 77)
                          .with_memory(0x8000_0000, 0x13)
}

/// Name of the error variant, e.g. `DivisionByZero`.
fn error_name(e: &ExprError) -> String {
    let debug = match e {
        ExprError::Lex(e) => format!("{e:?}"),
        ExprError::Eval(e) => format!("{e:?}"),
    };
    debug.chars().take_while(char::is_ascii_alphanumeric).collect()
}

#[test]
fn case_files_work() {
    let machine = machine();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "cases"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (expr, expected) = line.rsplit_once("=>")
                                       .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            let (expr, expected) = (expr.trim(), expected.trim());
            count += 1;

            let result = evaluate(expr, &machine);
            if let Some(kind) = expected.strip_prefix('!') {
                match result {
                    Err(e) => assert_eq!(error_name(&e), kind, "{path:?}:{}: {expr}", i + 1),
                    Ok(v) => panic!("{path:?}:{}: {expr} gave {v}, expected {kind}", i + 1),
                }
            } else {
                let expected: i64 = expected.parse()
                                            .unwrap_or_else(|_| panic!("{path:?}:{}: bad value", i + 1));
                match result {
                    Ok(v) => assert_eq!(v, expected, "{path:?}:{}: {expr}", i + 1),
                    Err(e) => panic!("{path:?}:{}: {expr} failed: {e}", i + 1),
                }
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src, &machine()) {
        Ok(v) => assert_eq!(v, expected, "expression: {src}"),
        Err(e) => panic!("Expression failed: {e}\n{}", e.caret(src)),
    }
}

fn assert_failure(src: &str) -> ExprError {
    match evaluate(src, &machine()) {
        Ok(v) => panic!("Expression succeeded with {v} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn literals() {
    assert_value("0", 0);
    assert_value("1234567890", 1_234_567_890);
    assert_value("0x7fffffffffffffff", i64::MAX);
    assert_value("0XaBc", 0xabc);
    assert_value("0xffffffffffffffff", -1);
}

#[test]
fn precedence_and_parentheses() {
    assert_value("1+2*3", 7);
    assert_value("(1+2)*3", 9);
    assert_value("2*3+4*5", 26);
    assert_value("(2*(3+4))*5", 70);
}

#[test]
fn division() {
    assert_value("10/3", 3);
    assert_value("-10/3", -3);
    assert_eq!(assert_failure("10/0"), ExprError::Eval(EvalError::DivisionByZero { offset: 2 }));
    assert_eq!(assert_failure("1/(2-2)"),
               ExprError::Eval(EvalError::DivisionByZero { offset: 1 }));
}

#[test]
fn comparisons_and_logic() {
    assert_value("1==1", 1);
    assert_value("1!=1", 0);
    assert_value("1<=2&&2<=3", 1);
    assert_value("0||0", 0);
    assert_value("$a0 == 5 && !$t0 == 0", 1);
}

#[test]
fn registers_and_memory() {
    assert_value("$a0+1", 6);
    assert_value("$pc + 4", 0x8000_0004);
    assert_value("*$pc", 0x13);
    assert_value("*($sp)", 77);
    assert_eq!(assert_failure("$a9"),
               ExprError::Eval(EvalError::UnknownRegister { name:   "$a9".to_string(),
                                                            offset: 0, }));
    assert!(matches!(assert_failure("*0"),
                     ExprError::Eval(EvalError::BadAddress { addr: 0, .. })));
}

#[test]
fn malformed_input() {
    assert_eq!(assert_failure("(1+2"),
               ExprError::Eval(EvalError::UnbalancedParentheses { offset: 0 }));
    assert_eq!(assert_failure(""), ExprError::Eval(EvalError::EmptyRange { offset: 0 }));
    assert_eq!(assert_failure("  \t "), ExprError::Eval(EvalError::EmptyRange { offset: 4 }));
    assert_eq!(assert_failure("3 4"), ExprError::Eval(EvalError::NoOperator { offset: 0 }));
    assert_eq!(assert_failure("1 ? 2"), ExprError::Lex(LexError::NoMatch { offset: 2 }));
    assert_eq!(assert_failure("99999999999999999999"),
               ExprError::Eval(EvalError::LiteralTooLarge { offset: 0 }));
}

#[test]
fn caret_points_at_failure() {
    let e = assert_failure("1 + (2 * $bad)");
    assert_eq!(e.caret("1 + (2 * $bad)"), "1 + (2 * $bad)\n         ^");

    let e = assert_failure("7 -");
    assert_eq!(e.caret("7 -"), "7 -\n   ^");
}

#[test]
fn input_length_is_bounded() {
    let config = EvalConfig { max_input_len: 8 };
    assert_eq!(evaluate_with("1+1+1+1", &machine(), &config), Ok(4));
    assert_eq!(evaluate_with("1+1+1+1+1", &machine(), &config),
               Err(ExprError::Lex(LexError::InputTooLong { len: 9, max: 8 })));

    let long = format!("{}1", "1+".repeat(1000));
    assert!(matches!(evaluate(&long, &machine()),
                     Err(ExprError::Lex(LexError::InputTooLong { .. }))));
}

#[test]
fn errors_display_position() {
    let e = assert_failure("1/0");
    assert_eq!(e.to_string(), "Error at position 1: Division by zero.");
    assert_eq!(e.offset(), 1);
}
