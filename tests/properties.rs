use dbgexpr::{
    evaluate,
    interpreter::{lexer::core::tokenize, machine::MachineSnapshot},
};
use proptest::prelude::*;

fn machine() -> MachineSnapshot {
    MachineSnapshot::new().with_register("$a0", 5)
                          .with_register("$t1", -9)
}

/// Well-formed expressions without division, so evaluation always succeeds.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0..10_000i64).prop_map(|n| n.to_string()),
                           (0..0xffffu32).prop_map(|n| format!("{n:#x}")),
                           Just("$a0".to_string()),
                           Just("$t1".to_string())];

    leaf.prop_recursive(5, 24, 2, |inner| {
            let op = prop_oneof![Just("+"),
                                 Just("-"),
                                 Just("*"),
                                 Just("=="),
                                 Just("!="),
                                 Just("<="),
                                 Just("&&"),
                                 Just("||")];
            prop_oneof![(inner.clone(), op, inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
                        inner.clone().prop_map(|e| format!("({e})")),
                        inner.clone().prop_map(|e| format!("-{e}")),
                        inner.prop_map(|e| format!("!{e}"))]
        })
}

proptest! {
    #[test]
    fn lexing_is_idempotent(line in "[0-9a-fxX$()+*/!=<&| -]{0,40}") {
        prop_assert_eq!(tokenize(&line), tokenize(&line));
    }

    #[test]
    fn generated_expressions_evaluate(expr in expression()) {
        prop_assert!(evaluate(&expr, &machine()).is_ok(), "failed: {}", expr);
    }

    #[test]
    fn redundant_parentheses_do_not_change_value(expr in expression()) {
        let machine = machine();
        let bare = evaluate(&expr, &machine).unwrap();
        prop_assert_eq!(evaluate(&format!("({expr})"), &machine), Ok(bare));
        prop_assert_eq!(evaluate(&format!("(({expr}))"), &machine), Ok(bare));
    }

    #[test]
    fn equal_tiers_associate_left(a in -1000i64..1000,
                                  b in -1000i64..1000,
                                  c in -1000i64..1000,
                                  op in prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")]) {
        prop_assume!(op != "/" || (b != 0 && c != 0));
        let machine = machine();
        let chain = format!("{a} {op} {b} {op} {c}");
        let grouped = format!("({a} {op} {b}) {op} {c}");
        prop_assert_eq!(evaluate(&chain, &machine), evaluate(&grouped, &machine));
    }

    #[test]
    fn literals_evaluate_to_themselves(n in any::<u64>()) {
        let machine = machine();
        #[allow(clippy::cast_possible_wrap)]
        let expected = n as i64;
        prop_assert_eq!(evaluate(&n.to_string(), &machine), Ok(expected));
        prop_assert_eq!(evaluate(&format!("{n:#x}"), &machine), Ok(expected));
        prop_assert_eq!(evaluate(&format!("0X{n:X}"), &machine), Ok(expected));
    }
}
