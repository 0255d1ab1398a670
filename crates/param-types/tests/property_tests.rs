//! Property-based tests for param-types.

use param_types::foundation::{CheckerExt, Value, check_value, classify};
use param_types::prelude::{ValidatorConfig, validate_with, validate_with_errors_with};
use param_types::validators::{kind_of, number, one_of, string};
use param_types::{args, checkers};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

// ============================================================================
// IDEMPOTENCY: call(x) == call(x)
// ============================================================================

proptest! {
    #[test]
    fn strict_call_is_idempotent(a in value(), b in value()) {
        let validator = validate_with_errors_with(
            &ValidatorConfig::active(),
            "pair",
            checkers![string().required(), number()],
        ).unwrap();
        let input = vec![a, b];
        let first = validator.call(&input).map_err(|e| e.message);
        let second = validator.call(&input).map_err(|e| e.message);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn logging_matches_strict_on_first_failure(a in value(), b in value()) {
        let list = || checkers![number().required(), string().required()];
        let config = ValidatorConfig::active();
        let strict = validate_with_errors_with(&config, "pair", list()).unwrap();
        let logging = validate_with(&config, "pair", list()).unwrap();

        let input = vec![a, b];
        let first = strict.call(&input).err().map(|e| e.message);
        let all = logging.call(&input);
        prop_assert_eq!(first, all.iter().next().map(|e| e.message.clone()));
    }
}

// ============================================================================
// MODIFIER LAWS
// ============================================================================

proptest! {
    #[test]
    fn optional_passes_iff_missing_or_matching(v in value()) {
        let outcome = check_value(&number(), &v, "m", 0).is_ok();
        prop_assert_eq!(outcome, v.is_nullish() || matches!(v, Value::Number(_)));
    }

    #[test]
    fn required_fails_on_missing(v in value()) {
        let optional = check_value(&string(), &v, "m", 0).is_ok();
        let required = check_value(&string().required(), &v, "m", 0).is_ok();
        prop_assert_eq!(required, optional && !v.is_nullish());
    }

    #[test]
    fn nullable_accepts_missing(v in value()) {
        let checker = string().required().nullable();
        let outcome = check_value(&checker, &v, "m", 0).is_ok();
        prop_assert_eq!(outcome, v.is_nullish() || matches!(v, Value::String(_)));
    }

    #[test]
    fn own_kind_always_matches(v in value()) {
        let checker = kind_of(classify(&v));
        prop_assert!(check_value(&checker, &v, "m", 0).is_ok());
    }

    #[test]
    fn one_of_contains_each_listed_number(n in any::<i32>(), others in prop::collection::vec(any::<i32>(), 0..5)) {
        let mut allowed = others;
        allowed.push(n);
        prop_assert!(check_value(&one_of(allowed), &Value::from(n), "m", 0).is_ok());
    }

    #[test]
    fn extra_arguments_never_matter(extra in prop::collection::vec(value(), 0..5)) {
        let validator = validate_with_errors_with(
            &ValidatorConfig::active(),
            "one",
            checkers![number().required()],
        ).unwrap();
        let mut input = args![1];
        input.extend(extra);
        prop_assert!(validator.call(&input).is_ok());
    }
}
