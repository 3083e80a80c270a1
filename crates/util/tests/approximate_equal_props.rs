use media_editor_util::{approximate_equal, lerp, lerp_array};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_state() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6f64..1.0e6).prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive(state in arb_state()) {
        prop_assert!(approximate_equal(&state, &state));
    }

    #[test]
    fn equality_is_symmetric(a in arb_state(), b in arb_state()) {
        prop_assert_eq!(approximate_equal(&a, &b), approximate_equal(&b, &a));
    }

    #[test]
    fn drift_below_tolerance_is_ignored(x in -1.0e3f64..1.0e3, drift in -0.0009f64..0.0009) {
        prop_assert!(approximate_equal(&json!(x), &json!(x + drift)));
    }

    #[test]
    fn lerp_hits_endpoints(start in -1.0e3f64..1.0e3, end in -1.0e3f64..1.0e3) {
        prop_assert_eq!(lerp(start, end, 0.0), start);
        prop_assert!((lerp(start, end, 1.0) - end).abs() < 1e-9);
    }

    #[test]
    fn lerp_array_is_componentwise(a in -100.0f64..100.0, b in -100.0f64..100.0, t in 0.0f64..1.0) {
        let out = lerp_array(&[a, b], &[b, a], t);
        prop_assert_eq!(out, vec![lerp(a, b, t), lerp(b, a, t)]);
    }
}
