use pg_complex::codec::{decode, encode, format, parse};
use pg_complex::numeric::{Complex, Tolerance};
use pg_complex::operators::OperatorSuite;
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
}

// Property 1: Text round trip is bit-exact for every finite value
proptest! {
    #[test]
    fn prop_text_round_trip(a in finite(), b in finite()) {
        let c = Complex::new(a, b);
        let text = format(&c);
        let back = parse(&text).unwrap();
        prop_assert_eq!(back.to_bits(), c.to_bits(), "round trip of {}", text);
    }
}

// Property 2: Binary round trip is bit-exact
proptest! {
    #[test]
    fn prop_binary_round_trip(a in finite(), b in finite()) {
        let c = Complex::new(a, b);
        prop_assert_eq!(decode(&encode(&c)).to_bits(), c.to_bits());
    }
}

// Property 3: No constructed value carries a negative zero
proptest! {
    #[test]
    fn prop_no_negative_zero(a in finite(), b in finite()) {
        let ops = OperatorSuite::default();
        let c = Complex::new(a, b);
        for v in [c, ops.conjugate(&c), ops.sub(&c, &c), ops.mul(&c, &Complex::ZERO)] {
            prop_assert!(!(v.re() == 0.0 && v.re().is_sign_negative()));
            prop_assert!(!(v.im() == 0.0 && v.im().is_sign_negative()));
        }
    }
}

// Property 4: Whitespace around tokens never changes the parsed value
proptest! {
    #[test]
    fn prop_whitespace_insensitive(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        ws in prop::collection::vec(prop::sample::select(vec![" ", "\t", "\n", "\r", ""]), 6)
    ) {
        let text = format!(
            "{}({}{},{}{}{}){}",
            ws[0], a, ws[1], ws[2], b, ws[3], ws[4]
        );
        let c = parse(&text).unwrap();
        prop_assert_eq!(c, Complex::new(a, b));
    }
}

// Property 5: Subtraction undoes addition within tolerance
proptest! {
    #[test]
    fn prop_sub_inverts_add(
        a in -1e3f64..1e3, b in -1e3f64..1e3,
        c in -1e3f64..1e3, d in -1e3f64..1e3
    ) {
        let ops = OperatorSuite::default();
        let x = Complex::new(a, b);
        let y = Complex::new(c, d);
        prop_assert!(ops.equal(&ops.sub(&ops.add(&x, &y), &y), &x));
    }
}

// Property 6: Distance is symmetric, non-negative and zero on itself
proptest! {
    #[test]
    fn prop_distance_metric(
        a in -1e6f64..1e6, b in -1e6f64..1e6,
        c in -1e6f64..1e6, d in -1e6f64..1e6
    ) {
        let ops = OperatorSuite::default();
        let x = Complex::new(a, b);
        let y = Complex::new(c, d);
        let dxy = ops.distance(&x, &y);
        prop_assert!(dxy >= 0.0);
        prop_assert_eq!(dxy, ops.distance(&y, &x));
        prop_assert_eq!(ops.distance(&x, &x), 0.0);

        let naive = ((a - c).powi(2) + (b - d).powi(2)).sqrt();
        prop_assert!((dxy - naive).abs() <= 1e-6 * naive.max(1.0));
    }
}

// Property 7: A value divided by itself is one
proptest! {
    #[test]
    fn prop_div_self_is_one(a in 1e-3f64..1e3, b in -1e3f64..1e3) {
        let ops = OperatorSuite::default();
        let x = Complex::new(a, b);
        let q = ops.div(&x, &x).unwrap();
        prop_assert!(q.approx_eq(&Complex::new(1.0, 0.0), &Tolerance::default()));
    }
}

// Property 8: Positional predicates are mutually exclusive per axis
proptest! {
    #[test]
    fn prop_positional_exclusive(
        a in -10f64..10.0, b in -10f64..10.0,
        c in -10f64..10.0, d in -10f64..10.0
    ) {
        let ops = OperatorSuite::default();
        let x = Complex::new(a, b);
        let y = Complex::new(c, d);
        prop_assert!(!(ops.strictly_left_of(&x, &y) && ops.strictly_right_of(&x, &y)));
        prop_assert!(!(ops.strictly_below(&x, &y) && ops.strictly_above(&x, &y)));
        prop_assert_eq!(ops.strictly_left_of(&x, &y), ops.strictly_right_of(&y, &x));
    }
}
