//! Property-based tests for exact scalar arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::ExactScalar;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn scalar() -> impl Strategy<Value = ExactScalar> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| ExactScalar::from_ratio(n, d).unwrap())
    }

    fn non_zero_scalar() -> impl Strategy<Value = ExactScalar> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| ExactScalar::from_ratio(n, d).unwrap())
    }

    proptest! {
        #[test]
        fn add_commutative(a in scalar(), b in scalar()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_distributes(a in scalar(), b in scalar(), c in scalar()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn sub_is_inverse_of_add(a in scalar(), b in scalar()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn div_is_inverse_of_mul(a in scalar(), b in non_zero_scalar()) {
            prop_assert_eq!((&a * &b) / &b, a);
        }

        #[test]
        fn recip_times_self_is_one(a in non_zero_scalar()) {
            prop_assert!((&a * &a.recip().unwrap()).is_one());
        }

        #[test]
        fn near_zero_ignores_sign(a in scalar()) {
            prop_assert_eq!(a.is_near_zero(), (-&a).is_near_zero());
        }

        #[test]
        fn exact_zero_is_near_zero_but_small_ints_are_not(n in non_zero_int()) {
            prop_assert!(ExactScalar::zero().is_near_zero());
            prop_assert!(!ExactScalar::from_i64(n).is_near_zero());
        }

        #[test]
        fn rounding_error_is_at_most_half_an_ulp(a in scalar(), places in 0usize..8) {
            let rounded = a.round_to_places(places);
            let half_ulp = ExactScalar::pow10(-i32::try_from(places).unwrap()) / ExactScalar::from_i64(2);
            prop_assert!((rounded - &a).abs() <= half_ulp);
        }

        #[test]
        fn sqrt_squares_back(n in 0i64..100_000, d in 1i64..1000) {
            let a = ExactScalar::from_ratio(n, d).unwrap();
            let root = a.sqrt().unwrap();
            prop_assert!(!root.is_negative());
            prop_assert!((root.square() - &a).is_near_zero_within(&ExactScalar::pow10(-20)));
        }

        #[test]
        fn decimal_text_parses_back_exactly(n in small_int(), places in 0u32..6) {
            let text = if places == 0 {
                n.to_string()
            } else {
                format!("{}e-{places}", n)
            };
            let parsed: ExactScalar = text.parse().unwrap();
            let expected = ExactScalar::from_i64(n) * ExactScalar::pow10(-i32::try_from(places).unwrap());
            prop_assert_eq!(parsed, expected);
        }
    }
}
