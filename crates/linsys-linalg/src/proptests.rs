//! Property-based tests for vectors and hyperplanes.

#[cfg(test)]
mod tests {
    use linsys_numeric::ExactScalar;
    use proptest::prelude::*;

    use crate::{Hyperplane, Vector};

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-5i64..=-1i64), (1i64..=5i64)]
    }

    // Pairs of integer vectors sharing one dimension
    fn vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
        (1usize..=4).prop_flat_map(|dimension| {
            (
                prop::collection::vec(-20i64..=20, dimension),
                prop::collection::vec(-20i64..=20, dimension),
            )
                .prop_map(|(a, b)| (Vector::from_i64s(&a).unwrap(), Vector::from_i64s(&b).unwrap()))
        })
    }

    fn hyperplane() -> impl Strategy<Value = Hyperplane> {
        (1usize..=4).prop_flat_map(|dimension| {
            (prop::collection::vec(-4i64..=4, dimension), -6i64..=6)
                .prop_map(|(normal, constant)| Hyperplane::from_i64s(&normal, constant).unwrap())
        })
    }

    proptest! {
        #[test]
        fn add_then_subtract_round_trips((a, b) in vector_pair()) {
            prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
        }

        #[test]
        fn dot_is_symmetric((a, b) in vector_pair()) {
            prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
        }

        #[test]
        fn is_parallel_is_symmetric((a, b) in vector_pair()) {
            prop_assert_eq!(a.is_parallel(&b).unwrap(), b.is_parallel(&a).unwrap());
        }

        #[test]
        fn scaled_vector_is_parallel((a, _) in vector_pair(), c in non_zero_int()) {
            prop_assert!(a.is_parallel(&a.scale(&ExactScalar::from_i64(c))).unwrap());
        }

        #[test]
        fn coincides_under_nonzero_scaling(p in hyperplane(), c in non_zero_int()) {
            let scaled = p.scaled(&ExactScalar::from_i64(c));
            prop_assert!(p.coincides_with(&scaled).unwrap());
            prop_assert!(scaled.coincides_with(&p).unwrap());
        }

        #[test]
        fn basepoint_lies_on_plane(p in hyperplane()) {
            if let Some(point) = p.basepoint() {
                prop_assert!(p.is_satisfied_by(point).unwrap());
            } else {
                prop_assert_eq!(p.pivot_index(), None);
            }
        }
    }
}
