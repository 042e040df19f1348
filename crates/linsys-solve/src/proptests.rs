//! Property-based tests for elimination on small integer systems.

#[cfg(test)]
mod tests {
    use linsys_linalg::{Hyperplane, Vector};
    use linsys_numeric::ExactScalar;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{LinearSystem, Solution};

    // Strategy for generating (dimension, rows) pairs with matching widths
    fn integer_system() -> impl Strategy<Value = LinearSystem> {
        (1usize..=4, 1usize..=5).prop_flat_map(|(dimension, rows)| {
            prop::collection::vec(
                (prop::collection::vec(-4i64..=4, dimension), -6i64..=6),
                rows,
            )
            .prop_map(|rows| {
                LinearSystem::new(
                    rows.iter()
                        .map(|(normal, constant)| Hyperplane::from_i64s(normal, *constant).unwrap())
                        .collect(),
                )
                .unwrap()
            })
        })
    }

    // Systems whose equations all pass through a known integer point
    fn system_through_point() -> impl Strategy<Value = (LinearSystem, Vector)> {
        (1usize..=4, 1usize..=5).prop_flat_map(|(dimension, rows)| {
            (
                prop::collection::vec(-5i64..=5, dimension),
                prop::collection::vec(prop::collection::vec(-4i64..=4, dimension), rows),
            )
                .prop_map(|(point, normals)| {
                    let point = Vector::from_i64s(&point).unwrap();
                    let planes = normals
                        .iter()
                        .map(|normal| {
                            let normal = Vector::from_i64s(normal).unwrap();
                            let constant = normal.dot(&point).unwrap();
                            Hyperplane::new(normal, constant)
                        })
                        .collect();
                    (LinearSystem::new(planes).unwrap(), point)
                })
        })
    }

    proptest! {
        #[test]
        fn triangular_pivots_strictly_increase(s in integer_system()) {
            let t = s.compute_triangular_form().unwrap();
            let pivots = t.pivot_indices();
            let mut seen_zero_row = false;
            let mut last: Option<usize> = None;
            for pivot in pivots {
                match pivot {
                    Some(p) => {
                        prop_assert!(!seen_zero_row);
                        if let Some(prev) = last {
                            prop_assert!(p > prev);
                        }
                        last = Some(p);
                    }
                    None => seen_zero_row = true,
                }
            }
        }

        #[test]
        fn rref_pivot_columns_are_unit_columns(s in integer_system()) {
            let r = s.compute_rref().unwrap();
            let pivots = r.pivot_indices();
            for (row, pivot) in pivots.iter().enumerate() {
                let Some(col) = *pivot else { continue };
                for (other, plane) in r.planes().iter().enumerate() {
                    let entry = &plane.normal()[col];
                    if other == row {
                        prop_assert!(entry.is_one());
                    } else {
                        prop_assert!(entry.is_zero());
                    }
                }
            }
        }

        #[test]
        fn rref_is_idempotent(s in integer_system()) {
            let r = s.compute_rref().unwrap();
            prop_assert_eq!(r.compute_rref().unwrap(), r);
        }

        #[test]
        fn rank_bounded_by_rows_and_dimension(s in integer_system()) {
            let rank = s.rank().unwrap();
            prop_assert!(rank <= s.len());
            prop_assert!(rank <= s.dimension());
        }

        #[test]
        fn solutions_satisfy_every_equation(s in integer_system()) {
            match s.solve_system().unwrap() {
                Solution::NoSolution => {}
                Solution::Unique(point) => {
                    for p in s.planes() {
                        prop_assert!(p.is_satisfied_by(&point).unwrap());
                    }
                }
                Solution::Parametrized(parametrization) => {
                    let ones = vec![ExactScalar::one(); parametrization.free_variable_count()];
                    let zeros = vec![ExactScalar::zero(); parametrization.free_variable_count()];
                    for parameters in [ones, zeros] {
                        let point = parametrization.point_at(&parameters).unwrap();
                        for p in s.planes() {
                            prop_assert!(p.is_satisfied_by(&point).unwrap());
                        }
                    }
                    // Directions span the homogeneous solutions.
                    for direction in parametrization.directions() {
                        for p in s.planes() {
                            prop_assert!(p.normal().dot(direction).unwrap().is_zero());
                        }
                    }
                }
            }
        }

        #[test]
        fn free_variables_match_rank(s in integer_system()) {
            let rank = s.rank().unwrap();
            if let Some(free) = s.solve_system().unwrap().free_variable_count() {
                prop_assert_eq!(free + rank, s.dimension());
            }
        }

        #[test]
        fn systems_through_a_point_are_consistent((s, point) in system_through_point()) {
            let solution = s.solve_system().unwrap();
            prop_assert!(solution.is_consistent());
            if let Solution::Unique(found) = solution {
                prop_assert_eq!(found, point);
            }
        }

        #[test]
        fn add_scaled_row_leaves_source_unchanged(
            s in integer_system(),
            c in -5i64..=5
        ) {
            prop_assume!(s.len() >= 2);
            let mut modified = s.clone();
            modified
                .add_scaled_row_to_row(&ExactScalar::from_i64(c), 0, 1)
                .unwrap();
            prop_assert_eq!(&modified[0], &s[0]);
            let expected = s[1].plus_scaled(&ExactScalar::from_i64(c), &s[0]).unwrap();
            prop_assert_eq!(&modified[1], &expected);
        }

        #[test]
        fn elimination_does_not_modify_input(s in integer_system()) {
            let before = s.clone();
            let _ = s.solve_system().unwrap();
            prop_assert_eq!(s, before);
        }
    }
}
