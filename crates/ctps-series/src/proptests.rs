//! Property-based tests for CTPS ring arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::ctps::Ctps;
    use ctps_core::convolve_enumerate;

    // Strategy for small integer coefficients, exact under f64 arithmetic
    fn small_coeffs(len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec((-10i32..10).prop_map(f64::from), len)
    }

    fn ctps_with(len: usize) -> impl Strategy<Value = Ctps> {
        small_coeffs(len).prop_map(|c| Ctps::new(c).unwrap())
    }

    // Three values sharing K in 0..=4
    fn triple() -> impl Strategy<Value = (Ctps, Ctps, Ctps)> {
        (0u32..=4).prop_flat_map(|k| {
            let len = 1usize << k;
            (ctps_with(len), ctps_with(len), ctps_with(len))
        })
    }

    // (K, i) with i < K
    fn variable_index() -> impl Strategy<Value = (usize, usize)> {
        (1usize..=5).prop_flat_map(|k| (Just(k), 0..k))
    }

    proptest! {
        // Ring axioms

        #[test]
        fn ctps_mul_commutative((a, b, _) in triple()) {
            prop_assert_eq!((&a * &b).unwrap(), (&b * &a).unwrap());
        }

        #[test]
        fn ctps_mul_associative((a, b, c) in triple()) {
            let left = (&(&a * &b).unwrap() * &c).unwrap();
            let right = (&a * &(&b * &c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn ctps_distributive((a, b, c) in triple()) {
            // a * (b + c) = a * b + a * c
            let left = (&a * &(&b + &c).unwrap()).unwrap();
            let right = (&(&a * &b).unwrap() + &(&a * &c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn ctps_mul_identity((a, _, _) in triple()) {
            let one = Ctps::one(a.num_vars()).unwrap();
            prop_assert_eq!((&one * &a).unwrap(), a.clone());
            prop_assert_eq!((&a * &one).unwrap(), a);
        }

        #[test]
        fn ctps_mul_zero((a, _, _) in triple()) {
            let zero = Ctps::zero(a.num_vars()).unwrap();
            prop_assert!((&a * &zero).unwrap().is_zero());
        }

        #[test]
        fn ctps_additive_inverse((a, _, _) in triple()) {
            prop_assert!((&a + &(-&a)).unwrap().is_zero());
        }

        // Truncation

        #[test]
        fn ctps_variable_squares_to_zero((k, i) in variable_index()) {
            let t: Ctps = Ctps::variable(i, k).unwrap();
            prop_assert!((&t * &t).unwrap().is_zero());
        }

        #[test]
        fn ctps_mul_matches_enumeration((a, b, _) in triple()) {
            let mut expected = vec![0.0; a.len()];
            convolve_enumerate(a.coeffs(), b.coeffs(), &mut expected).unwrap();
            prop_assert_eq!((&a * &b).unwrap().into_coeffs(), expected);
        }

        // Evaluation

        #[test]
        fn ctps_eval_additive((a, b, c) in triple()) {
            let point: Vec<f64> = c.coeffs().iter().take(a.num_vars()).copied().collect();
            let sum = (&a + &b).unwrap();
            prop_assert_eq!(
                sum.eval(&point).unwrap(),
                a.eval(&point).unwrap() + b.eval(&point).unwrap()
            );
        }

        #[test]
        fn ctps_constant_term_multiplicative((a, b, _) in triple()) {
            let product = (&a * &b).unwrap();
            prop_assert_eq!(product.constant_term(), a.constant_term() * b.constant_term());
        }
    }
}
