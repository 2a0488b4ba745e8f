//! Property-based tests for the codec and the convolution kernels.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::convolution::{convolve_enumerate, convolve_recursive};
    use crate::algorithms::parallel::convolve_parallel;
    use crate::config::ConvolveConfig;
    use crate::index::{decode_index, decode_index_masked, decode_index_unpadded, encode_index};

    // Multi-indices over at most 6 variables
    fn multi_index() -> impl Strategy<Value = Vec<bool>> {
        proptest::collection::vec(any::<bool>(), 0..=6)
    }

    // (K, offset) with offset < 2^K
    fn offset_in_range() -> impl Strategy<Value = (usize, usize)> {
        (0usize..=6).prop_flat_map(|k| (Just(k), 0..(1usize << k)))
    }

    // (reference, offset) with offset < 2^popcount(reference)
    fn masked_input() -> impl Strategy<Value = (Vec<bool>, usize)> {
        multi_index().prop_flat_map(|reference| {
            let active = reference.iter().filter(|&&b| b).count();
            (Just(reference), 0..(1usize << active))
        })
    }

    // Integer-valued coefficients keep every float sum exact
    fn operands() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (0u32..=5).prop_flat_map(|k| {
            let len = 1usize << k;
            let coeffs = proptest::collection::vec((-50i32..50).prop_map(f64::from), len);
            (coeffs.clone(), coeffs)
        })
    }

    proptest! {
        // Codec laws

        #[test]
        fn decode_inverts_encode(i in multi_index()) {
            let offset = encode_index(&i).unwrap();
            prop_assert_eq!(decode_index(offset, i.len()).unwrap(), i.clone());

            // Unpadded decode matches up to trailing false entries
            let unpadded = decode_index_unpadded(offset);
            prop_assert!(unpadded.len() <= i.len());
            prop_assert_eq!(&i[..unpadded.len()], &unpadded[..]);
            prop_assert!(i[unpadded.len()..].iter().all(|&b| !b));
        }

        #[test]
        fn encode_inverts_decode((k, offset) in offset_in_range()) {
            let i = decode_index(offset, k).unwrap();
            prop_assert_eq!(i.len(), k);
            prop_assert_eq!(encode_index(&i).unwrap(), offset);
            prop_assert_eq!(encode_index(&decode_index_unpadded(offset)).unwrap(), offset);
        }

        #[test]
        fn masked_decode_stays_inside_reference((reference, offset) in masked_input()) {
            let sub = decode_index_masked(offset, &reference).unwrap();
            prop_assert_eq!(sub.len(), reference.len());

            for (&s, &r) in sub.iter().zip(&reference) {
                prop_assert!(!s || r);
            }

            // Reading the active positions back recovers the offset
            let selected: Vec<bool> = sub
                .iter()
                .zip(&reference)
                .filter(|&(_, &r)| r)
                .map(|(&s, _)| s)
                .collect();
            prop_assert_eq!(encode_index(&selected).unwrap(), offset);
        }

        #[test]
        fn masked_decode_rejects_overflow(reference in multi_index()) {
            let active = reference.iter().filter(|&&b| b).count();
            prop_assert!(decode_index_masked(1usize << active, &reference).is_err());
        }

        // Convolution agreement

        #[test]
        fn recursive_matches_enumerate((x, y) in operands()) {
            let mut z_enum = vec![0.0; x.len()];
            let mut z_rec = vec![0.0; x.len()];
            convolve_enumerate(&x, &y, &mut z_enum).unwrap();
            convolve_recursive(&x, &y, &mut z_rec).unwrap();
            prop_assert_eq!(z_enum, z_rec);
        }

        #[test]
        fn parallel_matches_recursive((x, y) in operands(), threshold in 0usize..=8) {
            let config = ConvolveConfig::default().with_parallel_threshold(threshold);
            let mut z_par = vec![0.0; x.len()];
            let mut z_rec = vec![0.0; x.len()];
            convolve_parallel(&x, &y, &mut z_par, &config).unwrap();
            convolve_recursive(&x, &y, &mut z_rec).unwrap();
            prop_assert_eq!(z_par, z_rec);
        }

        #[test]
        fn convolution_commutative((x, y) in operands()) {
            let mut xy = vec![0.0; x.len()];
            let mut yx = vec![0.0; x.len()];
            convolve_recursive(&x, &y, &mut xy).unwrap();
            convolve_recursive(&y, &x, &mut yx).unwrap();
            prop_assert_eq!(xy, yx);
        }
    }
}
