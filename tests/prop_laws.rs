use core::cmp::Ordering;

use packed_bitvector::BitVector;
use proptest::prelude::*;

// Strategy for generating vectors of any length up to `max_bits`
prop_compose! {
    fn arb_bitvector(max_bits: usize)
        (bits in prop::collection::vec(any::<bool>(), 0..max_bits))
        -> BitVector
    {
        bits.into_iter().collect()
    }
}

// Strategy for generating two vectors of the same length
prop_compose! {
    fn same_len_pair(max_bits: usize)
        (len in 0..max_bits)
        (a in prop::collection::vec(any::<bool>(), len),
         b in prop::collection::vec(any::<bool>(), len))
        -> (BitVector, BitVector)
    {
        (a.into_iter().collect(), b.into_iter().collect())
    }
}

// Strategy for generating a vector together with a permutation of its indices
prop_compose! {
    fn with_permutation(max_bits: usize)
        (len in 1..max_bits)
        (bits in prop::collection::vec(any::<bool>(), len),
         perm in Just((0..len).collect::<Vec<_>>()).prop_shuffle())
        -> (BitVector, Vec<usize>)
    {
        (bits.into_iter().collect(), perm)
    }
}

proptest! {
    #[test]
    fn test_bit_string_round_trip(bv in arb_bitvector(400)) {
        let text = bv.to_string();
        prop_assert_eq!(text.len(), bv.len());
        prop_assert_eq!(text.parse::<BitVector>().unwrap(), bv);
    }

    #[test]
    fn test_rotate_and_back(bv in arb_bitvector(400), n in -500isize..500) {
        prop_assume!(!bv.is_empty());
        let mut rotated = bv.clone();
        rotated.circular_shift_left(n).unwrap().circular_shift_right(n).unwrap();
        prop_assert_eq!(rotated, bv);
    }

    #[test]
    fn test_rotate_matches_string_rotation(bv in arb_bitvector(300), n in 0usize..600) {
        prop_assume!(!bv.is_empty());
        let text = bv.to_string();
        let k = n % text.len();
        let expected = format!("{}{}", &text[k..], &text[..k]);

        let mut rotated = bv.clone();
        rotated.circular_shift_left(n as isize).unwrap();
        prop_assert_eq!(rotated.to_string(), expected);
    }

    #[test]
    fn test_shift_left_drops_prefix(bv in arb_bitvector(300), n in 0usize..350) {
        let mut shifted = bv.clone();
        shifted.shift_left(n);
        prop_assert_eq!(shifted.len(), bv.len());
        for i in 0..bv.len() {
            let expected = i + n < bv.len() && bv.get(i + n).unwrap();
            prop_assert_eq!(shifted.get(i).unwrap(), expected, "bit {}", i);
        }
    }

    #[test]
    fn test_permute_unpermute((bv, perm) in with_permutation(200)) {
        let scrambled = bv.permute(&perm).unwrap();
        prop_assert_eq!(scrambled.count_ones(), bv.count_ones());
        prop_assert_eq!(scrambled.unpermute(&perm).unwrap(), bv);
    }

    #[test]
    fn test_xor_with_self_is_zero(bv in arb_bitvector(400)) {
        let zero = &bv ^ &bv;
        prop_assert_eq!(zero.len(), bv.len());
        prop_assert_eq!(zero.count_ones(), 0);
    }

    #[test]
    fn test_de_morgan((a, b) in same_len_pair(300)) {
        prop_assert_eq!(!(&a & &b), &!&a | &!&b);
        prop_assert_eq!(!(&a | &b), &!&a & &!&b);
    }

    #[test]
    fn test_hamming_is_popcount_of_xor((a, b) in same_len_pair(300)) {
        prop_assert_eq!(a.hamming_distance(&b).unwrap(), (&a ^ &b).count_ones());
    }

    #[test]
    fn test_popcounts_agree(bv in arb_bitvector(500)) {
        let dense = bv.count_ones();
        prop_assert_eq!(bv.count_ones_sparse(), dense);
        prop_assert_eq!(bv.iter_ones().count(), dense);
        prop_assert_eq!(bv.iter().filter(|&b| b).count(), dense);
    }

    #[test]
    fn test_slice_and_concat(bv in arb_bitvector(300), cut in 0usize..300) {
        let cut = cut.min(bv.len());
        let head = bv.slice(..cut).unwrap();
        let tail = bv.slice(cut..).unwrap();
        prop_assert_eq!(head.concat(&tail), bv);
    }

    #[test]
    fn test_integer_round_trip(value in any::<u128>(), extra in 0usize..100) {
        let shortest = BitVector::from(value);
        prop_assert_eq!(u128::try_from(&shortest).unwrap(), value);

        let sized = BitVector::from_integer_sized(value, shortest.len() + extra).unwrap();
        prop_assert_eq!(sized.cmp_value(&shortest), Ordering::Equal);
        prop_assert_eq!(sized.to_biguint(), shortest.to_biguint());
    }

    #[test]
    fn test_gf_multiply_then_divide(a in arb_bitvector(120), b in arb_bitvector(60)) {
        prop_assume!(b.count_ones() > 0);
        let product = a.gf_multiply(&b);
        let (quotient, remainder) = product.gf_divide(&b, b.len()).unwrap();
        prop_assert_eq!(quotient.cmp_value(&a), Ordering::Equal);
        prop_assert_eq!(remainder.count_ones(), 0);
    }

    #[test]
    fn test_complement_laws(bv in arb_bitvector(300)) {
        let inverted = !&bv;
        prop_assert_eq!((&bv & &inverted).count_ones(), 0);
        prop_assert_eq!((&bv | &inverted).count_ones(), bv.len());
        prop_assert_eq!((&bv | &inverted).len(), bv.len());
    }

    #[test]
    fn test_gf_divide_identity(
        x in arb_bitvector(80),
        m in arb_bitvector(12),
        extra in 0usize..20,
    ) {
        prop_assume!(m.count_ones() > 0);
        let n = m.len() - 1 + extra;
        let (quotient, remainder) = x.gf_divide(&m, n).unwrap();
        prop_assert_eq!(remainder.len(), n);
        prop_assert_eq!(quotient.len(), x.len());

        let rebuilt = &quotient.gf_multiply(&m) ^ &remainder;
        prop_assert_eq!(rebuilt.cmp_value(&x), Ordering::Equal);
    }

    #[test]
    fn test_reverse_twice(bv in arb_bitvector(400)) {
        prop_assert_eq!(bv.reverse().reverse(), bv);
    }
}
