//! Address-table decoding for the DA field.
//!
//! `DA_H` selects a group of eight table numbers starting at
//! `(DA_H - 1) * 8 + 1`; each set bit `i` of `DA_L` addresses `base + i`.
//! When several bits are set the candidate numbers are summed, not listed.

/// Computes the table number addressed by a DA pair.
///
/// The arithmetic is signed: `DA_H = 0` gives a base of `-7`, and a `DA_L`
/// of zero gives `0`.
///
/// ```rust
/// use meterframe_rs::payload::table_number;
///
/// assert_eq!(table_number(0x01, 0x01), 1);
/// assert_eq!(table_number(0x02, 0x01), 9);
/// assert_eq!(table_number(0x01, 0x03), 3);
/// ```
pub fn table_number(da_h: u8, da_l: u8) -> i32 {
    let base = (i32::from(da_h) - 1) * 8 + 1;
    (0..8i32)
        .filter(|&bit| da_l & (1u8 << bit) != 0)
        .map(|bit| base + bit)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_group() {
        assert_eq!(table_number(1, 0x01), 1);
        assert_eq!(table_number(1, 0x80), 8);
    }

    #[test]
    fn test_second_group() {
        assert_eq!(table_number(2, 0x01), 9);
        assert_eq!(table_number(2, 0x80), 16);
    }

    #[test]
    fn test_multiple_bits_are_summed() {
        assert_eq!(table_number(1, 0x03), 3);
        // 1 + 2 + ... + 8
        assert_eq!(table_number(1, 0xFF), 36);
    }

    #[test]
    fn test_no_bits_set() {
        assert_eq!(table_number(0x13, 0x00), 0);
    }

    #[test]
    fn test_zero_high_byte() {
        assert_eq!(table_number(0, 0x01), -7);
        assert_eq!(table_number(0, 0x80), 0);
    }

    #[test]
    fn test_sample_addresses() {
        assert_eq!(table_number(0x06, 0x80), 48);
        assert_eq!(table_number(0x12, 0x40), 143);
        assert_eq!(table_number(0x27, 0x20), 310);
        assert_eq!(table_number(0x0F, 0x01), 113);
    }

    proptest! {
        #[test]
        fn prop_single_bit(da_h in 1u8..=0xFF, bit in 0u8..8) {
            let expected = (i32::from(da_h) - 1) * 8 + 1 + i32::from(bit);
            prop_assert_eq!(table_number(da_h, 1 << bit), expected);
        }

        #[test]
        fn prop_sum_of_bits(da_h in any::<u8>(), da_l in any::<u8>()) {
            let per_bit: i32 = (0..8u8)
                .filter(|b| da_l & (1 << b) != 0)
                .map(|b| table_number(da_h, 1 << b))
                .sum();
            prop_assert_eq!(table_number(da_h, da_l), per_bit);
        }
    }
}
