//! Bit and index manipulation for big-endian qubit layouts.
//!
//! Qubit `i` of an `n` qubit state is bit `n - 1 - i` of a basis index, so `|abc>` means
//! `q0=a`, `q1=b`, `q2=c`.

use crate::types::Length;

/// Get the `bit_index` bit value from `num`.
///
/// # Example
/// ```
/// use qrect::utils::get_bit;
/// assert!(get_bit(2, 1));
/// assert!(!get_bit(2, 0));
/// ```
#[inline]
pub fn get_bit(num: usize, bit_index: usize) -> bool {
    ((num >> bit_index) & 1) != 0
}

/// Set the `bit_index` bit in `num` to `value`.
///
/// # Example
/// ```
/// use qrect::utils::set_bit;
/// assert_eq!(set_bit(0, 1, true), 2);
/// assert_eq!(set_bit(1, 1, true), 3);
/// assert_eq!(set_bit(1, 0, false), 0);
/// ```
#[inline]
pub fn set_bit(num: usize, bit_index: usize, value: bool) -> usize {
    let v = 1 << bit_index;
    if value {
        num | v
    } else {
        num & !v
    }
}

/// Gather the bits of the qubits `indices` out of the full state index `full_index` into an
/// operator-local index. The first entry of `indices` becomes the most significant bit.
///
/// # Example
/// ```
/// use qrect::utils::full_to_sub;
///
/// // |1010> restricted to qubits 2 and 0 is |11>
/// assert_eq!(full_to_sub(4, &[2, 0], 0b1010), 0b11);
/// // and to qubits 1 and 3 is |00>
/// assert_eq!(full_to_sub(4, &[1, 3], 0b1010), 0b00);
/// ```
pub fn full_to_sub(n: usize, indices: &[usize], full_index: usize) -> usize {
    let nindices = indices.len();
    indices.iter().enumerate().fold(0, |acc, (j, indx)| {
        let bit = get_bit(full_index, n - 1 - indx);
        set_bit(acc, nindices - 1 - j, bit)
    })
}

/// Write the operator-local index `sub_index` onto the qubits `indices` of `base`, leaving the
/// other qubits as they are. Inverse of [`full_to_sub`].
///
/// # Example
/// ```
/// use qrect::utils::sub_to_full;
///
/// assert_eq!(sub_to_full(4, &[2, 0], 0b11, 0b0000), 0b1010);
/// assert_eq!(sub_to_full(4, &[2, 0], 0b00, 0b1111), 0b0101);
/// ```
pub fn sub_to_full(n: usize, indices: &[usize], sub_index: usize, base: usize) -> usize {
    let nindices = indices.len();
    indices.iter().enumerate().fold(base, |acc, (j, indx)| {
        let bit = get_bit(sub_index, nindices - 1 - j);
        set_bit(acc, n - 1 - indx, bit)
    })
}

/// Number of bits needed to write `value` in binary, never less than one.
///
/// # Example
/// ```
/// use qrect::utils::bits_needed;
///
/// assert_eq!(bits_needed(0), 1);
/// assert_eq!(bits_needed(1), 1);
/// assert_eq!(bits_needed(4), 3);
/// assert_eq!(bits_needed(7), 3);
/// assert_eq!(bits_needed(8), 4);
/// ```
pub fn bits_needed(value: Length) -> usize {
    (Length::BITS - value.leading_zeros()).max(1) as usize
}
