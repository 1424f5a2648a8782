#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::errors::{RectangleError, RectangleResult};
use crate::utils::{full_to_sub, get_bit, set_bit, sub_to_full};
use crate::{into_iter, iter_mut};
use crate::{Complex, Precision};
use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

/// Nonzero entries of a single operator row as `(column, value)`.
pub type RowEntries<P> = SmallVec<[(usize, Complex<P>); 4]>;

/// Ops which can be applied to simulated states.
#[derive(Clone, Debug, PartialEq)]
pub enum CircuitOp<P: Precision> {
    /// Indices, row-major matrix data of side 2^(number of indices)
    Matrix(Vec<usize>, Vec<Complex<P>>),
    /// Exchanges qubit `a[i]` with qubit `b[i]` for every `i`
    Swap(Vec<usize>, Vec<usize>),
    /// Control indices, op applied when all control qubits are |1>
    Control(Vec<usize>, Box<CircuitOp<P>>),
}

impl<P: Precision> CircuitOp<P> {
    /// All qubit indices touched by the op, controls first.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            CircuitOp::Matrix(indices, _) => indices.clone(),
            CircuitOp::Swap(a, b) => a.iter().chain(b.iter()).copied().collect(),
            CircuitOp::Control(c, op) => {
                let mut indices = c.clone();
                indices.extend(op.indices());
                indices
            }
        }
    }

    /// Number of qubits touched by the op.
    pub fn num_indices(&self) -> usize {
        match self {
            CircuitOp::Matrix(indices, _) => indices.len(),
            CircuitOp::Swap(a, b) => a.len() + b.len(),
            CircuitOp::Control(c, op) => c.len() + op.num_indices(),
        }
    }

    /// The nonzero entries of `row` of this op, embedded in an `n` qubit state.
    /// Columns are full state indices.
    pub fn row_entries(&self, n: usize, row: usize) -> RowEntries<P> {
        match self {
            CircuitOp::Matrix(indices, data) => {
                let side = 1 << indices.len();
                let matrow = full_to_sub(n, indices, row);
                (0..side)
                    .filter_map(|matcol| {
                        let val = data[matrow * side + matcol];
                        if val.is_zero() {
                            None
                        } else {
                            Some((sub_to_full(n, indices, matcol, row), val))
                        }
                    })
                    .collect()
            }
            CircuitOp::Swap(a, b) => {
                let col = a.iter().zip(b.iter()).fold(row, |acc, (ia, ib)| {
                    let bit_a = get_bit(row, n - 1 - ia);
                    let bit_b = get_bit(row, n - 1 - ib);
                    set_bit(set_bit(acc, n - 1 - ia, bit_b), n - 1 - ib, bit_a)
                });
                smallvec![(col, Complex::one())]
            }
            CircuitOp::Control(c, op) => {
                if c.iter().all(|indx| get_bit(row, n - 1 - indx)) {
                    op.row_entries(n, row)
                } else {
                    smallvec![(row, Complex::one())]
                }
            }
        }
    }
}

fn check_distinct(indices: &[usize]) -> RectangleResult<()> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != indices.len() {
        let message = format!("Op indices must be distinct, found {:?}", indices);
        Err(RectangleError::operator(message))
    } else {
        Ok(())
    }
}

/// Make a Matrix CircuitOp
pub fn make_matrix_op<P: Precision>(
    indices: Vec<usize>,
    dat: Vec<Complex<P>>,
) -> RectangleResult<CircuitOp<P>> {
    let n = indices.len();
    let expected_mat_size = 1 << (2 * n);
    if indices.is_empty() {
        Err(RectangleError::operator("Must supply at least one op index"))
    } else if dat.len() != expected_mat_size {
        let message = format!(
            "Matrix data has {:?} entries versus expected 2^2*{:?}",
            dat.len(),
            n
        );
        Err(RectangleError::operator(message))
    } else {
        check_distinct(&indices)?;
        Ok(CircuitOp::Matrix(indices, dat))
    }
}

/// Make a Swap CircuitOp exchanging the register `a_indices` with `b_indices`.
pub fn make_swap_op<P: Precision>(
    a_indices: Vec<usize>,
    b_indices: Vec<usize>,
) -> RectangleResult<CircuitOp<P>> {
    if a_indices.is_empty() || b_indices.is_empty() {
        Err(RectangleError::operator(
            "Need at least 1 swap index for a and b",
        ))
    } else if a_indices.len() != b_indices.len() {
        let message = format!(
            "Swap must be performed on two sets of indices of equal length, found {:?} vs {:?}",
            a_indices.len(),
            b_indices.len()
        );
        Err(RectangleError::operator(message))
    } else {
        let all: Vec<usize> = a_indices.iter().chain(b_indices.iter()).copied().collect();
        check_distinct(&all)?;
        Ok(CircuitOp::Swap(a_indices, b_indices))
    }
}

/// Make a Control CircuitOp. Nested controls are merged into one.
pub fn make_control_op<P: Precision>(
    mut c_indices: Vec<usize>,
    op: CircuitOp<P>,
) -> RectangleResult<CircuitOp<P>> {
    if c_indices.is_empty() {
        return Err(RectangleError::operator(
            "Must supply at least one control index",
        ));
    }
    let mut all = c_indices.clone();
    all.extend(op.indices());
    check_distinct(&all)?;
    match op {
        CircuitOp::Control(oc_indices, op) => {
            c_indices.extend(oc_indices);
            Ok(CircuitOp::Control(c_indices, op))
        }
        op => Ok(CircuitOp::Control(c_indices, Box::new(op))),
    }
}

/// Matrix data for the hadamard gate.
pub fn hadamard_matrix<P: Precision>() -> Vec<Complex<P>> {
    let mult = (P::one() / (P::one() + P::one())).sqrt();
    from_reals(&[mult, mult, mult, -mult])
}

/// Apply `op` to the `n` qubit state `input`, storing the results in `output`.
pub fn apply_op<P: Precision>(
    n: usize,
    op: &CircuitOp<P>,
    input: &[Complex<P>],
    output: &mut [Complex<P>],
) {
    debug_assert_eq!(input.len(), 1 << n);
    debug_assert_eq!(output.len(), input.len());
    debug_assert!(op.indices().iter().all(|indx| *indx < n));

    let row_fn = |(row, outputloc): (usize, &mut Complex<P>)| {
        *outputloc = op
            .row_entries(n, row)
            .into_iter()
            .map(|(col, val)| val * input[col])
            .sum();
    };

    // Generate output for each output row
    iter_mut!(output).enumerate().for_each(row_fn);
}

/// Tensor product of two states, `a` holding the leading qubits.
///
/// # Example
/// ```
/// use qrect::state_ops::matrix_ops::{from_reals, kron};
///
/// // |1> (x) |0> = |10>
/// let s = kron(&from_reals(&[0.0, 1.0]), &from_reals(&[1.0, 0.0]));
/// assert_eq!(s, from_reals(&[0.0, 0.0, 1.0, 0.0]));
/// ```
pub fn kron<P: Precision>(a: &[Complex<P>], b: &[Complex<P>]) -> Vec<Complex<P>> {
    let blen = b.len();
    let r = 0..a.len() * blen;
    into_iter!(r).map(|i| a[i / blen] * b[i % blen]).collect()
}

/// Make a vector of complex numbers whose reals are given by `data`
pub fn from_reals<P: Precision>(data: &[P]) -> Vec<Complex<P>> {
    data.iter()
        .map(|x| Complex::<P> {
            re: *x,
            im: P::zero(),
        })
        .collect()
}
