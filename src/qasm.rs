//! OpenQASM 2.0 export of swap-test circuits.

use std::fmt::Write;

use crate::swap_test::{Gate, SwapTestCircuit, ANCILLA};
use crate::types::Precision;

/// Exports a circuit to OpenQASM 2.0 text.
pub trait ToOpenQasm {
    /// Returns the circuit as OpenQASM 2.0 text.
    fn to_openqasm(&self) -> String;
}

impl<P: Precision> ToOpenQasm for SwapTestCircuit<P> {
    fn to_openqasm(&self) -> String {
        let mut out = String::new();
        writeln!(&mut out, "OPENQASM 2.0;").unwrap();
        writeln!(&mut out, "include \"qelib1.inc\";").unwrap();
        writeln!(&mut out, "qreg q[{}];", self.n()).unwrap();
        writeln!(&mut out, "creg c[1];").unwrap();

        for (gate, op) in self.ops() {
            match gate {
                Gate::Hadamard => {
                    for q in op.indices() {
                        writeln!(&mut out, "h q[{}];", q).unwrap();
                    }
                }
                Gate::ControlledSwap => {
                    for (a, b) in self.left_indices().zip(self.right_indices()) {
                        writeln!(&mut out, "cswap q[{}],q[{}],q[{}];", ANCILLA, a, b).unwrap();
                    }
                }
            }
        }
        writeln!(&mut out, "measure q[{}] -> c[0];", ANCILLA).unwrap();
        out
    }
}
