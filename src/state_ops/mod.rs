/// Operators on simulated states and their application.
pub mod matrix_ops;
/// Measurement probabilities and sampling.
pub mod measurement_ops;
