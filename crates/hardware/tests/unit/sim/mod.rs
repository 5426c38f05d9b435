//! Loader and simulator tests.


/// Simulator wiring and run control.
pub mod simulator;
