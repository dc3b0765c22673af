//! Electrical network components.
//!
//! Models here work in the phasor domain: every sinusoidal quantity at the
//! network frequency is a [`num_complex::Complex64`] in SI units.

pub mod damped_filter;
