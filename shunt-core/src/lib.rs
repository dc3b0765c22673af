//! Core types for the shunt filter calculator.
//!
//! Currently this is the [`constraint`] module, which lets component models
//! state numeric preconditions (such as "strictly positive inductance") in
//! their signatures instead of re-checking them at every call site.

pub mod constraint;
