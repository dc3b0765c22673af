//! Component models for the shunt filter calculator.

pub mod electrical;
