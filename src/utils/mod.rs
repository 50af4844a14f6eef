//! Shared helpers for amount formatting and percentage math

pub mod currency;
pub mod math;
