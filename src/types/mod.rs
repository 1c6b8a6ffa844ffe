//! Core value types shared across the crate

pub mod point;

pub use point::Point;
