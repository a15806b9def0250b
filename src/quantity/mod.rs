
//! Physical quantities: a closed set of named scalar and vector
//! quantities, each owning its unit and storing its canonical value
//! in unprefixed base units.

pub mod base;
pub mod fundamental;
pub mod scalar;
pub mod value;
pub mod vector;
