
//! A closed family of SI physical quantities. Scalar and vector
//! quantities (length, mass, time, temperature, density, volume,
//! position, velocity, acceleration, force, pressure) each own a
//! unit, which is either one of the seven SI base units or a unit
//! synthesized from other units raised to integer powers. Values are
//! always stored in unprefixed base units and convert to and from any
//! of the 25 SI decimal prefixes.

pub mod error;
pub mod quantity;
pub mod units;
