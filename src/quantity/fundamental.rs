
//! The four fundamental quantities: length, mass, time, and
//! temperature. Each is a scalar measured directly in one of the SI
//! base units.

use crate::units::base::BaseUnit;
use crate::units::prefix::DecimalPrefix;
use crate::units::unit::Unit;
use super::base::{
  ensure_non_negative, quantity_add, quantity_api, quantity_setters,
  NegativeQuantityError, Quantity,
};

/// Fundamental SI length, measured in metres.
#[derive(Clone, Debug)]
pub struct Length {
  qty: Quantity<f64>,
}

impl Length {
  fn quantity() -> Quantity<f64> {
    Quantity::fundamental(
      "Length",
      "l",
      "Represents the fundamental SI Length quantity.",
      Unit::Base(BaseUnit::Metre),
    )
  }

  /// A length of `value`, expressed in metres scaled by `prefix`.
  pub fn new(value: f64, prefix: DecimalPrefix) -> Length {
    let mut qty = Length::quantity();
    qty.set_value_from(value, prefix);
    Length { qty }
  }
}

impl Default for Length {
  /// One metre.
  fn default() -> Length {
    Length::new(1.0, DecimalPrefix::Base)
  }
}

quantity_api! { Length, f64 }
quantity_setters! { Length, f64 }
quantity_add! { Length }

/// Fundamental SI mass, measured in kilograms. Mass is physically
/// non-negative, so constructors and setters reject negative values.
#[derive(Clone, Debug)]
pub struct Mass {
  qty: Quantity<f64>,
}

impl Mass {
  fn quantity() -> Quantity<f64> {
    Quantity::fundamental(
      "Mass",
      "m",
      "Represents the fundamental SI Mass quantity.",
      Unit::Base(BaseUnit::Kilogram),
    )
  }

  /// A mass of `value`, expressed in kilograms scaled by `prefix`.
  pub fn new(value: f64, prefix: DecimalPrefix) -> Result<Mass, NegativeQuantityError> {
    ensure_non_negative("Mass", value)?;
    let mut qty = Mass::quantity();
    qty.set_value_from(value, prefix);
    Ok(Mass { qty })
  }

  /// Stores `value` in kilograms.
  pub fn set_value(&mut self, value: f64) -> Result<(), NegativeQuantityError> {
    ensure_non_negative("Mass", value)?;
    self.qty.set_value(value);
    Ok(())
  }

  /// Stores `value × multiplier(prefix)` in kilograms.
  pub fn set_value_from(
    &mut self,
    value: f64,
    prefix: DecimalPrefix,
  ) -> Result<(), NegativeQuantityError> {
    ensure_non_negative("Mass", value)?;
    self.qty.set_value_from(value, prefix);
    Ok(())
  }
}

impl Default for Mass {
  /// One kilogram.
  fn default() -> Mass {
    let mut qty = Mass::quantity();
    qty.set_value(1.0);
    Mass { qty }
  }
}

quantity_api! { Mass, f64 }
quantity_add! { Mass }

/// Fundamental SI time, measured in seconds.
#[derive(Clone, Debug)]
pub struct Time {
  qty: Quantity<f64>,
}

impl Time {
  fn quantity() -> Quantity<f64> {
    Quantity::fundamental(
      "Time",
      "t",
      "Represents the fundamental SI Time quantity.",
      Unit::Base(BaseUnit::Second),
    )
  }

  /// A time of `value`, expressed in seconds scaled by `prefix`.
  pub fn new(value: f64, prefix: DecimalPrefix) -> Time {
    let mut qty = Time::quantity();
    qty.set_value_from(value, prefix);
    Time { qty }
  }
}

impl Default for Time {
  /// One second.
  fn default() -> Time {
    Time::new(1.0, DecimalPrefix::Base)
  }
}

quantity_api! { Time, f64 }
quantity_setters! { Time, f64 }
quantity_add! { Time }

/// Fundamental SI thermodynamic temperature, measured in kelvins.
///
/// Absolute temperature is physically non-negative, so constructors
/// and setters reject negative values everywhere; nothing clamps.
/// Addition of two valid temperatures cannot undercut the floor, so
/// the sum operator stays total.
#[derive(Clone, Debug)]
pub struct Temperature {
  qty: Quantity<f64>,
}

impl Temperature {
  fn quantity() -> Quantity<f64> {
    Quantity::fundamental(
      "Temperature",
      "T",
      "Represents the fundamental SI Temperature quantity.",
      Unit::Base(BaseUnit::Kelvin),
    )
  }

  /// A temperature of `value`, expressed in kelvins scaled by
  /// `prefix`.
  pub fn new(value: f64, prefix: DecimalPrefix) -> Result<Temperature, NegativeQuantityError> {
    ensure_non_negative("Temperature", value)?;
    let mut qty = Temperature::quantity();
    qty.set_value_from(value, prefix);
    Ok(Temperature { qty })
  }

  /// Stores `value` in kelvins.
  pub fn set_value(&mut self, value: f64) -> Result<(), NegativeQuantityError> {
    ensure_non_negative("Temperature", value)?;
    self.qty.set_value(value);
    Ok(())
  }

  /// Stores `value × multiplier(prefix)` in kelvins.
  pub fn set_value_from(
    &mut self,
    value: f64,
    prefix: DecimalPrefix,
  ) -> Result<(), NegativeQuantityError> {
    ensure_non_negative("Temperature", value)?;
    self.qty.set_value_from(value, prefix);
    Ok(())
  }
}

impl Default for Temperature {
  /// Zero degrees Celsius, expressed in kelvins.
  fn default() -> Temperature {
    let mut qty = Temperature::quantity();
    qty.set_value(273.15);
    Temperature { qty }
  }
}

quantity_api! { Temperature, f64 }
quantity_add! { Temperature }
