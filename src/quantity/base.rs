
//! Generic core shared by every physical quantity type.

use crate::units::prefix::DecimalPrefix;
use crate::units::unit::Unit;
use super::value::QuantityValue;

use thiserror::Error;

use std::fmt::{self, Formatter, Display};

/// Absolute tolerance used by quantity equality comparisons.
pub(crate) const EQUALITY_EPSILON: f64 = 1e-9;

/// Error produced when a physically non-negative quantity is given a
/// negative value.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Negative value {value} is not a valid {quantity}")]
pub struct NegativeQuantityError {
  pub quantity: &'static str,
  pub value: f64,
}

/// Rejects negative values for quantities that are physically
/// non-negative. Such values are an error, never clamped.
pub(crate) fn ensure_non_negative(
  quantity: &'static str,
  value: f64,
) -> Result<(), NegativeQuantityError> {
  if value < 0.0 {
    Err(NegativeQuantityError { quantity, value })
  } else {
    Ok(())
  }
}

/// Read-only surface common to every physical quantity type.
pub trait PhysicalQuantity {
  /// The quantity name, e.g. "Length".
  fn name(&self) -> &str;

  /// The quantity symbol, e.g. "l".
  fn symbol(&self) -> &str;

  fn description(&self) -> &str;

  /// True when this quantity is one of the base dimensions of the
  /// system, measured directly in an SI base unit.
  fn is_fundamental(&self) -> bool;

  /// The unit this quantity is measured in.
  fn unit(&self) -> &Unit;

  fn unit_name(&self) -> &str {
    self.unit().name()
  }

  fn unit_plural_name(&self) -> &str {
    self.unit().plural_name()
  }

  fn unit_symbol(&self) -> &str {
    self.unit().symbol()
  }

  fn unit_description(&self) -> &str {
    self.unit().description()
  }
}

/// Shared state of every physical quantity: fixed descriptive
/// metadata, an owned unit, and the canonical value.
///
/// The value is always stored in unprefixed base units and is the
/// single source of truth; every getter derives from it. The prefix
/// field only records how the value was last set.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity<V> {
  name: &'static str,
  symbol: &'static str,
  description: &'static str,
  unit: Unit,
  value: V,
  prefix: DecimalPrefix,
  fundamental: bool,
}

impl<V: QuantityValue> Quantity<V> {
  fn new(
    name: &'static str,
    symbol: &'static str,
    description: &'static str,
    unit: Unit,
    fundamental: bool,
  ) -> Quantity<V> {
    Quantity {
      name,
      symbol,
      description,
      unit,
      value: V::zero(),
      prefix: DecimalPrefix::Base,
      fundamental,
    }
  }

  /// A zero-valued quantity over one of the base dimensions.
  pub(crate) fn fundamental(
    name: &'static str,
    symbol: &'static str,
    description: &'static str,
    unit: Unit,
  ) -> Quantity<V> {
    Quantity::new(name, symbol, description, unit, true)
  }

  /// A zero-valued derived quantity.
  pub(crate) fn derived(
    name: &'static str,
    symbol: &'static str,
    description: &'static str,
    unit: Unit,
  ) -> Quantity<V> {
    Quantity::new(name, symbol, description, unit, false)
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn symbol(&self) -> &'static str {
    self.symbol
  }

  pub fn description(&self) -> &'static str {
    self.description
  }

  pub fn is_fundamental(&self) -> bool {
    self.fundamental
  }

  pub fn unit(&self) -> &Unit {
    &self.unit
  }

  /// The value in base units.
  pub fn value(&self) -> V {
    self.value
  }

  /// The value expressed in the unit scaled by `prefix`.
  pub fn value_in(&self, prefix: DecimalPrefix) -> V {
    self.value.unscaled(prefix.multiplier())
  }

  /// The prefix most recently used to set the value. Descriptive
  /// only; no getter other than [`Quantity::value_in`] consults a
  /// prefix, and that one takes it as an argument.
  pub fn last_prefix(&self) -> DecimalPrefix {
    self.prefix
  }

  /// Stores `value`, interpreted as already being in base units.
  pub fn set_value(&mut self, value: V) {
    self.store_base(value, DecimalPrefix::Base);
  }

  /// Stores `value × multiplier(prefix)` as the new base-unit value.
  pub fn set_value_from(&mut self, value: V, prefix: DecimalPrefix) {
    self.store_base(value.scaled(prefix.multiplier()), prefix);
  }

  /// Stores an already-converted base-unit value while recording the
  /// prefix it originated from.
  pub(crate) fn store_base(&mut self, value: V, prefix: DecimalPrefix) {
    self.value = value;
    self.prefix = prefix;
  }

  /// Renders the value scaled by `prefix`, with the matching prefixed
  /// unit symbol.
  pub fn format_in(&self, prefix: DecimalPrefix) -> String {
    let value = self.value_in(prefix);
    let unit = self.unit.prefixed_symbol(prefix);
    if V::WRAPS_UNIT_SYMBOL {
      format!("{} ({})", value.format(), unit)
    } else {
      format!("{} {}", value.format(), unit)
    }
  }
}

impl<V: QuantityValue> Display for Quantity<V> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if V::WRAPS_UNIT_SYMBOL {
      write!(f, "{} ({})", self.value.format(), self.unit.symbol())
    } else {
      write!(f, "{} {}", self.value.format(), self.unit.symbol())
    }
  }
}

// Delegation boilerplate for the concrete quantity types. Each macro
// expands against a struct with a `qty: Quantity<_>` field, in the
// style of the usual newtype-forwarding macros.

macro_rules! quantity_api {
  ($type_:ident, $value_ty:ty) => {
    impl $type_ {
      /// The value in base units.
      pub fn value(&self) -> $value_ty {
        self.qty.value()
      }

      /// The value expressed in the unit scaled by `prefix`.
      pub fn value_in(&self, prefix: crate::units::prefix::DecimalPrefix) -> $value_ty {
        self.qty.value_in(prefix)
      }

      /// The prefix most recently used to set the value. Descriptive
      /// only; the stored value is always in base units.
      pub fn last_prefix(&self) -> crate::units::prefix::DecimalPrefix {
        self.qty.last_prefix()
      }

      /// Renders the value scaled by `prefix`, with the matching
      /// prefixed unit symbol.
      pub fn format_in(&self, prefix: crate::units::prefix::DecimalPrefix) -> String {
        self.qty.format_in(prefix)
      }
    }

    impl crate::quantity::base::PhysicalQuantity for $type_ {
      fn name(&self) -> &str {
        self.qty.name()
      }

      fn symbol(&self) -> &str {
        self.qty.symbol()
      }

      fn description(&self) -> &str {
        self.qty.description()
      }

      fn is_fundamental(&self) -> bool {
        self.qty.is_fundamental()
      }

      fn unit(&self) -> &crate::units::unit::Unit {
        self.qty.unit()
      }
    }

    impl std::fmt::Display for $type_ {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.qty, f)
      }
    }
  };
}

macro_rules! quantity_setters {
  ($type_:ident, $value_ty:ty) => {
    impl $type_ {
      /// Stores `value`, interpreted as already being in base units.
      pub fn set_value(&mut self, value: $value_ty) {
        self.qty.set_value(value);
      }

      /// Stores `value × multiplier(prefix)` as the new base-unit
      /// value.
      pub fn set_value_from(
        &mut self,
        value: $value_ty,
        prefix: crate::units::prefix::DecimalPrefix,
      ) {
        self.qty.set_value_from(value, prefix);
      }
    }
  };
}

macro_rules! quantity_add {
  ($type_:ident) => {
    impl std::ops::Add for $type_ {
      type Output = $type_;

      /// Sums the base-unit values of the operands. The result is a
      /// fresh instance whose descriptive prefix is back at base.
      fn add(mut self, rhs: $type_) -> $type_ {
        let sum = crate::quantity::value::QuantityValue::element_sum(
          self.qty.value(),
          rhs.qty.value(),
        );
        self.qty.set_value(sum);
        self
      }
    }
  };
}

pub(crate) use quantity_api;
pub(crate) use quantity_setters;
pub(crate) use quantity_add;
