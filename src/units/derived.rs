
//! Units synthesized from an ordered list of other units raised to
//! integer powers.

use super::prefix::DecimalPrefix;
use super::unit::Unit;

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};

/// A single factor of a derived unit: a unit raised to an integer
/// power.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPower {
  pub unit: Unit,
  pub power: i32,
}

/// Error produced when a derived unit is constructed from an empty
/// factor list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Derived unit requires at least one unit factor")]
pub struct EmptyDerivedUnitError;

/// A unit built as a product of other units raised to integer powers,
/// e.g. kg m^-3. The name, plural name, and symbol are synthesized
/// from the factor list at construction time and never change
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDerivedUnit", into = "RawDerivedUnit")]
pub struct DerivedUnit {
  parts: Vec<UnitPower>,
  name: String,
  plural_name: String,
  symbol: String,
  description: String,
}

/// Serialized form of [`DerivedUnit`]: only the inputs to
/// construction, so that deserialization re-runs the synthesis and its
/// validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawDerivedUnit {
  parts: Vec<UnitPower>,
  description: String,
}

impl DerivedUnit {
  /// Builds a derived unit from an ordered, non-empty list of unit
  /// factors. The factor order is preserved verbatim in the
  /// synthesized name and symbol.
  pub fn new(
    parts: impl Into<Vec<UnitPower>>,
    description: impl Into<String>,
  ) -> Result<DerivedUnit, EmptyDerivedUnitError> {
    let parts = parts.into();
    if parts.is_empty() {
      return Err(EmptyDerivedUnitError);
    }
    let symbol = parts.iter().map(UnitPower::symbol_fragment).join(" ");
    let name = parts.iter().map(|p| p.name_fragment(false)).join(" ");
    let plural_name = parts.iter().map(|p| p.name_fragment(true)).join(" ");
    Ok(DerivedUnit {
      parts,
      name,
      plural_name,
      symbol,
      description: description.into(),
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn plural_name(&self) -> &str {
    &self.plural_name
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  /// The unit factors this unit was built from, in construction
  /// order.
  pub fn parts(&self) -> &[UnitPower] {
    &self.parts
  }

  /// The compound symbol scaled by `prefix`: the prefix symbol is
  /// written directly before the whole symbol, per the SI convention
  /// of prefixing only the leading unit.
  pub fn prefixed_symbol(&self, prefix: DecimalPrefix) -> String {
    format!("{}{}", prefix.symbol(), self.symbol)
  }
}

impl UnitPower {
  fn symbol_fragment(&self) -> String {
    if self.power == 1 {
      self.unit.symbol().to_owned()
    } else {
      format!("{}^{}", self.unit.symbol(), self.power)
    }
  }

  /// The English phrase for this factor. Positive powers inflect the
  /// unit noun ("square metre"); negative powers read as divisions
  /// ("per second squared") and always use the singular noun, even in
  /// a plural-name build.
  fn name_fragment(&self, plural: bool) -> String {
    let noun = if plural { self.unit.plural_name() } else { self.unit.name() };
    match self.power {
      -1 => format!("per {}", self.unit.name()),
      -2 => format!("per {} squared", self.unit.name()),
      -3 => format!("per cubic {}", self.unit.name()),
      1 => noun.to_owned(),
      2 => format!("square {}", noun),
      3 => format!("cubic {}", noun),
      4 => format!("quartic {}", noun),
      _ => noun.to_owned(),
    }
  }
}

impl Display for UnitPower {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol_fragment())
  }
}

impl Display for DerivedUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}

impl From<DerivedUnit> for RawDerivedUnit {
  fn from(unit: DerivedUnit) -> RawDerivedUnit {
    RawDerivedUnit {
      parts: unit.parts,
      description: unit.description,
    }
  }
}

impl TryFrom<RawDerivedUnit> for DerivedUnit {
  type Error = EmptyDerivedUnitError;

  fn try_from(raw: RawDerivedUnit) -> Result<DerivedUnit, EmptyDerivedUnitError> {
    DerivedUnit::new(raw.parts, raw.description)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::base::BaseUnit;

  fn factor(unit: BaseUnit, power: i32) -> UnitPower {
    UnitPower { unit: Unit::Base(unit), power }
  }

  #[test]
  fn test_acceleration_symbol() {
    let unit = DerivedUnit::new(
      vec![factor(BaseUnit::Metre, 1), factor(BaseUnit::Second, -2)],
      "",
    ).unwrap();
    assert_eq!(unit.symbol(), "m s^-2");
    assert_eq!(unit.name(), "metre per second squared");
    assert_eq!(unit.plural_name(), "metres per second squared");
  }

  #[test]
  fn test_density_symbol() {
    let unit = DerivedUnit::new(
      vec![factor(BaseUnit::Kilogram, 1), factor(BaseUnit::Metre, -3)],
      "",
    ).unwrap();
    assert_eq!(unit.symbol(), "kg m^-3");
    assert_eq!(unit.name(), "kilogram per cubic metre");
    assert_eq!(unit.plural_name(), "kilograms per cubic metre");
  }

  #[test]
  fn test_cubic_metre() {
    let unit = DerivedUnit::new(vec![factor(BaseUnit::Metre, 3)], "").unwrap();
    assert_eq!(unit.symbol(), "m^3");
    assert_eq!(unit.name(), "cubic metre");
    assert_eq!(unit.plural_name(), "cubic metres");
  }

  #[test]
  fn test_name_phrases_across_powers() {
    let phrases = [
      (-3, "per cubic second"),
      (-2, "per second squared"),
      (-1, "per second"),
      (2, "square second"),
      (3, "cubic second"),
      (4, "quartic second"),
      // Powers outside the phrase table fall back to the bare noun.
      (5, "second"),
      (-4, "second"),
    ];
    for (power, expected) in phrases {
      let unit = DerivedUnit::new(vec![factor(BaseUnit::Second, power)], "").unwrap();
      assert_eq!(unit.name(), expected, "name for power {}", power);
    }
  }

  #[test]
  fn test_plural_uses_singular_for_negative_powers() {
    let unit = DerivedUnit::new(vec![factor(BaseUnit::Second, -2)], "").unwrap();
    assert_eq!(unit.plural_name(), "per second squared");
    let unit = DerivedUnit::new(vec![factor(BaseUnit::Second, 2)], "").unwrap();
    assert_eq!(unit.plural_name(), "square seconds");
  }

  #[test]
  fn test_symbol_nonempty_for_nonempty_parts() {
    for power in [-4, -1, 1, 2, 7] {
      let unit = DerivedUnit::new(vec![factor(BaseUnit::Mole, power)], "").unwrap();
      assert!(!unit.symbol().is_empty());
      assert!(!unit.name().is_empty());
    }
  }

  #[test]
  fn test_empty_parts_is_an_error() {
    assert_eq!(DerivedUnit::new(vec![], ""), Err(EmptyDerivedUnitError));
  }

  #[test]
  fn test_factor_order_is_preserved() {
    let unit = DerivedUnit::new(
      vec![
        factor(BaseUnit::Kilogram, 1),
        factor(BaseUnit::Metre, -1),
        factor(BaseUnit::Second, -2),
      ],
      "",
    ).unwrap();
    assert_eq!(unit.symbol(), "kg m^-1 s^-2");
    assert_eq!(unit.name(), "kilogram per metre per second squared");
    assert_eq!(unit.parts().len(), 3);
  }

  #[test]
  fn test_unit_power_display() {
    assert_eq!(factor(BaseUnit::Metre, 1).to_string(), "m");
    assert_eq!(factor(BaseUnit::Second, -2).to_string(), "s^-2");
  }

  #[test]
  fn test_prefixed_symbol_prefixes_leading_unit_only() {
    let unit = DerivedUnit::new(
      vec![factor(BaseUnit::Metre, 1), factor(BaseUnit::Second, -2)],
      "",
    ).unwrap();
    assert_eq!(unit.prefixed_symbol(DecimalPrefix::Kilo), "km s^-2");
    assert_eq!(unit.prefixed_symbol(DecimalPrefix::Base), "m s^-2");
  }

  #[test]
  fn test_serde_round_trip() {
    let unit = DerivedUnit::new(
      vec![factor(BaseUnit::Kilogram, 1), factor(BaseUnit::Metre, -3)],
      "Mass per unit volume.",
    ).unwrap();
    let json = serde_json::to_string(&unit).unwrap();
    let parsed: DerivedUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, unit);
    assert_eq!(parsed.symbol(), "kg m^-3");
  }

  #[test]
  fn test_serde_rejects_empty_parts() {
    let json = r#"{"parts":[],"description":"nothing"}"#;
    serde_json::from_str::<DerivedUnit>(json).unwrap_err();
  }
}
