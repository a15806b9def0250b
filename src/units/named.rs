
//! Named coherent derived units: compound units important enough to
//! carry their own name and symbol.

use super::prefix::DecimalPrefix;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// A coherent derived unit with a name and symbol of its own, rather
/// than a symbol synthesized from base-unit powers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedUnit {
  Newton,
  Pascal,
  MetrePerSecond,
  MetrePerSecondSquared,
}

const NEWTON_DESCRIPTION: &str =
  "The newton, symbol N, is the SI unit of force. It is expressed in terms of \
   base units as kg m s^-2 and is defined as the force required to accelerate \
   a mass of one kilogram at a rate of one metre per second squared.";

const PASCAL_DESCRIPTION: &str =
  "The pascal, symbol Pa, is the SI unit of pressure. It is defined as one \
   newton per square metre (N/m^2).";

const METRE_PER_SECOND_DESCRIPTION: &str =
  "The metre per second, symbol m s^-1 or m/s, is a derived SI unit of speed \
   or velocity.";

const METRE_PER_SECOND_SQUARED_DESCRIPTION: &str =
  "The metre per second squared, symbol m s^-2 or m/s^2, is a derived SI unit \
   of acceleration.";

impl NamedUnit {
  pub fn name(self) -> &'static str {
    match self {
      NamedUnit::Newton => "newton",
      NamedUnit::Pascal => "pascal",
      NamedUnit::MetrePerSecond => "metre per second",
      NamedUnit::MetrePerSecondSquared => "metre per second squared",
    }
  }

  pub fn plural_name(self) -> &'static str {
    match self {
      NamedUnit::Newton => "newtons",
      NamedUnit::Pascal => "pascals",
      NamedUnit::MetrePerSecond => "metres per second",
      NamedUnit::MetrePerSecondSquared => "metres per second squared",
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      NamedUnit::Newton => "N",
      NamedUnit::Pascal => "Pa",
      NamedUnit::MetrePerSecond => "m s^-1",
      NamedUnit::MetrePerSecondSquared => "m s^-2",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      NamedUnit::Newton => NEWTON_DESCRIPTION,
      NamedUnit::Pascal => PASCAL_DESCRIPTION,
      NamedUnit::MetrePerSecond => METRE_PER_SECOND_DESCRIPTION,
      NamedUnit::MetrePerSecondSquared => METRE_PER_SECOND_SQUARED_DESCRIPTION,
    }
  }

  /// The symbol of this unit scaled by `prefix`: the prefix symbol is
  /// written directly before the whole compound symbol, per the SI
  /// convention of prefixing only the leading unit.
  pub fn prefixed_symbol(self, prefix: DecimalPrefix) -> String {
    format!("{}{}", prefix.symbol(), self.symbol())
  }
}

impl Display for NamedUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
