
//! The closed family of units a quantity can carry.

use super::base::BaseUnit;
use super::derived::DerivedUnit;
use super::named::NamedUnit;
use super::prefix::DecimalPrefix;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// A unit of measurement: one of the seven SI base units, a named
/// coherent derived unit, or a unit synthesized from powers of other
/// units.
///
/// The family is closed, so cloning and equality are structural; a
/// copied unit never shares state with its origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
  Base(BaseUnit),
  Named(NamedUnit),
  Derived(DerivedUnit),
}

impl Unit {
  pub fn name(&self) -> &str {
    match self {
      Unit::Base(unit) => unit.name(),
      Unit::Named(unit) => unit.name(),
      Unit::Derived(unit) => unit.name(),
    }
  }

  pub fn plural_name(&self) -> &str {
    match self {
      Unit::Base(unit) => unit.plural_name(),
      Unit::Named(unit) => unit.plural_name(),
      Unit::Derived(unit) => unit.plural_name(),
    }
  }

  pub fn symbol(&self) -> &str {
    match self {
      Unit::Base(unit) => unit.symbol(),
      Unit::Named(unit) => unit.symbol(),
      Unit::Derived(unit) => unit.symbol(),
    }
  }

  pub fn description(&self) -> &str {
    match self {
      Unit::Base(unit) => unit.description(),
      Unit::Named(unit) => unit.description(),
      Unit::Derived(unit) => unit.description(),
    }
  }

  /// The unit symbol scaled by `prefix`. Base units apply their own
  /// rules (the kilogram has irregular forms); compound symbols take
  /// the prefix on the leading unit only.
  pub fn prefixed_symbol(&self, prefix: DecimalPrefix) -> String {
    match self {
      Unit::Base(unit) => unit.prefixed_symbol(prefix),
      Unit::Named(unit) => unit.prefixed_symbol(prefix),
      Unit::Derived(unit) => unit.prefixed_symbol(prefix),
    }
  }
}

impl From<BaseUnit> for Unit {
  fn from(unit: BaseUnit) -> Unit {
    Unit::Base(unit)
  }
}

impl From<NamedUnit> for Unit {
  fn from(unit: NamedUnit) -> Unit {
    Unit::Named(unit)
  }
}

impl From<DerivedUnit> for Unit {
  fn from(unit: DerivedUnit) -> Unit {
    Unit::Derived(unit)
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
