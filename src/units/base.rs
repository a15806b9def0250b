
//! The seven SI base units.

use super::prefix::DecimalPrefix;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// One of the seven SI base units. Each carries its canonical defining
/// text from the SI brochure as its description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseUnit {
  Metre,
  Kilogram,
  Second,
  Ampere,
  Kelvin,
  Mole,
  Candela,
}

const METRE_DESCRIPTION: &str =
  "The metre, symbol m, is the SI unit of length. It is defined by taking the \
   fixed numerical value of the speed of light in vacuum c to be 299 792 458 \
   when expressed in the unit m s^-1, where the second is defined in terms of \
   the caesium frequency.";

const KILOGRAM_DESCRIPTION: &str =
  "The kilogram, symbol kg, is the SI unit of mass. It is defined by taking \
   the fixed numerical value of the Planck constant h to be \
   6.626 070 15 x 10^-34 when expressed in the unit J s, which is equal to \
   kg m^2 s^-1, where the metre and the second are defined in terms of c and \
   the caesium frequency.";

const SECOND_DESCRIPTION: &str =
  "The second, symbol s, is the SI unit of time. It is defined by taking the \
   fixed numerical value of the caesium frequency, the unperturbed \
   ground-state hyperfine transition frequency of the caesium-133 atom, to be \
   9 192 631 770 when expressed in the unit Hz, which is equal to s^-1.";

const AMPERE_DESCRIPTION: &str =
  "The ampere, symbol A, is the SI unit of electric current. It is defined by \
   taking the fixed numerical value of the elementary charge e to be \
   1.602 176 634 x 10^-19 when expressed in the unit C, which is equal to \
   A s, where the second is defined in terms of the caesium frequency.";

const KELVIN_DESCRIPTION: &str =
  "The kelvin, symbol K, is the SI unit of thermodynamic temperature. It is \
   defined by taking the fixed numerical value of the Boltzmann constant k to \
   be 1.380 649 x 10^-23 when expressed in the unit J K^-1, which is equal to \
   kg m^2 s^-2 K^-1, where the kilogram, metre and second are defined in \
   terms of h, c and the caesium frequency.";

const MOLE_DESCRIPTION: &str =
  "The mole, symbol mol, is the SI unit of amount of substance. One mole \
   contains exactly 6.022 140 76 x 10^23 elementary entities. This number is \
   the fixed numerical value of the Avogadro constant NA when expressed in \
   the unit mol^-1 and is called the Avogadro number.";

const CANDELA_DESCRIPTION: &str =
  "The candela, symbol cd, is the SI unit of luminous intensity in a given \
   direction. It is defined by taking the fixed numerical value of the \
   luminous efficacy of monochromatic radiation of frequency 540 x 10^12 Hz \
   to be 683 when expressed in the unit lm W^-1, which is equal to \
   cd sr W^-1, or cd sr kg^-1 m^-2 s^3, where the kilogram, metre and second \
   are defined in terms of h, c and the caesium frequency.";

impl BaseUnit {
  /// All seven base units.
  pub const ALL: [BaseUnit; 7] = [
    BaseUnit::Metre,
    BaseUnit::Kilogram,
    BaseUnit::Second,
    BaseUnit::Ampere,
    BaseUnit::Kelvin,
    BaseUnit::Mole,
    BaseUnit::Candela,
  ];

  pub fn name(self) -> &'static str {
    match self {
      BaseUnit::Metre => "metre",
      BaseUnit::Kilogram => "kilogram",
      BaseUnit::Second => "second",
      BaseUnit::Ampere => "ampere",
      BaseUnit::Kelvin => "kelvin",
      BaseUnit::Mole => "mole",
      BaseUnit::Candela => "candela",
    }
  }

  pub fn plural_name(self) -> &'static str {
    match self {
      BaseUnit::Metre => "metres",
      BaseUnit::Kilogram => "kilograms",
      BaseUnit::Second => "seconds",
      BaseUnit::Ampere => "amperes",
      BaseUnit::Kelvin => "kelvins",
      BaseUnit::Mole => "moles",
      BaseUnit::Candela => "candelas",
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      BaseUnit::Metre => "m",
      BaseUnit::Kilogram => "kg",
      BaseUnit::Second => "s",
      BaseUnit::Ampere => "A",
      BaseUnit::Kelvin => "K",
      BaseUnit::Mole => "mol",
      BaseUnit::Candela => "cd",
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      BaseUnit::Metre => METRE_DESCRIPTION,
      BaseUnit::Kilogram => KILOGRAM_DESCRIPTION,
      BaseUnit::Second => SECOND_DESCRIPTION,
      BaseUnit::Ampere => AMPERE_DESCRIPTION,
      BaseUnit::Kelvin => KELVIN_DESCRIPTION,
      BaseUnit::Mole => MOLE_DESCRIPTION,
      BaseUnit::Candela => CANDELA_DESCRIPTION,
    }
  }

  /// The symbol of this unit scaled by `prefix`, written with the
  /// prefix symbol directly before the unit symbol ("mm", "ks").
  ///
  /// The kilogram is irregular: the base SI mass unit is itself the
  /// already-prefixed "kilo-gram", so a fixed handful of its scaled
  /// forms have their own spellings ("g" for milli, "ton" for kilo)
  /// instead of the concatenation rule.
  pub fn prefixed_symbol(self, prefix: DecimalPrefix) -> String {
    if self == BaseUnit::Kilogram {
      if let Some(irregular) = kilogram_irregular_symbol(prefix) {
        return irregular.to_owned();
      }
    }
    format!("{}{}", prefix.symbol(), self.symbol())
  }
}

fn kilogram_irregular_symbol(prefix: DecimalPrefix) -> Option<&'static str> {
  match prefix {
    DecimalPrefix::Kilo => Some("ton"),
    DecimalPrefix::Deci => Some("hg"),
    DecimalPrefix::Centi => Some("dag"),
    DecimalPrefix::Milli => Some("g"),
    DecimalPrefix::Micro => Some("mg"),
    DecimalPrefix::Nano => Some("μg"),
    _ => None,
  }
}

impl Display for BaseUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}
