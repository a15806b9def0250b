
//! SI decimal prefixes: named powers of ten from 10^30 down to
//! 10^-30.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// One of the 25 SI decimal prefixes, the empty base prefix included.
///
/// A prefix denotes multiplication by ten raised to a fixed integer
/// exponent in the range [-30, 30]. The full name ("kilo") and the
/// symbol ("k") of a prefix are two spellings of the same exponent, so
/// a single enumeration carries both and they cannot disagree.
///
/// Variants are ordered from the largest exponent to the smallest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalPrefix {
  Quetta,
  Ronna,
  Yotta,
  Zetta,
  Exa,
  Peta,
  Tera,
  Giga,
  Mega,
  Kilo,
  Hecto,
  Deca,
  /// The absence of a prefix. Its name and symbol are both empty and
  /// its multiplier is one.
  #[default]
  Base,
  Deci,
  Centi,
  Milli,
  Micro,
  Nano,
  Pico,
  Femto,
  Atto,
  Zepto,
  Yocto,
  Ronto,
  Quecto,
}

/// Error produced when a string or an exponent does not denote one of
/// the 25 SI decimal prefixes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnknownPrefixError {
  #[error("Unknown SI prefix {0:?}")]
  Spelling(String),
  #[error("No SI prefix has exponent {0}")]
  Exponent(i32),
}

static PREFIXES_BY_NAME: phf::Map<&'static str, DecimalPrefix> = phf::phf_map! {
  "quetta" => DecimalPrefix::Quetta,
  "ronna" => DecimalPrefix::Ronna,
  "yotta" => DecimalPrefix::Yotta,
  "zetta" => DecimalPrefix::Zetta,
  "exa" => DecimalPrefix::Exa,
  "peta" => DecimalPrefix::Peta,
  "tera" => DecimalPrefix::Tera,
  "giga" => DecimalPrefix::Giga,
  "mega" => DecimalPrefix::Mega,
  "kilo" => DecimalPrefix::Kilo,
  "hecto" => DecimalPrefix::Hecto,
  "deca" => DecimalPrefix::Deca,
  "" => DecimalPrefix::Base,
  "deci" => DecimalPrefix::Deci,
  "centi" => DecimalPrefix::Centi,
  "milli" => DecimalPrefix::Milli,
  "micro" => DecimalPrefix::Micro,
  "nano" => DecimalPrefix::Nano,
  "pico" => DecimalPrefix::Pico,
  "femto" => DecimalPrefix::Femto,
  "atto" => DecimalPrefix::Atto,
  "zepto" => DecimalPrefix::Zepto,
  "yocto" => DecimalPrefix::Yocto,
  "ronto" => DecimalPrefix::Ronto,
  "quecto" => DecimalPrefix::Quecto,
};

static PREFIXES_BY_SYMBOL: phf::Map<&'static str, DecimalPrefix> = phf::phf_map! {
  "Q" => DecimalPrefix::Quetta,
  "R" => DecimalPrefix::Ronna,
  "Y" => DecimalPrefix::Yotta,
  "Z" => DecimalPrefix::Zetta,
  "E" => DecimalPrefix::Exa,
  "P" => DecimalPrefix::Peta,
  "T" => DecimalPrefix::Tera,
  "G" => DecimalPrefix::Giga,
  "M" => DecimalPrefix::Mega,
  "k" => DecimalPrefix::Kilo,
  "h" => DecimalPrefix::Hecto,
  "da" => DecimalPrefix::Deca,
  "" => DecimalPrefix::Base,
  "d" => DecimalPrefix::Deci,
  "c" => DecimalPrefix::Centi,
  "m" => DecimalPrefix::Milli,
  // Note: We accept both "u" and "μ" for micro.
  "u" => DecimalPrefix::Micro,
  "μ" => DecimalPrefix::Micro,
  "n" => DecimalPrefix::Nano,
  "p" => DecimalPrefix::Pico,
  "f" => DecimalPrefix::Femto,
  "a" => DecimalPrefix::Atto,
  "z" => DecimalPrefix::Zepto,
  "y" => DecimalPrefix::Yocto,
  "r" => DecimalPrefix::Ronto,
  "q" => DecimalPrefix::Quecto,
};

impl DecimalPrefix {
  /// All 25 prefixes, ordered from the largest exponent to the
  /// smallest.
  pub const ALL: [DecimalPrefix; 25] = [
    DecimalPrefix::Quetta,
    DecimalPrefix::Ronna,
    DecimalPrefix::Yotta,
    DecimalPrefix::Zetta,
    DecimalPrefix::Exa,
    DecimalPrefix::Peta,
    DecimalPrefix::Tera,
    DecimalPrefix::Giga,
    DecimalPrefix::Mega,
    DecimalPrefix::Kilo,
    DecimalPrefix::Hecto,
    DecimalPrefix::Deca,
    DecimalPrefix::Base,
    DecimalPrefix::Deci,
    DecimalPrefix::Centi,
    DecimalPrefix::Milli,
    DecimalPrefix::Micro,
    DecimalPrefix::Nano,
    DecimalPrefix::Pico,
    DecimalPrefix::Femto,
    DecimalPrefix::Atto,
    DecimalPrefix::Zepto,
    DecimalPrefix::Yocto,
    DecimalPrefix::Ronto,
    DecimalPrefix::Quecto,
  ];

  /// The power of ten this prefix denotes.
  pub fn exponent(self) -> i32 {
    match self {
      DecimalPrefix::Quetta => 30,
      DecimalPrefix::Ronna => 27,
      DecimalPrefix::Yotta => 24,
      DecimalPrefix::Zetta => 21,
      DecimalPrefix::Exa => 18,
      DecimalPrefix::Peta => 15,
      DecimalPrefix::Tera => 12,
      DecimalPrefix::Giga => 9,
      DecimalPrefix::Mega => 6,
      DecimalPrefix::Kilo => 3,
      DecimalPrefix::Hecto => 2,
      DecimalPrefix::Deca => 1,
      DecimalPrefix::Base => 0,
      DecimalPrefix::Deci => -1,
      DecimalPrefix::Centi => -2,
      DecimalPrefix::Milli => -3,
      DecimalPrefix::Micro => -6,
      DecimalPrefix::Nano => -9,
      DecimalPrefix::Pico => -12,
      DecimalPrefix::Femto => -15,
      DecimalPrefix::Atto => -18,
      DecimalPrefix::Zepto => -21,
      DecimalPrefix::Yocto => -24,
      DecimalPrefix::Ronto => -27,
      DecimalPrefix::Quecto => -30,
    }
  }

  /// The scale factor `10^exponent`, taken from a literal table so
  /// that each multiplier is the nearest `f64` to its power of ten.
  pub fn multiplier(self) -> f64 {
    match self {
      DecimalPrefix::Quetta => 1e30,
      DecimalPrefix::Ronna => 1e27,
      DecimalPrefix::Yotta => 1e24,
      DecimalPrefix::Zetta => 1e21,
      DecimalPrefix::Exa => 1e18,
      DecimalPrefix::Peta => 1e15,
      DecimalPrefix::Tera => 1e12,
      DecimalPrefix::Giga => 1e9,
      DecimalPrefix::Mega => 1e6,
      DecimalPrefix::Kilo => 1e3,
      DecimalPrefix::Hecto => 1e2,
      DecimalPrefix::Deca => 1e1,
      DecimalPrefix::Base => 1.0,
      DecimalPrefix::Deci => 1e-1,
      DecimalPrefix::Centi => 1e-2,
      DecimalPrefix::Milli => 1e-3,
      DecimalPrefix::Micro => 1e-6,
      DecimalPrefix::Nano => 1e-9,
      DecimalPrefix::Pico => 1e-12,
      DecimalPrefix::Femto => 1e-15,
      DecimalPrefix::Atto => 1e-18,
      DecimalPrefix::Zepto => 1e-21,
      DecimalPrefix::Yocto => 1e-24,
      DecimalPrefix::Ronto => 1e-27,
      DecimalPrefix::Quecto => 1e-30,
    }
  }

  /// The full prefix name, e.g. `"milli"`. The base prefix has the
  /// empty name.
  pub fn name(self) -> &'static str {
    match self {
      DecimalPrefix::Quetta => "quetta",
      DecimalPrefix::Ronna => "ronna",
      DecimalPrefix::Yotta => "yotta",
      DecimalPrefix::Zetta => "zetta",
      DecimalPrefix::Exa => "exa",
      DecimalPrefix::Peta => "peta",
      DecimalPrefix::Tera => "tera",
      DecimalPrefix::Giga => "giga",
      DecimalPrefix::Mega => "mega",
      DecimalPrefix::Kilo => "kilo",
      DecimalPrefix::Hecto => "hecto",
      DecimalPrefix::Deca => "deca",
      DecimalPrefix::Base => "",
      DecimalPrefix::Deci => "deci",
      DecimalPrefix::Centi => "centi",
      DecimalPrefix::Milli => "milli",
      DecimalPrefix::Micro => "micro",
      DecimalPrefix::Nano => "nano",
      DecimalPrefix::Pico => "pico",
      DecimalPrefix::Femto => "femto",
      DecimalPrefix::Atto => "atto",
      DecimalPrefix::Zepto => "zepto",
      DecimalPrefix::Yocto => "yocto",
      DecimalPrefix::Ronto => "ronto",
      DecimalPrefix::Quecto => "quecto",
    }
  }

  /// The prefix symbol, e.g. `"m"` for milli. The base prefix has the
  /// empty symbol.
  pub fn symbol(self) -> &'static str {
    match self {
      DecimalPrefix::Quetta => "Q",
      DecimalPrefix::Ronna => "R",
      DecimalPrefix::Yotta => "Y",
      DecimalPrefix::Zetta => "Z",
      DecimalPrefix::Exa => "E",
      DecimalPrefix::Peta => "P",
      DecimalPrefix::Tera => "T",
      DecimalPrefix::Giga => "G",
      DecimalPrefix::Mega => "M",
      DecimalPrefix::Kilo => "k",
      DecimalPrefix::Hecto => "h",
      DecimalPrefix::Deca => "da",
      DecimalPrefix::Base => "",
      DecimalPrefix::Deci => "d",
      DecimalPrefix::Centi => "c",
      DecimalPrefix::Milli => "m",
      DecimalPrefix::Micro => "μ",
      DecimalPrefix::Nano => "n",
      DecimalPrefix::Pico => "p",
      DecimalPrefix::Femto => "f",
      DecimalPrefix::Atto => "a",
      DecimalPrefix::Zepto => "z",
      DecimalPrefix::Yocto => "y",
      DecimalPrefix::Ronto => "r",
      DecimalPrefix::Quecto => "q",
    }
  }

  /// Resolves a full prefix name such as `"kilo"`.
  pub fn from_name(name: &str) -> Option<DecimalPrefix> {
    PREFIXES_BY_NAME.get(name).copied()
  }

  /// Resolves a prefix symbol such as `"k"`.
  pub fn from_symbol(symbol: &str) -> Option<DecimalPrefix> {
    PREFIXES_BY_SYMBOL.get(symbol).copied()
  }

  /// Resolves an exponent to its prefix. Exponents outside the 25
  /// enumerated SI values are a typed error.
  pub fn try_from_exponent(exponent: i32) -> Result<DecimalPrefix, UnknownPrefixError> {
    DecimalPrefix::ALL
      .into_iter()
      .find(|p| p.exponent() == exponent)
      .ok_or(UnknownPrefixError::Exponent(exponent))
  }
}

impl Display for DecimalPrefix {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for DecimalPrefix {
  type Err = UnknownPrefixError;

  /// Accepts either a full prefix name or a prefix symbol.
  fn from_str(s: &str) -> Result<DecimalPrefix, UnknownPrefixError> {
    DecimalPrefix::from_name(s)
      .or_else(|| DecimalPrefix::from_symbol(s))
      .ok_or_else(|| UnknownPrefixError::Spelling(s.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EXPECTED_MULTIPLIERS: [(DecimalPrefix, f64); 25] = [
    (DecimalPrefix::Quetta, 1e30),
    (DecimalPrefix::Ronna, 1e27),
    (DecimalPrefix::Yotta, 1e24),
    (DecimalPrefix::Zetta, 1e21),
    (DecimalPrefix::Exa, 1e18),
    (DecimalPrefix::Peta, 1e15),
    (DecimalPrefix::Tera, 1e12),
    (DecimalPrefix::Giga, 1e9),
    (DecimalPrefix::Mega, 1e6),
    (DecimalPrefix::Kilo, 1e3),
    (DecimalPrefix::Hecto, 1e2),
    (DecimalPrefix::Deca, 1e1),
    (DecimalPrefix::Base, 1e0),
    (DecimalPrefix::Deci, 1e-1),
    (DecimalPrefix::Centi, 1e-2),
    (DecimalPrefix::Milli, 1e-3),
    (DecimalPrefix::Micro, 1e-6),
    (DecimalPrefix::Nano, 1e-9),
    (DecimalPrefix::Pico, 1e-12),
    (DecimalPrefix::Femto, 1e-15),
    (DecimalPrefix::Atto, 1e-18),
    (DecimalPrefix::Zepto, 1e-21),
    (DecimalPrefix::Yocto, 1e-24),
    (DecimalPrefix::Ronto, 1e-27),
    (DecimalPrefix::Quecto, 1e-30),
  ];

  #[test]
  fn test_multiplier_table() {
    for (prefix, expected) in EXPECTED_MULTIPLIERS {
      assert_eq!(prefix.multiplier(), expected, "multiplier of {:?}", prefix);
    }
  }

  #[test]
  fn test_multiplier_spot_values() {
    assert_eq!(DecimalPrefix::Kilo.multiplier(), 1000.0);
    assert_eq!(DecimalPrefix::Micro.multiplier(), 0.000001);
    assert_eq!(DecimalPrefix::Base.multiplier(), 1.0);
  }

  #[test]
  fn test_exponents_strictly_decrease() {
    for window in DecimalPrefix::ALL.windows(2) {
      assert!(window[0].exponent() > window[1].exponent());
    }
    assert_eq!(DecimalPrefix::Quetta.exponent(), 30);
    assert_eq!(DecimalPrefix::Quecto.exponent(), -30);
    assert_eq!(DecimalPrefix::Base.exponent(), 0);
  }

  #[test]
  fn test_name_lookup_agrees_for_all_prefixes() {
    for prefix in DecimalPrefix::ALL {
      assert_eq!(DecimalPrefix::from_name(prefix.name()), Some(prefix));
    }
  }

  #[test]
  fn test_symbol_lookup_agrees_for_all_prefixes() {
    for prefix in DecimalPrefix::ALL {
      assert_eq!(DecimalPrefix::from_symbol(prefix.symbol()), Some(prefix));
    }
  }

  #[test]
  fn test_micro_accepts_ascii_alias() {
    assert_eq!(DecimalPrefix::from_symbol("u"), Some(DecimalPrefix::Micro));
    assert_eq!(DecimalPrefix::from_symbol("μ"), Some(DecimalPrefix::Micro));
    assert_eq!(DecimalPrefix::Micro.symbol(), "μ");
  }

  #[test]
  fn test_deca_symbol_is_two_characters() {
    assert_eq!(DecimalPrefix::Deca.symbol(), "da");
    assert_eq!(DecimalPrefix::from_symbol("da"), Some(DecimalPrefix::Deca));
  }

  #[test]
  fn test_from_str() {
    assert_eq!("kilo".parse(), Ok(DecimalPrefix::Kilo));
    assert_eq!("k".parse(), Ok(DecimalPrefix::Kilo));
    assert_eq!("milli".parse(), Ok(DecimalPrefix::Milli));
    assert_eq!(
      "bogus".parse::<DecimalPrefix>(),
      Err(UnknownPrefixError::Spelling("bogus".to_owned())),
    );
  }

  #[test]
  fn test_try_from_exponent() {
    assert_eq!(DecimalPrefix::try_from_exponent(3), Ok(DecimalPrefix::Kilo));
    assert_eq!(DecimalPrefix::try_from_exponent(0), Ok(DecimalPrefix::Base));
    assert_eq!(DecimalPrefix::try_from_exponent(-6), Ok(DecimalPrefix::Micro));
    assert_eq!(DecimalPrefix::try_from_exponent(4), Err(UnknownPrefixError::Exponent(4)));
    assert_eq!(DecimalPrefix::try_from_exponent(-31), Err(UnknownPrefixError::Exponent(-31)));
  }

  #[test]
  fn test_default_is_base() {
    assert_eq!(DecimalPrefix::default(), DecimalPrefix::Base);
  }

  #[test]
  fn test_display_is_symbol() {
    assert_eq!(DecimalPrefix::Kilo.to_string(), "k");
    assert_eq!(DecimalPrefix::Base.to_string(), "");
  }

  #[test]
  fn test_serde_round_trip() {
    let json = serde_json::to_string(&DecimalPrefix::Kilo).unwrap();
    assert_eq!(json, "\"kilo\"");
    let parsed: DecimalPrefix = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, DecimalPrefix::Kilo);
  }
}
