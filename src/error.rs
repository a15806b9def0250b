
use crate::quantity::base::NegativeQuantityError;
use crate::units::derived::EmptyDerivedUnitError;
use crate::units::prefix::UnknownPrefixError;

use thiserror::Error;

/// Top-level error type for the crate. Each module surfaces its own
/// typed error; this enum aggregates them for callers that funnel
/// everything through one `Result`.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  UnknownPrefix(#[from] UnknownPrefixError),
  #[error("{0}")]
  EmptyDerivedUnit(#[from] EmptyDerivedUnitError),
  #[error("{0}")]
  NegativeQuantity(#[from] NegativeQuantityError),
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::derived::DerivedUnit;
  use crate::units::prefix::DecimalPrefix;

  #[test]
  fn test_conversions_into_crate_error() {
    let err: Error = DecimalPrefix::try_from_exponent(7).unwrap_err().into();
    assert_eq!(err, Error::UnknownPrefix(UnknownPrefixError::Exponent(7)));

    let err: Error = DerivedUnit::new(vec![], "").unwrap_err().into();
    assert_eq!(err, Error::EmptyDerivedUnit(EmptyDerivedUnitError));

    let err: Error = crate::quantity::fundamental::Mass::new(-1.0, DecimalPrefix::Base)
      .unwrap_err()
      .into();
    assert_eq!(
      err,
      Error::NegativeQuantity(NegativeQuantityError { quantity: "Mass", value: -1.0 }),
    );
  }

  #[test]
  fn test_error_messages_pass_through() {
    let err = Error::from(UnknownPrefixError::Exponent(7));
    assert_eq!(err.to_string(), "No SI prefix has exponent 7");
  }
}
