
//! Value payloads for physical quantities: a scalar or a fixed-size
//! Cartesian vector.

use num::Zero;

/// A three-component Cartesian vector value.
pub type Vec3 = [f64; 3];

/// The value payload of a physical quantity, always held in base
/// units. Implemented for the scalar payload `f64` and the vector
/// payload [`Vec3`]; quantity logic is written once against this
/// trait and specialized only for formatting.
pub trait QuantityValue: Copy + PartialEq + std::fmt::Debug {
  /// Whether quantity formatting wraps the unit symbol in parentheses
  /// after this payload.
  const WRAPS_UNIT_SYMBOL: bool;

  fn zero() -> Self;

  /// Multiplies every component by `factor`.
  fn scaled(self, factor: f64) -> Self;

  /// Divides every component by `factor`.
  fn unscaled(self, factor: f64) -> Self;

  /// Element-wise sum.
  fn element_sum(self, other: Self) -> Self;

  /// True when every component of `self` is within `epsilon` of the
  /// matching component of `other`.
  fn within_epsilon(self, other: Self, epsilon: f64) -> bool;

  /// Renders the payload for human-readable quantity output.
  fn format(self) -> String;
}

impl QuantityValue for f64 {
  const WRAPS_UNIT_SYMBOL: bool = false;

  fn zero() -> f64 {
    Zero::zero()
  }

  fn scaled(self, factor: f64) -> f64 {
    self * factor
  }

  fn unscaled(self, factor: f64) -> f64 {
    self / factor
  }

  fn element_sum(self, other: f64) -> f64 {
    self + other
  }

  fn within_epsilon(self, other: f64, epsilon: f64) -> bool {
    (self - other).abs() <= epsilon
  }

  fn format(self) -> String {
    self.to_string()
  }
}

impl QuantityValue for Vec3 {
  const WRAPS_UNIT_SYMBOL: bool = true;

  fn zero() -> Vec3 {
    [Zero::zero(); 3]
  }

  fn scaled(self, factor: f64) -> Vec3 {
    self.map(|component| component * factor)
  }

  fn unscaled(self, factor: f64) -> Vec3 {
    self.map(|component| component / factor)
  }

  fn element_sum(self, other: Vec3) -> Vec3 {
    [self[0] + other[0], self[1] + other[1], self[2] + other[2]]
  }

  fn within_epsilon(self, other: Vec3, epsilon: f64) -> bool {
    self
      .iter()
      .zip(other)
      .all(|(a, b)| (a - b).abs() <= epsilon)
  }

  fn format(self) -> String {
    format!("({}, {}, {})", self[0], self[1], self[2])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_scalar_scaling() {
    assert_eq!(2.5.scaled(1000.0), 2500.0);
    assert_eq!(2500.0.unscaled(1000.0), 2.5);
    assert_eq!(<f64 as QuantityValue>::zero(), 0.0);
  }

  #[test]
  fn test_vector_scaling_is_element_wise() {
    assert_eq!([1.0, 2.0, 3.0].scaled(10.0), [10.0, 20.0, 30.0]);
    assert_eq!([10.0, 20.0, 30.0].unscaled(10.0), [1.0, 2.0, 3.0]);
    assert_eq!(<Vec3 as QuantityValue>::zero(), [0.0, 0.0, 0.0]);
  }

  #[test]
  fn test_element_sum() {
    assert_eq!(1.0.element_sum(2.0), 3.0);
    assert_eq!([1.0, 2.0, 3.0].element_sum([4.0, 5.0, 6.0]), [5.0, 7.0, 9.0]);
  }

  #[test]
  fn test_within_epsilon() {
    assert!(1.0.within_epsilon(1.0 + 1e-12, 1e-9));
    assert!(!1.0.within_epsilon(1.1, 1e-9));
    assert!([1.0, 2.0, 3.0].within_epsilon([1.0, 2.0 + 1e-12, 3.0], 1e-9));
    assert!(![1.0, 2.0, 3.0].within_epsilon([1.0, 2.1, 3.0], 1e-9));
  }

  #[test]
  fn test_format() {
    assert_eq!(12.5.format(), "12.5");
    assert_eq!([1.0, 2.5, 3.0].format(), "(1, 2.5, 3)");
  }
}
