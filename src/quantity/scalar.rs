
//! Derived scalar quantities: density and volume.

use crate::units::base::BaseUnit;
use crate::units::derived::{DerivedUnit, UnitPower};
use crate::units::prefix::DecimalPrefix;
use crate::units::unit::Unit;
use super::base::{
  ensure_non_negative, quantity_api, quantity_setters,
  NegativeQuantityError, Quantity, EQUALITY_EPSILON,
};

use approx::AbsDiffEq;
use once_cell::sync::Lazy;

use std::f64::consts::PI;
use std::ops::Add;

static DENSITY_UNIT: Lazy<Unit> = Lazy::new(|| {
  Unit::Derived(
    DerivedUnit::new(
      vec![
        UnitPower { unit: BaseUnit::Kilogram.into(), power: 1 },
        UnitPower { unit: BaseUnit::Metre.into(), power: -3 },
      ],
      "The kilogram per cubic metre, symbol kg m^-3, is an SI coherent \
       derived unit of density.",
    ).unwrap(),
  )
});

static VOLUME_UNIT: Lazy<Unit> = Lazy::new(|| {
  Unit::Derived(
    DerivedUnit::new(
      vec![UnitPower { unit: BaseUnit::Metre.into(), power: 3 }],
      "The cubic metre, symbol m^3, is an SI coherent derived unit of volume.",
    ).unwrap(),
  )
});

/// Derived SI mass density, measured in kilograms per cubic metre.
#[derive(Clone, Debug)]
pub struct Density {
  qty: Quantity<f64>,
}

impl Density {
  fn quantity() -> Quantity<f64> {
    Quantity::derived(
      "Density",
      "ρ",
      "Represents the derived SI Density quantity.",
      DENSITY_UNIT.clone(),
    )
  }

  /// A density of `value`, expressed in kilograms per cubic metre
  /// scaled by `prefix`.
  pub fn new(value: f64, prefix: DecimalPrefix) -> Density {
    let mut qty = Density::quantity();
    qty.set_value_from(value, prefix);
    Density { qty }
  }
}

impl Default for Density {
  /// One kilogram per cubic metre.
  fn default() -> Density {
    Density::new(1.0, DecimalPrefix::Base)
  }
}

quantity_api! { Density, f64 }
quantity_setters! { Density, f64 }

/// Shape metadata attached to a [`Volume`] built from box or sphere
/// dimensions. Dimensions are held in metres. The metadata exists for
/// dimension introspection only; the volume value never re-derives
/// from it after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VolumeShape {
  Box { length: f64, width: f64, height: f64 },
  Sphere { radius: f64 },
}

/// Derived SI volume, measured in cubic metres. Volume is physically
/// non-negative, so constructors and setters reject negative values.
#[derive(Clone, Debug)]
pub struct Volume {
  qty: Quantity<f64>,
  shape: Option<VolumeShape>,
}

impl Volume {
  fn quantity() -> Quantity<f64> {
    Quantity::derived(
      "Volume",
      "V",
      "Represents the derived SI Volume quantity.",
      VOLUME_UNIT.clone(),
    )
  }

  /// A plain volume of `value`, expressed in cubic metres scaled by
  /// `prefix`. Carries no shape metadata.
  pub fn new(value: f64, prefix: DecimalPrefix) -> Result<Volume, NegativeQuantityError> {
    ensure_non_negative("Volume", value)?;
    let mut qty = Volume::quantity();
    qty.set_value_from(value, prefix);
    Ok(Volume { qty, shape: None })
  }

  /// The volume of a box. Each dimension is a length expressed in
  /// metres scaled by `prefix`, so the multiplier applies to all
  /// three factors: a 1×1×1 kilometre box is 10^9 cubic metres.
  pub fn from_box(
    length: f64,
    width: f64,
    height: f64,
    prefix: DecimalPrefix,
  ) -> Result<Volume, NegativeQuantityError> {
    let multiplier = prefix.multiplier();
    let (length, width, height) = (length * multiplier, width * multiplier, height * multiplier);
    let value = length * width * height;
    ensure_non_negative("Volume", value)?;
    let mut qty = Volume::quantity();
    qty.store_base(value, prefix);
    Ok(Volume {
      qty,
      shape: Some(VolumeShape::Box { length, width, height }),
    })
  }

  /// The volume of a sphere whose radius is expressed in metres
  /// scaled by `prefix`.
  pub fn from_sphere(radius: f64, prefix: DecimalPrefix) -> Result<Volume, NegativeQuantityError> {
    let radius = radius * prefix.multiplier();
    let value = (4.0 / 3.0) * PI * radius.powi(3);
    ensure_non_negative("Volume", value)?;
    let mut qty = Volume::quantity();
    qty.store_base(value, prefix);
    Ok(Volume {
      qty,
      shape: Some(VolumeShape::Sphere { radius }),
    })
  }

  /// Shape metadata, in metres. `None` for plain values and for any
  /// volume whose value was overwritten after construction.
  pub fn shape(&self) -> Option<&VolumeShape> {
    self.shape.as_ref()
  }

  /// Box dimensions `(length, width, height)` in metres.
  pub fn box_dimensions(&self) -> Option<(f64, f64, f64)> {
    match self.shape {
      Some(VolumeShape::Box { length, width, height }) => Some((length, width, height)),
      _ => None,
    }
  }

  /// Sphere radius in metres.
  pub fn sphere_radius(&self) -> Option<f64> {
    match self.shape {
      Some(VolumeShape::Sphere { radius }) => Some(radius),
      _ => None,
    }
  }

  /// Stores `value` in cubic metres. The value no longer derives from
  /// any dimensions, so shape metadata is dropped.
  pub fn set_value(&mut self, value: f64) -> Result<(), NegativeQuantityError> {
    ensure_non_negative("Volume", value)?;
    self.qty.set_value(value);
    self.shape = None;
    Ok(())
  }

  /// Stores `value × multiplier(prefix)` in cubic metres, dropping
  /// shape metadata.
  pub fn set_value_from(
    &mut self,
    value: f64,
    prefix: DecimalPrefix,
  ) -> Result<(), NegativeQuantityError> {
    ensure_non_negative("Volume", value)?;
    self.qty.set_value_from(value, prefix);
    self.shape = None;
    Ok(())
  }
}

impl Default for Volume {
  /// The unit box: one cubic metre with 1×1×1 box metadata.
  fn default() -> Volume {
    let mut qty = Volume::quantity();
    qty.set_value(1.0);
    Volume {
      qty,
      shape: Some(VolumeShape::Box { length: 1.0, width: 1.0, height: 1.0 }),
    }
  }
}

quantity_api! { Volume, f64 }

impl Add for Volume {
  type Output = Volume;

  /// Sums the base-unit values. The result is a plain volume; shape
  /// metadata does not survive addition.
  fn add(mut self, rhs: Volume) -> Volume {
    let sum = self.qty.value() + rhs.qty.value();
    self.qty.set_value(sum);
    self.shape = None;
    self
  }
}

impl AbsDiffEq for Volume {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    EQUALITY_EPSILON
  }

  fn abs_diff_eq(&self, other: &Volume, epsilon: f64) -> bool {
    f64::abs_diff_eq(&self.qty.value(), &other.qty.value(), epsilon)
      && shapes_abs_diff_eq(self.shape, other.shape, epsilon)
  }
}

/// Equality compares the base-unit value and the shape metadata, each
/// within an absolute epsilon. The descriptive last-used prefix is
/// excluded, and shape dimensions are held in base units, so equal
/// volumes built through different prefixes compare equal.
impl PartialEq for Volume {
  fn eq(&self, other: &Volume) -> bool {
    self.abs_diff_eq(other, EQUALITY_EPSILON)
  }
}

fn shapes_abs_diff_eq(a: Option<VolumeShape>, b: Option<VolumeShape>, epsilon: f64) -> bool {
  match (a, b) {
    (None, None) => true,
    (
      Some(VolumeShape::Box { length: l1, width: w1, height: h1 }),
      Some(VolumeShape::Box { length: l2, width: w2, height: h2 }),
    ) => (l1 - l2).abs() <= epsilon && (w1 - w2).abs() <= epsilon && (h1 - h2).abs() <= epsilon,
    (
      Some(VolumeShape::Sphere { radius: r1 }),
      Some(VolumeShape::Sphere { radius: r2 }),
    ) => (r1 - r2).abs() <= epsilon,
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::quantity::base::PhysicalQuantity;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_density_metadata() {
    let density = Density::default();
    assert_eq!(density.name(), "Density");
    assert_eq!(density.symbol(), "ρ");
    assert!(!density.is_fundamental());
    assert_eq!(density.unit_symbol(), "kg m^-3");
    assert_eq!(density.unit_name(), "kilogram per cubic metre");
    assert_eq!(density.unit_plural_name(), "kilograms per cubic metre");
  }

  #[test]
  fn test_density_value_scaling() {
    assert_eq!(Density::default().value(), 1.0);
    assert_eq!(Density::new(2.0, DecimalPrefix::Kilo).value(), 2000.0);
    let density = Density::new(1.0, DecimalPrefix::Base);
    assert_eq!(density.value_in(DecimalPrefix::Milli), 1000.0);
  }

  #[test]
  fn test_volume_metadata() {
    let volume = Volume::default();
    assert_eq!(volume.name(), "Volume");
    assert_eq!(volume.symbol(), "V");
    assert!(!volume.is_fundamental());
    assert_eq!(volume.unit_symbol(), "m^3");
    assert_eq!(volume.unit_name(), "cubic metre");
    assert_eq!(volume.unit_plural_name(), "cubic metres");
  }

  #[test]
  fn test_default_volume_is_unit_box() {
    let volume = Volume::default();
    assert_eq!(volume.value(), 1.0);
    assert_eq!(volume.box_dimensions(), Some((1.0, 1.0, 1.0)));
    assert_eq!(volume.sphere_radius(), None);
  }

  #[test]
  fn test_box_volume() {
    let volume = Volume::from_box(2.0, 3.0, 4.0, DecimalPrefix::Base).unwrap();
    assert_abs_diff_eq!(volume.value(), 24.0);
    assert_eq!(volume.box_dimensions(), Some((2.0, 3.0, 4.0)));
  }

  #[test]
  fn test_box_prefix_scales_each_dimension() {
    // Each edge is a kilometre, so the volume picks up the multiplier
    // cubed.
    let volume = Volume::from_box(1.0, 1.0, 1.0, DecimalPrefix::Kilo).unwrap();
    assert_abs_diff_eq!(volume.value(), 1e9);
    assert_eq!(volume.box_dimensions(), Some((1000.0, 1000.0, 1000.0)));
    assert_eq!(volume.last_prefix(), DecimalPrefix::Kilo);
  }

  #[test]
  fn test_sphere_volume() {
    let volume = Volume::from_sphere(1.0, DecimalPrefix::Base).unwrap();
    assert_abs_diff_eq!(volume.value(), 4.0 / 3.0 * PI);
    assert_eq!(volume.sphere_radius(), Some(1.0));
    assert_eq!(volume.box_dimensions(), None);
  }

  #[test]
  fn test_sphere_radius_normalized_to_base_units() {
    let in_metres = Volume::from_sphere(1.0, DecimalPrefix::Base).unwrap();
    let in_millimetres = Volume::from_sphere(1000.0, DecimalPrefix::Milli).unwrap();
    assert_eq!(in_metres, in_millimetres);
    assert_eq!(in_millimetres.sphere_radius(), Some(1.0));
  }

  #[test]
  fn test_plain_volume_equality_across_prefixes() {
    let a = Volume::new(1.0, DecimalPrefix::Base).unwrap();
    let b = Volume::new(1000.0, DecimalPrefix::Milli).unwrap();
    assert_eq!(a, b);
    assert_abs_diff_eq!(a, b);
  }

  #[test]
  fn test_equality_distinguishes_shapes() {
    let plain = Volume::new(1.0, DecimalPrefix::Base).unwrap();
    let boxed = Volume::from_box(1.0, 1.0, 1.0, DecimalPrefix::Base).unwrap();
    assert_abs_diff_eq!(plain.value(), boxed.value());
    assert_ne!(plain, boxed);
  }

  #[test]
  fn test_negative_volume_is_rejected() {
    assert!(Volume::new(-1.0, DecimalPrefix::Base).is_err());
    assert!(Volume::from_sphere(-1.0, DecimalPrefix::Base).is_err());
    let mut volume = Volume::default();
    assert!(volume.set_value(-2.0).is_err());
    assert_eq!(volume.value(), 1.0);
  }

  #[test]
  fn test_addition_sums_values_and_drops_shape() {
    let sum = Volume::from_box(1.0, 1.0, 1.0, DecimalPrefix::Base).unwrap()
      + Volume::from_box(2.0, 1.0, 1.0, DecimalPrefix::Base).unwrap();
    assert_abs_diff_eq!(sum.value(), 3.0);
    assert_eq!(sum.shape(), None);
  }

  #[test]
  fn test_set_value_drops_shape() {
    let mut volume = Volume::from_sphere(2.0, DecimalPrefix::Base).unwrap();
    volume.set_value(5.0).unwrap();
    assert_eq!(volume.value(), 5.0);
    assert_eq!(volume.shape(), None);
    assert_eq!(volume.sphere_radius(), None);
  }

  #[test]
  fn test_volume_display() {
    let volume = Volume::new(2.0, DecimalPrefix::Base).unwrap();
    assert_eq!(volume.to_string(), "2 m^3");
    assert_eq!(volume.format_in(DecimalPrefix::Kilo), "0.002 km^3");
  }
}
