
//! Derived vector quantities: position, velocity, acceleration,
//! force, and pressure. Each holds a three-component Cartesian value.

use crate::units::base::BaseUnit;
use crate::units::derived::{DerivedUnit, UnitPower};
use crate::units::named::NamedUnit;
use crate::units::prefix::DecimalPrefix;
use crate::units::unit::Unit;
use super::base::{quantity_add, quantity_api, quantity_setters, Quantity, EQUALITY_EPSILON};
use super::value::{QuantityValue, Vec3};

use approx::AbsDiffEq;
use once_cell::sync::Lazy;

static ACCELERATION_UNIT: Lazy<Unit> = Lazy::new(|| {
  Unit::Derived(
    DerivedUnit::new(
      vec![
        UnitPower { unit: BaseUnit::Metre.into(), power: 1 },
        UnitPower { unit: BaseUnit::Second.into(), power: -2 },
      ],
      "The metre per second squared, symbol m s^-2, is an SI coherent derived \
       unit of acceleration.",
    ).unwrap(),
  )
});

static PRESSURE_UNIT: Lazy<Unit> = Lazy::new(|| {
  Unit::Derived(
    DerivedUnit::new(
      vec![
        UnitPower { unit: BaseUnit::Kilogram.into(), power: 1 },
        UnitPower { unit: BaseUnit::Metre.into(), power: -1 },
        UnitPower { unit: BaseUnit::Second.into(), power: -2 },
      ],
      "The kilogram per metre per second squared, symbol kg m^-1 s^-2, is an \
       SI coherent derived unit of pressure.",
    ).unwrap(),
  )
});

/// Position of a point in space, measured in metres per component.
#[derive(Clone, Debug)]
pub struct Position {
  qty: Quantity<Vec3>,
}

impl Position {
  fn quantity() -> Quantity<Vec3> {
    Quantity::derived(
      "Position",
      "r",
      "Represents the derived SI Position quantity.",
      Unit::Base(BaseUnit::Metre),
    )
  }

  /// A position whose components are expressed in metres scaled by
  /// `prefix`.
  pub fn new(value: Vec3, prefix: DecimalPrefix) -> Position {
    let mut qty = Position::quantity();
    qty.set_value_from(value, prefix);
    Position { qty }
  }
}

impl Default for Position {
  /// The origin.
  fn default() -> Position {
    Position::new([0.0; 3], DecimalPrefix::Base)
  }
}

quantity_api! { Position, Vec3 }
quantity_setters! { Position, Vec3 }
quantity_add! { Position }

/// Velocity of a point, measured in metres per second per component.
#[derive(Clone, Debug)]
pub struct Velocity {
  qty: Quantity<Vec3>,
}

impl Velocity {
  fn quantity() -> Quantity<Vec3> {
    Quantity::derived(
      "Velocity",
      "v",
      "Represents the derived SI Velocity quantity.",
      Unit::Named(NamedUnit::MetrePerSecond),
    )
  }

  /// A velocity whose components are expressed in metres per second
  /// scaled by `prefix`.
  pub fn new(value: Vec3, prefix: DecimalPrefix) -> Velocity {
    let mut qty = Velocity::quantity();
    qty.set_value_from(value, prefix);
    Velocity { qty }
  }
}

impl Default for Velocity {
  /// At rest.
  fn default() -> Velocity {
    Velocity::new([0.0; 3], DecimalPrefix::Base)
  }
}

quantity_api! { Velocity, Vec3 }
quantity_setters! { Velocity, Vec3 }
quantity_add! { Velocity }

/// Acceleration of a point, measured in metres per second squared per
/// component.
#[derive(Clone, Debug)]
pub struct Acceleration {
  qty: Quantity<Vec3>,
}

impl Acceleration {
  fn quantity() -> Quantity<Vec3> {
    Quantity::derived(
      "Acceleration",
      "a",
      "Represents the derived SI Acceleration quantity.",
      ACCELERATION_UNIT.clone(),
    )
  }

  /// An acceleration whose components are expressed in metres per
  /// second squared scaled by `prefix`.
  pub fn new(value: Vec3, prefix: DecimalPrefix) -> Acceleration {
    let mut qty = Acceleration::quantity();
    qty.set_value_from(value, prefix);
    Acceleration { qty }
  }
}

impl Default for Acceleration {
  fn default() -> Acceleration {
    Acceleration::new([0.0; 3], DecimalPrefix::Base)
  }
}

quantity_api! { Acceleration, Vec3 }
quantity_setters! { Acceleration, Vec3 }

/// Force acting on a point, measured in newtons per component.
#[derive(Clone, Debug)]
pub struct Force {
  qty: Quantity<Vec3>,
}

impl Force {
  fn quantity() -> Quantity<Vec3> {
    Quantity::derived(
      "Force",
      "F",
      "Represents the derived SI Force quantity.",
      Unit::Named(NamedUnit::Newton),
    )
  }

  /// A force whose components are expressed in newtons scaled by
  /// `prefix`.
  pub fn new(value: Vec3, prefix: DecimalPrefix) -> Force {
    let mut qty = Force::quantity();
    qty.set_value_from(value, prefix);
    Force { qty }
  }
}

impl Default for Force {
  fn default() -> Force {
    Force::new([0.0; 3], DecimalPrefix::Base)
  }
}

quantity_api! { Force, Vec3 }
quantity_setters! { Force, Vec3 }

/// Pressure, carried as a three-component vector in kilograms per
/// metre per second squared (pascals) per component.
#[derive(Clone, Debug)]
pub struct Pressure {
  qty: Quantity<Vec3>,
}

impl Pressure {
  fn quantity() -> Quantity<Vec3> {
    Quantity::derived(
      "Pressure",
      "p",
      "Represents the derived SI Pressure quantity.",
      PRESSURE_UNIT.clone(),
    )
  }

  /// A pressure whose components are expressed in pascals scaled by
  /// `prefix`.
  pub fn new(value: Vec3, prefix: DecimalPrefix) -> Pressure {
    let mut qty = Pressure::quantity();
    qty.set_value_from(value, prefix);
    Pressure { qty }
  }
}

impl Default for Pressure {
  fn default() -> Pressure {
    Pressure::new([0.0; 3], DecimalPrefix::Base)
  }
}

quantity_api! { Pressure, Vec3 }
quantity_setters! { Pressure, Vec3 }
quantity_add! { Pressure }

impl AbsDiffEq for Pressure {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    EQUALITY_EPSILON
  }

  fn abs_diff_eq(&self, other: &Pressure, epsilon: f64) -> bool {
    self.qty.value().within_epsilon(other.qty.value(), epsilon)
  }
}

/// Equality compares the base-unit components within an absolute
/// epsilon. The descriptive last-used prefix is excluded.
impl PartialEq for Pressure {
  fn eq(&self, other: &Pressure) -> bool {
    self.abs_diff_eq(other, EQUALITY_EPSILON)
  }
}
