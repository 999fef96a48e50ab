use std::f64::consts::PI;

use serde::Serialize;

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

const METERS_PER_KILOMETER: f64 = 1000.0;

/// A tracked astronomical body.
///
/// Only the three primitive attributes are stored. Surface area, density and
/// surface gravity are pure functions of them and are recomputed on demand.
/// No validation happens on construction: a zero or negative diameter yields
/// whatever the arithmetic produces (infinity, NaN or a negative value).
///
/// Planets are never edited in place. Replace the record instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    name: String,
    /// Diameter in kilometers.
    diameter: f64,
    /// Mass in kilograms.
    mass: f64,
}

impl Planet {
    pub fn new(name: impl Into<String>, diameter: f64, mass: f64) -> Self {
        Self {
            name: name.into(),
            diameter,
            mass,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diameter in kilometers.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Surface area in km², `4π(d/2)²`.
    pub fn surface_area(&self) -> f64 {
        4.0 * PI * (self.diameter / 2.0).powi(2)
    }

    /// Mean density in kg/m³, using the radius converted to meters.
    pub fn density(&self) -> f64 {
        self.mass / (4.0 / 3.0 * PI * self.radius_meters().powi(3))
    }

    /// Surface gravitational acceleration in m/s², `GM/r²`.
    pub fn gravity(&self) -> f64 {
        GRAVITATIONAL_CONSTANT * self.mass / self.radius_meters().powi(2)
    }

    fn radius_meters(&self) -> f64 {
        self.diameter * METERS_PER_KILOMETER / 2.0
    }
}
