//! 2D vector arithmetic on a toroidal plane.
//!
//! A single `Vector` type serves both as a location (`Point`) and as a
//! displacement or heading. Headings are usually built and read in polar
//! form: `r()` is the per-tick speed, `phi()` the bearing in radians.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Cartesian 2D value with a polar view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// World location. Same representation as a displacement.
pub type Point = Vector;

/// Reduces an angle to the canonical range `(-π, π]`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = (angle + PI).rem_euclid(TAU) - PI;
    if a <= -PI {
        a += TAU;
    }
    a
}

#[inline]
fn wrap_coord(value: f64, extent: f64) -> f64 {
    let w = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}

#[inline]
fn shortest_delta(delta: f64, extent: f64) -> f64 {
    delta - extent * (delta / extent).round()
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from magnitude and bearing.
    #[must_use]
    pub fn from_polar(r: f64, phi: f64) -> Self {
        Self::new(r * phi.cos(), r * phi.sin())
    }

    /// Magnitude.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Bearing in `(-π, π]`. The zero vector reads as bearing 0.
    #[must_use]
    pub fn phi(&self) -> f64 {
        normalize_angle(self.y.atan2(self.x))
    }

    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector along `self`; the zero (or non-finite) vector stays zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let r = self.r();
        if r > 0.0 && r.is_finite() {
            *self * (1.0 / r)
        } else {
            Self::ZERO
        }
    }

    /// Plain displacement `to - self`, ignoring wraparound.
    #[must_use]
    pub fn displacement_to(&self, to: &Vector) -> Vector {
        *to - *self
    }

    /// Euclidean distance, ignoring wraparound.
    #[must_use]
    pub fn distance(&self, other: &Vector) -> f64 {
        self.displacement_to(other).r()
    }

    /// Bearing of `other` as seen from `self`, ignoring wraparound.
    #[must_use]
    pub fn angle_to(&self, other: &Vector) -> f64 {
        self.displacement_to(other).phi()
    }

    /// Component-wise modulo into `[0, width) × [0, height)`.
    #[must_use]
    pub fn wrap(&self, width: f64, height: f64) -> Self {
        Self::new(wrap_coord(self.x, width), wrap_coord(self.y, height))
    }

    /// Shortest displacement from `self` to `to` on a torus of the given size.
    #[must_use]
    pub fn toroidal_displacement(&self, to: &Vector, width: f64, height: f64) -> Vector {
        let d = self.displacement_to(to);
        Vector::new(shortest_delta(d.x, width), shortest_delta(d.y, height))
    }

    /// Shortest distance on a torus of the given size.
    #[must_use]
    pub fn toroidal_distance(&self, to: &Vector, width: f64, height: f64) -> f64 {
        self.toroidal_displacement(to, width, height).r()
    }

    /// Mirror image across the line orthogonal to `normal`.
    #[must_use]
    pub fn reflect(&self, normal: &Vector) -> Self {
        let n = normal.normalized();
        *self - n * (2.0 * self.dot(&n))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
