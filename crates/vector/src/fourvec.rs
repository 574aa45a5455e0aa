//! Module for four-vector data and implementations

// natools modules
use natools_utils::ValueExt;

// external crates
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// standard library
use std::f64::consts::{PI, TAU};
use std::ops::{Add, AddAssign};

/// Four-momentum in collider (pt, eta, phi, mass) coordinates
///
/// Matches the kinematic branches stored per-object in NanoAOD-style
/// records, so vectors can be built straight from the columnar arrays
/// without conversion.
///
/// The angular separations used everywhere for geometric matching are
/// implemented directly:
///
/// ```rust
/// # use natools_vector::FourVector;
/// let jet      = FourVector::new(450.0, 1.2, 0.3, 172.5);
/// let particle = FourVector::new(120.0, 1.2, 0.8, 4.18);
///
/// // delta-phi is always folded into [0, pi]
/// assert!((jet.delta_phi(&particle) - 0.5).abs() < 1e-12);
///
/// // delta-R is the quadrature sum of the eta/phi separations
/// assert!(jet.delta_r(&particle) < 0.8);
/// ```
///
/// Addition (`+`, `+=`) is implemented as the full four-momentum sum in
/// cartesian form, which is what you want for invariant masses of
/// combined objects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourVector {
    /// Transverse momentum \[GeV\]
    pub pt: f64,
    /// Pseudorapidity
    pub eta: f64,
    /// Azimuthal angle \[rad\]
    pub phi: f64,
    /// Invariant mass \[GeV\]
    pub mass: f64,
}

impl FourVector {
    /// Construct directly from the four collider coordinates
    pub fn new(pt: f64, eta: f64, phi: f64, mass: f64) -> Self {
        Self { pt, eta, phi, mass }
    }

    /// Momentum component along x
    pub fn px(&self) -> f64 {
        self.pt * self.phi.cos()
    }

    /// Momentum component along y
    pub fn py(&self) -> f64 {
        self.pt * self.phi.sin()
    }

    /// Momentum component along the beam axis
    pub fn pz(&self) -> f64 {
        self.pt * self.eta.sinh()
    }

    /// Magnitude of the three-momentum
    pub fn p(&self) -> f64 {
        self.pt * self.eta.cosh()
    }

    /// Total energy, `sqrt(p^2 + m^2)`
    pub fn energy(&self) -> f64 {
        self.p().hypot(self.mass)
    }

    /// Cartesian three-momentum as a [nalgebra::Vector3]
    ///
    /// ```rust
    /// # use natools_vector::FourVector;
    /// let v = FourVector::new(10.0, 0.0, 0.0, 0.0);
    /// assert_eq!(v.momentum().x, 10.0);
    /// assert_eq!(v.momentum().y, 0.0);
    /// assert_eq!(v.momentum().z, 0.0);
    /// ```
    pub fn momentum(&self) -> Vector3<f64> {
        Vector3::new(self.px(), self.py(), self.pz())
    }

    /// Azimuthal separation from another vector, folded into \[0, pi\]
    ///
    /// ```rust
    /// # use natools_vector::FourVector;
    /// # use std::f64::consts::PI;
    /// let a = FourVector::new(1.0, 0.0,  3.0, 0.0);
    /// let b = FourVector::new(1.0, 0.0, -3.0, 0.0);
    ///
    /// // 6 radians apart on paper, but the short way round is 2pi - 6
    /// assert!((a.delta_phi(&b) - (2.0 * PI - 6.0)).abs() < 1e-12);
    /// ```
    pub fn delta_phi(&self, other: &FourVector) -> f64 {
        let dphi = (self.phi - other.phi).rem_euclid(TAU);
        if dphi > PI {
            TAU - dphi
        } else {
            dphi
        }
    }

    /// Angular separation `sqrt(deta^2 + dphi^2)` from another vector
    ///
    /// The standard cone distance used to associate physics objects.
    /// Always non-negative.
    ///
    /// ```rust
    /// # use natools_vector::FourVector;
    /// let a = FourVector::new(1.0, 2.0, 0.5, 0.0);
    /// let b = FourVector::new(1.0, 0.0, 0.5, 0.0);
    /// assert_eq!(a.delta_r(&b), 2.0);
    /// ```
    pub fn delta_r(&self, other: &FourVector) -> f64 {
        (self.eta - other.eta).hypot(self.delta_phi(other))
    }
}

impl Add<Self> for FourVector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let p = self.momentum() + rhs.momentum();
        let energy = self.energy() + rhs.energy();

        let pt = p.x.hypot(p.y);
        let phi = p.y.atan2(p.x);
        // degenerate along the beam axis, eta is formally infinite
        let eta = if pt > 0.0 {
            (p.z / pt).asinh()
        } else {
            f64::INFINITY.copysign(p.z)
        };
        // truncate to zero for spacelike rounding artefacts
        let mass = (energy * energy - p.norm_squared()).max(0.0).sqrt();

        Self { pt, eta, phi, mass }
    }
}

impl AddAssign<Self> for FourVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for FourVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "(pt {}, eta {:>7.3}, phi {:>7.3}, m {})",
            self.pt.sci(3, 2),
            self.eta,
            self.phi,
            self.mass.sci(3, 2)
        )
    }
}
