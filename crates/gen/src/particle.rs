//! Gen-particle data and vector comparison

// crate modules
use crate::flags::{pdg_name, StatusFlags};

// natools modules
use natools_utils::f;
use natools_vector::FourVector;

// external crates
use serde::Serialize;

// standard library
use std::f64::consts::FRAC_PI_2;

/// Angular cone inside which a gen particle is associated to a jet
///
/// The standard AK8 jet cone size.
pub const DELTA_R_MATCH: f64 = 0.8;

/// Maximum relative mass difference for two objects to be mass-consistent
pub const MASS_MATCH_TOLERANCE: f64 = 0.05;

/// One entry of the generator-particle record, plus its tree linkage
///
/// Identity fields come straight from the columnar record and never
/// change after construction. The `parent`/`children` links are slots in
/// the owning [GenParticleTree](crate::GenParticleTree) arena and are
/// filled in as later particles resolve the ancestry; a particle whose
/// mother was never added keeps `parent = None` for good.
///
/// Note the two index spaces: `mother_index` points into the *source
/// record*, while `parent` and `children` point into the *tree arena*.
/// When a tree is built from a full record in order the two coincide,
/// but nothing relies on that.
#[derive(Debug, Clone, Serialize)]
pub struct GenParticle {
    /// Position in the source record
    pub index: usize,
    /// PDG ID, signed
    pub pdg_id: i32,
    /// Generator status code
    pub status: i32,
    /// Decoded `statusFlags` bitmask
    pub flags: StatusFlags,
    /// Source-record index of the mother, -1 when none
    pub mother_index: i32,
    /// Four-momentum
    pub momentum: FourVector,
    /// Arena slot of the resolved parent, if any
    pub parent: Option<usize>,
    /// Arena slots of resolved children, in insertion order
    pub children: Vec<usize>,
}

impl GenParticle {
    /// Build a particle with no tree linkage yet
    pub fn new(
        index: usize,
        pdg_id: i32,
        status: i32,
        status_flags: i32,
        mother_index: i32,
        momentum: FourVector,
    ) -> Self {
        Self {
            index,
            pdg_id,
            status,
            flags: StatusFlags::new(status_flags),
            mother_index,
            momentum,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Angular separation between this particle and the given vector
    pub fn delta_r(&self, vector: &FourVector) -> f64 {
        self.momentum.delta_r(vector)
    }

    /// Geometric and mass comparison against a reconstructed object
    ///
    /// ```rust
    /// # use natools_gen::GenParticle;
    /// # use natools_vector::FourVector;
    /// let top = GenParticle::new(0, 6, 22, 0, -1, FourVector::new(400.0, 1.0, 0.5, 172.5));
    /// let jet = FourVector::new(380.0, 1.1, 0.6, 175.0);
    ///
    /// let cmp = top.compare_to(&jet);
    /// assert!(cmp.same_hemisphere);
    /// assert!(cmp.cone_match);
    /// assert!(cmp.mass_match);
    /// ```
    pub fn compare_to(&self, vector: &FourVector) -> VectorComparison {
        // a zero gen mass can never satisfy a relative tolerance
        let rel_dm = (vector.mass - self.momentum.mass).abs() / self.momentum.mass;

        VectorComparison {
            same_hemisphere: self.momentum.delta_phi(vector) < FRAC_PI_2,
            cone_match: self.delta_r(vector) < DELTA_R_MATCH,
            mass_match: rel_dm < MASS_MATCH_TOLERANCE,
        }
    }
}

impl std::fmt::Display for GenParticle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match pdg_name(self.pdg_id) {
            Some(name) => name.to_string(),
            None => f!("pdg {}", self.pdg_id),
        };
        write!(
            f,
            "{name} [{}] status {} {}",
            self.index, self.status, self.momentum
        )
    }
}

/// Result of comparing a gen particle against a reconstructed vector
///
/// The keys of the comparison map in the original NanoAOD tooling, as a
/// plain struct of booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorComparison {
    /// Azimuthal separation below pi/2
    pub same_hemisphere: bool,
    /// Angular separation below [DELTA_R_MATCH]
    pub cone_match: bool,
    /// Relative mass difference below [MASS_MATCH_TOLERANCE]
    pub mass_match: bool,
}
