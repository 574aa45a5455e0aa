//! Columnar access to the gen-particle record

// crate modules
use crate::error::{Error, Result};
use crate::flags::StatusFlag;
use crate::particle::{GenParticle, VectorComparison};

// natools modules
use natools_vector::FourVector;

/// One event's generator particles as parallel columns
///
/// Mirrors the NanoAOD `GenPart_*` branches: four kinematic columns and
/// four integer columns, all the same length and indexed in parallel.
/// The constructor rejects mismatched lengths up front so everything
/// downstream can index freely.
///
/// ```rust
/// # use natools_gen::GenParticles;
/// let record = GenParticles::new(
///     vec![450.0, 200.0],      // pt
///     vec![1.2, -0.4],         // eta
///     vec![0.3, 2.9],          // phi
///     vec![172.5, 80.4],       // mass
///     vec![6, 24],             // pdgId
///     vec![22, 22],            // status
///     vec![1 << 7, 1 << 8],    // statusFlags
///     vec![-1, 0],             // mother index
/// ).unwrap();
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.build(1).unwrap().pdg_id, 24);
/// ```
#[derive(Debug, Default, Clone)]
pub struct GenParticles {
    /// Transverse momentum column \[GeV\]
    pub pt: Vec<f32>,
    /// Pseudorapidity column
    pub eta: Vec<f32>,
    /// Azimuthal angle column \[rad\]
    pub phi: Vec<f32>,
    /// Mass column \[GeV\]
    pub mass: Vec<f32>,
    /// PDG ID column
    pub pdg_id: Vec<i32>,
    /// Generator status column
    pub status: Vec<i32>,
    /// Raw `statusFlags` bitmask column
    pub status_flags: Vec<i32>,
    /// Mother-index column, -1 for none
    pub mother_index: Vec<i32>,
}

impl GenParticles {
    /// Wrap the branch arrays, checking that all columns line up
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pt: Vec<f32>,
        eta: Vec<f32>,
        phi: Vec<f32>,
        mass: Vec<f32>,
        pdg_id: Vec<i32>,
        status: Vec<i32>,
        status_flags: Vec<i32>,
        mother_index: Vec<i32>,
    ) -> Result<Self> {
        let expected = pt.len();
        let lengths = [
            ("eta", eta.len()),
            ("phi", phi.len()),
            ("mass", mass.len()),
            ("pdgId", pdg_id.len()),
            ("status", status.len()),
            ("statusFlags", status_flags.len()),
            ("genPartIdxMother", mother_index.len()),
        ];
        for (column, found) in lengths {
            if found != expected {
                return Err(Error::UnequalColumnLengths {
                    column,
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            pt,
            eta,
            phi,
            mass,
            pdg_id,
            status,
            status_flags,
            mother_index,
        })
    }

    /// Number of particles in the record
    pub fn len(&self) -> usize {
        self.pt.len()
    }

    /// Check for an empty record
    pub fn is_empty(&self) -> bool {
        self.pt.is_empty()
    }

    /// Build the full [GenParticle] for a record index
    pub fn build(&self, index: usize) -> Result<GenParticle> {
        if index >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        Ok(self.build_at(index))
    }

    /// Iterator of built particles in record order
    pub fn iter(&self) -> impl Iterator<Item = GenParticle> + '_ {
        (0..self.len()).map(|i| self.build_at(i))
    }

    /// Stateful single-particle cursor over this record
    pub fn cursor(&self) -> ParticleCursor<'_> {
        ParticleCursor {
            record: self,
            particle: None,
        }
    }

    // index assumed in bounds, checked by callers
    fn build_at(&self, i: usize) -> GenParticle {
        let momentum = FourVector::new(
            self.pt[i].into(),
            self.eta[i].into(),
            self.phi[i].into(),
            self.mass[i].into(),
        );
        GenParticle::new(
            i,
            self.pdg_id[i],
            self.status[i],
            self.status_flags[i],
            self.mother_index[i],
            momentum,
        )
    }
}

/// Random-access view of one particle at a time
///
/// The second access pattern for gen particles: when only per-particle
/// lookups and vector comparisons are needed, there is no reason to
/// build a tree. The cursor decodes the status flags and four-vector of
/// the selected index on demand and holds it as the "current" particle.
///
/// ```rust
/// # use natools_gen::{GenParticles, StatusFlag};
/// # let record = GenParticles::new(
/// #     vec![450.0], vec![1.2], vec![0.3], vec![172.5],
/// #     vec![6], vec![22], vec![1 << 7], vec![-1],
/// # ).unwrap();
/// let mut cursor = record.cursor();
///
/// // nothing selected until the first set_index
/// assert!(cursor.particle().is_none());
///
/// let top = cursor.set_index(0).unwrap();
/// assert_eq!(top.pdg_id, 6);
/// assert_eq!(cursor.status_flag(StatusFlag::IsHardProcess), Some(true));
/// ```
#[derive(Debug)]
pub struct ParticleCursor<'a> {
    record: &'a GenParticles,
    particle: Option<GenParticle>,
}

impl ParticleCursor<'_> {
    /// Select the active particle by record position
    ///
    /// Rebuilds the current particle in place and returns a reference to
    /// it. Out-of-range indices leave the previous selection untouched.
    pub fn set_index(&mut self, index: usize) -> Result<&GenParticle> {
        let particle = self.record.build(index)?;
        Ok(self.particle.insert(particle))
    }

    /// The currently selected particle, if any
    pub fn particle(&self) -> Option<&GenParticle> {
        self.particle.as_ref()
    }

    /// Check a named status flag on the current particle
    pub fn status_flag(&self, flag: StatusFlag) -> Option<bool> {
        self.particle.as_ref().map(|p| p.flags.contains(flag))
    }

    /// Compare the current particle against a reconstructed vector
    pub fn compare_to(&self, vector: &FourVector) -> Option<VectorComparison> {
        self.particle.as_ref().map(|p| p.compare_to(vector))
    }
}
