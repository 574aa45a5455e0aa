//! Opposite-hemisphere jet pairing for 2+1 topologies

// natools modules
use natools_gen::DELTA_R_MATCH;
use natools_vector::FourVector;

// crate modules
use crate::error::{Error, Result};

// external crates
use itertools::Itertools;
use log::debug;

// standard library
use std::f64::consts::FRAC_PI_2;

/// Minimum mass \[GeV\] for a fat jet to anchor the hemisphere split
pub const FAT_JET_MASS_MIN: f64 = 40.0;

/// Maximum angular separation between the two jets of a pair
pub const PAIR_DELTA_R_MAX: f64 = 1.5;

/// Find the small-radius jet pair opposite the leading heavy fat jet
///
/// Classifies 2+1 topologies: one boosted object in a large-radius jet,
/// with the other decay resolved as two small-radius jets in the
/// opposite hemisphere. Selection proceeds as:
///
/// 1. the first fat jet with mass above [FAT_JET_MASS_MIN] anchors the
///    event ([Error::NoCandidateFatJet] when none qualifies);
/// 2. small-radius jets more than pi/2 in azimuth from the anchor are
///    candidates ([Error::BelowMinimumJets] for fewer than two);
/// 3. candidate pairs must sit within [PAIR_DELTA_R_MAX] of each other;
/// 4. pairs with a member inside any fat jet cone (delta-R below 0.8)
///    are dropped ([Error::NoPassingPairs] when nothing survives);
/// 5. of the survivors, the pair with the highest summed b-tag score
///    wins.
///
/// Returns the indices of the winning pair in the small-radius jet
/// collection. `btags` is indexed in parallel with `jets`.
///
/// ```rust
/// use natools_tag::hemispherize;
/// use natools_vector::FourVector;
///
/// let fatjets = vec![FourVector::new(500.0, 0.2, 0.0, 85.0)];
/// let jets = vec![
///     FourVector::new(120.0, 0.4, 3.0, 15.0),
///     FourVector::new(90.0, 0.8, 2.8, 12.0),
///     FourVector::new(80.0, -0.1, 0.2, 10.0), // same side as the fat jet
/// ];
/// let btags = vec![0.9, 0.7, 0.95];
///
/// let pair = hemispherize(&fatjets, &jets, &btags).unwrap();
/// assert_eq!(pair, (0, 1));
/// ```
pub fn hemispherize(
    fatjets: &[FourVector],
    jets: &[FourVector],
    btags: &[f64],
) -> Result<(usize, usize)> {
    // leading heavy fat jet anchors the hemisphere split
    let anchor = fatjets
        .iter()
        .find(|fj| fj.mass > FAT_JET_MASS_MIN)
        .ok_or(Error::NoCandidateFatJet {
            minimum_mass: FAT_JET_MASS_MIN,
        })?;

    // opposite-hemisphere candidates
    let candidates: Vec<usize> = jets
        .iter()
        .enumerate()
        .filter(|(_, jet)| anchor.delta_phi(jet) > FRAC_PI_2)
        .map(|(i, _)| i)
        .collect();
    debug!("{} of {} jets opposite the fat jet", candidates.len(), jets.len());

    if candidates.len() < 2 {
        return Err(Error::BelowMinimumJets {
            found: candidates.len(),
            minimum: 2,
        });
    }

    // nearby pairs with neither member swallowed by a fat jet
    let passing: Vec<(usize, usize)> = candidates
        .iter()
        .copied()
        .tuple_combinations()
        .filter(|&(i, j)| jets[i].delta_r(&jets[j]) < PAIR_DELTA_R_MAX)
        .filter(|&(i, j)| {
            fatjets
                .iter()
                .all(|fj| fj.delta_r(&jets[i]) >= DELTA_R_MATCH && fj.delta_r(&jets[j]) >= DELTA_R_MATCH)
        })
        .collect();

    // highest summed b-tag score wins
    passing
        .into_iter()
        .max_by(|a, b| {
            let score_a = btags[a.0] + btags[a.1];
            let score_b = btags[b.0] + btags[b.1];
            score_a.total_cmp(&score_b)
        })
        .ok_or(Error::NoPassingPairs)
}
