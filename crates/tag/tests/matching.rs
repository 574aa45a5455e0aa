//! Integration tests for gen-matching classification

use natools_gen::{GenParticle, GenParticleTree};
use natools_tag::{
    collect_quarks, collect_ws, hemispherize, merged_prong_count, Error, MergedCategory,
};
use natools_vector::FourVector;
use rstest::{fixture, rstest};

fn particle(index: usize, pdg_id: i32, mother: i32, eta: f64, phi: f64) -> GenParticle {
    GenParticle::new(
        index,
        pdg_id,
        22,
        0,
        mother,
        FourVector::new(100.0, eta, phi, 0.0),
    )
}

/// Hadronic top decay, all prongs near (eta, phi) = (0, 0)
///
/// ```text
/// [0] t
///  ├── [1] b
///  └── [2] W+
///       └── [3] W+ (self-copy)
///            ├── [4] u
///            └── [5] anti-d
/// ```
#[fixture]
fn top_decay() -> GenParticleTree {
    let mut tree = GenParticleTree::with_capacity(6);
    tree.add(particle(0, 6, -1, 0.0, 0.0));
    tree.add(particle(1, 5, 0, 0.1, 0.2));
    tree.add(particle(2, 24, 0, -0.2, -0.1));
    tree.add(particle(3, 24, 2, -0.2, -0.1));
    tree.add(particle(4, 2, 3, 0.3, -0.2));
    tree.add(particle(5, -1, 3, -0.4, 0.3));
    tree.add(particle(6, 22, -1, 2.5, 2.5)); // unrelated photon
    tree
}

#[rstest]
fn collectors_find_ws_and_quarks(top_decay: GenParticleTree) {
    let ws: Vec<i32> = collect_ws(&top_decay)
        .iter()
        .map(|&s| top_decay.nodes()[s].pdg_id)
        .collect();
    assert_eq!(ws, vec![24, 24]);

    // b, u, and anti-d, but not the top or the photon
    assert_eq!(collect_quarks(&top_decay).len(), 3);
}

#[rstest]
fn fully_merged_top(top_decay: GenParticleTree) {
    let jet = FourVector::new(400.0, 0.0, 0.0, 172.5);
    let ws = collect_ws(&top_decay);
    let quarks = collect_quarks(&top_decay);

    let prongs = merged_prong_count(&jet, &ws, &quarks, &top_decay);
    assert_eq!(prongs, 3);
    assert_eq!(MergedCategory::from_prongs(prongs), MergedCategory::FullyMerged);
}

#[rstest]
fn unmatched_jet_has_no_prongs(top_decay: GenParticleTree) {
    // jet on the far side of the detector, no top within the cone
    let jet = FourVector::new(400.0, -2.0, 3.0, 172.5);
    let ws = collect_ws(&top_decay);
    let quarks = collect_quarks(&top_decay);

    let prongs = merged_prong_count(&jet, &ws, &quarks, &top_decay);
    assert_eq!(prongs, 0);
    assert_eq!(MergedCategory::from_prongs(prongs), MergedCategory::NotMerged);
}

#[test]
fn semi_merged_when_a_prong_escapes() {
    let mut tree = GenParticleTree::with_capacity(5);
    tree.add(particle(0, 6, -1, 0.0, 0.0));
    tree.add(particle(1, 5, 0, 0.1, 0.2));
    tree.add(particle(2, 24, 0, -0.2, -0.1));
    tree.add(particle(3, 2, 2, 0.3, -0.2));
    tree.add(particle(4, -1, 2, 2.0, 2.0)); // wide-angle daughter

    let jet = FourVector::new(400.0, 0.0, 0.0, 172.5);
    let prongs = merged_prong_count(&jet, &collect_ws(&tree), &collect_quarks(&tree), &tree);

    assert_eq!(prongs, 2);
    assert_eq!(MergedCategory::from_prongs(prongs), MergedCategory::SemiMerged);
}

#[test]
fn hemispherize_picks_highest_btag_pair() {
    let fatjets = vec![FourVector::new(500.0, 0.2, 0.0, 85.0)];
    let jets = vec![
        FourVector::new(120.0, 0.4, 3.0, 15.0),
        FourVector::new(90.0, 0.8, 2.8, 12.0),
        FourVector::new(80.0, 0.2, 2.6, 10.0),
    ];
    // all three pairs pass geometry, (1, 2) has the highest sum
    let btags = vec![0.3, 0.9, 0.8];

    assert_eq!(hemispherize(&fatjets, &jets, &btags).unwrap(), (1, 2));
}

#[test]
fn hemispherize_requires_a_heavy_fat_jet() {
    let fatjets = vec![FourVector::new(500.0, 0.2, 0.0, 20.0)];
    let jets = vec![
        FourVector::new(120.0, 0.4, 3.0, 15.0),
        FourVector::new(90.0, 0.8, 2.8, 12.0),
    ];

    let result = hemispherize(&fatjets, &jets, &[0.5, 0.5]);
    assert!(matches!(result, Err(Error::NoCandidateFatJet { .. })));
}

#[test]
fn hemispherize_requires_two_opposite_jets() {
    let fatjets = vec![FourVector::new(500.0, 0.2, 0.0, 85.0)];
    // only one jet sits opposite the fat jet
    let jets = vec![
        FourVector::new(120.0, 0.4, 3.0, 15.0),
        FourVector::new(90.0, 0.8, 0.2, 12.0),
    ];

    let result = hemispherize(&fatjets, &jets, &[0.5, 0.5]);
    assert!(matches!(result, Err(Error::BelowMinimumJets { found: 1, .. })));
}

#[test]
fn hemispherize_rejects_distant_pairs() {
    let fatjets = vec![FourVector::new(500.0, 0.2, 0.0, 85.0)];
    // both opposite the fat jet but far from one another
    let jets = vec![
        FourVector::new(120.0, 2.0, 3.0, 15.0),
        FourVector::new(90.0, -2.0, 2.8, 12.0),
    ];

    let result = hemispherize(&fatjets, &jets, &[0.5, 0.5]);
    assert!(matches!(result, Err(Error::NoPassingPairs)));
}
