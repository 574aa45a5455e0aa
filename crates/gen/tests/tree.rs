//! Integration tests for decay-tree construction and chain matching

use natools_gen::{GenParticle, GenParticleTree, GenParticles, StatusFlag};
use natools_vector::FourVector;
use rstest::{fixture, rstest};

/// Bare particle with only the fields the tree cares about
fn particle(index: usize, pdg_id: i32, mother: i32) -> GenParticle {
    GenParticle::new(index, pdg_id, 22, 0, mother, FourVector::default())
}

/// Z -> bb with a generator self-copy of the Z in the middle
///
/// ```text
/// [0] Z (head)
///  └── [1] Z (self-copy)
///       ├── [2] b
///       └── [3] anti-b
/// ```
fn z_decay() -> Vec<GenParticle> {
    vec![
        particle(0, 23, -1),
        particle(1, 23, 0),
        particle(2, 5, 1),
        particle(3, -5, 1),
    ]
}

#[fixture]
fn z_tree() -> GenParticleTree {
    let mut tree = GenParticleTree::with_capacity(4);
    for p in z_decay() {
        tree.add(p);
    }
    tree
}

/// Relationship summary keyed by source index: (parent source, child sources)
fn relationships(tree: &GenParticleTree) -> Vec<(usize, Option<usize>, Vec<usize>)> {
    let mut summary: Vec<_> = tree
        .nodes()
        .iter()
        .enumerate()
        .map(|(slot, node)| {
            let parent = tree.parent(slot).map(|p| p.index);
            let mut children: Vec<usize> =
                tree.children(slot).iter().map(|c| c.index).collect();
            children.sort();
            (node.index, parent, children)
        })
        .collect();
    summary.sort();
    summary
}

#[rstest]
#[case(vec![0, 1, 2, 3])] // canonical mother-before-daughter
#[case(vec![3, 2, 1, 0])] // fully reversed
#[case(vec![2, 0, 3, 1])] // interleaved
#[case(vec![1, 3, 0, 2])] // interleaved
fn order_independence(#[case] order: Vec<usize>) {
    let particles = z_decay();

    let mut canonical = GenParticleTree::new();
    for p in particles.clone() {
        canonical.add(p);
    }

    let mut permuted = GenParticleTree::new();
    for &i in &order {
        permuted.add(particles[i].clone());
    }

    assert_eq!(relationships(&canonical), relationships(&permuted));
}

#[rstest]
fn parent_of_head_is_none(z_tree: GenParticleTree) {
    let z_slot = z_tree.source_slot(0).unwrap();
    assert!(z_tree.parent(z_slot).is_none());
    assert_eq!(z_tree.heads(), &[z_slot]);
}

#[rstest]
fn children_resolve_through_slots(z_tree: GenParticleTree) {
    let copy_slot = z_tree.source_slot(1).unwrap();
    let pdg_ids: Vec<i32> = z_tree.children(copy_slot).iter().map(|c| c.pdg_id).collect();
    assert_eq!(pdg_ids, vec![5, -5]);

    // read access never mutates the tree
    let again: Vec<i32> = z_tree.children(copy_slot).iter().map(|c| c.pdg_id).collect();
    assert_eq!(pdg_ids, again);
}

#[test]
fn unresolvable_mother_stays_head() {
    let mut tree = GenParticleTree::new();
    // mother index 7 is never added to the tree
    let orphan = tree.add(particle(2, 21, 7));
    tree.add(particle(0, 6, -1));

    assert!(tree.parent(orphan).is_none());
    assert!(tree.heads().contains(&orphan));
}

#[rstest]
fn chain_skips_self_copies(z_tree: GenParticleTree) {
    // both b quarks match, each chain one particle per pattern step
    let chains = z_tree.find_chain("5>23").unwrap();

    assert_eq!(chains.len(), 2);
    for chain in &chains {
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].pdg_id.abs(), 5);
        assert_eq!(chain[1].pdg_id, 23);
    }
}

#[rstest]
fn chain_rejects_broken_ancestry(z_tree: GenParticleTree) {
    // no top quark anywhere in the ancestry
    assert!(z_tree.find_chain("5>6").unwrap().is_empty());
    // more steps than the ancestry is deep
    assert!(z_tree.find_chain("5>23>25").unwrap().is_empty());
}

#[rstest]
#[case("1:5>23", 2)] // range covers both quarks
#[case("1,3,5>23", 2)] // list covers |pdgId| = 5
#[case("1,3>23", 0)] // list excludes the b
#[case("4:6>23", 2)] // range straddling the b
#[case("23", 2)] // single-step pattern seeds on both Z copies
fn chain_matcher_variants(z_tree: GenParticleTree, #[case] pattern: &str, #[case] expected: usize) {
    assert_eq!(z_tree.find_chain(pattern).unwrap().len(), expected);
}

#[rstest]
#[case("b>W>t")]
#[case("5>>23")]
#[case("5>23x")]
#[case("")]
fn chain_rejects_malformed_patterns(z_tree: GenParticleTree, #[case] pattern: &str) {
    assert!(z_tree.find_chain(pattern).is_err());
}

#[test]
fn flag_decoding_round_trip() {
    let p = particle(0, 6, -1);
    assert!(!p.flags.contains(StatusFlag::IsHardProcess));

    let hard = GenParticle::new(0, 6, 22, 1 << 7, -1, FourVector::default());
    let decoded = hard.flags.to_map();
    for (name, set) in decoded {
        assert_eq!(set, name == "isHardProcess", "unexpected value for {name}");
    }
}

#[test]
fn tree_from_record_matches_incremental_build() {
    let record = GenParticles::new(
        vec![400.0, 390.0, 120.0, 110.0],
        vec![0.1, 0.1, 0.4, -0.2],
        vec![0.0, 0.0, 0.5, 2.5],
        vec![91.0, 91.0, 4.18, 4.18],
        vec![23, 23, 5, -5],
        vec![22, 22, 23, 23],
        vec![1 << 7, 1 << 13, 0, 0],
        vec![-1, 0, 1, 1],
    )
    .unwrap();

    let from_record = GenParticleTree::from_record(&record);
    let mut incremental = GenParticleTree::with_capacity(record.len());
    for p in record.iter() {
        incremental.add(p);
    }

    assert_eq!(from_record.len(), 4);
    assert_eq!(relationships(&from_record), relationships(&incremental));
}
