//! Merged-prong counting for top-tag categories

// natools modules
use natools_gen::{GenParticleTree, DELTA_R_MATCH};
use natools_vector::FourVector;

// external crates
use log::debug;

/// Merged-decay categories used by top-tag scale factor measurements
///
/// The discriminants match the category numbering of the SF histogram
/// sets, so `category as u8` can index external lookups directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum MergedCategory {
    /// At most one prong in the jet cone
    NotMerged = 1,
    /// Two prongs in the jet cone
    SemiMerged = 2,
    /// All three prongs in the jet cone
    FullyMerged = 3,
}

impl MergedCategory {
    /// Category for a merged-prong count
    ///
    /// ```rust
    /// # use natools_tag::MergedCategory;
    /// assert_eq!(MergedCategory::from_prongs(0), MergedCategory::NotMerged);
    /// assert_eq!(MergedCategory::from_prongs(1), MergedCategory::NotMerged);
    /// assert_eq!(MergedCategory::from_prongs(2), MergedCategory::SemiMerged);
    /// assert_eq!(MergedCategory::from_prongs(3), MergedCategory::FullyMerged);
    /// ```
    pub fn from_prongs(count: usize) -> Self {
        match count {
            0 | 1 => Self::NotMerged,
            2 => Self::SemiMerged,
            _ => Self::FullyMerged,
        }
    }
}

/// Arena slots of every W boson in the tree
pub fn collect_ws(tree: &GenParticleTree) -> Vec<usize> {
    collect_by(tree, |pdg_id| pdg_id.abs() == 24)
}

/// Arena slots of every quark (d through b) in the tree
pub fn collect_quarks(tree: &GenParticleTree) -> Vec<usize> {
    collect_by(tree, |pdg_id| (1..=5).contains(&pdg_id.abs()))
}

fn collect_by(tree: &GenParticleTree, keep: impl Fn(i32) -> bool) -> Vec<usize> {
    tree.nodes()
        .iter()
        .enumerate()
        .filter(|(_, node)| keep(node.pdg_id))
        .map(|(slot, _)| slot)
        .collect()
}

/// Count top-decay prongs merged inside the jet cone
///
/// A hadronic top decays to three prongs: the b quark and the two
/// quarks of the W. A prong counts as merged when it falls within the
/// jet cone ([DELTA_R_MATCH]) of the probed jet vector, provided its
/// decay actually came from a top matched to the same jet:
///
/// - b quarks qualify when their resolved parent is a top within the
///   cone of the jet;
/// - W daughters qualify when the W's parent is such a top; a W whose
///   only child is another copy of itself is descended through first.
///
/// The count is capped at 3. Combine with
/// [MergedCategory::from_prongs] for the SF category.
pub fn merged_prong_count(
    jet: &FourVector,
    ws: &[usize],
    quarks: &[usize],
    tree: &GenParticleTree,
) -> usize {
    // final particles to check against the cone
    let mut prongs: Vec<usize> = Vec::new();

    // b quarks straight off a matched top
    for &quark in quarks {
        let Some(node) = tree.node(quark) else {
            continue;
        };
        if node.pdg_id.abs() != 5 {
            continue;
        }
        if let Some(parent) = tree.parent(quark) {
            if parent.pdg_id.abs() == 6 && parent.delta_r(jet) < DELTA_R_MATCH {
                prongs.push(quark);
            }
        }
    }

    // light quarks from each W of a matched top
    for &w in ws {
        let Some(parent) = tree.parent(w) else {
            continue;
        };
        if parent.pdg_id.abs() != 6 || parent.delta_r(jet) >= DELTA_R_MATCH {
            continue;
        }

        // step through a lone same-ID copy before reading the daughters
        let mut this_w = w;
        let mut children = tree.children_slots(this_w);
        if children.len() == 1 {
            let only = children[0];
            let same_id = match (tree.node(only), tree.node(this_w)) {
                (Some(child), Some(current)) => child.pdg_id == current.pdg_id,
                _ => false,
            };
            if same_id {
                this_w = only;
                children = tree.children_slots(this_w);
            }
        }

        for &child in children {
            if let Some(node) = tree.node(child) {
                if (1..=5).contains(&node.pdg_id.abs()) {
                    prongs.push(child);
                }
            }
        }
    }

    let merged = prongs
        .iter()
        .filter_map(|&prong| tree.node(prong))
        .filter(|node| node.delta_r(jet) < DELTA_R_MATCH)
        .count();

    debug!("{} of {} prongs merged in jet cone", merged, prongs.len());
    merged.min(3)
}
