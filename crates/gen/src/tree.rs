//! Incremental decay-forest construction and chain matching

// crate modules
use crate::error::Result;
use crate::particle::GenParticle;
use crate::pattern::{ChainPattern, PdgMatcher};
use crate::record::GenParticles;

// external crates
use log::warn;

// standard library
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Decay forest built incrementally from a gen-particle record
///
/// Generator records only describe ancestry through a mother index, and
/// nothing guarantees that a mother appears before its daughters. The
/// tree therefore links in both directions on every insertion: a new
/// particle adopts any existing nodes waiting on its source index, and
/// resolves its own parent if the mother is already present. After every
/// particle of an event has been added the forest is complete and
/// identical for any insertion order.
///
/// All nodes live in a single arena owned by the tree; parent/child
/// links are plain slots into that arena and queries hand out borrowed
/// [GenParticle] references. "No parent" is an ordinary `None`, never a
/// sentinel value.
///
/// One tree per event: build, query, discard.
///
/// ```rust
/// # use natools_gen::{GenParticle, GenParticleTree};
/// # use natools_vector::FourVector;
/// # fn particle(index: usize, pdg_id: i32, mother: i32) -> GenParticle {
/// #     GenParticle::new(index, pdg_id, 22, 0, mother, FourVector::default())
/// # }
/// let mut tree = GenParticleTree::with_capacity(3);
///
/// // daughter arrives before its mother
/// let b = tree.add(particle(1, 5, 0));
/// let top = tree.add(particle(0, 6, -1));
///
/// assert_eq!(tree.parent(b).unwrap().pdg_id, 6);
/// assert_eq!(tree.children(top)[0].pdg_id, 5);
/// assert!(tree.parent(top).is_none());
/// ```
#[derive(Debug, Default)]
pub struct GenParticleTree {
    /// Append-only node arena, slot = position
    nodes: Vec<GenParticle>,
    /// Slots still waiting on a parent
    heads: Vec<usize>,
    /// Source-record index -> arena slot
    by_source: HashMap<i32, usize>,
}

impl GenParticleTree {
    /// An empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty tree pre-sized for a known particle count
    ///
    /// Worth doing per event since the particle multiplicity is known
    /// from the record before the first insertion.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            heads: Vec::new(),
            by_source: HashMap::with_capacity(n),
        }
    }

    /// Build the full forest from a columnar record in one go
    pub fn from_record(record: &GenParticles) -> Self {
        let mut tree = Self::with_capacity(record.len());
        for particle in record.iter() {
            tree.add(particle);
        }
        tree
    }

    /// Add one particle and resolve all linkage it makes possible
    ///
    /// Returns the arena slot of the inserted node. Linking runs both
    /// ways: existing heads whose mother is this particle are adopted as
    /// children, and the particle's own mother is resolved if already
    /// present. A mother index that never resolves is a data-quality
    /// condition, not an error; the node simply stays a head.
    pub fn add(&mut self, mut particle: GenParticle) -> usize {
        let slot = self.nodes.len();
        let source = particle.index as i32;

        // Adopt existing heads waiting on this source index. Nodes with
        // an unresolved parent are always heads, so scanning the heads
        // covers every adoptable node.
        let adopted: Vec<usize> = self
            .heads
            .iter()
            .copied()
            .filter(|&head| self.nodes[head].mother_index == source)
            .collect();
        for &head in &adopted {
            self.nodes[head].parent = Some(slot);
            particle.children.push(head);
        }
        self.heads.retain(|head| !adopted.contains(head));

        // Resolve this particle's own mother, if already in the arena.
        // The -1 "no mother" sentinel never appears in the source map.
        if let Some(&parent) = self.by_source.get(&particle.mother_index) {
            particle.parent = Some(parent);
            self.nodes[parent].children.push(slot);
        }

        if particle.parent.is_none() {
            self.heads.push(slot);
        }

        match self.by_source.entry(source) {
            Entry::Vacant(entry) => {
                entry.insert(slot);
            }
            Entry::Occupied(_) => {
                warn!("duplicate source index {source} in gen record, keeping first");
            }
        }

        self.nodes.push(particle);
        slot
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check for a tree with no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in insertion order
    pub fn nodes(&self) -> &[GenParticle] {
        &self.nodes
    }

    /// The node at an arena slot
    pub fn node(&self, slot: usize) -> Option<&GenParticle> {
        self.nodes.get(slot)
    }

    /// The arena slot holding a given source-record index
    pub fn source_slot(&self, index: i32) -> Option<usize> {
        self.by_source.get(&index).copied()
    }

    /// Slots currently without a resolved parent
    pub fn heads(&self) -> &[usize] {
        &self.heads
    }

    /// Arena slot of a node's parent, if resolved
    pub fn parent_slot(&self, slot: usize) -> Option<usize> {
        self.nodes.get(slot)?.parent
    }

    /// A node's parent particle, if resolved
    pub fn parent(&self, slot: usize) -> Option<&GenParticle> {
        self.parent_slot(slot).map(|parent| &self.nodes[parent])
    }

    /// Arena slots of a node's children
    pub fn children_slots(&self, slot: usize) -> &[usize] {
        self.nodes
            .get(slot)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// A node's child particles, possibly empty
    pub fn children(&self, slot: usize) -> Vec<&GenParticle> {
        self.children_slots(slot)
            .iter()
            .map(|&child| &self.nodes[child])
            .collect()
    }

    /// Search the whole forest for matches of a decay-chain pattern
    ///
    /// The pattern is written descendant-first (`"5>24>6"` reads "a
    /// quark from a W from a top") and matched from the final-state end
    /// backwards: every node matching the first step seeds a walk up
    /// through its ancestors. Repeated generator copies of the same
    /// particle are walked through without consuming a pattern step and
    /// without appearing in the result.
    ///
    /// Each returned chain holds one particle per pattern step, ordered
    /// descendant to ancestor. Candidates whose ancestry ends before the
    /// pattern is exhausted are dropped.
    ///
    /// ```rust
    /// # use natools_gen::{GenParticle, GenParticleTree};
    /// # use natools_vector::FourVector;
    /// # fn particle(index: usize, pdg_id: i32, mother: i32) -> GenParticle {
    /// #     GenParticle::new(index, pdg_id, 22, 0, mother, FourVector::default())
    /// # }
    /// let mut tree = GenParticleTree::new();
    /// tree.add(particle(0, 6, -1)); // top
    /// tree.add(particle(1, 24, 0)); // W from the top
    /// tree.add(particle(2, 24, 1)); // W self-copy
    /// tree.add(particle(3, -3, 2)); // s quark off the copy
    ///
    /// let chains = tree.find_chain("1:5>24>6").unwrap();
    ///
    /// // one match: quark -> W -> top, with the W self-copy skipped
    /// assert_eq!(chains.len(), 1);
    /// assert_eq!(chains[0].iter().map(|p| p.pdg_id).collect::<Vec<_>>(), vec![-3, 24, 6]);
    /// ```
    pub fn find_chain(&self, pattern: &str) -> Result<Vec<Vec<&GenParticle>>> {
        let pattern = ChainPattern::parse(pattern)?;

        // first step seeds on the descendant, the rest walk up the ancestry
        let (seed, ancestors) = match pattern.matchers().split_first() {
            Some(split) => split,
            None => return Ok(Vec::new()),
        };

        let mut out = Vec::new();
        for slot in 0..self.nodes.len() {
            if !seed.matches(self.nodes[slot].pdg_id) {
                continue;
            }
            if let Some(chain) = self.run_chain(slot, ancestors) {
                out.push(chain.into_iter().map(|s| &self.nodes[s]).collect());
            }
        }
        Ok(out)
    }

    /// Walk ancestors from a seed slot, consuming pattern steps
    ///
    /// `None` when the ancestry breaks before every step is consumed.
    fn run_chain(&self, seed: usize, steps: &[PdgMatcher]) -> Option<Vec<usize>> {
        let mut chain = vec![seed];
        let mut current = seed;
        let mut remaining = steps;

        while let Some((next, tail)) = remaining.split_first() {
            let parent = self.nodes[current].parent?;
            if next.matches(self.nodes[parent].pdg_id) {
                chain.push(parent);
                remaining = tail;
            } else if self.nodes[parent].pdg_id == self.nodes[current].pdg_id {
                // generator self-copy, pass through without consuming a step
            } else {
                return None;
            }
            current = parent;
        }

        Some(chain)
    }
}
