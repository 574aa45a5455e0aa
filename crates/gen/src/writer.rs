//! Write operations for decay-structure inspection

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::particle::GenParticle;
use crate::tree::GenParticleTree;

// external crates
use serde::Serialize;

/// Write an event's decay structure to a human readable text file
///
/// One block per head particle, with every resolved descendant indented
/// below its parent. Useful for eyeballing what the generator actually
/// produced when a chain pattern refuses to match.
///
/// ```no_run
/// # use natools_gen::{GenParticleTree, write_ascii_pretty};
/// # let tree = GenParticleTree::new();
/// write_ascii_pretty(&tree, "./decay_structure.txt").unwrap();
/// ```
pub fn write_ascii_pretty<P: AsRef<Path>>(tree: &GenParticleTree, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    writeln!(writer, "Particles: {}", tree.len())?;
    writeln!(writer, "Heads    : {}", tree.heads().len())?;

    for &head in tree.heads() {
        writeln!(writer)?;
        write_subtree(&mut writer, tree, head, 0)?;
    }

    Ok(())
}

/// Write the full node arena to a JSON file
///
/// A direct serialisation of every particle with its decoded linkage,
/// plus the head slots. Intended for plotting decay structure with
/// external tooling.
///
/// ```no_run
/// # use natools_gen::{GenParticleTree, write_json};
/// # let tree = GenParticleTree::new();
/// write_json(&tree, "./decay_structure.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(tree: &GenParticleTree, path: P) -> Result<()> {
    #[derive(Serialize)]
    struct TreeDump<'a> {
        heads: &'a [usize],
        particles: &'a [GenParticle],
    }

    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(
        writer,
        &TreeDump {
            heads: tree.heads(),
            particles: tree.nodes(),
        },
    )?;
    Ok(())
}

/// Recursively print one particle and its descendants
fn write_subtree(
    writer: &mut BufWriter<File>,
    tree: &GenParticleTree,
    slot: usize,
    depth: usize,
) -> Result<()> {
    if let Some(particle) = tree.node(slot) {
        writeln!(writer, "{:indent$}{particle}", "", indent = depth * 2)?;
        for &child in tree.children_slots(slot) {
            write_subtree(writer, tree, child, depth + 1)?;
        }
    }
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
