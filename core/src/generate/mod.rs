//! Random test graphs for the savehouse solver.
//!
//! Ids `0..nodes-1` form a random binary tree rooted at 0; every leaf gets an
//! edge to the sink id `nodes`. The header asks for a route from 0 to the sink
//! with a daily distance of `nodes + 1`.

mod tree;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::error::GenerateError;

pub use tree::{Link, RandomTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMode {
    /// Every edge has length 1.
    AllReachable,
    /// Every edge has length `nodes - 1`.
    NoneReachable,
    /// Edge lengths uniform in `[0, nodes)`.
    Random,
}

#[derive(Debug, Clone)]
pub struct GenerateSpec {
    pub nodes: u32,
    pub mode: DistanceMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGraph {
    pub start: u32,
    pub end: u32,
    pub max_distance: u64,
    pub edges: Vec<(u32, u32, u32)>,
    /// In selection order.
    pub savehouses: Vec<u32>,
}

impl GeneratedGraph {
    /// Solver input: header, edges, then savehouses latest-selected first.
    pub fn write_graph<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{} {} {}", self.start, self.end, self.max_distance)?;
        for (from, to, distance) in &self.edges {
            writeln!(out, "{from} {to} {distance}")?;
        }
        for id in self.savehouses.iter().rev() {
            writeln!(out, "{id}")?;
        }
        out.flush()
    }

    /// Savehouse ids, ascending.
    pub fn write_expected<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for id in self.sorted_savehouses() {
            writeln!(out, "{id}")?;
        }
        out.flush()
    }

    pub fn sorted_savehouses(&self) -> Vec<u32> {
        let mut ids = self.savehouses.clone();
        ids.sort_unstable();
        ids
    }
}

pub fn generate<R: Rng>(rng: &mut R, spec: &GenerateSpec) -> Result<GeneratedGraph, GenerateError> {
    let nodes = spec.nodes;
    if nodes < 2 {
        return Err(GenerateError::TooFewNodes(nodes));
    }

    let mut tree = RandomTree::new();
    let mut savehouses = Vec::new();
    for id in 0..nodes - 1 {
        tree.insert(rng, id);
        if rng.gen_range(0..10_000) > 9_500 {
            savehouses.push(id);
        }
    }

    let mut edges = Vec::with_capacity(tree.len());
    tree.walk(|link| {
        let distance = match spec.mode {
            DistanceMode::AllReachable => 1,
            DistanceMode::NoneReachable => nodes - 1,
            DistanceMode::Random => rng.gen_range(0..nodes),
        };
        match link {
            Link::Child { parent, child } => edges.push((parent, child, distance)),
            Link::Leaf { node } => edges.push((node, nodes, distance)),
        }
    });

    tracing::debug!(
        nodes,
        edges = edges.len(),
        savehouses = savehouses.len(),
        "generated graph"
    );
    Ok(GeneratedGraph {
        start: 0,
        end: nodes,
        max_distance: u64::from(nodes) + 1,
        edges,
        savehouses,
    })
}

/// Generates a graph and writes the solver input to `graph_path` and the
/// sorted savehouse list to `expected_path`.
pub fn generate_files<R: Rng>(
    rng: &mut R,
    spec: &GenerateSpec,
    graph_path: &Path,
    expected_path: &Path,
) -> Result<GeneratedGraph, GenerateError> {
    let graph = generate(rng, spec)?;
    write_file(graph_path, |w| graph.write_graph(w))?;
    write_file(expected_path, |w| graph.write_expected(w))?;
    tracing::info!(
        graph = %graph_path.display(),
        expected = %expected_path.display(),
        edges = graph.edges.len(),
        savehouses = graph.savehouses.len(),
        "wrote generated graph"
    );
    Ok(graph)
}

fn write_file<F>(path: &Path, write: F) -> Result<(), GenerateError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let to_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(to_err)?);
    write(&mut writer).map_err(to_err)
}
