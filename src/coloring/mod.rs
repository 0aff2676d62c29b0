//! Graph coloring engine for layer assignment.
//!
//! Two alternative greedy strategies over the same adjacency view, with a
//! shared output contract: a total color assignment in `[0, k_max)` plus the
//! list of residual conflicts. Callers can run either algorithm (or both)
//! and keep the better result.

mod adjacency;
mod dsatur;
mod welsh_powell;

pub use adjacency::AdjacencyList;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sentinel for a node that has not been assigned a color yet
pub const UNCOLORED: i32 = -1;

/// Coloring strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    DSatur,
    WelshPowell,
}

/// What to do when first-fit finds no legal color below `k_max`.
///
/// Only DSatur honors the choice; Welsh-Powell always falls back to a
/// random color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Uniformly random color in `[0, k_max)` regardless of conflicts
    Random,
    /// Color used by the fewest already-colored neighbors, ties broken by
    /// lowest index
    LeastConflict,
}

/// Immutable result of a coloring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coloring {
    colors: Vec<i32>,
    conflicts: Vec<(usize, usize)>,
    k_max: usize,
}

impl Coloring {
    /// Color per node index, all in `[0, k_max)` after a completed run
    #[must_use]
    pub fn colors(&self) -> &[i32] {
        &self.colors
    }

    /// Node-index pairs `(i, j)` with `i < j` that still share a color
    #[must_use]
    pub fn conflicts(&self) -> &[(usize, usize)] {
        &self.conflicts
    }

    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    #[must_use]
    pub fn k_max(&self) -> usize {
        self.k_max
    }

    /// Number of colors actually used: `1 + max(color)`, zero with no nodes
    #[must_use]
    pub fn nb_colors(&self) -> usize {
        match self.colors.iter().max() {
            Some(&max) if max >= 0 => {
                #[allow(clippy::cast_sign_loss)]
                let nb = max as usize + 1;
                nb
            }
            _ => 0,
        }
    }
}

/// Color the adjacency view with at most `k_max` colors.
///
/// Each run owns its own color and saturation state; the returned
/// [`Coloring`] is an immutable snapshot. The random source drives only the
/// overflow fallbacks and is injected so runs can be reproduced with a
/// seeded generator.
///
/// # Errors
///
/// Returns an error if `k_max` is zero or the view has no nodes.
pub fn color_graph<R: Rng>(
    view: &AdjacencyList,
    k_max: usize,
    algorithm: Algorithm,
    policy: OverflowPolicy,
    rng: &mut R,
) -> Result<Coloring, String> {
    if k_max == 0 {
        return Err("k_max must be at least 1".to_string());
    }
    if view.is_empty() {
        return Err("cannot color a graph with no nodes".to_string());
    }

    let colors = match algorithm {
        Algorithm::DSatur => dsatur::color(view, k_max, policy, rng),
        Algorithm::WelshPowell => welsh_powell::color(view, k_max, rng),
    };
    let conflicts = report_conflicts(view, &colors);

    Ok(Coloring {
        colors,
        conflicts,
        k_max,
    })
}

/// Scan for edges whose endpoints share a color.
///
/// Each conflicting pair is reported once as `(i, j)` with `i < j`. Pure
/// function of the view and the assignment; deterministic for identical
/// inputs.
#[must_use]
pub fn report_conflicts(view: &AdjacencyList, colors: &[i32]) -> Vec<(usize, usize)> {
    let mut conflicts = Vec::new();
    for node in 0..view.len() {
        for &neighbor in view.neighbors(node) {
            if node < neighbor && colors[node] == colors[neighbor] {
                conflicts.push((node, neighbor));
            }
        }
    }
    conflicts
}
