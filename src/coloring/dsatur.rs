//! DSatur greedy coloring bounded by `k_max`.
//!
//! Each step colors the uncolored node with the highest saturation degree
//! (distinct colors among its colored neighbors), ties broken by raw degree,
//! then by lowest index. When first-fit finds no legal color below `k_max`,
//! the overflow policy decides: a uniformly random color, or the color used
//! by the fewest already-colored neighbors.

use super::{AdjacencyList, OverflowPolicy, UNCOLORED};
use rand::Rng;

/// Sentinel marking a node as already colored in the saturation array
const COLORED: i32 = -1;

pub(super) fn color<R: Rng>(
    view: &AdjacencyList,
    k_max: usize,
    policy: OverflowPolicy,
    rng: &mut R,
) -> Vec<i32> {
    let n = view.len();
    let mut colors = vec![UNCOLORED; n];
    let mut saturation = vec![0_i32; n];

    for _ in 0..n {
        let node = highest_saturation_node(view, &saturation, &colors);
        saturation[node] = COLORED;
        colors[node] = best_color(view, node, &colors, k_max, policy, rng);

        // Recount distinct neighbor colors for every uncolored neighbor
        for &neighbor in view.neighbors(node) {
            if colors[neighbor] == UNCOLORED {
                saturation[neighbor] = saturation_degree(view, neighbor, &colors);
            }
        }
    }

    colors
}

/// Pick the uncolored node with the highest saturation degree; ties go to
/// the higher raw degree, then to the first node found.
fn highest_saturation_node(view: &AdjacencyList, saturation: &[i32], colors: &[i32]) -> usize {
    let mut best = usize::MAX;
    for node in 0..view.len() {
        if colors[node] != UNCOLORED {
            continue;
        }
        if best == usize::MAX
            || saturation[node] > saturation[best]
            || (saturation[node] == saturation[best] && view.degree(node) > view.degree(best))
        {
            best = node;
        }
    }
    best
}

/// Number of distinct colors among a node's colored neighbors
fn saturation_degree(view: &AdjacencyList, node: usize, colors: &[i32]) -> i32 {
    let mut seen = Vec::new();
    let mut degree = 0;
    for &neighbor in view.neighbors(node) {
        let color = colors[neighbor];
        if color != UNCOLORED && !seen.contains(&color) {
            seen.push(color);
            degree += 1;
        }
    }
    degree
}

fn best_color<R: Rng>(
    view: &AdjacencyList,
    node: usize,
    colors: &[i32],
    k_max: usize,
    policy: OverflowPolicy,
    rng: &mut R,
) -> i32 {
    if let Some(color) = first_available_color(view, node, colors, k_max) {
        return color;
    }
    match policy {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        OverflowPolicy::Random => rng.gen_range(0..k_max) as i32,
        OverflowPolicy::LeastConflict => least_conflict_color(view, node, colors, k_max),
    }
}

/// Lowest color in `[0, k_max)` unused by any colored neighbor, first-fit
fn first_available_color(
    view: &AdjacencyList,
    node: usize,
    colors: &[i32],
    k_max: usize,
) -> Option<i32> {
    let used: Vec<i32> = view.neighbors(node).iter().map(|&nb| colors[nb]).collect();
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let limit = k_max as i32;
    (0..limit).find(|color| !used.contains(color))
}

/// Color in `[0, k_max)` used by the fewest colored neighbors, ties broken
/// by lowest index
fn least_conflict_color(view: &AdjacencyList, node: usize, colors: &[i32], k_max: usize) -> i32 {
    let mut counts = vec![0_usize; k_max];
    for &neighbor in view.neighbors(node) {
        let color = colors[neighbor];
        if color != UNCOLORED {
            #[allow(clippy::cast_sign_loss)]
            let color = color as usize;
            if color < k_max {
                counts[color] += 1;
            }
        }
    }

    let mut best = 0;
    for (color, &count) in counts.iter().enumerate().skip(1) {
        if count < counts[best] {
            best = color;
        }
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let best = best as i32;
    best
}
