//! Welsh-Powell greedy coloring bounded by `k_max`.
//!
//! Nodes are colored first-fit in descending-degree order. The ordering is
//! produced by a stable merge sort so equal-degree nodes keep their original
//! index order; an unstable sort would change which node wins a tie, which
//! is observable in the output. Overflow always falls back to a uniformly
//! random color (unlike DSatur, which has a configurable policy).

use super::{AdjacencyList, UNCOLORED};
use rand::Rng;

pub(super) fn color<R: Rng>(view: &AdjacencyList, k_max: usize, rng: &mut R) -> Vec<i32> {
    let n = view.len();
    let mut colors = vec![UNCOLORED; n];
    if n == 0 {
        return colors;
    }

    let order = descending_degree_order(view);

    // The first node of the order has no colored neighbors yet
    colors[order[0]] = 0;

    for &node in &order[1..] {
        let candidate = first_available_color(view, node, &colors);
        let candidate = if candidate >= k_max {
            rng.gen_range(0..k_max)
        } else {
            candidate
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        {
            colors[node] = candidate as i32;
        }
    }

    colors
}

/// Node indices sorted by descending degree, stable on ties
pub(super) fn descending_degree_order(view: &AdjacencyList) -> Vec<usize> {
    let degrees: Vec<usize> = (0..view.len()).map(|node| view.degree(node)).collect();
    let indexes: Vec<usize> = (0..view.len()).collect();
    merge_sort(&indexes, &degrees)
}

/// Stable merge sort of node indexes by descending degree.
///
/// On equal degrees the left half wins, preserving original relative order.
pub(super) fn merge_sort(indexes: &[usize], degrees: &[usize]) -> Vec<usize> {
    if indexes.len() <= 1 {
        return indexes.to_vec();
    }

    let mid = indexes.len() / 2;
    let left = merge_sort(&indexes[..mid], degrees);
    let right = merge_sort(&indexes[mid..], degrees);

    let mut merged = Vec::with_capacity(indexes.len());
    let (mut li, mut ri) = (0, 0);
    while li < left.len() && ri < right.len() {
        if degrees[left[li]] >= degrees[right[ri]] {
            merged.push(left[li]);
            li += 1;
        } else {
            merged.push(right[ri]);
            ri += 1;
        }
    }
    merged.extend_from_slice(&left[li..]);
    merged.extend_from_slice(&right[ri..]);
    merged
}

/// Lowest color not used by any colored neighbor; may be `>= k_max`, in
/// which case the caller applies the overflow fallback
fn first_available_color(view: &AdjacencyList, node: usize, colors: &[i32]) -> usize {
    let mut available = vec![true; view.len()];
    for &neighbor in view.neighbors(node) {
        let color = colors[neighbor];
        if color != UNCOLORED {
            #[allow(clippy::cast_sign_loss)]
            let color = color as usize;
            available[color] = false;
        }
    }

    let mut color = 0;
    while color < available.len() && !available[color] {
        color += 1;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn complete5() -> AdjacencyList {
        let mut edges = Vec::new();
        for a in 0..5 {
            for b in (a + 1)..5 {
                edges.push((a, b));
            }
        }
        AdjacencyList::from_edges(5, &edges)
    }

    #[test]
    fn test_merge_sort_descends_by_degree() {
        let degrees = vec![1, 3, 0, 2];
        let order = merge_sort(&[0, 1, 2, 3], &degrees);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_merge_sort_is_stable_on_ties() {
        let degrees = vec![2, 2, 2, 5, 2];
        let order = merge_sort(&[0, 1, 2, 3, 4], &degrees);
        assert_eq!(order, vec![3, 0, 1, 2, 4]);
    }

    #[test]
    fn test_merge_sort_is_idempotent() {
        let degrees = vec![4, 4, 3, 2, 2, 1];
        let sorted = merge_sort(&[0, 1, 2, 3, 4, 5], &degrees);
        let resorted = merge_sort(&sorted, &degrees);
        assert_eq!(sorted, resorted);
    }

    #[test]
    fn test_cycle_needs_two_colors() {
        let view = AdjacencyList::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let colors = color(&view, 2, &mut rng);
        assert!(colors.iter().all(|&c| c == 0 || c == 1));
        assert_eq!(super::super::report_conflicts(&view, &colors).len(), 0);
    }

    #[test]
    fn test_complete_graph_uses_all_colors() {
        let view = complete5();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let colors = color(&view, 5, &mut rng);
        let mut sorted = colors.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_overflow_stays_in_range_and_is_seeded() {
        let view = complete5();
        let mut rng1 = ChaCha8Rng::seed_from_u64(9);
        let mut rng2 = ChaCha8Rng::seed_from_u64(9);
        let colors1 = color(&view, 3, &mut rng1);
        let colors2 = color(&view, 3, &mut rng2);
        assert_eq!(colors1, colors2);
        assert!(colors1.iter().all(|&c| (0..3).contains(&c)));
    }

    #[test]
    fn test_highest_degree_node_colored_first() {
        // Star: node 2 has degree 3, spokes have degree 1
        let view = AdjacencyList::from_edges(4, &[(2, 0), (2, 1), (2, 3)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let colors = color(&view, 2, &mut rng);
        assert_eq!(colors[2], 0);
        assert_eq!(colors[0], 1);
        assert_eq!(colors[1], 1);
        assert_eq!(colors[3], 1);
    }

    #[test]
    fn test_empty_graph_yields_empty_assignment() {
        let view = AdjacencyList::from_edges(0, &[]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(color(&view, 3, &mut rng).is_empty());
    }
}
