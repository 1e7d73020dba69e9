// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Post-hoc coloring diagnostics.
//!
//! A "crazy" edge is one whose coloring is locally symmetric: for every
//! direction other than its own, the edges leaving its two endpoints carry
//! equal colors. The scan is read-only and reports each flagged edge with
//! its color and how widely that color is shared.

use crate::cube::Hypercube;
use crate::geometry::{Direction, Edge};
use crate::state::ColorValue;
use std::collections::HashMap;

/// One flagged edge from [`find_crazy_edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrazyEdge {
    pub edge: Edge,
    /// The flagged edge's own color.
    pub color: ColorValue,
    /// How many edges overall carry that color, the flagged edge included.
    pub share_count: usize,
}

/// Scan the coloring for edges whose off-direction neighborhood matches at
/// both endpoints. Returns the flagged edges in edge-table order; the
/// coloring is not touched.
pub fn find_crazy_edges(cube: &Hypercube) -> Vec<CrazyEdge> {
    let memo = cube.memo();
    let coloring = cube.raw_coloring();

    let mut color_counts: HashMap<ColorValue, usize> = HashMap::new();
    for (_, color) in coloring.iter() {
        *color_counts.entry(color).or_insert(0) += 1;
    }

    let mut flagged = Vec::new();
    for (id, info) in memo.edges().iter().enumerate() {
        let matches_everywhere = (0..memo.dimension()).all(|d| {
            let direction = Direction::new(d as u8);
            if direction == info.direction {
                return true;
            }
            let at_source = coloring.get(memo.edge_at(info.edge.source, direction));
            let at_target = coloring.get(memo.edge_at(info.edge.target, direction));
            at_source == at_target
        });
        if matches_everywhere {
            let color = coloring.get(id);
            flagged.push(CrazyEdge {
                edge: info.edge,
                color,
                share_count: color_counts[&color],
            });
        }
    }
    flagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;

    fn edge(a: u32, b: u32) -> Edge {
        Edge::new(Vertex::new(a), Vertex::new(b))
    }

    #[test]
    fn test_all_neutral_square_flags_everything() {
        // With every edge neutral, every off-direction comparison is 0 == 0.
        let cube = Hypercube::new(2).unwrap();
        let flagged = find_crazy_edges(&cube);
        assert_eq!(flagged.len(), 4);
        assert!(flagged.iter().all(|c| c.color == 0 && c.share_count == 4));
    }

    #[test]
    fn test_mismatched_neighborhood_is_not_flagged() {
        let mut cube = Hypercube::new(2).unwrap();
        // Break the symmetry around the direction-1 edges only on one side.
        cube.set_edge_color(edge(0, 1), 5).unwrap();
        let flagged = find_crazy_edges(&cube);
        // The direction-0 edges still match across direction 1 (all
        // neutral); the direction-1 edges see 5 vs 0 across direction 0.
        let flagged_edges: Vec<Edge> = flagged.iter().map(|c| c.edge).collect();
        assert_eq!(flagged_edges, vec![edge(0, 1), edge(2, 3)]);
    }
}
