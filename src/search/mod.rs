// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy coloring construction.
//!
//! The colorer extends whatever partial coloring the model already holds
//! into a complete one, one edge at a time. Directions are scanned in
//! order; the first direction with uncolored edges supplies the next edge,
//! picked uniformly at random among its remaining ones. A brand-new color
//! (counter + 1) is probed first; on rejection every color already used in
//! that direction is probed in first-observed order. An edge accepting no
//! color at all is an unresolvable configuration and aborts the run.
//!
//! Per-direction views (remaining edges, used colors) are recomputed from
//! the coloring after every accepted assignment rather than patched
//! incrementally; at the dimensions involved the recomputation is cheap and
//! cannot go stale.
//!
//! The random source is injected at construction so runs are reproducible;
//! it is the only non-determinism in the crate.

use crate::cube::Hypercube;
use crate::geometry::{Direction, Edge};
use crate::memo::EdgeId;
use crate::state::{ColorValue, Counters, Statistics, NEUTRAL};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Fatal outcome of a coloring run.
///
/// Distinct from an ordinary rule rejection: rejection just means "try the
/// next color", while this means the construction is stuck and the run is
/// abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// No color, fresh or reused, was accepted for the chosen edge.
    #[error(
        "edge {edge} (direction {direction}) accepts none of the {colors_tried} candidate colors"
    )]
    Unresolvable {
        edge: Edge,
        direction: Direction,
        colors_tried: usize,
    },
}

/// Derived view of one direction: recomputed, never patched.
struct DirectionView {
    /// Edges of this direction still neutral, in table order.
    remaining: Vec<EdgeId>,
    /// Distinct colors of this direction, in first-observed table order.
    used_colors: Vec<ColorValue>,
}

/// Compute a direction's view from the current coloring.
fn direction_view(cube: &Hypercube, direction: Direction) -> DirectionView {
    let mut remaining = Vec::new();
    let mut used_colors = Vec::new();
    for (id, info) in cube.memo().edges().iter().enumerate() {
        if info.direction != direction {
            continue;
        }
        let color = cube.raw_coloring().get(id);
        if color == NEUTRAL {
            remaining.push(id);
        } else if !used_colors.contains(&color) {
            used_colors.push(color);
        }
    }
    DirectionView {
        remaining,
        used_colors,
    }
}

/// Greedy colorer over an injected random source.
pub struct GreedyColorer<R: Rng> {
    rng: R,
    statistics: Statistics,
}

impl GreedyColorer<StdRng> {
    /// A colorer over a seeded standard RNG, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GreedyColorer<R> {
    /// Create a colorer over the given random source.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            statistics: Statistics::new(),
        }
    }

    /// Counters accumulated by [`GreedyColorer::run`] calls.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Extend the cube's coloring until no direction has uncolored edges.
    ///
    /// Returns the final distinct-color count. Fails with
    /// [`ColoringError::Unresolvable`] if some edge accepts no color; the
    /// failed probe itself leaves no partial propagation behind, but
    /// assignments committed earlier in the run remain.
    pub fn run(&mut self, cube: &mut Hypercube) -> Result<u32, ColoringError> {
        loop {
            let Some((direction, view)) = self.next_active(cube) else {
                break;
            };
            let pick = view.remaining[self.rng.gen_range(0..view.remaining.len())];
            self.color_edge(cube, pick, direction, &view.used_colors)?;
        }
        debug!("coloring complete with {} colors", cube.num_colors());
        Ok(cube.num_colors())
    }

    /// The first direction that still has uncolored edges, with its view.
    fn next_active(&self, cube: &Hypercube) -> Option<(Direction, DirectionView)> {
        for d in 0..cube.dimension() {
            let direction = Direction::new(d as u8);
            let view = direction_view(cube, direction);
            if !view.remaining.is_empty() {
                return Some((direction, view));
            }
        }
        None
    }

    /// Probe colors for one edge: a fresh color first, then the direction's
    /// used colors in first-observed order.
    fn color_edge(
        &mut self,
        cube: &mut Hypercube,
        edge: EdgeId,
        direction: Direction,
        used_colors: &[ColorValue],
    ) -> Result<(), ColoringError> {
        let fresh = cube.num_colors() + 1;
        if self.probe(cube, edge, fresh) {
            cube.set_num_colors(fresh);
            self.statistics.increment(Counters::FreshColors);
            return Ok(());
        }

        for &color in used_colors {
            if self.probe(cube, edge, color) {
                return Ok(());
            }
        }

        let info = cube.memo().edge(edge);
        Err(ColoringError::Unresolvable {
            edge: info.edge,
            direction,
            colors_tried: 1 + used_colors.len(),
        })
    }

    /// One rule-check probe, with its bookkeeping.
    fn probe(&mut self, cube: &mut Hypercube, edge: EdgeId, color: ColorValue) -> bool {
        self.statistics.increment(Counters::ChecksAttempted);
        match cube.rule_check_id(edge, color) {
            Ok(forced) => {
                trace!(
                    "edge {} <- color {} ({} forced)",
                    cube.memo().edge(edge).edge,
                    color,
                    forced
                );
                self.statistics.increment(Counters::EdgesColored);
                self.statistics
                    .add(Counters::ForcedAssignments, forced as u64);
                true
            }
            Err(violation) => {
                self.statistics.record_violation(&violation);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cube_terminates_immediately() {
        let mut cube = Hypercube::new(0).unwrap();
        let mut colorer = GreedyColorer::seeded(7);
        assert_eq!(colorer.run(&mut cube).unwrap(), 0);
        assert_eq!(colorer.statistics().get(Counters::ChecksAttempted), 0);
    }

    #[test]
    fn test_square_gets_fully_colored() {
        let mut cube = Hypercube::new(2).unwrap();
        let mut colorer = GreedyColorer::seeded(42);
        let num_colors = colorer.run(&mut cube).unwrap();
        assert!(num_colors >= 1);
        assert!(cube.coloring().all(|(_, c)| c != NEUTRAL));
        assert_eq!(
            colorer.statistics().get(Counters::EdgesColored)
                + colorer.statistics().get(Counters::ForcedAssignments),
            4
        );
    }

    #[test]
    fn test_same_seed_same_coloring() {
        let run = |seed| {
            let mut cube = Hypercube::new(3).unwrap();
            GreedyColorer::seeded(seed).run(&mut cube).unwrap();
            cube.coloring().collect::<Vec<_>>()
        };
        assert_eq!(run(99), run(99));
    }
}
