// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Example driver: construct a cube, optionally seed a partial coloring,
//! run the greedy colorer and print what happened.
//!
//! The library is the real deliverable; this binary just makes sample runs
//! reproducible from the command line:
//!
//! ```text
//! hypercube -n 4 --seed 7 --axis-colors 1,1,3,1,1,1,2,1
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use hypercube_coloring::state::Counters;
use hypercube_coloring::{find_crazy_edges, Direction, GreedyColorer, Hypercube, NEUTRAL};

/// Greedy hypercube edge-coloring runs.
#[derive(Parser, Debug)]
#[command(name = "hypercube", version, about)]
struct Args {
    /// Cube dimension n.
    #[arg(short = 'n', long, default_value_t = 4)]
    dimension: usize,

    /// RNG seed; a random seed is drawn (and printed) when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Seed colors for the direction-0 edges, in lower-endpoint order;
    /// applied through the rule checker before the greedy run.
    #[arg(long, value_delimiter = ',')]
    axis_colors: Vec<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cube = Hypercube::new(args.dimension)
        .with_context(|| format!("constructing the {}-cube", args.dimension))?;

    if !args.axis_colors.is_empty() {
        seed_axis_colors(&mut cube, &args.axis_colors)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    println!(
        "coloring the {}-cube ({} edges), seed {}",
        cube.dimension(),
        cube.edges().len(),
        seed
    );

    let mut colorer = GreedyColorer::seeded(seed);
    let num_colors = colorer.run(&mut cube).context("greedy coloring")?;

    print_coloring(&cube);
    println!("{} distinct colors", num_colors);

    let stats = colorer.statistics();
    println!(
        "{} checks, {} rejected, {} forced assignments",
        stats.get(Counters::ChecksAttempted),
        stats.rejections(),
        stats.get(Counters::ForcedAssignments),
    );

    let crazy = find_crazy_edges(&cube);
    println!("{} crazy edges", crazy.len());
    for c in crazy {
        println!(
            "  {} color {} (shared by {} edges)",
            c.edge.label(cube.dimension()),
            c.color,
            c.share_count
        );
    }

    Ok(())
}

/// Apply the requested direction-0 colors through the rule checker, then
/// bump the distinct-color counter past the largest seeded color.
fn seed_axis_colors(cube: &mut Hypercube, colors: &[u32]) -> Result<()> {
    let axis_edges: Vec<_> = cube
        .edges()
        .iter()
        .filter(|info| info.direction == Direction::new(0))
        .map(|info| info.edge)
        .collect();
    if colors.len() > axis_edges.len() {
        bail!(
            "{} axis colors given but direction 0 has only {} edges",
            colors.len(),
            axis_edges.len()
        );
    }
    for (&color, &edge) in colors.iter().zip(&axis_edges) {
        if color == NEUTRAL {
            continue;
        }
        if !cube.rule_check(edge, color)? {
            bail!(
                "seed color {} for edge {} violates the pairwise rule",
                color,
                edge.label(cube.dimension())
            );
        }
    }
    let highest = colors.iter().copied().max().unwrap_or(NEUTRAL);
    cube.set_num_colors(highest.max(cube.num_colors()));
    Ok(())
}

/// Print the coloring one edge per line; the edge table is direction-major,
/// so a header line per direction falls out of the iteration order.
fn print_coloring(cube: &Hypercube) {
    let n = cube.dimension();
    let mut last_direction = None;
    for (info, (edge, color)) in cube.edges().iter().zip(cube.coloring()) {
        if last_direction != Some(info.direction) {
            println!("direction {}:", info.direction);
            last_direction = Some(info.direction);
        }
        println!("  {} -> {}", edge.label(n), color);
    }
}
