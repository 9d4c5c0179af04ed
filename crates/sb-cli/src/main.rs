//! `starburst` — plan a maximum starburst link field around a target portal.
//!
//! Reads an intel-style JSON map snapshot, restricts it to a radius around
//! the target, computes which portals can link to the target without
//! crossing an opposing link, greedily picks opposing portals to
//! neutralize until the requested link count is reached, and writes the
//! resulting link fan as drawtools JSON (optionally also as CSV).
//!
//! Run with:
//!   starburst --input snapshot.json --output plan.json --target <guid>

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use sb_core::NodeId;
use sb_io::{load_snapshot, write_drawtools_json, write_plan_csv};
use sb_map::{PortalMap, filter_by_radius};
use sb_plan::{PlanObserver, plan_starburst};

#[derive(Parser)]
#[command(name = "starburst")]
#[command(about = "Plan a starburst link layout around a target portal")]
struct Args {
    /// Map snapshot JSON (portals + links)
    #[arg(long)]
    input: PathBuf,

    /// Output path for the drawtools JSON plan
    #[arg(long)]
    output: PathBuf,

    /// Guid of the target portal
    #[arg(long)]
    target: String,

    /// Requested number of inbound links
    #[arg(long, default_value_t = 1400)]
    links: usize,

    /// Only consider portals within this distance of the target
    #[arg(long, default_value_t = 6.0)]
    radius_km: f64,

    /// Raw faction code of the opposing team (whose links block)
    #[arg(long, default_value = "E")]
    opposing: String,

    /// Optional CSV output of the selected and neutralized portals
    #[arg(long)]
    csv: Option<PathBuf>,
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints scan progress and one line per neutralization iteration.
struct ConsoleObserver<'a> {
    map: &'a PortalMap,
}

impl PlanObserver for ConsoleObserver<'_> {
    fn on_scan_progress(&self, done: usize, total: usize) {
        println!("Scan progress: {}%", done * 100 / total.max(1));
    }

    fn on_scan_complete(&mut self, linkable: usize) {
        println!("Iteration #0, linkable portals: {linkable}");
    }

    fn on_iteration(&mut self, iteration: usize, neutralized: NodeId, linkable: usize) {
        println!(
            "Iteration #{iteration}, neutralized {}, linkable portals: {linkable}",
            self.map.title(neutralized),
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let start = Instant::now();

    // 1. Load the snapshot.
    let full_map = load_snapshot(&args.input, &args.opposing)
        .with_context(|| format!("loading snapshot {}", args.input.display()))?;
    println!(
        "Loaded {} portals, {} links",
        full_map.node_count(),
        full_map.edge_count(),
    );

    // 2. Restrict to the working radius around the target.
    let map = filter_by_radius(&full_map, &args.target, args.radius_km)?;
    println!(
        "Within {} km of the target: {} portals, {} links",
        args.radius_km,
        map.node_count(),
        map.edge_count(),
    );

    // 3. Plan.
    let target = map
        .node_by_guid(&args.target)
        .context("target portal not found after filtering")?;
    let mut observer = ConsoleObserver { map: &map };
    let plan = plan_starburst(&map, &args.target, args.links, &mut observer)?;

    if plan.reached(args.links) {
        println!(
            "Planned {} links in {} iterations ({:.2}s)",
            plan.linkable.len(),
            plan.iterations,
            start.elapsed().as_secs_f64(),
        );
    } else {
        println!(
            "Neutralization candidates exhausted after {} iterations: {} of {} links ({:.2}s)",
            plan.iterations,
            plan.linkable.len(),
            args.links,
            start.elapsed().as_secs_f64(),
        );
    }

    // 4. Write outputs.
    let out = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_drawtools_json(BufWriter::new(out), &map, target, &plan.linkable)?;
    println!("Drawtools plan written to {}", args.output.display());

    if let Some(csv_path) = &args.csv {
        let out = File::create(csv_path)
            .with_context(|| format!("creating {}", csv_path.display()))?;
        write_plan_csv(BufWriter::new(out), &map, &plan.linkable, &plan.neutralized)?;
        println!("CSV plan written to {}", csv_path.display());
    }

    Ok(())
}
