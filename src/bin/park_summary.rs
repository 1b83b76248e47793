//! Park summary inspection tool
//!
//! Loads the two CSVs, computes the view for one park (first park by name if
//! none is given) and prints the numbers the UI would show. `--graph-json`
//! additionally dumps the graph and layout parameters as JSON.
//!
//! Usage: park_summary [data_dir] [park name] [--graph-json]

use std::path::PathBuf;

use anyhow::{Context, Result};
use species_galaxy::{Dataset, ForceLayoutConfig, ParkView, MAX_PARK_SPECIES, MONTH_LABELS};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut graph_json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--graph-json" {
            graph_json = true;
        } else {
            positional.push(arg);
        }
    }

    let data_dir = PathBuf::from(positional.first().cloned().unwrap_or_else(|| "data".to_string()));
    let dataset = Dataset::load(&data_dir.join("parks.csv"), &data_dir.join("species.csv"))?;

    let park_name = match positional.get(1) {
        Some(name) => name.clone(),
        None => dataset
            .default_park()
            .map(|p| p.name.clone())
            .context("parks.csv contains no parks")?,
    };

    let view = ParkView::compute(&dataset.species, &park_name);

    println!("\n=== {} ===\n", view.park_name);
    let limit_note = if view.truncated {
        format!(" (limited to {} for performance)", MAX_PARK_SPECIES)
    } else {
        String::new()
    };
    println!("Total species: {}{}", view.stats.total, limit_note);
    println!("Native:        {}", view.stats.native);
    println!("Non-native:    {}", view.stats.non_native);

    if !view.stats.top_categories.is_empty() {
        println!("\nTop categories:");
        for (category, count) in &view.stats.top_categories {
            println!("  {:<24} {}", category, count);
        }
    }

    println!("\nSeasonal activity:");
    let peak = view.activity.iter().copied().max().unwrap_or(0).max(1);
    for (label, count) in MONTH_LABELS.iter().zip(view.activity.iter()) {
        let bar = "#".repeat((count * 40 / peak) as usize);
        println!("  {} {:>5}  {}", label, count, bar);
    }

    println!(
        "\nGraph: {} nodes, {} edges",
        view.graph.nodes.len(),
        view.graph.edges.len()
    );

    if graph_json {
        let payload = serde_json::json!({
            "graph": view.graph,
            "layout": ForceLayoutConfig::default(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
