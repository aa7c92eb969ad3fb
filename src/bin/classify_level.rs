//! Level classifier binary - tags grid cells for one level document.
//!
//! Usage: cargo run --release --bin classify_level -- --level <FILE> [OPTIONS]
//!
//! Options:
//!   --level <FILE>     Level document (JSON, required)
//!   --config <FILE>    Classifier config (JSON, defaults if omitted)
//!   --embeds <FILE>    Embed definition table (JSON)
//!   --pits <Z>         Enable bottomless pits for liquid reaching down to Z
//!   --out <FILE>       Write a grid snapshot (JSON)
//!   --dump <FILE>      Write the level with one marker entity per cell

use std::collections::BTreeMap;
use std::time::Instant;

use levelscan::classify::{Classifier, ClassifierConfig, EmbedTable, NoPits, PitRules, PitSettings};
use levelscan::core::Result;
use levelscan::grid::Block;
use levelscan::level::Level;

fn main() {
    levelscan::core::logging::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(level_path) = parse_str_arg(&args, "--level") else {
        eprintln!("Usage: classify_level --level <FILE> [--config <FILE>] [--embeds <FILE>] [--pits <Z>] [--out <FILE>] [--dump <FILE>]");
        std::process::exit(2);
    };

    let config = match parse_str_arg(&args, "--config") {
        Some(path) => ClassifierConfig::load(path)?,
        None => ClassifierConfig::default(),
    };
    let embeds = match parse_str_arg(&args, "--embeds") {
        Some(path) => EmbedTable::load(path)?,
        None => EmbedTable::new(),
    };
    let pits: Box<dyn PitRules> = match parse_f32_arg(&args, "--pits") {
        Some(floor_z) => Box::new(PitSettings { enabled: true, floor_z }),
        None => Box::new(NoPits),
    };

    let mut level = Level::load(&level_path)?;
    println!("=== Level Classifier ===");
    println!("Level:   {}", level_path);
    println!("Brushes: {}", level.brushes.len());
    println!("Entities: {}", level.entities.len());
    println!();

    let start = Instant::now();
    let result = Classifier::new(&config, &embeds).classify(&mut level, pits.as_ref());
    let elapsed = start.elapsed();

    for block in Block::ALL {
        let count = result.grid.count(block);
        if count > 0 {
            println!("{:>16}: {}", block.name(), count);
        }
    }
    println!();
    println!("Seeds:    {}", result.seeds);
    println!("Leaks:    {}", result.fill.leaks.len());
    println!("Embedded: {}", result.embedded);

    let mut attrs = BTreeMap::new();
    result.hazards.merge_into(&mut attrs);
    for (attr, value) in &attrs {
        println!("Attr {} = {}", attr, value);
    }
    println!("Done in {:.1}ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = parse_str_arg(&args, "--out") {
        result.grid.snapshot().save(&path)?;
        log::info!("Wrote grid snapshot to {}", path);
    }
    if let Some(path) = parse_str_arg(&args, "--dump") {
        result.grid.dump_to_level(&mut level);
        level.save(&path)?;
        log::info!("Wrote debug level to {}", path);
    }
    Ok(())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
