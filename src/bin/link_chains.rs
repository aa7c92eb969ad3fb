//! Chain linker binary - prints the tracks formed by linked instances.
//!
//! Usage: cargo run --bin link_chains -- --level <FILE> --wiring <FILE> --file <INSTANCE>... [--loop]
//!
//! Options:
//!   --level <FILE>      Level document (JSON)
//!   --wiring <FILE>     Connection graph (JSON)
//!   --file <INSTANCE>   Instance file to chain, may be repeated
//!   --loop              Allow tracks that close on themselves

use std::collections::HashMap;

use levelscan::chain::{chain, Wiring};
use levelscan::core::Result;
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
    let (Some(level_path), Some(wiring_path)) = (
        parse_str_arg(&args, "--level"),
        parse_str_arg(&args, "--wiring"),
    ) else {
        eprintln!("Usage: link_chains --level <FILE> --wiring <FILE> --file <INSTANCE>... [--loop]");
        std::process::exit(2);
    };
    let allow_loop = args.iter().any(|a| a == "--loop");

    let files: HashMap<String, String> = parse_all_args(&args, "--file")
        .into_iter()
        .map(|f| (f.to_ascii_lowercase(), f))
        .collect();

    let level = Level::load(&level_path)?;
    let mut wiring = Wiring::load(&wiring_path)?;

    let mut count = 0;
    for track in chain(&level, &mut wiring, &files, allow_loop)? {
        let track = track?;
        count += 1;
        let closed = track.first().and_then(|n| n.prev).is_some();
        let names: Vec<&str> = track.iter().map(|n| n.name()).collect();
        println!(
            "Track {} ({} nodes{}): {}",
            count,
            track.len(),
            if closed { ", loop" } else { "" },
            names.join(" -> "),
        );
    }
    log::info!("{} tracks, {} antline groups removed", count, wiring.deleted_antlines().len());
    Ok(())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_all_args(args: &[String], flag: &str) -> Vec<String> {
    args.windows(2)
        .filter(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .collect()
}
