/*

    boxprobe: trace a batch of rays against axis aligned boxes.

    Usage: boxprobe <config>.json [<probe>.json]

    If no probe file is given, "inputFile" of the configuration
    is used. Results are written next to the other renderer
    outputs, i.e. <outputDir>/<outputName>.json

    @date: Nov, 2025
    @author: Bartu

*/

use std::{env, time::Instant};

use fury_bounds::prelude::*;
use fury_bounds::config::Config;
use fury_bounds::probe::{ProbeScene, write_report};

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Parse args
    let args: Vec<String> = env::args().collect();
    let (config_path, probe_arg) = match args.len() {
        2 => (&args[1], None),
        3 => (&args[1], Some(&args[2])),
        _ => {
            eprintln!("Usage: {} <config>.json [<probe>.json]", args[0]);
            std::process::exit(1);
        }
    };

    // Configuration decides how chatty the console is,
    // so it is read before logging is up
    let config = Config::load(config_path).map_err(|e| {
        eprintln!("Failed to load configuration {}: {}", config_path, e);
        e
    })?;

    // Logging on console
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();
    debug!("Configuration:\n {:#?}", config);

    let probe_path = probe_arg.cloned().unwrap_or_else(|| config.input_file.clone());
    if probe_path.is_empty() {
        error!("No probe file given and configuration has no inputFile.");
        std::process::exit(1);
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_threads.max(0) as usize)
        .build_global()?;
    info!("Using {} threads", config.thread_count());

    info!("Loading probe from {}...", probe_path);
    let scene = ProbeScene::load(&probe_path).map_err(|e| {
        error!("Failed to load probe: {}", e);
        e
    })?;

    let start = Instant::now();
    let hits = scene.run();
    let hit_count = hits.iter().filter(|h| h.is_hit()).count();
    info!("{} of {} rays hit a box ({:.2?})", hit_count, hits.len(), start.elapsed());

    write_report(config.output_path_with_ext("json"), scene.bounds(), &hits)?;
    info!("Finished execution.");
    Ok(())
}
