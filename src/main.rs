//! Weighted Life CLI - Run the arena headless from a JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::time::Instant;

use weighted_life::{ArenaConfig, EvolutionArena};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("--example") {
        print_example_config();
        return;
    }
    if args.get(1).map(String::as_str) == Some("--help") {
        eprintln!("Usage: {} [config.json] [generations]", args[0]);
        eprintln!();
        eprintln!("Run the weighted life arena without rendering.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Arena configuration (default: built-in defaults)");
        eprintln!("  generations  Number of generations to run (default: 10)");
        eprintln!();
        eprintln!("Print the default configuration with --example.");
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => ArenaConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => ArenaConfig::default(),
    };
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);

    println!("Weighted Life Arena");
    println!("===================");
    println!("Grid: {}x{} (9 grids)", config.width, config.height);
    println!(
        "Generation: {} steps, {} frames per step",
        config.steps_per_generation, config.frames_per_step
    );
    println!("Generations: {}", generations);
    println!();

    let mut arena = EvolutionArena::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    let start = Instant::now();
    let mut frames: u64 = 0;

    while arena.current_generation() < generations {
        let outcome = arena.tick();
        frames += 1;

        if let Some(record) = outcome.boundary {
            let best = record.scores[record.ranking[0]];
            let total: usize = record.scores.iter().sum();
            println!(
                "  Generation {}: best grid {} ({} live), total {}, champion {}, {} mutations",
                record.generation,
                record.ranking[0],
                best,
                total,
                record.champion,
                record.mutations.len()
            );
        }
    }

    let elapsed = start.elapsed();
    let stats = arena.stats();

    println!();
    println!("Final state: {}", arena.status_line());
    println!("  Scores: {:?}", stats.scores);
    println!("  Total live: {}", stats.total_live);
    for (i, grid) in arena.grids().iter().enumerate() {
        println!("  Grid {}: weights {}", i, grid.weights());
    }
    println!();
    println!(
        "Time: {:.2}s ({:.1} frames/s)",
        elapsed.as_secs_f32(),
        frames as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = ArenaConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
