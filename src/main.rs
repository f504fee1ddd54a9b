use clap::Parser;

use maze_pathfinding::config::Config;
use maze_pathfinding::error::Result;
use maze_pathfinding::render::{render_solution, replay_trace};
use maze_pathfinding::session::MazeSession;
use maze_pathfinding::statistics::comparison_table;
use std::io;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut session = MazeSession::from_config(config)?;

    if !config.quiet {
        println!("You entered the following maze:");
        print!("{}", session.grid());
        println!();
    }

    if config.compare {
        let reports = session.compare_modes(config.use_start_distance)?;
        let stats: Vec<_> = reports.into_iter().map(|r| r.statistics).collect();
        println!("=== HEURISTIC COMPARISON ===");
        print!("{}", comparison_table(&stats));
        return Ok(());
    }

    let report = session.solve(config.search_config())?;

    if report.may_be_suboptimal && !config.quiet {
        println!(
            "Attention! Your maze has teleporters and you have selected a heuristic. \
             Keep in mind this may result in the shortest path not being found"
        );
    }

    if config.animate {
        replay_trace(
            &mut io::stdout().lock(),
            session.grid(),
            report.outcome.trace(),
            Duration::from_millis(config.delay_ms),
        )?;
        println!();
    }

    if let Some(path) = report.outcome.path() {
        print!("{}", render_solution(session.grid(), path));
    }

    println!("\n=== FINAL RESULTS ===");
    print!("{}", report.statistics);

    Ok(())
}
