//! Momentum demo driver.
//!
//! Thin loop around gm_core: builds two rosters, runs a handful of plays
//! attributed randomly to either side, and streams every reaction to
//! stdout. Reproducible by construction - pass a different seed for a
//! different game.

use anyhow::Result;
use clap::Parser;

use gm_core::{
    run_scenario, HypeAction, Player, Position, PresentationSink, ScenarioConfig, Team,
};

#[derive(Parser)]
#[command(name = "gm_cli")]
#[command(about = "Run a scripted momentum scenario", long_about = None)]
struct Cli {
    /// Outcome-provider seed
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Number of plays to run
    #[arg(long, default_value_t = gm_core::api::DEFAULT_PLAYS)]
    plays: u32,

    /// Home team name
    #[arg(long, default_value = "Tigers")]
    home: String,

    /// Away team name
    #[arg(long, default_value = "Eagles")]
    away: String,

    /// Arm a hype action the driver may fire after an early home score
    #[arg(long, default_value_t = false)]
    hype: bool,
}

struct StdoutSink;

impl PresentationSink for StdoutSink {
    fn present(&mut self, line: &str) {
        println!("{line}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut home = Team::new(&cli.home, "Coach Smith");
    home.add_player(Player::new("John", Position::QB));
    home.add_player(Player::new("Alex", Position::WR));

    let mut away = Team::new(&cli.away, "Coach Brown");
    away.add_player(Player::new("Ryan", Position::QB));
    away.add_player(Player::new("Mark", Position::RB));

    let config = ScenarioConfig {
        seed: cli.seed,
        plays: cli.plays,
        hype: cli.hype.then(|| HypeAction::new("Drum Line", 30.0, 0.5)),
    };

    let mut sink = StdoutSink;
    let response = run_scenario(&config, &home, &away, &mut sink);

    println!();
    println!("=== Final ===");
    println!("Momentum: {:+} ({})", response.final_momentum, response.final_status);
    println!("Score: {}", response.score);
    println!("Quarter {} with {:.1}s remaining", response.quarter, response.time_remaining);
    println!("{} crowd energy: {}", cli.home, response.crowd_energy);
    if response.hype_bonus_applied {
        println!("Hype bonus applied");
    }

    Ok(())
}
