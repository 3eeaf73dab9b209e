// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for single games and series
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, Subcommand};
use durak_agents::{make_agent, Agent, AgentKind};
use durak_engine::render::render;
use durak_engine::{describe, new_game, GameConfig, Seat};
use durak_tournament::{run_game_with, run_series, SeriesConfig, SeriesSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "durak", about = "Heads-up Durak engine and agent runner")]
struct Cli {
    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = AgentKind::Human)]
        p0: AgentKind,
        #[arg(long, value_enum, default_value_t = AgentKind::Heuristic)]
        p1: AgentKind,
        /// Print the full table after every move
        #[arg(long)]
        show: bool,
    },
    /// Run many games between two agents
    Series {
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = AgentKind::Heuristic)]
        p0: AgentKind,
        #[arg(long, value_enum, default_value_t = AgentKind::Random)]
        p1: AgentKind,
        /// Alternate seats every other game
        #[arg(long)]
        swap: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

const MAX_DECISIONS: usize = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Play { seed, p0, p1, show } => cmd_play(seed, [p0, p1], show),
        Commands::Series { games, seed, p0, p1, swap, json } => {
            let config = SeriesConfig {
                games,
                base_seed: seed,
                max_decisions: MAX_DECISIONS,
                agents: [p0, p1],
                swap_seats: swap,
                ..SeriesConfig::default()
            };
            cmd_series(&config, json)
        }
    }
}

/// One game through the shared driver, printing each move as it lands.
fn cmd_play(seed: u64, kinds: [AgentKind; 2], show: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Durak ===\n");
    println!("seed={}, {}={}, {}={}\n", seed, Seat::Zero, kinds[0], Seat::One, kinds[1]);

    let config = GameConfig::with_seed(seed);
    let mut agents: [Box<dyn Agent>; 2] = [
        make_agent(kinds[0], seed.wrapping_add(1)),
        make_agent(kinds[1], seed.wrapping_add(2)),
    ];
    let names = [agents[0].name().to_string(), agents[1].name().to_string()];

    let dealt = new_game(&config);
    info!(trump = %dealt.trump(), attacker = %dealt.attacker(), "dealt");
    println!("Trump: {}", dealt.trump());
    if show {
        println!("{}\n", render(&dealt));
    }

    let record = run_game_with(&mut agents, &config, MAX_DECISIONS, |state, seat, id, outcome| {
        println!("{} ({}): {}  -> {:?}", seat, names[seat.index()], describe(id), outcome);
        if show {
            println!("{}\n", render(state));
        }
    })?;

    println!("\nGame finished after {} decisions, {} rounds.", record.decisions, record.rounds);
    for s in Seat::ALL {
        println!("  {} ({}): {:+}", s, names[s.index()], record.rewards[s.index()]);
    }
    Ok(())
}

fn cmd_series(config: &SeriesConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if config.agents.contains(&AgentKind::Human) {
        return Err("series games run unattended; pick random or heuristic agents".into());
    }

    let summary = run_series(config);
    if json {
        println!("{}", summary.to_json()?);
    } else {
        print_summary(config, &summary);
    }
    Ok(())
}

fn print_summary(config: &SeriesConfig, summary: &SeriesSummary) {
    println!("=== Series: {} games, {} vs {}{} ===\n",
        config.games, config.agents[0], config.agents[1],
        if config.swap_seats { ", seats alternating" } else { "" });
    println!("{:<12} {:>6} {:>6} {:>6} {:>7}", "Agent", "Wins", "Losses", "Errors", "Win %");
    println!("{}", "-".repeat(42));
    for (slot, stats) in summary.agents.iter().enumerate() {
        let played = stats.wins + stats.losses;
        let pct = if played > 0 { stats.wins as f64 / played as f64 * 100.0 } else { 0.0 };
        let label = format!("{}#{}", config.agents[slot], slot);
        println!("{:<12} {:>6} {:>6} {:>6} {:>6.1}%", label, stats.wins, stats.losses, stats.errors, pct);
    }
    println!();
    println!("Seat wins: {} {}, {} {}", Seat::Zero, summary.seat_wins[0], Seat::One, summary.seat_wins[1]);
    println!("Mean decisions: {:.1}, mean rounds: {:.1}", summary.mean_decisions, summary.mean_rounds);
}
