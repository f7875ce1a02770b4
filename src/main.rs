use clap::Parser;
use log::LevelFilter;

use gofish::{GameConfig, PlayerKind, Simulation};

#[derive(Parser)]
#[command(author, version, about = "Simulate games of Go Fish", long_about = None)]
struct Cli {
    /// Number of players, human included
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Seat a human player who answers prompts on stdin
    #[arg(long)]
    human: bool,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 7)]
    initial_cards: usize,

    /// Do not narrate turns
    #[arg(long)]
    quiet: bool,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Comma-separated AI types: random, greedy (or smart), memory
    #[arg(long, default_value = "random")]
    player_types: String,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter on stderr: off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let config = GameConfig::new()
            .with_player_count(self.players)
            .with_human(self.human)
            .with_initial_cards(self.initial_cards)
            .with_verbose(!self.quiet)
            .with_game_count(self.games)
            .with_player_types(PlayerKind::parse_list(&self.player_types)?);
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

fn log(level: LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    log(cli.log_level)?;

    let config = cli.config()?;
    let mut simulation = Simulation::new(config)?;
    let report = simulation.run()?;

    if report.games > 1 {
        println!("{report}");
    }
    Ok(())
}
