use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use panel_snake::game::{FoodSource, GameConfig, GameEngine, RandomFood, SeededFood, StallPolicy};
use panel_snake::input::RandomWalk;
use panel_snake::modes::{HeadlessMode, HumanMode, NoPacer, Pacer, ThreadPacer};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "panel_snake")]
#[command(version, about = "Snake on two 8x8 LED panels")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// YAML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// How food positions are chosen
    #[arg(long, default_value = "seeded")]
    food: FoodKind,

    /// What a tick without a direction does
    #[arg(long)]
    stall: Option<StallArg>,

    /// Place food anywhere instead of the default 15x7 area
    #[arg(long)]
    full_grid_food: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value = "1000")]
    ticks: u64,

    /// Seed for the headless random player
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Skip the pacing delay in headless mode
    #[arg(long)]
    no_delay: bool,

    /// Write logs to this file (human mode logs nothing otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play in the terminal with the keyboard as joystick
    Human,
    /// Random player, no UI
    Headless,
}

#[derive(Clone, Copy, ValueEnum)]
enum FoodKind {
    /// Reseeded from the snake length, same length gives the same spot
    Seeded,
    /// Thread-local randomness
    Random,
}

#[derive(Clone, Copy, ValueEnum)]
enum StallArg {
    Freeze,
    Duplicate,
}

impl From<StallArg> for StallPolicy {
    fn from(arg: StallArg) -> Self {
        match arg {
            StallArg::Freeze => StallPolicy::Freeze,
            StallArg::Duplicate => StallPolicy::Duplicate,
        }
    }
}

fn init_tracing(mode: Mode, log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "panel_snake=info".into());

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        // The TUI draws on stderr, so it only logs to a file
        None if mode == Mode::Headless => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        None => {}
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_yaml_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(stall) = cli.stall {
        config.stall_policy = stall.into();
    }
    if cli.full_grid_food {
        config = config.with_full_grid_food();
    }
    config.validate()?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.mode, cli.log_file.as_deref())?;

    let config = load_config(&cli)?;
    let food: Box<dyn FoodSource> = match cli.food {
        FoodKind::Seeded => Box::new(SeededFood::new(config.food_width, config.food_height)),
        FoodKind::Random => Box::new(RandomFood::new(config.food_width, config.food_height)),
    };
    let engine = GameEngine::new(config, food);

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(engine);
            human_mode.run().await?;
        }
        Mode::Headless => {
            let pacer: Box<dyn Pacer> = if cli.no_delay {
                Box::new(NoPacer)
            } else {
                Box::new(ThreadPacer)
            };
            let input = Box::new(RandomWalk::new(cli.seed, 6));
            let mut headless = HeadlessMode::new(engine, input, pacer);
            let summary = headless.run(cli.ticks);

            println!("Ticks:        {}", summary.ticks);
            println!("Games over:   {}", summary.games_over);
            println!("Food eaten:   {}", summary.foods_eaten);
            println!("High score:   {}", summary.high_score);
            println!("Final length: {}", summary.final_length);
        }
    }

    Ok(())
}
