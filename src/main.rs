use anyhow::Result;
use clap::Parser;

use petri_lib::app::App;
use petri_lib::model::config::AppConfig;
use petri_lib::model::{engine, preset};
use petri_lib::ui::renderer::{ascii_frame, ViewMode};
use petri_lib::ui::tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulator in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Start from a named preset (empty, glider, blinker, block) instead of a
    /// random seed
    #[arg(short, long)]
    preset: Option<String>,

    /// Grid width override
    #[arg(long)]
    width: Option<u16>,

    /// Grid height override
    #[arg(long)]
    height: Option<u16>,

    /// Random seed density override, in [0.0, 1.0]
    #[arg(short, long)]
    density: Option<f64>,

    /// RNG seed override for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generations to run in headless mode
    #[arg(short, long, default_value_t = 100)]
    generations: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config);
    if let Some(width) = args.width {
        config.world.width = width;
    }
    if let Some(height) = args.height {
        config.world.height = height;
    }
    if let Some(density) = args.density {
        config.world.density = density;
    }
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut rng = App::rng_from_config(&config);
    let grid = match &args.preset {
        Some(name) => preset::create(name)?,
        None => engine::random_seed(
            config.world.height,
            config.world.width,
            config.world.density,
            &mut rng,
        )?,
    };

    match args.mode {
        Mode::Headless => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .init();

            let mut grid = grid;
            for generation in 1..=args.generations {
                grid = engine::evolve(&grid);
                tracing::info!(generation, population = grid.population(), "evolved");
            }
            print!(
                "{}",
                ascii_frame(&grid, ViewMode::Cells, config.display.alive_glyph)
            );
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(grid, config, rng);
            let res = app.run(&mut tui);

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
    }

    Ok(())
}
