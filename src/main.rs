//! Main CLI application for the console Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_grids, load_grid_from_file, RuleKind},
    simulation::Simulation,
    utils::{ColorOutput, FrameFormatter},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "console_life")]
#[command(about = "Conway's Game of Life on the console")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a grid file and print every generation
    Run {
        /// Grid file to load
        grid_file: PathBuf,

        /// Number of generations to compute
        generations: usize,

        /// Rule selector: 2 picks the alternate rule, anything else the standard rule
        rule: Option<String>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pause between generations in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Highlight living cells
        #[arg(long)]
        color: bool,

        /// Do not print the initial grid
        #[arg(long)]
        quiet_initial: bool,
    },

    /// Create example configuration and grid files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Load a grid file and report on it
    Check {
        /// Grid file to load
        grid_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            grid_file,
            generations,
            rule,
            config,
            delay_ms,
            format,
            color,
            quiet_initial,
        } => {
            let overrides = CliOverrides {
                generations: Some(generations),
                rule: rule.as_deref().map(|selector| RuleKind::from_selector(Some(selector))),
                delay_ms,
                grid_file: Some(grid_file),
                format,
                color,
                quiet_initial,
            };
            run_command(config, overrides)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Check { grid_file } => check_command(grid_file),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = Settings::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let grid_file = settings
        .input
        .grid_file
        .clone()
        .context("No grid file given")?;
    let grid = load_grid_from_file(&grid_file)
        .with_context(|| format!("Failed to load grid from {}", grid_file.display()))?;

    let formatter = FrameFormatter::new(settings.output.format, settings.output.color);
    if settings.output.show_initial {
        print!("{}", formatter.format_initial(&grid)?);
    }

    let mut simulation = Simulation::new(grid, settings.simulation.rule);
    let mut output_error = None;
    simulation.run(
        settings.simulation.generations,
        settings.simulation.delay(),
        |generation, grid| match formatter.format_generation(generation, grid) {
            Ok(frame) => print!("{}", frame),
            Err(e) => {
                output_error.get_or_insert(e);
            }
        },
    )?;

    match output_error {
        Some(e) => Err(e.context("Failed to format generation")),
        None => Ok(()),
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input");

    for dir in [&config_dir, &input_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.grid_file = Some(PathBuf::from("input/glider.txt"));
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&input_dir).context("Failed to create example grids")?;
    println!("Created example grids in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: console_life run {} 20", input_dir.join("glider.txt").display());

    Ok(())
}

fn check_command(grid_file: PathBuf) -> Result<()> {
    let grid = match load_grid_from_file(&grid_file) {
        Ok(grid) => grid,
        Err(e) => {
            println!("{}", ColorOutput::error(&format!("Invalid grid file: {}", e)));
            return Err(e).with_context(|| format!("Failed to load grid from {}", grid_file.display()));
        }
    };

    println!("Grid ({}x{}):", grid.width(), grid.height());
    println!("{}", FrameFormatter::format_grid_with_coords(&grid));

    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!(
        "  Density: {:.1}%",
        (grid.living_count() as f64 / (grid.width() * grid.height()) as f64) * 100.0
    );

    if grid.has_dead_border() {
        println!("{}", ColorOutput::success("Border is dead"));
    } else {
        println!(
            "{}",
            ColorOutput::warning("Border has living cells; they are cleared after the first generation")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["console_life", "run", "grid.txt", "5", "2", "--delay-ms", "0"]).unwrap();
        match cli.command {
            Commands::Run {
                generations, rule, delay_ms, ..
            } => {
                assert_eq!(generations, 5);
                assert_eq!(rule.as_deref(), Some("2"));
                assert_eq!(delay_ms, Some(0));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_negative_generations_rejected() {
        let cli = Cli::try_parse_from(["console_life", "run", "grid.txt", "-3"]);
        assert!(cli.is_err());

        let cli = Cli::try_parse_from(["console_life", "run", "grid.txt", "many"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["console_life", "run", "grid.txt"]).is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/glider.txt").exists());
    }

    #[test]
    fn test_run_and_check_commands() {
        let temp_dir = tempdir().unwrap();
        let grid_file = temp_dir.path().join("block.txt");
        std::fs::write(&grid_file, "4\n4\n....\n.##.\n.##.\n....\n").unwrap();

        let overrides = CliOverrides {
            generations: Some(2),
            delay_ms: Some(0),
            grid_file: Some(grid_file.clone()),
            ..Default::default()
        };
        assert!(run_command(temp_dir.path().join("absent.yaml"), overrides).is_ok());
        assert!(check_command(grid_file).is_ok());
    }

    #[test]
    fn test_run_reports_parse_failure() {
        let temp_dir = tempdir().unwrap();
        let grid_file = temp_dir.path().join("broken.txt");
        std::fs::write(&grid_file, "3\n2\n##.\n.#X\n").unwrap();

        let overrides = CliOverrides {
            generations: Some(1),
            grid_file: Some(grid_file),
            ..Default::default()
        };
        let err = run_command(temp_dir.path().join("absent.yaml"), overrides).unwrap_err();
        assert!(format!("{:#}", err).contains("Unexpected character"));
    }
}
