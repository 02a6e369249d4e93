use clap::{Args as ClapArgs, Parser, Subcommand};
use greenhouse::OutputFormat;
use greenhouse::core::config::{self, CliOverrides, GreenhouseConfig};
use greenhouse::core::path::{Direction, Navigation, compute_path};
use greenhouse::core::state::App;
use serde::Serialize;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "greenhouse", about = "Two-row greenhouse planner")]
struct Args {
    #[command(flatten)]
    layout: LayoutArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(ClapArgs)]
struct LayoutArgs {
    /// Row 1 positions, e.g. "[1-4][8-20]"
    #[arg(long, global = true)]
    row1: Option<String>,

    /// Row 2 positions
    #[arg(long, global = true)]
    row2: Option<String>,

    /// Starting platform position in percent (0-100)
    #[arg(long, global = true, allow_negative_numbers = true)]
    platform: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// Print which row to check and how far to go for one target column
    Route {
        /// Column number to find
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        #[arg(short, long, default_value_t, value_enum)]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct RouteReport {
    target: i64,
    row: u8,
    direction: Direction,
    columns_to_skip: u64,
    distance: f64,
    platform_position: f64,
}

impl RouteReport {
    fn new(target: i64, nav: &Navigation, platform_position: f64) -> Self {
        Self {
            target,
            row: nav.row.number(),
            direction: nav.direction,
            columns_to_skip: nav.columns_to_skip(),
            distance: nav.distance,
            platform_position,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logger - writes to greenhouse.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("greenhouse.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Greenhouse planner starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        eprintln!("Warning: {e}, using defaults");
        GreenhouseConfig::default()
    });
    let overrides = CliOverrides {
        row1: args.layout.row1,
        row2: args.layout.row2,
        platform: args.layout.platform,
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::info!("Resolved config: {:?}", resolved);

    match args.command {
        None => match greenhouse::tui::run(resolved) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::warn!("Terminal error: {}", e);
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        Some(Command::Route { target, format }) => route(&App::from_config(&resolved), target, format),
    }
}

fn route(app: &App, target: i64, format: OutputFormat) -> ExitCode {
    let position = app.platform.position();
    let nav = match compute_path(app.row1.positions(), app.row2.positions(), position, target) {
        Ok(nav) => nav,
        Err(e) => {
            log::info!("Route for {} failed: {}", target, e);
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match format {
        OutputFormat::Text => {
            println!("Target Column: {target}");
            println!("Check Row {}", nav.row);
            println!("Direction: Go {}", nav.direction);
            println!("Columns to skip: {}", nav.columns_to_skip());
        }
        OutputFormat::Json => {
            let report = RouteReport::new(target, &nav, position);
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to encode route: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}
