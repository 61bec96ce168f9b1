//! greeter-nav CLI
//!
//! Three screens, one navigation stack: type a name, type an age, see both.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use greeter_nav::config::Config;
use greeter_nav::logging::init_tracing;
use greeter_nav::replay::{parse_script, run_script};
use greeter_nav::report::{format_routes, format_snapshot};
use greeter_nav::route::RouteTable;
use greeter_nav::tui::run::run;
use greeter_nav::tui::state::App;
use greeter_nav::types::{OutputFormat, Snapshot};

#[derive(Parser)]
#[command(name = "greeter-nav")]
#[command(about = "Collect a name and an age across three screens")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat popping to a route that is not on the stack as an error
    #[arg(long, global = true)]
    strict_pop: bool,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive screens (default)
    Run {
        /// Hide the route path in the title bar
        #[arg(long)]
        hide_route_path: bool,
    },

    /// Print the route table
    Routes {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Run a scripted session without a terminal and print the final state
    Replay {
        /// Whitespace-separated tokens: type:<text>, enter, back, backspace, quit.
        /// Typed text cannot contain spaces.
        script: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| {
        init_tracing(config.log_file.as_deref());
        match cli.command {
            None => cmd_run(&config, false),
            Some(Commands::Run { hide_route_path }) => cmd_run(&config, hide_route_path),
            Some(Commands::Routes { format }) => cmd_routes(format.into()),
            Some(Commands::Replay { script, format }) => cmd_replay(&config, &script, format.into()),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Load the config file, then apply CLI overrides.
fn load_config(cli: &Cli) -> Result<Config, String> {
    let mut config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;

    if cli.strict_pop {
        config.strict_pop = true;
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }

    Ok(config)
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(config: &Config, hide_route_path: bool) -> Result<(), String> {
    let show_route_path = config.show_route_path && !hide_route_path;
    let app = App::start(config.pop_policy(), show_route_path).map_err(|e| e.to_string())?;
    tracing::info!(pop_policy = ?config.pop_policy(), "starting tui");
    run(app).map_err(|e| format!("terminal error: {}", e))
}

fn cmd_routes(format: OutputFormat) -> Result<(), String> {
    let table = RouteTable::app().map_err(|e| e.to_string())?;
    let output = format_routes(&table, format).map_err(|e| e.to_string())?;
    print!("{}", output);
    Ok(())
}

fn cmd_replay(config: &Config, script: &str, format: OutputFormat) -> Result<(), String> {
    let actions = parse_script(script).map_err(|e| e.to_string())?;
    let mut app = App::start(config.pop_policy(), config.show_route_path).map_err(|e| e.to_string())?;

    run_script(&mut app, &actions);

    let output = format_snapshot(&Snapshot::of(&app), format).map_err(|e| e.to_string())?;
    print!("{}", output);
    Ok(())
}
