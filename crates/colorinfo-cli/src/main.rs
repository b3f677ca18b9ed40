use clap::{Parser, Subcommand};
use colorinfo_cli::render::render_text;
use colorinfo_cli::session::Session;
use colorinfo_cli::stdio_bridge::StdioBackend;
use colorinfo_cli::{AppConfig, CliError, parse_rgba};
use colorinfo_core::{ColorState, parse_hex};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorinfo")]
#[command(version, about = "Inspect a color as RGBA, HSB, CIE Lab, CMYK and hex", long_about = None)]
struct Cli {
    /// Log at debug level (overrides COLORINFO_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Decimal places for fractional values in text output (0-6)
    #[arg(long, value_name = "N", global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every representation of one color
    Inspect {
        /// Hex color: #RGB, #RRGGBB or #RRGGBBAA
        #[arg(value_name = "HEX", required_unless_present = "rgba", conflicts_with = "rgba")]
        color: Option<String>,

        /// Normalized channels instead of hex (r,g,b,a)
        #[arg(long, value_name = "R,G,B,A", allow_hyphen_values = true)]
        rgba: Option<String>,

        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve a color session over JSON lines on stdin/stdout
    Session {
        /// Initial hex color (defaults to opaque white)
        #[arg(long, value_name = "HEX")]
        initial: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::default().with_overrides(cli.verbose, cli.pretty, cli.precision);

    if let Err(e) = init_logging(&config) {
        eprintln!("{e}");
    }

    if let Err(e) = run(cli.command, &config) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(config: &AppConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| CliError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn run(command: Commands, config: &AppConfig) -> Result<(), CliError> {
    match command {
        Commands::Inspect { color, rgba, json } => {
            let canonical = match (color, rgba) {
                (_, Some(rgba)) => parse_rgba(&rgba)?,
                (Some(hex), None) => parse_hex(&hex)?,
                (None, None) => return Err(CliError::MissingColor),
            };
            let state = ColorState::with_color(canonical);
            let snapshot = state.snapshot();

            if json {
                let out = if config.pretty_json {
                    serde_json::to_string_pretty(&snapshot)?
                } else {
                    serde_json::to_string(&snapshot)?
                };
                println!("{out}");
            } else {
                print!("{}", render_text(&snapshot, config.precision));
            }
        }
        Commands::Session { initial } => {
            let state = match initial {
                Some(hex) => ColorState::with_color(parse_hex(&hex)?),
                None => ColorState::new(),
            };
            let mut session = Session::new(StdioBackend::stdio(), state);
            session.run()?;
        }
    }
    Ok(())
}
