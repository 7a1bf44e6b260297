use clap::{Parser, Subcommand};
use std::io::Read;
use unitctl::config::{Config, OutputFormat};
use unitctl::input;
use unitctl::session::{self, Session};
use unitctl::unit::Unit;

#[derive(Parser)]
#[command(name = "unitctl")]
#[command(about = "Percent/pixel value control: input repair and scripted sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repair raw input text into a numeric string
    Sanitize {
        /// Raw text as typed (e.g., "12,3" or "123a")
        text: String,

        /// Value to fall back to when the text is rejected
        #[arg(short, long, default_value = "0")]
        last_valid: String,
    },

    /// Apply unit bounds to a numeric string
    Clamp {
        /// Numeric text (e.g., "150")
        text: String,

        /// Unit: "%", "percent", "px" or "pixel"
        #[arg(short, long)]
        unit: Unit,

        /// Value to fall back to when the text is rejected
        #[arg(short, long, default_value = "0")]
        last_valid: String,
    },

    /// Replay events against a control and print what it emits
    Run {
        /// Events: edit:<text>, commit, inc, dec, unit:<unit>, sync:<text> (default: read stdin)
        events: Vec<String>,

        /// Config file with control defaults
        #[arg(short, long)]
        config: Option<String>,

        /// Initial value (overrides config)
        #[arg(long)]
        value: Option<String>,

        /// Initial unit (overrides config)
        #[arg(long)]
        unit: Option<Unit>,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sanitize { text, last_valid } => {
            println!("{}", input::sanitize(&text, &last_valid));
            Ok(())
        }
        Commands::Clamp {
            text,
            unit,
            last_valid,
        } => {
            println!("{}", input::clamp(&text, unit, &last_valid));
            Ok(())
        }
        Commands::Run {
            events,
            config,
            value,
            unit,
            json,
        } => run_session(&events, config.as_deref(), value, unit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_session(
    tokens: &[String],
    config_path: Option<&str>,
    value: Option<String>,
    unit: Option<Unit>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::empty(),
    };

    if let Some(value) = value {
        config.control.default_value = value;
    }
    if let Some(unit) = unit {
        config.control.default_unit = unit;
    }
    if json {
        config.output.format = OutputFormat::Json;
    }

    let events = if tokens.is_empty() {
        let mut script = String::new();
        std::io::stdin().read_to_string(&mut script)?;
        session::parse_events(&script)?
    } else {
        tokens
            .iter()
            .map(|token| session::parse_event(token))
            .collect::<Result<Vec<_>, _>>()?
    };

    let transcript = Session::new(config.build_control()).run(events);

    match config.output.format {
        OutputFormat::Json => println!("{}", transcript.to_json()?),
        OutputFormat::Text => print!("{}", transcript),
    }

    Ok(())
}
