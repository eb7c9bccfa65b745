//! `bng2en`: convert British National Grid references to eastings/northings
//! and back.
//!
//! ```text
//! $ bng2en NZ20NE SW
//! 425000, 505000
//! ```

use std::process::ExitCode;

use bng_grid::{
    decode_corner, encode, encode_with_quadrant, Coordinate, Corner, GridLabels, GridOptions,
};
use clap::{CommandFactory, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, overriding `-v`.
const LOG_ENV: &str = "BNG_LOG";

/// Convert between BNG grid references and eastings/northings
#[derive(Parser, Debug)]
#[command(name = "bng2en")]
#[command(version)]
#[command(about = "Convert British National Grid references to and from eastings/northings")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Grid reference to decode when no subcommand is given, e.g. NZ20NE
    reference: Option<String>,

    /// Point of the cell to print: SW, NW, NE, SE, MID or SWNE
    #[arg(default_value = "SW")]
    corner: Corner,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// The command to run; a bare reference means `decode`.
    fn into_command(self) -> Option<Command> {
        match (self.command, self.reference) {
            (Some(command), _) => Some(command),
            (None, Some(reference)) => Some(Command::Decode {
                reference,
                corner: self.corner,
            }),
            (None, None) => None,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the easting and northing of a grid reference
    Decode {
        /// Grid reference, e.g. NZ20NE
        reference: String,

        /// Point of the cell to print: SW, NW, NE, SE, MID or SWNE
        #[arg(default_value = "SW")]
        corner: Corner,
    },
    /// Print the grid reference containing an easting and northing
    Encode {
        #[arg(allow_negative_numbers = true)]
        easting: i64,

        #[arg(allow_negative_numbers = true)]
        northing: i64,

        /// Digits per axis (0 = 100km, 5 = 1m)
        #[arg(short, long, default_value = "5")]
        digits: u8,

        /// Append the compass sub-cell the point falls in
        #[arg(short, long)]
        quadrant: bool,
    },
    /// Print the 100km, 50km, 20km, 10km, 5km and 1km grid labels of a point
    Grids {
        #[arg(allow_negative_numbers = true)]
        easting: i64,

        #[arg(allow_negative_numbers = true)]
        northing: i64,

        /// Include the non-standard 2km grid
        #[arg(long = "with-2km")]
        with_2km: bool,

        /// Print a JSON object instead of `column,label` lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.into_command() else {
        // usage goes to stderr; nothing to convert
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };
    debug!(?command, "parsed arguments");

    match run(&command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "conversion failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    // a subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs a command and returns the text to print.
fn run(command: &Command) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Command::Decode { reference, corner } => {
            let point = decode_corner(reference, *corner)?;
            debug!(%reference, ?corner, %point, "decoded");
            Ok(point.to_string())
        }
        Command::Encode {
            easting,
            northing,
            digits,
            quadrant,
        } => {
            let coordinate = Coordinate::try_from_signed(*easting, *northing)?;
            let reference = if *quadrant {
                encode_with_quadrant(coordinate, *digits)?
            } else {
                encode(coordinate, *digits)?
            };
            debug!(%coordinate, digits, %reference, "encoded");
            Ok(reference.to_string())
        }
        Command::Grids {
            easting,
            northing,
            with_2km,
            json,
        } => {
            let coordinate = Coordinate::try_from_signed(*easting, *northing)?;
            let options = GridOptions::default().with_2km(*with_2km);
            let labels = GridLabels::for_coordinate(coordinate, options)?;
            if *json {
                return Ok(serde_json::to_string(&labels)?);
            }
            let lines: Vec<String> = labels
                .columns()
                .into_iter()
                .map(|(column, label)| format!("{},{}", column, label))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
