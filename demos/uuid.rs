//! Simple command that prints name-based or random UUID strings, or validates one

use clap::{Parser, Subcommand};
use std::{io, io::Write, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "uuid")]
#[command(about = "Generate UUIDv3/v4/v5 strings or validate a UUID string")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the MD5 name-based UUID of a name within a namespace
    V3 {
        /// Namespace UUID, e.g. 6ba7b810-9dad-11d1-80b4-00c04fd430c8
        namespace: String,
        /// Name to hash
        name: String,
    },
    /// Print random UUIDs
    V4 {
        /// Number of UUIDs to print
        #[arg(short = 'n', default_value_t = 1)]
        count: usize,
    },
    /// Print the SHA-1 name-based UUID of a name within a namespace
    V5 {
        /// Namespace UUID, e.g. 6ba7b810-9dad-11d1-80b4-00c04fd430c8
        namespace: String,
        /// Name to hash
        name: String,
    },
    /// Exit successfully if the argument is a valid UUID string
    Validate {
        /// String to check
        candidate: String,
    },
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut buf = io::BufWriter::new(io::stdout());
    match cli.command {
        Commands::V3 { namespace, name } => print_named(&mut buf, uuid345::uuid3(&namespace, name)),
        Commands::V5 { namespace, name } => print_named(&mut buf, uuid345::uuid5(&namespace, name)),
        Commands::V4 { count } => {
            for _ in 0..count {
                writeln!(buf, "{}", uuid345::uuid4())?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { candidate } => {
            if uuid345::is_valid(&candidate) {
                writeln!(buf, "valid")?;
                Ok(ExitCode::SUCCESS)
            } else {
                writeln!(buf, "invalid")?;
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn print_named(
    buf: &mut impl Write,
    result: Result<uuid345::Uuid, uuid345::ParseError>,
) -> io::Result<ExitCode> {
    match result {
        Ok(uuid) => {
            writeln!(buf, "{}", uuid)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: namespace: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
