use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::generate::GenerateArgs;
use crate::schema::SchemaArgs;
use crate::solve::SolveArgs;

mod generate;
mod schema;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a delivery plan from a request file
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Write a randomized solve request to try the solver out
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Write the JSON schemas of the request and solution types
    Schema {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Solve { args }) => solve::run(args)?,
        Some(Commands::Generate { args }) => generate::run(args)?,
        Some(Commands::Schema { args }) => schema::run(args)?,
        None => {}
    }

    Ok(())
}
