use std::path::PathBuf;

use caravan_solver::json::schema;
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct SchemaArgs {
    /// Output folder for the schema files
    #[arg(long, short = 'o')]
    out: PathBuf,
}

pub fn run(args: SchemaArgs) -> Result<(), anyhow::Error> {
    std::fs::create_dir_all(&args.out)?;

    std::fs::write(
        args.out.join("solve_request.schema.json"),
        schema::generate_request_schema()?,
    )?;
    std::fs::write(
        args.out.join("solution.schema.json"),
        schema::generate_solution_schema()?,
    )?;

    info!("schemas written to {:?}", args.out);

    Ok(())
}
