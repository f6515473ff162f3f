use std::path::PathBuf;

use caravan_solver::json::types::{JsonSolution, JsonSolveRequest};
use caravan_solver::solver::{self, params::SolverParams};
use clap::Args;
use comfy_table::Table;
use tracing::info;

#[derive(Args)]
pub struct SolveArgs {
    /// Path to a SolveRequest JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Cap on the number of trips any single vehicle may run
    #[arg(long)]
    max_trips: Option<usize>,

    /// Print the solution as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    let file = std::fs::read_to_string(&args.input)?;
    let request: JsonSolveRequest = serde_json::from_str(&file)?;

    let problem = request.build_problem()?;

    let params = SolverParams {
        max_trips_per_vehicle: args.max_trips,
        ..SolverParams::default()
    };

    let solution = solver::solve(&problem, &params)?;
    let solution = JsonSolution::from(&solution);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["vehicle", "trip", "stops", "distance (m)"]);

    for trip in &solution.routes {
        let stops = trip
            .route
            .iter()
            .map(|stop| stop.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        table.add_row(vec![
            trip.vehicle_id.to_string(),
            trip.trip_id.to_string(),
            stops,
            format!("{:.1}", trip.distance.value()),
        ]);
    }

    println!("{table}");

    info!("total distance: {:.1} m", solution.total_distance.value());

    Ok(())
}
