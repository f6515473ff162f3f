use std::path::PathBuf;

use caravan_solver::json::types::{JsonLocation, JsonSolveRequest, JsonVehicle};
use clap::Args;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::info;

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of delivery points scattered around the depot
    #[arg(short, long, default_value_t = 50)]
    points: usize,

    /// Fleet size
    #[arg(short, long, default_value_t = 3)]
    vehicles: usize,

    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Output file for the request JSON
    #[arg(short, long)]
    out: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<(), anyhow::Error> {
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut locations = vec![JsonLocation {
        lat: 52.5200,
        lon: 13.4050,
        demand: 0,
    }];

    for _ in 0..args.points {
        locations.push(JsonLocation {
            lat: 52.5200 + rng.random_range(-0.1..0.1),
            lon: 13.4050 + rng.random_range(-0.1..0.1),
            demand: rng.random_range(1..=10),
        });
    }

    let vehicles = (0..args.vehicles)
        .map(|index| JsonVehicle {
            id: index as i64 + 1,
            capacity: rng.random_range(30..=60),
        })
        .collect();

    let request = JsonSolveRequest {
        locations,
        vehicles,
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&args.out, serde_json::to_string_pretty(&request)?)?;

    info!(
        "wrote {} points and {} vehicles to {:?}",
        args.points, args.vehicles, args.out
    );

    Ok(())
}
