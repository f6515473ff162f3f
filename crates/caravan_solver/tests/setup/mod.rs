use caravan_solver::json::types::{JsonLocation, JsonSolveRequest, JsonVehicle};
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub fn request(locations: Vec<(f64, f64, i64)>, vehicles: Vec<(i64, i64)>) -> JsonSolveRequest {
    JsonSolveRequest {
        locations: locations
            .iter()
            .map(|&(lat, lon, demand)| JsonLocation { lat, lon, demand })
            .collect(),
        vehicles: vehicles
            .iter()
            .map(|&(id, capacity)| JsonVehicle { id, capacity })
            .collect(),
    }
}

/// Depot plus `points` delivery points scattered around central Berlin.
/// Capacities always cover the largest demand, so every instance is
/// feasible without a trip bound.
pub fn generate_request(points: usize, vehicles: usize, seed: u64) -> JsonSolveRequest {
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut locations = vec![JsonLocation {
        lat: 52.5200,
        lon: 13.4050,
        demand: 0,
    }];

    for _ in 0..points {
        locations.push(JsonLocation {
            lat: 52.5200 + rng.random_range(-0.1..0.1),
            lon: 13.4050 + rng.random_range(-0.1..0.1),
            demand: rng.random_range(1..=10),
        });
    }

    let vehicles = (0..vehicles)
        .map(|index| JsonVehicle {
            id: index as i64 + 1,
            capacity: rng.random_range(30..=60),
        })
        .collect();

    JsonSolveRequest {
        locations,
        vehicles,
    }
}
