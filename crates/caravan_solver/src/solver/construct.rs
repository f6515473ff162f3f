use fixedbitset::FixedBitSet;
use tracing::{Level, debug, instrument};

use crate::{
    error::InfeasibleError,
    problem::{DEPOT, delivery_problem::DeliveryProblem, location::LocationIdx, vehicle::VehicleIdx},
    solver::{params::SolverParams, solution::Trip},
};

/// A point no vehicle can ever carry makes the whole problem unsolvable,
/// however many trips are allowed.
fn check_every_point_fits_some_vehicle(problem: &DeliveryProblem) -> Result<(), InfeasibleError> {
    let max_capacity = problem.fleet().max_capacity();

    for index in problem.delivery_indices() {
        let demand = problem.demand(index);
        if demand > max_capacity {
            return Err(InfeasibleError::PointExceedsAllCapacities {
                index: index.get(),
                demand,
                max_capacity,
            });
        }
    }

    Ok(())
}

/// With a trip bound in place the fleet offers a finite amount of capacity;
/// demand beyond that is infeasible before any routing starts.
fn check_fleet_capacity(
    problem: &DeliveryProblem,
    params: &SolverParams,
) -> Result<(), InfeasibleError> {
    let Some(max_trips) = params.max_trips_per_vehicle else {
        return Ok(());
    };

    let total_capacity: u64 = problem
        .fleet()
        .vehicles()
        .iter()
        .map(|vehicle| u64::from(vehicle.capacity()) * max_trips as u64)
        .sum();
    let total_demand = problem.total_demand();

    if total_demand > total_capacity {
        return Err(InfeasibleError::DemandExceedsFleetCapacity {
            total_demand,
            total_capacity,
        });
    }

    Ok(())
}

/// Nearest unassigned point whose demand still fits, scanning in ascending
/// index order so that distance ties resolve to the lowest index.
fn nearest_fitting_point(
    problem: &DeliveryProblem,
    unassigned: &FixedBitSet,
    position: LocationIdx,
    remaining_capacity: u32,
) -> Option<LocationIdx> {
    let mut best: Option<(LocationIdx, f64)> = None;

    for index in unassigned.ones().map(LocationIdx::new) {
        if problem.demand(index) > remaining_capacity {
            continue;
        }

        let distance = problem.distance(position, index);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Greedy nearest-neighbor construction with capacity-triggered trip
/// splitting.
///
/// Vehicles take turns in input order, each opening at most one trip per
/// round. Within a trip the vehicle repeatedly drives to the nearest
/// unassigned point that still fits its remaining capacity; when nothing
/// fits, the trip closes and the vehicle rejoins the rotation for its next
/// trip (`trip_id` counting up from 0). A round in which no vehicle managed
/// to open a trip means the fleet is exhausted.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn construct_trips(
    problem: &DeliveryProblem,
    params: &SolverParams,
) -> Result<Vec<Trip>, InfeasibleError> {
    check_every_point_fits_some_vehicle(problem)?;
    check_fleet_capacity(problem, params)?;

    let num_locations = problem.num_locations();
    let mut unassigned = FixedBitSet::with_capacity(num_locations);
    unassigned.insert_range(1..num_locations);

    let vehicles = problem.fleet().vehicles();
    let mut trips_taken = vec![0usize; vehicles.len()];
    let mut trips: Vec<Trip> = Vec::new();

    while !unassigned.is_clear() {
        let mut progressed = false;

        for (vehicle_index, vehicle) in vehicles.iter().enumerate() {
            if unassigned.is_clear() {
                break;
            }

            if let Some(max_trips) = params.max_trips_per_vehicle {
                if trips_taken[vehicle_index] >= max_trips {
                    continue;
                }
            }

            let mut trip = Trip::new(VehicleIdx::new(vehicle_index), trips_taken[vehicle_index]);
            let mut position = DEPOT;
            let mut remaining_capacity = vehicle.capacity();

            while let Some(next) =
                nearest_fitting_point(problem, &unassigned, position, remaining_capacity)
            {
                unassigned.remove(next.get());
                remaining_capacity -= problem.demand(next);
                trip.push_stop(next);
                position = next;
            }

            if trip.is_empty() {
                continue;
            }

            debug!(
                "vehicle {} closed trip {} with {} stop(s)",
                vehicle.id(),
                trip.trip_id(),
                trip.len()
            );

            trips_taken[vehicle_index] += 1;
            trips.push(trip);
            progressed = true;
        }

        if !progressed {
            return Err(InfeasibleError::FleetExhausted {
                unassigned: unassigned.count_ones(..),
            });
        }
    }

    Ok(trips)
}
