use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::DataError,
    problem::{
        delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
        location::Location,
        meters::Meters,
        vehicle::Vehicle,
    },
    solver::solution::{PlannedTrip, Solution},
};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "SolveRequest")]
pub struct JsonSolveRequest {
    /// Index 0 is the depot.
    pub locations: Vec<JsonLocation>,
    pub vehicles: Vec<JsonVehicle>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Location")]
pub struct JsonLocation {
    pub lat: f64,
    pub lon: f64,
    /// Defaults to 0 when omitted, the depot convention.
    #[serde(default)]
    pub demand: i64,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    pub id: i64,
    pub capacity: i64,
}

impl JsonSolveRequest {
    /// Range-checks the integer fields and hands everything to the problem
    /// builder for the structural validation.
    #[instrument(skip_all, level = "debug")]
    pub fn build_problem(self) -> Result<DeliveryProblem, DataError> {
        let locations = self
            .locations
            .iter()
            .enumerate()
            .map(|(index, location)| {
                let demand = u32::try_from(location.demand).map_err(|_| {
                    DataError::InvalidDemand {
                        index,
                        demand: location.demand,
                    }
                })?;

                Ok(Location::from_lat_lon(location.lat, location.lon, demand))
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        let vehicles = self
            .vehicles
            .iter()
            .map(|vehicle| {
                let capacity = u32::try_from(vehicle.capacity)
                    .ok()
                    .filter(|&capacity| capacity > 0)
                    .ok_or(DataError::InvalidCapacity {
                        id: vehicle.id,
                        capacity: vehicle.capacity,
                    })?;

                Ok(Vehicle::new(vehicle.id, capacity))
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        let mut builder = DeliveryProblemBuilder::default();
        builder.set_locations(locations);
        builder.set_vehicles(vehicles);
        builder.build()
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Trip")]
pub struct JsonTrip {
    pub vehicle_id: i64,
    pub trip_id: usize,

    /// Visited location indices in order; the depot is implicit at both
    /// ends and never listed.
    pub route: Vec<usize>,
    pub distance: Meters,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Solution")]
pub struct JsonSolution {
    pub routes: Vec<JsonTrip>,
    pub total_distance: Meters,
}

impl From<&PlannedTrip> for JsonTrip {
    fn from(trip: &PlannedTrip) -> Self {
        JsonTrip {
            vehicle_id: trip.vehicle_id(),
            trip_id: trip.trip_id(),
            route: trip.stops().iter().map(|stop| stop.get()).collect(),
            distance: trip.distance(),
        }
    }
}

impl From<&Solution> for JsonSolution {
    fn from(solution: &Solution) -> Self {
        JsonSolution {
            routes: solution.trips().iter().map(JsonTrip::from).collect(),
            total_distance: solution.total_distance(),
        }
    }
}
