use fxhash::FxHashSet;
use tracing::{Level, instrument};

use crate::{
    error::DataError,
    problem::{
        fleet::Fleet,
        location::{Location, LocationIdx},
        travel_matrix::DistanceMatrix,
        vehicle::{Vehicle, VehicleIdx},
    },
};

/// One solve request's worth of immutable routing data: validated locations,
/// the fleet, and the precomputed distance matrix. Built fresh per request
/// and discarded with the response.
#[derive(Debug)]
pub struct DeliveryProblem {
    locations: Vec<Location>,
    fleet: Fleet,
    matrix: DistanceMatrix,
}

impl DeliveryProblem {
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, index: LocationIdx) -> &Location {
        &self.locations[index]
    }

    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn demand(&self, index: LocationIdx) -> u32 {
        self.locations[index].demand()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn vehicle(&self, index: VehicleIdx) -> &Vehicle {
        self.fleet.vehicle(index)
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    #[inline]
    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> f64 {
        self.matrix.distance(from, to)
    }

    /// Every location index except the depot, ascending.
    pub fn delivery_indices(&self) -> impl Iterator<Item = LocationIdx> + '_ {
        (1..self.locations.len()).map(LocationIdx::new)
    }

    /// Sum of all delivery demands; the depot's declared demand is excluded.
    pub fn total_demand(&self) -> u64 {
        self.delivery_indices()
            .map(|index| u64::from(self.demand(index)))
            .sum()
    }
}

#[derive(Default)]
pub struct DeliveryProblemBuilder {
    locations: Vec<Location>,
    vehicles: Vec<Vehicle>,
}

impl DeliveryProblemBuilder {
    pub fn set_locations(&mut self, locations: Vec<Location>) -> &mut DeliveryProblemBuilder {
        self.locations = locations;
        self
    }

    pub fn set_vehicles(&mut self, vehicles: Vec<Vehicle>) -> &mut DeliveryProblemBuilder {
        self.vehicles = vehicles;
        self
    }

    /// Validates the request and precomputes the distance matrix.
    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn build(self) -> Result<DeliveryProblem, DataError> {
        if self.locations.len() < 2 {
            return Err(DataError::TooFewLocations(self.locations.len()));
        }

        for (index, location) in self.locations.iter().enumerate() {
            if !location.is_finite() {
                return Err(DataError::NonFiniteCoordinate {
                    index,
                    lat: location.lat(),
                    lon: location.lon(),
                });
            }
        }

        if self.vehicles.is_empty() {
            return Err(DataError::EmptyFleet);
        }

        let mut ids: FxHashSet<i64> = FxHashSet::default();
        for vehicle in &self.vehicles {
            if vehicle.capacity() == 0 {
                return Err(DataError::InvalidCapacity {
                    id: vehicle.id(),
                    capacity: 0,
                });
            }

            if !ids.insert(vehicle.id()) {
                return Err(DataError::DuplicateVehicleId(vehicle.id()));
            }
        }

        let matrix = DistanceMatrix::from_haversine(&self.locations);

        Ok(DeliveryProblem {
            locations: self.locations,
            fleet: Fleet::new(self.vehicles),
            matrix,
        })
    }
}
