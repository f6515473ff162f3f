use crate::problem::vehicle::{Vehicle, VehicleIdx};

/// The ordered vehicle sequence of one solve request. Construction walks it
/// in input order; responses report vehicles by their declared ids.
#[derive(Debug, Clone)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Fleet { vehicles }
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Largest single-trip capacity in the fleet, 0 for an empty fleet.
    pub fn max_capacity(&self) -> u32 {
        self.vehicles
            .iter()
            .map(Vehicle::capacity)
            .max()
            .unwrap_or(0)
    }
}
