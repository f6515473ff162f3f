use crate::define_index_newtype;

define_index_newtype!(VehicleIdx, Vehicle);

/// A vehicle as declared by the caller. Identity is the declared id, never
/// the position in the fleet sequence; ids may be supplied non-sequentially.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: i64,
    capacity: u32,
}

impl Vehicle {
    pub fn new(id: i64, capacity: u32) -> Self {
        Vehicle { id, capacity }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Maximum cumulative demand this vehicle may carry within one trip.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
