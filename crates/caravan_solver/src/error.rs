use thiserror::Error;

/// Malformed input. Surfaced before any routing work starts; never retried.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("a depot and at least one delivery point are required, got {0} location(s)")]
    TooFewLocations(usize),

    #[error("location {index} has a non-finite coordinate ({lat}, {lon})")]
    NonFiniteCoordinate { index: usize, lat: f64, lon: f64 },

    #[error("location {index} has invalid demand {demand}, expected an integer in [0, {max}]", max = u32::MAX)]
    InvalidDemand { index: usize, demand: i64 },

    #[error("fleet is empty, at least one vehicle is required")]
    EmptyFleet,

    #[error("vehicle {id} has invalid capacity {capacity}, expected an integer in [1, {max}]", max = u32::MAX)]
    InvalidCapacity { id: i64, capacity: i64 },

    #[error("vehicle id {0} is declared more than once")]
    DuplicateVehicleId(i64),
}

/// Structurally valid input that no assignment of trips can satisfy.
#[derive(Error, Debug)]
pub enum InfeasibleError {
    #[error(
        "delivery point {index} has demand {demand}, more than any vehicle can carry (largest capacity is {max_capacity})"
    )]
    PointExceedsAllCapacities {
        index: usize,
        demand: u32,
        max_capacity: u32,
    },

    #[error(
        "total demand {total_demand} exceeds the fleet's capacity {total_capacity} over all permitted trips"
    )]
    DemandExceedsFleetCapacity {
        total_demand: u64,
        total_capacity: u64,
    },

    #[error("{unassigned} delivery point(s) left unassigned after every vehicle ran out of trips")]
    FleetExhausted { unassigned: usize },
}

/// A finished plan that violates its own invariants. Indicates a solver bug,
/// not a caller error.
#[derive(Error, Debug)]
pub enum InvariantViolation {
    #[error("coverage check failed: {missing} delivery point(s) missing, {duplicated} duplicated")]
    Coverage { missing: usize, duplicated: usize },
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Infeasible(#[from] InfeasibleError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
