pub mod delivery_problem;
pub mod fleet;
pub mod location;
pub mod meters;
pub mod travel_matrix;
pub mod vehicle;

use crate::problem::location::LocationIdx;

/// The depot is always the first entry of the location sequence. Every trip
/// starts and ends there.
pub const DEPOT: LocationIdx = LocationIdx::new(0);
