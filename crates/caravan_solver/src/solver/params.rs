#[derive(Clone, Debug)]
pub struct SolverParams {
    /// How many trips a single vehicle may run before it counts as
    /// exhausted. `None` lets a vehicle return to the depot indefinitely.
    pub max_trips_per_vehicle: Option<usize>,

    /// Cap on full 2-opt passes over one trip. Improvement converges long
    /// before this on realistic inputs; the cap only bounds degenerate ones.
    pub max_improvement_passes: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            max_trips_per_vehicle: None,
            max_improvement_passes: 1000,
        }
    }
}
