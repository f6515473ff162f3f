pub mod construct;
pub mod improve;
pub mod params;
pub mod solution;

use tracing::{Level, debug, instrument};

use crate::{
    error::SolveError,
    problem::delivery_problem::DeliveryProblem,
    solver::{params::SolverParams, solution::Solution},
};

/// Full pipeline on one problem: greedy construction, 2-opt improvement per
/// trip, then assembly into the final plan. Pure function of its input; a
/// repeated call with the same problem returns the same plan.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn solve(problem: &DeliveryProblem, params: &SolverParams) -> Result<Solution, SolveError> {
    debug!(
        "solving {} delivery point(s) with {} vehicle(s)",
        problem.num_locations() - 1,
        problem.fleet().len()
    );

    let mut trips = construct::construct_trips(problem, params)?;
    debug!("construction produced {} trip(s)", trips.len());

    improve::improve_trips(problem.matrix(), &mut trips, params);

    let solution = Solution::assemble(problem, trips)?;
    debug!(
        "total distance {:.1} m over {} trip(s)",
        solution.total_distance().value(),
        solution.trips().len()
    );

    Ok(solution)
}
