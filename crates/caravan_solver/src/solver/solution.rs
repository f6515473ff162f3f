use fxhash::FxHashSet;
use tracing::error;

use crate::{
    error::InvariantViolation,
    problem::{
        DEPOT, delivery_problem::DeliveryProblem, location::LocationIdx, meters::Meters,
        travel_matrix::DistanceMatrix, vehicle::VehicleIdx,
    },
};

/// One out-and-back journey of a single vehicle. `stops` holds only the
/// visited delivery points in visiting order; the depot is implicit at both
/// ends. Invariant: the stop demands sum to at most the vehicle's capacity.
#[derive(Debug, Clone)]
pub struct Trip {
    vehicle: VehicleIdx,
    trip_id: usize,
    stops: Vec<LocationIdx>,
}

impl Trip {
    pub(crate) fn new(vehicle: VehicleIdx, trip_id: usize) -> Self {
        Trip {
            vehicle,
            trip_id,
            stops: Vec::new(),
        }
    }

    pub fn vehicle(&self) -> VehicleIdx {
        self.vehicle
    }

    /// Sequence number of this trip for its vehicle, starting at 0.
    pub fn trip_id(&self) -> usize {
        self.trip_id
    }

    pub fn stops(&self) -> &[LocationIdx] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub(crate) fn push_stop(&mut self, stop: LocationIdx) {
        self.stops.push(stop);
    }

    pub(crate) fn reverse_segment(&mut self, from: usize, to: usize) {
        self.stops[from..=to].reverse();
    }

    /// Tour length: depot to first stop, consecutive legs, return leg.
    pub fn distance(&self, matrix: &DistanceMatrix) -> f64 {
        let mut total = 0.0;
        let mut position = DEPOT;

        for &stop in &self.stops {
            total += matrix.distance(position, stop);
            position = stop;
        }

        total + matrix.distance(position, DEPOT)
    }

    pub fn total_demand(&self, problem: &DeliveryProblem) -> u64 {
        self.stops
            .iter()
            .map(|&stop| u64::from(problem.demand(stop)))
            .sum()
    }
}

/// A finished trip with its vehicle resolved to the declared id and its
/// distance fixed for the response.
#[derive(Debug, Clone)]
pub struct PlannedTrip {
    vehicle_id: i64,
    trip_id: usize,
    stops: Vec<LocationIdx>,
    distance: Meters,
}

impl PlannedTrip {
    pub fn vehicle_id(&self) -> i64 {
        self.vehicle_id
    }

    pub fn trip_id(&self) -> usize {
        self.trip_id
    }

    pub fn stops(&self) -> &[LocationIdx] {
        &self.stops
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }
}

/// The final plan. Trips are ordered by declared vehicle id, then trip id;
/// `total_distance` is the exact sum of the trip distances.
#[derive(Debug, Clone)]
pub struct Solution {
    trips: Vec<PlannedTrip>,
    total_distance: Meters,
}

impl Solution {
    pub fn trips(&self) -> &[PlannedTrip] {
        &self.trips
    }

    pub fn total_distance(&self) -> Meters {
        self.total_distance
    }

    /// Orders the trips, fixes each distance, and sums the total. Coverage
    /// is re-checked before anything is returned; a failure here means a
    /// solver bug and is reported as such rather than as a bad plan.
    pub(crate) fn assemble(
        problem: &DeliveryProblem,
        mut trips: Vec<Trip>,
    ) -> Result<Solution, InvariantViolation> {
        check_coverage(problem, &trips)?;

        trips.sort_by_key(|trip| (problem.vehicle(trip.vehicle()).id(), trip.trip_id()));

        let trips: Vec<PlannedTrip> = trips
            .into_iter()
            .map(|trip| {
                let distance = Meters::new(trip.distance(problem.matrix()));

                PlannedTrip {
                    vehicle_id: problem.vehicle(trip.vehicle()).id(),
                    trip_id: trip.trip_id(),
                    stops: trip.stops,
                    distance,
                }
            })
            .collect();

        let total_distance = trips.iter().map(|trip| trip.distance).sum();

        Ok(Solution {
            trips,
            total_distance,
        })
    }
}

fn check_coverage(problem: &DeliveryProblem, trips: &[Trip]) -> Result<(), InvariantViolation> {
    let mut seen: FxHashSet<LocationIdx> = FxHashSet::default();
    let mut duplicated = 0usize;

    for trip in trips {
        for &stop in trip.stops() {
            if !seen.insert(stop) {
                duplicated += 1;
            }
        }
    }

    let missing = problem
        .delivery_indices()
        .filter(|index| !seen.contains(index))
        .count();

    if missing > 0 || duplicated > 0 {
        let violation = InvariantViolation::Coverage {
            missing,
            duplicated,
        };
        error!("solution rejected: {}", violation);
        return Err(violation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::vehicle::Vehicle, test_utils};

    fn trip_with_stops(vehicle: usize, trip_id: usize, stops: Vec<usize>) -> Trip {
        let mut trip = Trip::new(VehicleIdx::new(vehicle), trip_id);
        for stop in stops {
            trip.push_stop(LocationIdx::new(stop));
        }
        trip
    }

    #[test]
    fn test_trip_distance_includes_return_leg() {
        let locations = test_utils::create_locations(vec![
            (0.0, 0.0, 0),
            (0.0, 1.0, 1),
            (0.0, 2.0, 1),
        ]);
        let matrix = DistanceMatrix::from_haversine(&locations);
        let trip = trip_with_stops(0, 0, vec![1, 2]);

        let out = matrix.distance(DEPOT, LocationIdx::new(1));
        let middle = matrix.distance(LocationIdx::new(1), LocationIdx::new(2));
        let back = matrix.distance(LocationIdx::new(2), DEPOT);

        assert_eq!(trip.distance(&matrix), out + middle + back);
    }

    #[test]
    fn test_trip_distance_counts_one_leg_per_hop() {
        // k stops mean k+1 legs of the tour, depot legs included.
        let matrix = DistanceMatrix::from_constant(5, 100.0);
        let trip = trip_with_stops(0, 0, vec![1, 2, 3, 4]);

        assert_eq!(trip.distance(&matrix), 500.0);
    }

    #[test]
    fn test_assemble_orders_by_declared_vehicle_id() {
        let problem = test_utils::create_test_problem(
            test_utils::create_locations(vec![
                (0.0, 0.0, 0),
                (0.0, 1.0, 1),
                (0.0, 2.0, 1),
                (0.0, 3.0, 1),
            ]),
            vec![Vehicle::new(9, 10), Vehicle::new(2, 10)],
        );

        // Vehicle at index 0 declares id 9, index 1 declares id 2.
        let trips = vec![
            trip_with_stops(0, 0, vec![1]),
            trip_with_stops(1, 1, vec![3]),
            trip_with_stops(1, 0, vec![2]),
        ];

        let solution = Solution::assemble(&problem, trips).unwrap();

        let order: Vec<(i64, usize)> = solution
            .trips()
            .iter()
            .map(|trip| (trip.vehicle_id(), trip.trip_id()))
            .collect();

        assert_eq!(order, vec![(2, 0), (2, 1), (9, 0)]);
    }

    #[test]
    fn test_assemble_total_is_sum_of_trip_distances() {
        let problem = test_utils::create_test_problem(
            test_utils::create_locations(vec![(0.0, 0.0, 0), (0.0, 1.0, 1), (1.0, 0.0, 1)]),
            vec![Vehicle::new(1, 10)],
        );

        let trips = vec![
            trip_with_stops(0, 0, vec![1]),
            trip_with_stops(0, 1, vec![2]),
        ];

        let solution = Solution::assemble(&problem, trips).unwrap();

        let summed: Meters = solution.trips().iter().map(PlannedTrip::distance).sum();
        assert_eq!(solution.total_distance(), summed);
        assert!(!solution.total_distance().is_zero());
    }

    #[test]
    fn test_assemble_rejects_missing_stop() {
        let problem = test_utils::create_test_problem(
            test_utils::create_locations(vec![(0.0, 0.0, 0), (0.0, 1.0, 1), (1.0, 0.0, 1)]),
            vec![Vehicle::new(1, 10)],
        );

        let trips = vec![trip_with_stops(0, 0, vec![1])];

        let error = Solution::assemble(&problem, trips).unwrap_err();
        assert!(matches!(
            error,
            InvariantViolation::Coverage {
                missing: 1,
                duplicated: 0
            }
        ));
    }

    #[test]
    fn test_assemble_rejects_duplicated_stop() {
        let problem = test_utils::create_test_problem(
            test_utils::create_locations(vec![(0.0, 0.0, 0), (0.0, 1.0, 1), (1.0, 0.0, 1)]),
            vec![Vehicle::new(1, 10), Vehicle::new(2, 10)],
        );

        let trips = vec![
            trip_with_stops(0, 0, vec![1, 2]),
            trip_with_stops(1, 0, vec![2]),
        ];

        let error = Solution::assemble(&problem, trips).unwrap_err();
        assert!(matches!(
            error,
            InvariantViolation::Coverage {
                missing: 0,
                duplicated: 1
            }
        ));
    }
}
