use rayon::prelude::*;
use tracing::{Level, instrument};

use crate::{
    problem::{DEPOT, location::LocationIdx, travel_matrix::DistanceMatrix},
    solver::{params::SolverParams, solution::Trip},
};

/// Minimum gain in meters for a reversal to be applied. Keeps sub-micron
/// float noise on near-tied legs from counting as improvement.
const MIN_IMPROVEMENT: f64 = 1e-6;

/// **Intra-trip 2-opt**
///
/// Reverses the stop sequence between `from` and `to` (inclusive) whenever
/// doing so shortens the tour. This eliminates crossing edges within a
/// single trip; trip membership and therefore capacity are untouched.
///
/// ```text
/// BEFORE:
///    depot ... (prev) --x--> [from] -> ... -> [to] --x--> (next) ... depot
///
/// AFTER (segment reversed):
///    depot ... (prev) -----> [to] -> ... -> [from] -----> (next) ... depot
///
/// Edges removed: (prev->from), (to->next)
/// Edges added:   (prev->to),   (from->next)
/// ```
///
/// The matrix is symmetric, so the legs inside the reversed segment keep
/// their length and the delta reduces to the four boundary edges.
fn reversal_delta(matrix: &DistanceMatrix, stops: &[LocationIdx], from: usize, to: usize) -> f64 {
    let prev = if from == 0 { DEPOT } else { stops[from - 1] };
    let next = if to == stops.len() - 1 {
        DEPOT
    } else {
        stops[to + 1]
    };

    let current = matrix.distance(prev, stops[from]) + matrix.distance(stops[to], next);
    let reversed = matrix.distance(prev, stops[to]) + matrix.distance(stops[from], next);

    reversed - current
}

/// First-improvement 2-opt over one trip: scan every stop pair, apply each
/// strictly improving reversal as found, and repeat until a full pass is
/// clean or the pass cap is hit.
fn improve_trip(matrix: &DistanceMatrix, trip: &mut Trip, max_passes: usize) {
    // With a symmetric matrix a tour of fewer than three stops has the same
    // length in either direction.
    if trip.len() < 3 {
        return;
    }

    for _ in 0..max_passes {
        let mut improved = false;

        for from in 0..trip.len() - 1 {
            for to in from + 1..trip.len() {
                if reversal_delta(matrix, trip.stops(), from, to) < -MIN_IMPROVEMENT {
                    trip.reverse_segment(from, to);
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }
}

/// Trips share no state once constructed, so they are improved in parallel.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn improve_trips(matrix: &DistanceMatrix, trips: &mut [Trip], params: &SolverParams) {
    trips
        .par_iter_mut()
        .for_each(|trip| improve_trip(matrix, trip, params.max_improvement_passes));
}
