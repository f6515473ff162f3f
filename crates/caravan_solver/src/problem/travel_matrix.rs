use rayon::prelude::*;

use crate::problem::location::{Location, LocationIdx};

pub type Distance = f64;

/// Pairwise great-circle distances over the full location sequence, built
/// once per solve and reused for every lookup afterwards.
///
/// Storage is flat: `index = from * num_locations + to`.
#[derive(Debug)]
pub struct DistanceMatrix {
    distances: Vec<Distance>,
    num_locations: usize,
}

impl DistanceMatrix {
    /// Rows are independent, so they are filled in parallel.
    pub fn from_haversine(locations: &[Location]) -> Self {
        let num_locations = locations.len();
        let mut distances: Vec<Distance> = vec![0.0; num_locations * num_locations];

        distances
            .par_chunks_mut(num_locations)
            .enumerate()
            .for_each(|(i, row)| {
                let from = &locations[i];
                for (j, to) in locations.iter().enumerate() {
                    row[j] = from.haversine_distance(to);
                }
            });

        DistanceMatrix {
            distances,
            num_locations,
        }
    }

    #[cfg(test)]
    pub fn from_constant(num_locations: usize, distance: Distance) -> Self {
        DistanceMatrix {
            distances: vec![distance; num_locations * num_locations],
            num_locations,
        }
    }

    #[inline(always)]
    fn index(&self, from: LocationIdx, to: LocationIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    #[inline(always)]
    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        if from == to {
            return 0.0;
        }

        self.distances[self.index(from, to)]
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }
}
