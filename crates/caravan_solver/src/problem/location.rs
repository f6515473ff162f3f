use crate::define_index_newtype;

define_index_newtype!(LocationIdx, Location);

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A point on the map together with the demand to be delivered there.
/// The depot carries demand 0 by convention; whatever it declares is never
/// consumed.
#[derive(Debug, Clone)]
pub struct Location {
    point: geo::Point,
    demand: u32,
}

impl Location {
    pub fn from_lat_lon(lat: f64, lon: f64, demand: u32) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
            demand,
        }
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn demand(&self) -> u32 {
        self.demand
    }

    pub fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lon().is_finite()
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, to: &Location) -> f64 {
        let lat1_rad = self.lat().to_radians();
        let lon1_rad = self.lon().to_radians();
        let lat2_rad = to.lat().to_radians();
        let lon2_rad = to.lon().to_radians();

        let delta_lat = lat2_rad - lat1_rad;
        let delta_lon = lon2_rad - lon1_rad;

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One degree of arc on a great circle through the poles or the equator.
    const ONE_DEGREE_METERS: f64 = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;

    #[test]
    fn test_haversine_zero_on_identical_coordinates() {
        let berlin = Location::from_lat_lon(52.5200, 13.4050, 0);
        let same = Location::from_lat_lon(52.5200, 13.4050, 3);

        assert_eq!(berlin.haversine_distance(&same), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_of_longitude_at_equator() {
        let a = Location::from_lat_lon(0.0, 0.0, 0);
        let b = Location::from_lat_lon(0.0, 1.0, 0);

        assert!((a.haversine_distance(&b) - ONE_DEGREE_METERS).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let a = Location::from_lat_lon(10.0, 4.0, 0);
        let b = Location::from_lat_lon(11.0, 4.0, 0);

        assert!((a.haversine_distance(&b) - ONE_DEGREE_METERS).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Location::from_lat_lon(52.5200, 13.4050, 0);
        let b = Location::from_lat_lon(48.8566, 2.3522, 0);

        assert_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
    }

    #[test]
    fn test_haversine_longitude_shrinks_with_latitude() {
        let equator_a = Location::from_lat_lon(0.0, 0.0, 0);
        let equator_b = Location::from_lat_lon(0.0, 1.0, 0);
        let north_a = Location::from_lat_lon(60.0, 0.0, 0);
        let north_b = Location::from_lat_lon(60.0, 1.0, 0);

        let at_equator = equator_a.haversine_distance(&equator_b);
        let at_sixty = north_a.haversine_distance(&north_b);

        // cos(60 deg) = 0.5, so the arc is roughly half as long up there.
        assert!(at_sixty < at_equator * 0.51);
        assert!(at_sixty > at_equator * 0.49);
    }
}
