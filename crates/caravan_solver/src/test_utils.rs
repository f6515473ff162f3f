use crate::problem::{
    delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
    location::Location,
    vehicle::Vehicle,
};

pub fn create_locations(locations: Vec<(f64, f64, u32)>) -> Vec<Location> {
    locations
        .iter()
        .map(|&(lat, lon, demand)| Location::from_lat_lon(lat, lon, demand))
        .collect()
}

pub fn create_test_problem(locations: Vec<Location>, vehicles: Vec<Vehicle>) -> DeliveryProblem {
    let mut builder = DeliveryProblemBuilder::default();

    builder.set_locations(locations);
    builder.set_vehicles(vehicles);

    builder.build().unwrap()
}
