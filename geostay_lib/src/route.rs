use serde::{Deserialize, Serialize};

use crate::stay::Stay;

pub const EARTH_RADIUS_KM: f64 = 6371.0; // Mean radius of the earth

/// Great-circle distance in km between two (latitude, longitude) pairs given in degrees.
pub fn haversine_distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let d_lat = (p2.0 - p1.0).to_radians();
    let d_lon = (p2.1 - p1.1).to_radians();
    let lat1 = p1.0.to_radians();
    let lat2 = p2.0.to_radians();

    let a = f64::sin(d_lat / 2.).powi(2)
        + f64::cos(lat1) * f64::cos(lat2) * f64::sin(d_lon / 2.).powi(2);
    // Rounding can push `a` just above 1 for antipodal points
    let c = 2. * f64::asin(f64::sqrt(a.min(1.)));

    EARTH_RADIUS_KM * c
}

/// Straight line between two consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: usize,
    pub to: usize,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    pub segments: Vec<Segment>,
    pub total_km: f64,
}

impl Route {
    /// Connects consecutive stays only, in the order given.
    pub fn from_stays(stays: &[Stay]) -> Self {
        let segments: Vec<Segment> = stays
            .windows(2)
            .map(|pair| Segment {
                from: pair[0].number,
                to: pair[1].number,
                distance_km: haversine_distance(pair[0].lat_lng(), pair[1].lat_lng()),
            })
            .collect();

        let total_km = segments.iter().map(|s| s.distance_km).sum();

        Self { segments, total_km }
    }
}
