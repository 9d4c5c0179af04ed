//! Geographic coordinate type.
//!
//! `GeoPoint` stores latitude/longitude as **fixed-point micro-degree
//! integers** (E6), the representation used by the map snapshot itself.
//! Conversion to floating degrees happens in exactly one place
//! ([`GeoPoint::lat`]/[`GeoPoint::lng`]), so two points loaded from the same
//! snapshot coordinates always convert to bit-identical `f64`s.  Exact
//! coincidence checks (`==`) compare the integers directly and never touch
//! floats.

/// A geographic coordinate in fixed-point micro-degrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeoPoint {
    pub lat_e6: i32,
    pub lng_e6: i32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat_e6: i32, lng_e6: i32) -> Self {
        Self { lat_e6, lng_e6 }
    }

    /// Construct from floating degrees, rounding to the nearest micro-degree.
    ///
    /// Mostly useful in tests; snapshot data is already E6.
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat_e6: (lat * 1e6).round() as i32,
            lng_e6: (lng * 1e6).round() as i32,
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(self) -> f64 {
        self.lat_e6 as f64 / 1e6
    }

    /// Longitude in degrees.
    #[inline]
    pub fn lng(self) -> f64 {
        self.lng_e6 as f64 / 1e6
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Used only by the radius pre-filter; accuracy far exceeds what a
    /// km-scale cutoff needs.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371.0; // mean Earth radius, km

        let d_lat = (other.lat() - self.lat()).to_radians();
        let d_lng = (other.lng() - self.lng()).to_radians();

        let lat1 = self.lat().to_radians();
        let lat2 = other.lat().to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat(), self.lng())
    }
}
