use std::fmt::Display;

use log::warn;

use crate::{Error, ParseCoord, svy21::Svy21, utility::parse_pair};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 Latitude/Longitude point. Can be converted
/// to/from [`Svy21`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::create(1.3521, 103.8198);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 1.3521);
    /// assert_eq!(coord.longitude(), 103.8198);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        let err = if !(-90_f64..=90_f64).contains(&lat) {
            format!("Latitude {lat} outside of valid range [-90, 90].")
        } else if !(-180_f64..=180_f64).contains(&lon) {
            format!("Longitude {lon} outside of valid range [-180, 180].")
        } else {
            return Ok(LatLon::new(lat, lon));
        };

        warn!("Rejected lat/lon: {err}");
        Err(Error::InvalidCoord(err))
    }

    /// Returns the latitude value.
    ///
    /// # Example
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::create(1.3521, 103.8198).unwrap();
    /// assert_eq!(coord.latitude(), 1.3521);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    ///
    /// # Example
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::create(1.3521, 103.8198).unwrap();
    /// assert_eq!(coord.longitude(), 103.8198);
    /// ```
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::create(1.3521, 103.8198).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-1.3521, 103.8198).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`Svy21`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::{LatLon, Svy21};
    ///
    /// let coord_svy21 = Svy21::create(37133.942, 26495.572).unwrap();
    ///
    /// let converted = LatLon::from_svy21(&coord_svy21);
    ///
    /// assert!((converted.latitude() - 1.3521).abs() < 1e-6);
    /// assert!((converted.longitude() - 103.8198).abs() < 1e-6);
    /// ```
    pub fn from_svy21(value: &Svy21) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Svy21`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::create(1.3521, 103.8198).unwrap();
    ///
    /// let converted = coord.to_svy21();
    ///
    /// // Check if the converted coordinate is accurate to 3 decimals (same as reference)
    /// assert!((converted.northing() - 37133.942).abs() < 1e-3);
    /// assert!((converted.easting() - 26495.572).abs() < 1e-3);
    /// ```
    pub fn to_svy21(&self) -> Svy21 {
        Svy21::from_latlon(self)
    }
}

impl From<Svy21> for LatLon {
    fn from(value: Svy21) -> Self {
        value.to_latlon()
    }
}

impl ParseCoord for LatLon {
    /// Parses `"<lat> <lon>"` (or comma separated) and validates the range.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lat, lon) = parse_pair(value).inspect_err(|err| warn!("{err}"))?;

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_boundaries() {
        assert!(LatLon::create(90., 180.).is_ok());
        assert!(LatLon::create(-90., -180.).is_ok());
    }

    #[test]
    fn create_rejects_nan() {
        assert!(matches!(LatLon::create(f64::NAN, 103.8), Err(Error::InvalidCoord(_))));
        assert!(matches!(LatLon::create(1.3, f64::NAN), Err(Error::InvalidCoord(_))));
    }

    #[test]
    fn display_parses_back() {
        let coord = LatLon::new(1.294_919_268_848_527_8, 103.773_674_368_858_34);
        let printed = coord.to_string();

        assert_eq!(printed, "1.2949192688485278 103.77367436885834");
        assert_eq!(LatLon::parse_coord(&printed).unwrap(), coord);
    }

    #[test]
    fn parse_validates_range() {
        assert!(matches!(LatLon::parse_coord("91, 103.8"), Err(Error::InvalidCoord(_))));
        assert!(matches!(LatLon::parse_coord("1.3"), Err(Error::Parse(_))));
    }

    #[test]
    fn haversine_is_zero_for_same_point() {
        let coord = LatLon::new(1.3521, 103.8198);
        assert_eq!(coord.haversine(&coord), 0.);
    }

    #[test]
    fn haversine_one_degree_of_longitude_at_equator() {
        let a = LatLon::new(0., 103.);
        let b = LatLon::new(0., 104.);
        assert!((a.haversine(&b) - 111_195.08).abs() < 0.01);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserializes_short_field_names() {
        let coord: LatLon = serde_json::from_str(r#"{"lat":1.3,"lon":103.8}"#).unwrap();
        assert_eq!(coord, LatLon::new(1.3, 103.8));
    }

    #[test]
    fn deserializes_full_field_names() {
        let coord: LatLon =
            serde_json::from_str(r#"{"latitude":1.3,"longitude":103.8}"#).unwrap();
        assert_eq!(coord, LatLon::new(1.3, 103.8));
    }
}
