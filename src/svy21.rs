use log::warn;

use crate::{
    latlon::LatLon,
    projections::transverse_mercator::SVY21_TM,
    utility::parse_pair,
    Error,
    ParseCoord,
};

/// Representation of a point on the
/// [SVY21](https://en.wikipedia.org/wiki/SVY21) Singapore grid: a northing and
/// easting in meters, relative to the grid's false origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Svy21 {
    #[cfg_attr(feature = "serde", serde(alias = "n"))]
    pub(crate) northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "e"))]
    pub(crate) easting: f64,
}

impl Svy21 {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(northing: f64, easting: f64) -> Svy21 {
        Self {
            northing,
            easting,
        }
    }

    /// Tries to create an SVY21 point from a northing/easting pair.
    ///
    /// Only non-finite values are rejected. The grid has no hard edge, so
    /// points far outside Singapore are accepted and simply convert poorly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSvy21`] if either value is NaN or infinite.
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::Svy21;
    ///
    /// let coord = Svy21::create(38744.572, 28001.642);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.northing(), 38744.572);
    /// assert_eq!(coord.easting(), 28001.642);
    ///
    /// assert!(Svy21::create(f64::NAN, 28001.642).is_err());
    /// assert!(Svy21::create(38744.572, f64::INFINITY).is_err());
    /// ```
    pub fn create(northing: f64, easting: f64) -> Result<Svy21, Error> {
        if !northing.is_finite() {
            let err = format!("Northing {northing} is not a finite value.");
            warn!("Rejected SVY21 coordinate: {err}");
            return Err(Error::InvalidSvy21(err));
        }

        if !easting.is_finite() {
            let err = format!("Easting {easting} is not a finite value.");
            warn!("Rejected SVY21 coordinate: {err}");
            return Err(Error::InvalidSvy21(err));
        }

        Ok(Svy21::new(northing, easting))
    }

    /// Returns the northing, in meters.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns the easting, in meters.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the straight-line grid distance in meters to another point.
    ///
    /// ```
    /// use svy21::Svy21;
    ///
    /// let a = Svy21::create(30000., 20000.).unwrap();
    /// let b = Svy21::create(30003., 20004.).unwrap();
    ///
    /// assert_eq!(a.distance(&b), 5.);
    /// ```
    pub fn distance(&self, other: &Svy21) -> f64 {
        (other.northing - self.northing).hypot(other.easting - self.easting)
    }

    /// Converts from [`LatLon`] to [`Svy21`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::{LatLon, Svy21};
    ///
    /// let coord = LatLon::create(1.3521, 103.8198).unwrap();
    ///
    /// let converted = Svy21::from_latlon(&coord);
    ///
    /// assert!((converted.northing() - 37133.942).abs() < 1e-3);
    /// assert!((converted.easting() - 26495.572).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Svy21 {
        SVY21_TM.from_latlon(value.latitude, value.longitude)
    }

    /// Converts from [`Svy21`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::Svy21;
    ///
    /// let coord = Svy21::create(37133.942, 26495.572).unwrap();
    ///
    /// let converted = coord.to_latlon();
    ///
    /// // Check if the converted coordinate is accurate to 6 decimals
    /// assert!((converted.latitude() - 1.3521).abs() < 1e-6);
    /// assert!((converted.longitude() - 103.8198).abs() < 1e-6);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        SVY21_TM.to_latlon(self.northing, self.easting)
    }
}

impl From<LatLon> for Svy21 {
    fn from(value: LatLon) -> Self {
        Svy21::from_latlon(&value)
    }
}

impl ParseCoord for Svy21 {
    /// Parses `"<northing> <easting>"` (or comma separated).
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (northing, easting) = parse_pair(value).inspect_err(|err| warn!("{err}"))?;

        Svy21::create(northing, easting)
    }
}

impl std::fmt::Display for Svy21 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(
            f,
            "{northing} {easting}",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parses_back() {
        let coord = Svy21::new(30_811.264_296_452_64, 21_362.157_043_860_374);
        let printed = coord.to_string();

        assert_eq!(printed, "30811.26429645264 21362.157043860374");
        assert_eq!(Svy21::parse_coord(&printed).unwrap(), coord);
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(matches!(Svy21::parse_coord("inf 28001.642"), Err(Error::InvalidSvy21(_))));
        assert!(matches!(Svy21::parse_coord("38744.572 NaN"), Err(Error::InvalidSvy21(_))));
    }

    #[test]
    fn conversions_agree_with_free_functions() {
        let coord = LatLon::new(1.28, 104.0);
        let grid = Svy21::from(coord);

        assert_eq!(grid, crate::forward(1.28, 104.0));
        assert_eq!(LatLon::from(grid), crate::inverse(grid.northing, grid.easting));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserializes_short_field_names() {
        let coord: Svy21 = serde_json::from_str(r#"{"n":30000,"e":20000}"#).unwrap();
        assert_eq!(coord, Svy21::new(30_000., 20_000.));
    }

    #[test]
    fn serializes_full_field_names() {
        let json = serde_json::to_string(&Svy21::new(38_744.572, 28_001.642)).unwrap();
        assert_eq!(json, r#"{"northing":38744.572,"easting":28001.642}"#);
    }
}
