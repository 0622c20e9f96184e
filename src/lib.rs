#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between WGS84 latitude/longitude and the
//! [SVY21](https://en.wikipedia.org/wiki/SVY21) planar grid used in Singapore.
//!
//! The projection (ellipsoid, origin, false offsets and scale factor) is fixed;
//! callers only ever supply or receive coordinates.
//!
//! ```
//! let grid = svy21::forward(1.3521, 103.8198);
//! let coord = svy21::inverse(grid.northing(), grid.easting());
//!
//! assert!((coord.latitude() - 1.3521).abs() < 1e-6);
//! assert!((coord.longitude() - 103.8198).abs() < 1e-6);
//! ```

use thiserror::Error;

pub mod latlon;
pub mod svy21;
pub(crate) mod utility;

pub use latlon::LatLon;
pub use svy21::Svy21;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("SVY21 coords are invalid: {0}")]
    InvalidSvy21(String),
    #[error("Could not parse coordinate: {0}")]
    Parse(String),
}

pub trait ParseCoord {
    /// Parses a coordinate from two numbers separated by whitespace and/or a comma.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the string is not a pair of numbers, or the
    /// type's own validation error if the numbers are out of range.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any coordinate type implementing [`ParseCoord`].
///
/// # Errors
///
/// See [`ParseCoord::parse_coord`].
///
/// # Usage
///
/// ```
/// use svy21::{LatLon, Svy21};
///
/// let coord: LatLon = svy21::from_str("1.3521, 103.8198").unwrap();
/// assert_eq!(coord.latitude(), 1.3521);
///
/// let grid: Svy21 = svy21::from_str("38744.572 28001.642").unwrap();
/// assert_eq!(grid.easting(), 28001.642);
///
/// assert!(svy21::from_str::<_, LatLon>("north of here").is_err());
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Projects a WGS84 latitude/longitude (degrees) onto the SVY21 grid.
///
/// The conversion is total: inputs are not range checked, and coordinates far
/// from Singapore produce values of little practical meaning.
///
/// # Usage
///
/// ```
/// let grid = svy21::forward(1.366666, 103.833333);
///
/// // The projection origin maps onto the false origin
/// assert_eq!(grid.northing(), 38744.572);
/// assert_eq!(grid.easting(), 28001.642);
/// ```
pub fn forward(latitude: f64, longitude: f64) -> Svy21 {
    projections::transverse_mercator::SVY21_TM.from_latlon(latitude, longitude)
}

/// Converts an SVY21 northing/easting (meters) back to WGS84 latitude/longitude.
///
/// Like [`forward`], this never fails and does not range check its inputs.
///
/// # Usage
///
/// ```
/// let coord = svy21::inverse(38744.572, 28001.642);
///
/// assert!((coord.latitude() - 1.366666).abs() < 1e-9);
/// assert!((coord.longitude() - 103.833333).abs() < 1e-9);
/// ```
pub fn inverse(northing: f64, easting: f64) -> LatLon {
    projections::transverse_mercator::SVY21_TM.to_latlon(northing, easting)
}
