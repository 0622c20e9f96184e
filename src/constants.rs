// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;
// Semi-minor axis b
pub(crate) const WGS84_B: f64 = WGS84_A * (1. - WGS84_F);

// Eccentricity squared, and its square and cube
pub(crate) const E2: f64 = 2. * WGS84_F - WGS84_F * WGS84_F;
pub(crate) const E4: f64 = E2 * E2;
pub(crate) const E6: f64 = E4 * E2;

// SVY21 origin. These are the six-decimal values the published conversions
// were generated with, not the exact 1°22'02.9154" / 103°50'00" survey origin.
#[allow(clippy::unreadable_literal)]
pub(crate) const SVY21_ORIGIN_LAT: f64 = 1.366666;
#[allow(clippy::unreadable_literal)]
pub(crate) const SVY21_ORIGIN_LON: f64 = 103.833333;

// False northing and easting in meters
pub(crate) const SVY21_FALSE_NORTHING: f64 = 38_744.572;
pub(crate) const SVY21_FALSE_EASTING: f64 = 28_001.642;

// SVY21 central scale factor
pub(crate) const SVY21_K0: f64 = 1.0;

// Meridional arc series coefficients
pub(crate) const A0: f64 = 1. - (E2 / 4.) - (3. * E4 / 64.) - (5. * E6 / 256.);
pub(crate) const A2: f64 = (3. / 8.) * (E2 + (E4 / 4.) + (15. * E6 / 128.));
pub(crate) const A4: f64 = (15. / 256.) * (E4 + (3. * E6 / 4.));
pub(crate) const A6: f64 = 35. * E6 / 3072.;
