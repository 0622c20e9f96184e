use std::f64::consts::PI;

use lazy_static::lazy_static;
use log::debug;

use crate::{
    constants::{
        A0, A2, A4, A6, E2, SVY21_FALSE_EASTING, SVY21_FALSE_NORTHING, SVY21_K0,
        SVY21_ORIGIN_LAT, SVY21_ORIGIN_LON, WGS84_A, WGS84_B,
    },
    latlon::LatLon,
    svy21::Svy21,
};

lazy_static! {
    pub(crate) static ref SVY21_TM: TransverseMercator = TransverseMercator::svy21();
}

/// Length of the meridian arc from the equator to `lat` (degrees), in meters.
pub(crate) fn meridional_arc(lat: f64) -> f64 {
    let lat_r = lat.to_radians();

    WGS84_A
        * ((A0 * lat_r)
            - (A2 * (2. * lat_r).sin())
            + (A4 * (4. * lat_r).sin())
            - (A6 * (6. * lat_r).sin()))
}

/// Radius of curvature in the meridian plane, given `sin²(lat)`.
pub(crate) fn radius_meridian(sin2_lat: f64) -> f64 {
    let num = WGS84_A * (1. - E2);
    let denom = (1. - E2 * sin2_lat).powf(1.5);

    num / denom
}

/// Radius of curvature in the prime vertical, given `sin²(lat)`.
pub(crate) fn radius_prime_vertical(sin2_lat: f64) -> f64 {
    let poly = 1. - E2 * sin2_lat;

    WGS84_A / poly.sqrt()
}

pub(crate) struct TransverseMercator {
    k0: f64,
    lon0: f64,
    false_northing: f64,
    false_easting: f64,
    // Meridional arc at the origin latitude
    m0: f64,
    // Meridian quarter-arc constant, scaled to degrees
    g: f64,
    // Foot-point latitude coefficients for sin(2σ), sin(4σ), sin(6σ), sin(8σ)
    fp: [f64; 4],
}

impl TransverseMercator {
    pub fn svy21() -> TransverseMercator {
        let n = (WGS84_A - WGS84_B) / (WGS84_A + WGS84_B);
        let n2 = n.powi(2);
        let n3 = n.powi(3);
        let n4 = n.powi(4);

        let g = WGS84_A
            * (1. - n)
            * (1. - n2)
            * (1. + (9. * n2 / 4.) + (225. * n4 / 64.))
            * (PI / 180.);

        let fp = [
            (3. * n / 2.) - (27. * n3 / 32.),
            (21. * n2 / 16.) - (55. * n4 / 32.),
            151. * n3 / 96.,
            1097. * n4 / 512.,
        ];

        let m0 = meridional_arc(SVY21_ORIGIN_LAT);

        debug!("SVY21 transverse mercator initialised: M0 = {m0}, G = {g}");

        Self {
            k0: SVY21_K0,
            lon0: SVY21_ORIGIN_LON,
            false_northing: SVY21_FALSE_NORTHING,
            false_easting: SVY21_FALSE_EASTING,
            m0,
            g,
            fp,
        }
    }

    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn from_latlon(&self, lat: f64, lon: f64) -> Svy21 {
        let lat_r = lat.to_radians();

        let (sin_lat, cos_lat) = lat_r.sin_cos();
        let sin2_lat = sin_lat * sin_lat;
        let cos2_lat = cos_lat * cos_lat;
        let cos3_lat = cos2_lat * cos_lat;
        let cos4_lat = cos3_lat * cos_lat;
        let cos5_lat = cos4_lat * cos_lat;
        let cos6_lat = cos5_lat * cos_lat;
        let cos7_lat = cos6_lat * cos_lat;

        let rho = radius_meridian(sin2_lat);
        let v = radius_prime_vertical(sin2_lat);
        let psi = v / rho;
        let psi2 = psi * psi;
        let psi3 = psi2 * psi;
        let psi4 = psi3 * psi;

        let t = lat_r.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        let w = (lon - self.lon0).to_radians();
        let w2 = w * w;
        let w4 = w2 * w2;
        let w6 = w4 * w2;
        let w8 = w6 * w2;

        let m = meridional_arc(lat);

        let n_term1 = w2 / 2. * v * sin_lat * cos_lat;
        let n_term2 = w4 / 24. * v * sin_lat * cos3_lat * (4. * psi2 + psi - t2);
        let n_term3 = w6 / 720. * v * sin_lat * cos5_lat
            * ((8. * psi4) * (11. - 24. * t2)
                - (28. * psi3) * (1. - 6. * t2)
                + psi2 * (1. - 32. * t2)
                - psi * 2. * t2
                + t4);
        let n_term4 = w8 / 40320. * v * sin_lat * cos7_lat
            * (1385. - 3111. * t2 + 543. * t4 - t6);
        let northing = self.false_northing
            + self.k0 * (m - self.m0 + n_term1 + n_term2 + n_term3 + n_term4);

        let e_term1 = w2 / 6. * cos2_lat * (psi - t2);
        let e_term2 = w4 / 120. * cos4_lat
            * ((4. * psi3) * (1. - 6. * t2) + psi2 * (1. + 8. * t2) - psi * 2. * t2 + t4);
        let e_term3 = w6 / 5040. * cos6_lat * (61. - 479. * t2 + 179. * t4 - t6);
        let easting = self.false_easting
            + self.k0 * v * w * cos_lat * (1. + e_term1 + e_term2 + e_term3);

        Svy21::new(northing, easting)
    }

    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn to_latlon(&self, northing: f64, easting: f64) -> LatLon {
        let n_prime = northing - self.false_northing;
        let m_prime = self.m0 + n_prime / self.k0;

        // Foot-point latitude, in radians
        let sigma = (m_prime * PI) / (180. * self.g);
        let lat_prime = sigma
            + self.fp[0] * (2. * sigma).sin()
            + self.fp[1] * (4. * sigma).sin()
            + self.fp[2] * (6. * sigma).sin()
            + self.fp[3] * (8. * sigma).sin();

        let sin_lat_prime = lat_prime.sin();
        let sin2_lat_prime = sin_lat_prime * sin_lat_prime;

        let rho_prime = radius_meridian(sin2_lat_prime);
        let v_prime = radius_prime_vertical(sin2_lat_prime);
        let psi_prime = v_prime / rho_prime;
        let psi_prime2 = psi_prime * psi_prime;
        let psi_prime3 = psi_prime2 * psi_prime;
        let psi_prime4 = psi_prime3 * psi_prime;

        let t_prime = lat_prime.tan();
        let t_prime2 = t_prime * t_prime;
        let t_prime4 = t_prime2 * t_prime2;
        let t_prime6 = t_prime4 * t_prime2;

        let e_prime = easting - self.false_easting;
        let x = e_prime / (self.k0 * v_prime);
        let x2 = x * x;
        let x3 = x2 * x;
        let x5 = x3 * x2;
        let x7 = x5 * x2;

        let lat_factor = t_prime / (self.k0 * rho_prime);
        let lat_term1 = lat_factor * ((e_prime * x) / 2.);
        let lat_term2 = lat_factor * ((e_prime * x3) / 24.)
            * ((-4. * psi_prime2) + (9. * psi_prime) * (1. - t_prime2) + (12. * t_prime2));
        let lat_term3 = lat_factor * ((e_prime * x5) / 720.)
            * ((8. * psi_prime4) * (11. - 24. * t_prime2)
                - (12. * psi_prime3) * (21. - 71. * t_prime2)
                + (15. * psi_prime2) * (15. - 98. * t_prime2 + 15. * t_prime4)
                + (180. * psi_prime) * (5. * t_prime2 - 3. * t_prime4)
                + 360. * t_prime4);
        let lat_term4 = lat_factor * ((e_prime * x7) / 40320.)
            * (1385. - 3633. * t_prime2 + 4095. * t_prime4 + 1575. * t_prime6);
        let lat = lat_prime - lat_term1 + lat_term2 - lat_term3 + lat_term4;

        // Secant of the corrected latitude, not the foot-point
        let sec_lat = 1. / lat.cos();
        let lon_term1 = x * sec_lat;
        let lon_term2 = ((x3 * sec_lat) / 6.) * (psi_prime + 2. * t_prime2);
        let lon_term3 = ((x5 * sec_lat) / 120.)
            * ((-4. * psi_prime3) * (1. - 6. * t_prime2)
                + psi_prime2 * (9. - 68. * t_prime2)
                + 72. * psi_prime * t_prime2
                + 24. * t_prime4);
        let lon_term4 = ((x7 * sec_lat) / 5040.)
            * (61. + 662. * t_prime2 + 1320. * t_prime4 + 720. * t_prime6);
        let lon = self.lon0.to_radians() + lon_term1 - lon_term2 + lon_term3 - lon_term4;

        LatLon::new(lat.to_degrees(), lon.to_degrees())
    }
}
