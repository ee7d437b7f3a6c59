//! UNB3 / RTCA-MOPS tropospheric model
use std::f64::consts::PI;

use crate::{error::Error, mapf::MappingFunction};

#[cfg(feature = "log")]
use log::debug;

/// Lowest receiver height (m) this model supports
pub const MIN_HEIGHT_M: i32 = -1_000;

/// Highest receiver height (m) this model supports
pub const MAX_HEIGHT_M: i32 = 20_000;

const K1: f64 = 77.604;
const K3: f64 = 382_000.0;
const RD: f64 = 287.054;
const GM: f64 = 9.784;
const G: f64 = 9.80665;

#[derive(Copy, Clone, Debug)]
enum UNB3Param {
    // pressure in mBar
    Pressure = 0,
    // temperature in Kelvin
    Temperature = 1,
    // water vapour pressure in mBar
    WaterVapourPressure = 2,
    // beta is temperature lapse rate (Kelvin/m)
    Beta = 3,
    // lambda is wvp height factor (N/A)
    Lambda = 4,
}

type LookUpTable = [(f64, [f64; 5]); 5];

const ANNUAL_AVERAGE: LookUpTable = [
    (15.0, [1013.25, 299.65, 26.31, 6.30E-3, 2.77]),
    (30.0, [1017.25, 294.15, 21.79, 6.05E-3, 3.15]),
    (45.0, [1015.75, 283.15, 11.66, 5.58E-3, 2.57]),
    (60.0, [1011.75, 272.15, 6.78, 5.39E-3, 1.81]),
    (75.0, [1013.00, 263.65, 4.11, 4.53E-3, 1.55]),
];

const SEASONAL_AMPLITUDE: LookUpTable = [
    (15.0, [0.0, 0.0, 0.0, 0.0, 0.0]),
    (30.0, [-3.75, 7.0, 8.85, 0.25E-3, 0.33]),
    (45.0, [-2.25, 11.0, 7.24, 0.32E-3, 0.46]),
    (60.0, [-1.75, 15.0, 5.36, 0.81E-3, 0.74]),
    (75.0, [-0.50, 14.5, 3.39, 0.62E-3, 0.30]),
];

/// Linear interpolation of the look up table, in absolute latitude.
fn look_up(lut: &LookUpTable, prm: UNB3Param, lat_ddeg: f64) -> f64 {
    let prm = prm as usize;
    let lat = lat_ddeg.abs();

    if lat <= lut[0].0 {
        return lut[0].1[prm];
    }

    if lat >= lut[4].0 {
        return lut[4].1[prm];
    }

    let index = ((lat - lut[0].0) / 15.0).floor() as usize;
    let (lat_0, values_0) = lut[index];
    let (_, values_1) = lut[index + 1];

    values_0[prm] + (values_1[prm] - values_0[prm]) * (lat - lat_0) / 15.0
}

/// Meteorological parameter at given latitude and day of year,
/// including its seasonal variation.
fn unb3_parameter(prm: UNB3Param, lat_ddeg: f64, day_of_year: f64) -> f64 {
    let dmin = if lat_ddeg.is_sign_negative() {
        211.0
    } else {
        28.0
    };

    let average = look_up(&ANNUAL_AVERAGE, prm, lat_ddeg);
    let amplitude = look_up(&SEASONAL_AMPLITUDE, prm, lat_ddeg);
    average - amplitude * ((day_of_year - dmin) * 2.0 * PI / 365.25).cos()
}

/// [TroposphericDelay] components.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TroposphericDelay {
    /// Zenith dry (hydrostatic) delay (m)
    pub zenith_dry_delay_m: f64,

    /// Zenith wet delay (m)
    pub zenith_wet_delay_m: f64,

    /// Mapping factor, projecting zenith delays onto the line of sight
    pub mapping_factor: f64,
}

impl TroposphericDelay {
    /// Returns slant dry delay (m)
    pub fn dry_delay_m(&self) -> f64 {
        self.zenith_dry_delay_m * self.mapping_factor
    }

    /// Returns slant wet delay (m)
    pub fn wet_delay_m(&self) -> f64 {
        self.zenith_wet_delay_m * self.mapping_factor
    }

    /// Returns total slant delay (m)
    pub fn total_delay_m(&self) -> f64 {
        self.dry_delay_m() + self.wet_delay_m()
    }
}

/// Evaluates zenith dry and wet delays, at sea level, then at desired height.
fn zenith_delays(lat_ddeg: f64, day_of_year: f64, height_m: f64) -> (f64, f64) {
    let p = unb3_parameter(UNB3Param::Pressure, lat_ddeg, day_of_year);
    let t = unb3_parameter(UNB3Param::Temperature, lat_ddeg, day_of_year);
    let e = unb3_parameter(UNB3Param::WaterVapourPressure, lat_ddeg, day_of_year);
    let beta = unb3_parameter(UNB3Param::Beta, lat_ddeg, day_of_year);
    let lambda = unb3_parameter(UNB3Param::Lambda, lat_ddeg, day_of_year);

    let z0_zdd = 1.0E-6 * K1 * RD * p / GM;
    let z0_zwd = 1.0E-6 * K3 * RD / (GM * (lambda + 1.0) - beta * RD) * e / t;

    let value = 1.0 - beta * height_m / t;

    let zdd = value.powf(G / RD / beta) * z0_zdd;
    let zwd = value.powf((lambda + 1.0) * G / RD / beta - 1.0) * z0_zwd;

    #[cfg(feature = "log")]
    debug!(
        "unb3 - zdd(h=0) {} zwd(h=0) {} zdd(h={}) {} zwd(h={}) {}",
        z0_zdd, z0_zwd, height_m, zdd, height_m, zwd
    );

    (zdd, zwd)
}

/// Tropospheric delay model, using the default [MappingFunction].
/// - `latitude_ddeg`: receiver latitude in whole degrees
/// - `day_of_year`: 1..=366
/// - `height_m`: receiver height in whole meters
/// - `zenith_rad`: zenith angle of the line of sight (rad)
///
/// Fails with [Error::OutOfRange] outside the model domain.
pub fn tropospheric_delay(
    latitude_ddeg: i32,
    day_of_year: u16,
    height_m: i32,
    zenith_rad: f64,
) -> Result<TroposphericDelay, Error> {
    tropospheric_delay_with_mapping(
        latitude_ddeg,
        day_of_year,
        height_m,
        zenith_rad,
        MappingFunction::default(),
    )
}

/// Tropospheric delay model, using desired [MappingFunction].
/// See [tropospheric_delay] for more information.
pub fn tropospheric_delay_with_mapping(
    latitude_ddeg: i32,
    day_of_year: u16,
    height_m: i32,
    zenith_rad: f64,
    mapping_function: MappingFunction,
) -> Result<TroposphericDelay, Error> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::OutOfRange {
            parameter: "day_of_year",
            value: day_of_year as f64,
        });
    }

    if !(-90..=90).contains(&latitude_ddeg) {
        return Err(Error::OutOfRange {
            parameter: "latitude_ddeg",
            value: latitude_ddeg as f64,
        });
    }

    if !(MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&height_m) {
        return Err(Error::OutOfRange {
            parameter: "height_m",
            value: height_m as f64,
        });
    }

    let (zenith_dry_delay_m, zenith_wet_delay_m) =
        zenith_delays(latitude_ddeg as f64, day_of_year as f64, height_m as f64);

    Ok(TroposphericDelay {
        zenith_dry_delay_m,
        zenith_wet_delay_m,
        mapping_factor: mapping_function.eval(zenith_rad),
    })
}
