use crate::{
    cfg::Config,
    coordinates::{ecef_to_geodetic, Position},
    ephemeris::{satellite_position, EphemerisTable},
    epoch::ObservationEpoch,
    error::Error,
    geometry::local_geometry,
    ionosphere::klobuchar_delay,
    troposphere::tropospheric_delay_with_mapping,
};

#[cfg(feature = "log")]
use log::debug;

/// [AtmosphericCorrections] resolved for one satellite observation.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtmosphericCorrections {
    /// Azimuth angle in degrees [0, 360)
    pub azimuth_deg: f64,

    /// Zenith angle in degrees
    pub zenith_deg: f64,

    /// Slant range in meters
    pub slant_range_m: f64,

    /// Ionospheric delay in meters (L1)
    pub ionospheric_delay_m: f64,

    /// Tropospheric dry delay in meters, projected onto the line of sight
    pub tropospheric_dry_delay_m: f64,

    /// Tropospheric wet delay in meters, projected onto the line of sight
    pub tropospheric_wet_delay_m: f64,
}

impl AtmosphericCorrections {
    /// Returns total tropospheric delay in meters
    pub fn tropospheric_delay_m(&self) -> f64 {
        self.tropospheric_dry_delay_m + self.tropospheric_wet_delay_m
    }

    /// Returns total atmospheric delay in meters
    pub fn total_delay_m(&self) -> f64 {
        self.ionospheric_delay_m + self.tropospheric_delay_m()
    }
}

impl From<AtmosphericCorrections> for (f64, f64, f64, f64, f64, f64) {
    fn from(corrections: AtmosphericCorrections) -> Self {
        (
            corrections.azimuth_deg,
            corrections.zenith_deg,
            corrections.slant_range_m,
            corrections.ionospheric_delay_m,
            corrections.tropospheric_dry_delay_m,
            corrections.tropospheric_wet_delay_m,
        )
    }
}

/// Resolves the line of sight geometry and the atmospheric delays
/// of one satellite observation, using the default [Config] preset.
/// See [atmospheric_corrections_with_config] for more information.
pub fn atmospheric_corrections(
    epoch: &ObservationEpoch,
    receiver: &Position,
    ephemeris: &EphemerisTable,
    alpha: &[f64],
    beta: &[f64],
) -> Result<AtmosphericCorrections, Error> {
    atmospheric_corrections_with_config(
        epoch,
        receiver,
        ephemeris,
        alpha,
        beta,
        &Config::default(),
    )
}

/// Resolves the line of sight geometry and the atmospheric delays
/// of one satellite observation.
/// - `epoch`: [ObservationEpoch] (clock readings, day of year, pseudo range)
/// - `receiver`: receiver ECEF [Position]
/// - `ephemeris`: [EphemerisTable] of the observed satellite
/// - `alpha`, `beta`: 8 terms Klobuchar coefficients
/// - `cfg`: [Config] preset
///
/// Evaluation is a single pass over the models, without internal state:
/// any model failure aborts the evaluation and is returned as is.
///
/// The zenith angle is forwarded to both atmospheric models:
/// - in degrees, as the line of sight angle of the Klobuchar model
/// - in radians, to the tropospheric model, along with the geodetic latitude and
///   height truncated to whole degrees and meters.
pub fn atmospheric_corrections_with_config(
    epoch: &ObservationEpoch,
    receiver: &Position,
    ephemeris: &EphemerisTable,
    alpha: &[f64],
    beta: &[f64],
    cfg: &Config,
) -> Result<AtmosphericCorrections, Error> {
    let satellite = satellite_position(
        epoch.receiver_clock_s,
        epoch.pseudorange_m,
        ephemeris,
        receiver,
        cfg,
    )?;

    let geometry = local_geometry(receiver, &satellite)?;

    // zenith angle, used as is by the tropospheric model
    let elevation_rad = geometry.zenith_deg.to_radians();

    let geodetic = ecef_to_geodetic(receiver)?;
    let height_m = geodetic.truncated_height_m();

    let ionospheric_delay_m = klobuchar_delay(
        geodetic.latitude_rad(),
        geodetic.longitude_rad(),
        geometry.zenith_deg,
        geometry.azimuth_deg,
        alpha,
        beta,
        epoch.weather_clock_s,
    )?;

    let troposphere = tropospheric_delay_with_mapping(
        geodetic.truncated_latitude_ddeg(),
        epoch.day_of_year,
        height_m,
        elevation_rad,
        cfg.mapping_function,
    )?;

    #[cfg(feature = "log")]
    debug!(
        "{}: az={}° ({}rad) zen={}° range={}m - iono={}m - zdd={}m zwd={}m mapf={}",
        ephemeris.sv,
        geometry.azimuth_deg,
        geometry.azimuth_deg.to_radians(),
        geometry.zenith_deg,
        geometry.slant_range_m,
        ionospheric_delay_m,
        troposphere.zenith_dry_delay_m,
        troposphere.zenith_wet_delay_m,
        troposphere.mapping_factor,
    );

    Ok(AtmosphericCorrections {
        azimuth_deg: geometry.azimuth_deg,
        zenith_deg: geometry.zenith_deg,
        slant_range_m: geometry.slant_range_m,
        ionospheric_delay_m,
        tropospheric_dry_delay_m: troposphere.dry_delay_m(),
        tropospheric_wet_delay_m: troposphere.wet_delay_m(),
    })
}
