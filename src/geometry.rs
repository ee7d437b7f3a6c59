use map_3d::{ecef2aer, rad2deg, Ellipsoid};

use crate::{coordinates::Position, error::Error};

#[cfg(feature = "log")]
use log::trace;

/// [LocalGeometry] of the line of sight, as seen from the receiver.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalGeometry {
    /// Azimuth angle, clockwise from north, in degrees [0, 360)
    pub azimuth_deg: f64,

    /// Zenith angle, in degrees [0, 180]
    pub zenith_deg: f64,

    /// Slant range, in meters
    pub slant_range_m: f64,
}

impl LocalGeometry {
    /// Returns elevation angle above local horizon, in degrees
    pub fn elevation_deg(&self) -> f64 {
        90.0 - self.zenith_deg
    }

    /// Returns true if the satellite is above the local horizon
    pub fn is_visible(&self) -> bool {
        self.zenith_deg <= 90.0
    }
}

/// Resolves the [LocalGeometry] of the receiver to satellite line of sight,
/// in the local (East, North, Up) frame of the receiver.
/// Fails with [Error::DegenerateInput] when the receiver position is degenerate,
/// or when both positions coincide.
pub fn local_geometry(receiver: &Position, satellite: &Position) -> Result<LocalGeometry, Error> {
    let geodetic = receiver.to_geodetic()?;

    let los = *satellite - *receiver;
    if los.norm() == 0.0 || !los.is_finite() {
        return Err(Error::DegenerateInput("null line of sight"));
    }

    let (azimuth_rad, elevation_rad, slant_range_m) = ecef2aer(
        satellite.x_m,
        satellite.y_m,
        satellite.z_m,
        geodetic.latitude_rad(),
        geodetic.longitude_rad(),
        geodetic.height_m,
        Ellipsoid::WGS84,
    );

    let mut azimuth_deg = rad2deg(azimuth_rad).rem_euclid(360.0);
    if azimuth_deg >= 360.0 {
        // rem_euclid rounding of tiny negative angles
        azimuth_deg = 0.0;
    }

    let zenith_deg = (90.0 - rad2deg(elevation_rad)).clamp(0.0, 180.0);

    #[cfg(feature = "log")]
    trace!(
        "azimuth={}° zenith={}° range={}m",
        azimuth_deg,
        zenith_deg,
        slant_range_m
    );

    Ok(LocalGeometry {
        azimuth_deg,
        zenith_deg,
        slant_range_m,
    })
}
