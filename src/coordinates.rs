use map_3d::{deg2rad, ecef2geodetic, geodetic2ecef, rad2deg, Ellipsoid};

use crate::{constants::WGS84_SEMI_MINOR_AXIS_M, error::Error};

#[cfg(feature = "log")]
use log::trace;

/// ECEF [Position], coordinates in meters.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// X coordinate (m)
    pub x_m: f64,

    /// Y coordinate (m)
    pub y_m: f64,

    /// Z coordinate (m)
    pub z_m: f64,
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x_m - rhs.x_m, self.y_m - rhs.y_m, self.z_m - rhs.z_m)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from(xyz: (f64, f64, f64)) -> Self {
        Self::new(xyz.0, xyz.1, xyz.2)
    }
}

impl From<[f64; 3]> for Position {
    fn from(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }
}

impl Position {
    /// Builds a new ECEF [Position] from coordinates in meters.
    pub fn new(x_m: f64, y_m: f64, z_m: f64) -> Self {
        Self { x_m, y_m, z_m }
    }

    /// Builds a new ECEF [Position] from [GeodeticPosition].
    pub fn from_geodetic(geodetic: &GeodeticPosition) -> Self {
        geodetic_to_ecef(geodetic)
    }

    /// Returns the euclidian norm, in meters.
    pub fn norm(&self) -> f64 {
        (self.x_m.powi(2) + self.y_m.powi(2) + self.z_m.powi(2)).sqrt()
    }

    /// Returns distance to other [Position], in meters.
    pub fn distance(&self, rhs: &Self) -> f64 {
        (*self - *rhs).norm()
    }

    /// Returns true if all coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x_m.is_finite() && self.y_m.is_finite() && self.z_m.is_finite()
    }

    /// Rotates this [Position] about the Z axis, by given angle in radians.
    pub fn rotated_z(&self, angle_rad: f64) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        Self::new(
            cos * self.x_m + sin * self.y_m,
            -sin * self.x_m + cos * self.y_m,
            self.z_m,
        )
    }

    /// Converts this [Position] to [GeodeticPosition].
    /// See [ecef_to_geodetic] for more information.
    pub fn to_geodetic(&self) -> Result<GeodeticPosition, Error> {
        ecef_to_geodetic(self)
    }
}

/// [GeodeticPosition] referenced to the WGS84 ellipsoid.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPosition {
    /// Latitude in decimal degrees
    pub latitude_ddeg: f64,

    /// Longitude in decimal degrees
    pub longitude_ddeg: f64,

    /// Height above ellipsoid in meters
    pub height_m: f64,
}

impl GeodeticPosition {
    /// Builds new [GeodeticPosition] from coordinates in decimal degrees
    /// and height in meters.
    pub fn from_decimal_degrees(latitude_ddeg: f64, longitude_ddeg: f64, height_m: f64) -> Self {
        Self {
            latitude_ddeg,
            longitude_ddeg,
            height_m,
        }
    }

    /// Returns latitude in radians
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_ddeg.to_radians()
    }

    /// Returns longitude in radians
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_ddeg.to_radians()
    }

    /// Returns latitude truncated (toward zero) to whole degrees.
    pub fn truncated_latitude_ddeg(&self) -> i32 {
        self.latitude_ddeg.trunc() as i32
    }

    /// Returns height truncated (toward zero) to whole meters.
    /// ```
    /// use atmos::prelude::GeodeticPosition;
    ///
    /// let geo = GeodeticPosition::from_decimal_degrees(45.0, 10.0, 1234.9);
    /// assert_eq!(geo.truncated_height_m(), 1234);
    ///
    /// let geo = GeodeticPosition::from_decimal_degrees(45.0, 10.0, -3.7);
    /// assert_eq!(geo.truncated_height_m(), -3);
    /// ```
    pub fn truncated_height_m(&self) -> i32 {
        self.height_m.trunc() as i32
    }
}

/// Converts ECEF [Position] to [GeodeticPosition] (WGS84).
/// Fails with [Error::DegenerateInput] on null or non finite coordinates.
pub fn ecef_to_geodetic(position: &Position) -> Result<GeodeticPosition, Error> {
    if !position.is_finite() {
        return Err(Error::DegenerateInput("non finite ECEF coordinates"));
    }

    if position.norm() == 0.0 {
        return Err(Error::DegenerateInput("null ECEF vector"));
    }

    let (x, y, z) = (position.x_m, position.y_m, position.z_m);

    if x == 0.0 && y == 0.0 {
        // polar axis: longitude is undefined
        let latitude_ddeg = if z.is_sign_positive() { 90.0 } else { -90.0 };
        return Ok(GeodeticPosition::from_decimal_degrees(
            latitude_ddeg,
            0.0,
            z.abs() - WGS84_SEMI_MINOR_AXIS_M,
        ));
    }

    let (lat, lon, alt) = ecef2geodetic(x, y, z, Ellipsoid::WGS84);

    #[cfg(feature = "log")]
    trace!("ecef=({}, {}, {}) - lat={}rad lon={}rad alt={}m", x, y, z, lat, lon, alt);

    Ok(GeodeticPosition::from_decimal_degrees(
        rad2deg(lat),
        rad2deg(lon),
        alt,
    ))
}

/// Converts [GeodeticPosition] to ECEF [Position] (WGS84).
pub fn geodetic_to_ecef(geodetic: &GeodeticPosition) -> Position {
    geodetic2ecef(
        deg2rad(geodetic.latitude_ddeg),
        deg2rad(geodetic.longitude_ddeg),
        geodetic.height_m,
        Ellipsoid::WGS84,
    )
    .into()
}
