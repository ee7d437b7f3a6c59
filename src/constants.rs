//! Physical constants and WGS84 ellipsoid definitions.

/// Speed of light in vacuum (m.s⁻¹)
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Earth rotation rate (rad.s⁻¹), as defined by WGS84
pub const EARTH_ROTATION_RATE_RAD_S: f64 = 7.292_115_146_7E-5;

/// WGS84 semi major axis (m)
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS84 flattening
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// WGS84 semi minor axis (m)
pub const WGS84_SEMI_MINOR_AXIS_M: f64 = WGS84_SEMI_MAJOR_AXIS_M * (1.0 - WGS84_FLATTENING);

/// GPS L1 carrier frequency (Hz)
pub const L1_FREQUENCY_HZ: f64 = 1575.42E6;
