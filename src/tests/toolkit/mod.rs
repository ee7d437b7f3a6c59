use crate::prelude::{
    Constellation, EphemerisRecord, EphemerisTable, GeodeticPosition, ObservationEpoch, Position,
    SV,
};

/// Day of year used in most scenarios
pub const DAY_OF_YEAR: u16 = 100;

/// Receiver clock (s) used in most scenarios, at the center of [static_ephemeris]
pub const RECEIVER_CLOCK_S: f64 = 1_800.0;

/// Pseudo range (m) used in most scenarios
pub const PSEUDO_RANGE_M: f64 = 20_000.0E3;

pub fn g01() -> SV {
    SV::new(Constellation::GPS, 1)
}

/// Reference receiver location (45.5°N, 10.5°E, 100.5m)
pub fn reference_geodetic() -> GeodeticPosition {
    GeodeticPosition::from_decimal_degrees(45.5, 10.5, 100.5)
}

/// Reference receiver ECEF coordinates
pub fn reference_receiver() -> Position {
    Position::from_geodetic(&reference_geodetic())
}

/// Satellite position, offset in latitude and longitude with respect to
/// the reference receiver, at GNSS altitude
pub fn satellite(dlat_ddeg: f64, dlon_ddeg: f64) -> Position {
    let rx = reference_geodetic();
    Position::from_geodetic(&GeodeticPosition::from_decimal_degrees(
        rx.latitude_ddeg + dlat_ddeg,
        rx.longitude_ddeg + dlon_ddeg,
        20_000.0E3,
    ))
}

/// [EphemerisTable] of a static satellite, sampled every 15' over one hour
pub fn static_ephemeris(sv: SV, position: Position) -> EphemerisTable {
    EphemerisTable::from_records(
        sv,
        (0..5).map(|i| EphemerisRecord::new(i as f64 * 900.0, position)),
    )
}

/// [EphemerisTable] of a satellite on a circular equatorial orbit,
/// sampled every 15' over four hours
pub fn circular_orbit(sv: SV) -> EphemerisTable {
    let radius_m = 26_560.0E3;
    let rate_rad_s = 2.0 * std::f64::consts::PI / 43_082.0;

    EphemerisTable::from_records(
        sv,
        (0..16).map(|i| {
            let t_s = i as f64 * 900.0;
            let angle = rate_rad_s * t_s;
            EphemerisRecord::new(
                t_s,
                Position::new(radius_m * angle.cos(), radius_m * angle.sin(), 0.0),
            )
        }),
    )
}

/// [ObservationEpoch] used in most scenarios
pub fn reference_epoch() -> ObservationEpoch {
    ObservationEpoch::new(DAY_OF_YEAR, RECEIVER_CLOCK_S, RECEIVER_CLOCK_S, PSEUDO_RANGE_M)
}

/// Panics if both values differ by more than `tolerance`
pub fn assert_close(dut: f64, model: f64, tolerance: f64, label: &str) {
    let error = (dut - model).abs();
    assert!(
        error <= tolerance,
        "{}: {} instead of {} (error={})",
        label,
        dut,
        model,
        error
    );
}
