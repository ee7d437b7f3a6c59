use crate::{
    prelude::{
        atmospheric_corrections, atmospheric_corrections_with_config, ecef_to_geodetic,
        klobuchar_delay, tropospheric_delay, tropospheric_delay_with_mapping, Config,
        EphemerisTable, GeodeticPosition, MappingFunction, ObservationEpoch, Position,
    },
    tests::toolkit::{
        assert_close, circular_orbit, g01, reference_epoch, reference_receiver, satellite,
        static_ephemeris, DAY_OF_YEAR, PSEUDO_RANGE_M, RECEIVER_CLOCK_S,
    },
};

#[cfg(feature = "log")]
use crate::tests::init_logger;

const BROADCAST_ALPHA: [f64; 8] = [
    1.1176E-8, 7.4506E-9, -5.9605E-8, -5.9605E-8, 0.0, 0.0, 0.0, 0.0,
];

const BROADCAST_BETA: [f64; 8] = [
    9.0112E4, 4.9152E4, -1.3107E5, -3.2768E5, 0.0, 0.0, 0.0, 0.0,
];

#[test]
fn overhead_satellite() {
    #[cfg(feature = "log")]
    init_logger();

    let receiver = reference_receiver();
    let ephemeris = static_ephemeris(g01(), satellite(0.0, 0.0));

    let corrections = atmospheric_corrections(
        &reference_epoch(),
        &receiver,
        &ephemeris,
        &[0.0; 8],
        &[0.0; 8],
    )
    .unwrap();

    assert!(corrections.azimuth_deg >= 0.0 && corrections.azimuth_deg < 360.0);
    assert!(corrections.zenith_deg < 0.01, "zenith: {}", corrections.zenith_deg);
    assert_close(corrections.slant_range_m, PSEUDO_RANGE_M - 100.5, 1.0, "slant range");

    // null coefficients: no ionospheric model
    assert_eq!(corrections.ionospheric_delay_m, 0.0);

    // mapping factor is 1 at zenith: slant delays match zenith delays
    let zenith = tropospheric_delay(45, DAY_OF_YEAR, 100, 0.0).unwrap();

    assert!(corrections.tropospheric_dry_delay_m > 2.0);
    assert!(corrections.tropospheric_wet_delay_m > 0.0);

    assert_close(
        corrections.tropospheric_dry_delay_m,
        zenith.zenith_dry_delay_m,
        1.0E-6,
        "dry delay",
    );

    assert_close(
        corrections.tropospheric_wet_delay_m,
        zenith.zenith_wet_delay_m,
        1.0E-6,
        "wet delay",
    );

    assert_close(
        corrections.total_delay_m(),
        zenith.total_delay_m(),
        1.0E-6,
        "total delay",
    );
}

#[test]
fn tuple_conversion() {
    let corrections = atmospheric_corrections(
        &reference_epoch(),
        &reference_receiver(),
        &static_ephemeris(g01(), satellite(-20.0, 15.0)),
        &BROADCAST_ALPHA,
        &BROADCAST_BETA,
    )
    .unwrap();

    let (az, zen, slant, iono, dry, wet): (f64, f64, f64, f64, f64, f64) = corrections.into();

    assert_eq!(az, corrections.azimuth_deg);
    assert_eq!(zen, corrections.zenith_deg);
    assert_eq!(slant, corrections.slant_range_m);
    assert_eq!(iono, corrections.ionospheric_delay_m);
    assert_eq!(dry, corrections.tropospheric_dry_delay_m);
    assert_eq!(wet, corrections.tropospheric_wet_delay_m);
    assert_eq!(corrections.tropospheric_delay_m(), dry + wet);
}

#[test]
fn deterministic_evaluation() {
    let receiver = reference_receiver();
    let ephemeris = static_ephemeris(g01(), satellite(12.0, -30.0));

    let first = atmospheric_corrections(
        &reference_epoch(),
        &receiver,
        &ephemeris,
        &BROADCAST_ALPHA,
        &BROADCAST_BETA,
    )
    .unwrap();

    for _ in 0..10 {
        let other = atmospheric_corrections(
            &reference_epoch(),
            &receiver,
            &ephemeris,
            &BROADCAST_ALPHA,
            &BROADCAST_BETA,
        )
        .unwrap();

        assert_eq!(first, other);
    }
}

#[test]
fn angles_domain() {
    let receiver = reference_receiver();

    for dlat in [-60.0, -25.0, -5.0, 0.0, 5.0, 25.0, 40.0] {
        for dlon in [-120.0, -45.0, -1.0, 0.0, 1.0, 45.0, 120.0] {
            let ephemeris = static_ephemeris(g01(), satellite(dlat, dlon));

            let corrections = atmospheric_corrections(
                &reference_epoch(),
                &receiver,
                &ephemeris,
                &BROADCAST_ALPHA,
                &BROADCAST_BETA,
            )
            .unwrap();

            assert!(
                corrections.azimuth_deg >= 0.0 && corrections.azimuth_deg < 360.0,
                "azimuth {} (dlat={}, dlon={})",
                corrections.azimuth_deg,
                dlat,
                dlon
            );

            assert!(corrections.zenith_deg >= 0.0 && corrections.zenith_deg <= 180.0);
            assert!(corrections.slant_range_m > 0.0);
            assert!(corrections.ionospheric_delay_m >= 0.0);
            assert!(corrections.ionospheric_delay_m.is_finite());
        }
    }
}

#[test]
fn receiver_height_truncation() {
    let geodetic = GeodeticPosition::from_decimal_degrees(45.5, 10.5, 1234.9);
    let receiver = Position::from_geodetic(&geodetic);
    let ephemeris = static_ephemeris(g01(), satellite(-10.0, 5.0));

    let corrections = atmospheric_corrections(
        &reference_epoch(),
        &receiver,
        &ephemeris,
        &[0.0; 8],
        &[0.0; 8],
    )
    .unwrap();

    let truncated =
        tropospheric_delay(45, DAY_OF_YEAR, 1234, corrections.zenith_deg.to_radians()).unwrap();

    assert_eq!(corrections.tropospheric_dry_delay_m, truncated.dry_delay_m());
    assert_eq!(corrections.tropospheric_wet_delay_m, truncated.wet_delay_m());
}

#[test]
fn ionospheric_model_inputs() {
    let receiver = reference_receiver();
    let ephemeris = static_ephemeris(g01(), satellite(-15.0, 20.0));

    let epoch = reference_epoch().with_weather_clock(50_400.0);

    let corrections = atmospheric_corrections(
        &epoch,
        &receiver,
        &ephemeris,
        &BROADCAST_ALPHA,
        &BROADCAST_BETA,
    )
    .unwrap();

    let geodetic = ecef_to_geodetic(&receiver).unwrap();

    // zenith angle (deg) feeds the line of sight angle,
    // the weather clock feeds the local time
    let expected = klobuchar_delay(
        geodetic.latitude_rad(),
        geodetic.longitude_rad(),
        corrections.zenith_deg,
        corrections.azimuth_deg,
        &BROADCAST_ALPHA,
        &BROADCAST_BETA,
        50_400.0,
    )
    .unwrap();

    assert_eq!(corrections.ionospheric_delay_m, expected);
    assert!(corrections.ionospheric_delay_m > 0.0);

    // weather clock does not impact the geometry
    let other = atmospheric_corrections(
        &reference_epoch(),
        &receiver,
        &ephemeris,
        &BROADCAST_ALPHA,
        &BROADCAST_BETA,
    )
    .unwrap();

    assert_eq!(other.azimuth_deg, corrections.azimuth_deg);
    assert_eq!(other.zenith_deg, corrections.zenith_deg);
    assert_eq!(other.slant_range_m, corrections.slant_range_m);
    assert_ne!(other.ionospheric_delay_m, corrections.ionospheric_delay_m);
}

#[test]
fn mapping_function_preset() {
    let receiver = reference_receiver();
    let ephemeris = static_ephemeris(g01(), satellite(-45.0, 0.0));
    let epoch = reference_epoch();

    let mops = atmospheric_corrections(&epoch, &receiver, &ephemeris, &[0.0; 8], &[0.0; 8])
        .unwrap();

    let cfg = Config::default().with_mapping_function(MappingFunction::CosZ);

    let cosz = atmospheric_corrections_with_config(
        &epoch,
        &receiver,
        &ephemeris,
        &[0.0; 8],
        &[0.0; 8],
        &cfg,
    )
    .unwrap();

    assert!(mops.zenith_deg > 30.0 && mops.zenith_deg < 90.0);
    assert_eq!(mops.zenith_deg, cosz.zenith_deg);

    let expected = tropospheric_delay_with_mapping(
        45,
        DAY_OF_YEAR,
        100,
        cosz.zenith_deg.to_radians(),
        MappingFunction::CosZ,
    )
    .unwrap();

    assert_eq!(cosz.tropospheric_dry_delay_m, expected.dry_delay_m());
    assert_ne!(mops.tropospheric_dry_delay_m, cosz.tropospheric_dry_delay_m);
}

#[test]
fn earth_rotation_preset() {
    let receiver = reference_receiver();
    let ephemeris = static_ephemeris(g01(), satellite(-30.0, 10.0));
    let epoch = reference_epoch();

    let rotated = atmospheric_corrections(&epoch, &receiver, &ephemeris, &[0.0; 8], &[0.0; 8])
        .unwrap();

    let cfg = Config::default().with_earth_rotation(false);

    let inertial = atmospheric_corrections_with_config(
        &epoch,
        &receiver,
        &ephemeris,
        &[0.0; 8],
        &[0.0; 8],
        &cfg,
    )
    .unwrap();

    assert_ne!(rotated.slant_range_m, inertial.slant_range_m);

    // travel time rotation amounts to a hundred meters at most
    assert_close(rotated.slant_range_m, inertial.slant_range_m, 200.0, "slant range");
    assert_close(rotated.zenith_deg, inertial.zenith_deg, 0.01, "zenith");
}

#[test]
fn satellite_clock_offset() {
    let receiver = reference_receiver();
    let offset_s = 1.0E-3;

    let orbit = circular_orbit(g01());
    let with_offsets = EphemerisTable::from_records(
        g01(),
        orbit.iter().map(|record| record.with_clock_offset(offset_s)),
    );

    let epoch = ObservationEpoch::new(DAY_OF_YEAR, RECEIVER_CLOCK_S, 0.0, PSEUDO_RANGE_M);

    let corrected =
        atmospheric_corrections(&epoch, &receiver, &with_offsets, &[0.0; 8], &[0.0; 8]).unwrap();

    let uncorrected =
        atmospheric_corrections(&epoch, &receiver, &orbit, &[0.0; 8], &[0.0; 8]).unwrap();

    // moving satellite: transmission instant shift is visible on the line of sight
    assert!(
        (corrected.slant_range_m - uncorrected.slant_range_m).abs() > 1.0E-2,
        "slant range {} / {}",
        corrected.slant_range_m,
        uncorrected.slant_range_m
    );

    // same as an earlier reception, without clock offset
    let earlier = ObservationEpoch::new(
        DAY_OF_YEAR,
        RECEIVER_CLOCK_S - offset_s,
        0.0,
        PSEUDO_RANGE_M,
    );

    let expected =
        atmospheric_corrections(&earlier, &receiver, &orbit, &[0.0; 8], &[0.0; 8]).unwrap();

    assert_close(
        corrected.slant_range_m,
        expected.slant_range_m,
        1.0E-6,
        "slant range",
    );
    assert_close(corrected.azimuth_deg, expected.azimuth_deg, 1.0E-9, "azimuth");
    assert_close(corrected.zenith_deg, expected.zenith_deg, 1.0E-9, "zenith");

    // deactivated correction: offsets are ignored
    let cfg = Config::default().with_satellite_clock(false);

    let ignored = atmospheric_corrections_with_config(
        &epoch,
        &receiver,
        &with_offsets,
        &[0.0; 8],
        &[0.0; 8],
        &cfg,
    )
    .unwrap();

    assert_eq!(ignored, uncorrected);
}
