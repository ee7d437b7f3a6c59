#![doc(
    html_logo_url = "https://raw.githubusercontent.com/nav-solutions/.github/master/logos/logo2.jpg"
)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * ATMOS is part of the nav-solutions framework.
 *
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * (cf. https://github.com/nav-solutions/atmos/graphs/contributors),
 * licensed under Mozilla Public license V2.
 *
 * Documentation: https://github.com/nav-solutions/atmos
 */

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

extern crate gnss_rs as gnss;

pub mod cfg;
pub mod constants;
pub mod coordinates;
pub mod corrections;
pub mod ephemeris;
pub mod epoch;
pub mod error;
pub mod geometry;
pub mod ionosphere;
pub mod mapf;
pub mod troposphere;

#[cfg(test)]
mod tests;

pub mod prelude {
    // export
    pub use crate::{
        cfg::Config,
        coordinates::{ecef_to_geodetic, geodetic_to_ecef, GeodeticPosition, Position},
        corrections::{
            atmospheric_corrections, atmospheric_corrections_with_config, AtmosphericCorrections,
        },
        ephemeris::{satellite_position, EphemerisRecord, EphemerisTable},
        epoch::ObservationEpoch,
        error::Error,
        geometry::{local_geometry, LocalGeometry},
        ionosphere::{klobuchar_delay, IonosphereParameters, KlobucharCoefficients},
        mapf::MappingFunction,
        troposphere::{tropospheric_delay, tropospheric_delay_with_mapping, TroposphericDelay},
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}
