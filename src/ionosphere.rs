//! Klobuchar broadcast ionospheric model
use std::f64::consts::PI;

use crate::{
    constants::{L1_FREQUENCY_HZ, SPEED_OF_LIGHT_M_S},
    error::Error,
};

#[cfg(feature = "log")]
use log::trace;

/// Number of terms of each Klobuchar polynomial
pub const KLOBUCHAR_TERMS: usize = 8;

/// Geomagnetic north pole latitude (semi circles)
const PHI_P: f64 = 0.064;

/// Geomagnetic north pole longitude offset (semi circles)
const LAMBDA_P: f64 = 1.617;

/// Night time constant delay (s)
const NIGHT_DELAY_S: f64 = 5.0E-9;

/// Minimal period of the cosine model (s)
const MIN_PERIOD_S: f64 = 72_000.0;

/// Local time of the daily maximum (s)
const PEAK_LOCAL_TIME_S: f64 = 50_400.0;

/// [KlobucharCoefficients] as broadcast in navigation messages.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KlobucharCoefficients {
    /// Amplitude coefficients
    /// ((sec), (sec.semi-circle⁻¹), (sec.semi-circle⁻²), ...)
    pub alpha: [f64; KLOBUCHAR_TERMS],

    /// Period coefficients
    /// ((sec), (sec.semi-circle⁻¹), (sec.semi-circle⁻²), ...)
    pub beta: [f64; KLOBUCHAR_TERMS],
}

/// [IonosphereParameters] resolved at the ionospheric pierce point.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct IonosphereParameters {
    /// Amplitude of the ionospheric delay (seconds)
    pub amplitude_s: f64,

    /// Period of the ionospheric delay (seconds)
    pub period_s: f64,

    /// Phase of the ionospheric delay (rad)
    pub phase_rad: f64,

    /// Slant factor
    pub slant: f64,
}

impl IonosphereParameters {
    /// Returns L1 ionospheric delay in seconds
    pub fn delay_s(&self) -> f64 {
        let x = self.phase_rad;
        if x.abs() < 1.57 {
            let cosine = 1.0 - x.powi(2) / 2.0 + x.powi(4) / 24.0;
            self.slant * (NIGHT_DELAY_S + self.amplitude_s * cosine)
        } else {
            self.slant * NIGHT_DELAY_S
        }
    }

    /// Returns L1 ionospheric delay in meters
    pub fn delay_m(&self) -> f64 {
        self.delay_s() * SPEED_OF_LIGHT_M_S
    }

    /// Returns ionospheric delay in meters, scaled to another carrier frequency (Hz).
    pub fn delay_m_at(&self, frequency_hz: f64) -> f64 {
        self.delay_m() * (L1_FREQUENCY_HZ / frequency_hz).powi(2)
    }
}

/// Evaluates a polynomial in `x`, coefficients in ascending powers.
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, coefficient| acc * x + coefficient)
}

impl KlobucharCoefficients {
    /// Builds [KlobucharCoefficients] from two 8 terms sequences.
    /// Fails with [Error::CoefficientShape] otherwise.
    pub fn new(alpha: &[f64], beta: &[f64]) -> Result<Self, Error> {
        let shape_error = Error::CoefficientShape {
            alpha: alpha.len(),
            beta: beta.len(),
        };

        let alpha: [f64; KLOBUCHAR_TERMS] = alpha.try_into().map_err(|_| shape_error.clone())?;
        let beta: [f64; KLOBUCHAR_TERMS] = beta.try_into().map_err(|_| shape_error)?;

        Ok(Self { alpha, beta })
    }

    /// Builds [KlobucharCoefficients] from a 4+4 terms broadcast message
    /// (GPS, QZSS, BDS), higher order terms are null.
    /// ```
    /// use atmos::prelude::KlobucharCoefficients;
    ///
    /// let kb = KlobucharCoefficients::from_broadcast(
    ///     [7.4506E-9, -1.4901E-8, -5.9605E-8, 1.1921E-7],
    ///     [9.0112E4, -6.5536E4, -1.3107E5, 4.5875E5],
    /// );
    ///
    /// assert_eq!(kb.alpha[3], 1.1921E-7);
    /// assert_eq!(kb.alpha[4], 0.0);
    /// assert_eq!(kb.beta[7], 0.0);
    /// ```
    pub fn from_broadcast(alpha: [f64; 4], beta: [f64; 4]) -> Self {
        let mut s = Self::default();
        s.alpha[..4].copy_from_slice(&alpha);
        s.beta[..4].copy_from_slice(&beta);
        s
    }

    /// Returns true if all coefficients are null, which means no model was broadcast.
    pub fn is_null(&self) -> bool {
        self.alpha.iter().chain(self.beta.iter()).all(|c| *c == 0.0)
    }

    /// Resolves [IonosphereParameters] (ICD-GPS-200, 20.3.3.5.2.5).
    /// - `latitude_rad`, `longitude_rad`: user geodetic coordinates (rad)
    /// - `elevation_deg`: angle of the line of sight (degrees)
    /// - `azimuth_deg`: azimuth of the line of sight (degrees)
    /// - `t_s`: GPS time (s)
    pub fn parameters(
        &self,
        latitude_rad: f64,
        longitude_rad: f64,
        elevation_deg: f64,
        azimuth_deg: f64,
        t_s: f64,
    ) -> IonosphereParameters {
        let phi_u = latitude_rad / PI;
        let lambda_u = longitude_rad / PI;
        let e = elevation_deg / 180.0;
        let a = azimuth_deg.to_radians();

        // earth centered angle
        let psi = 0.0137 / (e + 0.11) - 0.022;

        // pierce point
        let phi_i = (phi_u + psi * a.cos()).clamp(-0.416, 0.416);
        let lambda_i = lambda_u + psi * a.sin() / (phi_i * PI).cos();

        // geomagnetic latitude
        let phi_m = phi_i + PHI_P * ((lambda_i - LAMBDA_P) * PI).cos();

        let local_t = (43_200.0 * lambda_i + t_s).rem_euclid(86_400.0);

        let amplitude_s = polynomial(&self.alpha, phi_m).max(0.0);
        let period_s = polynomial(&self.beta, phi_m).max(MIN_PERIOD_S);

        let phase_rad = 2.0 * PI * (local_t - PEAK_LOCAL_TIME_S) / period_s;
        let slant = 1.0 + 16.0 * (0.53 - e).powi(3);

        #[cfg(feature = "log")]
        trace!(
            "klobuchar - ipp=({}, {}) - phi_m={} - local time={}s",
            phi_i,
            lambda_i,
            phi_m,
            local_t
        );

        IonosphereParameters {
            amplitude_s,
            period_s,
            phase_rad,
            slant,
        }
    }

    /// Returns L1 ionospheric delay in meters. Null coefficients
    /// (no broadcast model) yield a null delay.
    /// See [Self::parameters] for the input definitions.
    pub fn delay_m(
        &self,
        latitude_rad: f64,
        longitude_rad: f64,
        elevation_deg: f64,
        azimuth_deg: f64,
        t_s: f64,
    ) -> f64 {
        if self.is_null() {
            return 0.0;
        }

        self.parameters(latitude_rad, longitude_rad, elevation_deg, azimuth_deg, t_s)
            .delay_m()
    }
}

/// Klobuchar ionospheric delay (m) on L1, from raw `alpha` and `beta` sequences
/// that must both count 8 terms.
/// See [KlobucharCoefficients::parameters] for the other input definitions.
pub fn klobuchar_delay(
    latitude_rad: f64,
    longitude_rad: f64,
    elevation_deg: f64,
    azimuth_deg: f64,
    alpha: &[f64],
    beta: &[f64],
    t_s: f64,
) -> Result<f64, Error> {
    let coefficients = KlobucharCoefficients::new(alpha, beta)?;
    Ok(coefficients.delay_m(latitude_rad, longitude_rad, elevation_deg, azimuth_deg, t_s))
}
