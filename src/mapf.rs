use crate::error::Error;

/// Minimal elevation angle (degrees) under which the MOPS mapping
/// function is augmented.
const MOPS_LOW_ELEVATION_DEG: f64 = 4.0;

/// Tropospheric [MappingFunction], projecting zenith delays onto the line of sight.
/// Every function is expressed at the zenith angle `z` of the line of sight.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MappingFunction {
    /// RTCA-MOPS function: 1.001 / sqrt(0.002001 + cos²(z)),
    /// augmented at low elevation angles.
    #[default]
    Mops,

    /// Model is 1/cos(z)
    CosZ,
}

impl std::str::FromStr for MappingFunction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mops" => Ok(Self::Mops),
            "cosz" | "cosine" => Ok(Self::CosZ),
            _ => Err(Error::UnknownMappingFunction(s.to_string())),
        }
    }
}

impl std::fmt::Display for MappingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Mops => write!(f, "MOPS"),
            Self::CosZ => write!(f, "COSZ"),
        }
    }
}

impl MappingFunction {
    /// Evaluates this [MappingFunction] at given zenith angle (rad).
    pub fn eval(&self, zenith_rad: f64) -> f64 {
        match self {
            Self::Mops => {
                let sin_elev = zenith_rad.cos();
                let mapf = 1.001 / (0.002001 + sin_elev.powi(2)).sqrt();

                let elevation_deg = 90.0 - zenith_rad.to_degrees();
                if elevation_deg < MOPS_LOW_ELEVATION_DEG {
                    mapf * (1.0 + 0.015 * (MOPS_LOW_ELEVATION_DEG - elevation_deg).powi(2))
                } else {
                    mapf
                }
            },
            Self::CosZ => 1.0 / zenith_rad.cos(),
        }
    }
}
