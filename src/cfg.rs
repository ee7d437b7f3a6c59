use crate::mapf::MappingFunction;

fn default_interp() -> usize {
    11
}

fn default_earth_rotation() -> bool {
    true
}

fn default_sv_clock() -> bool {
    true
}

/// [Config] preset of the correction pipeline.
/// It is passed explicitly to each evaluation, there is no global state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// (Position) interpolation order.
    /// A minimal order must be respected for correct results,
    /// 11 is typical when working with SP3 products sampled every 15'.
    #[cfg_attr(feature = "serde", serde(default = "default_interp"))]
    pub interpolation_order: usize,

    /// Compensate Earth rotation during signal propagation.
    #[cfg_attr(feature = "serde", serde(default = "default_earth_rotation"))]
    pub earth_rotation: bool,

    /// Correct the transmission instant with the satellite clock offset,
    /// when the ephemeris table describes it.
    #[cfg_attr(feature = "serde", serde(default = "default_sv_clock"))]
    pub satellite_clock: bool,

    /// Tropospheric [MappingFunction]
    #[cfg_attr(feature = "serde", serde(default))]
    pub mapping_function: MappingFunction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpolation_order: default_interp(),
            earth_rotation: default_earth_rotation(),
            satellite_clock: default_sv_clock(),
            mapping_function: MappingFunction::default(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated interpolation order.
    pub fn with_interpolation_order(&self, order: usize) -> Self {
        let mut s = *self;
        s.interpolation_order = order;
        s
    }

    /// Copies and returns [Config] with Earth rotation compensation (de)activated.
    pub fn with_earth_rotation(&self, earth_rotation: bool) -> Self {
        let mut s = *self;
        s.earth_rotation = earth_rotation;
        s
    }

    /// Copies and returns [Config] with satellite clock correction (de)activated.
    pub fn with_satellite_clock(&self, satellite_clock: bool) -> Self {
        let mut s = *self;
        s.satellite_clock = satellite_clock;
        s
    }

    /// Copies and returns [Config] with updated tropospheric [MappingFunction].
    pub fn with_mapping_function(&self, mapping_function: MappingFunction) -> Self {
        let mut s = *self;
        s.mapping_function = mapping_function;
        s
    }
}
