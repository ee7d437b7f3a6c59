//! Observation epoch description
use crate::prelude::Epoch;

/// [ObservationEpoch] gathers the timing and measurement context
/// of a single satellite observation.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationEpoch {
    /// Day of year (1..=366)
    pub day_of_year: u16,

    /// Receiver clock reading (s), used to resolve the satellite position.
    pub receiver_clock_s: f64,

    /// Receiver clock reading (s), used by the ionospheric model.
    pub weather_clock_s: f64,

    /// Pseudo range measurement (m)
    pub pseudorange_m: f64,
}

impl ObservationEpoch {
    /// Builds new [ObservationEpoch].
    pub fn new(
        day_of_year: u16,
        receiver_clock_s: f64,
        weather_clock_s: f64,
        pseudorange_m: f64,
    ) -> Self {
        Self {
            day_of_year,
            receiver_clock_s,
            weather_clock_s,
            pseudorange_m,
        }
    }

    /// Builds new [ObservationEpoch] from a sampling [Epoch] and a pseudo range
    /// measurement in meters. Both clock readings are the time of week of this [Epoch],
    /// expressed in its own timescale. You should express [Epoch] in
    /// [TimeScale::GPST](crate::prelude::TimeScale::GPST) to match GPS broadcast conventions.
    /// ```
    /// use atmos::prelude::{Epoch, ObservationEpoch, TimeScale};
    ///
    /// let t = Epoch::from_time_of_week(2200, 3_600_000_000_000, TimeScale::GPST);
    /// let epoch = ObservationEpoch::from_epoch(t, 20.0E6);
    ///
    /// assert_eq!(epoch.receiver_clock_s, 3600.0);
    /// assert_eq!(epoch.weather_clock_s, 3600.0);
    /// assert_eq!(epoch.pseudorange_m, 20.0E6);
    /// ```
    pub fn from_epoch(epoch: Epoch, pseudorange_m: f64) -> Self {
        let (_, nanos) = epoch.to_time_of_week();
        let time_of_week_s = nanos as f64 / 1.0E9;

        Self {
            day_of_year: day_of_year(epoch),
            receiver_clock_s: time_of_week_s,
            weather_clock_s: time_of_week_s,
            pseudorange_m,
        }
    }

    /// Copies and returns [ObservationEpoch] with updated clock reading for
    /// the ionospheric model.
    pub fn with_weather_clock(&self, weather_clock_s: f64) -> Self {
        let mut s = *self;
        s.weather_clock_s = weather_clock_s;
        s
    }
}

/// Returns day of year (1..=366) of given [Epoch], in its own timescale.
pub(crate) fn day_of_year(epoch: Epoch) -> u16 {
    epoch.day_of_year().floor() as u16 + 1
}
