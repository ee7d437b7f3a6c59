use itertools::Itertools;

use crate::{
    cfg::Config,
    constants::{EARTH_ROTATION_RATE_RAD_S, SPEED_OF_LIGHT_M_S},
    coordinates::Position,
    error::Error,
    prelude::SV,
};

#[cfg(feature = "log")]
use log::{debug, trace};

/// [EphemerisRecord] describes the satellite state at one instant.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EphemerisRecord {
    /// Time tag (s), same time frame as the receiver clock.
    pub t_s: f64,

    /// ECEF position (m)
    pub position: Position,

    /// Satellite clock offset (s), when known.
    pub clock_offset_s: Option<f64>,
}

impl EphemerisRecord {
    /// Builds new [EphemerisRecord] from a time tag and ECEF [Position].
    pub fn new(t_s: f64, position: Position) -> Self {
        Self {
            t_s,
            position,
            clock_offset_s: None,
        }
    }

    /// Copies and returns [EphemerisRecord] with satellite clock offset (s).
    pub fn with_clock_offset(&self, offset_s: f64) -> Self {
        let mut s = *self;
        s.clock_offset_s = Some(offset_s);
        s
    }
}

/// [EphemerisTable] of a single satellite, sorted in chronological order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EphemerisTable {
    /// [SV] described by this table
    pub sv: SV,

    /// [EphemerisRecord]s, in chronological order
    records: Vec<EphemerisRecord>,
}

impl EphemerisTable {
    /// Builds a new empty [EphemerisTable] for this [SV].
    pub fn new(sv: SV) -> Self {
        Self {
            sv,
            records: Default::default(),
        }
    }

    /// Builds a new [EphemerisTable] for this [SV], from possibly unsorted [EphemerisRecord]s.
    pub fn from_records<I: IntoIterator<Item = EphemerisRecord>>(sv: SV, records: I) -> Self {
        let mut s = Self::new(sv);
        for record in records {
            s.insert(record);
        }
        s
    }

    /// Inserts a new [EphemerisRecord], preserving chronological order.
    /// A record sharing the time tag of an existing one replaces it.
    pub fn insert(&mut self, record: EphemerisRecord) {
        let index = self.records.partition_point(|r| r.t_s < record.t_s);
        match self.records.get_mut(index) {
            Some(existing) if existing.t_s == record.t_s => *existing = record,
            _ => self.records.insert(index, record),
        }
    }

    /// Copies and returns [EphemerisTable] with one more [EphemerisRecord].
    pub fn with_record(&self, record: EphemerisRecord) -> Self {
        let mut s = self.clone();
        s.insert(record);
        s
    }

    /// Returns total number of [EphemerisRecord]s
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if this table does not contain any record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// [EphemerisRecord]s iterator, in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &EphemerisRecord> + '_ {
        self.records.iter()
    }

    /// Returns first time tag (s)
    pub fn first_t_s(&self) -> Option<f64> {
        self.records.first().map(|r| r.t_s)
    }

    /// Returns last time tag (s)
    pub fn last_t_s(&self) -> Option<f64> {
        self.records.last().map(|r| r.t_s)
    }

    /// Returns true if `t_s` lies within this table time frame.
    pub fn brackets(&self, t_s: f64) -> bool {
        match (self.first_t_s(), self.last_t_s()) {
            (Some(first), Some(last)) => first <= t_s && t_s <= last,
            _ => false,
        }
    }

    /// Interpolates the satellite [Position] at `t_s`, using a Lagrangian interpolation
    /// of desired order. The interpolation window is centered on `t_s`
    /// and reduced to the table size when needed.
    pub fn interpolate_position(&self, t_s: f64, order: usize) -> Result<Position, Error> {
        if order == 0 {
            return Err(Error::InterpolationOrder(order));
        }

        if !self.brackets(t_s) {
            return Err(Error::EphemerisNotFound { sv: self.sv, t_s });
        }

        let size = order.saturating_add(1).min(self.records.len());
        let after = self.records.partition_point(|r| r.t_s <= t_s);
        let offset = after
            .saturating_sub(size / 2)
            .min(self.records.len() - size);

        let window = &self.records[offset..offset + size];

        let mut interpolated = Position::default();

        for (i, record_i) in window.iter().enumerate() {
            let mut li = 1.0_f64;
            for (j, record_j) in window.iter().enumerate() {
                if j != i {
                    li *= (t_s - record_j.t_s) / (record_i.t_s - record_j.t_s);
                }
            }
            interpolated.x_m += record_i.position.x_m * li;
            interpolated.y_m += record_i.position.y_m * li;
            interpolated.z_m += record_i.position.z_m * li;
        }

        #[cfg(feature = "log")]
        trace!(
            "{}: interpolated t={}s from {} records: {:?}",
            self.sv,
            t_s,
            size,
            interpolated
        );

        Ok(interpolated)
    }

    /// Interpolates satellite clock offset (s) at `t_s`, linearly,
    /// from the two bracketing records that describe a clock offset.
    pub fn interpolate_clock_offset(&self, t_s: f64) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|r| Some((r.t_s, r.clock_offset_s?)))
            .tuple_windows()
            .find(|((t0, _), (t1, _))| *t0 <= t_s && t_s <= *t1)
            .map(|((t0, clk0), (t1, clk1))| {
                let dt = t1 - t0;
                (t1 - t_s) / dt * clk0 + (t_s - t0) / dt * clk1
            })
    }
}

/// Determines the satellite ECEF [Position] at signal transmission time, expressed
/// in the ECEF frame at reception time.
/// - `receiver_clock_s`: receiver clock reading at reception (s)
/// - `pseudorange_m`: pseudo range measurement (m), which sets the signal travel time
/// - `ephemeris`: [EphemerisTable] of the observed satellite
/// - `receiver`: receiver ECEF [Position]
/// - `cfg`: [Config] preset
pub fn satellite_position(
    receiver_clock_s: f64,
    pseudorange_m: f64,
    ephemeris: &EphemerisTable,
    receiver: &Position,
    cfg: &Config,
) -> Result<Position, Error> {
    let mut t_tx = receiver_clock_s - pseudorange_m / SPEED_OF_LIGHT_M_S;

    if cfg.satellite_clock {
        if let Some(offset_s) = ephemeris.interpolate_clock_offset(t_tx) {
            #[cfg(feature = "log")]
            trace!("{}: clock offset {}s", ephemeris.sv, offset_s);
            t_tx -= offset_s;
        }
    }

    let position = ephemeris.interpolate_position(t_tx, cfg.interpolation_order)?;

    if !cfg.earth_rotation {
        return Ok(position);
    }

    let travel_time_s = position.distance(receiver) / SPEED_OF_LIGHT_M_S;
    let rotated = position.rotated_z(EARTH_ROTATION_RATE_RAD_S * travel_time_s);

    #[cfg(feature = "log")]
    debug!(
        "{}: t_tx={}s - travel time {}s - position {:?}",
        ephemeris.sv,
        t_tx,
        travel_time_s,
        rotated
    );

    Ok(rotated)
}
