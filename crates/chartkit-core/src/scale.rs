// File: crates/chartkit-core/src/scale.rs
// Summary: Linear, band and time scales mapping data values to pixel positions.

use chrono::{DateTime, NaiveDateTime};
use indexmap::IndexSet;
use serde::Serialize;

use crate::dataset::Value;
use crate::error::{ChartError, Result};
use crate::ticks;

/// Continuous map from `[d0, d1]` onto `[r0, r1]`. Either interval may be reversed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // a single-point domain sits in the middle of the range
        let t = if span == 0.0 { 0.5 } else { (x - d0) / span };
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }

    /// Copy of this scale with its domain extended to round tick boundaries.
    pub fn nice(&self, count: usize) -> Self {
        let (d0, d1) = ticks::nice(self.domain.0, self.domain.1, count);
        Self { domain: (d0, d1), range: self.range }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn with_range(&self, range: (f64, f64)) -> Self {
        Self { domain: self.domain, range }
    }
}

/// Discrete keys mapped to equal-width bands with inner and outer padding.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandScale {
    domain: IndexSet<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    round: bool,
}

impl BandScale {
    /// Keys are deduplicated in first-seen order. `padding` is used for both inner and outer padding.
    pub fn new<I, S>(keys: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let padding = padding.clamp(0.0, 1.0);
        Self {
            domain: keys.into_iter().map(Into::into).collect(),
            range,
            padding_inner: padding,
            padding_outer: padding,
            round: false,
        }
    }

    /// Snap step, band start and bandwidth to whole pixels.
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.domain.len() }
    pub fn is_empty(&self) -> bool { self.domain.is_empty() }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn padding(&self) -> f64 { self.padding_inner }

    // (first band start, step, bandwidth) over the ascending extent of the range.
    fn layout(&self) -> (f64, f64, f64) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (start, stop) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
        let mut step = (stop - start) / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        if self.round {
            step = step.floor();
        }
        let mut first = start + (stop - start - step * (n - self.padding_inner)) * 0.5;
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            first = first.round();
            bandwidth = bandwidth.round();
        }
        (first, step, bandwidth)
    }

    pub fn step(&self) -> f64 { self.layout().1 }
    pub fn bandwidth(&self) -> f64 { self.layout().2 }

    /// Start position of the band for `key`, or `None` for keys outside the domain.
    pub fn apply(&self, key: &str) -> Option<f64> {
        let i = self.domain.get_index_of(key)?;
        let (first, step, _) = self.layout();
        let slot = if self.range.1 < self.range.0 { self.domain.len() - 1 - i } else { i };
        Some(first + step * slot as f64)
    }

    /// Center of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.apply(key).map(|p| p + self.bandwidth() * 0.5)
    }
}

/// Time axis: a linear scale over epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TimeScale {
    millis: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        let d = (to_millis(domain.0), to_millis(domain.1));
        Self { millis: LinearScale::new(d, range) }
    }

    pub fn linear(&self) -> &LinearScale { &self.millis }
    pub fn range(&self) -> (f64, f64) { self.millis.range() }

    pub fn domain(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (d0, d1) = self.millis.domain();
        Some((from_millis(d0)?, from_millis(d1)?))
    }

    pub fn apply_time(&self, t: NaiveDateTime) -> f64 {
        self.millis.apply(to_millis(t))
    }

    pub fn invert_time(&self, px: f64) -> Option<NaiveDateTime> {
        from_millis(self.millis.invert(px))
    }
}

pub(crate) fn to_millis(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

pub(crate) fn from_millis(ms: f64) -> Option<NaiveDateTime> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms.round() as i64).map(|d| d.naive_utc())
}

/// Domain of an `AxisScale`: band keys in order, or continuous bounds.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisDomain {
    Keys(Vec<String>),
    Bounds(f64, f64),
}

/// Scale as handed to a renderer: a domain-to-pixel callable with an optional inverse.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxisScale {
    Band(BandScale),
    Linear(LinearScale),
    Time(TimeScale),
}

impl AxisScale {
    /// Pixel position for a raw value. Band scales look up the value's key, continuous
    /// scales coerce it to a number (time scales read numbers as epoch milliseconds).
    pub fn apply_value(&self, v: &Value) -> Option<f64> {
        match self {
            AxisScale::Band(b) => b.apply(&v.key()),
            AxisScale::Linear(l) => v.to_number().map(|x| l.apply(x)),
            AxisScale::Time(t) => v.to_number().map(|x| t.linear().apply(x)),
        }
    }

    /// Inverse mapping for continuous scales. Time scales return epoch milliseconds.
    pub fn invert(&self, px: f64) -> Result<f64> {
        match self {
            AxisScale::Band(_) => Err(ChartError::UnsupportedInversion),
            AxisScale::Linear(l) => Ok(l.invert(px)),
            AxisScale::Time(t) => Ok(t.linear().invert(px)),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        match self {
            AxisScale::Band(b) => b.range(),
            AxisScale::Linear(l) => l.range(),
            AxisScale::Time(t) => t.range(),
        }
    }

    /// Band keys, or domain bounds for continuous scales (epoch milliseconds for time).
    pub fn domain(&self) -> AxisDomain {
        match self {
            AxisScale::Band(b) => AxisDomain::Keys(b.domain().map(str::to_string).collect()),
            AxisScale::Linear(l) => {
                let (d0, d1) = l.domain();
                AxisDomain::Bounds(d0, d1)
            }
            AxisScale::Time(t) => {
                let (d0, d1) = t.linear().domain();
                AxisDomain::Bounds(d0, d1)
            }
        }
    }

    /// Continuous domain bounds; `None` for band scales.
    pub fn continuous_domain(&self) -> Option<(f64, f64)> {
        match self {
            AxisScale::Band(_) => None,
            AxisScale::Linear(l) => Some(l.domain()),
            AxisScale::Time(t) => Some(t.linear().domain()),
        }
    }

    pub fn as_band(&self) -> Option<&BandScale> {
        match self { AxisScale::Band(b) => Some(b), _ => None }
    }

    pub fn as_linear(&self) -> Option<&LinearScale> {
        match self { AxisScale::Linear(l) => Some(l), _ => None }
    }

    pub fn as_time(&self) -> Option<&TimeScale> {
        match self { AxisScale::Time(t) => Some(t), _ => None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_reversed_range() {
        let s = LinearScale::new((0.0, 5.0), (100.0, 0.0));
        assert_eq!(s.apply(0.0), 100.0);
        assert_eq!(s.apply(5.0), 0.0);
        assert!((s.invert(40.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((2.0, 2.0), (0.0, 100.0));
        assert_eq!(s.apply(2.0), 50.0);
    }

    #[test]
    fn band_reversed_range_flips_order() {
        let b = BandScale::new(["a", "b"], (100.0, 0.0), 0.0);
        assert_eq!(b.apply("a"), Some(50.0));
        assert_eq!(b.apply("b"), Some(0.0));
        assert_eq!(b.apply("zzz"), None);
    }

    #[test]
    fn axis_domain_covers_every_scale_kind() {
        let band = AxisScale::Band(BandScale::new(["b", "a", "b"], (0.0, 10.0), 0.1));
        assert_eq!(band.domain(), AxisDomain::Keys(vec!["b".to_string(), "a".to_string()]));
        assert_eq!(band.range(), (0.0, 10.0));

        let linear = AxisScale::Linear(LinearScale::new((0.0, 5.0), (100.0, 0.0)));
        assert_eq!(linear.domain(), AxisDomain::Bounds(0.0, 5.0));

        let d0 = DateTime::from_timestamp_millis(0).unwrap().naive_utc();
        let d1 = DateTime::from_timestamp_millis(86_400_000).unwrap().naive_utc();
        let time = AxisScale::Time(TimeScale::new((d0, d1), (0.0, 50.0)));
        assert_eq!(time.domain(), AxisDomain::Bounds(0.0, 86_400_000.0));
    }

    #[test]
    fn rounded_bands_snap_to_pixels() {
        let b = BandScale::new(["a", "b", "c"], (0.0, 100.0), 0.1).rounded();
        assert_eq!(b.step(), 32.0);
        assert_eq!(b.bandwidth(), b.bandwidth().round());
        assert_eq!(b.apply("a"), Some(b.apply("a").unwrap().round()));
    }
}
