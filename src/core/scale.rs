use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Tick positions for one axis. Axis layouts ask for around a dozen ticks,
/// so the buffer stays inline.
pub type Ticks = SmallVec<[f64; 12]>;

/// Maps a continuous data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-empty".to_owned(),
            ));
        }
        Ok(Self {
            domain_min,
            domain_max,
            range_start,
            range_end,
        })
    }

    /// Builds a scale over the extent of `values`, widening a collapsed
    /// domain so single-valued datasets still project.
    pub fn from_values<I>(values: I, range_start: f64, range_end: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            min = min.min(value);
            max = max.max(value);
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "scale input must contain at least one finite value".to_owned(),
            ));
        }
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        Self::new(min, max, range_start, range_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Projects a domain value into the pixel range.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Round tick positions covering the domain, at a 1/2/5 step.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> Ticks {
        let mut ticks = Ticks::new();
        if target_count == 0 {
            return ticks;
        }

        let span = self.domain_max - self.domain_min;
        let raw_step = span / target_count as f64;
        let magnitude = 10f64.powf(raw_step.abs().log10().floor());
        let residual = raw_step / magnitude;
        let step = if residual >= 5.0 {
            10.0 * magnitude
        } else if residual >= 2.0 {
            5.0 * magnitude
        } else if residual >= 1.0 {
            2.0 * magnitude
        } else {
            magnitude
        };

        let mut tick = (self.domain_min / step).ceil() * step;
        while tick <= self.domain_max + step * 1e-9 {
            ticks.push(tick);
            tick += step;
        }
        ticks
    }
}

/// Maps categorical labels onto evenly spaced bands, bar-chart style.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    count: usize,
    range_start: f64,
    range_end: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range_start: f64, range_end: f64, padding: f64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be in [0, 1)".to_owned(),
            ));
        }
        Ok(Self {
            count,
            range_start,
            range_end,
            padding,
        })
    }

    #[must_use]
    fn step(&self) -> f64 {
        (self.range_end - self.range_start) / self.count as f64
    }

    /// Left edge of band `index`.
    #[must_use]
    pub fn band_start(&self, index: usize) -> f64 {
        self.range_start + self.step() * index as f64 + self.step() * self.padding / 2.0
    }

    /// Width of every band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Center of band `index`, where tick labels sit.
    #[must_use]
    pub fn band_center(&self, index: usize) -> f64 {
        self.band_start(index) + self.bandwidth() / 2.0
    }
}
