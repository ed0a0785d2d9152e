//! Simple and exponential moving averages.

/// Simple moving average with a minimum of one observation.
///
/// Index `i` averages `values[i + 1 - period..=i]`, or every value up to
/// `i` while fewer than `period` are available. A period of 0 is treated
/// as 1.
#[must_use]
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    let period = period.max(1);

    let mut sum = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            sum += value;
            if i >= period {
                sum -= values[i - period];
            }
            sum / (i + 1).min(period) as f64
        })
        .collect()
}

/// Exponential moving average seeded with the first value.
///
/// Uses the recursive form with multiplier `2 / (period + 1)`:
/// `EMA[0] = values[0]` and `EMA[i] = (values[i] - EMA[i-1]) * multiplier + EMA[i-1]`.
/// A period of 0 is treated as 1.
#[must_use]
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let multiplier = 2.0 / (period.max(1) as f64 + 1.0);

    let mut previous: Option<f64> = None;
    values
        .iter()
        .map(|&value| {
            let next = match previous {
                Some(prev) => (value - prev) * multiplier + prev,
                None => value,
            };
            previous = Some(next);
            next
        })
        .collect()
}

/// A moving-average indicator over a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovingAverage {
    /// Simple moving average over the given period.
    Simple(usize),
    /// Exponential moving average over the given period.
    Exponential(usize),
}

impl MovingAverage {
    /// 10-period simple moving average.
    pub const SMA_10: Self = Self::Simple(10);
    /// 20-period simple moving average.
    pub const SMA_20: Self = Self::Simple(20);
    /// 10-period exponential moving average.
    pub const EMA_10: Self = Self::Exponential(10);
    /// 20-period exponential moving average.
    pub const EMA_20: Self = Self::Exponential(20);

    /// Returns the lookback period.
    #[must_use]
    pub const fn period(&self) -> usize {
        match self {
            Self::Simple(period) | Self::Exponential(period) => *period,
        }
    }

    /// Returns the output column name, e.g. `SMA_10`.
    #[must_use]
    pub fn column_name(&self) -> String {
        self.to_string()
    }

    /// Computes the indicator series, aligned index-for-index with `values`.
    #[must_use]
    pub fn compute(&self, values: &[f64]) -> Vec<f64> {
        match *self {
            Self::Simple(period) => sma(values, period),
            Self::Exponential(period) => ema(values, period),
        }
    }
}

impl std::fmt::Display for MovingAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple(period) => write!(f, "SMA_{period}"),
            Self::Exponential(period) => write!(f, "EMA_{period}"),
        }
    }
}
