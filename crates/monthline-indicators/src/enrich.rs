//! Attaches moving averages to monthly bars.

use monthline_aggregate::MonthlyBar;
use monthline_types::MonthlyRecord;

use crate::MovingAverage;

/// Builds output records for one ticker from its chronological monthly bars.
///
/// Moving averages are computed over the monthly closes, so `SMA_10` is a
/// 10-month average. The bars are left untouched.
#[must_use]
pub fn enrich(ticker: &str, bars: &[MonthlyBar]) -> Vec<MonthlyRecord> {
    let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();

    let sma_10 = MovingAverage::SMA_10.compute(&closes);
    let sma_20 = MovingAverage::SMA_20.compute(&closes);
    let ema_10 = MovingAverage::EMA_10.compute(&closes);
    let ema_20 = MovingAverage::EMA_20.compute(&closes);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| MonthlyRecord {
            date: bar.month_end,
            ticker: ticker.to_string(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            sma_10: sma_10[i],
            sma_20: sma_20[i],
            ema_10: ema_10[i],
            ema_20: ema_20[i],
        })
        .collect()
}
