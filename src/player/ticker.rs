use std::time::Duration;

/// A periodic timer driven by elapsed time rather than wall-clock reads.
///
/// The owner feeds it time deltas with `advance`; while suspended the deltas
/// are ignored but the progress into the current period is kept.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    elapsed: Duration,
    running: bool,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn suspend(&mut self) {
        self.running = false;
    }

    /// Stop and forget any partial period.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Run again from the start of a fresh period.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    /// Feed `delta` of elapsed time; returns how many periods completed.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += delta;

        let period = self.period.as_nanos();
        let fired = self.elapsed.as_nanos() / period;
        let rest = self.elapsed.as_nanos() % period;
        self.elapsed = Duration::from_nanos(rest as u64);
        fired.min(u32::MAX as u128) as u32
    }
}
