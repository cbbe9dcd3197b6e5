//! State behind the auto-advancing sliders and animated statistic counters.

/// Index into a fixed number of slides that wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideCursor {
    len: usize,
    index: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Out of range selections are ignored.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

/// Cubic ease-out over `progress` in [0, 1].
pub fn ease_out(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Counter value after `elapsed_ms` of an animation lasting `duration_ms`.
pub fn counter_value(target: f64, elapsed_ms: u32, duration_ms: u32) -> f64 {
    if duration_ms == 0 {
        return target;
    }
    target * ease_out(elapsed_ms as f64 / duration_ms as f64)
}

/// Renders a counter the way the stat blocks show it: whole numbers get
/// thousands separators, fractional targets keep one decimal.
pub fn format_counter(value: f64, decimals: usize) -> String {
    if decimals > 0 {
        return format!("{:.*}", decimals, value);
    }
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_forward_and_back() {
        let cursor = SlideCursor::new(3);
        assert_eq!(cursor.next().next().next().index(), 0);
        assert_eq!(cursor.prev().index(), 2);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let cursor = SlideCursor::new(3).select(2);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.select(3).index(), 2);
    }

    #[test]
    fn empty_cursor_stays_put() {
        let cursor = SlideCursor::new(0);
        assert_eq!(cursor.next().index(), 0);
        assert_eq!(cursor.prev().index(), 0);
    }

    #[test]
    fn counter_reaches_target_and_never_overshoots() {
        assert_eq!(counter_value(500.0, 0, 2000), 0.0);
        assert_eq!(counter_value(500.0, 2000, 2000), 500.0);
        assert_eq!(counter_value(500.0, 5000, 2000), 500.0);
        let mid = counter_value(500.0, 1000, 2000);
        assert!(mid > 250.0 && mid < 500.0);
        assert_eq!(counter_value(12.0, 10, 0), 12.0);
    }

    #[test]
    fn counter_formatting() {
        assert_eq!(format_counter(12500.4, 0), "12,500");
        assert_eq!(format_counter(999.0, 0), "999");
        assert_eq!(format_counter(1_000_000.0, 0), "1,000,000");
        assert_eq!(format_counter(4.54, 1), "4.5");
    }
}
