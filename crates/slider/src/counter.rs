/// Counters advance by `target / STEPS` each tick.
pub const STEPS: f64 = 60.0;

/// Count-up animation for a stats card: yields the number to display on each
/// tick, ending exactly on the target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self { target, current: 0.0, increment: target as f64 / STEPS, done: false }
    }

    /// Display text for a tick value, e.g. `500` + `"+"`.
    pub fn label(value: i64, suffix: &str) -> String {
        format!("{value}{suffix}")
    }
}

impl Iterator for CounterAnimation {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as i64)
        }
    }
}
