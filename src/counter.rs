// Stat counters count up from zero to their target over a fixed duration.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub interval_ms: u32,
    // Fraction of the element that must be on screen before it starts
    pub visible_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            duration_ms: 2000,
            interval_ms: 16,
            visible_threshold: 0.5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Counter {
    target: i64,
    current: f64,
    increment: f64,
    finished: bool,
}

impl Counter {
    pub fn new(target: i64, config: &CounterConfig) -> Self {
        let steps = config.duration_ms as f64 / config.interval_ms.max(1) as f64;
        Counter {
            target,
            current: 0.0,
            increment: target as f64 / steps,
            finished: false,
        }
    }

    // Reads a `data-target` attribute by its leading integer, so "12k" counts
    // to 12. No leading digits counts as 0.
    pub fn from_attribute(target: Option<&str>, config: &CounterConfig) -> Self {
        let target = target.and_then(leading_integer).unwrap_or(0);
        Counter::new(target, config)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // One interval's worth of counting, returns the text to display
    pub fn step(&mut self) -> String {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            format!("{}+", self.target)
        } else {
            format!("{}+", self.current.floor() as i64)
        }
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let digits_start = if text.starts_with('-') || text.starts_with('+') { 1 } else { 0 };
    let digits_end = text[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |end| digits_start + end);
    if digits_end == digits_start {
        return None;
    }
    text[..digits_end].parse().ok()
}
