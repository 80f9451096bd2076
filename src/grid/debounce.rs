/// Trailing-edge debouncer driven by an external clock in milliseconds.
///
/// The browser shell feeds it `performance.now()`; tests feed plain numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: f64::from(delay_ms),
            deadline: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Record an event; pushes the deadline out.
    pub fn trigger(&mut self, now: f64) {
        self.deadline = Some(now + self.delay_ms);
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the quiet period has elapsed. Fires once per burst.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_period() {
        let mut debounce = Debounce::new(10);
        assert!(!debounce.poll(0.0));
        debounce.trigger(0.0);
        debounce.trigger(5.0);
        assert!(!debounce.poll(12.0));
        assert!(debounce.poll(15.0));
        assert!(!debounce.poll(20.0));
        assert!(!debounce.pending());
    }
}
