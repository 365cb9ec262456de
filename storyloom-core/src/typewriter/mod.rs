//! Character-by-character reveal of the current dialogue line.

mod ticker;

pub use ticker::{TaskHandle, Ticker};

use std::time::Duration;

pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    ticker: Ticker,
    task: Option<TaskHandle>,
}

impl Typewriter {
    pub fn new(interval: Duration) -> Self {
        Self {
            chars: Vec::new(),
            revealed: 0,
            ticker: Ticker::new(interval),
            task: None,
        }
    }

    /// Starts revealing `text` from zero, cancelling any reveal in flight.
    /// `None` clears the box and schedules nothing.
    pub fn set_text(&mut self, text: Option<&str>) {
        self.cancel();
        self.chars = text.map(|t| t.chars().collect()).unwrap_or_default();
        self.revealed = 0;
        if !self.chars.is_empty() {
            self.task = Some(self.ticker.schedule());
        }
    }

    /// Applies the ticks that fell due during `dt`. Returns true when the
    /// visible prefix grew.
    pub fn update(&mut self, dt: Duration) -> bool {
        let Some(task) = self.task else { return false };
        let Some((handle, due)) = self.ticker.advance(dt) else { return false };
        if handle != task || due == 0 {
            return false;
        }
        let before = self.revealed;
        let step = usize::try_from(due).unwrap_or(usize::MAX);
        self.revealed = self.revealed.saturating_add(step).min(self.chars.len());
        if self.is_complete() {
            self.cancel();
        }
        self.revealed != before
    }

    /// Shows the whole line at once.
    pub fn skip(&mut self) {
        self.revealed = self.chars.len();
        self.cancel();
    }

    /// Stops pending ticks. The visible prefix stays as it is.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            self.ticker.cancel(task);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn is_ticking(&self) -> bool {
        self.task.is_some_and(|t| self.ticker.is_running(t))
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(30);

    #[test]
    fn reveal_is_monotonic_and_stops_at_len() {
        let mut tw = Typewriter::new(TICK);
        tw.set_text(Some("Hello"));
        assert_eq!(tw.revealed_len(), 0);

        let mut last = 0;
        for _ in 0..10 {
            tw.update(TICK);
            assert!(tw.revealed_len() >= last);
            last = tw.revealed_len();
        }
        assert_eq!(tw.revealed_len(), 5);
        assert!(tw.is_complete());
        assert!(!tw.is_ticking());
        assert_eq!(tw.visible_text(), "Hello");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let mut tw = Typewriter::new(TICK);
        tw.set_text(Some("héllo, 世界"));
        assert_eq!(tw.len(), 9);
        tw.update(TICK * 2);
        assert_eq!(tw.visible_text(), "hé");
    }

    #[test]
    fn new_text_resets_and_cancels_old_reveal() {
        let mut tw = Typewriter::new(TICK);
        tw.set_text(Some("first line"));
        tw.update(TICK * 3);
        tw.set_text(Some("second"));
        assert_eq!(tw.revealed_len(), 0);
        tw.update(TICK);
        assert_eq!(tw.visible_text(), "s");
    }

    #[test]
    fn skip_completes_and_stops_ticking() {
        let mut tw = Typewriter::new(TICK);
        tw.set_text(Some("abc"));
        tw.skip();
        assert!(tw.is_complete());
        assert!(!tw.is_ticking());
        assert!(!tw.update(TICK * 10));
        assert_eq!(tw.visible_text(), "abc");
    }

    #[test]
    fn no_text_no_ticks() {
        let mut tw = Typewriter::new(TICK);
        tw.set_text(None);
        assert!(tw.is_complete());
        assert!(!tw.is_ticking());
        assert!(!tw.update(TICK));
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn cancel_keeps_prefix() {
        let mut tw = Typewriter::new(TICK);
        tw.set_text(Some("abcdef"));
        tw.update(TICK * 2);
        tw.cancel();
        tw.update(TICK * 10);
        assert_eq!(tw.visible_text(), "ab");
        assert!(!tw.is_complete());
    }

    #[test]
    fn zero_interval_reveals_at_once() {
        let mut tw = Typewriter::new(Duration::ZERO);
        tw.set_text(Some("instant"));
        assert!(tw.update(Duration::ZERO));
        assert!(tw.is_complete());
    }
}
