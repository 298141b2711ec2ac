//! Frame-driven numeric tweens for the animated price counters.

/// Duration of a counter animation.
pub const COUNTER_DURATION_MS: f64 = 1000.0;

/// Unit appended to every displayed price.
pub const PRICE_UNIT: &str = "Rs/qtl";

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Formats a price the way the counters display it.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    Running,
    Finished,
    Cancelled,
}

/// One step of a running tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Intermediate value to render.
    Render(f64),
    /// Final frame; always exactly the target.
    Done(f64),
}

impl Frame {
    pub fn value(&self) -> f64 {
        match self {
            Frame::Render(v) | Frame::Done(v) => *v,
        }
    }
}

/// Interpolates `from` to `to` over `duration_ms`.
///
/// The clock starts at the first [`Tween::frame`] call, so the first frame
/// always renders `from`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: fn(f64) -> f64,
    started_at: Option<f64>,
    state: TweenState,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self::with_easing(from, to, duration_ms, ease_out_quad)
    }

    pub fn with_easing(from: f64, to: f64, duration_ms: f64, easing: fn(f64) -> f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            started_at: None,
            state: TweenState::Running,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    /// Value after `elapsed_ms`, with progress clamped to `[0, 1]`.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * (self.easing)(progress)
    }

    /// Advances to timestamp `now_ms`. Returns `None` once finished or cancelled.
    pub fn frame(&mut self, now_ms: f64) -> Option<Frame> {
        if !self.is_running() {
            return None;
        }
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;
        if elapsed >= self.duration_ms {
            self.state = TweenState::Finished;
            Some(Frame::Done(self.to))
        } else {
            Some(Frame::Render(self.value_at(elapsed)))
        }
    }

    /// Stops producing frames. Has no effect on a finished tween.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.state = TweenState::Cancelled;
        }
    }
}

/// A displayed price that animates towards new targets.
#[derive(Debug, Clone, Default)]
pub struct PriceCounter {
    displayed: f64,
    tween: Option<Tween>,
}

impl PriceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn text(&self) -> String {
        format_price(self.displayed)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.as_ref().is_some_and(Tween::is_running)
    }

    /// Starts animating from the currently displayed value to `target`,
    /// cancelling any animation in flight.
    pub fn retarget(&mut self, target: f64) {
        if let Some(tween) = self.tween.as_mut() {
            tween.cancel();
        }
        self.tween = Some(Tween::new(self.displayed, target, COUNTER_DURATION_MS));
    }

    /// Renders the frame for `now_ms`. Returns whether more frames follow.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        match tween.frame(now_ms) {
            Some(Frame::Render(value)) => {
                self.displayed = value;
                true
            }
            Some(Frame::Done(value)) => {
                self.displayed = value;
                false
            }
            None => false,
        }
    }

    /// Stops the animation, keeping whatever was last rendered.
    pub fn cancel(&mut self) {
        if let Some(tween) = self.tween.as_mut() {
            tween.cancel();
        }
    }

    /// Cancels and shows `0.00`.
    pub fn reset(&mut self) {
        self.cancel();
        self.tween = None;
        self.displayed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_quad_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn tween_produces_monotonic_frames_and_exact_end() {
        let mut tween = Tween::new(0.0, 1000.0, 1000.0);
        let mut last = -1.0;
        let mut frames = Vec::new();
        for now in (0..=1100).step_by(100) {
            if let Some(frame) = tween.frame(now as f64) {
                assert!(frame.value() >= last);
                last = frame.value();
                frames.push(frame);
            }
        }
        assert_eq!(frames.first(), Some(&Frame::Render(0.0)));
        assert_eq!(frames.last(), Some(&Frame::Done(1000.0)));
        assert_eq!(tween.state(), TweenState::Finished);
        assert_eq!(tween.frame(5000.0), None);
    }

    #[test]
    fn clock_starts_at_first_frame() {
        let mut tween = Tween::new(10.0, 20.0, 100.0);
        assert_eq!(tween.frame(5_000.0), Some(Frame::Render(10.0)));
        assert_eq!(tween.frame(5_050.0), Some(Frame::Render(17.5)));
        assert_eq!(tween.frame(5_100.0), Some(Frame::Done(20.0)));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut tween = Tween::new(3.0, 9.0, 0.0);
        assert_eq!(tween.frame(1.0), Some(Frame::Done(9.0)));
    }

    #[test]
    fn counters_converge_to_prediction() {
        let mut min = PriceCounter::new();
        let mut max = PriceCounter::new();
        let mut modal = PriceCounter::new();
        min.retarget(1000.0);
        max.retarget(2000.0);
        modal.retarget(1500.0);

        let mut now = 0.0;
        while min.tick(now) | max.tick(now) | modal.tick(now) {
            now += 16.0;
        }

        assert_eq!(min.text(), "1000.00");
        assert_eq!(max.text(), "2000.00");
        assert_eq!(modal.text(), "1500.00");
        assert!(!min.is_animating());
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut counter = PriceCounter::new();
        counter.retarget(1000.0);
        counter.tick(0.0);
        counter.tick(500.0);
        let midway = counter.displayed();
        assert_eq!(midway, 750.0);

        counter.retarget(0.0);
        counter.tick(10_000.0);
        assert_eq!(counter.displayed(), midway);
        counter.tick(11_000.0);
        assert_eq!(counter.text(), "0.00");
    }

    #[test]
    fn cancel_keeps_last_rendered_value() {
        let mut counter = PriceCounter::new();
        counter.retarget(400.0);
        counter.tick(0.0);
        counter.tick(250.0);
        let shown = counter.displayed();
        counter.cancel();
        assert!(!counter.tick(2_000.0));
        assert_eq!(counter.displayed(), shown);
        assert!(shown > 0.0 && shown < 400.0);
    }

    #[test]
    fn reset_shows_zero() {
        let mut counter = PriceCounter::new();
        counter.retarget(99.0);
        counter.tick(0.0);
        counter.tick(2_000.0);
        counter.reset();
        assert_eq!(counter.text(), "0.00");
        assert!(!counter.tick(3_000.0));
    }
}
