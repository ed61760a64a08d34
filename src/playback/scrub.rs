use std::fmt;

/// Where a drag gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    MouseUp,
    TouchEnd,
}

impl fmt::Display for GestureEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GestureEnd::MouseUp => "mouseup",
            GestureEnd::TouchEnd => "touchend",
        };
        f.write_str(label)
    }
}

/// Malformed scrub gestures. Reported as diagnostics, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureError {
    ReleaseWithoutPending(GestureEnd),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::ReleaseWithoutPending(end) => {
                write!(f, "{end} released the scrub bar with no pending seek value")
            }
        }
    }
}

impl std::error::Error for GestureError {}

/// Outcome of a move on the scrub control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubStep {
    /// First move of a gesture: the view should report `seeking = true`.
    Started,
    /// Later move inside the same gesture.
    Moved,
}

/// Scrub/seek state machine for the position slider.
///
/// `idle` when no pending value is held, `seeking` while one is. The pending
/// value wins over the live clock for display until the gesture is released
/// or cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrubGesture {
    pending: Option<f64>,
}

impl ScrubGesture {
    pub fn is_seeking(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a drag position. Values are clamped to `[0, duration]` when
    /// the duration is usable. Non-finite input leaves the state untouched.
    pub fn update(&mut self, value: f64, duration: f64) -> Option<ScrubStep> {
        if !value.is_finite() {
            return None;
        }
        let value = if duration.is_finite() && duration > 0.0 {
            value.clamp(0.0, duration)
        } else {
            value.max(0.0)
        };
        let step = if self.pending.is_some() {
            ScrubStep::Moved
        } else {
            ScrubStep::Started
        };
        self.pending = Some(value);
        Some(step)
    }

    /// Position to render: the pending value while seeking, the live clock otherwise.
    pub fn display(&self, live: f64) -> f64 {
        self.pending.unwrap_or(live)
    }

    /// Ends the gesture. Returns the seek target to commit, exactly once.
    pub fn release(&mut self, end: GestureEnd) -> Result<f64, GestureError> {
        self.pending
            .take()
            .ok_or(GestureError::ReleaseWithoutPending(end))
    }

    /// Abandons the gesture without seeking. Returns whether it was seeking.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Applies a drag move and reports `seeking = true` on the first one.
    pub fn drag(&mut self, value: f64, duration: f64, mut on_seeking: impl FnMut(bool)) {
        if let Some(ScrubStep::Started) = self.update(value, duration) {
            on_seeking(true);
        }
    }

    /// Releases the gesture: one seek to the pending value, then
    /// `seeking = false`. Nothing is reported when no value was pending.
    pub fn finish(
        &mut self,
        end: GestureEnd,
        mut on_seek: impl FnMut(f64),
        mut on_seeking: impl FnMut(bool),
    ) -> Result<(), GestureError> {
        let target = self.release(end)?;
        on_seek(target);
        on_seeking(false);
        Ok(())
    }

    /// Commits a value still pending when the control reports `change`.
    ///
    /// Keyboard edits on the slider never produce a pointer release, so this
    /// is their only commit path. After a pointer release nothing is pending
    /// and the call is silent. Returns whether a seek was reported.
    pub fn settle(&mut self, mut on_seek: impl FnMut(f64), mut on_seeking: impl FnMut(bool)) -> bool {
        let Some(target) = self.pending.take() else {
            return false;
        };
        on_seek(target);
        on_seeking(false);
        true
    }

    /// Interrupted gestures are cancelled, never committed.
    pub fn interrupt(&mut self, mut on_seeking: impl FnMut(bool)) {
        if self.cancel() {
            on_seeking(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefers_pending_value_over_live_clock() {
        let mut gesture = ScrubGesture::default();
        assert_eq!(gesture.display(12.0), 12.0);

        gesture.update(40.0, 200.0);
        for live in [12.5, 13.0, 99.0] {
            assert_eq!(gesture.display(live), 40.0);
        }
    }

    #[test]
    fn first_move_starts_and_later_moves_continue() {
        let mut gesture = ScrubGesture::default();
        assert_eq!(gesture.update(5.0, 100.0), Some(ScrubStep::Started));
        assert_eq!(gesture.update(7.5, 100.0), Some(ScrubStep::Moved));
        assert!(gesture.is_seeking());
        assert_eq!(gesture.display(0.0), 7.5);
    }

    #[test]
    fn release_commits_pending_once() {
        let mut gesture = ScrubGesture::default();
        gesture.update(30.0, 100.0);
        assert_eq!(gesture.release(GestureEnd::MouseUp), Ok(30.0));
        assert!(!gesture.is_seeking());
        assert_eq!(
            gesture.release(GestureEnd::MouseUp),
            Err(GestureError::ReleaseWithoutPending(GestureEnd::MouseUp))
        );
    }

    #[test]
    fn release_without_move_is_a_diagnostic() {
        let mut gesture = ScrubGesture::default();
        let err = gesture.release(GestureEnd::TouchEnd).unwrap_err();
        assert_eq!(
            err.to_string(),
            "touchend released the scrub bar with no pending seek value"
        );
        assert!(!gesture.is_seeking());
    }

    #[test]
    fn cancel_discards_pending() {
        let mut gesture = ScrubGesture::default();
        assert!(!gesture.cancel());
        gesture.update(10.0, 100.0);
        assert!(gesture.cancel());
        assert_eq!(gesture.display(3.0), 3.0);
        assert!(gesture.release(GestureEnd::MouseUp).is_err());
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Seek(f64),
        Seeking(bool),
    }

    #[test]
    fn drag_then_release_seeks_exactly_once() {
        let mut calls = Vec::new();
        let mut gesture = ScrubGesture::default();
        gesture.drag(10.0, 100.0, |v| calls.push(Call::Seeking(v)));
        gesture.drag(20.0, 100.0, |v| calls.push(Call::Seeking(v)));
        gesture.drag(42.0, 100.0, |v| calls.push(Call::Seeking(v)));

        let mut seeks = Vec::new();
        let mut flags = Vec::new();
        gesture
            .finish(GestureEnd::MouseUp, |t| seeks.push(t), |v| flags.push(v))
            .unwrap();
        calls.extend(seeks.into_iter().map(Call::Seek));
        calls.extend(flags.into_iter().map(Call::Seeking));

        assert_eq!(
            calls,
            vec![Call::Seeking(true), Call::Seek(42.0), Call::Seeking(false)]
        );
    }

    #[test]
    fn seek_is_reported_before_seeking_clears() {
        let order = std::cell::RefCell::new(Vec::new());
        let mut gesture = ScrubGesture::default();
        gesture.drag(8.0, 60.0, |_| {});
        gesture
            .finish(
                GestureEnd::TouchEnd,
                |t| order.borrow_mut().push(Call::Seek(t)),
                |v| order.borrow_mut().push(Call::Seeking(v)),
            )
            .unwrap();
        assert_eq!(
            order.into_inner(),
            vec![Call::Seek(8.0), Call::Seeking(false)]
        );
    }

    #[test]
    fn release_without_pending_reports_nothing() {
        let mut seeks = 0;
        let mut flags = 0;
        let mut gesture = ScrubGesture::default();
        let result = gesture.finish(GestureEnd::MouseUp, |_| seeks += 1, |_| flags += 1);
        assert!(result.is_err());
        assert_eq!(seeks, 0);
        assert_eq!(flags, 0);
    }

    #[test]
    fn interrupt_clears_seeking_without_seek() {
        let mut flags = Vec::new();
        let mut gesture = ScrubGesture::default();
        gesture.interrupt(|v| flags.push(v));
        assert!(flags.is_empty());

        gesture.drag(15.0, 100.0, |v| flags.push(v));
        gesture.interrupt(|v| flags.push(v));
        assert_eq!(flags, vec![true, false]);
        assert!(!gesture.is_seeking());
    }

    #[test]
    fn update_clamps_to_duration_and_ignores_nan() {
        let mut gesture = ScrubGesture::default();
        assert_eq!(gesture.update(f64::NAN, 100.0), None);
        assert!(!gesture.is_seeking());
        gesture.update(250.0, 100.0);
        assert_eq!(gesture.display(1.0), 100.0);
        gesture.update(-4.0, 100.0);
        assert_eq!(gesture.display(1.0), 0.0);
        gesture.update(250.0, f64::NAN);
        assert_eq!(gesture.display(1.0), 250.0);
    }

    #[test]
    fn settle_commits_a_keyboard_change() {
        let mut calls = Vec::new();
        let mut gesture = ScrubGesture::default();
        gesture.drag(70.0, 200.0, |v| calls.push(Call::Seeking(v)));

        let seeks = std::cell::RefCell::new(Vec::new());
        let committed = gesture.settle(
            |t| seeks.borrow_mut().push(Call::Seek(t)),
            |v| seeks.borrow_mut().push(Call::Seeking(v)),
        );
        calls.extend(seeks.into_inner());

        assert!(committed);
        assert!(!gesture.is_seeking());
        assert_eq!(
            calls,
            vec![Call::Seeking(true), Call::Seek(70.0), Call::Seeking(false)]
        );
    }

    #[test]
    fn settle_after_release_is_silent() {
        let mut seeks = Vec::new();
        let mut gesture = ScrubGesture::default();
        gesture.drag(55.0, 100.0, |_| {});
        gesture
            .finish(GestureEnd::MouseUp, |t| seeks.push(t), |_| {})
            .unwrap();

        let mut flags = Vec::new();
        assert!(!gesture.settle(|t| seeks.push(t), |v| flags.push(v)));
        assert_eq!(seeks, vec![55.0]);
        assert!(flags.is_empty());
    }
}
