//! Smooth vertical scrolling driven by `requestAnimationFrame`.
//!
//! The timing math lives in [`ScrollTween`] so it can be exercised without a
//! browser. [`ScrollAnimator`] owns the frame callback and an animation token:
//! starting a new scroll retires whatever animation was still running.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no global window available")]
    NoWindow,
    #[error("could not schedule animation frame: {0}")]
    FrameRequest(String),
}

/// Ease-out quadratic: fast at first, decelerating towards the end.
pub fn ease_out(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Fraction of the animation that has elapsed, clamped to `0..=1`.
/// A non-positive duration counts as already complete.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub position: f64,
    pub elapsed_ms: f64,
    pub finished: bool,
}

/// Interpolates from `start` to `target` over `duration_ms`, with time
/// measured from the first sampled frame timestamp.
#[derive(Clone, Debug)]
pub struct ScrollTween {
    start: f64,
    target: f64,
    duration_ms: f64,
    origin: Option<f64>,
}

impl ScrollTween {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            target,
            duration_ms,
            origin: None,
        }
    }

    pub fn sample(&mut self, timestamp: f64) -> ScrollFrame {
        let origin = *self.origin.get_or_insert(timestamp);
        let elapsed_ms = timestamp - origin;
        let t = progress(elapsed_ms, self.duration_ms);

        // Snap on completion so rounding never leaves us a fraction short.
        let position = if t >= 1.0 {
            self.target
        } else {
            self.start + (self.target - self.start) * ease_out(t)
        };

        ScrollFrame {
            position,
            elapsed_ms,
            finished: elapsed_ms >= self.duration_ms,
        }
    }
}

/// Monotonic counter handing out animation tokens. Only the most recently
/// issued token is current.
#[derive(Debug, Default)]
pub struct TokenCounter {
    current: Cell<u64>,
}

impl TokenCounter {
    pub fn issue(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameAction {
    /// A newer scroll was started; leave the viewport alone.
    Superseded,
    Scroll(ScrollFrame),
}

/// One in-flight scroll, tagged with the token it was started under.
#[derive(Clone, Debug)]
pub struct Animation {
    token: u64,
    tween: ScrollTween,
}

impl Animation {
    pub fn new(token: u64, tween: ScrollTween) -> Self {
        Self { token, tween }
    }

    pub fn advance(&mut self, tokens: &TokenCounter, timestamp: f64) -> FrameAction {
        if !tokens.is_current(self.token) {
            return FrameAction::Superseded;
        }
        FrameAction::Scroll(self.tween.sample(timestamp))
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

#[derive(Default)]
struct AnimatorState {
    tokens: TokenCounter,
    pending: Cell<Option<i32>>,
    frame: RefCell<Option<FrameCallback>>,
}

impl AnimatorState {
    fn schedule(&self, window: &Window) -> Result<(), ScrollError> {
        let frame = self.frame.borrow();
        let Some(callback) = frame.as_ref() else {
            return Ok(());
        };
        let handle = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| ScrollError::FrameRequest(format!("{:?}", e)))?;
        self.pending.set(Some(handle));
        Ok(())
    }

    fn cancel_pending(&self, window: &Window) {
        if let Some(handle) = self.pending.take() {
            let _ = window.cancel_animation_frame(handle);
        }
    }

    fn finish(&self) {
        self.pending.set(None);
        // Dropping the closure breaks the state <-> callback cycle.
        let _ = self.frame.borrow_mut().take();
    }
}

/// Scrolls the window, one animation at a time.
#[derive(Clone, Default)]
pub struct ScrollAnimator {
    state: Rc<AnimatorState>,
}

impl PartialEq for ScrollAnimator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll to `target` over the default duration.
    pub fn scroll_to(&self, target: f64) -> Result<(), ScrollError> {
        self.start(target, config::DEFAULT_SCROLL_DURATION_MS)
    }

    pub fn start(&self, target: f64, duration_ms: f64) -> Result<(), ScrollError> {
        let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
        let start = window.scroll_y().unwrap_or(0.0);

        self.state.cancel_pending(&window);
        let token = self.state.tokens.issue();
        let mut animation = Animation::new(token, ScrollTween::new(start, target, duration_ms));
        debug!("scroll #{} from {} to {} over {}ms", token, start, target, duration_ms);

        let state = Rc::clone(&self.state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let frame = match animation.advance(&state.tokens, timestamp) {
                FrameAction::Superseded => return,
                FrameAction::Scroll(frame) => frame,
            };
            let Some(window) = web_sys::window() else {
                state.finish();
                return;
            };
            window.scroll_to_with_x_and_y(0.0, frame.position);
            if frame.finished {
                state.finish();
                return;
            }
            if let Err(e) = state.schedule(&window) {
                warn!("scroll #{} stopped early: {}", token, e);
                state.finish();
            }
        }) as Box<dyn FnMut(f64)>);

        *self.state.frame.borrow_mut() = Some(callback);
        self.state.schedule(&window).map_err(|e| {
            self.state.finish();
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Whole milliseconds keep the accumulated timestamps exact.
    const FRAME_MS: f64 = 16.0;

    fn run_to_end(tween: &mut ScrollTween, first_timestamp: f64) -> Vec<ScrollFrame> {
        let mut frames = Vec::new();
        let mut timestamp = first_timestamp;
        loop {
            let frame = tween.sample(timestamp);
            frames.push(frame);
            if frame.finished {
                return frames;
            }
            timestamp += FRAME_MS;
        }
    }

    #[test]
    fn ease_out_hits_both_ends() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn eased_progress_never_decreases() {
        let duration = 800.0;
        let mut last = 0.0;
        let mut elapsed = 0.0;
        while elapsed <= duration + 50.0 {
            let eased = ease_out(progress(elapsed, duration));
            assert!(eased >= last, "eased fell from {} to {} at {}ms", last, eased, elapsed);
            last = eased;
            elapsed += 3.7;
        }
        assert_eq!(ease_out(progress(duration, duration)), 1.0);
    }

    #[test]
    fn non_positive_duration_is_complete() {
        assert_eq!(progress(0.0, 0.0), 1.0);
        assert_eq!(progress(10.0, -5.0), 1.0);

        let mut tween = ScrollTween::new(40.0, 900.0, 0.0);
        let frame = tween.sample(1234.0);
        assert!(frame.finished);
        assert_eq!(frame.position, 900.0);
    }

    #[test]
    fn finishes_within_one_frame_of_duration_on_target() {
        for &(start, target, duration) in &[
            (0.0, 1500.0, 800.0),
            (2400.0, 0.0, 900.0),
            (0.1, 0.3, 250.0),
            (713.37, 12_345.678, 1000.0),
        ] {
            let mut tween = ScrollTween::new(start, target, duration);
            let frames = run_to_end(&mut tween, 98_765.0);
            let last = frames.last().copied().expect("at least one frame");

            assert!(last.elapsed_ms >= duration);
            assert!(last.elapsed_ms < duration + FRAME_MS);
            assert_eq!(last.position, target);
            assert!(frames[..frames.len() - 1].iter().all(|f| !f.finished));
        }
    }

    #[test]
    fn elapsed_time_starts_at_first_frame() {
        let mut tween = ScrollTween::new(100.0, 500.0, 800.0);
        let first = tween.sample(5_000.0);
        assert_eq!(first.elapsed_ms, 0.0);
        assert_eq!(first.position, 100.0);

        let second = tween.sample(5_400.0);
        assert_eq!(second.elapsed_ms, 400.0);
        // t = 0.5, eased = 0.75
        assert_eq!(second.position, 400.0);
    }

    #[test]
    fn scrolling_up_moves_towards_target() {
        let mut tween = ScrollTween::new(1000.0, 200.0, 800.0);
        let frames = run_to_end(&mut tween, 0.0);
        assert!(frames.windows(2).all(|w| w[1].position <= w[0].position));
        assert_eq!(frames.last().map(|f| f.position), Some(200.0));
    }

    #[test]
    fn newer_token_supersedes_running_animation() {
        let tokens = TokenCounter::default();
        let mut first = Animation::new(tokens.issue(), ScrollTween::new(0.0, 1000.0, 800.0));
        assert!(matches!(first.advance(&tokens, 0.0), FrameAction::Scroll(_)));

        let mut second = Animation::new(tokens.issue(), ScrollTween::new(300.0, 0.0, 800.0));
        assert_eq!(first.advance(&tokens, FRAME_MS), FrameAction::Superseded);
        match second.advance(&tokens, FRAME_MS) {
            FrameAction::Scroll(frame) => assert_eq!(frame.position, 300.0),
            FrameAction::Superseded => panic!("latest animation must keep running"),
        }
    }

    #[test]
    fn tokens_are_distinct() {
        let tokens = TokenCounter::default();
        let a = tokens.issue();
        let b = tokens.issue();
        assert_ne!(a, b);
        assert!(!tokens.is_current(a));
        assert!(tokens.is_current(b));
    }
}
