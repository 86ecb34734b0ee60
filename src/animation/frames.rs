//! Fixed-rate frame sequence.

use super::Animation;

/// Frame sequence played at a constant per-frame duration, looping forever.
///
/// # Example
///
/// ```rust
/// use animstate::animation::{Animation, FrameAnimation};
///
/// let mut walk = FrameAnimation::new(vec![0u32, 1, 2], 0.25);
/// walk.start();
/// walk.advance(0.375);
/// assert_eq!(walk.value(), 1);
///
/// walk.advance(0.5);
/// assert_eq!(walk.value(), 0);
/// assert!(walk.has_looped_once());
/// ```
#[derive(Clone, Debug)]
pub struct FrameAnimation<T> {
    frames: Vec<T>,
    frame_duration: f64,
    current: usize,
    timer: f64,
    playing: bool,
    automatic: bool,
    looped_once: bool,
}

impl<T: Clone + Default> FrameAnimation<T> {
    /// Create a stopped animation over `frames`, each shown for `frame_duration` seconds.
    pub fn new(frames: Vec<T>, frame_duration: f64) -> Self {
        Self {
            frames,
            frame_duration,
            current: 0,
            timer: 0.0,
            playing: false,
            automatic: true,
            looped_once: false,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.current
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Total length of one loop in seconds.
    pub fn loop_duration(&self) -> f64 {
        self.frame_duration * self.frames.len() as f64
    }
}

impl<T: Clone + Default> Animation for FrameAnimation<T> {
    type Value = T;

    fn start(&mut self) {
        self.playing = true;
        self.automatic = true;
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn reset(&mut self) {
        self.current = 0;
        self.timer = 0.0;
        self.looped_once = false;
    }

    fn advance(&mut self, elapsed: f64) {
        if !self.playing || !self.automatic || self.frames.is_empty() || self.frame_duration <= 0.0
        {
            return;
        }
        if !elapsed.is_finite() || elapsed < 0.0 {
            return;
        }

        self.timer += elapsed;
        let steps = (self.timer / self.frame_duration).floor();
        if steps < 1.0 {
            return;
        }

        // Closed form; steps may be astronomically large.
        self.timer %= self.frame_duration;
        let len = self.frames.len() as f64;
        let reached = self.current as f64 + steps;
        if reached >= len {
            self.looped_once = true;
        }
        self.current = (reached % len) as usize;
    }

    fn value(&self) -> T {
        self.frames.get(self.current).cloned().unwrap_or_default()
    }

    fn has_looped_once(&self) -> bool {
        self.looped_once
    }

    fn is_automatic(&self) -> bool {
        self.automatic
    }

    fn set_automatic(&mut self, automatic: bool) {
        self.automatic = automatic;
    }
}
