//! Animation hosts driven by the state machine.
//!
//! The machine never owns a clock. It forwards the host's elapsed time to
//! the active state's animation and reads the loop flag back for exit-time
//! gating. Any type implementing [`Animation`] can be bound to a state.

mod frames;

pub use frames::FrameAnimation;

/// Unit of time-based work bound to a state.
///
/// # Example
///
/// ```rust
/// use animstate::animation::Animation;
///
/// #[derive(Default)]
/// struct Blink {
///     lit: bool,
///     playing: bool,
///     automatic: bool,
///     toggles: u32,
/// }
///
/// impl Animation for Blink {
///     type Value = bool;
///
///     fn start(&mut self) {
///         self.playing = true;
///     }
///     fn stop(&mut self) {
///         self.playing = false;
///     }
///     fn reset(&mut self) {
///         self.lit = false;
///         self.toggles = 0;
///     }
///     fn advance(&mut self, _elapsed: f64) {
///         if self.playing {
///             self.lit = !self.lit;
///             self.toggles += 1;
///         }
///     }
///     fn value(&self) -> bool {
///         self.lit
///     }
///     fn has_looped_once(&self) -> bool {
///         self.toggles >= 2
///     }
///     fn is_automatic(&self) -> bool {
///         self.automatic
///     }
///     fn set_automatic(&mut self, automatic: bool) {
///         self.automatic = automatic;
///     }
/// }
/// ```
pub trait Animation {
    /// Payload produced each frame (a sprite index, a pose, a color...).
    type Value: Clone + Default;

    fn start(&mut self);

    fn stop(&mut self);

    /// Rewind to the beginning and clear the loop flag.
    fn reset(&mut self);

    /// Progress by `elapsed` seconds.
    fn advance(&mut self, elapsed: f64);

    fn value(&self) -> Self::Value;

    /// True once at least one full loop has completed since the last reset.
    fn has_looped_once(&self) -> bool;

    fn is_automatic(&self) -> bool;

    fn set_automatic(&mut self, automatic: bool);
}
