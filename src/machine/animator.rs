//! Parameterized state machine driving bound animations.

use super::config::AnimatorConfig;
use super::error::TopologyError;
use crate::animation::Animation;
use crate::core::{
    Condition, Connection, EnumValue, ParamEnum, ParamHandle, ParamValue, State, StateId, StateSwitch,
    SwitchCause, SwitchHistory,
};
use chrono::Utc;
use tracing::{debug, trace, warn};

/// Name of the sentinel state holding global connections.
pub const ANY_STATE: &str = "AnyState";

/// Reset, stop, then clear the automatic flag of an animation.
pub fn stop_animation<A: Animation>(animation: &mut A) {
    animation.reset();
    animation.stop();
    animation.set_automatic(false);
}

/// Parameterized finite-state machine over animations of type `A`.
///
/// Owns the parameter table, the state arena (with AnyState at index 0) and
/// the current-state pointer. The host drives it by calling [`update`]
/// once per frame.
///
/// # Example
///
/// ```rust
/// use animstate::animation::FrameAnimation;
/// use animstate::core::{Condition, ConditionOp, ParamHandle, State};
/// use animstate::machine::Animator;
///
/// let mut animator = Animator::new();
/// let idle = animator.add_state(State::new("Idle", FrameAnimation::new(vec![0u32], 0.1)));
/// let walk = animator.add_state(State::new("Walk", FrameAnimation::new(vec![1u32, 2], 0.1)));
///
/// let speed = ParamHandle::float("speed", 0.0);
/// animator
///     .create_connection(idle, walk, false, false, vec![
///         Condition::new(&speed, 0.5, ConditionOp::GTR),
///     ])
///     .unwrap();
///
/// animator.update(0.016);
/// assert_eq!(animator.current_state(), Some(idle));
///
/// animator.set_float("speed", 1.0);
/// animator.update(0.016);
/// assert_eq!(animator.current_state(), Some(walk));
/// assert_eq!(animator.current_animation_value(), 1);
/// ```
///
/// [`update`]: Animator::update
#[derive(Debug)]
pub struct Animator<A> {
    states: Vec<State<A>>,
    parameters: Vec<ParamHandle>,
    current: Option<StateId>,
    history: SwitchHistory,
    machine_time: f64,
    config: AnimatorConfig,
}

impl<A: Animation> Default for Animator<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Animation> Animator<A> {
    /// Create an empty machine containing only AnyState.
    pub fn new() -> Self {
        Self::with_config(AnimatorConfig::default())
    }

    pub fn with_config(config: AnimatorConfig) -> Self {
        Self {
            states: vec![State::unbound(ANY_STATE)],
            parameters: Vec::new(),
            current: None,
            history: SwitchHistory::new(config.history_limit),
            machine_time: 0.0,
            config,
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Add a state and return its id.
    ///
    /// The first state added becomes current.
    pub fn add_state(&mut self, state: State<A>) -> StateId {
        let id = StateId(self.states.len());
        debug!(state = state.name(), %id, "state added");
        self.states.push(state);

        if self.current.is_none() {
            self.current = Some(id);
            if self.config.start_initial_animation {
                if let Some(animation) = self.states[id.0].animation_mut() {
                    animation.start();
                }
            }
        }
        id
    }

    /// Register a parameter. Returns `false` if this exact handle is
    /// already registered.
    pub fn add_parameter(&mut self, parameter: ParamHandle) -> bool {
        if self.parameters.iter().any(|p| p.ptr_eq(&parameter)) {
            return false;
        }
        self.parameters.push(parameter);
        true
    }

    /// Connect `from` to `to`, registering every parameter the conditions use.
    ///
    /// Returns `Ok(false)` when an edge between the two states already
    /// exists; the first edge wins and the new one is dropped.
    ///
    /// # Errors
    ///
    /// Connecting into AnyState, connecting a state to itself, or naming a
    /// state of another machine. The topology is left unchanged.
    pub fn create_connection(
        &mut self,
        from: StateId,
        to: StateId,
        requires_exit_time: bool,
        resets_animation: bool,
        conditions: Vec<Condition>,
    ) -> Result<bool, TopologyError> {
        self.check_connection(from, to).inspect_err(|err| {
            warn!(error = %err, "connection rejected");
        })?;

        for condition in &conditions {
            self.add_parameter(condition.parameter().clone());
        }

        let added = self.states[from.0].create_connection(
            to,
            requires_exit_time,
            resets_animation,
            conditions,
        );
        if added {
            debug!(
                from = self.states[from.0].name(),
                to = self.states[to.0].name(),
                requires_exit_time,
                resets_animation,
                "connection created"
            );
        } else {
            trace!(
                from = self.states[from.0].name(),
                to = self.states[to.0].name(),
                "duplicate connection ignored"
            );
        }
        Ok(added)
    }

    fn check_connection(&self, from: StateId, to: StateId) -> Result<(), TopologyError> {
        let from_state = self.state(from).ok_or(TopologyError::UnknownState(from))?;
        self.state(to).ok_or(TopologyError::UnknownState(to))?;

        if to.is_any() {
            return Err(TopologyError::IntoAnyState {
                from: from_state.name().to_string(),
            });
        }
        if from == to {
            return Err(TopologyError::SelfLoop {
                state: from_state.name().to_string(),
            });
        }
        Ok(())
    }

    /// Mutable access to an existing edge, for adjusting its policy flags or
    /// appending conditions.
    pub fn connection_mut(&mut self, from: StateId, to: StateId) -> Option<&mut Connection> {
        self.states.get_mut(from.0)?.connection_to_mut(to)
    }

    /// Advance the current animation by `elapsed` seconds and perform at most
    /// one state switch.
    ///
    /// AnyState connections are checked first unless the first qualifying one
    /// targets the current state; otherwise the current state's own
    /// connections are checked. Returns the newly entered state, if any.
    /// Negative or non-finite deltas are treated as zero.
    pub fn update(&mut self, elapsed: f64) -> Option<StateId> {
        let elapsed = if elapsed.is_finite() && elapsed >= 0.0 {
            elapsed
        } else {
            warn!(elapsed, "invalid elapsed time clamped to zero");
            0.0
        };

        let current = self.current?;
        self.machine_time += elapsed;

        let state = &mut self.states[current.0];
        if let Some(animation) = state.animation_mut() {
            animation.advance(elapsed);
        }
        let exit_ready = self.states[current.0].exit_ready();

        let global = self.states[StateId::ANY.0]
            .next_connection(exit_ready)
            .filter(|edge| edge.to() != current)
            .map(|edge| (edge.to(), edge.stops_animation(), SwitchCause::Global));
        let (next, stops, cause) = global.or_else(|| {
            self.states[current.0]
                .next_connection(exit_ready)
                .map(|edge| (edge.to(), edge.stops_animation(), SwitchCause::Local))
        })?;

        self.switch_to(current, next, stops, cause);
        Some(next)
    }

    /// Make `id` the current state without evaluating any connection.
    ///
    /// The outgoing animation is stopped and the incoming one started.
    /// Targeting the state that is already current does nothing.
    pub fn set_current_state(&mut self, id: StateId) -> Result<(), TopologyError> {
        if id.is_any() {
            return Err(TopologyError::AnyStateNotActivatable);
        }
        if self.state(id).is_none() {
            return Err(TopologyError::UnknownState(id));
        }

        match self.current {
            Some(current) if current == id => {
                trace!(state = self.states[id.0].name(), "already current");
            }
            Some(current) => self.switch_to(current, id, true, SwitchCause::Forced),
            None => {
                self.current = Some(id);
                if let Some(animation) = self.states[id.0].animation_mut() {
                    animation.start();
                }
            }
        }
        Ok(())
    }

    fn switch_to(&mut self, from: StateId, to: StateId, stop_outgoing: bool, cause: SwitchCause) {
        if stop_outgoing {
            if let Some(animation) = self.states[from.0].animation_mut() {
                stop_animation(animation);
            }
        }

        self.current = Some(to);
        if let Some(animation) = self.states[to.0].animation_mut() {
            animation.start();
        }

        let from_name = self.states[from.0].name().to_string();
        let to_name = self.states[to.0].name().to_string();
        debug!(
            from = %from_name,
            to = %to_name,
            ?cause,
            machine_time = self.machine_time,
            "state switched"
        );
        self.history.record(StateSwitch {
            from: from_name,
            to: to_name,
            cause,
            machine_time: self.machine_time,
            timestamp: Utc::now(),
        });
    }

    /// First registered parameter with this name.
    pub fn parameter(&self, name: &str) -> Option<&ParamHandle> {
        self.parameters.iter().find(|p| p.has_name(name))
    }

    /// Set a float parameter. Unknown names and non-float parameters are
    /// ignored; the return value tells whether a write happened.
    pub fn set_float(&mut self, name: &str, value: f64) -> bool {
        self.write_param(name, ParamValue::Float(value), |v| {
            matches!(v, ParamValue::Float(_))
        })
    }

    /// Set a bool parameter. Unknown names and non-bool parameters are ignored.
    pub fn set_bool(&mut self, name: &str, value: bool) -> bool {
        self.write_param(name, ParamValue::Bool(value), |v| {
            matches!(v, ParamValue::Bool(_))
        })
    }

    /// Set an enum parameter. Unknown names, non-enum parameters and enums of
    /// another type are ignored.
    pub fn set_enum<E: ParamEnum>(&mut self, name: &str, value: E) -> bool {
        self.set_param(name, EnumValue::of(value))
    }

    /// Set any parameter, narrowing `value` to its variant.
    pub fn set_param(&mut self, name: &str, value: impl Into<ParamValue>) -> bool {
        self.write_param(name, value.into(), |_| true)
    }

    fn write_param(
        &mut self,
        name: &str,
        value: ParamValue,
        accepts: impl Fn(&ParamValue) -> bool,
    ) -> bool {
        let Some(parameter) = self.parameter(name) else {
            trace!(name, "write to unknown parameter ignored");
            return false;
        };
        if !accepts(&parameter.value()) || !parameter.set_value(value) {
            trace!(
                name,
                expected = parameter.value().kind(),
                got = value.kind(),
                "write with mismatched shape ignored"
            );
            return false;
        }
        true
    }

    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    pub fn current_state_name(&self) -> Option<&str> {
        self.current.map(|id| self.states[id.0].name())
    }

    pub fn current_animation(&self) -> Option<&A> {
        self.states[self.current?.0].animation()
    }

    pub fn current_animation_mut(&mut self) -> Option<&mut A> {
        let current = self.current?;
        self.states[current.0].animation_mut()
    }

    /// Value of the current animation, or the payload's default when there is
    /// no current state or it has no animation.
    pub fn current_animation_value(&self) -> A::Value {
        self.current_animation()
            .map(Animation::value)
            .unwrap_or_default()
    }

    pub fn any_state(&self) -> &State<A> {
        &self.states[StateId::ANY.0]
    }

    pub fn state(&self, id: StateId) -> Option<&State<A>> {
        self.states.get(id.0)
    }

    pub fn state_mut(&mut self, id: StateId) -> Option<&mut State<A>> {
        self.states.get_mut(id.0)
    }

    /// Id of the first state with this name.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name() == name)
            .map(StateId)
    }

    /// All states including AnyState, in insertion order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State<A>)> {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (StateId(index), state))
    }

    pub fn parameters(&self) -> &[ParamHandle] {
        &self.parameters
    }

    pub fn history(&self) -> &SwitchHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Sum of every elapsed delta applied while a state was current.
    pub fn machine_time(&self) -> f64 {
        self.machine_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConditionOp;

    /// Animation whose loop flag is set by the test.
    #[derive(Debug, Default)]
    struct Probe {
        id: u32,
        playing: bool,
        automatic: bool,
        looped: bool,
        advanced: f64,
        starts: u32,
        stops: u32,
        resets: u32,
    }

    impl Probe {
        fn new(id: u32) -> Self {
            Self {
                id,
                automatic: true,
                ..Self::default()
            }
        }
    }

    impl Animation for Probe {
        type Value = u32;

        fn start(&mut self) {
            self.playing = true;
            self.starts += 1;
        }
        fn stop(&mut self) {
            self.playing = false;
            self.stops += 1;
        }
        fn reset(&mut self) {
            self.looped = false;
            self.resets += 1;
        }
        fn advance(&mut self, elapsed: f64) {
            self.advanced += elapsed;
        }
        fn value(&self) -> u32 {
            self.id
        }
        fn has_looped_once(&self) -> bool {
            self.looped
        }
        fn is_automatic(&self) -> bool {
            self.automatic
        }
        fn set_automatic(&mut self, automatic: bool) {
            self.automatic = automatic;
        }
    }

    fn probe(animator: &Animator<Probe>, id: StateId) -> &Probe {
        animator.state(id).and_then(State::animation).unwrap()
    }

    fn two_states() -> (Animator<Probe>, StateId, StateId) {
        let mut animator = Animator::new();
        let a = animator.add_state(State::new("A", Probe::new(1)));
        let b = animator.add_state(State::new("B", Probe::new(2)));
        (animator, a, b)
    }

    #[test]
    fn update_without_states_is_noop() {
        let mut animator: Animator<Probe> = Animator::new();

        assert_eq!(animator.update(0.1), None);
        assert_eq!(animator.current_state(), None);
        assert_eq!(animator.current_animation_value(), 0);
        assert_eq!(animator.machine_time(), 0.0);
    }

    #[test]
    fn any_state_exists_at_construction() {
        let animator: Animator<Probe> = Animator::new();

        assert_eq!(animator.any_state().name(), ANY_STATE);
        assert!(animator.any_state().animation().is_none());
        assert_eq!(animator.state_by_name(ANY_STATE), Some(StateId::ANY));
    }

    #[test]
    fn first_state_becomes_current_and_starts() {
        let (animator, a, _) = two_states();

        assert_eq!(animator.current_state(), Some(a));
        assert_eq!(probe(&animator, a).starts, 1);
        assert_eq!(animator.current_animation_value(), 1);
    }

    #[test]
    fn initial_start_can_be_disabled() {
        let mut animator = Animator::with_config(AnimatorConfig {
            start_initial_animation: false,
            ..AnimatorConfig::default()
        });
        let a = animator.add_state(State::new("A", Probe::new(1)));

        assert_eq!(animator.current_state(), Some(a));
        assert_eq!(probe(&animator, a).starts, 0);
    }

    #[test]
    fn update_advances_current_animation() {
        let (mut animator, a, b) = two_states();
        animator.update(0.25);
        animator.update(0.5);

        assert_eq!(probe(&animator, a).advanced, 0.75);
        assert_eq!(probe(&animator, b).advanced, 0.0);
        assert_eq!(animator.machine_time(), 0.75);
    }

    #[test]
    fn invalid_elapsed_is_clamped() {
        let (mut animator, a, _) = two_states();
        animator.update(-1.0);
        animator.update(f64::NAN);

        assert_eq!(probe(&animator, a).advanced, 0.0);
        assert_eq!(animator.machine_time(), 0.0);
    }

    #[test]
    fn connection_into_any_state_is_rejected() {
        let (mut animator, a, _) = two_states();

        let result = animator.create_connection(a, StateId::ANY, false, false, Vec::new());

        assert_eq!(
            result,
            Err(TopologyError::IntoAnyState {
                from: "A".to_string()
            })
        );
        assert!(animator.state(a).unwrap().connections().is_empty());
        assert!(animator.any_state().connections().is_empty());
    }

    #[test]
    fn any_state_to_itself_is_into_any_state() {
        let (mut animator, _, _) = two_states();

        let result =
            animator.create_connection(StateId::ANY, StateId::ANY, false, false, Vec::new());

        assert!(matches!(result, Err(TopologyError::IntoAnyState { .. })));
    }

    #[test]
    fn self_loop_is_rejected_without_registering_parameters() {
        let (mut animator, a, _) = two_states();
        let speed = ParamHandle::float("speed", 0.0);

        let result = animator.create_connection(
            a,
            a,
            false,
            false,
            vec![Condition::new(&speed, 1.0, ConditionOp::GTR)],
        );

        assert_eq!(
            result,
            Err(TopologyError::SelfLoop {
                state: "A".to_string()
            })
        );
        assert!(animator.parameters().is_empty());
    }

    #[test]
    fn unknown_state_is_rejected() {
        let (mut animator, a, _) = two_states();

        let result = animator.create_connection(a, StateId(42), false, false, Vec::new());
        assert_eq!(result, Err(TopologyError::UnknownState(StateId(42))));
    }

    #[test]
    fn connection_registers_parameters_once() {
        let (mut animator, a, b) = two_states();
        let speed = ParamHandle::float("speed", 0.0);

        animator
            .create_connection(
                a,
                b,
                false,
                false,
                vec![
                    Condition::new(&speed, 1.0, ConditionOp::GTR),
                    Condition::new(&speed, 5.0, ConditionOp::LSS),
                ],
            )
            .unwrap();
        animator
            .create_connection(
                b,
                a,
                false,
                false,
                vec![Condition::new(&speed, 1.0, ConditionOp::LEQ)],
            )
            .unwrap();

        assert_eq!(animator.parameters().len(), 1);
    }

    #[test]
    fn duplicate_connection_is_noop() {
        let (mut animator, a, b) = two_states();

        assert_eq!(
            animator.create_connection(a, b, true, false, Vec::new()),
            Ok(true)
        );
        assert_eq!(
            animator.create_connection(a, b, false, true, Vec::new()),
            Ok(false)
        );

        let edge = animator.state(a).unwrap().connection_to(b).unwrap();
        assert!(edge.requires_exit_time());
        assert!(!edge.resets_animation());
    }

    #[test]
    fn unconditional_edge_switches_on_next_update() {
        let (mut animator, a, b) = two_states();
        animator
            .create_connection(a, b, false, false, Vec::new())
            .unwrap();

        assert_eq!(animator.update(0.1), Some(b));
        assert_eq!(animator.current_state(), Some(b));
        assert_eq!(animator.current_animation_value(), 2);
        assert_eq!(probe(&animator, b).starts, 1);
        // Neither reset nor exit time: outgoing animation keeps running.
        assert_eq!(probe(&animator, a).stops, 0);
        assert!(probe(&animator, a).automatic);
    }

    #[test]
    fn resetting_edge_stops_outgoing_animation() {
        let (mut animator, a, b) = two_states();
        animator
            .create_connection(a, b, false, true, Vec::new())
            .unwrap();

        animator.update(0.1);

        let a_probe = probe(&animator, a);
        assert_eq!(a_probe.resets, 1);
        assert_eq!(a_probe.stops, 1);
        assert!(!a_probe.playing);
        assert!(!a_probe.automatic);
    }

    #[test]
    fn exit_time_waits_for_loop() {
        let (mut animator, a, b) = two_states();
        animator
            .create_connection(a, b, true, false, Vec::new())
            .unwrap();

        for _ in 0..5 {
            assert_eq!(animator.update(0.1), None);
        }
        assert_eq!(animator.current_state(), Some(a));

        animator.current_animation_mut().unwrap().looped = true;
        assert_eq!(animator.update(0.1), Some(b));

        let a_probe = probe(&animator, a);
        assert_eq!(a_probe.resets, 1);
        assert_eq!(a_probe.stops, 1);
        assert!(!a_probe.automatic);
    }

    #[test]
    fn one_switch_per_update() {
        let mut animator = Animator::new();
        let a = animator.add_state(State::new("A", Probe::new(1)));
        let b = animator.add_state(State::new("B", Probe::new(2)));
        let c = animator.add_state(State::new("C", Probe::new(3)));
        animator.create_connection(a, b, false, false, Vec::new()).unwrap();
        animator.create_connection(b, c, false, false, Vec::new()).unwrap();

        assert_eq!(animator.update(0.0), Some(b));
        assert_eq!(animator.update(0.0), Some(c));
        assert_eq!(animator.update(0.0), None);
    }

    #[test]
    fn global_connection_takes_priority() {
        let mut animator = Animator::new();
        let a = animator.add_state(State::new("A", Probe::new(1)));
        let b = animator.add_state(State::new("B", Probe::new(2)));
        let c = animator.add_state(State::new("C", Probe::new(3)));
        animator.create_connection(a, b, false, false, Vec::new()).unwrap();
        animator
            .create_connection(StateId::ANY, c, false, false, Vec::new())
            .unwrap();

        assert_eq!(animator.update(0.1), Some(c));
        assert_eq!(animator.history().last().unwrap().cause, SwitchCause::Global);
    }

    #[test]
    fn global_connection_to_current_falls_back_to_local() {
        let mut animator = Animator::new();
        let a = animator.add_state(State::new("A", Probe::new(1)));
        let b = animator.add_state(State::new("B", Probe::new(2)));
        animator.create_connection(a, b, false, false, Vec::new()).unwrap();
        animator
            .create_connection(StateId::ANY, a, false, false, Vec::new())
            .unwrap();

        assert_eq!(animator.update(0.1), Some(b));
        assert_eq!(animator.history().last().unwrap().cause, SwitchCause::Local);
    }

    #[test]
    fn global_exit_time_uses_current_animation() {
        let (mut animator, a, b) = two_states();
        animator
            .create_connection(StateId::ANY, b, true, false, Vec::new())
            .unwrap();

        assert_eq!(animator.update(0.1), None);

        animator.current_animation_mut().unwrap().looped = true;
        assert_eq!(animator.update(0.1), Some(b));
        assert!(!probe(&animator, a).automatic);
    }

    #[test]
    fn set_current_state_bypasses_connections() {
        let mut animator = Animator::new();
        let a = animator.add_state(State::new("A", Probe::new(1)));
        let _b = animator.add_state(State::new("B", Probe::new(2)));
        let c = animator.add_state(State::new("C", Probe::new(3)));

        animator.set_current_state(c).unwrap();

        assert_eq!(animator.current_state(), Some(c));
        let a_probe = probe(&animator, a);
        assert_eq!(a_probe.stops, 1);
        assert!(!a_probe.automatic);
        assert_eq!(probe(&animator, c).starts, 1);
        assert_eq!(animator.history().last().unwrap().cause, SwitchCause::Forced);
    }

    #[test]
    fn set_current_state_to_current_is_noop() {
        let (mut animator, a, _) = two_states();
        animator.update(0.25);

        animator.set_current_state(a).unwrap();

        let a_probe = probe(&animator, a);
        assert_eq!(a_probe.starts, 1);
        assert_eq!(a_probe.stops, 0);
        assert_eq!(a_probe.resets, 0);
        assert!(a_probe.automatic);
        assert_eq!(a_probe.advanced, 0.25);
        assert!(animator.history().is_empty());
    }

    #[test]
    fn set_current_state_rejects_any_state_and_strangers() {
        let (mut animator, a, _) = two_states();

        assert_eq!(
            animator.set_current_state(StateId::ANY),
            Err(TopologyError::AnyStateNotActivatable)
        );
        assert_eq!(
            animator.set_current_state(StateId(9)),
            Err(TopologyError::UnknownState(StateId(9)))
        );
        assert_eq!(animator.current_state(), Some(a));
    }

    #[test]
    fn typed_setters_respect_variants() {
        let mut animator: Animator<Probe> = Animator::new();
        animator.add_parameter(ParamHandle::float("speed", 0.0));
        animator.add_parameter(ParamHandle::boolean("grounded", false));

        assert!(animator.set_float("speed", 2.0));
        assert!(!animator.set_float("grounded", 1.0));
        assert!(!animator.set_bool("speed", true));
        assert!(animator.set_bool("grounded", true));
        assert!(!animator.set_float("missing", 1.0));

        assert_eq!(
            animator.parameter("speed").unwrap().value(),
            ParamValue::Float(2.0)
        );
        assert_eq!(
            animator.parameter("grounded").unwrap().value(),
            ParamValue::Bool(true)
        );
    }

    #[test]
    fn set_param_narrows() {
        let mut animator: Animator<Probe> = Animator::new();
        animator.add_parameter(ParamHandle::boolean("grounded", false));

        assert!(animator.set_param("grounded", 1.0));
        assert_eq!(
            animator.parameter("grounded").unwrap().value(),
            ParamValue::Bool(true)
        );
    }

    #[test]
    fn parameter_lookup_returns_first_match() {
        let mut animator: Animator<Probe> = Animator::new();
        let first = ParamHandle::float("speed", 1.0);
        animator.add_parameter(first.clone());
        animator.add_parameter(ParamHandle::float("speed", 2.0));

        assert!(animator.parameter("speed").unwrap().ptr_eq(&first));
    }

    #[test]
    fn add_parameter_dedupes_by_identity() {
        let mut animator: Animator<Probe> = Animator::new();
        let speed = ParamHandle::float("speed", 1.0);

        assert!(animator.add_parameter(speed.clone()));
        assert!(!animator.add_parameter(speed));
        assert_eq!(animator.parameters().len(), 1);
    }

    #[test]
    fn history_records_switches() {
        let (mut animator, a, b) = two_states();
        animator.create_connection(a, b, false, false, Vec::new()).unwrap();
        animator.create_connection(b, a, false, false, Vec::new()).unwrap();

        animator.update(0.5);
        animator.update(0.5);

        assert_eq!(animator.history().path(), vec!["A", "B", "A"]);
        assert_eq!(animator.history().machine_span(), Some(0.5));
    }
}
