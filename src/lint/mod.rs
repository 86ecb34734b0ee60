//! Topology lint for animators.
//!
//! Runs every check and accumulates ALL issues with Stillwater's
//! `Validation` instead of stopping at the first one, so a broken machine
//! definition can be fixed in a single pass.
//!
//! # Example
//!
//! ```rust
//! use animstate::animation::FrameAnimation;
//! use animstate::core::State;
//! use animstate::lint::LintIssue;
//! use animstate::machine::Animator;
//! use stillwater::validation::Validation;
//!
//! let mut animator: Animator<FrameAnimation<u32>> = Animator::new();
//! animator.add_state(State::new("Idle", FrameAnimation::new(vec![0], 0.1)));
//! animator.add_state(State::unbound("Orphan"));
//!
//! match animator.lint() {
//!     Validation::Failure(issues) => {
//!         assert_eq!(issues.len(), 2);
//!         assert!(issues
//!             .iter()
//!             .any(|i| matches!(i, LintIssue::UnboundState { .. })));
//!     }
//!     Validation::Success(_) => panic!("Expected lint issues"),
//! }
//! ```

mod issues;

pub use issues::LintIssue;

use crate::animation::Animation;
use crate::core::StateId;
use crate::machine::Animator;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a lint pass.
pub type LintResult = Validation<(), NonEmptyVec<LintIssue>>;

impl<A: Animation> Animator<A> {
    /// Check the topology, accumulating every issue found.
    pub fn lint(&self) -> LintResult {
        let mut issues = Vec::new();
        duplicate_parameter_names(self, &mut issues);
        condition_issues(self, &mut issues);
        animation_issues(self, &mut issues);
        unreachable_states(self, &mut issues);

        let mut checks: Vec<LintResult> = vec![Validation::success(())];
        checks.extend(issues.into_iter().map(Validation::fail));
        Validation::all_vec(checks).map(|_| ())
    }
}

fn duplicate_parameter_names<A: Animation>(animator: &Animator<A>, issues: &mut Vec<LintIssue>) {
    let mut seen: Vec<String> = Vec::new();
    for parameter in animator.parameters() {
        let name = parameter.get().name().to_string();
        if seen.contains(&name) {
            continue;
        }
        let count = animator
            .parameters()
            .iter()
            .filter(|p| p.has_name(&name))
            .count();
        if count > 1 {
            issues.push(LintIssue::DuplicateParameterName {
                name: name.clone(),
                count,
            });
        }
        seen.push(name);
    }
}

fn condition_issues<A: Animation>(animator: &Animator<A>, issues: &mut Vec<LintIssue>) {
    for (_, state) in animator.states() {
        for edge in state.connections() {
            let to = state_name(animator, edge.to());
            for condition in edge.conditions() {
                let handle = condition.parameter();
                let parameter = handle.get();

                if !animator.parameters().iter().any(|p| p.ptr_eq(handle)) {
                    issues.push(LintIssue::UnregisteredParameter {
                        from: state.name().to_string(),
                        to: to.clone(),
                        parameter: parameter.name().to_string(),
                    });
                }
                if !parameter.accepts(&condition.operand()) {
                    issues.push(LintIssue::OperandShapeMismatch {
                        from: state.name().to_string(),
                        to: to.clone(),
                        parameter: parameter.name().to_string(),
                        expected: parameter.value().kind(),
                        got: condition.operand().kind(),
                    });
                }
            }
        }
    }
}

fn animation_issues<A: Animation>(animator: &Animator<A>, issues: &mut Vec<LintIssue>) {
    for (id, state) in animator.states() {
        if id.is_any() || state.animation().is_some() {
            continue;
        }
        issues.push(LintIssue::UnboundState {
            state: state.name().to_string(),
        });
        for edge in state.connections().iter().filter(|e| e.requires_exit_time()) {
            issues.push(LintIssue::ExitTimeWithoutAnimation {
                from: state.name().to_string(),
                to: state_name(animator, edge.to()),
            });
        }
    }
}

fn unreachable_states<A: Animation>(animator: &Animator<A>, issues: &mut Vec<LintIssue>) {
    let targeted = |id: StateId| {
        animator
            .states()
            .any(|(_, state)| state.connection_to(id).is_some())
    };

    for (id, state) in animator.states() {
        if id.is_any() || animator.current_state() == Some(id) || targeted(id) {
            continue;
        }
        issues.push(LintIssue::UnreachableState {
            state: state.name().to_string(),
        });
    }
}

fn state_name<A: Animation>(animator: &Animator<A>, id: StateId) -> String {
    animator
        .state(id)
        .map(|s| s.name().to_string())
        .unwrap_or_else(|| id.to_string())
}
