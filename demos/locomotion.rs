//! Locomotion Animator
//!
//! This example drives a platformer character's animations from a scripted
//! input timeline.
//!
//! Key concepts:
//! - Float, bool and enum parameters written by host code
//! - Local connections between Idle, Walk and Run
//! - A global AnyState connection into Hurt
//! - Exit time: Hurt plays through once before returning to Idle
//! - Lint and switch history introspection
//!
//! Run with: RUST_LOG=animstate=debug cargo run --example locomotion

use animstate::animation::FrameAnimation;
use animstate::builder::{AnimatorBuilder, ConnectionBuilder};
use animstate::core::{ConditionOp, EnumValue, ParamHandle, State};
use animstate::machine::AnimatorConfig;
use animstate::param_enum;

param_enum! {
    enum Ground {
        Air,
        Floor,
    }
}

fn frames(names: &[&'static str], frame_duration: f64) -> FrameAnimation<&'static str> {
    FrameAnimation::new(names.to_vec(), frame_duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,animstate=debug".into()),
        )
        .init();

    println!("=== Locomotion Animator ===\n");

    let speed = ParamHandle::float("speed", 0.0);
    let hurt = ParamHandle::boolean("hurt", false);
    let ground = ParamHandle::enumeration("ground", Ground::Floor);

    let config = AnimatorConfig::from_json(r#"{ "history_limit": 16 }"#)?;

    let mut animator = AnimatorBuilder::new()
        .config(config)
        .state(State::new("Idle", frames(&["idle_0", "idle_1"], 0.25)))
        .state(State::new("Walk", frames(&["walk_0", "walk_1", "walk_2"], 0.125)))
        .state(State::new("Run", frames(&["run_0", "run_1"], 0.0625)))
        .state(State::new("Fall", frames(&["fall"], 0.25)))
        .state(State::new("Hurt", frames(&["hurt_0", "hurt_1"], 0.125)))
        .connect(
            ConnectionBuilder::new()
                .from("Idle")
                .to("Walk")
                .when(&speed, ConditionOp::GTR, 0.1),
        )?
        .connect(
            ConnectionBuilder::new()
                .from("Walk")
                .to("Run")
                .when(&speed, ConditionOp::GEQ, 3.0),
        )?
        .connect(
            ConnectionBuilder::new()
                .from("Run")
                .to("Walk")
                .when(&speed, ConditionOp::LSS, 3.0),
        )?
        .connect(
            ConnectionBuilder::new()
                .from("Walk")
                .to("Idle")
                .when(&speed, ConditionOp::LEQ, 0.1),
        )?
        .connect(
            ConnectionBuilder::new()
                .from_any()
                .to("Fall")
                .when(&ground, ConditionOp::EQU, EnumValue::of(Ground::Air)),
        )?
        .connect(
            ConnectionBuilder::new()
                .from("Fall")
                .to("Idle")
                .when(&ground, ConditionOp::EQU, EnumValue::of(Ground::Floor))
                .resets_animation(),
        )?
        .connect(
            ConnectionBuilder::new()
                .from_any()
                .to("Hurt")
                .when(&hurt, ConditionOp::EQU, true)
                .resets_animation(),
        )?
        .connect(ConnectionBuilder::new().from("Hurt").to("Idle").exit_time())?
        .build()?;

    match animator.lint() {
        stillwater::validation::Validation::Success(_) => println!("Lint: clean\n"),
        stillwater::validation::Validation::Failure(issues) => {
            for issue in issues.iter() {
                println!("Lint: {}", issue);
            }
        }
    }

    let dt = 1.0 / 16.0;
    for tick in 0..48 {
        match tick {
            4 => {
                animator.set_float("speed", 1.5);
            }
            12 => {
                animator.set_float("speed", 4.0);
            }
            20 => {
                animator.set_enum("ground", Ground::Air);
            }
            24 => {
                animator.set_enum("ground", Ground::Floor);
            }
            28 => {
                animator.set_bool("hurt", true);
            }
            29 => {
                animator.set_bool("hurt", false);
            }
            36 => {
                animator.set_float("speed", 0.0);
            }
            _ => {}
        }

        let switched = animator.update(dt);
        println!(
            "tick {:>2} | {:<5} | {:<7}{}",
            tick,
            animator.current_state_name().unwrap_or("-"),
            animator.current_animation_value(),
            if switched.is_some() { "  <- switched" } else { "" }
        );
    }

    println!("\nPath: {}", animator.history().path().join(" -> "));
    if let Some(span) = animator.history().machine_span() {
        println!("Switch span: {:.3}s of machine time", span);
    }

    Ok(())
}
