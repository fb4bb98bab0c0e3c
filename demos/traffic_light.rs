//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic event-driven transitions
//! - Direct jumps with `change_state`
//! - Undo/redo over the visited states
//! - Rejected events surfacing as errors instead of panics
//!
//! Run with: cargo run --example traffic_light

use waypoint::{fsm_config, Fsm};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = Fsm::new(fsm_config! {
        initial: Red,
        states: {
            Red => { next => Green },
            Green => { next => Yellow },
            Yellow => { next => Red },
            Flashing => { recover => Red },
        }
    });

    println!("Initial state: {}", light.state());
    println!("States: {:?}\n", light.states(None));

    println!("Cycling:");
    for _ in 0..4 {
        let from = light.state().clone();
        match light.trigger("next") {
            Ok(()) => println!("  {} -> {}", from, light.state()),
            Err(e) => println!("  rejected: {}", e),
        }
    }

    println!("\nFault detected, jumping to Flashing");
    if let Err(e) = light.change_state("Flashing") {
        println!("  rejected: {}", e);
    }
    println!("  now: {}", light.state());

    if let Err(e) = light.trigger("next") {
        println!("  'next' while flashing: {} ({})", e, e.error_code());
    }
    println!("  available events: {:?}", light.events());

    println!("\nUndo:");
    while light.undo() {
        println!("  back to {}", light.state());
    }

    println!("\nRedo the last undo:");
    if light.redo() {
        println!("  forward to {}", light.state());
    }

    light.reset();
    println!("\nAfter reset: {}", light.state());
    println!("History entries kept: {}", light.history().len());

    println!("\n=== Example Complete ===");
}
