//! Crunchtime Core - Office Survival Simulation Engine
//!
//! An ECS-based simulation of one very bad work week: a five-room office,
//! five coworkers with their own agendas, and a player trying to clock
//! eight hours a day without getting caught.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: The player and the five coworkers
//! - **Components**: Pure data attached to entities (Position, Behavior, Inventory, etc.)
//! - **Systems**: Logic that queries and updates components
//!
//! # Example
//!
//! ```rust,no_run
//! use crunchtime_core::prelude::*;
//!
//! let mut engine = GameEngine::new(42).expect("valid layout");
//!
//! // Run the fixed-timestep loop
//! loop {
//!     let intent = Intent::default(); // from input handling
//!     engine.tick(&intent, 1.0 / 60.0); // 60 FPS
//!     for event in engine.drain_events() {
//!         println!("{:?}", event);
//!     }
//! }
//! ```

pub mod components;
pub mod systems;
pub mod generation;
pub mod engine;
pub mod events;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::{EnemyView, GameEngine, Intent, Mode, ModeAction};
    pub use crate::events::GameEvent;
}
