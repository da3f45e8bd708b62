//! Pure game logic for Crunchtime.
//!
//! This crate contains all game logic that is independent of any engine
//! or runtime. Functions take plain data and return results, making them
//! unit-testable and portable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Gameplay tuning: speeds, timers, bandwidth rates |
//! | [`geometry`] | 2D vectors and strict-interior rectangle overlap |
//! | [`layout`] | The five-room office floor plan and its validation |
//! | [`navgraph`] | BFS room pathfinding over door connectivity |
//! | [`steering`] | Local 8-direction obstacle-avoidance heuristic |
//! | [`walls`] | Wall segment construction with doorway gaps |
//! | [`workday`] | Day progress and clock math (9:00 → 17:00, 5 days) |

pub mod constants;
pub mod geometry;
pub mod layout;
pub mod navgraph;
pub mod steering;
pub mod walls;
pub mod workday;
