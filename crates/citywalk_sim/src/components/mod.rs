//! ECS components for scene entities
//!
//! Organized by domain:
//! - pawn: named kinematic actors and their movement parameters
//! - movement: per-tick movement intent (MovementInput)
//! - player: player control marker (Player)

pub mod movement;
pub mod pawn;
pub mod player;

// Re-exports for convenient imports
pub use movement::*;
pub use pawn::*;
pub use player::*;
