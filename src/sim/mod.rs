//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and
//! deterministic: fixed timestep only, no rendering or platform
//! dependencies, randomness injected by the controller layer.

pub mod hoop;
pub mod rect;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use hoop::Hoop;
pub use rect::Rect;
pub use state::{Ball, GameState};
pub use tick::{TickEvents, tick};
pub use trajectory::{AimPreview, launch_velocity};
