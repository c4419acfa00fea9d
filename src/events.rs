//! Notification hook for the host's audio/UI layer
//!
//! The core computes what happened each tick; what the host does with it
//! (play a sound, flash the score) can never feed back into the simulation.

/// Events the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the backboard or rim
    Collision,
    /// A basket was made
    Scored,
    /// The ball was returned to the launch point
    BallReset,
}

/// Receiver for game events
///
/// `notify` returns nothing: a sink cannot fail in a way the simulation
/// would have to handle.
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Sink that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: GameEvent) {}
}
