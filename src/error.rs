use thiserror::Error;

use crate::action::Seat;

/// Reasons a request against a session is turned down.
///
/// The public surface treats all of these as no-op rejections; they exist so
/// callers and logs can tell why nothing happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("seat {0} is out of range")]
    InvalidSeat(Seat),
    #[error("not the specified seat's turn")]
    NotSeatsTurn,
    #[error("game is already over")]
    GameOver,
    #[error("a color must be chosen before the wild card can be played")]
    ColorChoiceRequired,
    #[error("no wild play is waiting for a color")]
    NoColorChoicePending,
    #[error("an opponent activation is pending")]
    ActivationPending,
    #[error("activation belongs to an earlier game or turn")]
    StaleActivation,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of rejected plays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("no cards were selected")]
    EmptySelection,
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("hand index {0} was selected twice")]
    DuplicateIndex(usize),
    #[error("selected cards do not share one rank")]
    MixedRanks,
    #[error("leading card does not match the active color or top rank")]
    NotPlayable,
}
