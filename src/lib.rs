//! Four-seat UNO-style card game engine: one human seat against three scripted opponents.
//!
//! [`Session`] is an immutable snapshot; every request returns a successor.
//! [`Table`] wraps it for a presentation layer, owning the human's selection
//! and the pending opponent activation.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod game;
pub mod pile;
pub mod rules;
pub mod selection;
pub mod state;
pub mod table;
pub mod turn;
pub mod visualize;

pub use crate::action::{Action, Seat};
pub use crate::bot::Bot;
pub use crate::bots::{HumanBot, ScriptedBot};
pub use crate::card::{Card, CardId, CardKind, Color, Rank};
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{
    Session, SessionBuilder, SessionConfig, advance_one_opponent, advance_opponents, draw_one,
    is_terminal, new_session, play_selection,
};
pub use crate::pile::{Drawn, draw_cards};
pub use crate::rules::{is_multi_playable, is_playable};
pub use crate::selection::Selection;
pub use crate::state::{GameStatus, SeatPublicState, SessionView, TurnPhase};
pub use crate::table::{Activation, Table};
pub use crate::turn::{Direction, HUMAN_SEAT, SEAT_COUNT, next_seat};
pub use crate::visualize::{VisualOptions, describe_action, format_card, render_state};
