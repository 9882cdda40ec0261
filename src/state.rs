use serde::{Deserialize, Serialize};

use crate::action::Seat;
use crate::card::{Card, Color};
use crate::turn::Direction;

/// Public portion of a seat's state that every other seat may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPublicState {
    pub seat: Seat,
    pub hand_size: usize,
    pub is_current: bool,
    pub has_won: bool,
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: Seat },
}

/// Who the session is waiting on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingHumanAction,
    AwaitingOpponentAction,
    GameOver,
}

/// Read-only projection of a session from one seat's perspective.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionView {
    pub generation: u64,
    pub turn: u64,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub self_seat: Seat,
    pub current_seat: Seat,
    pub direction: Direction,
    pub active_color: Color,
    pub pending_color_choice: bool,
    pub draw_pile_count: usize,
    /// Discard pile bottom to top.
    pub discard: Vec<Card>,
    pub seats: Vec<SeatPublicState>,
    pub hand: Vec<Card>,
}

impl SessionView {
    pub fn top_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// The last `count` discard cards, bottom to top.
    pub fn discard_top(&self, count: usize) -> &[Card] {
        let start = self.discard.len().saturating_sub(count);
        &self.discard[start..]
    }

    pub fn is_my_turn(&self) -> bool {
        self.status == GameStatus::Ongoing && self.current_seat == self.self_seat
    }
}
