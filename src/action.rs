use serde::{Deserialize, Serialize};

use crate::card::Color;

pub use crate::turn::Seat;

/// Action available to a seat during its turn.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the selected hand cards as one same-rank stack. The last index
    /// lands on top of the discard pile. `chosen_color` is required when the
    /// stack is Wild-kind and ignored otherwise.
    Play {
        hand_indices: Vec<usize>,
        chosen_color: Option<Color>,
    },
    /// Draw a single card and pass the turn.
    Draw,
}

impl Action {
    pub fn play(hand_indices: impl Into<Vec<usize>>) -> Self {
        Action::Play {
            hand_indices: hand_indices.into(),
            chosen_color: None,
        }
    }

    pub fn play_wild(hand_indices: impl Into<Vec<usize>>, color: Color) -> Self {
        Action::Play {
            hand_indices: hand_indices.into(),
            chosen_color: Some(color),
        }
    }
}
