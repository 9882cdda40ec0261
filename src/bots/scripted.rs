use rand::Rng;

use crate::action::Action;
use crate::bot::Bot;
use crate::card::Color;
use crate::rules::is_playable;
use crate::state::SessionView;

/// The opponent policy every automated seat follows.
///
/// Policy:
/// - Collect the hand cards that are individually playable on the top card.
/// - None playable: draw one card.
/// - Otherwise take the first playable card and every other playable card of
///   the same rank, in hand order, as one stack.
/// - A Wild-kind stack gets a uniformly random color.
pub struct ScriptedBot<R: Rng> {
    rng: R,
}

impl<R: Rng> ScriptedBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for ScriptedBot<R> {
    fn select_action(&mut self, state: &SessionView) -> Action {
        let Some(top) = state.top_card() else {
            return Action::Draw;
        };
        let playable: Vec<usize> = state
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| is_playable(card, top, state.active_color))
            .map(|(index, _)| index)
            .collect();
        let Some(&first) = playable.first() else {
            return Action::Draw;
        };

        let rank = state.hand[first].rank();
        let hand_indices: Vec<usize> = playable
            .into_iter()
            .filter(|&index| state.hand[index].rank() == rank)
            .collect();
        if state.hand[first].is_wild() {
            Action::play_wild(hand_indices, Color::random(&mut self.rng))
        } else {
            Action::play(hand_indices)
        }
    }
}
