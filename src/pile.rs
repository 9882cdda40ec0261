use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::card::Card;

/// Result of drawing from the draw pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawn {
    /// Cards in draw order; may be shorter than requested when both piles ran dry.
    pub cards: Vec<Card>,
    pub draw_pile: Vec<Card>,
    /// True when everything under the discard top was shuffled into the draw pile.
    /// The caller must then shrink the discard pile to its top card.
    pub recycled: bool,
}

/// Draws up to `count` cards from the top (end) of `draw_pile`.
///
/// When the draw pile empties and the discard holds more than one card, every
/// discard card except the top is shuffled into a fresh draw pile. The discard
/// is only read here and is recycled at most once per call, so a short result
/// means no more cards exist.
pub fn draw_cards<R: Rng + ?Sized>(
    count: usize,
    mut draw_pile: Vec<Card>,
    discard: &[Card],
    rng: &mut R,
) -> Drawn {
    let mut cards = Vec::with_capacity(count);
    let mut recycled = false;
    for _ in 0..count {
        if draw_pile.is_empty() {
            if recycled || discard.len() <= 1 {
                debug!(requested = count, drawn = cards.len(), "no cards left to draw");
                break;
            }
            draw_pile = discard[..discard.len() - 1].to_vec();
            draw_pile.shuffle(rng);
            recycled = true;
            debug!(cards = draw_pile.len(), "recycled discard pile into draw pile");
        }
        if let Some(card) = draw_pile.pop() {
            trace!(card = ?card, "drew card");
            cards.push(card);
        }
    }
    Drawn {
        cards,
        draw_pile,
        recycled,
    }
}
