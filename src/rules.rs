//! Legality predicates for single cards and same-rank stacks.

use crate::card::{Card, Color};

/// A card may be played when it is Wild-kind, matches the active color, or
/// shares the top card's rank. Rank matching ignores the active color.
pub fn is_playable(card: &Card, top: &Card, active_color: Color) -> bool {
    card.is_wild() || card.color() == Some(active_color) || card.rank() == top.rank()
}

/// A stack is playable when every card shares one rank and the first card is
/// individually playable. Colors may differ within the stack.
pub fn is_multi_playable(selection: &[Card], top: &Card, active_color: Color) -> bool {
    let Some(first) = selection.first() else {
        return false;
    };
    same_rank(selection) && is_playable(first, top, active_color)
}

pub fn same_rank(selection: &[Card]) -> bool {
    match selection.first() {
        Some(first) => selection.iter().all(|card| card.rank() == first.rank()),
        None => true,
    }
}
