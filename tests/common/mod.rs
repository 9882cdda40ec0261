#![allow(dead_code)]

use unotable::card::HAND_SIZE;
use unotable::{Card, CardId, Color, GameError, Rank, Session, SessionBuilder};

/// Cards that never match the colors and ranks used in the scenarios.
const FILLER_COLOR: Color = Color::Yellow;
const FILLER_RANK: Rank = Rank::Number(8);

pub fn card(id: u32, color: Color, rank: Rank) -> Card {
    Card::colored(CardId(id), color, rank).expect("colored rank")
}

pub fn wild(id: u32, draw_four: bool) -> Card {
    Card::wild(CardId(id), draw_four)
}

/// Pads `cards` to a full hand with filler, ids starting at `id_base`.
pub fn hand(cards: Vec<Card>, id_base: u32) -> Vec<Card> {
    let mut hand = cards;
    let mut next = id_base;
    while hand.len() < HAND_SIZE {
        hand.push(card(next, FILLER_COLOR, FILLER_RANK));
        next += 1;
    }
    hand
}

pub fn filler(count: usize, id_base: u32) -> Vec<Card> {
    (0..count as u32)
        .map(|offset| card(id_base + offset, FILLER_COLOR, FILLER_RANK))
        .collect()
}

/// Stacks a deck so seats receive exactly `hands` (in order), `starter` flips
/// first and `draw_pile` remains, its last element on top.
pub fn build_deck(hands: [Vec<Card>; 4], starter: Card, draw_pile: Vec<Card>) -> Vec<Card> {
    let mut deck = draw_pile;
    deck.push(starter);
    for hand in hands.iter().rev() {
        assert_eq!(hand.len(), HAND_SIZE, "each hand must hold seven cards");
        deck.extend(hand.iter().rev().copied());
    }
    deck
}

pub fn session_with(
    hands: [Vec<Card>; 4],
    starter: Card,
    draw_pile: Vec<Card>,
) -> Result<Session, GameError> {
    SessionBuilder::new()
        .with_seed(42)
        .with_deck(build_deck(hands, starter, draw_pile))
        .build()
}

/// Seat 0 holds `human`; every other seat holds filler only.
pub fn human_scenario(
    human: Vec<Card>,
    starter: Card,
    draw_pile: usize,
) -> Result<Session, GameError> {
    session_with(
        [
            hand(human, 100),
            hand(Vec::new(), 200),
            hand(Vec::new(), 300),
            hand(Vec::new(), 400),
        ],
        starter,
        filler(draw_pile, 500),
    )
}

pub fn total_cards(session: &Session) -> usize {
    let hands: usize = (0..4)
        .map(|seat| session.hand(seat).map(<[Card]>::len).unwrap_or(0))
        .sum();
    hands + session.discard_pile().len() + session.draw_pile_count()
}
