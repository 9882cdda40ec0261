use std::fmt::Write;

use crate::action::Action;
use crate::card::{Card, Rank};
use crate::state::{GameStatus, SessionView};
use crate::turn::Direction;

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// How many discard cards to show, top last.
    pub discard_depth: usize,
    pub show_hand_indices: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            discard_depth: 3,
            show_hand_indices: true,
        }
    }
}

pub fn render_state(state: &SessionView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &SessionView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: Seat {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(out, "Phase: {:?}", state.phase);
    let direction = match state.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    let _ = writeln!(
        out,
        "Current seat: {}{}  |  Direction: {direction}",
        state.current_seat,
        if state.is_my_turn() { " (You)" } else { "" }
    );
    let discard = state
        .discard_top(options.discard_depth)
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        out,
        "Draw pile: {}  |  Discard: [{discard}]  |  Active color: {}",
        state.draw_pile_count,
        state.active_color.name()
    );
    if state.pending_color_choice {
        let _ = writeln!(out, "Waiting for a wild color choice");
    }
    let _ = writeln!(out, "Seats:");
    for seat in &state.seats {
        let label_you = if seat.seat == state.self_seat {
            " (You)"
        } else {
            ""
        };
        let current_tag = if seat.is_current { " <- current" } else { "" };
        let _ = writeln!(
            out,
            "  Seat {}{} - {} cards{}",
            seat.seat, label_you, seat.hand_size, current_tag
        );
    }
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let entries = state
            .hand
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                if options.show_hand_indices {
                    format!("{idx}:{}", format_card(*card))
                } else {
                    format_card(*card)
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "Hand: {entries}");
    }
    out
}

pub fn describe_action(state: &SessionView, action: &Action) -> String {
    match action {
        Action::Play {
            hand_indices,
            chosen_color,
        } => {
            let cards = hand_indices
                .iter()
                .map(|index| {
                    state
                        .hand
                        .get(*index)
                        .map(|card| format_card(*card))
                        .unwrap_or_else(|| format!("hand[{index}]"))
                })
                .collect::<Vec<_>>()
                .join(" + ");
            match chosen_color {
                Some(color) => format!("Play {cards} calling {}", color.name()),
                None => format!("Play {cards}"),
            }
        }
        Action::Draw => String::from("Draw a card"),
    }
}

pub fn format_card(card: Card) -> String {
    let rank = match card.rank() {
        Rank::Number(value) => value.to_string(),
        Rank::Skip => String::from("Skip"),
        Rank::Reverse => String::from("Rev"),
        Rank::DrawTwo => String::from("+2"),
        Rank::Wild => String::from("Wild"),
        Rank::WildDrawFour => String::from("Wild+4"),
    };
    match card.color() {
        Some(color) => format!("{}{rank}", &color.name()[..1]),
        None => rank,
    }
}
