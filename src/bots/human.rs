use std::io::{self, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::card::Color;
use crate::state::SessionView;
use crate::visualize::{format_card, render_state};

/// Interactive seat that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn prompt(message: &str) -> Option<String> {
        print!("{message}");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(_) => {
                eprintln!("failed to read input");
                Some(String::new())
            }
        }
    }

    fn parse_color(input: &str) -> Option<Color> {
        match input.to_ascii_lowercase().as_str() {
            "r" | "red" => Some(Color::Red),
            "b" | "blue" => Some(Color::Blue),
            "g" | "green" => Some(Color::Green),
            "y" | "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }

    fn ask_color(&self) -> Color {
        loop {
            let Some(answer) = Self::prompt("Wild color (r/b/g/y): ") else {
                quit();
            };
            if let Some(color) = Self::parse_color(&answer) {
                return color;
            }
            println!("Unknown color '{answer}'.");
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

fn quit() -> ! {
    println!("Exiting game at user's request.");
    std::process::exit(0);
}

impl Bot for HumanBot {
    fn select_action(&mut self, state: &SessionView) -> Action {
        loop {
            println!("\n=== {}'s turn (seat {}) ===", self.name, state.self_seat);
            println!("{}", render_state(state));
            println!("Type hand indices separated by spaces to play them as one stack,");
            println!("'d' to draw, 'help' or 'q' to quit.");
            let Some(input) = Self::prompt("Selection: ") else {
                quit();
            };
            if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                quit();
            }
            if input.eq_ignore_ascii_case("help") {
                println!(
                    "Cards of the same rank may be played together; the last one ends on top."
                );
                println!("A card matches when it has the active color or the top card's rank.");
                continue;
            }
            if input.eq_ignore_ascii_case("d") {
                return Action::Draw;
            }
            let parsed: Result<Vec<usize>, _> =
                input.split_whitespace().map(str::parse::<usize>).collect();
            let Ok(hand_indices) = parsed else {
                println!("Invalid input: '{input}'. Please enter numbers.");
                continue;
            };
            let Some(&first) = hand_indices.first() else {
                continue;
            };
            let Some(card) = state.hand.get(first) else {
                println!("Index out of range. Please choose a valid card.");
                continue;
            };
            let chosen_color = if card.is_wild() {
                Some(self.ask_color())
            } else {
                None
            };
            println!("You selected: {}", format_card(*card));
            return Action::Play {
                hand_indices,
                chosen_color,
            };
        }
    }
}
