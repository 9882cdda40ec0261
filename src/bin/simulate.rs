use std::error::Error;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use unotable::{
    Bot, HUMAN_SEAT, HumanBot, ScriptedBot, Table, TurnPhase, describe_action, format_card,
    render_state,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play a four-seat game against three scripted opponents."
)]
struct Args {
    /// Seed for dealing and opponent color choices
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Play seat 0 interactively instead of letting the scripted policy play it
    #[arg(long = "human", action = ArgAction::SetTrue)]
    human: bool,

    /// Show the table and each chosen action
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Pause before each opponent turn, in milliseconds
    #[arg(long = "think-ms", default_value_t = 0)]
    think_ms: u64,

    /// Stop after this many turns
    #[arg(long = "max-turns", default_value_t = 5_000)]
    max_turns: u64,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| String::from(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut table = Table::new(args.seed)?;
    let mut seat_zero: Box<dyn Bot> = if args.human {
        Box::new(HumanBot::default())
    } else {
        Box::new(ScriptedBot::new(StdRng::seed_from_u64(args.seed ^ 0x9E37_79B9)))
    };

    info!(seed = args.seed, human = args.human, "starting game");
    loop {
        let session = table.session();
        if session.turn() >= args.max_turns {
            println!("Max turn limit {} reached. Stopping.", args.max_turns);
            break;
        }
        match session.phase() {
            TurnPhase::GameOver => break,
            TurnPhase::AwaitingHumanAction => {
                let view = session.state_view(HUMAN_SEAT)?;
                let action = seat_zero.select_action(&view);
                if args.visualize && !args.human {
                    println!("{}", render_state(&view));
                    println!("Seat 0: {}\n", describe_action(&view, &action));
                }
                if let Err(err) = table.submit(&action) {
                    if args.human {
                        println!("Nothing happened: {err}");
                    } else {
                        warn!(error = %err, "scripted seat 0 play rejected, drawing instead");
                        table.draw_one()?;
                    }
                }
            }
            TurnPhase::AwaitingOpponentAction => {
                let Some(activation) = table.schedule_opponent() else {
                    continue;
                };
                if args.think_ms > 0 {
                    thread::sleep(Duration::from_millis(args.think_ms));
                }
                let before = table.session().state_view(activation.seat)?;
                table.resolve(activation)?;
                if args.visualize || args.human {
                    let after = table.session();
                    let summary = if after.top_card() != before.top_card() {
                        after
                            .top_card()
                            .map(|card| format!("played {}", format_card(*card)))
                            .unwrap_or_default()
                    } else {
                        String::from("drew a card")
                    };
                    println!("Seat {} {summary}", activation.seat);
                }
            }
        }
    }

    match table.session().winner() {
        Some(winner) => println!("Game finished. Winner: Seat {winner}."),
        None => println!("Game stopped before completion."),
    }
    Ok(())
}
