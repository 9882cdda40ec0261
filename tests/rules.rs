mod common;

use common::{card, filler, hand, human_scenario, session_with, total_cards, wild};
use unotable::card::DECK_SIZE;
use unotable::{
    Card, Color, Direction, GameError, GameStatus, InvalidAction, Rank, SessionBuilder, TurnPhase,
    next_seat,
};

#[test]
fn initial_deal() -> Result<(), GameError> {
    let session = SessionBuilder::new().with_seed(5).build()?;
    for seat in 0..4 {
        assert_eq!(session.hand(seat)?.len(), 7);
    }
    assert_eq!(session.discard_pile().len(), 1);
    assert_eq!(session.draw_pile_count(), DECK_SIZE - 4 * 7 - 1);
    assert_eq!(session.current_seat(), 0);
    assert_eq!(session.direction(), Direction::Clockwise);
    assert_eq!(session.phase(), TurnPhase::AwaitingHumanAction);
    let starter = session.top_card().expect("starter");
    assert_eq!(starter.color(), Some(session.active_color()));
    assert_eq!(total_cards(&session), DECK_SIZE);
    Ok(())
}

#[test]
fn wild_starter_goes_under_the_draw_pile() -> Result<(), GameError> {
    let mut draw_pile = filler(3, 500);
    draw_pile.push(card(1, Color::Blue, Rank::Number(4)));
    let session = session_with(
        [
            hand(Vec::new(), 100),
            hand(Vec::new(), 200),
            hand(Vec::new(), 300),
            hand(Vec::new(), 400),
        ],
        wild(2, true),
        draw_pile,
    )?;
    assert_eq!(session.top_card().map(|c| c.id().0), Some(1));
    assert_eq!(session.active_color(), Color::Blue);
    assert_eq!(session.draw_pile_count(), 4);
    Ok(())
}

#[test]
fn stacked_sevens_take_the_color_of_the_last_card() -> Result<(), GameError> {
    let session = human_scenario(
        vec![
            card(1, Color::Blue, Rank::Number(7)),
            card(2, Color::Green, Rank::Number(7)),
        ],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[0, 1], None)?;
    assert_eq!(next.active_color(), Color::Green);
    assert_eq!(next.top_card().map(|c| c.id().0), Some(2));
    assert_eq!(next.discard_pile().len(), 3);
    assert_eq!(next.hand(0)?.len(), 5);
    // Plain numbers pass the turn to the next seat clockwise, nobody skipped.
    assert_eq!(next.current_seat(), next_seat(0, Direction::Clockwise));
    assert_eq!(next.current_seat(), 3);
    // The previous snapshot is untouched.
    assert_eq!(session.hand(0)?.len(), 7);
    assert_eq!(session.turn(), 0);
    Ok(())
}

#[test]
fn selection_order_decides_the_top_card() -> Result<(), GameError> {
    let session = human_scenario(
        vec![
            card(1, Color::Blue, Rank::Number(7)),
            card(2, Color::Red, Rank::Number(7)),
        ],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[1, 0], None)?;
    assert_eq!(next.active_color(), Color::Blue);
    assert_eq!(next.top_card().map(|c| c.id().0), Some(1));
    Ok(())
}

#[test]
fn rank_match_beats_active_color() -> Result<(), GameError> {
    let session = human_scenario(
        vec![card(1, Color::Blue, Rank::Number(3))],
        card(2, Color::Red, Rank::Number(3)),
        10,
    )?;
    let next = session.try_play_selection(&[0], None)?;
    assert_eq!(next.active_color(), Color::Blue);
    Ok(())
}

#[test]
fn mixed_ranks_are_rejected_without_change() -> Result<(), GameError> {
    let session = human_scenario(
        vec![
            card(1, Color::Red, Rank::Number(2)),
            card(2, Color::Red, Rank::Number(4)),
        ],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    assert_eq!(
        session.try_play_selection(&[0, 1], None).err(),
        Some(GameError::InvalidAction(InvalidAction::MixedRanks))
    );
    let same = session.play_selection(&[0, 1], None);
    assert_eq!(same.turn(), session.turn());
    assert_eq!(same.hand(0)?, session.hand(0)?);
    assert_eq!(same.discard_pile(), session.discard_pile());
    Ok(())
}

#[test]
fn unplayable_leader_is_rejected() -> Result<(), GameError> {
    let session = human_scenario(
        vec![
            card(1, Color::Blue, Rank::Number(2)),
            card(2, Color::Red, Rank::Number(2)),
        ],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    assert_eq!(
        session.try_play_selection(&[0, 1], None).err(),
        Some(GameError::InvalidAction(InvalidAction::NotPlayable))
    );
    assert!(session.try_play_selection(&[1, 0], None).is_ok());
    Ok(())
}

#[test]
fn bad_selections_are_rejected() -> Result<(), GameError> {
    let session = human_scenario(
        vec![card(1, Color::Red, Rank::Number(2))],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    assert_eq!(
        session.try_play_selection(&[], None).err(),
        Some(GameError::InvalidAction(InvalidAction::EmptySelection))
    );
    assert_eq!(
        session.try_play_selection(&[0, 0], None).err(),
        Some(GameError::InvalidAction(InvalidAction::DuplicateIndex(0)))
    );
    assert_eq!(
        session.try_play_selection(&[9], None).err(),
        Some(GameError::InvalidAction(InvalidAction::HandIndex(9)))
    );
    Ok(())
}

#[test]
fn wild_waits_for_a_color() -> Result<(), GameError> {
    let session = human_scenario(vec![wild(1, false)], card(3, Color::Red, Rank::Number(7)), 10)?;
    assert_eq!(
        session.try_play_selection(&[0], None).err(),
        Some(GameError::ColorChoiceRequired)
    );
    let waiting = session.play_selection(&[0], None);
    assert!(waiting.pending_color_choice());
    assert_eq!(waiting.turn(), session.turn());
    assert_eq!(waiting.hand(0)?.len(), 7);

    let played = waiting.play_selection(&[0], Some(Color::Blue));
    assert!(!played.pending_color_choice());
    assert_eq!(played.active_color(), Color::Blue);
    assert_eq!(played.current_seat(), 3);
    Ok(())
}

#[test]
fn rejected_play_lowers_a_waiting_color_choice() -> Result<(), GameError> {
    let session = human_scenario(
        vec![wild(1, false), card(2, Color::Blue, Rank::Number(2))],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    let waiting = session.play_selection(&[0], None);
    assert!(waiting.pending_color_choice());

    let rejected = waiting.play_selection(&[1], None);
    assert!(!rejected.pending_color_choice());
    assert_eq!(rejected.turn(), session.turn());
    assert_eq!(rejected.hand(0)?, session.hand(0)?);
    Ok(())
}

#[test]
fn wild_draw_four_feeds_the_next_seat_and_passes_over_it() -> Result<(), GameError> {
    let session = human_scenario(vec![wild(1, true)], card(3, Color::Red, Rank::Number(7)), 10)?;
    let next = session.try_play_selection(&[0], Some(Color::Yellow))?;
    assert_eq!(next.active_color(), Color::Yellow);
    let victim = next_seat(0, Direction::Clockwise);
    assert_eq!(next.hand(victim)?.len(), 11);
    assert_eq!(next.current_seat(), next_seat(victim, Direction::Clockwise));
    assert_eq!(next.current_seat(), 1);
    assert_eq!(next.draw_pile_count(), 6);
    Ok(())
}

#[test]
fn stacked_draw_twos_multiply_the_penalty() -> Result<(), GameError> {
    let session = human_scenario(
        vec![
            card(1, Color::Red, Rank::DrawTwo),
            card(2, Color::Blue, Rank::DrawTwo),
        ],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[0, 1], None)?;
    assert_eq!(next.hand(3)?.len(), 11);
    assert_eq!(next.current_seat(), 1);
    assert_eq!(next.active_color(), Color::Blue);
    Ok(())
}

#[test]
fn skip_passes_over_one_seat() -> Result<(), GameError> {
    let session = human_scenario(
        vec![card(1, Color::Red, Rank::Skip)],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[0], None)?;
    assert_eq!(next.current_seat(), 1);
    assert_eq!(next.hand(3)?.len(), 7);
    assert_eq!(next.direction(), Direction::Clockwise);
    Ok(())
}

#[test]
fn reverse_flips_direction() -> Result<(), GameError> {
    let session = human_scenario(
        vec![card(1, Color::Red, Rank::Reverse)],
        card(3, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[0], None)?;
    assert_eq!(next.direction(), Direction::CounterClockwise);
    assert_eq!(next.current_seat(), 2);
    assert_eq!(next.phase(), TurnPhase::AwaitingOpponentAction);
    Ok(())
}

#[test]
fn emptying_the_hand_wins_and_skips_effects() -> Result<(), GameError> {
    let session = human_scenario(
        winning_stack_of(Rank::DrawTwo),
        card(20, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[0, 1, 2, 3, 4, 5, 6], None)?;
    assert_eq!(next.status(), GameStatus::Finished { winner: 0 });
    assert_eq!(next.is_terminal(), (true, Some(0)));
    assert_eq!(next.phase(), TurnPhase::GameOver);
    assert_eq!(next.hand(3)?.len(), 7);
    assert_eq!(next.draw_pile_count(), 10);

    assert_eq!(next.try_draw_one().err(), Some(GameError::GameOver));
    let after = next.draw_one();
    assert_eq!(after.turn(), next.turn());
    assert_eq!(after.advance_opponents().turn(), next.turn());
    Ok(())
}

fn winning_stack_of(rank: Rank) -> Vec<Card> {
    (1..=7)
        .map(|id| {
            let color = if id % 2 == 0 { Color::Blue } else { Color::Red };
            card(id, color, rank)
        })
        .collect()
}

#[test]
fn winning_skip_stack_keeps_seat_and_direction() -> Result<(), GameError> {
    let session = human_scenario(
        winning_stack_of(Rank::Skip),
        card(20, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[0, 1, 2, 3, 4, 5, 6], None)?;
    assert_eq!(next.status(), GameStatus::Finished { winner: 0 });
    assert_eq!(next.current_seat(), 0);
    assert_eq!(next.direction(), Direction::Clockwise);
    assert_eq!(next.active_color(), Color::Red);
    Ok(())
}

#[test]
fn winning_reverse_stack_keeps_seat_and_direction() -> Result<(), GameError> {
    let session = human_scenario(
        winning_stack_of(Rank::Reverse),
        card(20, Color::Red, Rank::Number(7)),
        10,
    )?;
    let next = session.try_play_selection(&[0, 1, 2, 3, 4, 5, 6], None)?;
    assert_eq!(next.status(), GameStatus::Finished { winner: 0 });
    assert_eq!(next.current_seat(), 0);
    assert_eq!(next.direction(), Direction::Clockwise);
    assert_eq!(next.phase(), TurnPhase::GameOver);
    Ok(())
}

#[test]
fn drawing_passes_the_turn() -> Result<(), GameError> {
    let session = human_scenario(Vec::new(), card(3, Color::Red, Rank::Number(7)), 10)?;
    let next = session.try_draw_one()?;
    assert_eq!(next.hand(0)?.len(), 8);
    assert_eq!(next.current_seat(), 3);
    assert_eq!(next.discard_pile(), session.discard_pile());
    assert_eq!(next.draw_pile_count(), 9);
    Ok(())
}

#[test]
fn human_requests_are_ignored_out_of_turn() -> Result<(), GameError> {
    let session = human_scenario(Vec::new(), card(3, Color::Red, Rank::Number(7)), 10)?;
    let next = session.try_draw_one()?;
    assert_eq!(next.try_draw_one().err(), Some(GameError::NotSeatsTurn));
    assert_eq!(next.draw_one().turn(), next.turn());
    assert_eq!(next.play_selection(&[0], None).turn(), next.turn());
    Ok(())
}

#[test]
fn exhausted_piles_short_the_draw_without_inventing_cards() -> Result<(), GameError> {
    let session = human_scenario(
        vec![card(1, Color::Red, Rank::DrawTwo)],
        card(3, Color::Red, Rank::Number(7)),
        0,
    )?;
    let total = total_cards(&session);

    // Only the starter sits under the played card, so one card is recycled.
    let next = session.try_play_selection(&[0], None)?;
    assert_eq!(next.hand(3)?.len(), 8);
    assert!(next.hand(3)?.iter().any(|c| c.id().0 == 3));
    assert_eq!(next.discard_pile().len(), 1);
    assert_eq!(next.top_card().map(|c| c.id().0), Some(1));
    assert_eq!(next.draw_pile_count(), 0);
    assert_eq!(total_cards(&next), total);
    Ok(())
}

#[test]
fn drawing_from_nothing_still_passes_the_turn() -> Result<(), GameError> {
    let session = human_scenario(Vec::new(), card(3, Color::Red, Rank::Number(7)), 0)?;
    let next = session.try_draw_one()?;
    assert_eq!(next.hand(0)?.len(), 7);
    assert_eq!(next.current_seat(), 3);
    Ok(())
}

#[test]
fn too_small_deck_is_rejected() {
    let result = SessionBuilder::new().with_deck(filler(28, 0)).build();
    assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
}
