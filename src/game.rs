use std::array::from_fn;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::action::{Action, Seat};
use crate::bot::Bot;
use crate::bots::ScriptedBot;
use crate::card::{Card, Color, HAND_SIZE, Rank, shuffled_deck};
use crate::error::{GameError, InvalidAction};
use crate::pile::draw_cards;
use crate::rules::{is_playable, same_rank};
use crate::state::{GameStatus, SeatPublicState, SessionView, TurnPhase};
use crate::turn::{Direction, HUMAN_SEAT, SEAT_COUNT, next_seat};

const DEFAULT_SEED: u64 = 0x0DD5_EED5_0DD5_EED5;

/// Configuration required to bootstrap a session.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub seed: u64,
    /// Identifies the game a session belongs to; pending opponent activations
    /// from an older generation are discarded.
    pub generation: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            generation: 0,
        }
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct SessionBuilder {
    config: SessionConfig,
    deck: Option<Vec<Card>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            deck: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.config.generation = generation;
        self
    }

    /// Use `deck` as-is instead of a shuffled one. The last element is the top:
    /// seats 0..3 each take seven cards off the top, then the starter flips.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Session, GameError> {
        Session::from_builder(self)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of one four-seat game.
///
/// Every accepted request produces a new `Session`; the receiver is never
/// modified. The session owns its random generator, so a snapshot plus a
/// request always yields the same successor.
#[derive(Clone, Debug)]
pub struct Session {
    generation: u64,
    turn: u64,
    draw_pile: Vec<Card>,
    discard: Vec<Card>,
    hands: [Vec<Card>; SEAT_COUNT],
    active_color: Color,
    current_seat: Seat,
    direction: Direction,
    status: GameStatus,
    pending_color_choice: bool,
    rng: StdRng,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        SessionBuilder { config, deck: None }.build()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of committed transitions since the deal.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn phase(&self) -> TurnPhase {
        match self.status {
            GameStatus::Finished { .. } => TurnPhase::GameOver,
            GameStatus::Ongoing if self.current_seat == HUMAN_SEAT => {
                TurnPhase::AwaitingHumanAction
            }
            GameStatus::Ongoing => TurnPhase::AwaitingOpponentAction,
        }
    }

    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn hand(&self, seat: Seat) -> Result<&[Card], GameError> {
        self.hands
            .get(seat)
            .map(Vec::as_slice)
            .ok_or(GameError::InvalidSeat(seat))
    }

    /// True while a human wild play waits for its color.
    pub fn pending_color_choice(&self) -> bool {
        self.pending_color_choice
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    pub fn is_terminal(&self) -> (bool, Option<Seat>) {
        (self.is_finished(), self.winner())
    }

    pub fn state_view(&self, perspective: Seat) -> Result<SessionView, GameError> {
        let hand = self.hand(perspective)?.to_vec();
        let winner = self.winner();
        let seats = self
            .hands
            .iter()
            .enumerate()
            .map(|(seat, hand)| SeatPublicState {
                seat,
                hand_size: hand.len(),
                is_current: seat == self.current_seat,
                has_won: winner == Some(seat),
            })
            .collect();

        Ok(SessionView {
            generation: self.generation,
            turn: self.turn,
            phase: self.phase(),
            status: self.status,
            self_seat: perspective,
            current_seat: self.current_seat,
            direction: self.direction,
            active_color: self.active_color,
            pending_color_choice: self.pending_color_choice,
            draw_pile_count: self.draw_pile.len(),
            discard: self.discard.clone(),
            seats,
            hand,
        })
    }

    /// Hand indices of cards that are individually playable right now.
    pub fn playable_indices(&self, seat: Seat) -> Result<Vec<usize>, GameError> {
        let hand = self.hand(seat)?;
        let Some(top) = self.top_card() else {
            return Ok(Vec::new());
        };
        Ok(hand
            .iter()
            .enumerate()
            .filter(|(_, card)| is_playable(card, top, self.active_color))
            .map(|(index, _)| index)
            .collect())
    }

    /// Applies `action` for `seat`, returning the successor snapshot.
    pub fn apply_action(&self, seat: Seat, action: &Action) -> Result<Session, GameError> {
        let mut next = self.clone();
        next.apply_in_place(seat, action)?;
        Ok(next)
    }

    pub fn try_play_selection(
        &self,
        hand_indices: &[usize],
        chosen_color: Option<Color>,
    ) -> Result<Session, GameError> {
        self.apply_action(
            HUMAN_SEAT,
            &Action::Play {
                hand_indices: hand_indices.to_vec(),
                chosen_color,
            },
        )
    }

    /// Human play. Rejections return the session unchanged; a structurally
    /// valid wild play without a color returns it with the pending flag raised.
    pub fn play_selection(&self, hand_indices: &[usize], chosen_color: Option<Color>) -> Session {
        match self.try_play_selection(hand_indices, chosen_color) {
            Ok(next) => next,
            Err(GameError::ColorChoiceRequired) => self.with_color_choice(true),
            Err(err) => {
                debug!(error = %err, ?hand_indices, "rejected human play");
                self.with_color_choice(false)
            }
        }
    }

    pub fn try_draw_one(&self) -> Result<Session, GameError> {
        self.apply_action(HUMAN_SEAT, &Action::Draw)
    }

    pub fn draw_one(&self) -> Session {
        self.try_draw_one().unwrap_or_else(|err| {
            debug!(error = %err, "rejected human draw");
            self.clone()
        })
    }

    /// Runs the scripted policy once for the current opponent seat.
    pub fn try_advance_one_opponent(&self) -> Result<Session, GameError> {
        let seat = self.opponent_to_act()?;
        let view = self.state_view(seat)?;
        let mut next = self.clone();
        let action = ScriptedBot::new(&mut next.rng).select_action(&view);
        debug!(seat, ?action, "opponent chose action");
        next.apply_in_place(seat, &action)?;
        Ok(next)
    }

    /// Same as [`Session::try_advance_one_opponent`] with a caller-supplied policy.
    pub fn advance_one_opponent_with(&self, bot: &mut dyn Bot) -> Result<Session, GameError> {
        let seat = self.opponent_to_act()?;
        let view = self.state_view(seat)?;
        let action = bot.select_action(&view);
        debug!(seat, ?action, "opponent chose action");
        self.apply_action(seat, &action)
    }

    pub fn advance_one_opponent(&self) -> Session {
        self.try_advance_one_opponent().unwrap_or_else(|err| {
            debug!(error = %err, "no opponent activation applied");
            self.clone()
        })
    }

    /// Resolves opponent seats one after another until the human seat is
    /// current or the game ends.
    pub fn advance_opponents(&self) -> Session {
        let mut session = self.clone();
        while session.phase() == TurnPhase::AwaitingOpponentAction {
            match session.try_advance_one_opponent() {
                Ok(next) => session = next,
                Err(err) => {
                    debug!(error = %err, "opponent activation failed");
                    break;
                }
            }
        }
        session
    }

    /// Same snapshot with the pending wild-color flag raised or lowered.
    pub(crate) fn with_color_choice(&self, pending: bool) -> Session {
        let mut next = self.clone();
        next.pending_color_choice = pending;
        next
    }

    fn opponent_to_act(&self) -> Result<Seat, GameError> {
        match self.phase() {
            TurnPhase::GameOver => Err(GameError::GameOver),
            TurnPhase::AwaitingHumanAction => Err(GameError::NotSeatsTurn),
            TurnPhase::AwaitingOpponentAction => Ok(self.current_seat),
        }
    }

    fn from_builder(builder: SessionBuilder) -> Result<Self, GameError> {
        let SessionBuilder { config, deck } = builder;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut deck = match deck {
            Some(deck) => deck,
            None => shuffled_deck(&mut rng),
        };

        if deck.len() <= HAND_SIZE * SEAT_COUNT {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal",
            ));
        }

        let mut hands: [Vec<Card>; SEAT_COUNT] = from_fn(|_| Vec::with_capacity(HAND_SIZE));
        for hand in hands.iter_mut() {
            for _ in 0..HAND_SIZE {
                hand.push(deck.pop().ok_or(GameError::InvalidConfiguration(
                    "deck exhausted while dealing hands",
                ))?);
            }
        }

        if deck.iter().all(Card::is_wild) {
            return Err(GameError::InvalidConfiguration(
                "deck holds no colored starter card",
            ));
        }
        // Wild starters go back under the pile until a colored card turns up.
        while deck.last().is_some_and(Card::is_wild) {
            if let Some(wild) = deck.pop() {
                deck.insert(0, wild);
            }
        }
        let starter = deck.pop().ok_or(GameError::InvalidConfiguration(
            "deck exhausted while flipping the starter",
        ))?;
        let active_color = starter.color().ok_or(GameError::InvalidConfiguration(
            "starter card has no color",
        ))?;

        info!(
            generation = config.generation,
            seed = config.seed,
            starter = ?starter,
            "dealt new game"
        );

        Ok(Session {
            generation: config.generation,
            turn: 0,
            draw_pile: deck,
            discard: vec![starter],
            hands,
            active_color,
            current_seat: HUMAN_SEAT,
            direction: Direction::Clockwise,
            status: GameStatus::Ongoing,
            pending_color_choice: false,
            rng,
        })
    }

    fn apply_in_place(&mut self, seat: Seat, action: &Action) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if seat >= SEAT_COUNT {
            return Err(GameError::InvalidSeat(seat));
        }
        if seat != self.current_seat {
            return Err(GameError::NotSeatsTurn);
        }

        match action {
            Action::Play {
                hand_indices,
                chosen_color,
            } => self.play_cards(seat, hand_indices, *chosen_color)?,
            Action::Draw => {
                self.deal_to(seat, 1);
                self.commit_turn(next_seat(seat, self.direction));
            }
        }
        Ok(())
    }

    fn play_cards(
        &mut self,
        seat: Seat,
        hand_indices: &[usize],
        chosen_color: Option<Color>,
    ) -> Result<(), GameError> {
        let played = self.resolve_selection(seat, hand_indices)?;
        let top = *self.top_card().ok_or(GameError::InvalidConfiguration(
            "discard pile is empty",
        ))?;
        if !same_rank(&played) {
            return Err(InvalidAction::MixedRanks.into());
        }
        let (Some(leader), Some(last)) = (played.first().copied(), played.last().copied())
        else {
            return Err(InvalidAction::EmptySelection.into());
        };
        if !is_playable(&leader, &top, self.active_color) {
            return Err(InvalidAction::NotPlayable.into());
        }
        let new_color = if last.is_wild() {
            chosen_color.ok_or(GameError::ColorChoiceRequired)?
        } else {
            last.color().ok_or(GameError::ColorChoiceRequired)?
        };

        self.hands[seat].retain(|card| !played.iter().any(|p| p.id() == card.id()));
        self.discard.extend(played.iter().copied());
        self.active_color = new_color;

        if self.hands[seat].is_empty() {
            self.status = GameStatus::Finished { winner: seat };
            self.pending_color_choice = false;
            self.turn += 1;
            info!(generation = self.generation, winner = seat, "game over");
            return Ok(());
        }

        let mut next = next_seat(seat, self.direction);
        match last.rank() {
            Rank::Reverse => {
                self.direction = self.direction.reversed();
                next = next_seat(seat, self.direction);
            }
            Rank::Skip => {
                next = next_seat(next, self.direction);
            }
            rank if rank.draw_penalty() > 0 => {
                self.deal_to(next, rank.draw_penalty() * played.len());
                next = next_seat(next, self.direction);
            }
            _ => {}
        }
        self.commit_turn(next);
        Ok(())
    }

    fn resolve_selection(
        &self,
        seat: Seat,
        hand_indices: &[usize],
    ) -> Result<Vec<Card>, GameError> {
        if hand_indices.is_empty() {
            return Err(InvalidAction::EmptySelection.into());
        }
        let hand = &self.hands[seat];
        let mut cards = Vec::with_capacity(hand_indices.len());
        for (position, &index) in hand_indices.iter().enumerate() {
            if hand_indices[..position].contains(&index) {
                return Err(InvalidAction::DuplicateIndex(index).into());
            }
            let card = hand.get(index).ok_or(InvalidAction::HandIndex(index))?;
            cards.push(*card);
        }
        Ok(cards)
    }

    /// Moves up to `count` cards into `seat`'s hand, recycling the discard if needed.
    fn deal_to(&mut self, seat: Seat, count: usize) {
        let pile = std::mem::take(&mut self.draw_pile);
        let drawn = draw_cards(count, pile, &self.discard, &mut self.rng);
        self.draw_pile = drawn.draw_pile;
        if drawn.recycled {
            let keep_from = self.discard.len().saturating_sub(1);
            self.discard = self.discard.split_off(keep_from);
        }
        if drawn.cards.len() < count {
            debug!(seat, requested = count, drawn = drawn.cards.len(), "short draw");
        }
        self.hands[seat].extend(drawn.cards);
    }

    fn commit_turn(&mut self, next: Seat) {
        self.current_seat = next;
        self.pending_color_choice = false;
        self.turn += 1;
    }
}

/// Fresh game from ambient entropy.
pub fn new_session() -> Result<Session, GameError> {
    Session::builder().with_seed(rand::thread_rng().r#gen()).build()
}

pub fn play_selection(
    session: &Session,
    hand_indices: &[usize],
    chosen_color: Option<Color>,
) -> Session {
    session.play_selection(hand_indices, chosen_color)
}

pub fn draw_one(session: &Session) -> Session {
    session.draw_one()
}

pub fn advance_one_opponent(session: &Session) -> Session {
    session.advance_one_opponent()
}

pub fn advance_opponents(session: &Session) -> Session {
    session.advance_opponents()
}

pub fn is_terminal(session: &Session) -> (bool, Option<Seat>) {
    session.is_terminal()
}
