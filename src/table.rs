//! Stateful driver that a presentation layer talks to.
//!
//! The table owns the current [`Session`], the human's [`Selection`] and at
//! most one pending opponent activation. Opponent turns are two-step: the
//! presentation layer calls [`Table::schedule_opponent`], waits however long it
//! likes, then hands the ticket back to [`Table::resolve`]. Tickets are keyed by
//! game generation and turn, so one issued before a new game or another
//! transition is discarded instead of applied.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::action::{Action, Seat};
use crate::card::{Card, Color};
use crate::error::{GameError, InvalidAction};
use crate::game::{Session, SessionBuilder, SessionConfig};
use crate::selection::Selection;
use crate::state::TurnPhase;

/// Ticket for one scheduled opponent turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    pub generation: u64,
    pub turn: u64,
    pub seat: Seat,
}

pub struct Table {
    session: Session,
    selection: Selection,
    pending: Option<Activation>,
    seeds: StdRng,
}

impl Table {
    /// Deals the first game. Every later game draws its seed from `seed`'s stream.
    pub fn new(seed: u64) -> Result<Self, GameError> {
        let mut seeds = StdRng::seed_from_u64(seed);
        let session = Session::new(SessionConfig {
            seed: seeds.r#gen(),
            generation: 0,
        })?;
        let mut selection = Selection::new();
        selection.reset(&session);
        Ok(Self {
            session,
            selection,
            pending: None,
            seeds,
        })
    }

    /// Starts over with an existing session, e.g. one built from a fixed deck.
    pub fn with_session(session: Session, seed: u64) -> Self {
        let mut selection = Selection::new();
        selection.reset(&session);
        Self {
            session,
            selection,
            pending: None,
            seeds: StdRng::seed_from_u64(seed),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_activation(&self) -> Option<Activation> {
        self.pending
    }

    /// Replaces the session with a freshly dealt one and drops any pending activation.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let generation = self.session.generation() + 1;
        let session = SessionBuilder::new()
            .with_seed(self.seeds.r#gen())
            .with_generation(generation)
            .build()?;
        if let Some(stale) = self.pending.take() {
            debug!(?stale, "discarding opponent activation from previous game");
        }
        info!(generation, "started new game");
        self.commit(session);
        Ok(())
    }

    /// Adds or removes a hand card. Changing the selection abandons a wild play
    /// that was waiting for its color.
    pub fn toggle_selection(&mut self, index: usize) -> Result<bool, GameError> {
        self.ensure_human_can_act()?;
        let toggled = self.selection.toggle(&self.session, index);
        if toggled {
            self.drop_color_choice();
        }
        Ok(toggled)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.drop_color_choice();
    }

    /// Plays the current selection. A wild stack without `color` leaves the
    /// selection in place and raises the session's pending-color flag; any other
    /// rejection clears the selection.
    pub fn play_selected(&mut self, color: Option<Color>) -> Result<(), GameError> {
        self.ensure_human_can_act()?;
        let indices = self.selection.indices_for(&self.session).to_vec();
        if indices.is_empty() {
            return Err(InvalidAction::EmptySelection.into());
        }
        match self.session.try_play_selection(&indices, color) {
            Ok(next) => {
                self.commit(next);
                Ok(())
            }
            Err(GameError::ColorChoiceRequired) => {
                self.session = self.session.with_color_choice(true);
                Err(GameError::ColorChoiceRequired)
            }
            Err(err) => {
                debug!(error = %err, ?indices, "rejected human play");
                self.clear_selection();
                Err(err)
            }
        }
    }

    /// Completes a wild play that was waiting for its color.
    pub fn choose_color(&mut self, color: Color) -> Result<(), GameError> {
        let leads_with_wild = self
            .selection
            .cards(&self.session)
            .first()
            .is_some_and(Card::is_wild);
        if !self.session.pending_color_choice() || !leads_with_wild {
            return Err(GameError::NoColorChoicePending);
        }
        self.play_selected(Some(color))
    }

    /// Replays a whole seat-0 action through the selection, as a UI would.
    /// Out-of-range or repeated indices reject the request before anything
    /// is played.
    pub fn submit(&mut self, action: &Action) -> Result<(), GameError> {
        match action {
            Action::Draw => self.draw_one(),
            Action::Play {
                hand_indices,
                chosen_color,
            } => {
                self.ensure_human_can_act()?;
                self.clear_selection();
                for (position, &index) in hand_indices.iter().enumerate() {
                    let rejection = if hand_indices[..position].contains(&index) {
                        Some(InvalidAction::DuplicateIndex(index))
                    } else if !self.toggle_selection(index)? {
                        Some(InvalidAction::HandIndex(index))
                    } else {
                        None
                    };
                    if let Some(rejection) = rejection {
                        debug!(?hand_indices, "rejected submitted play");
                        self.clear_selection();
                        return Err(rejection.into());
                    }
                }
                self.play_selected(*chosen_color)
            }
        }
    }

    pub fn draw_one(&mut self) -> Result<(), GameError> {
        self.ensure_human_can_act()?;
        let next = self.session.try_draw_one()?;
        self.commit(next);
        Ok(())
    }

    /// Issues a ticket for the current opponent seat, or returns the one
    /// already outstanding. `None` when it is the human's turn or the game is over.
    pub fn schedule_opponent(&mut self) -> Option<Activation> {
        if self.pending.is_some() {
            return self.pending;
        }
        if self.session.phase() != TurnPhase::AwaitingOpponentAction {
            return None;
        }
        let activation = Activation {
            generation: self.session.generation(),
            turn: self.session.turn(),
            seat: self.session.current_seat(),
        };
        self.pending = Some(activation);
        Some(activation)
    }

    /// Runs a previously scheduled opponent turn if its ticket is still valid.
    pub fn resolve(&mut self, activation: Activation) -> Result<(), GameError> {
        let fresh = self.pending == Some(activation)
            && activation.generation == self.session.generation()
            && activation.turn == self.session.turn();
        if !fresh {
            debug!(?activation, "ignoring stale opponent activation");
            return Err(GameError::StaleActivation);
        }
        self.pending = None;
        let next = self.session.try_advance_one_opponent()?;
        self.commit(next);
        Ok(())
    }

    fn ensure_human_can_act(&self) -> Result<(), GameError> {
        if self.pending.is_some() {
            return Err(GameError::ActivationPending);
        }
        match self.session.phase() {
            TurnPhase::AwaitingHumanAction => Ok(()),
            TurnPhase::AwaitingOpponentAction => Err(GameError::NotSeatsTurn),
            TurnPhase::GameOver => Err(GameError::GameOver),
        }
    }

    fn drop_color_choice(&mut self) {
        if self.session.pending_color_choice() {
            self.session = self.session.with_color_choice(false);
        }
    }

    fn commit(&mut self, session: Session) {
        self.session = session;
        self.selection.reset(&self.session);
    }
}
