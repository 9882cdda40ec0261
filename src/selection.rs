use crate::card::Card;
use crate::game::Session;
use crate::turn::HUMAN_SEAT;

/// Hand indices the human has tentatively picked.
///
/// Presentation-owned working state. It is stamped with the session's
/// generation and turn and reads as empty against any other snapshot, so a
/// committed transition resets it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
    stamp: Option<(u64, u64)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp_of(session: &Session) -> (u64, u64) {
        (session.generation(), session.turn())
    }

    fn is_current(&self, session: &Session) -> bool {
        self.stamp == Some(Self::stamp_of(session))
    }

    /// Adds or removes `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, session: &Session, index: usize) -> bool {
        if !self.is_current(session) {
            self.reset(session);
        }
        let hand_len = session.hand(HUMAN_SEAT).map(<[Card]>::len).unwrap_or(0);
        if index >= hand_len {
            return false;
        }
        match self.indices.iter().position(|&selected| selected == index) {
            Some(position) => {
                self.indices.remove(position);
            }
            None => self.indices.push(index),
        }
        true
    }

    /// Selected indices in selection order, or nothing when stale.
    pub fn indices_for(&self, session: &Session) -> &[usize] {
        if self.is_current(session) {
            self.indices.as_slice()
        } else {
            &[]
        }
    }

    pub fn cards(&self, session: &Session) -> Vec<Card> {
        let Ok(hand) = session.hand(HUMAN_SEAT) else {
            return Vec::new();
        };
        self.indices_for(session)
            .iter()
            .filter_map(|&index| hand.get(index).copied())
            .collect()
    }

    pub fn reset(&mut self, session: &Session) {
        self.indices.clear();
        self.stamp = Some(Self::stamp_of(session));
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
