use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const COLOR_COUNT: usize = 4;
pub const WILD_COPIES: usize = 4;
pub const ACTION_COPIES: usize = 2;
pub const CARDS_PER_COLOR: usize = 25;
pub const DECK_SIZE: usize = CARDS_PER_COLOR * COLOR_COUNT + 2 * WILD_COPIES;
pub const HAND_SIZE: usize = 7;

/// The four suit colors. Wild cards carry no color until they are played.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; COLOR_COUNT] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        }
    }

    /// Picks one of the four colors uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..COLOR_COUNT)]
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Action,
    Wild,
}

/// Non-color identity of a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Number card between 0 and 9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn kind(self) -> CardKind {
        match self {
            Rank::Number(_) => CardKind::Number,
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => CardKind::Action,
            Rank::Wild | Rank::WildDrawFour => CardKind::Wild,
        }
    }

    /// Number of cards the next seat draws when this rank is played once.
    pub fn draw_penalty(self) -> usize {
        match self {
            Rank::DrawTwo => 2,
            Rank::WildDrawFour => 4,
            _ => 0,
        }
    }
}

/// Opaque identity used to tell rank/color-identical cards apart.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// Immutable playing card.
///
/// `color` is `None` exactly when the rank is Wild-kind. [`Card::colored`]
/// refuses Wild-kind ranks and [`Card::wild`] only builds them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    color: Option<Color>,
    rank: Rank,
}

impl Card {
    /// Colored card, or `None` for a Wild-kind rank or a number above 9.
    pub fn colored(id: CardId, color: Color, rank: Rank) -> Option<Self> {
        match rank {
            Rank::Wild | Rank::WildDrawFour => None,
            Rank::Number(value) if value > 9 => None,
            _ => Some(Self {
                id,
                color: Some(color),
                rank,
            }),
        }
    }

    pub fn wild(id: CardId, draw_four: bool) -> Self {
        Self {
            id,
            color: None,
            rank: if draw_four {
                Rank::WildDrawFour
            } else {
                Rank::Wild
            },
        }
    }

    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        self.rank.kind()
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.kind() == CardKind::Wild
    }
}

/// Builds the 108-card deck in deterministic order (unshuffled), ids 0..108.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u32;
    let mut fresh = || {
        let id = CardId(next_id);
        next_id += 1;
        id
    };
    for color in Color::ALL {
        deck.extend(Card::colored(fresh(), color, Rank::Number(0)));
        for value in 1..=9 {
            for _ in 0..2 {
                deck.extend(Card::colored(fresh(), color, Rank::Number(value)));
            }
        }
        for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
            for _ in 0..ACTION_COPIES {
                deck.extend(Card::colored(fresh(), color, rank));
            }
        }
    }
    for draw_four in [false, true] {
        for _ in 0..WILD_COPIES {
            deck.push(Card::wild(fresh(), draw_four));
        }
    }
    deck
}

/// Full deck in uniformly random order (Fisher-Yates via `SliceRandom`).
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}
