use serde::{Deserialize, Serialize};

/// Zero-based seat index around the table.
pub type Seat = usize;

pub const SEAT_COUNT: usize = 4;
pub const HUMAN_SEAT: Seat = 0;

/// Clockwise visiting order: bottom (human), left, top, right.
pub const CLOCKWISE_ORDER: [Seat; SEAT_COUNT] = [0, 3, 1, 2];

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// +1 for clockwise, -1 for counter-clockwise.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Seat that follows `current` along the table ring in `direction`.
pub fn next_seat(current: Seat, direction: Direction) -> Seat {
    debug_assert!(current < SEAT_COUNT);
    let position = CLOCKWISE_ORDER
        .iter()
        .position(|&seat| seat == current)
        .unwrap_or(0) as isize;
    let next = (position + direction.step()).rem_euclid(SEAT_COUNT as isize);
    CLOCKWISE_ORDER[next as usize]
}
