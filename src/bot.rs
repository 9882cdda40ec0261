use crate::action::Action;
use crate::state::SessionView;

/// Interface for anything that picks a seat's action: scripted opponents,
/// interactive players, experiments.
pub trait Bot {
    fn select_action(&mut self, state: &SessionView) -> Action;
}
