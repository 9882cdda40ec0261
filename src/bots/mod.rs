pub mod human;
pub mod scripted;

pub use human::HumanBot;
pub use scripted::ScriptedBot;
