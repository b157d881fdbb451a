pub mod actions;
pub mod commands;
pub mod dispatch;
pub mod start;

pub use self::actions::Action;
pub use self::start::start;
