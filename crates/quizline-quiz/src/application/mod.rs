//! Application services that drive the quiz domain.

pub mod command_handlers;
