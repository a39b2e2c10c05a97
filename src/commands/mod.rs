//! Command implementations for the scaffold-publish CLI

pub mod base;
pub mod clone;
pub mod pr;
pub mod publish;
pub mod push;
pub mod validators;

pub use base::{Command, CommandContext};
pub use clone::CloneCommand;
pub use pr::PrCommand;
pub use publish::PublishCommand;
pub use push::PushCommand;
