// src/application/commands/blacklist/mod.rs
mod add;
mod remove;
mod rename;
mod service;

pub use add::AddBlacklistedSlugCommand;
pub use remove::RemoveBlacklistedSlugCommand;
pub use rename::RenameBlacklistedSlugCommand;
pub use service::BlacklistCommandService;
