//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod check;
pub mod generate;
pub mod init;
pub mod render;

pub use check::{execute_check, CheckOptions, CheckReport};
pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use render::{execute_render, render_action, RenderCommandOptions};
