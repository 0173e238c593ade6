//! Rendering strategies for a single template.
//!
//! - `interface`: the substitution capability ([`TemplateRenderer`])
//! - `minijinja`: strict minijinja implementation of it
//! - `filters`: filters registered on the minijinja environment
//! - `executable`: delegated rendering through a child process

pub mod executable;
pub mod filters;
pub mod interface;
pub mod minijinja;

pub use executable::render_executable;
pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;
