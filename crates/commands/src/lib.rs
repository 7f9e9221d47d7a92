//! Vocat command orchestration.
//!
//! This crate owns the five CLI operations (trigger, deploy, status, list,
//! help) and nothing else. Each operation sequences calls between the domain
//! rules in the [`workflows`] crate and the infrastructure ports
//! ([`workflows::ActionsGateway`], [`workflows::Speaker`]); none of them adds
//! domain rules of its own.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** The binary hands this crate the resolved
//! settings, the real gateway, and the real speaker; tests hand it recording
//! fakes and assert on the calls that were (or were not) made.

mod dispatcher;
mod render;

pub use dispatcher::{Dispatcher, USAGE};
pub use render::{run_line, workflow_line};
