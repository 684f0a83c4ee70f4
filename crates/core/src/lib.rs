//! # eGP Core
//!
//! Core domain logic for the eGP health profile application.
//!
//! This crate contains pure data operations only:
//! - The [`UserProfile`] record and its copy-on-write [`ProfileStore`]
//! - JSON transfer (export to / import from `userProfile.json`)
//! - The two-step symptom capture flow
//! - The stubbed diagnosis action
//!
//! **No presentation concerns**: the banner animation, panel handling and
//! terminal prompts belong in the `egp-run` binary; scriptable one-shot
//! commands belong in `egp-cli`.

pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod error;
pub mod notify;
pub mod profile;
pub mod symptoms;
pub mod transfer;

pub use config::CoreConfig;
pub use error::{ProfileError, ProfileResult};
pub use notify::Notifier;
pub use profile::{ProfileStore, UserProfile};
pub use symptoms::{SymptomEntry, SymptomPrompter};

// Re-export the shared validated text type for downstream crates.
pub use egp_types::PromptText;
