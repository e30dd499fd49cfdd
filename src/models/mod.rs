//! Data models for the portfolio renderer.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`PortfolioDocument`]: the raw YAML shape of `Portfolio.yaml`
//! - [`PortfolioConfig`]: the validated, read-only configuration value
//! - [`ViewState`]: the per-page presentation state driven by browser events
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Serializable**: config structs derive `Serialize`/`Deserialize` for
//!   YAML persistence
//! - **Immutable after load**: [`PortfolioConfig`] exposes no mutation API;
//!   all runtime change flows through
//!   [`ViewModel`](crate::state::ViewModel) and lands in [`ViewState`]
//! - **Order-preserving**: author-ordered mappings use `IndexMap` so display
//!   order survives a serialization round-trip

pub mod config;
pub mod view_state;

pub use config::{
    Certification, CodeSnippet, ConfigError, PortfolioConfig, PortfolioDocument, Principle,
    Profile, Project, Skill, Tool, TrackerMetric,
};
pub use view_state::{NAVBAR_SCROLL_THRESHOLD, ViewState};
