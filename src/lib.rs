// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. logo::LogoCache)
    clippy::module_name_repetitions
)]

//! # Jobdeck
//!
//! A terminal job board for remote developer positions.
//!
//! Jobdeck fetches a job listing once and lets you:
//! - Filter postings by title as you type
//! - Page through them ten at a time
//! - Read a posting's formatted description, with company logos
//! - Open or copy the apply link
//!
//! ## Architecture
//!
//! Jobdeck uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! The browsing rules themselves (filter, paginate, select) live in
//! [`board`] and know nothing about the terminal.
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`board`]: Search, pagination and selection over the listing
//! - [`job`]: Posting records and their display fallbacks
//! - [`description`]: Markdown-subset description formatting
//! - [`fetch`]: One-shot listing retrieval
//! - [`logo`]: Company logo download and terminal image protocols
//! - [`export`]: Plain-text and HTML output for scripting
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags

pub mod app;
pub mod board;
pub mod config;
pub mod description;
pub mod export;
pub mod fetch;
pub mod job;
pub mod logo;
pub mod ui;
