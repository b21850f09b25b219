//! Resume - renders a JSON-described resume as a themed terminal view
//!
//! A resume document is a tree of nodes (stacks, text, spaces). The
//! [`descriptor`] module decodes it, [`render`] turns it into an element
//! tree styled by a [`theme::Theme`], and [`view_model`] ties fetching,
//! decoding, theming and re-rendering together for a host screen.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod logging;
pub mod render;
pub mod theme;
pub mod traits;
pub mod ui;
pub mod view_model;
