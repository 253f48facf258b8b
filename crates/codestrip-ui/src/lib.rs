//! # Codestrip UI
//!
//! iced host for the toolbar controller.
//!
//! ## Architecture
//!
//! The controller in `codestrip-core` knows nothing about widgets. This
//! crate is the adapter around it:
//! - **toolbar**: turns controller state into widgets and widget events
//!   into controller calls
//! - **demo**: in-memory collaborators (editor history, saver, layout, ...)
//! - **app**: a small editor window wiring the two together
//!
//! ## Learning: The Elm Architecture
//!
//! The app follows iced's Model / Message / Update / View split. The
//! toolbar adapter has its own `ToolbarMessage`, which the app wraps with
//! `Element::map`, so the adapter can be reused by any iced application.

pub mod app;
pub mod demo;
pub mod toolbar;

pub use app::{App, Flags, run};
pub use toolbar::{ToolbarAdapter, ToolbarMessage};
