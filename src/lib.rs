//! Contact form with per-field validation, toast notifications and a
//! submission flow that navigates to a confirmation view once the message
//! was delivered.
//!
//! The domain lives in [`state`]; [`transport`] is the seam to whatever
//! delivers a submission; [`app`] and [`ui`] wire both into a Ratatui
//! terminal application.

pub mod app;
pub mod config;
pub mod state;
pub mod transport;
pub mod ui;
