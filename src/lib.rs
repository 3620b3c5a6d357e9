//! Search-and-render front end for the price tracker.
//!
//! The [`presenter::SearchPresenter`] turns a query into a request against a
//! [`api::ProductSource`] and renders the outcome into a
//! [`presenter::ResultsView`]. The binary wraps it in a small web server and a
//! handful of terminal commands.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod presenter;
pub mod render;
pub mod routes;
pub mod templates;
pub mod tracking;
pub mod utils;
