#![forbid(unsafe_code)]

//! Terminal front end for the mesa floor manager.
//!
//! Everything interactive lives here: a prompt-driven command language
//! over the table registry and order book, a full-redraw view composed of
//! the floor map, the table listing, and the active order store.
//!
//! The loop is strictly single-threaded: one event in, one state change,
//! one complete re-render. Derived output (positions, edges, the painted
//! map) is rebuilt from the registry snapshot every frame; nothing stale
//! is ever cached.

pub mod app;
pub mod cli;
pub mod logging;
pub mod session;
