#![warn(clippy::all, rust_2018_idioms)]

//! Egui front-end for the roster client.

pub mod app;
pub mod pages;
pub mod state;
pub mod widgets;

pub use app::RosterApp;
