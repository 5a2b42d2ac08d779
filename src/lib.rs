//! MyoPet - firmware core for a sensory-learning toy.
//!
//! Four modes cycled with a button: alphabet flashcards advanced by a hand
//! wave, colour naming, mood faces driven by motion, and a temperature
//! readout. Every mode reacts with a screen update and a recorded sample.
//!
//! This library holds everything that does not touch a specific board: the
//! mode machine, sensor drivers over `embedded-hal`, rendering over
//! `embedded-graphics` and WAV parsing. It builds on the host for tests.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and needs `--features embedded` plus a thumbv7em target.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod machine;
pub mod mode;
pub mod sensors;
pub mod ui;

#[cfg(test)]
mod mock;

pub use app::{App, SystemControl};
pub use error::{Error, Result};
pub use machine::{Devices, ModeMachine, Tick};
pub use mode::Mode;
