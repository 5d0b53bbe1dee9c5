//! weatherMail client library
//!
//! Registration, login and subscription management against the weatherMail
//! backend, with an egui front end.

pub mod config;
pub mod controller;
pub mod network;
pub mod state;
pub mod ui;
