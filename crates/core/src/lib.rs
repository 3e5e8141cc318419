//! Player search domain core.
//!
//! Record model, CSV encoding, and artifact naming rules shared by the
//! storage layer, the HTTP server, and the command-line client. Nothing in
//! this crate performs I/O.

pub mod csv;
pub mod error;
pub mod naming;
pub mod player;
pub mod search;
