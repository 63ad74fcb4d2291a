//! # libcli - minimal command interpreter for embedded devices
//!
//! A small, line-oriented command shell for resource-constrained targets.
//! Characters come in one at a time from a caller-supplied function, are
//! edited into a line with terminal-style echo, and each completed line is
//! dispatched to the registered command of the same name.
//!
//! ## Features
//!
//! - **Line editing**: backspace with visual erase, CR suppression, bounded buffer
//! - **Command registry**: caller-owned entries linked without allocation
//! - **Built-in help**: lists every command with its description
//! - **Two storage modes**: caller-owned session or allocator-provided session
//! - **JSON configuration**: terminator and prompt via `serde-json-core`
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Basic Shell
//!
//! ```rust
//! use libcli::shell::{Cli, Command, Settings};
//!
//! fn uart_read() -> Option<u8> {
//!     None
//! }
//!
//! fn uart_write(_c: u8) {}
//!
//! fn version(cli: &Cli, _input: &str) {
//!     cli.output().send_str("Firmware v1.0.0\r\n");
//! }
//!
//! let version = Command::new("version", Some("Show firmware version"), version);
//!
//! let mut cli: Cli = Cli::new(Settings {
//!     get_char: Some(uart_read),
//!     send_char: Some(uart_write),
//!     input_end_char: b'\n',
//!     prompt: Some("cli>"),
//! })
//! .unwrap();
//!
//! cli.add_command(&version).unwrap();
//! assert!(cli.search_command("version").is_some());
//! cli.run();
//! ```
//!
//! ## Platform Support
//!
//! The crate only needs `core`. It runs on bare-metal microcontrollers as well
//! as hosted targets.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (adds the `Leak` allocator)
//! - `defmt`: Enable defmt logging and `defmt::Format` for errors
//! - `log`: Enable logging through the `log` facade

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Command interpreter: line editing, command registry and dispatch.
///
/// See [`shell::Cli`] for the session type.
pub mod shell;
