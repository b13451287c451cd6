//! Terminal front-end for the employee service.
//!
//! Each subcommand plays the role of one page of the admin UI: it mounts
//! the core components, executes their requests over ureq, and prints
//! what the page would display.

pub mod cli;
pub mod pages;
pub mod transport;

pub use cli::{Cli, Command};
pub use pages::Admin;
pub use transport::UreqTransport;
