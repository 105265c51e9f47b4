//! Developer conveniences for debugging a running program.
//!
//! Two independent pieces:
//!
//! - [`logging`]: a [`LoggerRegistry`] handing out one shared, reconfigurable
//!   logger per logical name, each with a console sink and optionally a file
//!   sink. The formatter tier follows the level: debug gets the detailed
//!   layout with caller location, everything else the simple one.
//! - [`viewer`]: a small HTTP server rendering a caller-built attribute
//!   catalog ([`HelpInfo`]) as browsable help pages.
//!
//! ```no_run
//! use devkit::logging::{Level, LoggerOptions, LoggerRegistry};
//!
//! fn main() -> eyre::Result<()> {
//!     let registry = LoggerRegistry::new();
//!     let logger = registry.get_logger(
//!         "app",
//!         LoggerOptions::new().with_file("app.log").with_level(Level::Debug),
//!     )?;
//!     devkit::info!(logger, "starting up");
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod viewer;

pub use logging::{Level, LoggerOptions, LoggerRegistry};
pub use viewer::HelpInfo;
