//! Translate a piece of text and show the result
//!
//! Text comes from the command line, standard input or the X primary
//! selection. It is sent to Google Translate and the nested array response is
//! flattened into the translation plus an optional word breakdown, which is
//! printed or shown as a desktop notification.
//!
//! - [`mt`]: translator trait, Google provider, response flattener
//! - [`config`]: endpoint, timeout and external command settings
//! - [`input`] / [`output`]: where text comes from and where it goes
//! - [`deps`]: checks that required external utilities exist
//! - [`app`]: the pipeline tying them together

pub mod app;
pub mod config;
pub mod deps;
pub mod input;
pub mod mt;
pub mod output;

pub use app::{Request, run};
pub use config::Config;
pub use input::InputSource;
pub use mt::{MtError, MtResult};
pub use output::OutputSink;
