//! # detect-config
//!
//! A typed configuration-property framework for a dependency detection tool.
//!
//! Every setting is declared once as a typed descriptor: a normalized key, a
//! parser, an optional or required-with-default presence, and help metadata.
//! Raw text from settings files, the environment or the command line is
//! looked up by key and parsed on demand into the typed value, the declared
//! default, or a precise [`error::ParseFailure`].
//!
//! ## Layout
//!
//! - [`parse`] - raw text to typed values
//! - [`property`] - descriptors and their metadata
//! - [`selection`] - include / exclude selection with the `ALL` selector
//! - [`registry`] - lookup by key, with a one-time global instance
//! - [`catalog`] - every property the detector understands
//! - [`config`] - layered settings sources and typed access to them
//! - [`report`] - printing the effective configuration

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod parse;
pub mod property;
pub mod registry;
pub mod report;
pub mod selection;
