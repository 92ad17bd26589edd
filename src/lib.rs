//! wx2tt - convert WeChat mini-program sources into ByteDance mini-program sources.
//!
//! This library provides the core functionality for wx2tt, including:
//! - The rule table: extension renames and literal text substitutions
//! - Copying a source tree to a sibling `_tt` directory
//! - Renaming and rewriting files in the copy
//!
//! # Example
//!
//! ```no_run
//! use wx2tt::convert::Converter;
//! use wx2tt::rules::RuleTable;
//!
//! let converter = Converter::new("miniprogram", RuleTable::default()).unwrap();
//! let report = converter.run().unwrap();
//!
//! println!(
//!     "Converted {} files into {}",
//!     report.copy.files,
//!     converter.destination().display()
//! );
//! ```

pub mod convert;
pub mod error;
pub mod logging;
pub mod rules;

pub use error::{ConvertError, Result};
