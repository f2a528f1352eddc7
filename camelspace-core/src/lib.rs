#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Rename camelCase files to space separated words.
//!
//! [`camel_space`] computes the new name for a single file and [`walk`]
//! applies it across a directory tree.

pub mod error;
pub mod options;
pub mod output;
pub mod transform;
pub mod walker;

pub use error::{TransformError, WalkError};
pub use options::WalkOptions;
pub use output::{OutputFormat, OutputFormatter, RenameRecord, RenameStatus, WalkReport};
pub use transform::{camel_space, check_growth, transform_name};
pub use walker::walk;
