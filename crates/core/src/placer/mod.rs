//! Placer module for relocating classified files to their library paths.
//!
//! This module provides the [`OperationExecutor`], which applies one of three
//! operations to a descriptor whose target path has been computed:
//!
//! - `move`: atomic rename; fails across filesystems
//! - `copy`: streams the content into a new file, source untouched
//! - `symlink`: links the target to the source path exactly as given
//!
//! All filesystem access goes through the [`FileSystem`] trait. A dry run
//! never calls it.
//!
//! # Example
//!
//! ```ignore
//! use mediasort_core::placer::{OperationExecutor, OperationMode};
//!
//! let executor = OperationExecutor::with_defaults();
//! let outcome = executor.apply(&descriptor, OperationMode::Copy, false).await?;
//! println!("{}", outcome.operation());
//! ```

mod config;
mod error;
mod executor;
mod fs;
mod traits;
mod types;

pub use config::PlacerConfig;
pub use error::OperationError;
pub use executor::OperationExecutor;
pub use fs::TokioFileSystem;
pub use traits::FileSystem;
pub use types::{ApplyOutcome, OperationMode, PlannedOperation, UnknownOperationMode};
