//! Staging of a generated API directory into a build output target.
//!
//! The generated directory is located next to (or one level above) a caller
//! supplied origin, the target directory is recreated from scratch and the
//! listed files are copied in. When the target uses a different module
//! identifier, every occurrence of the old identifier is rewritten on the way.
//!
//! # Example
//!
//! ```no_run
//! use apiroute_stage::replicate;
//!
//! let report = replicate(
//!     "node_modules/plugin/dist",
//!     "dist/client/.api",
//!     ["routers.js", "types.d.ts"],
//!     "@api",
//!     "@api-client",
//! )
//! .unwrap();
//! println!("staged {} files", report.files.len());
//! ```

mod error;
mod listing;
mod replace;
mod replicate;
mod source;

pub use error::{Result, StageError};
pub use listing::list_generated_files;
pub use replace::{ReplaceMode, Substitution};
pub use replicate::{StageAction, StageOptions, StageReport, StagedFile, replicate};
pub use source::{DEFAULT_CANDIDATES, SourceCandidates};
