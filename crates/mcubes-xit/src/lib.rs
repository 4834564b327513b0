//! `.xit` (XML Isosurface Table) serialization.
//!
//! The `.xit` dialect is plain XML with a narrow element alphabet and no
//! attributes; all data lives in element text. Two versions exist: v2
//! adds `tableType`, `polyShape`, and the `tableProperties` block that v1
//! lacks. Reading is an event-stream parse over `quick-xml`; writing
//! emits the layout verbatim.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod read;
mod tags;
mod version;
mod write;

pub use error::{XitError, XitResult};
pub use read::{read_xit, read_xit_v1};
pub use version::XitVersion;
pub use write::{write_xit, write_xit_v1, write_xit_v2};
