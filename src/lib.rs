//! # Introduction
//!
//! ppmerge reconciles the output of a C-family preprocessor with the source
//! file it was produced from.  Preprocessing expands macros but throws the
//! comments away; this crate rebuilds a readable file that keeps the expanded
//! code while restoring the comment lines the preprocessor dropped.
//!
//! ## Merge pipeline
//!
//! ```text
//! original ──→ line slices ──────────────────────┐
//! expanded ──→ #line tracking → per-line slots ──┴→ merged text
//! ```
//!
//! 1. [`lines`] — splits both buffers into physical line slices and provides
//!    the small lexical helpers the merge needs (indent measurement,
//!    comment-opener recognition).
//! 2. [`directive`] — recognizes `#line N "file"` markers and tracks which
//!    logical source line the next physical line belongs to.
//! 3. [`merge`] — attributes expanded content to logical line slots and
//!    emits one output line per original line, preferring expanded code and
//!    falling back to the original for comment lines.
//!
//! The merge is a single-threaded, deterministic pass over bounded input:
//! two linear scans to build the line tables, one linear scan to emit the
//! result.

pub mod directive;
pub mod lines;
pub mod merge;

pub use merge::merge;
