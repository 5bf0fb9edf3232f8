/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder-substitution template processor for Folio.
//!
//! Templates are plain text with three placeholder forms:
//!
//! - Scalars: `[[TITLE]]`
//! - Conditional blocks: `[[if:HAS_MATH]]...[[endif:HAS_MATH]]`, and the
//!   inverted form `[[if:!HAS_MATH]]...[[endif:!HAS_MATH]]`
//! - Iterable blocks: `[[for:TEX_MACROS]]...[[TEX_MACROS]]...[[endfor:TEX_MACROS]]`
//!
//! Processing is a single pass: conditional blocks are resolved first, then
//! iterable blocks, then the remaining scalars. Any placeholder left without
//! a value is an error that names its key.
//!
//! # Example
//!
//! ```
//! use folio_template::TemplateProcessor;
//!
//! let mut processor = TemplateProcessor::new("<h1>[[TITLE]]</h1>[[if:DRAFT]] (draft)[[endif:DRAFT]]");
//! processor.value("TITLE", "Report").conditional("DRAFT", false);
//!
//! assert_eq!(processor.process().unwrap(), "<h1>Report</h1>");
//! ```

pub mod error;
pub mod placeholder;
pub mod processor;

// Re-export main types at crate root
pub use error::{TemplateError, TemplateResult};
pub use placeholder::{PlaceholderKind, TemplatePlaceholder, TemplateRow};
pub use processor::TemplateProcessor;
