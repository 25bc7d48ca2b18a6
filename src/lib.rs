//! Renders the fixed 18-month cybersecurity curriculum into a paginated A4
//! PDF with a running title header, a page-number footer and clickable
//! resource links.
//!
//! The [`assembler`] module owns the document flow; [`data`] holds the
//! curriculum dataset; the remaining modules provide the layout arithmetic,
//! the `genpdf` elements and the `lopdf` post-processing that backs it.

pub mod assembler;
pub mod builder;
pub mod data;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod links;
pub mod model;

pub use assembler::{generate, render, RenderedDocument, DEFAULT_OUTPUT};
pub use error::{Error, Result};
