//! Generation of print-ready personalised coloring books as PDF documents.
//!
//! The [`book`] module lays a [`BookState`] out onto US Letter pages with
//! binding-aware margins; the rest of the crate is the small PDF document
//! model it renders into.

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (mostly text) on pages
pub mod layout;

mod page;
pub use page::*;

/// Standard page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod content;
pub(crate) mod refs;

mod resolver;
pub use resolver::*;

mod units;
pub use units::*;

mod writer;
pub use writer::*;

mod error;
pub use error::*;

pub mod book;
pub use book::{generate_book_pdf, BookState, PageKind};

/// Re-export PDF-writer functionality
pub use pdf_writer;
