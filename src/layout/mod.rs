//! Layout utilities for positioning content on pages.
//!
//! Layout code works in a top-left-origin coordinate system ([`Frame`]),
//! where `y` grows down the page, which is how page designs are usually
//! described. Conversion to PDF user space happens when the content is
//! handed to a [`DocumentWriter`](crate::DocumentWriter).
//!
//! Text helpers measure strings against the built-in font metrics and wrap
//! them to a maximum width, breaking at whitespace and falling back to
//! breaking inside words that are too long for a line.

mod frame;
mod margins;
mod text;

pub use frame::*;
pub use margins::*;
pub use text::*;
