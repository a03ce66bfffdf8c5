//! Pre-defined page sizes, as (width, height) in points.

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// US Letter, 8.5in × 11in portrait
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
