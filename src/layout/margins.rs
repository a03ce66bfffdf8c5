use crate::units::Pt;

/// Margins are used when laying out objects on a page. There is no control
/// preventing objects on pages to overflow the margins—the margins are there
/// as guidelines for layout functions. Additionally, the margins are applied
/// to [`Page`](crate::Page)s to determine the `ArtBox` attribute of each page in the
/// generated PDF
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Utility method to add a gutter to the left of the page,
    /// i.e. for right-hand (recto) pages in bound documents
    pub fn with_gutter_left(&self, gutter: Pt) -> Margins {
        Margins {
            left: self.left + gutter,
            ..*self
        }
    }

    /// Utility method to add a gutter to the right of the page,
    /// i.e. for left-hand (verso) pages in bound documents
    pub fn with_gutter_right(&self, gutter: Pt) -> Margins {
        Margins {
            right: self.right + gutter,
            ..*self
        }
    }

    /// Add the binding gutter on the side facing the spine for a 1-based page number.
    /// Odd pages are rectos (spine on the left), even pages are versos (spine on
    /// the right).
    pub fn with_gutter(&self, gutter: Pt, page_number: usize) -> Margins {
        if page_number % 2 == 1 {
            self.with_gutter_left(gutter)
        } else {
            self.with_gutter_right(gutter)
        }
    }
}
