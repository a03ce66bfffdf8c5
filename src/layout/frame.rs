use crate::rect::Rect;
use crate::units::Pt;

/// An axis-aligned box measured from the top-left corner of the page,
/// with `y` growing downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Frame {
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Frame {
        Frame {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> Pt {
        self.x + self.width
    }

    pub fn bottom(&self) -> Pt {
        self.y + self.height
    }

    /// Horizontal centre line of the frame
    pub fn centre_x(&self) -> Pt {
        self.x + self.width / 2.0
    }

    /// Grow the frame by `amount` on every side (shrink with a negative amount)
    pub fn outset(&self, amount: Pt) -> Frame {
        Frame {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Shrink the frame by `amount` on every side
    pub fn inset(&self, amount: Pt) -> Frame {
        self.outset(-amount)
    }

    /// Whether `other` lies entirely within this frame, allowing `tolerance` of slack
    pub fn contains(&self, other: &Frame, tolerance: Pt) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }

    /// Convert into PDF user space on a page of the given height
    pub fn to_rect(&self, page_height: Pt) -> Rect {
        Rect {
            x1: self.x,
            y1: page_height - self.bottom(),
            x2: self.right(),
            y2: page_height - self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_into_pdf_space() {
        let frame = Frame::new(Pt(54.0), Pt(36.0), Pt(522.0), Pt(720.0));
        let rect = frame.to_rect(Pt(792.0));
        assert_eq!(rect.x1, Pt(54.0));
        assert_eq!(rect.y1, Pt(36.0));
        assert_eq!(rect.x2, Pt(576.0));
        assert_eq!(rect.y2, Pt(756.0));
    }

    #[test]
    fn inset_and_outset_are_symmetric() {
        let frame = Frame::new(Pt(54.0), Pt(36.0), Pt(522.0), Pt(720.0));
        let inner = frame.inset(Pt(6.0));
        assert_eq!(inner, Frame::new(Pt(60.0), Pt(42.0), Pt(510.0), Pt(708.0)));
        assert_eq!(inner.outset(Pt(6.0)), frame);
        assert!(frame.contains(&inner, Pt(0.0)));
        assert!(!inner.contains(&frame, Pt(0.0)));
        assert_eq!(frame.centre_x(), Pt(315.0));
    }
}
