use super::state::BookState;
use std::fmt;

/// The role of a single page in the finished book
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PageKind {
    Title,
    Dedication,
    /// A content page, numbered from 1 within the book's content
    Content(u32),
    /// Blank page for notes, appended to reach an even page count
    Notes,
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Title => write!(f, "title"),
            PageKind::Dedication => write!(f, "dedication"),
            PageKind::Content(n) => write!(f, "content {n}"),
            PageKind::Notes => write!(f, "notes"),
        }
    }
}

/// The ordered list of pages a book renders to: the title page, the
/// dedication when there is one, every content page, then a notes page if
/// that is needed to make the total even for printing.
pub fn page_plan(state: &BookState) -> Vec<PageKind> {
    let mut plan = Vec::with_capacity(state.page_count as usize + 3);
    plan.push(PageKind::Title);
    if state.has_dedication() {
        plan.push(PageKind::Dedication);
    }
    plan.extend((1..=state.page_count).map(PageKind::Content));
    if plan.len() % 2 == 1 {
        plan.push(PageKind::Notes);
    }
    plan
}
