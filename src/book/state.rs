use crate::resolver::ImageRef;
use crate::BookError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Title used when the book has none
pub const DEFAULT_TITLE: &str = "My Coloring Book";

/// Optional headings printed above and below a page's image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageText {
    pub top_line: Option<String>,
    pub bottom_line: Option<String>,
}

impl PageText {
    /// The heading above the image, if there is a non-empty one
    pub fn top_line(&self) -> Option<&str> {
        self.top_line.as_deref().filter(|line| !line.is_empty())
    }

    /// The heading below the image, if there is a non-empty one
    pub fn bottom_line(&self) -> Option<&str> {
        self.bottom_line.as_deref().filter(|line| !line.is_empty())
    }
}

/// A snapshot of everything the book wizard collected, handed over in one
/// piece when the book is finalised. Rendering never modifies it.
///
/// Serialised field names match the camelCase JSON produced by the web client.
/// Page numbers in `page_images` and `page_texts` are 1-based; entries outside
/// `1..=page_count` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookState {
    pub book_title: String,
    pub page_count: u32,
    pub page_images: BTreeMap<u32, Option<ImageRef>>,
    pub page_texts: BTreeMap<u32, PageText>,
    pub include_dedication_page: bool,
    pub dedication_text: String,
    /// The photo the user originally uploaded
    pub cover_image: Option<ImageRef>,
    /// Sketch renditions of the cover photo
    pub cover_image_variants: Vec<ImageRef>,
    pub selected_cover_variant_index: Option<usize>,
}

impl BookState {
    /// Parse a book description from JSON. Negative or fractional counts and
    /// indices are rejected here, before any layout happens.
    pub fn from_json(json: &str) -> Result<BookState, BookError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The title to print, falling back to [DEFAULT_TITLE]
    pub fn display_title(&self) -> &str {
        if self.book_title.is_empty() {
            DEFAULT_TITLE
        } else {
            self.book_title.as_str()
        }
    }

    /// Whether a dedication page is printed: it must be requested and have text
    pub fn has_dedication(&self) -> bool {
        self.include_dedication_page && !self.dedication_text.is_empty()
    }

    /// The image for a 1-based content page, if it has one
    pub fn page_image(&self, page: u32) -> Option<&ImageRef> {
        self.page_images
            .get(&page)
            .and_then(Option::as_ref)
            .filter(|image| !image.is_empty())
    }

    /// The headings for a 1-based content page, if it has any
    pub fn page_text(&self, page: u32) -> Option<&PageText> {
        self.page_texts.get(&page)
    }

    /// The image shown on the title page: the selected sketch variant if any
    /// variants exist, otherwise the uploaded photo. An out-of-range selection
    /// falls back to the first variant.
    pub fn effective_cover(&self) -> Option<&ImageRef> {
        let cover = if self.cover_image_variants.is_empty() {
            self.cover_image.as_ref()
        } else {
            let index = self.selected_cover_variant_index.unwrap_or(0);
            self.cover_image_variants.get(index).or_else(|| {
                log::warn!(
                    "cover variant {index} does not exist ({} variants), using the first",
                    self.cover_image_variants.len()
                );
                self.cover_image_variants.first()
            })
        };
        cover.filter(|image| !image.is_empty())
    }

    /// Page numbers that have images or text but lie outside `1..=page_count`
    pub fn stray_pages(&self) -> Vec<u32> {
        let in_range = 1..=self.page_count;
        let mut stray: Vec<u32> = self
            .page_images
            .keys()
            .chain(self.page_texts.keys())
            .copied()
            .filter(|page| !in_range.contains(page))
            .collect();
        stray.sort_unstable();
        stray.dedup();
        stray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_variants(variants: &[&str], selected: Option<usize>) -> BookState {
        BookState {
            cover_image: Some("photo.jpg".into()),
            cover_image_variants: variants.iter().map(|v| ImageRef::from(*v)).collect(),
            selected_cover_variant_index: selected,
            ..BookState::default()
        }
    }

    #[test]
    fn parses_the_web_client_format() {
        let json = r#"{
            "bookTitle": "Zoe's Zoo",
            "pageCount": 3,
            "pageImages": { "1": "data:image/png;base64,AAAA", "3": null },
            "pageTexts": { "2": { "topLine": "Lion" } },
            "includeDedicationPage": true,
            "dedicationText": "For Zoe",
            "coverImage": null,
            "coverImageVariants": ["sketch-a.png", "sketch-b.png"],
            "selectedCoverVariantIndex": 1
        }"#;
        let state = BookState::from_json(json).expect("can parse book");
        assert_eq!(state.display_title(), "Zoe's Zoo");
        assert_eq!(state.page_count, 3);
        assert!(state.page_image(1).is_some());
        assert!(state.page_image(2).is_none());
        assert!(state.page_image(3).is_none());
        assert_eq!(
            state.page_text(2).and_then(PageText::top_line),
            Some("Lion")
        );
        assert!(state.has_dedication());
        assert_eq!(state.effective_cover(), Some(&ImageRef::from("sketch-b.png")));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state = BookState::from_json("{}").expect("can parse empty book");
        assert_eq!(state, BookState::default());
        assert_eq!(state.display_title(), DEFAULT_TITLE);
        assert!(state.effective_cover().is_none());
    }

    #[test]
    fn negative_page_counts_are_rejected() {
        assert!(matches!(
            BookState::from_json(r#"{ "pageCount": -2 }"#),
            Err(BookError::Parse(_))
        ));
        assert!(BookState::from_json(r#"{ "pageCount": 2.5 }"#).is_err());
        assert!(BookState::from_json(r#"{ "selectedCoverVariantIndex": -1 }"#).is_err());
    }

    #[test]
    fn dedication_needs_flag_and_text() {
        let mut state = BookState {
            include_dedication_page: true,
            ..BookState::default()
        };
        assert!(!state.has_dedication());
        state.dedication_text = "For Mum".to_string();
        assert!(state.has_dedication());
        state.include_dedication_page = false;
        assert!(!state.has_dedication());
    }

    #[test]
    fn cover_resolution_prefers_selected_variant() {
        let state = with_variants(&["a", "b", "c"], Some(2));
        assert_eq!(state.effective_cover(), Some(&ImageRef::from("c")));

        let state = with_variants(&["a", "b", "c"], None);
        assert_eq!(state.effective_cover(), Some(&ImageRef::from("a")));
    }

    #[test]
    fn out_of_range_variant_falls_back_to_first() {
        let state = with_variants(&["a", "b"], Some(7));
        assert_eq!(state.effective_cover(), Some(&ImageRef::from("a")));
    }

    #[test]
    fn cover_falls_back_to_uploaded_photo() {
        let state = with_variants(&[], Some(3));
        assert_eq!(state.effective_cover(), Some(&ImageRef::from("photo.jpg")));

        let state = BookState {
            cover_image: Some("".into()),
            ..BookState::default()
        };
        assert!(state.effective_cover().is_none());
    }

    #[test]
    fn empty_headings_count_as_missing() {
        let text = PageText {
            top_line: Some(String::new()),
            bottom_line: Some("The End".to_string()),
        };
        assert_eq!(text.top_line(), None);
        assert_eq!(text.bottom_line(), Some("The End"));
    }

    #[test]
    fn finds_entries_outside_the_page_range() {
        let mut state = BookState {
            page_count: 2,
            ..BookState::default()
        };
        state.page_images.insert(0, Some("zero".into()));
        state.page_images.insert(2, Some("two".into()));
        state.page_texts.insert(5, PageText::default());
        state.page_texts.insert(0, PageText::default());
        assert_eq!(state.stray_pages(), vec![0, 5]);
    }
}
