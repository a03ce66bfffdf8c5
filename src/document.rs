use crate::{
    font::Font,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Number of pages currently in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Add an image to the document structure. Images are stored "globally" within the
    /// document, such that any page can re-use an image by referring to its index.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Render the document into a byte buffer. Object ids are allocated in a fixed
    /// order, so the same document always renders to the same bytes.
    pub fn render(self) -> Result<Vec<u8>, PDFError> {
        let Document {
            info,
            pages,
            page_order,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in Font::ALL {
            font.write(&mut refs, &mut writer);
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, images.len(), &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn renders_a_pdf_with_every_page() {
        let mut doc = Document::default();
        let first = doc.add_page(Page::new(pagesize::LETTER, None));
        let second = doc.add_page(Page::new(pagesize::LETTER, None));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page_order, vec![first, second]);

        let bytes = doc.render().expect("can render document");
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes
            .windows(b"/Count 2".len())
            .any(|window| window == b"/Count 2"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            let mut doc = Document::default();
            doc.set_info(Info::new().title("Same").clone());
            doc.add_page(Page::new(pagesize::LETTER, None));
            doc.render().expect("can render document")
        };
        assert_eq!(build(), build());
    }
}
