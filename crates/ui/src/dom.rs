use web_sys::{window, Document, Element};

/// Get document helper
fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Find an element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    get_document().and_then(|doc| doc.get_element_by_id(id))
}

/// Raw template text held by the element with the given id.
///
/// The holder is an inert script tag, so its inner HTML is the unescaped
/// template source.
pub fn template_source(id: &str) -> Option<String> {
    element_by_id(id).map(|el| el.inner_html())
}
