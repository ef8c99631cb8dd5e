//! Page rendering
//!
//! Compiles the page template against a catalogue document using minijinja.
//! Template syntax is minijinja's; the document's top-level keys become the
//! template context, and missing tile fields render as empty strings, which
//! is what makes placeholder tiles come out blank.

use minijinja::{AutoEscape, Environment};

use crate::document::CatalogueDocument;
use crate::Result;

/// Render `template_source` against `document`, returning the markup string.
///
/// Every `{{ }}` interpolation is HTML escaped: a document field is page
/// text, never markup. Registered tiles carry arbitrary strings, so the
/// escaping holds for any catalogue the host can serve.
pub fn render_page(template_source: &str, document: &CatalogueDocument) -> Result<String> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("page", template_source)?;
    let template = env.get_template("page")?;
    let ctx = minijinja::Value::from_serialize(document);
    Ok(template.render(ctx)?)
}
