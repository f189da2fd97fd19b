//! Exports: a JSON backup of the form data and a print-ready HTML page.
//!
//! No PDF bytes are produced here; the printable page opens the browser's print dialog,
//! which is where "Save as PDF" happens.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::portfolio::slugify;
use crate::models::Document;
use crate::render::render_document;
use crate::render::template::TemplateId;
use crate::render::tree::escape_html;

pub const RESUME_BACKUP_FILE: &str = "resume_backup.json";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
    pub generated_at: DateTime<Utc>,
}

pub fn json_filename(doc: &Document) -> String {
    match doc {
        Document::Resume(_) => RESUME_BACKUP_FILE.to_string(),
        Document::Portfolio(p) => {
            let slug = p.slug.trim();
            let stem = if slug.is_empty() { "portfolio" } else { slug };
            format!("{stem}-data.json")
        }
        Document::CoverLetter(c) => {
            let slug = slugify(&c.company_name);
            let stem = if slug.is_empty() { "cover-letter" } else { &slug };
            format!("{stem}-data.json")
        }
    }
}

/// Pretty-printed JSON of the form data alone, without the kind tag, so the file can be
/// loaded straight back into the matching editor.
pub fn export_json(doc: &Document) -> Result<ExportFile, serde_json::Error> {
    let body = match doc {
        Document::Resume(r) => serde_json::to_string_pretty(r)?,
        Document::CoverLetter(c) => serde_json::to_string_pretty(c)?,
        Document::Portfolio(p) => serde_json::to_string_pretty(p)?,
    };
    Ok(ExportFile {
        filename: json_filename(doc),
        content_type: "application/json",
        body,
        generated_at: Utc::now(),
    })
}

const PRINT_CSS: &str = "body { margin: 0; background: white; }
@media print {
  body { background: white !important; }
  .print-hidden { display: none !important; }
  @page { size: A4; margin: 0; }
}";

/// Standalone page wrapping the preview with A4 print rules; prints itself on load.
pub fn render_printable(doc: &Document, template: TemplateId) -> String {
    let preview = render_document(doc, template).to_html();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{PRINT_CSS}\n</style>\n</head>\n\
         <body>\n{preview}\n<script>window.addEventListener('load', () => window.print());</script>\n\
         </body>\n</html>\n",
        title = escape_html(&doc.display_title()),
    )
}
