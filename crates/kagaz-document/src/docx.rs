//! DOCX engine: ZIP archive + `word/document.xml` event parse
//!
//! A DOCX file is a ZIP archive whose main content lives in
//! `word/document.xml`. Paragraphs are top-level `w:p` elements; tables are
//! `w:tbl` with `w:tr` rows and `w:tc` cells. The writer-oriented docx
//! crates don't read, so this parses the XML directly.

use crate::DocumentError;
use kagaz_domain::table::Table;
use kagaz_domain::traits::DocxEngine;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// ZIP + XML [`DocxEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipDocxEngine;

impl ZipDocxEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }

    fn parts(&self, path: &Path) -> Result<DocxParts, DocumentError> {
        let file = File::open(path)?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| DocumentError::Open(format!("not a DOCX archive: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| DocumentError::Docx(format!("missing word/document.xml: {e}")))?
            .read_to_string(&mut xml)?;

        parse_document_xml(&xml)
    }
}

impl DocxEngine for ZipDocxEngine {
    type Error = DocumentError;

    fn paragraphs(&self, path: &Path) -> Result<Vec<String>, Self::Error> {
        Ok(self.parts(path)?.paragraphs)
    }

    fn tables(&self, path: &Path) -> Result<Vec<Table>, Self::Error> {
        Ok(self.parts(path)?.tables)
    }
}

struct DocxParts {
    paragraphs: Vec<String>,
    tables: Vec<Table>,
}

/// Walk `word/document.xml`, collecting top-level paragraph text and table
/// cell grids. Text inside table cells belongs to the table, not the
/// paragraph list; nested tables fold into the enclosing cell's text.
fn parse_document_xml(xml: &str) -> Result<DocxParts, DocumentError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut tables = Vec::new();

    let mut table_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut current_paragraph = String::new();
    let mut current_rows: Vec<Vec<String>> = Vec::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_cell = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:tr" if table_depth == 1 => current_row = Vec::new(),
                b"w:tc" if table_depth == 1 => current_cell = String::new(),
                b"w:p" if table_depth == 0 => {
                    in_paragraph = true;
                    current_paragraph = String::new();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        tables.push(Table::new(std::mem::take(&mut current_rows)));
                    }
                }
                b"w:tr" if table_depth == 1 => {
                    current_rows.push(std::mem::take(&mut current_row));
                }
                b"w:tc" if table_depth == 1 => {
                    current_row.push(current_cell.trim().to_string());
                }
                b"w:p" => {
                    if table_depth == 0 && in_paragraph {
                        in_paragraph = false;
                        paragraphs.push(std::mem::take(&mut current_paragraph));
                    } else if table_depth > 0 {
                        // Paragraph break inside a cell
                        current_cell.push(' ');
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| DocumentError::Docx(format!("bad text node: {e}")))?;
                if table_depth > 0 {
                    current_cell.push_str(&text);
                } else if in_paragraph {
                    current_paragraph.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DocumentError::Docx(format!("malformed document.xml: {e}"))),
        }
    }

    Ok(DocxParts { paragraphs, tables })
}
