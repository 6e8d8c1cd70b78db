//! Extracted text as ordered, origin-tagged page segments

/// Where a page segment's text came from.
///
/// Every segment carries its origin even when the text is empty, so a
/// downstream reader can tell an empty page apart from a page that was
/// never OCR'd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrigin {
    /// Direct layout-text extraction from the document's text layer
    Layout,
    /// OCR over a rasterized rendering of the page
    Ocr,
    /// OCR over raster images embedded within the page
    EmbeddedImageOcr,
}

/// One page's worth of extracted text.
///
/// A segment whose producing engine failed is kept as an explicit
/// empty-with-reason entry (`error` populated, `text` empty) rather than
/// being dropped, so tests and diagnostics can distinguish "genuinely
/// empty" from "engine failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSegment {
    /// Zero-based index of the source page
    pub page_index: usize,
    /// Extraction origin tag
    pub origin: SegmentOrigin,
    /// Extracted text; empty when the page had none or the engine failed
    pub text: String,
    /// Engine failure message, when this unit failed
    pub error: Option<String>,
}

impl PageSegment {
    /// A segment produced by a successful extraction (possibly empty).
    pub fn ok(page_index: usize, origin: SegmentOrigin, text: impl Into<String>) -> Self {
        Self {
            page_index,
            origin,
            text: text.into(),
            error: None,
        }
    }

    /// An empty segment recording why its unit failed.
    pub fn failed(page_index: usize, origin: SegmentOrigin, reason: impl Into<String>) -> Self {
        Self {
            page_index,
            origin,
            text: String::new(),
            error: Some(reason.into()),
        }
    }

    /// True when the producing engine failed for this unit.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Ordered sequence of page segments for one source document.
///
/// Invariant: segment order matches source page order, with embedded-image
/// OCR segments appended after the primary result in the same relative
/// page order.
///
/// Paginated documents (PDF) render with per-page headings; single-segment
/// formats (DOCX, plain text, images) render as bare text.
#[derive(Debug, Clone, Default)]
pub struct ExtractedText {
    segments: Vec<PageSegment>,
    paginated: bool,
}

impl ExtractedText {
    /// An empty, paginated container (page headings on render).
    pub fn paginated() -> Self {
        Self {
            segments: Vec::new(),
            paginated: true,
        }
    }

    /// A single-segment result for formats without page structure.
    pub fn single(origin: SegmentOrigin, text: impl Into<String>) -> Self {
        Self {
            segments: vec![PageSegment::ok(0, origin, text)],
            paginated: false,
        }
    }

    /// A single empty-with-reason segment for a whole-document failure.
    pub fn failed(origin: SegmentOrigin, reason: impl Into<String>) -> Self {
        Self {
            segments: vec![PageSegment::failed(0, origin, reason)],
            paginated: false,
        }
    }

    /// Append a segment, preserving push order.
    pub fn push(&mut self, segment: PageSegment) {
        self.segments.push(segment);
    }

    /// All segments in order.
    pub fn segments(&self) -> &[PageSegment] {
        &self.segments
    }

    /// Count of non-whitespace characters across all segment text.
    ///
    /// This is the quantity the PDF strategy compares against its OCR
    /// fallback threshold.
    pub fn visible_len(&self) -> usize {
        self.segments
            .iter()
            .flat_map(|s| s.text.chars())
            .filter(|c| !c.is_whitespace())
            .count()
    }

    /// Render the artifact body.
    ///
    /// Paginated output emits the original per-page heading conventions:
    ///
    /// ```text
    /// --- Page 1 ---
    /// --- Page 2 (OCR) ---
    /// --- Images from Page 2 ---
    /// ```
    ///
    /// Headings are emitted even for empty segments, so the page labeling
    /// survives into the artifact. Unpaginated output is the segment text
    /// joined as-is.
    pub fn render(&self) -> String {
        if !self.paginated {
            return self
                .segments
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join("\n");
        }

        let mut out = String::new();
        for segment in &self.segments {
            let page = segment.page_index + 1;
            match segment.origin {
                SegmentOrigin::Layout => {
                    out.push_str(&format!("\n--- Page {page} ---\n"));
                }
                SegmentOrigin::Ocr => {
                    out.push_str(&format!("\n--- Page {page} (OCR) ---\n"));
                }
                SegmentOrigin::EmbeddedImageOcr => {
                    out.push_str(&format!("\n--- Images from Page {page} ---\n"));
                }
            }
            out.push_str(&segment.text);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_renders_bare_text() {
        let text = ExtractedText::single(SegmentOrigin::Layout, "hello world");
        assert_eq!(text.render(), "hello world");
    }

    #[test]
    fn test_paginated_renders_page_headings() {
        let mut text = ExtractedText::paginated();
        text.push(PageSegment::ok(0, SegmentOrigin::Layout, "first"));
        text.push(PageSegment::ok(1, SegmentOrigin::Ocr, "second"));
        text.push(PageSegment::ok(1, SegmentOrigin::EmbeddedImageOcr, "logo"));

        let rendered = text.render();
        assert!(rendered.contains("--- Page 1 ---\nfirst"));
        assert!(rendered.contains("--- Page 2 (OCR) ---\nsecond"));
        assert!(rendered.contains("--- Images from Page 2 ---\nlogo"));
    }

    #[test]
    fn test_empty_segment_keeps_its_heading() {
        let mut text = ExtractedText::paginated();
        text.push(PageSegment::ok(0, SegmentOrigin::Layout, ""));
        assert!(text.render().contains("--- Page 1 ---"));
    }

    #[test]
    fn test_failed_segment_is_empty_with_reason() {
        let segment = PageSegment::failed(3, SegmentOrigin::Layout, "render failed");
        assert!(segment.is_failed());
        assert!(segment.text.is_empty());
        assert_eq!(segment.error.as_deref(), Some("render failed"));
    }

    #[test]
    fn test_visible_len_ignores_whitespace() {
        let mut text = ExtractedText::paginated();
        text.push(PageSegment::ok(0, SegmentOrigin::Layout, "ab  \n\t c"));
        text.push(PageSegment::ok(1, SegmentOrigin::Layout, " d "));
        assert_eq!(text.visible_len(), 4);
    }

    #[test]
    fn test_segment_order_is_push_order() {
        let mut text = ExtractedText::paginated();
        text.push(PageSegment::ok(0, SegmentOrigin::Layout, "a"));
        text.push(PageSegment::ok(1, SegmentOrigin::Layout, "b"));
        text.push(PageSegment::ok(0, SegmentOrigin::EmbeddedImageOcr, "img"));

        let pages: Vec<usize> = text.segments().iter().map(|s| s.page_index).collect();
        assert_eq!(pages, vec![0, 1, 0]);
    }
}
