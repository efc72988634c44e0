//! Report layout configuration.

use std::path::PathBuf;

/// Horizontal alignment of a table cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Center,
}

/// Layout configuration of the rendered report.
///
/// Every layout metric lives here rather than as constants inside the
/// builder, which lets tests render small deterministic fixtures.
/// Millimetres throughout, font sizes in points.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Document title placed in the header band.
    pub title: String,
    /// Page width.
    pub page_width: f32,
    /// Page height.
    pub page_height: f32,
    /// Left and top page margin.
    pub margin: f32,
    /// Title font size.
    pub title_size: f32,
    /// Run-date subtitle font size.
    pub subtitle_size: f32,
    /// Table font size, header and body alike.
    pub table_size: f32,
    /// Fixed cell width.
    pub cell_width: f32,
    /// Fixed cell height.
    pub cell_height: f32,
    /// Header row fill, RGB in `0..=255`.
    pub header_fill: [u8; 3],
    /// Per-column alignment; columns beyond this list fall back to left.
    pub alignments: Vec<CellAlign>,
    /// Decorative logo image; skipped entirely when unset.
    pub logo: Option<PathBuf>,
    /// Logo placement: x, y from the top edge, width, height.
    pub logo_box: (f32, f32, f32, f32),
}

impl Default for ReportOptions {
    /// Landscape Letter layout with the swap-table metrics.
    fn default() -> Self {
        Self {
            title: "Swap History".to_string(),
            page_width: 279.4,
            page_height: 215.9,
            margin: 10.0,
            title_size: 28.0,
            subtitle_size: 20.0,
            table_size: 16.0,
            cell_width: 44.0,
            cell_height: 7.0,
            header_fill: [240, 240, 240],
            alignments: vec![
                CellAlign::Left,
                CellAlign::Center,
                CellAlign::Left,
                CellAlign::Center,
                CellAlign::Left,
            ],
            logo: None,
            logo_box: (220.0, 10.0, 27.0, 22.0),
        }
    }
}

impl ReportOptions {
    /// Set the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the decorative logo image.
    #[must_use]
    pub fn with_logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo = Some(path.into());
        self
    }

    /// Set the per-column alignment policy.
    #[must_use]
    pub fn with_alignments(mut self, alignments: Vec<CellAlign>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Set the fixed cell geometry.
    #[must_use]
    pub fn with_cell_size(mut self, width: f32, height: f32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Alignment for `column`, defaulting to left past the configured list.
    #[must_use]
    pub fn alignment(&self, column: usize) -> CellAlign {
        self.alignments
            .get(column)
            .copied()
            .unwrap_or(CellAlign::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellAlign, ReportOptions};

    #[test]
    fn default_layout_is_landscape_letter() {
        let options = ReportOptions::default();
        assert!(options.page_width > options.page_height);
        assert_eq!(options.title, "Swap History");
        assert_eq!(options.alignments.len(), 5);
    }

    #[test]
    fn alignment_falls_back_to_left() {
        let options = ReportOptions::default();
        assert_eq!(options.alignment(1), CellAlign::Center);
        assert_eq!(options.alignment(99), CellAlign::Left);
    }
}
