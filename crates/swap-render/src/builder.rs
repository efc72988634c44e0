//! Top-down page layout over a single-page PDF document.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::Local;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Rect, Rgb,
};
use tracing::{debug, warn};

use crate::error::{RenderError, Result};
use crate::options::{CellAlign, ReportOptions};

/// Vertical advance after the title line.
const TITLE_GAP: f32 = 12.0;
/// Vertical advance after the run-date subtitle.
const SUBTITLE_GAP: f32 = 20.0;
/// Horizontal inset of text inside a cell.
const CELL_PAD: f32 = 1.0;
/// Border line thickness in points.
const BORDER_THICKNESS: f32 = 0.5;
/// Raster density assumed for embedded images.
const LOGO_DPI: f32 = 300.0;
/// Display format of the run date under the title.
const RUN_DATE_FORMAT: &str = "%a %b %-d, %Y";

/// Mutable layout state carried across rendering calls.
///
/// The cursor tracks millimetres from the top-left corner; conversion to the
/// PDF's bottom-left origin happens at draw time. Font and fill choices set
/// by one call stay active until another call changes them.
#[derive(Debug, Clone, Copy)]
struct LayoutState {
    x: f32,
    y: f32,
    bold: bool,
    font_size: f32,
    fill: Option<[u8; 3]>,
}

/// Incremental builder of the one-page swap report.
///
/// Construction renders the header band (title plus run date) immediately;
/// callers then add the table, optionally the logo, and persist with
/// [`ReportBuilder::finalize`]. Layout faults recorded along the way turn
/// the remaining draw calls into no-ops and fail `finalize` before anything
/// touches disk.
pub struct ReportBuilder {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    options: ReportOptions,
    state: LayoutState,
    fault: Option<String>,
}

impl ReportBuilder {
    /// Open a document and render the title and run date.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Fault`] when the built-in fonts cannot be
    /// registered.
    pub fn new(options: ReportOptions) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            options.title.clone(),
            Mm(options.page_width),
            Mm(options.page_height),
            "report",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::TimesRoman)
            .map_err(|err| RenderError::Fault {
                message: format!("font registration: {err}"),
            })?;
        let bold = doc
            .add_builtin_font(BuiltinFont::TimesBold)
            .map_err(|err| RenderError::Fault {
                message: format!("font registration: {err}"),
            })?;

        layer.set_outline_color(rgb([0, 0, 0]));
        layer.set_outline_thickness(BORDER_THICKNESS);

        let state = LayoutState {
            x: options.margin,
            y: options.margin,
            bold: true,
            font_size: options.title_size,
            fill: None,
        };
        let mut builder = Self {
            doc,
            layer,
            regular,
            bold,
            options,
            state,
            fault: None,
        };
        builder.render_banner();
        Ok(builder)
    }

    /// Title and run date at the top of the page.
    fn render_banner(&mut self) {
        self.state.bold = true;
        self.state.font_size = self.options.title_size;
        let title = self.options.title.clone();
        self.free_text(&title);
        self.state.y += TITLE_GAP;

        self.state.bold = false;
        self.state.font_size = self.options.subtitle_size;
        let run_date = Local::now().format(RUN_DATE_FORMAT).to_string();
        self.free_text(&run_date);
        self.state.y += SUBTITLE_GAP;
    }

    /// Render the table header: bold text on the configured fill, one
    /// fixed-size bordered cell per column, then a line break.
    pub fn header(&mut self, columns: &[String]) {
        if self.fault.is_some() {
            return;
        }
        self.state.bold = true;
        self.state.font_size = self.options.table_size;
        self.state.fill = Some(self.options.header_fill);
        for column in columns {
            self.cell(column, CellAlign::Left);
        }
        self.line_break();
    }

    /// Render the table body: regular text, no fill, one cell per field with
    /// the per-column alignment policy, one line break per row.
    pub fn table(&mut self, rows: &[Vec<String>]) {
        if self.fault.is_some() {
            return;
        }
        self.state.bold = false;
        self.state.font_size = self.options.table_size;
        self.state.fill = None;
        for row in rows {
            for (column, value) in row.iter().enumerate() {
                self.cell(value, self.options.alignment(column));
            }
            self.line_break();
        }
        debug!(row_count = rows.len(), "table rendered");
    }

    /// Place the configured logo image in the page's top-right region.
    ///
    /// The cursor does not move. A missing or undecodable image records a
    /// canvas fault instead of failing here; [`ReportBuilder::finalize`]
    /// surfaces it.
    pub fn logo(&mut self) {
        if self.fault.is_some() {
            return;
        }
        let Some(path) = self.options.logo.clone() else {
            return;
        };
        if let Err(message) = self.place_logo(&path) {
            warn!(path = %path.display(), error = %message, "logo placement failed");
            self.fault.get_or_insert(message);
        }
    }

    /// First fault recorded on the canvas, if any.
    #[must_use]
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Persist the finished document.
    ///
    /// A recorded fault fails the report before the output file is created,
    /// so a faulted run never leaves a partial PDF behind.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Fault`] for canvas faults and
    /// [`RenderError::Io`] when the file cannot be written.
    pub fn finalize(self, path: &Path) -> Result<()> {
        if let Some(message) = self.fault {
            return Err(RenderError::Fault { message });
        }
        let file = File::create(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.doc.save(&mut writer).map_err(|err| RenderError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::other(err.to_string()),
        })?;
        // Surface buffered-write failures here; a drop would discard them.
        writer.flush().map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "pdf saved");
        Ok(())
    }

    /// Text without a surrounding cell box, anchored at the cursor.
    fn free_text(&mut self, text: &str) {
        let baseline = self.state.y + pt_to_mm(self.state.font_size) * 0.8;
        let y = Mm(self.options.page_height - baseline);
        self.layer.use_text(
            text,
            self.state.font_size,
            Mm(self.state.x),
            y,
            self.current_font(),
        );
    }

    /// One bordered fixed-size cell at the cursor; advances the cursor by
    /// the cell width.
    fn cell(&mut self, text: &str, align: CellAlign) {
        let width = self.options.cell_width;
        let height = self.options.cell_height;
        let left = self.state.x;
        let top = self.state.y;
        let page_height = self.options.page_height;

        let border = Rect::new(
            Mm(left),
            Mm(page_height - top - height),
            Mm(left + width),
            Mm(page_height - top),
        );
        if let Some(fill) = self.state.fill {
            self.layer.set_fill_color(rgb(fill));
            self.layer.add_rect(border.with_mode(PaintMode::FillStroke));
            self.layer.set_fill_color(rgb([0, 0, 0]));
        } else {
            self.layer.add_rect(border.with_mode(PaintMode::Stroke));
        }

        let baseline = top + baseline_offset(height, self.state.font_size);
        let x = aligned_text_x(left, width, text, self.state.font_size, align);
        self.layer.use_text(
            text,
            self.state.font_size,
            Mm(x),
            Mm(page_height - baseline),
            self.current_font(),
        );

        self.state.x += width;
    }

    /// Return to the left margin and drop one cell height.
    fn line_break(&mut self) {
        self.state.x = self.options.margin;
        self.state.y += self.options.cell_height;
    }

    fn current_font(&self) -> &IndirectFontRef {
        if self.state.bold { &self.bold } else { &self.regular }
    }

    /// Decode the PNG at `path` and scale it into the configured logo box.
    fn place_logo(&mut self, path: &Path) -> std::result::Result<(), String> {
        let file =
            File::open(path).map_err(|source| format!("open {}: {source}", path.display()))?;
        let decoder = PngDecoder::new(BufReader::new(file))
            .map_err(|source| format!("decode {}: {source}", path.display()))?;
        let image = Image::try_from(decoder)
            .map_err(|source| format!("decode {}: {source}", path.display()))?;

        let (x, y, width, height) = self.options.logo_box;
        let native_width = to_mm(image.image.width.0, LOGO_DPI);
        let native_height = to_mm(image.image.height.0, LOGO_DPI);
        let transform = ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(self.options.page_height - y - height)),
            scale_x: Some(width / native_width),
            scale_y: Some(height / native_height),
            dpi: Some(LOGO_DPI),
            ..ImageTransform::default()
        };
        image.add_to_layer(self.layer.clone(), transform);
        Ok(())
    }
}

/// PDF color from 8-bit RGB channels.
fn rgb(channels: [u8; 3]) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(channels[0]) / 255.0,
        f32::from(channels[1]) / 255.0,
        f32::from(channels[2]) / 255.0,
        None,
    ))
}

/// One point expressed in millimetres.
fn pt_to_mm(points: f32) -> f32 {
    points * 25.4 / 72.0
}

/// Size in millimetres of `pixels` at `dpi`.
fn to_mm(pixels: usize, dpi: f32) -> f32 {
    pixels as f32 * 25.4 / dpi
}

/// Baseline drop from a cell's top edge, approximating vertical centering.
fn baseline_offset(cell_height: f32, font_size: f32) -> f32 {
    (cell_height + pt_to_mm(font_size) * 0.7) / 2.0
}

/// Left edge of a cell's text for the given alignment.
///
/// Built-in fonts expose no glyph metrics here, so centering estimates the
/// text width at half an em per character. Close enough for short ticker
/// symbols; never narrower than the cell padding.
fn aligned_text_x(left: f32, width: f32, text: &str, font_size: f32, align: CellAlign) -> f32 {
    match align {
        CellAlign::Left => left + CELL_PAD,
        CellAlign::Center => {
            let text_width = text.chars().count() as f32 * pt_to_mm(font_size) * 0.5;
            left + ((width - text_width) / 2.0).max(CELL_PAD)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CellAlign, aligned_text_x, baseline_offset, pt_to_mm};

    #[test]
    fn point_conversion_matches_pdf_units() {
        assert!((pt_to_mm(72.0) - 25.4).abs() < 1e-4);
    }

    #[test]
    fn left_alignment_applies_padding_only() {
        assert_eq!(aligned_text_x(10.0, 44.0, "ETH", 16.0, CellAlign::Left), 11.0);
    }

    #[test]
    fn center_alignment_is_symmetric_about_midpoint() {
        let x = aligned_text_x(10.0, 44.0, "ETH", 16.0, CellAlign::Center);
        let text_width = 3.0 * pt_to_mm(16.0) * 0.5;
        let expected = 10.0 + (44.0 - text_width) / 2.0;
        assert!((x - expected).abs() < 1e-4);
    }

    #[test]
    fn center_alignment_never_underflows_the_cell() {
        let x = aligned_text_x(10.0, 20.0, "a very long centered value", 16.0, CellAlign::Center);
        assert!(x >= 11.0);
    }

    #[test]
    fn baseline_sits_below_cell_midline() {
        let offset = baseline_offset(7.0, 16.0);
        assert!(offset > 3.5);
        assert!(offset < 7.0);
    }
}
