//! Document export
//!
//! Drives the two export paths: the synchronous plain-text file and
//! the asynchronous single-page PDF. PDF production itself lives
//! behind the [`PageRasterizer`] and [`PdfWriter`] seams; this module
//! owns the page geometry, the busy state and the output paths.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pedido_doc::Document;
use thiserror::Error;

/// A4 portrait page, in millimeters.
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Uniform margin around the placed snapshot.
pub const PAGE_MARGIN_MM: f64 = 10.0;
/// Layout width handed to the rasterizer, the CSS-pixel width of A4.
pub const RASTER_WIDTH_PX: u32 = 794;
/// Capture scale for the high-resolution snapshot.
pub const RASTER_SCALE: f64 = 2.0;
/// Fixed output name of the PDF export.
pub const PDF_FILE_NAME: &str = "pedido-de-compra.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    Busy,
    #[error("rasterization failed: {0}")]
    Raster(#[source] anyhow::Error),
    #[error("PDF generation failed: {0}")]
    Pdf(#[source] anyhow::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Export lifecycle, mirrored by the shell's disabled buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
}

/// PNG snapshot of the rendered document.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub png_bytes: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Where the snapshot lands on the page, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Renders a document tree to a PNG snapshot at a fixed layout width.
#[async_trait]
pub trait PageRasterizer: Send + Sync {
    async fn rasterize(
        &self,
        document: &Document,
        width_px: u32,
        scale: f64,
    ) -> anyhow::Result<RasterImage>;
}

/// Produces the single-page PDF from a snapshot and its placement.
#[async_trait]
pub trait PdfWriter: Send + Sync {
    async fn write(
        &self,
        image: &RasterImage,
        placement: PagePlacement,
        path: &Path,
    ) -> anyhow::Result<()>;
}

/// Aspect-preserving placement: full usable width first, shrunk onto
/// the usable height when too tall, horizontally centered, top-aligned
/// at the margin.
pub fn compute_placement(image_width_px: u32, image_height_px: u32) -> PagePlacement {
    let ratio = image_width_px.max(1) as f64 / image_height_px.max(1) as f64;

    let mut width_mm = PAGE_WIDTH_MM - PAGE_MARGIN_MM * 2.0;
    let mut height_mm = width_mm / ratio;

    let usable_height = PAGE_HEIGHT_MM - PAGE_MARGIN_MM * 2.0;
    if height_mm > usable_height {
        height_mm = usable_height;
        width_mm = height_mm * ratio;
    }

    PagePlacement {
        x_mm: (PAGE_WIDTH_MM - width_mm) / 2.0,
        y_mm: PAGE_MARGIN_MM,
        width_mm,
        height_mm,
    }
}

/// `Pedido_<name>_<date>.txt`, empty segments omitted. Whitespace in
/// the client name collapses to underscores; an empty name falls back
/// to "Cliente".
pub fn text_file_name(client_name: &str, date: &str) -> String {
    let name = client_name.split_whitespace().collect::<Vec<_>>().join("_");
    let name = if name.is_empty() {
        "Cliente".to_string()
    } else {
        name
    };

    let mut parts = vec!["Pedido".to_string(), name];
    let date = date.replace('/', "-");
    if !date.is_empty() {
        parts.push(date);
    }
    format!("{}.txt", parts.join("_"))
}

/// Owns export jobs and the one-at-a-time busy state.
pub struct ExportCoordinator {
    state: Mutex<ExportState>,
    export_dir: PathBuf,
    rasterizer: Box<dyn PageRasterizer>,
    writer: Box<dyn PdfWriter>,
}

impl ExportCoordinator {
    pub fn new(
        export_dir: impl Into<PathBuf>,
        rasterizer: Box<dyn PageRasterizer>,
        writer: Box<dyn PdfWriter>,
    ) -> Self {
        Self {
            state: Mutex::new(ExportState::Idle),
            export_dir: export_dir.into(),
            rasterizer,
            writer,
        }
    }

    pub fn is_busy(&self) -> bool {
        *self.lock_state() == ExportState::Exporting
    }

    fn lock_state(&self) -> MutexGuard<'_, ExportState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn try_begin(&self) -> ExportResult<()> {
        let mut state = self.lock_state();
        if *state == ExportState::Exporting {
            return Err(ExportError::Busy);
        }
        *state = ExportState::Exporting;
        Ok(())
    }

    fn finish(&self) {
        *self.lock_state() = ExportState::Idle;
    }

    /// Render `document` and save it as `pedido-de-compra.pdf` under
    /// the export directory. Rejected with [`ExportError::Busy`] while
    /// another export is in flight; the busy state clears on both
    /// completion and failure.
    pub async fn export_pdf(&self, document: &Document) -> ExportResult<PathBuf> {
        self.try_begin()?;
        let result = self.run_pdf_export(document).await;
        self.finish();

        match &result {
            Ok(path) => tracing::info!(path = %path.display(), "PDF export finished"),
            Err(err) => tracing::error!(error = %err, "PDF export failed"),
        }
        result
    }

    async fn run_pdf_export(&self, document: &Document) -> ExportResult<PathBuf> {
        let image = self
            .rasterizer
            .rasterize(document, RASTER_WIDTH_PX, RASTER_SCALE)
            .await
            .map_err(ExportError::Raster)?;

        let placement = compute_placement(image.width_px, image.height_px);
        let path = self.export_dir.join(PDF_FILE_NAME);
        self.writer
            .write(&image, placement, &path)
            .await
            .map_err(ExportError::Pdf)?;

        Ok(path)
    }

    /// Write the plain-text rendition under the export directory. Not
    /// gated by the busy state.
    pub fn export_text(&self, plain_text: &str, file_name: &str) -> ExportResult<PathBuf> {
        let path = self.export_dir.join(file_name);
        std::fs::write(&path, plain_text)?;
        tracing::info!(path = %path.display(), "text export finished");
        Ok(path)
    }
}
