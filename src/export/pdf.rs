use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use super::error::ExportError;
use super::layout::{PageGeometry, PdfLayout, layout_document};
use super::prepare_output_path;

const PDF_TITLE: &str = "VIBE CODING Prompt";

pub trait PdfRenderer {
    fn render(&self, layout: &PdfLayout) -> Result<Vec<u8>, ExportError>;
}

/// printpdf로 레이아웃을 PDF 바이트열로 만든다.
/// 글꼴 파일을 지정하지 않으면 내장 Helvetica를 쓰므로 일본어 글리프는 표시되지 않는다.
pub struct PrintPdfRenderer {
    font_path: Option<PathBuf>,
}

impl PrintPdfRenderer {
    pub fn new(font_path: Option<PathBuf>) -> Self {
        Self { font_path }
    }

    fn load_font(&self, doc: &PdfDocumentReference) -> Result<IndirectFontRef, ExportError> {
        let font = match &self.font_path {
            Some(path) => {
                let file = File::open(path).map_err(|err| ExportError::Pdf {
                    message: format!("{}: {}", path.display(), err),
                })?;
                doc.add_external_font(BufReader::new(file))
            }
            None => doc.add_builtin_font(BuiltinFont::Helvetica),
        };
        font.map_err(pdf_error)
    }
}

impl PdfRenderer for PrintPdfRenderer {
    fn render(&self, layout: &PdfLayout) -> Result<Vec<u8>, ExportError> {
        let geometry = &layout.geometry;
        let width = Mm(geometry.page_width_mm);
        let height = Mm(geometry.page_height_mm);

        let (doc, first_page, first_layer) =
            PdfDocument::new(layout.title.as_str(), width, height, "Page 1");
        let font = self.load_font(&doc)?;

        let mut targets = vec![(first_page, first_layer)];
        for number in 2..=layout.pages.len() {
            targets.push(doc.add_page(width, height, format!("Page {}", number)));
        }

        for (index, ((page, layer), lines)) in targets.into_iter().zip(&layout.pages).enumerate() {
            let layer = doc.get_page(page).get_layer(layer);

            if index == 0 {
                layer.use_text(
                    layout.title.as_str(),
                    geometry.title_font_size_pt,
                    Mm(layout.title_x_mm),
                    Mm(geometry.page_height_mm - layout.title_y_mm),
                    &font,
                );
            }

            for line in lines.iter().filter(|line| !line.text.is_empty()) {
                layer.use_text(
                    line.text.as_str(),
                    geometry.body_font_size_pt,
                    Mm(geometry.margin_mm),
                    Mm(geometry.page_height_mm - line.y_mm),
                    &font,
                );
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

fn pdf_error(err: printpdf::Error) -> ExportError {
    ExportError::Pdf {
        message: err.to_string(),
    }
}

/// 문서를 A4 레이아웃으로 배치해 `{project_name}_vibe_coding_prompt.pdf`로 저장한다.
/// 렌더링이 실패하면 파일을 만들지 않는다.
pub fn write_pdf(
    renderer: &dyn PdfRenderer,
    output_dir: &Path,
    project_name: &str,
    document: &str,
) -> Result<PathBuf, ExportError> {
    let layout = layout_document(PDF_TITLE, document, &PageGeometry::a4());

    let bytes = renderer.render(&layout).inspect_err(|err| {
        tracing::error!(error = %err, "PDF rendering failed");
    })?;

    let path = prepare_output_path(output_dir, project_name, "pdf")?;
    fs::write(&path, &bytes).map_err(|source| ExportError::WriteFile {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        pages = layout.pages.len(),
        lines = layout.line_count(),
        "PDF export written"
    );
    Ok(path)
}
