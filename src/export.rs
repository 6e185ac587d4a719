mod clipboard;
mod error;
mod layout;
mod pdf;
mod text_file;

pub use clipboard::{ClipboardSink, SystemClipboard, copy_to_clipboard};
pub use error::ExportError;
pub use layout::PdfLayout;
pub(crate) use layout::wrap_paragraph;
pub use pdf::{PdfRenderer, PrintPdfRenderer, write_pdf};
pub use text_file::write_text_file;

use std::path::{Path, PathBuf};

const FILE_NAME_SUFFIX: &str = "_vibe_coding_prompt";

/// `{project_name}_vibe_coding_prompt.{extension}` 형식의 파일 이름.
/// 경로 구분자는 `_`로 바꿔서 출력 디렉토리 밖으로 나가지 않게 한다.
pub fn export_file_name(project_name: &str, extension: &str) -> String {
    let sanitized: String = project_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}{}.{}", sanitized, FILE_NAME_SUFFIX, extension)
}

fn prepare_output_path(
    output_dir: &Path,
    project_name: &str,
    extension: &str,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDirectory {
        path: output_dir.display().to_string(),
        source,
    })?;
    Ok(output_dir.join(export_file_name(project_name, extension)))
}
