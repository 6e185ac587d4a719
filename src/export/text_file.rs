use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use super::error::ExportError;
use super::prepare_output_path;

const TEXT_TITLE: &str = "VIBE CODING プロンプト";

/// `2026/10/18`처럼 0을 채우지 않는 일본어 로케일 날짜 표기.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

pub fn render_text_export(document: &str, generated_on: NaiveDate) -> String {
    format!(
        "{}\n生成日: {}\n\n{}",
        TEXT_TITLE,
        format_date(generated_on),
        document
    )
}

pub fn write_text_file(
    output_dir: &Path,
    project_name: &str,
    document: &str,
    generated_on: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let path = prepare_output_path(output_dir, project_name, "txt")?;
    let content = render_text_export(document, generated_on);

    fs::write(&path, content.as_bytes()).map_err(|source| ExportError::WriteFile {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "text export written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt;
    use crate::questionnaire::fixtures::demo_questionnaire;
    use tempfile::TempDir;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn date_is_not_zero_padded() {
        assert_eq!(format_date(date(2026, 1, 5)), "2026/1/5");
        assert_eq!(format_date(date(2026, 10, 18)), "2026/10/18");
    }

    #[test]
    fn text_export_prefixes_title_and_date() {
        let content = render_text_export("本文", date(2026, 10, 18));
        assert_eq!(content, "VIBE CODING プロンプト\n生成日: 2026/10/18\n\n本文");
    }

    #[test]
    fn writes_demo_export_byte_for_byte() {
        let tmp = TempDir::new().unwrap();
        let questionnaire = demo_questionnaire();
        let document = prompt::compile(&questionnaire);

        let path = write_text_file(
            tmp.path(),
            &questionnaire.project_name,
            &document,
            date(2026, 10, 18),
        )
        .unwrap();

        assert_eq!(path, tmp.path().join("Demo_vibe_coding_prompt.txt"));
        let written = fs::read(&path).unwrap();
        let expected = format!("VIBE CODING プロンプト\n生成日: 2026/10/18\n\n{}", document);
        assert_eq!(written, expected.as_bytes());
        assert!(!String::from_utf8(written).unwrap().contains("## その他の要望"));
    }

    #[test]
    fn write_fails_when_output_dir_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let result = write_text_file(&blocker, "Demo", "doc", date(2026, 1, 1));
        assert!(matches!(result, Err(ExportError::CreateDirectory { .. })));
    }
}
