use std::path::{Path, PathBuf};

use thiserror::Error;

const DEFAULT_LOG_FILE_NAME: &str = "vibe-prompt.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("現在のディレクトリを取得できません: {0}")]
    CurrentDirectory(#[source] std::io::Error),

    #[error("出力先がディレクトリではありません: {0}")]
    OutputDirNotDirectory(String),

    #[error("PDFフォントファイルが見つかりません: {0}")]
    FontNotFound(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    output_dir: PathBuf,
    log_file: PathBuf,
    pdf_font: Option<PathBuf>,
}

impl Config {
    /// 상대 경로는 현재 디렉토리 기준으로 해석한다.
    pub fn new(
        output_dir: Option<PathBuf>,
        log_file: Option<PathBuf>,
        pdf_font: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir().map_err(ConfigError::CurrentDirectory)?;
        Self::resolve(&current_dir, output_dir, log_file, pdf_font)
    }

    fn resolve(
        base_dir: &Path,
        output_dir: Option<PathBuf>,
        log_file: Option<PathBuf>,
        pdf_font: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let output_dir = match output_dir {
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        };
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(ConfigError::OutputDirNotDirectory(
                output_dir.display().to_string(),
            ));
        }

        let log_file = match log_file {
            Some(path) => base_dir.join(path),
            None => output_dir.join(DEFAULT_LOG_FILE_NAME),
        };

        let pdf_font = match pdf_font {
            Some(path) => {
                let path = base_dir.join(path);
                if !path.is_file() {
                    return Err(ConfigError::FontNotFound(path.display().to_string()));
                }
                Some(path)
            }
            None => None,
        };

        Ok(Self {
            output_dir,
            log_file,
            pdf_font,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    pub fn pdf_font(&self) -> Option<&Path> {
        self.pdf_font.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_base_dir() {
        let tmp = TempDir::new().unwrap();
        let config = Config::resolve(tmp.path(), None, None, None).unwrap();

        assert_eq!(config.output_dir(), tmp.path());
        assert_eq!(config.log_file(), tmp.path().join("vibe-prompt.log"));
        assert!(config.pdf_font().is_none());
    }

    #[test]
    fn relative_paths_resolve_against_base_dir() {
        let tmp = TempDir::new().unwrap();
        let config = Config::resolve(
            tmp.path(),
            Some(PathBuf::from("out")),
            Some(PathBuf::from("logs/app.log")),
            None,
        )
        .unwrap();

        assert_eq!(config.output_dir(), tmp.path().join("out"));
        assert_eq!(config.log_file(), tmp.path().join("logs/app.log"));
    }

    #[test]
    fn rejects_output_dir_that_is_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("out"), "x").unwrap();

        let result = Config::resolve(tmp.path(), Some(PathBuf::from("out")), None, None);
        assert!(matches!(result, Err(ConfigError::OutputDirNotDirectory(_))));
    }

    #[test]
    fn rejects_missing_font() {
        let tmp = TempDir::new().unwrap();
        let result = Config::resolve(tmp.path(), None, None, Some(PathBuf::from("no.ttf")));
        assert!(matches!(result, Err(ConfigError::FontNotFound(_))));
    }

    #[test]
    fn accepts_existing_font() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("font.ttf"), "fake").unwrap();

        let config =
            Config::resolve(tmp.path(), None, None, Some(PathBuf::from("font.ttf"))).unwrap();
        assert_eq!(config.pdf_font(), Some(tmp.path().join("font.ttf").as_path()));
    }
}
