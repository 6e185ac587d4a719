use super::error::ExportError;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ExportError>;
}

/// arboard 기반 시스템 클립보드. 핸들은 첫 복사 시점에 연다.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ExportError> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|err| ExportError::Clipboard {
                message: err.to_string(),
            })?,
        };

        let result = clipboard.set_text(text);
        self.clipboard = Some(clipboard);

        result.map_err(|err| ExportError::Clipboard {
            message: err.to_string(),
        })
    }
}

/// 컴파일된 문서를 제목/날짜 없이 그대로 클립보드에 쓴다.
pub fn copy_to_clipboard(
    sink: &mut dyn ClipboardSink,
    document: &str,
) -> Result<(), ExportError> {
    match sink.set_text(document) {
        Ok(()) => {
            tracing::info!(bytes = document.len(), "prompt copied to clipboard");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to copy prompt to clipboard");
            Err(err)
        }
    }
}

#[cfg(test)]
mod fakes {
    use super::*;

    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Option<String>,
        pub fail: bool,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ExportError> {
            if self.fail {
                return Err(ExportError::Clipboard {
                    message: "clipboard unavailable".to_string(),
                });
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::MemoryClipboard;
    use super::*;

    #[test]
    fn copies_document_verbatim() {
        let mut clipboard = MemoryClipboard::default();
        copy_to_clipboard(&mut clipboard, "以下の要件で\n## 機能要件").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("以下の要件で\n## 機能要件"));
    }

    #[test]
    fn failure_is_reported_and_leaves_sink_untouched() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let result = copy_to_clipboard(&mut clipboard, "prompt");
        assert!(matches!(result, Err(ExportError::Clipboard { .. })));
        assert!(clipboard.contents.is_none());
    }
}
