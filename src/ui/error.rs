use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("端末の入出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),
}
