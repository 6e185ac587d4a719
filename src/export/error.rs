use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("出力ディレクトリを作成できません: {path} ({source})")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ファイルを書き込めません: {path} ({source})")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("クリップボードへのコピーに失敗しました: {message}")]
    Clipboard { message: String },

    #[error("PDF生成中にエラーが発生しました。テキストダウンロードをご利用ください。({message})")]
    Pdf { message: String },
}
