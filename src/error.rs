use thiserror::Error;

#[derive(Error, Debug)]
pub enum SslatestError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("スクリーンショットディレクトリの ~/ を展開できません: ホームディレクトリが見つかりません")]
    HomeDirNotFound,

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("スクリーンショットディレクトリの読み込みエラー: {0}")]
    DirRead(String),

    #[error("リネームエラー: {0}")]
    Rename(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SslatestError>;
