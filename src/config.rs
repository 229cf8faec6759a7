use crate::cli::Cli;
use crate::error::{Result, SslatestError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub screenshot_dir: String,
    pub count: usize,
    pub rename: bool,
    pub output_path: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screenshot_dir: "~/Pictures/Screenshots".into(),
            count: 1,
            rename: true,
            output_path: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // ホームディレクトリが引けない環境では設定ファイルなしで動く
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| SslatestError::Config("ホームディレクトリが見つかりません".into()))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("sslatest").join("config.json"))
    }

    /// CLI引数で設定を上書きする（CLI > 設定ファイル > デフォルト）
    pub fn merge_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.dir {
            self.screenshot_dir = dir.clone();
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if cli.no_rename {
            self.rename = false;
        }
        if cli.no_output_path {
            self.output_path = false;
        }
    }

    /// 先頭の `~/` をホームディレクトリに展開したパスを返す
    pub fn resolved_dir(&self) -> Result<PathBuf> {
        if let Some(rest) = self.screenshot_dir.strip_prefix("~/") {
            let home = dirs::home_dir().ok_or(SslatestError::HomeDirNotFound)?;
            Ok(home.join(rest))
        } else {
            Ok(PathBuf::from(&self.screenshot_dir))
        }
    }
}
