//! リネーム実行モジュール
//!
//! 選択済みエントリを順に処理し、出力する名前（またはフルパス）を組み立てる。
//! `std::fs::rename` が本ツール唯一の副作用で、途中で失敗した場合でも
//! 実行済みのリネームは巻き戻さない。

use crate::config::Config;
use crate::error::{Result, SslatestError};
use crate::normalizer;
use crate::scanner::ScreenshotEntry;
use std::path::Path;

/// 選択済みエントリを順に処理し、出力文字列のリストを返す
pub fn process_entries(
    dir: &Path,
    entries: &[ScreenshotEntry],
    config: &Config,
) -> Result<Vec<String>> {
    let mut outputs = Vec::with_capacity(entries.len());

    for entry in entries {
        outputs.push(process_entry(dir, entry, config)?);
    }

    Ok(outputs)
}

/// 1エントリを処理する
///
/// - リネーム無効、正規化済み、または日付セグメントなし: 現在の名前を出力
/// - それ以外: 正規化した名前へリネームしてから出力
fn process_entry(dir: &Path, entry: &ScreenshotEntry, config: &Config) -> Result<String> {
    let name = &entry.file_name;

    if !config.rename || normalizer::is_already_renamed(name) {
        return Ok(render(dir, name, config.output_path));
    }

    let new_name = match normalizer::normalized_name(name) {
        Some(new_name) => new_name,
        // 日付セグメントのないファイル名はリネームせずそのまま出力
        None => return Ok(render(dir, name, config.output_path)),
    };

    let from = dir.join(name);
    let to = dir.join(&new_name);
    std::fs::rename(&from, &to).map_err(|err| {
        SslatestError::Rename(format!(
            "{} → {}: {}",
            from.display(),
            to.display(),
            err
        ))
    })?;

    Ok(render(dir, &new_name, config.output_path))
}

fn render(dir: &Path, name: &str, output_path: bool) -> String {
    if output_path {
        dir.join(name).display().to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_name_only() {
        assert_eq!(render(Path::new("/shots"), "a.png", false), "a.png");
    }

    #[test]
    fn test_render_full_path() {
        let rendered = render(Path::new("/shots"), "a.png", true);
        assert_eq!(PathBuf::from(rendered), PathBuf::from("/shots/a.png"));
    }
}
