//! ファイル名の分類と正規化モジュール
//!
//! スクリーンショットのファイル名に対する純粋な判定・変換のみを持つ。
//! ファイルシステムには触れない。
//!
//! ## 判定の種類
//! 1. 画像ファイル判定（拡張子 png/jpg/jpeg）
//! 2. リネーム済み判定（`_YYYY-MM-DD_HH-MM-SS` 形式を含む）
//! 3. 日付セグメントの正規化（空白 → アンダースコア）

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IMAGE_FILENAME_RE: Regex = Regex::new(r"(?i)\.(png|jpe?g)$").unwrap();
    static ref DATE_SEGMENT_RE: Regex = Regex::new(r"\s\d{4}-\d{2}-\d{2}.*").unwrap();
    static ref RENAMED_RE: Regex = Regex::new(r"_\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}").unwrap();
}

/// 画像ファイル名かどうか（拡張子の大文字小文字は無視）
pub fn is_image_filename(file_name: &str) -> bool {
    IMAGE_FILENAME_RE.is_match(file_name)
}

/// すでに正規化済みのファイル名かどうか
pub fn is_already_renamed(file_name: &str) -> bool {
    RENAMED_RE.is_match(file_name)
}

/// 末尾の日付セグメント（` YYYY-MM-DD...`）を取り出し、
/// 空白をアンダースコアに置換した新ファイル名を返す。
///
/// 日付セグメントを含まないファイル名は `None`（リネーム対象外として扱う）。
pub fn normalized_name(file_name: &str) -> Option<String> {
    let segment = DATE_SEGMENT_RE.find(file_name)?.as_str();
    Some(segment.replace(' ', "_"))
}
