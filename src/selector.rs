//! 最新順の選択
//!
//! スキャン結果を更新時刻の降順に並べ、要求枚数分だけ先頭から切り出す。

use crate::scanner::ScreenshotEntry;

/// 更新時刻が新しい順にソートし、先頭 `requested` 件（丸め後）を返す
///
/// 同時刻のエントリは列挙順を維持する（安定ソート）。
pub fn select_latest(mut entries: Vec<ScreenshotEntry>, requested: usize) -> Vec<ScreenshotEntry> {
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
    entries.truncate(clamp_count(requested, entries.len()));
    entries
}

/// 要求枚数をマッチ件数に合わせて丸める
///
/// マッチ件数以上を要求された場合は「件数 - 1」に切り詰めるため、
/// 最古の1枚は常に除外される。件数0のときは0（空選択）。
/// TODO: 全件要求時に最古の1枚が落ちるのが意図通りか所有者に確認する
pub fn clamp_count(requested: usize, matches: usize) -> usize {
    if requested >= matches {
        matches.saturating_sub(1)
    } else {
        requested
    }
}
