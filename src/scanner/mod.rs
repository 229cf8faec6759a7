use crate::error::{Result, SslatestError};
use crate::normalizer;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// スキャン時点のディレクトリエントリのスナップショット
#[derive(Debug, Clone)]
pub struct ScreenshotEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub modified: SystemTime,
}

/// ディレクトリ直下の画像ファイルを列挙する
///
/// - サブディレクトリは対象外（再帰しない）
/// - メタデータが読めないエントリは読み飛ばす
pub fn scan_dir(dir: &Path) -> Result<Vec<ScreenshotEntry>> {
    if !dir.exists() {
        return Err(SslatestError::FolderNotFound(dir.display().to_string()));
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                // ディレクトリ自体が読めない場合のみ致命的
                if err.path() == Some(dir) {
                    return Err(SslatestError::DirRead(err.to_string()));
                }
                continue;
            }
        };

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if !normalizer::is_image_filename(&file_name) {
            continue;
        }

        let modified = match entry.metadata().ok().and_then(|m| m.modified().ok()) {
            Some(time) => time,
            None => continue,
        };

        entries.push(ScreenshotEntry {
            path: path.to_path_buf(),
            file_name,
            modified,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_scan_dir_not_found() {
        let result = scan_dir(Path::new("/nonexistent/folder"));
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_dir_empty() {
        let temp_dir = std::env::temp_dir().join("sslatest-test-empty");
        fs::create_dir_all(&temp_dir).unwrap();

        let result = scan_dir(&temp_dir).unwrap();
        assert!(result.is_empty());

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_scan_dir_with_images() {
        let temp_dir = std::env::temp_dir().join("sslatest-test-images");
        fs::create_dir_all(&temp_dir).unwrap();

        File::create(temp_dir.join("test1.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("test2.PNG")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("test3.jpeg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("readme.txt")).unwrap().write_all(b"text").unwrap();

        let mut result = scan_dir(&temp_dir).unwrap();
        result.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].file_name, "test1.jpg");
        assert_eq!(result[1].file_name, "test2.PNG");
        assert_eq!(result[2].file_name, "test3.jpeg");

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_scan_dir_skips_subdirectories() {
        let temp_dir = std::env::temp_dir().join("sslatest-test-subdir");
        fs::create_dir_all(temp_dir.join("nested.png")).unwrap();
        File::create(temp_dir.join("real.png")).unwrap();

        let result = scan_dir(&temp_dir).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "real.png");

        fs::remove_dir_all(&temp_dir).ok();
    }
}
