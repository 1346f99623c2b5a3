//! アセットスキャン
//!
//! 写真・動画ディレクトリの直下を走査し、ブラウザ側が読み込む
//! `photos.json` / `videos.json` を生成する。

use crate::config::Config;
use crate::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const PHOTOS_JSON: &str = "photos.json";
pub const VIDEOS_JSON: &str = "videos.json";

/// スキャン結果（ファイル名のみ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetLists {
    pub photos: Vec<String>,
    pub videos: Vec<String>,
}

/// 拡張子が許可リストに含まれるか（大文字小文字は区別しない）
fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext)))
}

/// ディレクトリ直下のファイル名を拡張子で絞り込んで列挙する
pub fn scan_dir(folder: &Path, extensions: &[String]) -> Result<Vec<String>> {
    if !folder.is_dir() {
        return Err(GalleryError::FolderNotFound(folder.display().to_string()));
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if has_allowed_extension(path, extensions) {
            if let Some(name) = path.file_name() {
                names.push(name.to_string_lossy().to_string());
            }
        }
    }

    // ファイル名でソート
    names.sort();
    tracing::debug!(folder = %folder.display(), count = names.len(), "scanned asset folder");

    Ok(names)
}

/// 写真・動画ディレクトリをスキャンする
pub fn scan_assets(photos_dir: &Path, videos_dir: &Path, config: &Config) -> Result<AssetLists> {
    Ok(AssetLists {
        photos: scan_dir(photos_dir, &config.photo_extensions)?,
        videos: scan_dir(videos_dir, &config.video_extensions)?,
    })
}

/// `photos.json` / `videos.json` を書き出す
///
/// 書き出したファイルのパスを (写真, 動画) の順で返す。
pub fn write_lists(output_dir: &Path, lists: &AssetLists) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output_dir)?;

    let photos_path = output_dir.join(PHOTOS_JSON);
    let videos_path = output_dir.join(VIDEOS_JSON);
    std::fs::write(&photos_path, serde_json::to_string_pretty(&lists.photos)?)?;
    std::fs::write(&videos_path, serde_json::to_string_pretty(&lists.videos)?)?;

    Ok((photos_path, videos_path))
}
