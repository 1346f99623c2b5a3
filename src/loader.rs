//! ファイル名リストの取得
//!
//! 写真・動画のリストを並行に取得し、両方揃うまで待つ。
//! どちらかの取得に失敗しても空リストとして扱い、もう一方の描画は止めない。

use crate::error::{GalleryError, Result};
use photo_gallery_common::{parse_name_list, MediaName};
use std::path::{Path, PathBuf};

/// リストの取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    File(PathBuf),
    Url(String),
}

impl ListSource {
    /// `http://` / `https://` で始まればURL、それ以外はローカルパス
    pub fn parse(value: &str) -> Self {
        let lowered = value.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            ListSource::Url(value.to_string())
        } else {
            ListSource::File(PathBuf::from(value))
        }
    }

    /// 公開ルート配下のリストファイル
    pub fn in_root(root: &Path, file_name: &str) -> Self {
        ListSource::File(root.join(file_name))
    }
}

impl std::fmt::Display for ListSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListSource::File(path) => write!(f, "{}", path.display()),
            ListSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// 取得したままの（未処理の）リスト
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLists {
    pub photos: Vec<MediaName>,
    pub videos: Vec<MediaName>,
}

async fn fetch_text(source: &ListSource, client: &reqwest::Client) -> Result<String> {
    match source {
        ListSource::File(path) => {
            if !path.exists() {
                return Err(GalleryError::FileNotFound(path.display().to_string()));
            }
            Ok(tokio::fs::read_to_string(path).await?)
        }
        ListSource::Url(url) => {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| GalleryError::Fetch(format!("{}: {}", url, e)))?;

            if !response.status().is_success() {
                return Err(GalleryError::Fetch(format!("{}: HTTP {}", url, response.status())));
            }

            response
                .text()
                .await
                .map_err(|e| GalleryError::Fetch(format!("{}: {}", url, e)))
        }
    }
}

/// 1つのリストを厳密に取得する（取得・解析の失敗はエラー）
pub async fn fetch_names(source: &ListSource, client: &reqwest::Client) -> Result<Vec<MediaName>> {
    let text = fetch_text(source, client).await?;
    Ok(parse_name_list(&text)?)
}

/// 1つのリストを取得する（失敗時は空リスト）
pub async fn fetch_names_or_empty(source: &ListSource, client: &reqwest::Client) -> Vec<MediaName> {
    match fetch_names(source, client).await {
        Ok(names) => {
            tracing::debug!(source = %source, count = names.len(), "loaded name list");
            names
        }
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "name list unavailable, using empty list");
            Vec::new()
        }
    }
}

/// 写真・動画のリストを並行に取得する
pub async fn load_lists(photos: &ListSource, videos: &ListSource) -> RawLists {
    let client = reqwest::Client::new();
    let (photos, videos) = tokio::join!(
        fetch_names_or_empty(photos, &client),
        fetch_names_or_empty(videos, &client),
    );
    RawLists { photos, videos }
}
