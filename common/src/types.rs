//! メディアリストの型定義
//!
//! - MediaKind: 写真/動画の区別
//! - MediaItem: 種別とファイル名の組（表示順リストの要素）
//! - KindFilter: 表示フィルタ（すべて/写真/動画）

use serde::{Deserialize, Serialize};

/// JSONリストに格納されたファイル名（大文字小文字・拡張子は未正規化）
pub type MediaName = String;

const PHOTO_ASSET_DIR: &str = "assets/photos";
const VIDEO_ASSET_DIR: &str = "assets/videos";

/// メディア種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    /// アセットの配置ディレクトリ（公開ルートからの相対パス）
    pub fn asset_dir(&self) -> &'static str {
        match self {
            MediaKind::Photo => PHOTO_ASSET_DIR,
            MediaKind::Video => VIDEO_ASSET_DIR,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "photo"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// 表示順リストの1要素
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub name: MediaName,
}

impl MediaItem {
    pub fn new(kind: MediaKind, name: impl Into<MediaName>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn photo(name: impl Into<MediaName>) -> Self {
        Self::new(MediaKind::Photo, name)
    }

    pub fn video(name: impl Into<MediaName>) -> Self {
        Self::new(MediaKind::Video, name)
    }

    /// タイル・ライトボックスで参照するパス
    pub fn asset_path(&self) -> String {
        format!("{}/{}", self.kind.asset_dir(), self.name)
    }

    /// 動画のポスター画像パス（`<拡張子なし>.jpg`）
    ///
    /// 写真には `None` を返す。
    pub fn poster_path(&self) -> Option<String> {
        match self.kind {
            MediaKind::Photo => None,
            MediaKind::Video => {
                let base = match self.name.rfind('.') {
                    Some(pos) if pos > 0 => &self.name[..pos],
                    _ => self.name.as_str(),
                };
                Some(format!("{}/{}.jpg", VIDEO_ASSET_DIR, base))
            }
        }
    }
}

/// 表示フィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Photo,
    Video,
}

impl KindFilter {
    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Photo => kind == MediaKind::Photo,
            KindFilter::Video => kind == MediaKind::Video,
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(KindFilter::All),
            "photo" | "photos" => Ok(KindFilter::Photo),
            "video" | "videos" => Ok(KindFilter::Video),
            _ => Err(format!("Unknown filter: {}. Use all, photo, or video", s)),
        }
    }
}

impl std::fmt::Display for KindFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindFilter::All => write!(f, "all"),
            KindFilter::Photo => write!(f, "photo"),
            KindFilter::Video => write!(f, "video"),
        }
    }
}
