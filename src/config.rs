use crate::error::{GalleryError, Result};
use photo_gallery_common::InterleavePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 交互配置方式を上書きする環境変数
pub const INTERLEAVE_ENV: &str = "PHOTO_GALLERY_INTERLEAVE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 公開ルートからの写真ディレクトリ
    pub photos_subdir: String,
    /// 公開ルートからの動画ディレクトリ
    pub videos_subdir: String,
    pub photo_extensions: Vec<String>,
    pub video_extensions: Vec<String>,
    pub interleave: InterleavePolicy,
    /// `list` で --shuffle 未指定でもシャッフルする
    pub shuffle_on_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photos_subdir: "assets/photos".into(),
            videos_subdir: "assets/videos".into(),
            photo_extensions: vec!["jpg".into(), "jpeg".into(), "png".into(), "heic".into()],
            video_extensions: vec!["mp4".into(), "mov".into()],
            interleave: InterleavePolicy::Balanced,
            shuffle_on_load: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込む（ファイルが無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-gallery").join("config.json"))
    }

    /// 実際に使う交互配置方式
    pub fn effective_interleave(&self) -> Result<InterleavePolicy> {
        // 環境変数を優先
        match std::env::var(INTERLEAVE_ENV) {
            Ok(value) => value
                .parse()
                .map_err(|e: String| GalleryError::Config(format!("{}: {}", INTERLEAVE_ENV, e))),
            Err(_) => Ok(self.interleave),
        }
    }

    pub fn set_interleave(&mut self, policy: InterleavePolicy) -> Result<()> {
        self.interleave = policy;
        self.save()
    }

    pub fn set_shuffle_on_load(&mut self, shuffle: bool) -> Result<()> {
        self.shuffle_on_load = shuffle;
        self.save()
    }
}
