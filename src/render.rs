//! 端末出力アダプタ
//!
//! `GalleryView` を端末向けに実装する。タイルとフィルタ・ライトボックスの
//! 状態を保持し、`write_to` でまとめて出力する。

use photo_gallery_common::{GalleryView, KindFilter, MediaItem, MediaKind};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

/// JSON出力の形（`lightbox` は閉じていれば `null`）
#[derive(Serialize)]
struct JsonOutput<'a> {
    filter: KindFilter,
    items: Vec<&'a MediaItem>,
    lightbox: Option<JsonLightbox<'a>>,
}

#[derive(Serialize)]
struct JsonLightbox<'a> {
    kind: MediaKind,
    src: &'a str,
    download: &'a str,
}

#[derive(Debug, Default)]
pub struct TerminalView {
    mode: OutputMode,
    tiles: Vec<MediaItem>,
    filter: KindFilter,
    lightbox: Option<(String, MediaKind)>,
}

impl TerminalView {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    fn visible(&self) -> Vec<&MediaItem> {
        self.tiles
            .iter()
            .filter(|item| self.filter.matches(item.kind))
            .collect()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let visible = self.visible();

        match self.mode {
            OutputMode::Json => {
                let output = JsonOutput {
                    filter: self.filter,
                    items: visible,
                    lightbox: self.lightbox.as_ref().map(|(src, kind)| JsonLightbox {
                        kind: *kind,
                        src,
                        download: src,
                    }),
                };
                serde_json::to_writer_pretty(&mut *out, &output)?;
                writeln!(out)?;
            }
            OutputMode::Text => {
                for (index, item) in visible.iter().enumerate() {
                    writeln!(out, "{}", format_tile(index, item))?;
                }
                writeln!(
                    out,
                    "表示: {}件 / 全{}件 (フィルタ: {})",
                    visible.len(),
                    self.tiles.len(),
                    self.filter
                )?;
                if let Some((src, kind)) = &self.lightbox {
                    writeln!(out, "▶ ライトボックス [{}] {}", kind, src)?;
                    writeln!(out, "  ダウンロード: {}", src)?;
                }
            }
        }

        Ok(())
    }
}

/// タイル1行分の表示
pub fn format_tile(index: usize, item: &MediaItem) -> String {
    let mut line = format!("{:>4}  [{}] {}  {}", index, item.kind, item.name, item.asset_path());
    if let Some(poster) = item.poster_path() {
        line.push_str(&format!("  (poster: {})", poster));
    }
    line
}

impl GalleryView for TerminalView {
    fn render_tiles(&mut self, items: &[MediaItem]) {
        self.tiles = items.to_vec();
    }

    fn show_lightbox(&mut self, src: &str, kind: MediaKind) {
        self.lightbox = Some((src.to_string(), kind));
    }

    fn hide_lightbox(&mut self) {
        self.lightbox = None;
    }

    fn set_filter(&mut self, filter: KindFilter) {
        self.filter = filter;
    }
}
