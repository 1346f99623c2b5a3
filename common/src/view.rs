//! 表示層とのインターフェース
//!
//! 表示順リストの組み立ては表示状態に触れない。タイル描画・ライトボックス・
//! フィルタの反映は `GalleryView` を実装したアダプタが担当し、
//! `Gallery` は現在のリスト・フィルタ選択・ライトボックスの開閉だけを保持する。

use crate::processor::MediaListProcessor;
use crate::types::{KindFilter, MediaItem, MediaKind};
use rand::Rng;

/// 表示層ポート
pub trait GalleryView {
    /// 全タイルを描画し直す（既存タイルは破棄）
    fn render_tiles(&mut self, items: &[MediaItem]);

    /// ライトボックスを開く
    fn show_lightbox(&mut self, src: &str, kind: MediaKind);

    /// ライトボックスを閉じる（再生中の動画は停止）
    fn hide_lightbox(&mut self);

    /// 種別フィルタを反映する
    fn set_filter(&mut self, filter: KindFilter);
}

/// ギャラリーの状態とアダプタ
#[derive(Debug)]
pub struct Gallery<V: GalleryView> {
    view: V,
    processor: MediaListProcessor,
    items: Vec<MediaItem>,
    filter: KindFilter,
    /// 開いているアイテムの `items` 上の位置
    lightbox: Option<usize>,
}

impl<V: GalleryView> Gallery<V> {
    pub fn new(view: V, processor: MediaListProcessor) -> Self {
        Self {
            view,
            processor,
            items: Vec::new(),
            filter: KindFilter::All,
            lightbox: None,
        }
    }

    /// リストを組み立て直して描画する
    ///
    /// シャッフル操作もここを通り、パイプライン全体を再実行する。
    /// 開いているライトボックスは閉じ、現在のフィルタを再適用する。
    pub fn render<P, Q, R>(&mut self, photos_raw: &[P], videos_raw: &[Q], do_shuffle: bool, rng: &mut R)
    where
        P: AsRef<str>,
        Q: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.close();
        self.items = self.processor.build(photos_raw, videos_raw, do_shuffle, rng);
        self.view.render_tiles(&self.items);
        self.view.set_filter(self.filter);

        tracing::debug!(tiles = self.items.len(), "gallery rendered");
    }

    pub fn set_filter(&mut self, filter: KindFilter) {
        self.filter = filter;
        self.view.set_filter(filter);
    }

    pub fn filter(&self) -> KindFilter {
        self.filter
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// フィルタに一致するアイテム
    pub fn visible(&self) -> impl Iterator<Item = &MediaItem> + '_ {
        self.items.iter().filter(move |item| self.filter.matches(item.kind))
    }

    /// 表示中 `index` 番目のアイテムをライトボックスで開く
    ///
    /// 範囲外なら何もしない。
    pub fn open(&mut self, index: usize) -> Option<&MediaItem> {
        let filter = self.filter;
        let position = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item.kind))
            .nth(index)
            .map(|(position, _)| position)?;

        let item = &self.items[position];
        self.view.show_lightbox(&item.asset_path(), item.kind);
        self.lightbox = Some(position);
        Some(item)
    }

    /// ライトボックスを閉じる（閉じていれば何もしない）
    pub fn close(&mut self) {
        if self.lightbox.take().is_some() {
            self.view.hide_lightbox();
        }
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// ライトボックスで表示中のアイテム
    pub fn lightbox_item(&self) -> Option<&MediaItem> {
        self.lightbox.map(|position| &self.items[position])
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
