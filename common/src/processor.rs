//! メディアリスト処理（MediaListProcessor）
//!
//! 写真・動画の生ファイル名リストから表示順リストを組み立てる。
//!
//! ## 処理フロー
//! 1. 写真・動画それぞれを取得順のまま重複除去
//! 2. （任意）それぞれを独立にシャッフル
//! 3. 動画が末尾に固まらないよう交互配置
//!
//! I/Oは一切行わない。乱数源は呼び出し側から注入する。

use crate::normalize::normalized_key;
use crate::types::{MediaItem, MediaName};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 交互配置の方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterleavePolicy {
    /// 写真 `ratio` 枚ごとに動画1本（デフォルト）
    #[default]
    Balanced,
    /// 写真1枚・動画1本を交互に
    RoundRobin,
}

impl std::str::FromStr for InterleavePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" | "ratio" => Ok(InterleavePolicy::Balanced),
            "round-robin" | "roundrobin" | "plain" => Ok(InterleavePolicy::RoundRobin),
            _ => Err(format!(
                "Unknown interleave policy: {}. Use balanced or round-robin",
                s
            )),
        }
    }
}

impl std::fmt::Display for InterleavePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterleavePolicy::Balanced => write!(f, "balanced"),
            InterleavePolicy::RoundRobin => write!(f, "round-robin"),
        }
    }
}

/// 重複除去で落とされた1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    /// 比較に使った正規化キー
    pub key: String,
    /// 残った（最初に出現した）ファイル名
    pub kept: MediaName,
    /// 落とされたファイル名
    pub dropped: MediaName,
}

/// 正規化キーで重複を除去する
///
/// 最初に出現したものを残し、入力順を保つ。
pub fn dedupe<S: AsRef<str>>(names: &[S]) -> Vec<MediaName> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| seen.insert(normalized_key(name)))
        .map(str::to_string)
        .collect()
}

/// 重複除去で落とされる名前とその代表を列挙する
pub fn duplicate_report<S: AsRef<str>>(names: &[S]) -> Vec<DuplicateEntry> {
    let mut kept_by_key: HashMap<String, &str> = HashMap::new();
    let mut report = Vec::new();

    for name in names.iter().map(|name| name.as_ref()) {
        let key = normalized_key(name);
        match kept_by_key.get(&key) {
            Some(kept) => report.push(DuplicateEntry {
                key,
                kept: kept.to_string(),
                dropped: name.to_string(),
            }),
            None => {
                kept_by_key.insert(key, name);
            }
        }
    }

    report
}

/// Fisher–Yates シャッフル（インプレース）
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// 写真何枚ごとに動画を1本挟むか
///
/// `max(1, round(写真数 / max(1, 動画数)))`（0.5は切り上げ）
fn balance_ratio(photos: usize, videos: usize) -> usize {
    let videos = videos.max(1);
    ((2 * photos + videos) / (2 * videos)).max(1)
}

/// 比率バランス方式で交互配置する
///
/// 写真を最大 `ratio` 枚、続けて動画を1本、を両方尽きるまで繰り返す。
/// 種別ごとの順序は入力のまま保たれる。
pub fn interleave(photos: Vec<MediaName>, videos: Vec<MediaName>) -> Vec<MediaItem> {
    let ratio = balance_ratio(photos.len(), videos.len());
    let mut items = Vec::with_capacity(photos.len() + videos.len());
    let mut photos = photos.into_iter();
    let mut videos = videos.into_iter();

    loop {
        let before = items.len();
        items.extend(photos.by_ref().take(ratio).map(MediaItem::photo));
        items.extend(videos.next().map(MediaItem::video));
        if items.len() == before {
            break;
        }
    }

    items
}

/// 1枚ずつ交互に配置する
pub fn interleave_round_robin(photos: Vec<MediaName>, videos: Vec<MediaName>) -> Vec<MediaItem> {
    let mut items = Vec::with_capacity(photos.len() + videos.len());
    let mut photos = photos.into_iter();
    let mut videos = videos.into_iter();

    loop {
        let photo = photos.next();
        let video = videos.next();
        if photo.is_none() && video.is_none() {
            break;
        }
        items.extend(photo.map(MediaItem::photo));
        items.extend(video.map(MediaItem::video));
    }

    items
}

/// 表示順リストの組み立て
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaListProcessor {
    policy: InterleavePolicy,
}

impl MediaListProcessor {
    pub fn new(policy: InterleavePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> InterleavePolicy {
        self.policy
    }

    /// 生リストから表示順リストを作る
    ///
    /// 重複除去は常に取得順で行うため、シャッフルはどの重複が残るかに影響しない。
    /// `do_shuffle = false` なら同じ入力に対して常に同じ結果を返す。
    pub fn build<P, V, R>(
        &self,
        photos_raw: &[P],
        videos_raw: &[V],
        do_shuffle: bool,
        rng: &mut R,
    ) -> Vec<MediaItem>
    where
        P: AsRef<str>,
        V: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut photos = dedupe(photos_raw);
        let mut videos = dedupe(videos_raw);

        if do_shuffle {
            shuffle(&mut photos, rng);
            shuffle(&mut videos, rng);
        }

        tracing::debug!(
            photos = photos.len(),
            videos = videos.len(),
            policy = %self.policy,
            shuffled = do_shuffle,
            "built presentation list"
        );

        match self.policy {
            InterleavePolicy::Balanced => interleave(photos, videos),
            InterleavePolicy::RoundRobin => interleave_round_robin(photos, videos),
        }
    }
}

/// 比率バランス方式で表示順リストを作る
pub fn build_presentation_list<P, V, R>(
    photos_raw: &[P],
    videos_raw: &[V],
    do_shuffle: bool,
    rng: &mut R,
) -> Vec<MediaItem>
where
    P: AsRef<str>,
    V: AsRef<str>,
    R: Rng + ?Sized,
{
    MediaListProcessor::default().build(photos_raw, videos_raw, do_shuffle, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(list: &[&str]) -> Vec<MediaName> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_first_occurrence_wins() {
        let result = dedupe(&["IMG_1.JPG", "img_1.jpg", "IMG_2.JPG"]);
        assert_eq!(result, names(&["IMG_1.JPG", "IMG_2.JPG"]));
    }

    #[test]
    fn test_dedupe_copy_suffix() {
        let result = dedupe(&["photo.jpg", "photo copy.jpg", "photo copy 2.jpg"]);
        assert_eq!(result, names(&["photo.jpg"]));
    }

    #[test]
    fn test_dedupe_keeps_copy_marker_only_names() {
        let result = dedupe(&["(copy).jpg", "(copy 2).png", "copy.jpg", "copy 2.jpg"]);
        assert_eq!(result, names(&["(copy).jpg", "(copy 2).png", "copy.jpg", "copy 2.jpg"]));
    }

    #[test]
    fn test_dedupe_whitespace_variants() {
        let result = dedupe(&[" a  b.png", "A B.PNG", "a b.heic", "c"]);
        assert_eq!(result, names(&[" a  b.png", "c"]));
    }

    #[test]
    fn test_dedupe_empty() {
        let empty: [&str; 0] = [];
        assert!(dedupe(&empty).is_empty());
    }

    #[test]
    fn test_dedupe_idempotent() {
        let input = ["x.jpg", "X.JPG", "y copy.png", "y.png", "z", " z "];
        let once = dedupe(&input);
        let twice = dedupe(&once);
        assert_eq!(once, twice);
        assert_eq!(once, names(&["x.jpg", "y copy.png", "z"]));
    }

    #[test]
    fn test_duplicate_report() {
        let report = duplicate_report(&["a.jpg", "b.jpg", "A copy.JPG", "b.jpeg"]);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].kept, "a.jpg");
        assert_eq!(report[0].dropped, "A copy.JPG");
        assert_eq!(report[0].key, "a");
        assert_eq!(report[1].kept, "b.jpg");
        assert_eq!(report[1].dropped, "b.jpeg");
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let original: Vec<u32> = (0..50).collect();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_shuffle_small_lists_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec!["x"];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec!["x"]);
    }

    #[test]
    fn test_shuffle_reaches_all_permutations() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

        for _ in 0..6000 {
            let mut items = vec![0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }

        // 3! = 6 通りがほぼ均等に出る
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "偏りが大きい: {:?}", counts);
        }
    }

    #[test]
    fn test_balance_ratio() {
        assert_eq!(balance_ratio(3, 1), 3);
        assert_eq!(balance_ratio(10, 4), 3); // 2.5 → 3
        assert_eq!(balance_ratio(9, 4), 2); // 2.25 → 2
        assert_eq!(balance_ratio(1, 5), 1);
        assert_eq!(balance_ratio(0, 0), 1);
        assert_eq!(balance_ratio(4, 0), 4);
    }

    #[test]
    fn test_interleave_balanced() {
        let result = interleave(names(&["p1", "p2", "p3"]), names(&["v1"]));
        assert_eq!(
            result,
            vec![
                MediaItem::photo("p1"),
                MediaItem::photo("p2"),
                MediaItem::photo("p3"),
                MediaItem::video("v1"),
            ]
        );
    }

    #[test]
    fn test_interleave_balanced_spreads_videos() {
        let photos = names(&["p1", "p2", "p3", "p4", "p5", "p6"]);
        let videos = names(&["v1", "v2", "v3"]);
        let kinds: Vec<MediaKind> = interleave(photos, videos).iter().map(|i| i.kind).collect();
        use MediaKind::{Photo as P, Video as V};
        assert_eq!(kinds, vec![P, P, V, P, P, V, P, P, V]);
    }

    #[test]
    fn test_interleave_more_videos_than_photos() {
        let result = interleave(names(&["p1"]), names(&["v1", "v2", "v3"]));
        assert_eq!(
            result,
            vec![
                MediaItem::photo("p1"),
                MediaItem::video("v1"),
                MediaItem::video("v2"),
                MediaItem::video("v3"),
            ]
        );
    }

    #[test]
    fn test_interleave_round_robin() {
        let result = interleave_round_robin(names(&["p1", "p2", "p3"]), names(&["v1"]));
        assert_eq!(
            result,
            vec![
                MediaItem::photo("p1"),
                MediaItem::video("v1"),
                MediaItem::photo("p2"),
                MediaItem::photo("p3"),
            ]
        );
    }

    #[test]
    fn test_interleave_one_side_empty() {
        let expected = vec![MediaItem::video("v1"), MediaItem::video("v2")];
        assert_eq!(interleave(vec![], names(&["v1", "v2"])), expected);
        assert_eq!(interleave_round_robin(vec![], names(&["v1", "v2"])), expected);

        let photos_only = interleave(names(&["p1", "p2"]), vec![]);
        assert_eq!(photos_only, vec![MediaItem::photo("p1"), MediaItem::photo("p2")]);
        assert!(interleave(vec![], vec![]).is_empty());
    }

    #[test]
    fn test_build_without_shuffle_is_deterministic() {
        let photos = ["b.jpg", "a.jpg", "B.JPG", "c copy.png", "c.png"];
        let videos = ["x.mp4", "x.MOV"];
        let mut rng = StdRng::seed_from_u64(3);

        let first = build_presentation_list(&photos, &videos, false, &mut rng);
        let second = build_presentation_list(&photos, &videos, false, &mut rng);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                MediaItem::photo("b.jpg"),
                MediaItem::photo("a.jpg"),
                MediaItem::photo("c copy.png"),
                MediaItem::video("x.mp4"),
            ]
        );
    }

    #[test]
    fn test_build_with_shuffle_keeps_survivors() {
        let photos: Vec<String> = (0..20).map(|i| format!("p{}.jpg", i)).collect();
        let mut photos_with_dupes = photos.clone();
        photos_with_dupes.push("P3.JPG".to_string());
        let videos = ["v1.mp4", "v2.mov", "V1.MP4"];
        let mut rng = StdRng::seed_from_u64(99);

        let result = build_presentation_list(&photos_with_dupes, &videos, true, &mut rng);
        assert_eq!(result.len(), dedupe(&photos_with_dupes).len() + dedupe(&videos).len());

        // シャッフルしても残る重複代表は変わらない
        let mut shuffled_photos: Vec<String> = result
            .iter()
            .filter(|i| i.kind == MediaKind::Photo)
            .map(|i| i.name.clone())
            .collect();
        shuffled_photos.sort();
        let mut expected = photos.clone();
        expected.sort();
        assert_eq!(shuffled_photos, expected);
        assert!(result.contains(&MediaItem::video("v1.mp4")));
        assert!(!result.contains(&MediaItem::video("V1.MP4")));
    }

    #[test]
    fn test_processor_policy() {
        let mut rng = StdRng::seed_from_u64(0);
        let processor = MediaListProcessor::new(InterleavePolicy::RoundRobin);
        assert_eq!(processor.policy(), InterleavePolicy::RoundRobin);

        let result = processor.build(&["p1", "p2"], &["v1", "v2"], false, &mut rng);
        let kinds: Vec<MediaKind> = result.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![MediaKind::Photo, MediaKind::Video, MediaKind::Photo, MediaKind::Video]
        );
    }

    #[test]
    fn test_interleave_policy_parse_and_display() {
        assert_eq!("Balanced".parse::<InterleavePolicy>(), Ok(InterleavePolicy::Balanced));
        assert_eq!("round-robin".parse::<InterleavePolicy>(), Ok(InterleavePolicy::RoundRobin));
        assert_eq!("plain".parse::<InterleavePolicy>(), Ok(InterleavePolicy::RoundRobin));
        assert!("videos-first".parse::<InterleavePolicy>().is_err());
        assert_eq!(InterleavePolicy::RoundRobin.to_string(), "round-robin");

        let json = serde_json::to_string(&InterleavePolicy::RoundRobin).unwrap();
        assert_eq!(json, r#""round-robin""#);
    }
}
