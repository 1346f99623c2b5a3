//! 重複判定用のファイル名正規化
//!
//! 表示名とは別に、重複検出のためだけに使う比較キーを生成する。
//! 生成したキーは表示にも保存にも使わない。

use regex::Regex;

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    // "photo copy" / "photo copy 2" / "photo (copy)" / "photo (copy 2)"
    static ref COPY_SUFFIX_RE: Regex =
        Regex::new(r"(?i)(?:\s*\(copy(?:\s+\d+)?\)|\s+copy(?:\s+\d+)?)$").unwrap();
    static ref MEDIA_EXT_RE: Regex = Regex::new(r"(?i)\.(?:jpe?g|png|heic|mp4|mov)$").unwrap();
}

/// 重複判定キーを生成する
///
/// 1. 前後の空白を除去して小文字化
/// 2. 連続する空白を1つに畳む
/// 3. 末尾の「copy」「copy N」サフィックスと既知のメディア拡張子を除去
///
/// `photo copy.jpg` と `photo.jpg copy` のどちらの順序でも同じキーになる。
pub fn normalized_key(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let collapsed = WHITESPACE_RE.replace_all(&lowered, " ");

    let without_copy = strip_copy_suffix(&collapsed);
    let without_ext = MEDIA_EXT_RE.replace(without_copy, "");
    let key = strip_copy_suffix(&without_ext);

    key.trim_end().to_string()
}

/// 末尾の copy サフィックスを除去する（名前が空になる場合は除去しない）
fn strip_copy_suffix(name: &str) -> &str {
    match COPY_SUFFIX_RE.find(name) {
        Some(m) if !name[..m.start()].trim_end().is_empty() => &name[..m.start()],
        _ => name,
    }
}

/// 既知のメディア拡張子（jpg/jpeg/png/heic/mp4/mov）で終わるか
pub fn has_media_extension(name: &str) -> bool {
    MEDIA_EXT_RE.is_match(name.trim())
}
