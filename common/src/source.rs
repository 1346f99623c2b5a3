//! ファイル名リスト（photos.json / videos.json）の読み取り
//!
//! 上流のJSONは信頼しない。配列でないもの・壊れたものは空リストに落とし、
//! 呼び出し側には決してエラーを返さない（`*_or_empty` / `names_from_value`）。

use crate::error::{Error, Result};
use crate::types::MediaName;
use serde_json::Value;

/// JSONテキストをファイル名リストとして厳密に解釈する
///
/// - 不正なJSON → `Error::Json`
/// - 配列以外 → `Error::SourceUnavailable`
///
/// 配列中の文字列以外の要素は読み飛ばす。
pub fn parse_name_list(text: &str) -> Result<Vec<MediaName>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(entries) => Ok(collect_names(entries)),
        other => Err(Error::SourceUnavailable(format!(
            "expected a JSON array of file names, got {}",
            json_type_name(&other)
        ))),
    }
}

/// JSONテキストをファイル名リストとして解釈する（失敗時は空）
pub fn parse_name_list_or_empty(text: &str) -> Vec<MediaName> {
    match parse_name_list(text) {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!(error = %e, "name list unavailable, using empty list");
            Vec::new()
        }
    }
}

/// 解析済みJSON値からファイル名リストを取り出す（配列以外は空）
pub fn names_from_value(value: &Value) -> Vec<MediaName> {
    match value {
        Value::Array(entries) => collect_names(entries.iter().cloned()),
        other => {
            tracing::warn!(found = json_type_name(other), "name list is not an array");
            Vec::new()
        }
    }
}

fn collect_names(entries: impl IntoIterator<Item = Value>) -> Vec<MediaName> {
    let mut skipped = 0usize;
    let names: Vec<MediaName> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(name),
            _ => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(skipped, "ignored non-string entries in name list");
    }
    names
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
