//! Serde helpers for hydrated query results
//!
//! `FETCH` 展开记录链接时，悬空链接会变成 NONE；
//! 这里把数组里的 NONE 元素静默丢弃，保持反序列化稳定。

use serde::{Deserialize, Deserializer};

/// Deserialize a fetched link array, dropping unresolvable (NONE) elements
pub fn fetched_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().flatten().collect())
}
