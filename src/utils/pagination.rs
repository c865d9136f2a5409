use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

/// Query-string numbers arrive as strings; anything non-numeric (including
/// the empty string) falls back to the absent-parameter default.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.parse::<i64>().ok()))
}

/// Offset pagination over a listing: `skip = (page - 1) * limit`.
///
/// `page` is clamped to at least 1 so the skip can never go negative, and a
/// present `limit` is clamped to at least 1. An absent `limit` means the
/// listing is unbounded.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl ListParams {
    pub fn limit(&self) -> Option<i64> {
        self.limit.map(|l| l.max(1))
    }

    pub fn skip(&self) -> u64 {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit().unwrap_or(0);
        ((page - 1) * limit) as u64
    }
}
