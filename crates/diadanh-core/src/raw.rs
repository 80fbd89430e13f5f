// crates/diadanh-core/src/raw.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Raw ward entry as it comes from the source JSON.
///
/// Field names follow the published dataset headers, including the trailing
/// space in `"Mã phường/xã mới "`. Unknown columns are ignored. Every column
/// is optional here; validation happens in [`crate::model::convert`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlaceRaw {
    #[serde(rename = "Tên tỉnh/TP mới", default, deserialize_with = "lenient_string")]
    pub province_new: Option<String>,
    #[serde(rename = "Tên tỉnh/TP cũ", default, deserialize_with = "lenient_string")]
    pub province_old: Option<String>,
    #[serde(rename = "Tên Quận huyện TMS (cũ)", default, deserialize_with = "lenient_string")]
    pub district_old: Option<String>,
    #[serde(rename = "Tên Quận huyện TMS (mới)", default, deserialize_with = "lenient_string")]
    pub district_new: Option<String>,
    #[serde(rename = "Tên Phường/Xã mới", default, deserialize_with = "lenient_string")]
    pub ward_new: Option<String>,
    #[serde(rename = "Tên Phường/Xã cũ", default, deserialize_with = "lenient_string")]
    pub ward_old: Option<String>,
    #[serde(rename = "Mã phường/xã mới ", default, deserialize_with = "lenient_string")]
    pub ward_code_new: Option<String>,
    #[serde(rename = "Mã phường/xã cũ", default, deserialize_with = "lenient_string")]
    pub ward_code_old: Option<String>,
    #[serde(rename = "Mã Quận huyện TMS (cũ)", default, deserialize_with = "lenient_string")]
    pub district_code_old: Option<String>,
}

pub type PlacesRaw = Vec<PlaceRaw>;

/// Accepts a string, a number or null. Spreadsheet exports routinely turn
/// code columns into numbers.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(_) => None,
    })
}
