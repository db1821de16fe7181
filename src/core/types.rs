use crate::core::kernel::request::QueryParams;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Decode an explicit JSON `null` as the type's default.
///
/// `#[serde(default)]` only covers a missing key; the API also sends `null`
/// for ids, timestamps and lists it has no value for.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An amount with its currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

/// Pagination metadata returned alongside list payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub has_next_page: bool,
    pub total: u64,
}

/// Pagination request. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction_desc: Option<bool>,
}

impl Page {
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number: Some(number),
            size: Some(size),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.sort_by = Some(field.into());
        self.sort_direction_desc = Some(descending);
        self
    }

    pub fn fill_params(&self, query: &mut QueryParams) {
        query
            .push_opt("number", self.number)
            .push_opt("size", self.size)
            .push_opt("sort_by", self.sort_by.as_deref());
        if let Some(desc) = self.sort_direction_desc {
            query.push_bool("sort_direction_desc", desc);
        }
    }
}

/// Inclusive date range filter, sent as `from` / `to` in `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBetween {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateBetween {
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn fill_params(&self, query: &mut QueryParams) {
        query
            .push("from", self.from.format("%Y-%m-%d"))
            .push("to", self.to.format("%Y-%m-%d"));
    }
}

/// Recipient's bank details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    pub account_number: String,
    pub account_name: String,
    pub routing_number: String,
    pub swift_code: String,
    pub bank_name: String,
    pub bank_branch: String,
    pub country: String,
    pub city: String,
    pub bank_address: String,
    pub district: String,
    pub postal_code: String,
    #[serde(rename = "isWithinUS")]
    pub is_within_us: String,
}

/// Recipient's personal details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub district: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntermediaryBank {
    pub bank_name: String,
    pub bank_address: String,
    pub reference: String,
    pub swift_code: String,
}

/// A resolved or assigned bank account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDetails {
    pub account_name: String,
    pub account_number: String,
    pub bank_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_fills_only_set_fields() {
        let mut query = QueryParams::new();
        Page::new(2, 50).fill_params(&mut query);
        assert_eq!(query.get("number"), Some("2"));
        assert_eq!(query.get("size"), Some("50"));
        assert_eq!(query.get("sort_by"), None);
        assert_eq!(query.get("sort_direction_desc"), None);

        let mut query = QueryParams::new();
        Page::default()
            .sorted_by("created_at", true)
            .fill_params(&mut query);
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("sort_by"), Some("created_at"));
        assert_eq!(query.get("sort_direction_desc"), Some("true"));
    }

    #[test]
    fn test_date_between_formats_days() {
        let range = DateBetween::new(
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        );
        let mut query = QueryParams::new();
        range.fill_params(&mut query);
        assert_eq!(query.get("from"), Some("2023-01-05"));
        assert_eq!(query.get("to"), Some("2023-12-31"));
    }

    #[test]
    fn test_bank_details_wire_keys() {
        let details = BankDetails {
            account_number: "11094843943".to_string(),
            is_within_us: "true".to_string(),
            ..BankDetails::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["accountNumber"], "11094843943");
        assert_eq!(json["isWithinUS"], "true");
    }

    #[test]
    fn test_page_info_tolerates_missing_fields() {
        let info: PageInfo = serde_json::from_str(r#"{"page":3}"#).unwrap();
        assert_eq!(info.page, 3);
        assert!(!info.has_next_page);
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Nullable {
        #[serde(deserialize_with = "null_as_default")]
        ids: Vec<u32>,
        #[serde(deserialize_with = "null_as_default")]
        page: PageInfo,
    }

    #[test]
    fn test_null_as_default_accepts_null_and_missing() {
        let parsed: Nullable = serde_json::from_str(r#"{"ids":null,"page":null}"#).unwrap();
        assert!(parsed.ids.is_empty());
        assert_eq!(parsed.page, PageInfo::default());

        let parsed: Nullable = serde_json::from_str("{}").unwrap();
        assert!(parsed.ids.is_empty());

        let parsed: Nullable = serde_json::from_str(r#"{"ids":[1,2]}"#).unwrap();
        assert_eq!(parsed.ids, vec![1, 2]);
    }
}
