//! Catalog record types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Status value that keeps a record out of the catalog.
pub const DRAFT_STATUS: &str = "draft";

/// Layouts accepted for a full date-time, tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Layouts accepted for a calendar date.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// A record date as it appeared in the source document.
///
/// The raw text is always kept. The parsed value is `None` when the text is
/// empty or does not match any accepted layout; sorting and display fall back
/// to the raw text in that case.
///
/// Sorting uses the UTC instant. Display uses the calendar day as written, so
/// `2024-01-01T00:30:00+05:00` shows as January 1st.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
pub struct RecordDate {
    raw: String,
    parsed: Option<NaiveDateTime>,
    calendar: Option<NaiveDate>,
}

impl RecordDate {
    /// Parses a date string.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (parsed, calendar) = parse_datetime(raw.trim()).unzip();
        Self {
            raw,
            parsed,
            calendar,
        }
    }

    /// Returns the text as it appeared in the source.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed timestamp, if the text was a recognised date.
    #[must_use]
    pub const fn parsed(&self) -> Option<NaiveDateTime> {
        self.parsed
    }

    /// Returns the calendar day in the source's own offset.
    #[must_use]
    pub const fn calendar_date(&self) -> Option<NaiveDate> {
        self.calendar
    }

    /// Returns true if the source text was a recognised date.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// Returns true if the source had no date at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl From<RecordDate> for String {
    fn from(date: RecordDate) -> Self {
        date.raw
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Returns the UTC instant and the calendar day as written.
fn parse_datetime(text: &str) -> Option<(NaiveDateTime, NaiveDate)> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some((dt.naive_utc(), dt.date_naive()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some((dt, dt.date()));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| (dt, date));
        }
    }
    // Year-month only ("2024-06") means the first of the month.
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0).map(|dt| (dt, date)))
}

/// A catalog item.
///
/// Built from loosely typed JSON: every field that is missing or has the
/// wrong type is replaced by its empty value, so one bad field never rejects
/// the record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Record {
    /// Optional stable identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title.
    pub title: String,
    /// Collection (category) name.
    pub collection: String,
    /// Blockchain (chain) name.
    pub blockchain: String,
    /// Tags in source order, without duplicates.
    pub tags: Vec<String>,
    /// Publication date.
    pub date: RecordDate,
    /// Publication status (`published`, `draft`, ...).
    pub status: String,
    /// One-line description shown on the card.
    pub description_short: String,
    /// Long description, searched but not shown on the card.
    pub description_full: String,
    /// Image reference.
    pub image: String,
    /// Associated document reference (PDF).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    /// Marketplace link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensea_url: Option<String>,
}

impl Record {
    /// Creates a record with a title and every other field empty.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builds a record from a JSON object.
    ///
    /// Returns `None` if the value is not an object.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            id: optional_string(map, "id"),
            title: string_field(map, "title"),
            collection: string_field(map, "collection"),
            blockchain: string_field(map, "blockchain"),
            tags: tags_field(map),
            date: RecordDate::parse(string_field(map, "date")),
            status: string_field(map, "status"),
            description_short: string_field(map, "description_short"),
            description_full: string_field(map, "description_full"),
            image: string_field(map, "image"),
            pdf: optional_string(map, "pdf"),
            opensea_url: optional_string(map, "opensea_url"),
        })
    }

    /// Returns true if the record is a draft and must stay out of the catalog.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.status == DRAFT_STATUS
    }

    /// Returns true if the record carries the given tag (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Sets the collection.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the blockchain.
    #[must_use]
    pub fn with_blockchain(mut self, blockchain: impl Into<String>) -> Self {
        self.blockchain = blockchain.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = dedupe(tags.into_iter().map(Into::into));
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = RecordDate::parse(date);
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn optional_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn tags_field(map: &Map<String, Value>) -> Vec<String> {
    let Some(tags) = map.get("tags").and_then(Value::as_array) else {
        return Vec::new();
    };
    dedupe(tags.iter().filter_map(Value::as_str).map(str::to_string))
}

fn dedupe(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_record() {
        let value = json!({
            "id": "mvox-001",
            "title": "Voix du Nord",
            "collection": "M-Vox",
            "blockchain": "Ethereum",
            "tags": ["rare", "gen1"],
            "date": "2024-03-15",
            "status": "published",
            "description_short": "Short",
            "description_full": "Full text",
            "image": "img/vox.png",
            "pdf": "docs/vox.pdf",
            "opensea_url": "https://opensea.io/assets/1"
        });

        let record = Record::from_value(&value).unwrap();
        assert_eq!(record.id.as_deref(), Some("mvox-001"));
        assert_eq!(record.title, "Voix du Nord");
        assert_eq!(record.tags, vec!["rare", "gen1"]);
        assert!(record.date.is_valid());
        assert_eq!(record.pdf.as_deref(), Some("docs/vox.pdf"));
        assert!(!record.is_draft());
    }

    #[test]
    fn test_from_value_tolerates_bad_fields() {
        let value = json!({
            "title": 42,
            "tags": "rare",
            "date": null,
            "pdf": ""
        });

        let record = Record::from_value(&value).unwrap();
        assert_eq!(record.title, "");
        assert!(record.tags.is_empty());
        assert!(record.date.is_empty());
        assert!(record.pdf.is_none());
    }

    #[test]
    fn test_from_value_skips_non_string_tags() {
        let value = json!({"tags": ["a", 1, null, "b", "a"]});
        let record = Record::from_value(&value).unwrap();
        assert_eq!(record.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(Record::from_value(&json!("title")).is_none());
        assert!(Record::from_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_draft_status_is_case_sensitive() {
        assert!(Record::new("a").with_status("draft").is_draft());
        assert!(!Record::new("a").with_status("Draft").is_draft());
        assert!(!Record::new("a").with_status("published").is_draft());
    }

    #[test]
    fn test_date_layouts() {
        let date = RecordDate::parse("2024-01-01");
        assert_eq!(
            date.parsed(),
            NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );

        assert!(RecordDate::parse("2024-01-01T10:30:00Z").is_valid());
        assert!(RecordDate::parse("2024-01-01T10:30:00").is_valid());
        assert!(RecordDate::parse("2024/01/01").is_valid());
        assert!(RecordDate::parse("2024-06").is_valid());
        assert!(RecordDate::parse(" 2024-01-01 ").is_valid());
    }

    #[test]
    fn test_offset_date_keeps_written_day() {
        let date = RecordDate::parse("2024-01-01T00:30:00+05:00");
        assert_eq!(date.calendar_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(
            date.parsed(),
            NaiveDate::from_ymd_opt(2023, 12, 31).and_then(|d| d.and_hms_opt(19, 30, 0))
        );
    }

    #[test]
    fn test_invalid_date_keeps_raw_text() {
        let date = RecordDate::parse("bientôt");
        assert!(!date.is_valid());
        assert!(!date.is_empty());
        assert_eq!(date.raw(), "bientôt");
        assert_eq!(date.to_string(), "bientôt");
    }

    #[test]
    fn test_date_serializes_as_raw_text() {
        let record = Record::new("a").with_date("2024-02-30");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-02-30");
    }
}
