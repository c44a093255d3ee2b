//! Parse boundary for untrusted ledger input.
//!
//! AI extraction and form posts deliver loosely typed JSON. Everything
//! passes through here before reaching a validator: numbers must be exact
//! decimals, sides must be DEBIT/CREDIT, identifiers must be strings.
//! Nothing is silently coerced; `"1,000"`, `"1_000"` and `true` are
//! rejected. Amounts must fit a `NUMERIC(18,2)` column exactly.

use std::str::FromStr;

use bunchi_shared::types::money::{has_satang_precision, is_within_amount_range};
use bunchi_shared::types::{ClientId, DocumentId, UserId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::error::ParseError;
use super::types::{EntrySide, GlPostingRequest, JournalLine, PostedGlEntry};

/// Journal line as produced by AI extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJournalLine {
    /// Account code.
    #[serde(default)]
    pub account_code: Value,
    /// `DEBIT` or `CREDIT`.
    #[serde(default)]
    pub account_side: Value,
    /// Line amount.
    #[serde(default)]
    pub amount: Value,
}

/// Posted entry as submitted by a client application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostedEntry {
    /// Posting date.
    #[serde(default)]
    pub date: Value,
    /// Source document number.
    #[serde(default)]
    pub doc_no: Value,
    /// Narrative.
    #[serde(default)]
    pub description: Value,
    /// Account code.
    #[serde(default)]
    pub account_code: Value,
    /// Account name.
    #[serde(default)]
    pub account_name: Value,
    /// Debit amount.
    #[serde(default)]
    pub debit: Value,
    /// Credit amount.
    #[serde(default)]
    pub credit: Value,
    /// Owning client.
    #[serde(default, rename = "clientId")]
    pub client_id: Value,
    /// Accounting period.
    #[serde(default)]
    pub period: Value,
    /// Department code.
    #[serde(default)]
    pub department_code: Value,
}

/// Posting request as submitted by a client application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPostingRequest {
    /// Entries.
    #[serde(default)]
    pub entries: Vec<RawPostedEntry>,
    /// Client key.
    #[serde(default)]
    pub client_id: Value,
    /// Period, `YYYY-MM`.
    #[serde(default)]
    pub period_month: Value,
    /// Optional source document.
    #[serde(default)]
    pub source_doc_id: Value,
    /// Submitting user.
    #[serde(default)]
    pub user_id: Value,
}

/// Parses AI-extracted journal lines.
///
/// # Errors
///
/// Returns the first `ParseError` encountered, naming the line and field.
pub fn parse_journal_lines(raw: &[RawJournalLine]) -> Result<Vec<JournalLine>, ParseError> {
    raw.iter()
        .enumerate()
        .map(|(i, line)| -> Result<JournalLine, ParseError> {
            let path = |field: &str| format!("lines[{i}].{field}");
            Ok(JournalLine {
                account_code: required_string(&line.account_code, path("account_code"))?,
                account_side: parse_side(&line.account_side, path("account_side"))?,
                amount: required_amount(&line.amount, path("amount"))?,
            })
        })
        .collect()
}

/// Parses a single posted entry at position `i`.
///
/// Absent debit/credit are zero. Date must be a string; its format is
/// checked by the posting validator so it can be reported per line.
///
/// # Errors
///
/// Returns `ParseError` if a field has the wrong type or an unreadable amount.
pub fn parse_posted_entry(i: usize, raw: &RawPostedEntry) -> Result<PostedGlEntry, ParseError> {
    let path = |field: &str| format!("entries[{i}].{field}");
    Ok(PostedGlEntry {
        date: required_string(&raw.date, path("date"))?,
        doc_no: required_string(&raw.doc_no, path("doc_no"))?,
        description: optional_string(&raw.description, path("description"))?.unwrap_or_default(),
        account_code: required_string(&raw.account_code, path("account_code"))?,
        account_name: optional_string(&raw.account_name, path("account_name"))?.unwrap_or_default(),
        debit: optional_amount(&raw.debit, path("debit"))?.unwrap_or(Decimal::ZERO),
        credit: optional_amount(&raw.credit, path("credit"))?.unwrap_or(Decimal::ZERO),
        client_id: ClientId::new(required_string(&raw.client_id, path("clientId"))?),
        period: optional_string(&raw.period, path("period"))?,
        department_code: optional_string(&raw.department_code, path("department_code"))?,
    })
}

/// Parses a full posting request.
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse_posting_request(raw: &RawPostingRequest) -> Result<GlPostingRequest, ParseError> {
    let entries = raw
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| parse_posted_entry(i, e))
        .collect::<Result<Vec<_>, _>>()?;

    let period_month = required_string(&raw.period_month, "periodMonth".to_string())?;
    if !is_period_shape(&period_month) {
        return Err(ParseError::InvalidPeriod {
            path: "periodMonth".to_string(),
            value: period_month,
        });
    }

    Ok(GlPostingRequest {
        entries,
        client_id: ClientId::new(required_string(&raw.client_id, "clientId".to_string())?),
        period_month,
        source_doc_id: optional_string(&raw.source_doc_id, "sourceDocId".to_string())?
            .filter(|s| !s.is_empty())
            .map(DocumentId::new),
        user_id: UserId::new(required_string(&raw.user_id, "userId".to_string())?),
    })
}

fn optional_string(value: &Value, path: String) -> Result<Option<String>, ParseError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.trim().to_string())),
        _ => Err(ParseError::WrongType {
            path,
            expected: "a string",
        }),
    }
}

fn required_string(value: &Value, path: String) -> Result<String, ParseError> {
    match value {
        Value::Null => Err(ParseError::MissingField { path }),
        other => optional_string(other, path).map(Option::unwrap_or_default),
    }
}

fn optional_amount(value: &Value, path: String) -> Result<Option<Decimal>, ParseError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => {
            return Err(ParseError::WrongType {
                path,
                expected: "a number or numeric string",
            });
        }
    };

    // rust_decimal skips underscores as digit separators
    if text.contains('_') {
        return Err(ParseError::InvalidAmount { path, value: text });
    }

    let Ok(amount) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) else {
        return Err(ParseError::InvalidAmount { path, value: text });
    };
    if !is_within_amount_range(amount) {
        return Err(ParseError::AmountOutOfRange { path, value: text });
    }
    if !has_satang_precision(amount) {
        return Err(ParseError::AmountTooPrecise { path, value: text });
    }
    Ok(Some(amount))
}

fn required_amount(value: &Value, path: String) -> Result<Decimal, ParseError> {
    match value {
        Value::Null => Err(ParseError::MissingField { path }),
        other => optional_amount(other, path.clone())?.ok_or(ParseError::MissingField { path }),
    }
}

fn parse_side(value: &Value, path: String) -> Result<EntrySide, ParseError> {
    let text = required_string(value, path.clone())?;
    match text.to_ascii_uppercase().as_str() {
        "DEBIT" => Ok(EntrySide::Debit),
        "CREDIT" => Ok(EntrySide::Credit),
        _ => Err(ParseError::InvalidSide { path, value: text }),
    }
}

fn is_period_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn raw_lines(value: Value) -> Vec<RawJournalLine> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_ai_lines() {
        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": 10000 },
            { "account_code": "11400", "account_side": "debit", "amount": "700.00" },
            { "account_code": "11200", "account_side": "Credit", "amount": 10700.5 }
        ]));
        let lines = parse_journal_lines(&raw).unwrap();
        assert_eq!(lines[0].amount, dec!(10000));
        assert_eq!(lines[1].account_side, EntrySide::Debit);
        assert_eq!(lines[1].amount, dec!(700.00));
        assert_eq!(lines[2].account_side, EntrySide::Credit);
        assert_eq!(lines[2].amount, dec!(10700.5));
    }

    #[test]
    fn test_thousands_separator_rejected() {
        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": "1,000" }
        ]));
        assert_eq!(
            parse_journal_lines(&raw).unwrap_err(),
            ParseError::InvalidAmount {
                path: "lines[0].amount".to_string(),
                value: "1,000".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_types_rejected() {
        let raw = raw_lines(json!([
            { "account_code": 52200, "account_side": "DEBIT", "amount": 1 }
        ]));
        assert!(matches!(
            parse_journal_lines(&raw),
            Err(ParseError::WrongType { .. })
        ));

        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": true }
        ]));
        assert!(matches!(
            parse_journal_lines(&raw),
            Err(ParseError::WrongType { .. })
        ));
    }

    #[test]
    fn test_underscore_separator_rejected() {
        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": "1_000" }
        ]));
        assert_eq!(
            parse_journal_lines(&raw).unwrap_err(),
            ParseError::InvalidAmount {
                path: "lines[0].amount".to_string(),
                value: "1_000".to_string()
            }
        );
    }

    #[test]
    fn test_sub_satang_amount_rejected() {
        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": "100.005" }
        ]));
        assert_eq!(
            parse_journal_lines(&raw).unwrap_err(),
            ParseError::AmountTooPrecise {
                path: "lines[0].amount".to_string(),
                value: "100.005".to_string()
            }
        );

        // trailing zeros are not extra precision
        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": "100.010" }
        ]));
        assert_eq!(parse_journal_lines(&raw).unwrap()[0].amount, dec!(100.01));
    }

    fn posting_with_amounts(debits: &[&str], credit: &str) -> RawPostingRequest {
        let mut entries: Vec<Value> = debits
            .iter()
            .map(|d| {
                json!({
                    "date": "2024-03-01", "doc_no": "JV-1", "account_code": "52100",
                    "debit": d, "clientId": "c1"
                })
            })
            .collect();
        entries.push(json!({
            "date": "2024-03-01", "doc_no": "JV-1", "account_code": "11200",
            "credit": credit, "clientId": "c1"
        }));
        serde_json::from_value(json!({
            "entries": entries,
            "clientId": "c1",
            "periodMonth": "2024-03",
            "userId": "u1"
        }))
        .unwrap()
    }

    #[test]
    fn test_posting_request_rejects_sub_satang_debits() {
        let raw = posting_with_amounts(&["100.005", "100.005"], "200.01");
        assert_eq!(
            parse_posting_request(&raw).unwrap_err(),
            ParseError::AmountTooPrecise {
                path: "entries[0].debit".to_string(),
                value: "100.005".to_string()
            }
        );
    }

    #[test]
    fn test_posting_request_amount_range() {
        let raw = posting_with_amounts(&["9999999999999999.99"], "9999999999999999.99");
        let request = parse_posting_request(&raw).unwrap();
        assert_eq!(request.entries[0].debit, dec!(9999999999999999.99));

        let raw = posting_with_amounts(&["10000000000000000"], "1");
        assert_eq!(
            parse_posting_request(&raw).unwrap_err().error_code(),
            "AMOUNT_OUT_OF_RANGE"
        );

        let raw = posting_with_amounts(&["1"], "79228162514264337593543950335");
        assert_eq!(
            parse_posting_request(&raw).unwrap_err(),
            ParseError::AmountOutOfRange {
                path: "entries[1].credit".to_string(),
                value: "79228162514264337593543950335".to_string()
            }
        );
    }

    #[test]
    fn test_scientific_amount_out_of_range() {
        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": 1e20 }
        ]));
        assert!(matches!(
            parse_journal_lines(&raw),
            Err(ParseError::AmountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_missing_and_blank_amount() {
        let raw = raw_lines(json!([{ "account_code": "52200", "account_side": "DEBIT" }]));
        assert_eq!(
            parse_journal_lines(&raw).unwrap_err(),
            ParseError::MissingField {
                path: "lines[0].amount".to_string()
            }
        );

        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DEBIT", "amount": "  " }
        ]));
        assert!(matches!(
            parse_journal_lines(&raw),
            Err(ParseError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_invalid_side() {
        let raw = raw_lines(json!([
            { "account_code": "52200", "account_side": "DR", "amount": 1 }
        ]));
        assert!(matches!(
            parse_journal_lines(&raw),
            Err(ParseError::InvalidSide { .. })
        ));
    }

    #[test]
    fn test_parse_posting_request_defaults() {
        let raw: RawPostingRequest = serde_json::from_value(json!({
            "entries": [
                { "date": "2024-03-01", "doc_no": "RV-1", "account_code": "11200",
                  "debit": "500", "clientId": "c1" },
                { "date": "2024-03-01", "doc_no": "RV-1", "account_code": "41200",
                  "credit": 500, "clientId": "c1" }
            ],
            "clientId": "c1",
            "periodMonth": "2024-03",
            "sourceDocId": "",
            "userId": "u1"
        }))
        .unwrap();

        let request = parse_posting_request(&raw).unwrap();
        assert_eq!(request.entries[0].credit, Decimal::ZERO);
        assert_eq!(request.entries[1].debit, Decimal::ZERO);
        assert_eq!(request.entries[1].credit, dec!(500));
        assert_eq!(request.entries[0].description, "");
        assert_eq!(request.source_doc_id, None);
    }

    #[test]
    fn test_parse_posting_request_rejects_bad_period() {
        let raw: RawPostingRequest = serde_json::from_value(json!({
            "entries": [],
            "clientId": "c1",
            "periodMonth": "03/2024",
            "userId": "u1"
        }))
        .unwrap();
        assert!(matches!(
            parse_posting_request(&raw),
            Err(ParseError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_entry_date_must_be_string() {
        let raw: RawPostedEntry = serde_json::from_value(json!({
            "date": 20240301, "doc_no": "RV-1", "account_code": "11200",
            "debit": 1, "clientId": "c1"
        }))
        .unwrap();
        assert_eq!(
            parse_posted_entry(3, &raw).unwrap_err(),
            ParseError::WrongType {
                path: "entries[3].date".to_string(),
                expected: "a string"
            }
        );
    }
}
