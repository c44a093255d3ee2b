//! Document and match types for duplicate detection.

use bunchi_shared::types::DocumentId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice header fields extracted from a scanned document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    /// Invoice number as printed.
    #[serde(default)]
    pub inv_number: Option<String>,
    /// Invoice date, `YYYY-MM-DD`.
    #[serde(default)]
    pub inv_date: Option<String>,
}

/// The other party on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    /// 13-digit tax ID, possibly formatted.
    #[serde(default)]
    pub tax_id: Option<String>,
    /// Registered name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Parties block of the extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    /// Seller or buyer, depending on document direction.
    #[serde(default)]
    pub counterparty: Option<Counterparty>,
}

/// Money totals of the extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Financials {
    /// Invoice total including VAT.
    #[serde(default)]
    pub grand_total: Option<Decimal>,
}

/// AI extraction attached to a stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiData {
    /// Header fields.
    #[serde(default)]
    pub header_data: Option<HeaderData>,
    /// Parties.
    #[serde(default)]
    pub parties: Option<Parties>,
    /// Totals.
    #[serde(default)]
    pub financials: Option<Financials>,
}

/// A stored source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document key.
    pub id: DocumentId,
    /// Extraction result, absent until the document has been processed.
    #[serde(default)]
    pub ai_data: Option<AiData>,
}

impl DocumentRecord {
    /// Trimmed invoice number, if any.
    #[must_use]
    pub fn inv_number(&self) -> Option<&str> {
        self.ai_data
            .as_ref()?
            .header_data
            .as_ref()?
            .inv_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Counterparty tax ID with formatting stripped, if any.
    #[must_use]
    pub fn counterparty_tax_id(&self) -> Option<String> {
        let raw = self
            .ai_data
            .as_ref()?
            .parties
            .as_ref()?
            .counterparty
            .as_ref()?
            .tax_id
            .as_deref()?;
        normalize_tax_id(raw)
    }

    /// Grand total, if extracted.
    #[must_use]
    pub fn grand_total(&self) -> Option<Decimal> {
        self.ai_data.as_ref()?.financials.as_ref()?.grand_total
    }

    /// Invoice date, if present and well-formed.
    #[must_use]
    pub fn inv_date(&self) -> Option<NaiveDate> {
        let raw = self.ai_data.as_ref()?.header_data.as_ref()?.inv_date.as_deref()?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
    }
}

/// A new invoice to check against stored documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCandidate {
    /// Invoice number.
    #[serde(default)]
    pub inv_number: Option<String>,
    /// Counterparty tax ID.
    #[serde(default)]
    pub counterparty_tax_id: Option<String>,
    /// Grand total.
    pub amount: Decimal,
    /// Invoice date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Skip this stored document (the candidate itself, when re-checking).
    #[serde(default)]
    pub exclude_document_id: Option<DocumentId>,
}

impl InvoiceCandidate {
    pub(crate) fn normalized_inv_number(&self) -> Option<&str> {
        self.inv_number.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub(crate) fn normalized_tax_id(&self) -> Option<String> {
        self.counterparty_tax_id.as_deref().and_then(normalize_tax_id)
    }
}

/// How a duplicate was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// No match.
    None,
    /// Same invoice number and counterparty.
    Exact,
    /// Same counterparty and amount, close dates.
    Fuzzy,
}

/// Outcome of a duplicate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckResult {
    /// True if any match was found.
    pub is_duplicate: bool,
    /// 1.0 for exact, 0.7 for fuzzy, 0 otherwise.
    pub confidence: Decimal,
    /// Which phase produced the matches.
    pub match_type: MatchType,
    /// Matching stored documents.
    pub matches: Vec<DocumentId>,
}

impl DuplicateCheckResult {
    /// Confidence reported for an exact match.
    pub const EXACT_CONFIDENCE: Decimal = Decimal::ONE;
    /// Confidence reported for fuzzy matches.
    pub const FUZZY_CONFIDENCE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

    /// No duplicate.
    #[must_use]
    pub fn none() -> Self {
        Self {
            is_duplicate: false,
            confidence: Decimal::ZERO,
            match_type: MatchType::None,
            matches: Vec::new(),
        }
    }

    /// A single exact match.
    #[must_use]
    pub fn exact(id: DocumentId) -> Self {
        Self {
            is_duplicate: true,
            confidence: Self::EXACT_CONFIDENCE,
            match_type: MatchType::Exact,
            matches: vec![id],
        }
    }

    /// Fuzzy matches; an empty set yields [`DuplicateCheckResult::none`].
    #[must_use]
    pub fn fuzzy(matches: Vec<DocumentId>) -> Self {
        if matches.is_empty() {
            return Self::none();
        }
        Self {
            is_duplicate: true,
            confidence: Self::FUZZY_CONFIDENCE,
            match_type: MatchType::Fuzzy,
            matches,
        }
    }
}

fn normalize_tax_id(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}
