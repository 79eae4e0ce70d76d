use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Sample types
// ============================================================================

/// The three fixed test categories a lab order can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleType {
    Peptide,
    Endotoxin,
    Sterility,
}

impl SampleType {
    pub fn all() -> [SampleType; 3] {
        [
            SampleType::Peptide,
            SampleType::Endotoxin,
            SampleType::Sterility,
        ]
    }

    /// Field key, matches the persisted JSON field name.
    pub fn key(&self) -> &'static str {
        match self {
            SampleType::Peptide => "peptide",
            SampleType::Endotoxin => "endotoxin",
            SampleType::Sterility => "sterility",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SampleType::Peptide => "Peptide",
            SampleType::Endotoxin => "Endotoxin",
            SampleType::Sterility => "Sterility",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            SampleType::Peptide => "PEP",
            SampleType::Endotoxin => "END",
            SampleType::Sterility => "STE",
        }
    }
}

// ============================================================================
// Status
// ============================================================================

/// Derived three-state fulfillment classification. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Complete,
    ReportsDone,
    Pending,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Complete => "Complete",
            OrderStatus::ReportsDone => "Reports Done",
            OrderStatus::Pending => "Pending",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Complete => "status-badge status-badge--complete",
            OrderStatus::ReportsDone => "status-badge status-badge--reports",
            OrderStatus::Pending => "status-badge status-badge--pending",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// One sales order. Field names are camelCase on the wire so the
/// persisted entry keeps the layout described in the storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,

    #[serde(default)]
    pub so: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub peptide: u32,
    #[serde(default)]
    pub endotoxin: u32,
    #[serde(default)]
    pub sterility: u32,

    #[serde(rename = "reportsReady", default)]
    pub reports_ready: bool,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub emailed: bool,

    /// ISO-8601 instant, stamped once at creation.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl OrderRecord {
    /// Total, defined for any record: missing flags deserialize to false.
    pub fn status(&self) -> OrderStatus {
        if self.reports_ready && self.paid && self.emailed {
            OrderStatus::Complete
        } else if self.reports_ready {
            OrderStatus::ReportsDone
        } else {
            OrderStatus::Pending
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == OrderStatus::Complete
    }

    pub fn sample_count(&self, sample: SampleType) -> u32 {
        match sample {
            SampleType::Peptide => self.peptide,
            SampleType::Endotoxin => self.endotoxin,
            SampleType::Sterility => self.sterility,
        }
    }

    /// Field-level in-place update. `id` and `createdAt` are immutable
    /// and have no corresponding edit. A name edit that would blank the
    /// field is dropped, keeping the non-empty invariant from creation.
    pub fn apply(&mut self, edit: OrderEdit) {
        match edit {
            OrderEdit::So(v) => self.so = v,
            OrderEdit::Name(v) => {
                if !v.trim().is_empty() {
                    self.name = v;
                }
            }
            OrderEdit::Company(v) => self.company = v,
            OrderEdit::Count(SampleType::Peptide, v) => self.peptide = v,
            OrderEdit::Count(SampleType::Endotoxin, v) => self.endotoxin = v,
            OrderEdit::Count(SampleType::Sterility, v) => self.sterility = v,
            OrderEdit::ReportsReady(v) => self.reports_ready = v,
            OrderEdit::Paid(v) => self.paid = v,
            OrderEdit::Emailed(v) => self.emailed = v,
        }
    }
}

/// Mutation request for a single editable field.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEdit {
    So(String),
    Name(String),
    Company(String),
    Count(SampleType, u32),
    ReportsReady(bool),
    Paid(bool),
    Emailed(bool),
}

// ============================================================================
// DTO
// ============================================================================

/// New-order form payload. Count fields arrive as raw input text and
/// are coerced on creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub so: String,
    pub name: String,
    pub company: String,
    pub peptide: String,
    pub endotoxin: String,
    pub sterility: String,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.so.trim().is_empty() {
            return Err("Sales order number is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Client name is required".into());
        }
        Ok(())
    }

    /// Stamps the id and creation instant. Callers validate first;
    /// count fields are coerced here regardless.
    pub fn into_record(self) -> OrderRecord {
        OrderRecord {
            id: OrderId::new_v4(),
            so: self.so,
            name: self.name,
            company: self.company,
            peptide: parse_count(&self.peptide),
            endotoxin: parse_count(&self.endotoxin),
            sterility: parse_count(&self.sterility),
            reports_ready: false,
            paid: false,
            emailed: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Coerce raw count input: anything that is not a non-negative integer
/// becomes 0.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OrderRecord {
        OrderRecord {
            id: OrderId::new_v4(),
            so: "SO-2025-001".into(),
            name: "Finnrick Labs".into(),
            company: String::new(),
            peptide: 5,
            endotoxin: 0,
            sterility: 2,
            reports_ready: false,
            paid: false,
            emailed: false,
            created_at: "2025-03-10T12:00:00.000Z".into(),
        }
    }

    #[test]
    fn status_is_complete_iff_all_three_flags() {
        let mut o = record();
        for reports in [false, true] {
            for paid in [false, true] {
                for emailed in [false, true] {
                    o.reports_ready = reports;
                    o.paid = paid;
                    o.emailed = emailed;
                    let status = o.status();
                    assert_eq!(
                        status == OrderStatus::Complete,
                        reports && paid && emailed
                    );
                    if !reports {
                        assert_eq!(status, OrderStatus::Pending);
                    }
                }
            }
        }
    }

    #[test]
    fn reports_without_payment_is_reports_done() {
        let mut o = record();
        o.reports_ready = true;
        assert_eq!(o.status(), OrderStatus::ReportsDone);
    }

    #[test]
    fn draft_requires_so_and_name() {
        let mut draft = OrderDraft {
            so: "SO-1".into(),
            name: "Alice".into(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.name = "   ".into();
        assert!(draft.validate().is_err());

        draft.name = "Alice".into();
        draft.so = String::new();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn draft_coerces_counts_and_stamps_defaults() {
        let draft = OrderDraft {
            so: "SO-1".into(),
            name: "Alice".into(),
            company: "Acme".into(),
            peptide: "5".into(),
            endotoxin: "oops".into(),
            sterility: "".into(),
        };
        let rec = draft.into_record();
        assert_eq!((rec.peptide, rec.endotoxin, rec.sterility), (5, 0, 0));
        assert!(!rec.reports_ready && !rec.paid && !rec.emailed);
        assert_eq!(rec.status(), OrderStatus::Pending);
        assert!(!rec.created_at.is_empty());
    }

    #[test]
    fn apply_edits_fields_but_not_identity() {
        let mut o = record();
        let created = o.created_at.clone();
        o.apply(OrderEdit::Count(SampleType::Endotoxin, 4));
        o.apply(OrderEdit::Paid(true));
        o.apply(OrderEdit::Company("Finnrick".into()));
        assert_eq!(o.endotoxin, 4);
        assert!(o.paid);
        assert_eq!(o.company, "Finnrick");
        assert_eq!(o.created_at, created);
    }

    #[test]
    fn apply_ignores_blank_name() {
        let mut o = record();
        o.apply(OrderEdit::Name("  ".into()));
        assert_eq!(o.name, "Finnrick Labs");
        o.apply(OrderEdit::Name("New Client".into()));
        assert_eq!(o.name, "New Client");
    }

    #[test]
    fn parse_count_coerces_invalid_input_to_zero() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count(" 3 "), 3);
        assert_eq!(parse_count("-2"), 0);
        assert_eq!(parse_count("3.5"), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let o = record();
        let json = serde_json::to_value(&o).unwrap();
        assert!(json.get("reportsReady").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("reports_ready").is_none());
    }

    #[test]
    fn serde_defaults_missing_fields() {
        let raw = format!(
            r#"{{"id":"{}","so":"SO-9","name":"Bob"}}"#,
            Uuid::new_v4()
        );
        let o: OrderRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(o.company, "");
        assert_eq!((o.peptide, o.endotoxin, o.sterility), (0, 0, 0));
        assert_eq!(o.status(), OrderStatus::Pending);
        assert_eq!(o.created_at, "");
    }
}
