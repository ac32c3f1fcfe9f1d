//! Analyzer cost report ingestion.
//!
//! Reads the analyzer's JSON cost report into [`CostEntry`] values: drops
//! constructor-equivalent procedures, takes the human-readable polynomial,
//! and derives parameter types and a stable id from the procedure id.

use serde::Deserialize;

use costlens_core::config::ReportConfig;
use costlens_core::errors::ReportError;

use super::types::{CostEntry, CostFacet, SourceLocation, TraceStep};

#[derive(Debug, Deserialize)]
struct RawRecord {
    procedure_name: String,
    #[serde(default)]
    procedure_id: Option<String>,
    loc: RawLocation,
    exec_cost: RawFacet,
    #[serde(default)]
    alloc_cost: Option<RawFacet>,
    #[serde(default)]
    trace: Vec<RawTraceStep>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    file: String,
    #[serde(default)]
    lnum: i64,
}

#[derive(Debug, Deserialize)]
struct RawFacet {
    #[serde(default)]
    polynomial: Option<String>,
    #[serde(default)]
    degree: Option<u32>,
    #[serde(default)]
    hum: Option<RawHum>,
}

#[derive(Debug, Deserialize)]
struct RawHum {
    #[serde(default)]
    hum_polynomial: Option<String>,
    #[serde(default)]
    hum_degree: Option<String>,
    #[serde(default)]
    big_o: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTraceStep {
    #[serde(default)]
    level: u32,
    filename: String,
    line_number: i64,
    description: String,
}

/// A parsed cost report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostReport {
    pub entries: Vec<CostEntry>,
    /// Records dropped as constructor-equivalent.
    pub excluded: usize,
}

impl CostReport {
    /// Parse a JSON array of analyzer cost records.
    pub fn from_json(json: &str, config: &ReportConfig) -> Result<Self, ReportError> {
        let records: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| ReportError::InvalidJson(e.to_string()))?;

        let mut report = CostReport::default();
        for (index, value) in records.into_iter().enumerate() {
            let raw: RawRecord =
                serde_json::from_value(value).map_err(|e| ReportError::MalformedRecord {
                    index,
                    message: e.to_string(),
                })?;
            if config.is_excluded(&raw.procedure_name) {
                report.excluded += 1;
                continue;
            }
            report.entries.push(convert(raw));
        }

        tracing::debug!(
            entries = report.entries.len(),
            excluded = report.excluded,
            "cost report parsed"
        );
        Ok(report)
    }

    pub fn into_entries(self) -> Vec<CostEntry> {
        self.entries
    }
}

fn convert(raw: RawRecord) -> CostEntry {
    let parameter_types = raw
        .procedure_id
        .as_deref()
        .map(parameter_types_from_procedure_id)
        .unwrap_or_default();
    let id = match raw.procedure_id.as_deref() {
        Some(pid) if !pid.trim().is_empty() => pid.to_string(),
        _ => CostEntry::structural_id(&raw.loc.file, &raw.procedure_name, &parameter_types),
    };
    let trace = if raw.trace.is_empty() {
        None
    } else {
        Some(
            raw.trace
                .into_iter()
                .map(|step| TraceStep {
                    level: step.level,
                    file: step.filename,
                    line: clamp_line(step.line_number),
                    description: step.description,
                })
                .collect(),
        )
    };

    CostEntry {
        id,
        method_name: raw.procedure_name,
        parameter_types,
        loc: SourceLocation {
            file: raw.loc.file,
            line: clamp_line(raw.loc.lnum),
        },
        alloc_cost: raw.alloc_cost.map(convert_facet).unwrap_or_default(),
        exec_cost: convert_facet(raw.exec_cost),
        timestamp: None,
        change_cause_methods: None,
        trace,
    }
}

fn convert_facet(raw: RawFacet) -> CostFacet {
    let hum = raw.hum;
    let polynomial = hum
        .as_ref()
        .and_then(|h| h.hum_polynomial.clone())
        .or(raw.polynomial)
        .map(|p| normalize_polynomial(&p))
        .unwrap_or_default();
    let degree = raw.degree.or_else(|| {
        hum.as_ref()
            .and_then(|h| h.hum_degree.as_deref())
            .and_then(|d| d.trim().parse().ok())
    });
    let big_o = hum
        .and_then(|h| h.big_o)
        .unwrap_or_else(|| big_o_for(degree));

    CostFacet {
        polynomial,
        degree,
        big_o,
    }
}

/// Rewrite the analyzer's multiplication signs (`⋅`, `×`, `·`) as `*`.
pub fn normalize_polynomial(polynomial: &str) -> String {
    polynomial
        .chars()
        .map(|c| match c {
            '\u{22C5}' | '\u{00D7}' | '\u{00B7}' => '*',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn big_o_for(degree: Option<u32>) -> String {
    match degree {
        Some(0) => "O(1)".to_string(),
        Some(1) => "O(n)".to_string(),
        Some(d) => format!("O(n^{d})"),
        None => "Top".to_string(),
    }
}

/// `Foo.bar(int,java.util.Map$Entry):void` ⇒ `["int", "Entry"]`.
pub fn parameter_types_from_procedure_id(procedure_id: &str) -> Vec<String> {
    let Some(open) = procedure_id.find('(') else {
        return Vec::new();
    };
    let Some(close) = procedure_id[open..].find(')') else {
        return Vec::new();
    };
    procedure_id[open + 1..open + close]
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            let simple = t.rsplit('.').next().unwrap_or(t);
            simple.rsplit('$').next().unwrap_or(simple).to_string()
        })
        .collect()
}

fn clamp_line(line: i64) -> u32 {
    line.clamp(0, u32::MAX as i64) as u32
}
