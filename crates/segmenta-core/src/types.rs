//! Collaborator JSON shapes produced by the upstream analytics backend.
//!
//! The gateway relays these bodies verbatim without parsing them; the typed
//! dashboard client deserializes them on the consuming side. Field names
//! follow the upstream wire format, which mixes camelCase (KPIs) and
//! snake_case (segment summaries).

use serde::{Deserialize, Serialize};

/// Headline dashboard KPIs, one object per `/api/kpis` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_clientes: u64,
    pub ticket_medio: f64,
    pub taxa_retencao: f64,
    #[serde(rename = "previsao7dias")]
    pub previsao_7dias: f64,
}

/// Segment identifier as the upstream emits it: a numeric cluster id or a
/// human label, depending on which pipeline produced the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentId {
    Number(i64),
    Label(String),
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentId::Number(n) => write!(f, "{n}"),
            SegmentId::Label(s) => f.write_str(s),
        }
    }
}

/// One row of `/api/segments/summary`: a customer cluster with its size and
/// mean order value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummaryRow {
    pub segmento: SegmentId,
    pub tamanho_grupo: u64,
    pub ticket_medio: f64,
}

/// One point of `/api/sales/trend`: monthly actuals plus the rolling
/// forecast and target series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTrendPoint {
    /// Month/year label, e.g. `Jan/25`.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub vendas: f64,
    pub previsao: f64,
    pub meta: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clientes: Option<u64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
