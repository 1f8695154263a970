//! Filter store — committed/draft filter state driving the dashboard views.
//!
//! The store holds two copies of a [`FilterConfig`]: the *committed* copy
//! drives displayed data, the *draft* copy is bound to the form controls.
//! Form edits go through [`FilterStore::update_draft`] and only become
//! visible to data consumers on [`FilterStore::apply_draft`].
//!
//! The store is a plain owned struct with one writer; construct one per
//! session (or per test) and pass it by reference. Derived views
//! ([`FilterStore::active_filters`], [`FilterStore::is_filtered`],
//! [`FilterStore::has_unapplied_changes`]) are recomputed on every call and
//! never cached.

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Field enumerations
// ---------------------------------------------------------------------------

/// Forecast window selectable in the period filter.
///
/// Wire values (`7dias`, …) match what the dashboard select controls submit
/// and what the labels render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastWindow {
    Days7,
    Days15,
    Days30,
    Days90,
}

impl ForecastWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastWindow::Days7 => "7dias",
            ForecastWindow::Days15 => "15dias",
            ForecastWindow::Days30 => "30dias",
            ForecastWindow::Days90 => "90dias",
        }
    }
}

impl std::fmt::Display for ForecastWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Retention tier selectable in the segmentation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetentionTier {
    High,
    Medium,
    Low,
}

impl RetentionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetentionTier::High => "alta",
            RetentionTier::Medium => "media",
            RetentionTier::Low => "baixa",
        }
    }
}

impl std::fmt::Display for RetentionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FilterConfig
// ---------------------------------------------------------------------------

pub const DEFAULT_MIN_PROBABILITY: u8 = 70;
pub const DEFAULT_MIN_TICKET: u32 = 1_000;
pub const DEFAULT_MAX_TICKET: u32 = 10_000;

/// One complete set of dashboard filter selections.
///
/// Field declaration order is load-bearing: [`FilterStore::active_filters`]
/// emits labels in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Substring match on route origin city.
    pub origin: Option<String>,
    /// Substring match on route destination city.
    pub destination: Option<String>,
    /// Customer segment label ("premium", "economicos", …).
    pub segment: Option<String>,
    /// Inclusive lower bound on purchase-probability score, percent.
    pub min_probability: u8,
    /// Inclusive lower bound on estimated order value, BRL.
    pub min_ticket: u32,
    /// Inclusive upper bound on estimated order value, BRL.
    pub max_ticket: u32,
    pub period: Option<ForecastWindow>,
    pub retention: Option<RetentionTier>,
    /// Reserved demand-tier tag; no form control populates it yet.
    pub demand: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// True once the user has applied the draft at least once.
    pub applied: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            segment: None,
            min_probability: DEFAULT_MIN_PROBABILITY,
            min_ticket: DEFAULT_MIN_TICKET,
            max_ticket: DEFAULT_MAX_TICKET,
            period: None,
            retention: None,
            demand: None,
            start_date: None,
            end_date: None,
            applied: false,
        }
    }
}

impl FilterConfig {
    /// Field-by-field equality excluding the `applied` flag.
    fn same_selections(&self, other: &FilterConfig) -> bool {
        let a = Self { applied: false, ..self.clone() };
        let b = Self { applied: false, ..other.clone() };
        a == b
    }
}

// ---------------------------------------------------------------------------
// Typed updates and label kinds
// ---------------------------------------------------------------------------

/// Which filter field an [`ActiveFilter`] or a removal targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Origin,
    Destination,
    Segment,
    MinProbability,
    MinTicket,
    MaxTicket,
    Period,
    Retention,
    Demand,
    StartDate,
    EndDate,
}

/// A single typed mutation of the draft configuration.
///
/// Each variant carries exactly the type its field holds, so a mismatched
/// key/value pair is unrepresentable. `None` (or an empty string) clears an
/// optional field; the numeric variants always carry a value — pass the
/// field's default to reset it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Origin(Option<String>),
    Destination(Option<String>),
    Segment(Option<String>),
    MinProbability(u8),
    MinTicket(u32),
    MaxTicket(u32),
    Period(Option<ForecastWindow>),
    Retention(Option<RetentionTier>),
    Demand(Option<String>),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
}

impl FilterUpdate {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterUpdate::Origin(_) => FilterKind::Origin,
            FilterUpdate::Destination(_) => FilterKind::Destination,
            FilterUpdate::Segment(_) => FilterKind::Segment,
            FilterUpdate::MinProbability(_) => FilterKind::MinProbability,
            FilterUpdate::MinTicket(_) => FilterKind::MinTicket,
            FilterUpdate::MaxTicket(_) => FilterKind::MaxTicket,
            FilterUpdate::Period(_) => FilterKind::Period,
            FilterUpdate::Retention(_) => FilterKind::Retention,
            FilterUpdate::Demand(_) => FilterKind::Demand,
            FilterUpdate::StartDate(_) => FilterKind::StartDate,
            FilterUpdate::EndDate(_) => FilterKind::EndDate,
        }
    }
}

/// One active (non-default) committed filter: the field it lives on plus the
/// rendered badge text. Removal goes through the `kind` tag, never by
/// parsing `label` back apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub kind: FilterKind,
    pub label: String,
}

impl std::fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

// ---------------------------------------------------------------------------
// FilterStore
// ---------------------------------------------------------------------------

/// The committed/draft pair plus its operations. See the module docs for the
/// lifecycle.
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    committed: FilterConfig,
    draft: FilterConfig,
}

impl FilterStore {
    /// A fresh store: committed and draft both equal to the defaults, not
    /// yet applied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed(&self) -> &FilterConfig {
        &self.committed
    }

    pub fn draft(&self) -> &FilterConfig {
        &self.draft
    }

    /// Set a single draft field. Infallible; does not touch the committed
    /// copy or the `applied` flag.
    pub fn update_draft(&mut self, update: FilterUpdate) {
        tracing::debug!(update = ?update, "filters: draft update");
        match update {
            FilterUpdate::Origin(v) => self.draft.origin = non_empty(v),
            FilterUpdate::Destination(v) => self.draft.destination = non_empty(v),
            FilterUpdate::Segment(v) => self.draft.segment = non_empty(v),
            FilterUpdate::MinProbability(v) => self.draft.min_probability = v,
            FilterUpdate::MinTicket(v) => self.draft.min_ticket = v,
            FilterUpdate::MaxTicket(v) => self.draft.max_ticket = v,
            FilterUpdate::Period(v) => self.draft.period = v,
            FilterUpdate::Retention(v) => self.draft.retention = v,
            FilterUpdate::Demand(v) => self.draft.demand = non_empty(v),
            FilterUpdate::StartDate(v) => self.draft.start_date = v,
            FilterUpdate::EndDate(v) => self.draft.end_date = v,
        }
    }

    /// Copy the draft onto the committed configuration and mark both
    /// applied. Idempotent: a second call with no intervening draft edit is
    /// a no-op.
    pub fn apply_draft(&mut self) {
        self.draft.applied = true;
        self.committed = self.draft.clone();
        tracing::debug!(committed = ?self.committed, "filters: draft applied");
    }

    /// Reset both configurations to the defaults, marked applied.
    pub fn clear_all(&mut self) {
        let cleared = FilterConfig { applied: true, ..FilterConfig::default() };
        self.draft = cleared.clone();
        self.committed = cleared;
        tracing::debug!("filters: cleared");
    }

    /// Reset one draft field to its default and immediately apply, as when
    /// the user dismisses a filter badge. Removing a kind that is already at
    /// its default still applies the draft (matching badge-dismiss
    /// behavior: any pending draft edits land too).
    pub fn remove_filter(&mut self, kind: FilterKind) {
        tracing::debug!(kind = ?kind, "filters: remove");
        let update = match kind {
            FilterKind::Origin => FilterUpdate::Origin(None),
            FilterKind::Destination => FilterUpdate::Destination(None),
            FilterKind::Segment => FilterUpdate::Segment(None),
            FilterKind::MinProbability => FilterUpdate::MinProbability(DEFAULT_MIN_PROBABILITY),
            FilterKind::MinTicket => FilterUpdate::MinTicket(DEFAULT_MIN_TICKET),
            FilterKind::MaxTicket => FilterUpdate::MaxTicket(DEFAULT_MAX_TICKET),
            FilterKind::Period => FilterUpdate::Period(None),
            FilterKind::Retention => FilterUpdate::Retention(None),
            FilterKind::Demand => FilterUpdate::Demand(None),
            FilterKind::StartDate => FilterUpdate::StartDate(None),
            FilterKind::EndDate => FilterUpdate::EndDate(None),
        };
        self.update_draft(update);
        self.apply_draft();
    }

    /// Badge labels for every committed field that differs from its
    /// default, in field declaration order.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let c = &self.committed;
        let mut active = Vec::new();

        let mut push = |kind: FilterKind, label: String| {
            active.push(ActiveFilter { kind, label });
        };

        if let Some(v) = &c.origin {
            push(FilterKind::Origin, format!("Origem: {v}"));
        }
        if let Some(v) = &c.destination {
            push(FilterKind::Destination, format!("Destino: {v}"));
        }
        if let Some(v) = &c.segment {
            push(FilterKind::Segment, format!("Segmento: {v}"));
        }
        if c.min_probability != DEFAULT_MIN_PROBABILITY {
            push(
                FilterKind::MinProbability,
                format!("Probabilidade: ≥{}%", c.min_probability),
            );
        }
        if c.min_ticket != DEFAULT_MIN_TICKET {
            push(
                FilterKind::MinTicket,
                format!("Ticket Min: ≥R$ {}", group_thousands(c.min_ticket)),
            );
        }
        if c.max_ticket != DEFAULT_MAX_TICKET {
            push(
                FilterKind::MaxTicket,
                format!("Ticket Max: ≤R$ {}", group_thousands(c.max_ticket)),
            );
        }
        if let Some(v) = &c.period {
            push(FilterKind::Period, format!("Período: {v}"));
        }
        if let Some(v) = &c.retention {
            push(FilterKind::Retention, format!("Retenção: {v}"));
        }
        if let Some(v) = &c.demand {
            push(FilterKind::Demand, format!("Demanda: {v}"));
        }
        if let Some(v) = &c.start_date {
            push(FilterKind::StartDate, format!("Data Início: {v}"));
        }
        if let Some(v) = &c.end_date {
            push(FilterKind::EndDate, format!("Data Fim: {v}"));
        }

        active
    }

    /// True iff at least one committed field is non-default.
    pub fn is_filtered(&self) -> bool {
        !self.active_filters().is_empty()
    }

    /// True iff the draft differs from the committed configuration,
    /// ignoring the `applied` flag.
    pub fn has_unapplied_changes(&self) -> bool {
        !self.draft.same_selections(&self.committed)
    }

    /// True when the committed ticket bounds are inverted and therefore
    /// match nothing. The store accepts such ranges; warning is the form
    /// layer's job.
    pub fn ticket_range_is_empty(&self) -> bool {
        self.committed.min_ticket > self.committed.max_ticket
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Empty strings count as "no selection", matching the form controls which
/// submit `""` for the all/none choice.
fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

/// pt-BR thousands grouping: 1500 → "1.500".
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
