//! Schema reconciliation: loosely-typed parsed rows in, strongly-typed
//! canonical records out.
//!
//! All "unknown schema" tolerance lives here — header aliasing, survey-code
//! translation, and numeric coercion. Aggregation never sees a raw row.

pub mod codes;
pub mod columns;

pub use columns::ColumnMap;

use crate::parser::ParsedTable;
use tracing::debug;

/// One of the six environmental-impact measures, in canonical field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Ghgs,
    LandUse,
    WaterScarcity,
    Eutrophication,
    Acidification,
    Biodiversity,
}

impl Indicator {
    pub const COUNT: usize = 6;

    pub const ALL: [Indicator; Indicator::COUNT] = [
        Indicator::Ghgs,
        Indicator::LandUse,
        Indicator::WaterScarcity,
        Indicator::Eutrophication,
        Indicator::Acidification,
        Indicator::Biodiversity,
    ];

    /// Stable snake_case name, matching the output CSV headers.
    pub fn name(self) -> &'static str {
        match self {
            Indicator::Ghgs => "ghgs",
            Indicator::LandUse => "land_use",
            Indicator::WaterScarcity => "water_scarcity",
            Indicator::Eutrophication => "eutrophication",
            Indicator::Acidification => "acidification",
            Indicator::Biodiversity => "biodiversity",
        }
    }
}

/// A coerced numeric cell. `observed` records whether the raw cell held a
/// parseable value: unobserved measures keep the zero-fill for per-record
/// totals but stay out of averaging denominators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub observed: bool,
}

impl Measure {
    pub fn observed(value: f64) -> Self {
        Measure {
            value,
            observed: true,
        }
    }

    pub fn missing() -> Self {
        Measure::default()
    }
}

/// A fully reconciled survey record. Category labels are already
/// translated to display-stable identifiers.
#[derive(Debug, Clone)]
pub struct CanonicalRecord {
    pub diet_group: String,
    pub gender: String,
    pub age_group: String,

    pub ghgs: Measure,
    pub land_use: Measure,
    pub water_scarcity: Measure,
    pub eutrophication: Measure,
    pub acidification: Measure,
    pub biodiversity: Measure,
}

impl CanonicalRecord {
    pub fn measure(&self, indicator: Indicator) -> Measure {
        match indicator {
            Indicator::Ghgs => self.ghgs,
            Indicator::LandUse => self.land_use,
            Indicator::WaterScarcity => self.water_scarcity,
            Indicator::Eutrophication => self.eutrophication,
            Indicator::Acidification => self.acidification,
            Indicator::Biodiversity => self.biodiversity,
        }
    }
}

/// Coerces a raw cell into a [`Measure`].
///
/// Accepts `,` as a decimal separator. Empty, absent, or unparseable input
/// coerces to an unobserved zero.
pub fn coerce_numeric(raw: Option<&str>) -> Measure {
    let Some(raw) = raw else {
        return Measure::missing();
    };

    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Measure::missing();
    }

    match cleaned.parse::<f64>() {
        Ok(value) => Measure::observed(value),
        Err(_) => Measure::missing(),
    }
}

/// Reconciles a parsed table into canonical records.
///
/// Columns are resolved once from the header row. Rows whose canonical
/// diet group comes out empty are dropped; everything else degrades to
/// absent values rather than failing.
pub fn canonicalize(table: &ParsedTable) -> Vec<CanonicalRecord> {
    let columns = ColumnMap::resolve(&table.headers);

    let mut records = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;

    for row in &table.rows {
        let cell = |index: Option<usize>| index.and_then(|i| row.get(i)).map(String::as_str);

        let diet_group = codes::diet_label(cell(columns.diet_group).unwrap_or(""));
        if diet_group.is_empty() {
            dropped += 1;
            continue;
        }

        let measure = |indicator| coerce_numeric(cell(columns.indicator(indicator)));

        records.push(CanonicalRecord {
            diet_group,
            gender: codes::gender_label(cell(columns.gender).unwrap_or("")),
            age_group: codes::age_label(cell(columns.age_group).unwrap_or("")),
            ghgs: measure(Indicator::Ghgs),
            land_use: measure(Indicator::LandUse),
            water_scarcity: measure(Indicator::WaterScarcity),
            eutrophication: measure(Indicator::Eutrophication),
            acidification: measure(Indicator::Acidification),
            biodiversity: measure(Indicator::Biodiversity),
        });
    }

    if dropped > 0 {
        debug!(dropped, kept = records.len(), "Dropped rows without a diet group");
    }

    records
}
