//! Header-to-canonical-field resolution.
//!
//! Source file revisions disagree on header spelling, so each canonical
//! field carries a list of accepted aliases. Matching is case- and
//! whitespace-insensitive and picks the first header in file order.

use crate::reconcile::Indicator;

static DIET_GROUP_ALIASES: &[&str] = &["diet_group", "diet-group", "dietgroup", "diet", "grouping"];
static GENDER_ALIASES: &[&str] = &["sex", "gender"];
static AGE_GROUP_ALIASES: &[&str] = &["age_group", "age-group", "agegroup", "age"];

static INDICATOR_ALIASES: &[(Indicator, &[&str])] = &[
    (Indicator::Ghgs, &["mean_ghgs", "ghgs", "ghg"]),
    (Indicator::LandUse, &["mean_land", "land_use", "land"]),
    (Indicator::WaterScarcity, &["mean_watscar", "water_scarcity", "watscar"]),
    (Indicator::Eutrophication, &["mean_eut", "eutrophication", "eut"]),
    (Indicator::Acidification, &["mean_acid", "acidification", "acid"]),
    (Indicator::Biodiversity, &["mean_bio", "biodiversity", "bio"]),
];

/// Resolved mapping from canonical fields to column indices in the input
/// header row. Unmapped fields stay `None`; extraction then yields absent
/// values rather than an error.
#[derive(Debug, Default)]
pub struct ColumnMap {
    pub diet_group: Option<usize>,
    pub gender: Option<usize>,
    pub age_group: Option<usize>,
    indicators: [Option<usize>; Indicator::COUNT],
}

impl ColumnMap {
    /// Resolves the header row once per load. Later rows are assumed to
    /// share the same schema.
    pub fn resolve(headers: &[String]) -> Self {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.contains(&h.trim().to_lowercase().as_str()))
        };

        let mut indicators = [None; Indicator::COUNT];
        for (indicator, aliases) in INDICATOR_ALIASES {
            indicators[*indicator as usize] = find(aliases);
        }

        ColumnMap {
            diet_group: find(DIET_GROUP_ALIASES),
            gender: find(GENDER_ALIASES),
            age_group: find(AGE_GROUP_ALIASES),
            indicators,
        }
    }

    pub fn indicator(&self, indicator: Indicator) -> Option<usize> {
        self.indicators[indicator as usize]
    }
}
