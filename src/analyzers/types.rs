//! Data types produced by the aggregation pipeline.

use crate::reconcile::{CanonicalRecord, Indicator};
use serde::Serialize;

/// Sentinel label reported for dimensions a grouping kind does not
/// partition on.
pub const ALL_LABEL: &str = "All";

/// The six grouping kinds computed per load. A (diet × gender × age)
/// triple is deliberately not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    All,
    DietGroup,
    Gender,
    AgeGroup,
    DietGender,
    DietAge,
}

impl GroupKey {
    pub const KINDS: [GroupKey; 6] = [
        GroupKey::All,
        GroupKey::DietGroup,
        GroupKey::Gender,
        GroupKey::AgeGroup,
        GroupKey::DietGender,
        GroupKey::DietAge,
    ];

    /// Projects a record onto this kind's bucket labels, flattening
    /// non-participating dimensions to [`ALL_LABEL`].
    pub fn project(self, record: &CanonicalRecord) -> BucketLabels {
        let all = || ALL_LABEL.to_string();
        let (diet_group, gender, age_group) = match self {
            GroupKey::All => (all(), all(), all()),
            GroupKey::DietGroup => (record.diet_group.clone(), all(), all()),
            GroupKey::Gender => (all(), record.gender.clone(), all()),
            GroupKey::AgeGroup => (all(), all(), record.age_group.clone()),
            GroupKey::DietGender => (record.diet_group.clone(), record.gender.clone(), all()),
            GroupKey::DietAge => (record.diet_group.clone(), all(), record.age_group.clone()),
        };
        BucketLabels {
            diet_group,
            gender,
            age_group,
        }
    }
}

/// The label triple identifying one bucket within a grouping kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketLabels {
    pub diet_group: String,
    pub gender: String,
    pub age_group: String,
}

/// Per-bucket arithmetic means of the six indicators.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    pub diet_group: String,
    pub gender: String,
    pub age_group: String,

    pub ghgs: f64,
    pub land_use: f64,
    pub water_scarcity: f64,
    pub eutrophication: f64,
    pub acidification: f64,
    pub biodiversity: f64,
}

impl SummaryRecord {
    pub fn indicator(&self, indicator: Indicator) -> f64 {
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

/// Complete output of one aggregation pass: the flat summary sequence plus
/// the distinct category labels observed in it, in first-seen order, for
/// populating selection UI.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub records: Vec<SummaryRecord>,
    pub diet_groups: Vec<String>,
    pub genders: Vec<String>,
    pub age_groups: Vec<String>,
}

/// A summary record rescaled for chart stacking: each indicator divided by
/// its subset maximum and multiplied by a fixed display weight.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRecord {
    pub diet_group: String,
    pub gender: String,
    pub age_group: String,

    pub ghgs: f64,
    pub land_use: f64,
    pub water_scarcity: f64,
    pub eutrophication: f64,
    pub acidification: f64,
    pub biodiversity: f64,
}
