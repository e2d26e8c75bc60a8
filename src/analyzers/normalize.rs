use crate::analyzers::types::{ALL_LABEL, NormalizedRecord, Summary, SummaryRecord};
use crate::reconcile::Indicator;
use serde::{Deserialize, Serialize};

/// Fixed per-indicator display weights applied after max-based scaling.
///
/// The constants are hand-chosen to keep stacked magnitudes visually
/// comparable; they are configuration, not derived from data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationWeights {
    pub ghgs: f64,
    pub land_use: f64,
    pub water_scarcity: f64,
    pub eutrophication: f64,
    pub acidification: f64,
    pub biodiversity: f64,
}

impl Default for NormalizationWeights {
    fn default() -> Self {
        NormalizationWeights {
            ghgs: 0.25,
            land_use: 0.20,
            water_scarcity: 0.15,
            eutrophication: 0.10,
            acidification: 0.10,
            biodiversity: 0.20,
        }
    }
}

impl NormalizationWeights {
    pub fn get(&self, indicator: Indicator) -> f64 {
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

/// Per-indicator maxima over one record subset. Recomputed for every
/// normalization call, never cached across loads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorMaxima([f64; Indicator::COUNT]);

impl IndicatorMaxima {
    pub fn get(&self, indicator: Indicator) -> f64 {
        self.0[indicator as usize]
    }
}

/// Computes the maximum raw mean per indicator across `records`.
pub fn indicator_maxima(records: &[SummaryRecord]) -> IndicatorMaxima {
    let mut maxima = [0.0f64; Indicator::COUNT];
    for record in records {
        for indicator in Indicator::ALL {
            let i = indicator as usize;
            maxima[i] = maxima[i].max(record.indicator(indicator));
        }
    }
    IndicatorMaxima(maxima)
}

/// Rescales each record as `(raw / max_i) * weight_i` per indicator.
///
/// An indicator whose subset maximum is zero normalizes to 0.0 everywhere
/// rather than dividing by zero.
pub fn normalize(records: &[SummaryRecord], weights: &NormalizationWeights) -> Vec<NormalizedRecord> {
    let maxima = indicator_maxima(records);

    let scaled = |record: &SummaryRecord, indicator: Indicator| {
        let max = maxima.get(indicator);
        if max == 0.0 {
            0.0
        } else {
            record.indicator(indicator) / max * weights.get(indicator)
        }
    };

    records
        .iter()
        .map(|record| NormalizedRecord {
            diet_group: record.diet_group.clone(),
            gender: record.gender.clone(),
            age_group: record.age_group.clone(),
            ghgs: scaled(record, Indicator::Ghgs),
            land_use: scaled(record, Indicator::LandUse),
            water_scarcity: scaled(record, Indicator::WaterScarcity),
            eutrophication: scaled(record, Indicator::Eutrophication),
            acidification: scaled(record, Indicator::Acidification),
            biodiversity: scaled(record, Indicator::Biodiversity),
        })
        .collect()
}

/// Selects the (diet group × age group) rows used for stacked charting,
/// excluding the `"All"` placeholders.
pub fn diet_age_records(summary: &Summary) -> Vec<SummaryRecord> {
    summary
        .records
        .iter()
        .filter(|r| r.diet_group != ALL_LABEL && r.gender == ALL_LABEL && r.age_group != ALL_LABEL)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_record(diet: &str, age: &str, ghgs: f64, land_use: f64) -> SummaryRecord {
        SummaryRecord {
            diet_group: diet.to_string(),
            gender: ALL_LABEL.to_string(),
            age_group: age.to_string(),
            ghgs,
            land_use,
            water_scarcity: 0.0,
            eutrophication: 0.0,
            acidification: 0.0,
            biodiversity: 0.0,
        }
    }

    #[test]
    fn test_maxima_over_subset() {
        let records = vec![
            summary_record("vegan", "20-29", 2.0, 1.0),
            summary_record("high_meat", "20-29", 10.0, 4.0),
        ];
        let maxima = indicator_maxima(&records);

        assert_eq!(maxima.get(Indicator::Ghgs), 10.0);
        assert_eq!(maxima.get(Indicator::LandUse), 4.0);
        assert_eq!(maxima.get(Indicator::Biodiversity), 0.0);
    }

    #[test]
    fn test_normalized_values_bounded_by_weight() {
        let weights = NormalizationWeights::default();
        let records = vec![
            summary_record("vegan", "20-29", 2.0, 1.0),
            summary_record("high_meat", "20-29", 10.0, 4.0),
        ];
        let normalized = normalize(&records, &weights);

        for n in &normalized {
            assert!(n.ghgs >= 0.0 && n.ghgs <= weights.ghgs);
            assert!(n.land_use >= 0.0 && n.land_use <= weights.land_use);
        }

        // The max bucket alone hits the full weight.
        assert_eq!(normalized[1].ghgs, weights.ghgs);
        assert!(normalized[0].ghgs < weights.ghgs);
    }

    #[test]
    fn test_zero_maximum_normalizes_to_zero() {
        let records = vec![
            summary_record("vegan", "20-29", 0.0, 0.0),
            summary_record("fish", "20-29", 0.0, 0.0),
        ];
        let normalized = normalize(&records, &NormalizationWeights::default());

        for n in &normalized {
            assert_eq!(n.ghgs, 0.0);
            assert_eq!(n.biodiversity, 0.0);
            assert!(n.ghgs.is_finite());
        }
    }

    #[test]
    fn test_diet_age_subset_excludes_placeholders() {
        let summary = Summary {
            records: vec![
                summary_record("vegan", "All", 1.0, 1.0),
                summary_record("vegan", "20-29", 2.0, 1.0),
                SummaryRecord {
                    gender: "Female".to_string(),
                    ..summary_record("vegan", "All", 3.0, 1.0)
                },
            ],
            diet_groups: vec![],
            genders: vec![],
            age_groups: vec![],
        };

        let subset = diet_age_records(&summary);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].age_group, "20-29");
    }
}
