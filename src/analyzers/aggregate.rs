use crate::analyzers::types::{ALL_LABEL, BucketLabels, GroupKey, Summary, SummaryRecord};
use crate::analyzers::utility::mean;
use crate::reconcile::{CanonicalRecord, Indicator};
use std::collections::HashMap;

/// Aggregates canonical records into the full summary sequence.
///
/// Every grouping kind is computed with the same generic bucketing routine;
/// kinds differ only in how they project a record onto bucket labels.
/// Within a kind, buckets are emitted in order of first encounter.
pub fn summarize(records: &[CanonicalRecord]) -> Summary {
    let mut out = Vec::new();
    for kind in GroupKey::KINDS {
        bucket_means(records, kind, &mut out);
    }

    let (diet_groups, genders, age_groups) = collect_labels(&out);

    Summary {
        records: out,
        diet_groups,
        genders,
        age_groups,
    }
}

/// Groups records by one kind's projection and appends a [`SummaryRecord`]
/// per bucket.
///
/// A per-bucket series only collects observed measures, so sparse indicator
/// coverage shrinks the averaging denominator instead of deflating the mean
/// with zero-fills.
fn bucket_means(records: &[CanonicalRecord], kind: GroupKey, out: &mut Vec<SummaryRecord>) {
    let mut order: Vec<BucketLabels> = Vec::new();
    let mut buckets: HashMap<BucketLabels, [Vec<f64>; Indicator::COUNT]> = HashMap::new();

    for record in records {
        let key = kind.project(record);
        if !buckets.contains_key(&key) {
            order.push(key.clone());
        }
        let series = buckets.entry(key).or_default();

        for indicator in Indicator::ALL {
            let measure = record.measure(indicator);
            if measure.observed {
                series[indicator as usize].push(measure.value);
            }
        }
    }

    for key in order {
        let means: [f64; Indicator::COUNT] = {
            let series = &buckets[&key];
            std::array::from_fn(|i| mean(&series[i]))
        };

        out.push(SummaryRecord {
            diet_group: key.diet_group,
            gender: key.gender,
            age_group: key.age_group,
            ghgs: means[Indicator::Ghgs as usize],
            land_use: means[Indicator::LandUse as usize],
            water_scarcity: means[Indicator::WaterScarcity as usize],
            eutrophication: means[Indicator::Eutrophication as usize],
            acidification: means[Indicator::Acidification as usize],
            biodiversity: means[Indicator::Biodiversity as usize],
        });
    }
}

/// Deduplicated category labels per dimension, in first-seen order over the
/// output sequence. The `"All"` flattening sentinel is not a category.
fn collect_labels(records: &[SummaryRecord]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut diet_groups = Vec::new();
    let mut genders = Vec::new();
    let mut age_groups = Vec::new();

    for record in records {
        push_unique(&mut diet_groups, &record.diet_group);
        push_unique(&mut genders, &record.gender);
        push_unique(&mut age_groups, &record.age_group);
    }

    (diet_groups, genders, age_groups)
}

fn push_unique(labels: &mut Vec<String>, label: &str) {
    if label != ALL_LABEL && !labels.iter().any(|l| l == label) {
        labels.push(label.to_string());
    }
}
