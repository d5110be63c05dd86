use crate::models::HistoricalDataset;
use log::debug;
use std::collections::BTreeSet;

/// Every distinct bucket label across all packages and versions, ascending.
///
/// Ordering is plain string ordering; buckets must be named so that it is also
/// chronological (zero-padded `YYYY-Www` and the like). No date parsing happens here.
pub fn collect_labels(dataset: &HistoricalDataset) -> Vec<String> {
    let labels: BTreeSet<&str> = dataset
        .values()
        .flat_map(|versions| versions.values())
        .flat_map(|series| series.keys())
        .map(String::as_str)
        .collect();
    debug!("collected {} x-axis label(s)", labels.len());
    labels.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_has_no_labels() {
        assert!(collect_labels(&HistoricalDataset::new()).is_empty());
    }

    #[test]
    fn shared_buckets_collapse() {
        let ds: HistoricalDataset = serde_json::from_str(
            r#"{
                "a": { "1": { "2023-W03": 1, "2023-W01": 1 } },
                "b": { "2": { "2023-W01": 4, "2023-W02": 0 }, "3": {} }
            }"#,
        )
        .unwrap();
        assert_eq!(collect_labels(&ds), ["2023-W01", "2023-W02", "2023-W03"]);
    }
}
