use std::collections::BTreeMap;

/// Number of commits made on one calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCountRecord {
    /// ISO-8601 calendar date
    pub date: String,
    /// Always at least one
    pub count: u32,
    pub repository: String,
}

/// Group commit dates by calendar date, one record per distinct date in ascending date order.
///
/// The counts always sum to the number of input dates.
#[must_use]
pub fn aggregate_commit_dates(dates: &[String], repository: &str) -> Vec<CommitCountRecord> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for date in dates {
        *counts.entry(date.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| CommitCountRecord {
            date: date.to_string(),
            count,
            repository: repository.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_aggregate_groups_and_sorts() {
        let records = aggregate_commit_dates(&dates(&["2025-02-07", "2025-02-06", "2025-02-07"]), "Databox-nba");

        let pairs: Vec<_> = records.iter().map(|r| (r.date.as_str(), r.count)).collect();
        assert_eq!(pairs, [("2025-02-06", 1), ("2025-02-07", 2)]);
        assert_eq!(records.iter().map(|r| r.count).sum::<u32>(), 3);
        assert!(records.iter().all(|r| r.repository == "Databox-nba"));
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_commit_dates(&[], "Databox-nba").is_empty());
    }

    #[test]
    fn test_aggregate_single_date() {
        let records = aggregate_commit_dates(&dates(&["2024-12-31"; 4]), "r");
        assert_eq!(
            records,
            [CommitCountRecord {
                date: "2024-12-31".into(),
                count: 4,
                repository: "r".into(),
            }]
        );
    }

    #[test]
    fn test_aggregate_crosses_year_boundary() {
        let records = aggregate_commit_dates(&dates(&["2025-01-01", "2024-12-31", "2025-01-01", "2024-12-30"]), "r");
        let order: Vec<_> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(order, ["2024-12-30", "2024-12-31", "2025-01-01"]);
    }
}
