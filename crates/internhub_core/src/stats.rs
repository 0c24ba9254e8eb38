//! crates/internhub_core/src/stats.rs
//!
//! Dashboard aggregates, computed fresh from a snapshot on every request.

use crate::domain::InternRecord;
use serde::Serialize;

/// Rating band a record falls into. Every rating in 1..=10 maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceBand {
    /// 8 and above.
    Exceeds,
    /// 5 through 7.
    Meeting,
    /// 4 and below.
    Below,
}

impl PerformanceBand {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            8..=u8::MAX => PerformanceBand::Exceeds,
            5..=7 => PerformanceBand::Meeting,
            _ => PerformanceBand::Below,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceBand::Exceeds => "8-10 (Exceeds)",
            PerformanceBand::Meeting => "5-7 (Meeting)",
            PerformanceBand::Below => "0-4 (Below)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PerformanceBuckets {
    pub exceeds: usize,
    pub meeting: usize,
    pub below: usize,
}

impl PerformanceBuckets {
    fn add(&mut self, band: PerformanceBand) {
        match band {
            PerformanceBand::Exceeds => self.exceeds += 1,
            PerformanceBand::Meeting => self.meeting += 1,
            PerformanceBand::Below => self.below += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.exceeds + self.meeting + self.below
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_count: usize,
    pub average_rating: f64,
    pub total_projects: u64,
    /// Departments in the order they are first seen in the snapshot.
    pub department_distribution: Vec<DepartmentCount>,
    pub department_count: usize,
    pub performance: PerformanceBuckets,
}

impl DashboardStats {
    pub fn compute(records: &[InternRecord]) -> Self {
        let mut rating_sum: u64 = 0;
        let mut total_projects: u64 = 0;
        let mut performance = PerformanceBuckets::default();
        let mut department_distribution: Vec<DepartmentCount> = Vec::new();

        for record in records {
            rating_sum += u64::from(record.rating);
            total_projects += u64::from(record.projects_completed);
            performance.add(PerformanceBand::from_rating(record.rating));

            match department_distribution
                .iter_mut()
                .find(|d| d.department == record.department)
            {
                Some(entry) => entry.count += 1,
                None => department_distribution.push(DepartmentCount {
                    department: record.department.clone(),
                    count: 1,
                }),
            }
        }

        let average_rating = if records.is_empty() {
            0.0
        } else {
            mean_to_one_decimal(rating_sum, records.len())
        };

        Self {
            total_count: records.len(),
            average_rating,
            total_projects,
            department_count: department_distribution.len(),
            department_distribution,
            performance,
        }
    }
}

/// Mean rounded half-up to one decimal. Scaling before the division keeps
/// exact halves like 8.35 from drifting below the midpoint.
fn mean_to_one_decimal(sum: u64, count: usize) -> f64 {
    (sum as f64 * 10.0 / count as f64).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::example_records;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn rated(rating: u8, department: &str) -> InternRecord {
        InternRecord {
            id: format!("{department}-{rating}"),
            name: "Intern".to_string(),
            duration: "3 Months".to_string(),
            department: department.to_string(),
            reporting_manager: "Manager".to_string(),
            projects_completed: u32::from(rating),
            rating,
            comment: "ok".to_string(),
            ai_summary: None,
            created_at: 0,
        }
    }

    #[test]
    fn empty_collection_has_zero_average() {
        let stats = DashboardStats::compute(&[]);
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.total_projects, 0);
        assert_eq!(stats.department_count, 0);
        assert_eq!(stats.performance, PerformanceBuckets::default());
    }

    #[test]
    fn mixed_collection_scenario() {
        let records = vec![rated(9, "Engineering"), rated(6, "Design"), rated(3, "Engineering")];
        let stats = DashboardStats::compute(&records);

        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.average_rating, 6.0);
        assert_eq!(stats.total_projects, 18);
        assert_eq!(
            stats.performance,
            PerformanceBuckets { exceeds: 1, meeting: 1, below: 1 }
        );
        assert_eq!(
            stats.department_distribution,
            vec![
                DepartmentCount { department: "Engineering".to_string(), count: 2 },
                DepartmentCount { department: "Design".to_string(), count: 1 },
            ]
        );
        assert_eq!(stats.department_count, 2);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let records = vec![rated(9, "A"), rated(8, "A"), rated(7, "A")];
        assert_eq!(DashboardStats::compute(&records).average_rating, 8.0);

        let records = vec![rated(10, "A"), rated(7, "A"), rated(7, "A")];
        assert_eq!(DashboardStats::compute(&records).average_rating, 8.0);

        let records = vec![rated(10, "A"), rated(9, "A"), rated(9, "A")];
        assert_eq!(DashboardStats::compute(&records).average_rating, 9.3);
    }

    #[test]
    fn exact_half_rounds_up() {
        // 167 / 20 = 8.35
        let mut records: Vec<_> = (0..7).map(|_| rated(9, "A")).collect();
        records.extend((0..13).map(|_| rated(8, "A")));
        assert_eq!(DashboardStats::compute(&records).average_rating, 8.4);
    }

    #[test]
    fn every_rating_lands_in_exactly_one_band() {
        let records: Vec<_> = (1..=10).map(|r| rated(r, "Engineering")).collect();
        let stats = DashboardStats::compute(&records);

        assert_eq!(stats.performance, PerformanceBuckets { exceeds: 3, meeting: 3, below: 4 });
        assert_eq!(stats.performance.total(), stats.total_count);
        assert_eq!(PerformanceBand::from_rating(4), PerformanceBand::Below);
        assert_eq!(PerformanceBand::from_rating(5), PerformanceBand::Meeting);
        assert_eq!(PerformanceBand::from_rating(7), PerformanceBand::Meeting);
        assert_eq!(PerformanceBand::from_rating(8), PerformanceBand::Exceeds);
    }

    #[test]
    fn department_counts_sum_to_total() {
        let stats = DashboardStats::compute(&example_records(Utc::now()));
        let sum: usize = stats.department_distribution.iter().map(|d| d.count).sum();

        assert_eq!(sum, stats.total_count);
        assert_eq!(stats.department_count, 3);
        assert_eq!(stats.average_rating, 8.0);
        assert_eq!(stats.total_projects, 20);
    }
}
