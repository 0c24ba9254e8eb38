//! crates/internhub_core/src/seed.rs
//!
//! Example records used to populate a store that has nothing persisted yet.

use crate::domain::InternRecord;
use chrono::{DateTime, Utc};

/// Builds the three example records, timestamped relative to `now` and
/// ordered newest-first.
pub fn example_records(now: DateTime<Utc>) -> Vec<InternRecord> {
    let now_ms = now.timestamp_millis();
    vec![
        InternRecord {
            id: "1".to_string(),
            name: "Sarah Jenkins".to_string(),
            duration: "3 Months".to_string(),
            department: "Engineering".to_string(),
            reporting_manager: "Alex Rivera".to_string(),
            projects_completed: 5,
            rating: 9,
            comment: "Sarah was exceptional at picking up our tech stack. She contributed significantly to the frontend rewrite and delivered two core features ahead of schedule.".to_string(),
            ai_summary: Some("Sarah is a high-performing engineering intern with strong technical adaptability. She significantly impacted the frontend migration and demonstrated excellent time management by delivering key features early.".to_string()),
            created_at: now_ms - 1_000_000,
        },
        InternRecord {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            duration: "6 Months".to_string(),
            department: "Design".to_string(),
            reporting_manager: "Elena Vance".to_string(),
            projects_completed: 12,
            rating: 8,
            comment: "Michael has a great eye for detail. His UI prototypes for the mobile app were well-received by stakeholders.".to_string(),
            ai_summary: Some("Michael is a productive design intern with a keen eye for UI details. His work on mobile prototypes was highly valued by stakeholders, showing strong collaborative and creative skills.".to_string()),
            created_at: now_ms - 5_000_000,
        },
        InternRecord {
            id: "3".to_string(),
            name: "Amara Okoro".to_string(),
            duration: "3 Months".to_string(),
            department: "Marketing".to_string(),
            reporting_manager: "David Smith".to_string(),
            projects_completed: 3,
            rating: 7,
            comment: "Amara helped with social media strategy and campaign tracking. Very diligent with data.".to_string(),
            ai_summary: Some("Amara is a diligent marketing intern who specialized in campaign data tracking. Her contributions to social media strategy provided valuable analytical insights to the team.".to_string()),
            created_at: now_ms - 10_000_000,
        },
    ]
}
