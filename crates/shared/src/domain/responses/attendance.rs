use crate::model::{Attendance, AttendanceStatus, StatusCount};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct AttendanceResponse {
    pub id: Uuid,
    pub activity_id: Uuid,
    pub status: String,
    pub recorded_at: Option<String>,
}

impl From<Attendance> for AttendanceResponse {
    fn from(value: Attendance) -> Self {
        AttendanceResponse {
            id: value.id,
            activity_id: value.activity_id,
            status: value.status,
            recorded_at: value.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Raw status counts. Rates are left to the consumer.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct AttendanceBreakdown {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
}

impl AttendanceBreakdown {
    /// Folds `GROUP BY status` rows. Rows whose status does not parse still
    /// count toward the total.
    pub fn from_counts(counts: &[StatusCount]) -> Self {
        let mut breakdown = AttendanceBreakdown::default();

        for row in counts {
            breakdown.total += row.count;
            match AttendanceStatus::parse(&row.status) {
                Some(AttendanceStatus::Present) => breakdown.present += row.count,
                Some(AttendanceStatus::Absent) => breakdown.absent += row.count,
                Some(AttendanceStatus::Late) => breakdown.late += row.count,
                Some(AttendanceStatus::Excused) => breakdown.excused += row.count,
                None => {}
            }
        }

        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(status: &str, count: i64) -> StatusCount {
        StatusCount {
            status: status.to_string(),
            count,
        }
    }

    #[test]
    fn folds_counts_by_status() {
        let breakdown = AttendanceBreakdown::from_counts(&[
            count("present", 7),
            count("absent", 2),
            count("late", 1),
        ]);

        assert_eq!(
            breakdown,
            AttendanceBreakdown {
                total: 10,
                present: 7,
                absent: 2,
                late: 1,
                excused: 0,
            }
        );
    }

    #[test]
    fn unknown_statuses_only_count_toward_total() {
        let breakdown =
            AttendanceBreakdown::from_counts(&[count("present", 3), count("tardy", 2)]);

        assert_eq!(breakdown.total, 5);
        assert_eq!(breakdown.present, 3);
    }

    #[test]
    fn empty_counts_fold_to_zero() {
        assert_eq!(
            AttendanceBreakdown::from_counts(&[]),
            AttendanceBreakdown::default()
        );
    }
}
