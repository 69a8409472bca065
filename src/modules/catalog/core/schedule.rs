use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::EntityId;

pub const DEFAULT_MAX_PARTICIPANTS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchedule {
    pub id: EntityId,
    pub course_id: EntityId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Human label, e.g. "Weekend Intensive".
    pub schedule: String,
    pub max_participants: u32,
    pub current_participants: u32,
    pub is_active: bool,
}

impl CourseSchedule {
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseSchedule {
    pub course_id: EntityId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub schedule: String,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    #[serde(default)]
    pub current_participants: u32,
    pub is_active: bool,
}

fn default_max_participants() -> u32 {
    DEFAULT_MAX_PARTICIPANTS
}

impl NewCourseSchedule {
    /// Checks the window and capacity invariants. Returns a description of
    /// the first violated one.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.start_date >= self.end_date {
            return Err("schedule start must be before its end".to_string());
        }
        if self.current_participants > self.max_participants {
            return Err(format!(
                "current participants ({}) exceed max participants ({})",
                self.current_participants, self.max_participants
            ));
        }
        Ok(())
    }

    pub fn into_schedule(self, id: EntityId) -> CourseSchedule {
        CourseSchedule {
            id,
            course_id: self.course_id,
            start_date: self.start_date,
            end_date: self.end_date,
            schedule: self.schedule,
            max_participants: self.max_participants,
            current_participants: self.current_participants,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod course_schedule_tests {
    use super::*;
    use crate::tests::fixtures::catalog::make_new_schedule;
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    fn it_should_accept_a_well_formed_schedule() {
        assert_eq!(make_new_schedule(1).check_invariants(), Ok(()));
    }

    #[rstest]
    fn it_should_reject_a_schedule_that_ends_before_it_starts() {
        let mut schedule = make_new_schedule(1);
        schedule.end_date = schedule.start_date - Duration::hours(1);
        assert!(schedule.check_invariants().is_err());
    }

    #[rstest]
    fn it_should_reject_a_schedule_that_is_over_capacity() {
        let mut schedule = make_new_schedule(1);
        schedule.max_participants = 2;
        schedule.current_participants = 3;
        assert!(schedule.check_invariants().is_err());
    }

    #[rstest]
    fn it_should_default_the_capacity_when_deserializing() {
        let json = r#"{"courseId":1,"startDate":"2025-01-18T09:00:00Z","endDate":"2025-01-19T17:00:00Z","schedule":"Weekend Intensive","isActive":true}"#;
        let schedule: NewCourseSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.max_participants, DEFAULT_MAX_PARTICIPANTS);
        assert_eq!(schedule.current_participants, 0);
    }

    #[rstest]
    fn it_should_report_full_when_capacity_is_reached() {
        let mut schedule = make_new_schedule(1).into_schedule(1);
        assert!(!schedule.is_full());
        schedule.current_participants = schedule.max_participants;
        assert!(schedule.is_full());
    }
}
