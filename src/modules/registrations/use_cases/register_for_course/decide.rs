use chrono::{DateTime, Utc};

use crate::modules::catalog::core::course::Course;
use crate::modules::catalog::core::schedule::CourseSchedule;
use crate::modules::registrations::core::registration::NewRegistration;
use crate::modules::registrations::use_cases::register_for_course::command::RegisterForCourse;
use crate::modules::registrations::use_cases::register_for_course::decision::{
    DecideError, Decision,
};

/// Prices a validated form against the catalog. `schedule` is the lookup
/// result for `command.schedule_id` and is ignored when no schedule was asked for.
pub fn decide_register(
    command: RegisterForCourse,
    course: Option<&Course>,
    schedule: Option<&CourseSchedule>,
    now: DateTime<Utc>,
) -> Decision {
    let course = match course {
        Some(course) if course.is_active && course.id == command.course_id => course,
        _ => {
            return Decision::Rejected {
                reason: DecideError::UnknownCourse,
            };
        }
    };

    if let Some(schedule_id) = command.schedule_id {
        let reason = match schedule {
            Some(s) if s.id != schedule_id || !s.is_active => Some(DecideError::UnknownSchedule),
            Some(s) if s.course_id != course.id => Some(DecideError::ScheduleCourseMismatch),
            Some(s) if s.is_full() => Some(DecideError::ScheduleFull),
            Some(_) => None,
            None => Some(DecideError::UnknownSchedule),
        };
        if let Some(reason) = reason {
            return Decision::Rejected { reason };
        }
    }

    Decision::Accepted {
        registration: NewRegistration {
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            phone: command.phone,
            dental_license_number: command.dental_license_number,
            course_id: course.id,
            schedule_id: command.schedule_id,
            total_amount: course.price,
            registration_date: now,
        },
    }
}
