use crate::modules::registrations::core::registration::NewRegistration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Selected course does not exist")]
    UnknownCourse,

    #[error("Selected schedule does not exist")]
    UnknownSchedule,

    #[error("Selected schedule belongs to another course")]
    ScheduleCourseMismatch,

    #[error("Selected schedule is full")]
    ScheduleFull,
}

impl DecideError {
    /// Wire name of the input field the rejection is reported against.
    pub fn field(&self) -> &'static str {
        match self {
            DecideError::UnknownCourse => "courseId",
            DecideError::UnknownSchedule
            | DecideError::ScheduleCourseMismatch
            | DecideError::ScheduleFull => "scheduleId",
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted { registration: NewRegistration },
    Rejected { reason: DecideError },
}
