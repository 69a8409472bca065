use serde::Deserialize;

use crate::modules::registrations::use_cases::register_for_course::command::RegisterForCourse;
use crate::shared::infrastructure::payment_gateway::CardDetails;

/// Registration form and card fields posted together in one body.
#[derive(Debug, Clone, Deserialize)]
pub struct Checkout {
    #[serde(flatten)]
    pub registration: RegisterForCourse,
    #[serde(flatten)]
    pub card: CardDetails,
}
