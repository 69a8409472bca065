use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::EntityId;

pub const DEFAULT_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: EntityId,
    pub doctor_name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub testimonial: String,
    pub rating: u8,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub doctor_name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub testimonial: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    pub is_active: bool,
}

fn default_rating() -> u8 {
    DEFAULT_RATING
}

impl NewTestimonial {
    pub fn check_invariants(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err(format!("rating must be between 1 and 5, got {}", self.rating));
        }
        Ok(())
    }

    pub fn into_testimonial(self, id: EntityId, created_at: DateTime<Utc>) -> Testimonial {
        Testimonial {
            id,
            doctor_name: self.doctor_name,
            location: self.location,
            specialty: self.specialty,
            testimonial: self.testimonial,
            rating: self.rating,
            is_active: self.is_active,
            created_at,
        }
    }
}
