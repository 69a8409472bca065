use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub ce_credits: u32,
    /// Length of the course in hours.
    pub duration: u32,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub ce_credits: u32,
    pub duration: u32,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl NewCourse {
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.price < Decimal::ZERO {
            return Err(format!("course price must not be negative, got {}", self.price));
        }
        Ok(())
    }

    pub fn into_course(self, id: EntityId, created_at: DateTime<Utc>) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            ce_credits: self.ce_credits,
            duration: self.duration,
            features: self.features,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at,
        }
    }
}
