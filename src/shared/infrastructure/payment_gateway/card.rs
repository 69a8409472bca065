// Advisory card pre-checks, run before anything is stored. The gateway does
// not repeat them, so nothing downstream may assume a card passed.

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use crate::shared::infrastructure::payment_gateway::CardDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardProblem {
    NumberLength,
    ExpiryFormat,
    Expired,
    CvvLength,
}

impl CardProblem {
    pub fn field(&self) -> &'static str {
        match self {
            CardProblem::NumberLength => "cardNumber",
            CardProblem::ExpiryFormat | CardProblem::Expired => "expiryDate",
            CardProblem::CvvLength => "cvv",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CardProblem::NumberLength => "card number must have 13 to 19 digits",
            CardProblem::ExpiryFormat => "expiry date must be MM/YY",
            CardProblem::Expired => "card has expired",
            CardProblem::CvvLength => "CVV must have 3 or 4 digits",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("card rejected by pre-checks: {problems:?}")]
pub struct CardValidationError {
    pub problems: Vec<CardProblem>,
}

pub fn validate_card(card: &CardDetails, now: DateTime<Utc>) -> Result<(), CardValidationError> {
    let mut problems = Vec::new();

    let number: String = card
        .card_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if !(13..=19).contains(&number.len()) || !number.chars().all(|c| c.is_ascii_digit()) {
        problems.push(CardProblem::NumberLength);
    }

    let expiry: String = card
        .expiry_date
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    match expiry_month_start(&expiry) {
        None => problems.push(CardProblem::ExpiryFormat),
        // A card is treated as expired once its expiry month has begun.
        Some(month_start) if month_start <= now => problems.push(CardProblem::Expired),
        Some(_) => {}
    }

    let cvv_digits = card.cvv.chars().filter(char::is_ascii_digit).count();
    if !(3..=4).contains(&cvv_digits) {
        problems.push(CardProblem::CvvLength);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CardValidationError { problems })
    }
}

fn expiry_month_start(mmyy: &str) -> Option<DateTime<Utc>> {
    if mmyy.len() != 4 {
        return None;
    }
    let month: u32 = mmyy[..2].parse().ok()?;
    let year: i32 = mmyy[2..].parse::<i32>().ok()? + 2000;
    if !(1..=12).contains(&month) {
        return None;
    }
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()
}
