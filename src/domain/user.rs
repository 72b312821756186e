//! User domain entity.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::MINIMUM_ADULT_AGE;

/// User domain entity
///
/// The birth date is the only policy-relevant attribute: whether a user may
/// rent an adult-only movie is derived from it at evaluation time, never
/// stored as a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl User {
    /// Age in whole years as of `date`.
    ///
    /// The year difference is reduced by one until the birthday has passed,
    /// so a user turns a year older exactly on the anniversary day.
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let mut age = date.year() - self.birth_date.year();
        if (date.month(), date.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }

    /// Check if the user clears the adult-content age threshold on `date`
    pub fn is_of_age(&self, date: NaiveDate) -> bool {
        self.age_on(date) >= MINIMUM_ADULT_AGE
    }
}
