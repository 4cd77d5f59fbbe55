//! Clock helpers.
//!
//! On wasm32 chrono reads the browser clock (`Date`), natively the OS clock.

use chrono::{DateTime, Datelike, Local, Utc};

/// Calendar year in the visitor's local time zone.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Moment of a form submission.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
