use chrono::{Datelike, Local};

use crate::model::month::Month;

/// Month the dashboard window opens on.
pub fn current_month() -> Month {
    Month::from_date(&Local::now())
}

/// Year used when the payload omits one.
pub fn current_year() -> i32 {
    Local::now().year()
}
