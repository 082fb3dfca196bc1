// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire formats for dates and times.
//!
//! The backend store speaks ISO 8601 subsets: `YYYY-MM-DD` for dates,
//! `HH:MM:SS` for times of day, and `YYYY-MM-DDTHH:MM:SS` for the
//! timestamps the calendar surface consumes. Each module generated here
//! also exposes an `option` submodule for optional fields.

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

time::serde::format_description!(pub iso_time, Time, "[hour]:[minute]:[second]");

time::serde::format_description!(
    pub iso_datetime,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);
