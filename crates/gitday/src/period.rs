//! Reporting periods and the time windows they cover

use chrono::{DateTime, Datelike, Days, Duration, FixedOffset, NaiveTime, TimeZone, Weekday};
use clap::ValueEnum;
use gitday_git::LogQuery;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Which stretch of time a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Period {
    /// From local midnight until now
    #[default]
    Today,
    /// From Monday 00:00 of the current week until now
    Week,
}

/// A concrete `[since, until]` interval resolved from a [`Period`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// The period this window was resolved from
    pub period: Period,
    /// Start of the window (inclusive)
    pub since: DateTime<FixedOffset>,
    /// End of the window
    pub until: DateTime<FixedOffset>,
}

impl TimeWindow {
    /// Resolve `period` against the wall clock reading `now`
    ///
    /// Weeks start on Monday, so on a Sunday the window reaches back six
    /// days. Boundaries are computed in `now`'s own time zone; when midnight
    /// is skipped by a DST change the window starts at the first local
    /// minute that exists.
    pub fn for_period<Tz: TimeZone>(period: Period, now: DateTime<Tz>) -> Self {
        let start_date = match period {
            Period::Today => now.date_naive(),
            Period::Week => {
                let back = u64::from(now.weekday().num_days_from_monday());
                now.date_naive() - Days::new(back)
            }
        };
        let midnight = start_date.and_time(NaiveTime::MIN);
        let tz = now.timezone();
        let since = (0..=MINUTES_PER_DAY)
            .find_map(|m| {
                tz.from_local_datetime(&(midnight + Duration::minutes(m)))
                    .earliest()
            })
            .unwrap_or_else(|| now.clone());

        Self {
            period,
            since: since.fixed_offset(),
            until: now.fixed_offset(),
        }
    }

    /// Resolve `period` against the current local time
    #[must_use]
    pub fn current(period: Period) -> Self {
        Self::for_period(period, chrono::Local::now())
    }

    /// Git query for this window, optionally limited to one author
    #[must_use]
    pub fn query(&self, author: &str) -> LogQuery {
        LogQuery::new(self.since, self.until).with_author(author)
    }

    /// `YYYY-MM-DD` of the window start
    #[must_use]
    pub fn date_label(&self) -> String {
        self.since.format("%Y-%m-%d").to_string()
    }

    /// Localized weekday of the window start
    #[must_use]
    pub fn weekday_label(&self) -> &'static str {
        weekday_ko(self.since.weekday())
    }

    /// File name used when saving a report for this window
    #[must_use]
    pub fn log_file_name(&self) -> String {
        match self.period {
            Period::Today => format!("{}.md", self.date_label()),
            Period::Week => format!("{}_week.md", self.date_label()),
        }
    }
}

/// Single-character Korean weekday name
#[must_use]
pub fn weekday_ko(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{MappedLocalTime, NaiveDate, NaiveDateTime};
    use similar_asserts::assert_eq;

    fn kst(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).expect("valid timestamp")
    }

    #[test]
    fn test_today_starts_at_local_midnight() {
        let now = kst("2026-02-26T15:30:00+09:00");
        let window = TimeWindow::for_period(Period::Today, now);
        assert_eq!(window.since, kst("2026-02-26T00:00:00+09:00"));
        assert_eq!(window.until, now);
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2026-02-26 is a Thursday
        let now = kst("2026-02-26T15:30:00+09:00");
        let window = TimeWindow::for_period(Period::Week, now);
        assert_eq!(window.since, kst("2026-02-23T00:00:00+09:00"));
        assert_eq!(window.since.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_on_monday_is_same_day() {
        let now = kst("2026-02-23T09:00:00+09:00");
        let window = TimeWindow::for_period(Period::Week, now);
        assert_eq!(window.since, kst("2026-02-23T00:00:00+09:00"));
    }

    #[test]
    fn test_week_on_sunday_reaches_back_six_days() {
        let now = kst("2026-03-01T22:00:00+09:00");
        let window = TimeWindow::for_period(Period::Week, now);
        assert_eq!(window.since, kst("2026-02-23T00:00:00+09:00"));
    }

    #[test]
    fn test_week_crosses_month_and_year() {
        // Friday 2027-01-01
        let now = kst("2027-01-01T12:00:00-05:00");
        let window = TimeWindow::for_period(Period::Week, now);
        assert_eq!(window.since, kst("2026-12-28T00:00:00-05:00"));
    }

    /// Zone that springs forward from -04:00 to -03:00 at local midnight
    /// on 2026-09-06, so 00:00..01:00 that day never happens
    #[derive(Debug, Clone, Copy)]
    struct MidnightGap;

    impl MidnightGap {
        fn before() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).expect("valid offset")
        }

        fn after() -> FixedOffset {
            FixedOffset::west_opt(3 * 3600).expect("valid offset")
        }

        fn gap_start() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2026, 9, 6)
                .expect("valid date")
                .and_time(NaiveTime::MIN)
        }
    }

    impl TimeZone for MidnightGap {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            MidnightGap
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(
            &self,
            local: &NaiveDateTime,
        ) -> MappedLocalTime<FixedOffset> {
            let start = Self::gap_start();
            if *local < start {
                MappedLocalTime::Single(Self::before())
            } else if *local < start + Duration::hours(1) {
                MappedLocalTime::None
            } else {
                MappedLocalTime::Single(Self::after())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            // local midnight at -04:00
            if *utc < Self::gap_start() + Duration::hours(4) {
                Self::before()
            } else {
                Self::after()
            }
        }
    }

    #[test]
    fn test_skipped_midnight_starts_at_first_valid_minute() {
        let noon = NaiveDate::from_ymd_opt(2026, 9, 6)
            .expect("valid date")
            .and_hms_opt(15, 0, 0)
            .expect("valid time");
        let now = MidnightGap.from_utc_datetime(&noon);

        let window = TimeWindow::for_period(Period::Today, now);
        assert_eq!(window.since, kst("2026-09-06T01:00:00-03:00"));
        assert_eq!(window.date_label(), "2026-09-06");
        assert_eq!(window.weekday_label(), "일");
    }

    #[test]
    fn test_labels() {
        let window = TimeWindow::for_period(Period::Today, kst("2026-02-26T15:30:00+09:00"));
        assert_eq!(window.date_label(), "2026-02-26");
        assert_eq!(window.weekday_label(), "목");
        assert_eq!(window.log_file_name(), "2026-02-26.md");

        let week = TimeWindow::for_period(Period::Week, kst("2026-02-26T15:30:00+09:00"));
        assert_eq!(week.date_label(), "2026-02-23");
        assert_eq!(week.weekday_label(), "월");
        assert_eq!(week.log_file_name(), "2026-02-23_week.md");
    }

    #[test]
    fn test_query_uses_window_bounds() {
        let window = TimeWindow::for_period(Period::Today, kst("2026-02-26T15:30:00+09:00"));
        let query = window.query("wook");
        assert_eq!(query.since, window.since);
        assert_eq!(query.until, window.until);
        assert_eq!(query.author.as_deref(), Some("wook"));

        assert_eq!(window.query("").author, None);
    }

    #[test]
    fn test_weekday_names() {
        let names: Vec<&str> = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ]
        .into_iter()
        .map(weekday_ko)
        .collect();
        assert_eq!(names, vec!["일", "월", "화", "수", "목", "금", "토"]);
    }

    #[test]
    fn test_current_window_is_ordered() {
        for period in [Period::Today, Period::Week] {
            let window = TimeWindow::current(period);
            assert!(window.since <= window.until);
        }
    }
}
