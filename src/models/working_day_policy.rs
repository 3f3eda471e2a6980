//! Working-day policy model.
//!
//! A [`WorkingDayPolicy`] is the set of weekdays on which team members are
//! expected to work. It is an explicit value handed to every calculator, so
//! several policies (e.g. per-region working weeks) can coexist.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CapacityError, CapacityResult};

/// An ordered set of weekdays considered working days.
///
/// Duplicates are collapsed on construction and the first-seen order is kept.
/// The policy does not need to be contiguous; an empty policy is allowed and
/// simply yields no working days.
///
/// # Example
///
/// ```
/// use sprint_capacity::models::WorkingDayPolicy;
/// use chrono::{NaiveDate, Weekday};
///
/// let policy = WorkingDayPolicy::default();
/// assert_eq!(policy.days().len(), 5);
/// assert!(policy.contains(Weekday::Mon));
/// assert!(!policy.contains(Weekday::Sat));
///
/// // 2024-01-06 is a Saturday
/// assert!(!policy.is_working_day(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WorkingDayPolicy {
    days: Vec<Weekday>,
}

impl WorkingDayPolicy {
    /// Creates a policy from the given weekdays.
    pub fn new<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut unique = Vec::with_capacity(7);
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        Self { days: unique }
    }

    /// Creates a policy from weekday names such as `"Monday"` or `"tue"`.
    ///
    /// Names are matched case-insensitively, in full or three-letter form.
    ///
    /// # Example
    ///
    /// ```
    /// use sprint_capacity::models::WorkingDayPolicy;
    /// use chrono::Weekday;
    ///
    /// let policy = WorkingDayPolicy::from_names(["Sunday", "Monday", "Tuesday", "Wednesday"])?;
    /// assert_eq!(policy.days(), &[Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed]);
    /// # Ok::<(), sprint_capacity::error::CapacityError>(())
    /// ```
    pub fn from_names<I, S>(names: I) -> CapacityResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let days = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                name.trim()
                    .parse::<Weekday>()
                    .map_err(|_| CapacityError::InvalidPolicy {
                        message: format!("unknown weekday '{}'", name),
                    })
            })
            .collect::<CapacityResult<Vec<_>>>()?;
        Ok(Self::new(days))
    }

    /// Returns the working weekdays in policy order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Returns true if the weekday is a working day under this policy.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days.contains(&weekday)
    }

    /// Returns true if the date falls on a working weekday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }
}

impl Default for WorkingDayPolicy {
    /// Monday through Friday.
    fn default() -> Self {
        Self::new([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ])
    }
}

impl TryFrom<Vec<String>> for WorkingDayPolicy {
    type Error = CapacityError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<WorkingDayPolicy> for Vec<String> {
    fn from(policy: WorkingDayPolicy) -> Self {
        policy.days.iter().map(|d| weekday_name(*d).to_string()).collect()
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
