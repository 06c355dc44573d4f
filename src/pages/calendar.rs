use chrono::{Datelike, FixedOffset, Local, Months, NaiveDate, Offset};
use tracing::warn;

use crate::error::ApiError;
use crate::models::Task;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month grid of tasks placed on their due dates.
///
/// Due dates are converted to the page's UTC offset before being matched
/// to a day; the offset is captured when the page is created.
#[derive(Debug)]
pub struct CalendarPage {
    pub tasks: Vec<Task>,
    pub loading: bool,
    /// First day of the displayed month
    month: NaiveDate,
    today: NaiveDate,
    offset: FixedOffset,
}

impl Default for CalendarPage {
    fn default() -> Self {
        let now = Local::now();
        Self::new(now.date_naive(), now.offset().fix())
    }
}

impl CalendarPage {
    pub fn new(today: NaiveDate, offset: FixedOffset) -> Self {
        Self {
            tasks: Vec::new(),
            loading: false,
            month: first_of_month(today),
            today,
            offset,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_tasks(&mut self, result: Result<Vec<Task>, ApiError>) {
        self.loading = false;
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => warn!("Failed to fetch tasks: {}", e),
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Heading such as "May 2024".
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.month.checked_add_months(Months::new(1)) {
            self.month = next;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.month.checked_sub_months(Months::new(1)) {
            self.month = prev;
        }
    }

    /// Every day of the displayed month, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.month
            .iter_days()
            .take_while(|d| d.month() == self.month.month())
            .collect()
    }

    /// Empty cells before day 1 in a Sunday-first week.
    pub fn leading_blanks(&self) -> usize {
        self.month.weekday().num_days_from_sunday() as usize
    }

    pub fn is_today(&self, day: NaiveDate) -> bool {
        day == self.today
    }

    /// Tasks due on `day` in the page's local offset.
    pub fn tasks_on(&self, day: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| {
                t.due_date
                    .map(|due| due.with_timezone(&self.offset).date_naive() == day)
                    .unwrap_or(false)
            })
            .collect()
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn task(id: i64, due: Option<&str>) -> Task {
        serde_json::from_value(serde_json::json!({"id": id, "title": "t", "due_date": due})).unwrap()
    }

    #[test]
    fn test_month_grid() {
        let page = CalendarPage::new(date(2024, 5, 15), utc());
        assert_eq!(page.title(), "May 2024");
        assert_eq!(page.days().len(), 31);
        // 2024-05-01 was a Wednesday
        assert_eq!(page.leading_blanks(), 3);
        assert!(page.is_today(date(2024, 5, 15)));
    }

    #[test]
    fn test_month_navigation() {
        let mut page = CalendarPage::new(date(2024, 1, 31), utc());
        page.next_month();
        assert_eq!(page.month(), date(2024, 2, 1));
        assert_eq!(page.days().len(), 29);
        page.prev_month();
        page.prev_month();
        assert_eq!(page.title(), "December 2023");
    }

    #[test]
    fn test_tasks_on_day_uses_offset() {
        let mut page = CalendarPage::new(date(2024, 5, 1), FixedOffset::west_opt(5 * 3600).unwrap());
        page.apply_tasks(Ok(vec![
            task(1, Some("2024-05-02T03:00:00")),
            task(2, Some("2024-05-02T12:00:00")),
            task(3, None),
        ]));

        let may1: Vec<i64> = page.tasks_on(date(2024, 5, 1)).iter().map(|t| t.id).collect();
        let may2: Vec<i64> = page.tasks_on(date(2024, 5, 2)).iter().map(|t| t.id).collect();
        assert_eq!(may1, vec![1]);
        assert_eq!(may2, vec![2]);
    }
}
