//! Pending-task counting over task backend items.

use chrono::NaiveDate;

use crate::types::BackendTask;

/// Returns `true` if the task still needs doing as of `today`.
///
/// Undated tasks are always current; dated ones count once due or overdue.
/// Due dates are compared as UTC calendar dates, which is how the task
/// backend stores them.
pub fn is_pending(task: &BackendTask, today: NaiveDate) -> bool {
    !task.completed && task.due.is_none_or(|due| due.date_naive() <= today)
}

/// Number of tasks that are pending as of `today`.
pub fn pending_task_count(tasks: &[BackendTask], today: NaiveDate) -> usize {
    tasks.iter().filter(|t| is_pending(t, today)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(title: &str, due: Option<(u32, u32)>, completed: bool) -> BackendTask {
        BackendTask {
            completed,
            ..BackendTask::new(
                title,
                due.map(|(d, h)| Utc.with_ymd_and_hms(2025, 3, d, h, 0, 0).unwrap()),
            )
        }
    }

    #[test]
    fn counts_undated_due_and_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let tasks = [
            task("undated", None, false),
            task("overdue", Some((1, 12)), false),
            task("due today late", Some((3, 23)), false),
            task("tomorrow", Some((4, 0)), false),
            task("done", Some((2, 9)), true),
            task("done undated", None, true),
        ];
        assert_eq!(pending_task_count(&tasks, today), 3);
    }

    #[test]
    fn empty_list_counts_zero() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(pending_task_count(&[], today), 0);
    }
}
