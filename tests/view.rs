#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mytasks::libs::messages::Message;
    use mytasks::libs::task::{RemoteTask, Task, TaskFilter};
    use mytasks::libs::view::View;

    #[test]
    fn test_empty_notice_per_filter() {
        assert_eq!(View::empty_notice(TaskFilter::All).to_string(), "No tasks found");
        assert_eq!(View::empty_notice(TaskFilter::Completed).to_string(), "No completed tasks");
        assert_eq!(View::empty_notice(TaskFilter::Pending).to_string(), "No pending tasks");
    }

    #[test]
    fn test_table_marks_local_and_completed_tasks() {
        let local = Task::local(21, "Water the plants".to_string());
        let remote = RemoteTask {
            user_id: 1,
            id: 4,
            title: "et porro tempora".to_string(),
            completed: true,
        }
        .into_task(Utc::now());

        let rendered = View::tasks_table(&[&local, &remote]).to_string();

        assert!(rendered.contains("#21"));
        assert!(rendered.contains("Water the plants"));
        assert!(rendered.contains("LOCAL"));
        assert!(rendered.contains("#4"));
        assert!(rendered.contains("✓"));
        assert_eq!(rendered.matches("LOCAL").count(), 1);
    }

    #[test]
    fn test_local_time_format() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let formatted = View::local_time(&at);
        assert_eq!(formatted.len(), "2024-05-01 12:30:00".len());
        assert!(formatted.ends_with(":00"));
    }

    #[test]
    fn test_filter_counts_message() {
        let msg = Message::FilterCounts {
            all: 21,
            pending: 12,
            completed: 9,
        };
        assert_eq!(msg.to_string(), "All (21)  Pending (12)  Completed (9)");
    }
}
