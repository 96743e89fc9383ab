//! Sample tasks loaded into an empty store at startup.

use super::model::Task;

const FIXTURES: [(&str, [&str; 3]); 3] = [
    (
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit",
        ["Sed", "convallis", "nibh"],
    ),
    (
        "Etiam diam ipsum, dignissim eget suscipit nec, faucibus accumsan felis",
        ["Phasellus", "vestibulum", "tortor"],
    ),
    (
        "Nullam eget dui blandit, scelerisque lacus a, sagittis nibh",
        ["Curabitur", "consectetur", "porttitor"],
    ),
];

/// The sample tasks, unsaved, in display order.
pub fn sample_tasks() -> Vec<Task> {
    FIXTURES
        .iter()
        .map(|(title, tags)| Task::new(*title, tags.iter().map(|t| t.to_string()).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tasks_are_unsaved_and_tagged() {
        let tasks = sample_tasks();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().all(|t| t.id.is_none()));
        assert_eq!(tasks[1].tags, vec!["Phasellus", "vestibulum", "tortor"]);
    }
}
