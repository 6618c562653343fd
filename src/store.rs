//! Local List State Helpers
//!
//! Per-id merges applied to the in-memory task list after each remote call
//! resolves (optimistic local merge: the operation's own response is folded
//! in instead of re-fetching the whole list). All merges are idempotent
//! against unknown ids, so out-of-order resolution of racing calls cannot
//! corrupt the list.

use crate::models::Task;

/// Trim new-task input; `None` means nothing to submit.
pub fn normalize_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Flip the completed flag on the matching task
pub fn toggle_task(tasks: &mut Vec<Task>, id: &str) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        task.completed = !task.completed;
    }
}

/// Overwrite the text of the matching task, completed flag untouched
pub fn set_task_text(tasks: &mut Vec<Task>, id: &str, text: &str) {
    if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
        task.text = text.to_string();
    }
}

/// Remove the matching task from the list
pub fn remove_task(tasks: &mut Vec<Task>, id: &str) {
    tasks.retain(|task| task.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, text: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            completed,
            created_at: format!("2026-01-01T00:00:0{}Z", id.len()),
        }
    }

    #[test]
    fn test_normalize_text_trims_input() {
        assert_eq!(normalize_text("  Buy milk  "), Some("Buy milk".to_string()));
    }

    #[test]
    fn test_normalize_text_rejects_empty_and_whitespace() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut tasks = vec![task("a", "Buy milk", false)];
        toggle_task(&mut tasks, "a");
        assert!(tasks[0].completed);
        toggle_task(&mut tasks, "a");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_toggle_targets_only_the_matching_id() {
        let mut tasks = vec![task("a", "One", false), task("b", "Two", false)];
        toggle_task(&mut tasks, "b");
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_set_task_text_keeps_completed_flag() {
        let mut tasks = vec![task("a", "Buy milk", true)];
        set_task_text(&mut tasks, "a", "Buy oat milk");
        assert_eq!(tasks[0].text, "Buy oat milk");
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_remove_task_drops_only_the_matching_id() {
        let mut tasks = vec![task("a", "One", false), task("b", "Two", false)];
        remove_task(&mut tasks, "a");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "b");
    }

    #[test]
    fn test_merges_ignore_unknown_ids() {
        // A response can arrive after its row was deleted by a racing call;
        // the merge must be a no-op, not a panic or a phantom row.
        let mut tasks = vec![task("a", "One", false)];
        toggle_task(&mut tasks, "gone");
        set_task_text(&mut tasks, "gone", "ghost");
        remove_task(&mut tasks, "gone");
        assert_eq!(tasks, vec![task("a", "One", false)]);
    }

    #[test]
    fn test_add_then_toggle_then_edit_then_delete_scenario() {
        let mut tasks: Vec<Task> = Vec::new();

        let text = normalize_text("Buy milk").expect("non-empty");
        tasks.push(task("t1", &text, false));
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);

        toggle_task(&mut tasks, "t1");
        assert!(tasks[0].completed);

        set_task_text(&mut tasks, "t1", "Buy oat milk");
        assert_eq!(tasks[0].text, "Buy oat milk");
        assert!(tasks[0].completed, "editing must not reset completion");

        remove_task(&mut tasks, "t1");
        assert!(tasks.is_empty());
    }
}
