//! Task list

use pms_core::{Dashboard, Tab, Task, TaskFilter, TaskStatus};

use super::Toast;

pub fn render(dash: &Dashboard) -> Vec<String> {
    let active = dash.active_filter(Tab::Tasks);
    let bar = TaskFilter::NAMES
        .iter()
        .map(|name| {
            if *name == active {
                format!("[{}]", name)
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![format!("Filter: {}", bar)];
    let before = lines.len();
    for task in dash.visible_tasks() {
        lines.extend(task_lines(task));
    }
    if lines.len() == before {
        lines.push("No tasks found for the selected filter.".to_string());
    }
    lines
}

fn task_lines(task: &Task) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{}  {} [{}] ({})",
            task.id,
            task.title,
            task.priority.as_str(),
            task.status.label()
        ),
        format!(
            "    {} | {} | due {} | {} min | {}",
            task.location,
            task.assigned_to,
            task.due_time,
            task.estimated_duration,
            task.task_type.as_str()
        ),
    ];
    if let Some(requested_by) = &task.requested_by {
        lines.push(format!("    requested by {}", requested_by));
    }
    if let Some(next) = task.status.next() {
        let verb = match next {
            TaskStatus::InProgress => "start",
            _ => "complete",
        };
        lines.push(format!("    > {} {}", verb, task.id));
    }
    lines
}

/// Full card for one task
pub fn details(dash: &Dashboard, id: &str) -> pms_core::Result<Vec<String>> {
    let task = dash.tasks().lookup(id)?;
    let mut lines = task_lines(task);
    if !task.description.is_empty() {
        lines.insert(1, format!("    {}", task.description));
    }
    Ok(lines)
}

fn status_toast(result: pms_core::Result<Task>) -> Toast {
    match result {
        Ok(task) => Toast::Success(format!(
            "Task \"{}\" marked as {}",
            task.title,
            task.status.as_str().replace('_', " ")
        )),
        Err(e) => Toast::from_error(e),
    }
}

pub fn start(dash: &mut Dashboard, id: &str) -> Toast {
    status_toast(dash.tasks_mut().start(id))
}

pub fn complete(dash: &mut Dashboard, id: &str) -> Toast {
    status_toast(dash.tasks_mut().complete(id))
}
