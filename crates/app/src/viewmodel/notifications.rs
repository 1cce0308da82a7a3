//! Notification panel

use pms_core::{Dashboard, Notification, NotificationFilter, RelatedKind, Tab};

use super::Toast;

pub fn render(dash: &Dashboard) -> Vec<String> {
    let active = dash.active_filter(Tab::Notifications);
    let bar = NotificationFilter::NAMES
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
    let visible: Vec<&Notification> = dash.visible_notifications().collect();
    if visible.iter().any(|n| !n.is_read) {
        lines.push("> read-all (mark all read)".to_string());
    }
    if visible.is_empty() {
        lines.push("No notifications found for the selected filter.".to_string());
    }
    for notification in visible {
        lines.extend(notification_lines(dash, notification));
    }
    lines
}

fn notification_lines(dash: &Dashboard, n: &Notification) -> Vec<String> {
    let marker = if n.is_read { ' ' } else { '*' };
    let mut lines = vec![
        format!(
            "{} {} [{}] {} ({})",
            marker,
            n.id,
            n.notification_type.as_str(),
            n.title,
            n.timestamp
        ),
        format!("    {}", n.message),
    ];
    if let Some(related) = &n.related_entity {
        let missing = if dash.related_entity_exists(n) { "" } else { " (not on board)" };
        lines.push(format!("    -> {}{}", related.name, missing));
    }
    if n.requires_action() {
        lines.push("    action required".to_string());
    }
    if !n.is_read {
        lines.push(format!("    > read {}", n.id));
    }
    lines
}

/// Full card for one notification
pub fn details(dash: &Dashboard, id: &str) -> pms_core::Result<Vec<String>> {
    let notification = dash.notifications().lookup(id)?;
    let mut lines = notification_lines(dash, notification);
    lines.insert(2, format!("    from {}", notification.source.label()));
    Ok(lines)
}

/// Switch to the tab holding the notification's related entity and show it.
///
/// Guest and system references, and targets no longer on the board, only
/// produce an informational toast.
pub fn goto(dash: &mut Dashboard, id: &str) -> pms_core::Result<Vec<Toast>> {
    let notification = dash.notifications().lookup(id)?.clone();
    let Some(related) = &notification.related_entity else {
        return Ok(vec![Toast::Info(format!("Notification {} has no linked item", id))]);
    };

    let tab = match related.kind {
        RelatedKind::Room => Tab::Rooms,
        RelatedKind::Task => Tab::Tasks,
        RelatedKind::Guest | RelatedKind::System => {
            return Ok(vec![Toast::Info(format!(
                "{} {} is not on the board",
                related.kind.label(),
                related.name
            ))]);
        }
    };
    if !dash.related_entity_exists(&notification) {
        return Ok(vec![Toast::Info(format!("{} is not on the board", related.name))]);
    }

    dash.set_active_tab(tab.id())?;
    let lines = match tab {
        Tab::Rooms => super::rooms::details(dash, &related.id)?,
        _ => super::tasks::details(dash, &related.id)?,
    };
    Ok(vec![
        Toast::Success(format!("Navigating to {}", related.name)),
        Toast::Info(lines.join("\n")),
    ])
}

pub fn mark_read(dash: &mut Dashboard, id: &str) -> Toast {
    match dash.notifications_mut().mark_read(id) {
        Ok(_) => Toast::Success("Notification marked as read".to_string()),
        Err(e) => Toast::from_error(e),
    }
}

pub fn mark_all_read(dash: &mut Dashboard) -> Toast {
    match dash.notifications_mut().mark_all_read() {
        Ok(_) => Toast::Success("All notifications marked as read".to_string()),
        Err(e) => Toast::from_error(e),
    }
}
