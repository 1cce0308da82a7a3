//! Header: title, clock, tab bar and stat counters

use pms_core::Dashboard;

use crate::state::AppState;

pub fn render(state: &AppState) -> Vec<String> {
    let dash = &state.dashboard;
    vec![
        format!(
            "PMS Staff | {} | {} Live",
            state.date_text(),
            state.clock_text()
        ),
        tab_bar(dash),
        stats_line(dash),
    ]
}

fn tab_bar(dash: &Dashboard) -> String {
    dash.tabs()
        .into_iter()
        .map(|info| {
            let label = match info.badge {
                Some(count) => format!("{} ({})", info.name, count),
                None => info.name.to_string(),
            };
            if info.active {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn stats_line(dash: &Dashboard) -> String {
    let counts = dash.counts();
    format!(
        "Pending Tasks: {} | Completed Today: {} | Urgent Items: {}",
        counts.pending, counts.completed_today, counts.urgent
    )
}
