//! View model bindings for the text console
//!
//! Each submodule renders one area of the screen and turns operator
//! commands into store operations, answering with toast-style feedback.

mod header;
mod notifications;
mod rooms;
mod tasks;

use pms_core::{QuickAction, Tab};

use crate::commands::{Command, HELP};
use crate::state::AppState;

/// One feedback line, the console's equivalent of a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Info(String),
    /// Emergency broadcast went out
    Alert(String),
    Error(String),
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Toast::Success(msg) => write!(f, "[ok] {}", msg),
            Toast::Info(msg) => write!(f, "[..] {}", msg),
            Toast::Alert(msg) => write!(f, "[!!] {}", msg),
            Toast::Error(msg) => write!(f, "[error] {}", msg),
        }
    }
}

impl Toast {
    pub(crate) fn from_error(e: pms_core::Error) -> Self {
        Toast::Error(e.to_string())
    }
}

/// What the console should do after a command
#[derive(Debug, Default)]
pub struct Response {
    pub toasts: Vec<Toast>,
    pub redraw: bool,
}

impl Response {
    fn toast(toast: Toast) -> Self {
        let redraw = !matches!(toast, Toast::Error(_));
        Self {
            toasts: vec![toast],
            redraw,
        }
    }

    fn redraw() -> Self {
        Self {
            toasts: Vec::new(),
            redraw: true,
        }
    }
}

/// Full screen: header, then the active tab's list
pub fn render(state: &AppState) -> Vec<String> {
    let mut lines = header::render(state);
    lines.push(String::new());
    lines.extend(match state.dashboard.active_tab() {
        Tab::Tasks => tasks::render(&state.dashboard),
        Tab::Rooms => rooms::render(&state.dashboard),
        Tab::Notifications => notifications::render(&state.dashboard),
    });
    lines
}

pub fn handle(state: &mut AppState, command: Command) -> Response {
    let dash = &mut state.dashboard;
    match command {
        Command::Tab(id) => match dash.set_active_tab(&id) {
            Ok(_) => Response::redraw(),
            Err(e) => Response::toast(Toast::from_error(e)),
        },
        Command::Filter(name) => {
            let tab = dash.active_tab();
            match dash.set_filter(tab, &name) {
                Ok(()) => Response::redraw(),
                Err(e) => Response::toast(Toast::from_error(e)),
            }
        }
        Command::List => Response::redraw(),
        Command::Counts => Response::toast(Toast::Info(header::stats_line(dash))),
        Command::Show(id) => {
            let card = match dash.active_tab() {
                Tab::Tasks => tasks::details(dash, &id),
                Tab::Rooms => rooms::details(dash, &id),
                Tab::Notifications => notifications::details(dash, &id),
            };
            match card {
                Ok(lines) => Response {
                    toasts: vec![Toast::Info(lines.join("\n"))],
                    redraw: false,
                },
                Err(e) => Response::toast(Toast::from_error(e)),
            }
        }
        Command::Goto(id) => match notifications::goto(dash, &id) {
            Ok(toasts) => Response {
                toasts,
                redraw: false,
            },
            Err(e) => Response::toast(Toast::from_error(e)),
        },
        Command::Start(id) => Response::toast(tasks::start(dash, &id)),
        Command::Complete(id) => Response::toast(tasks::complete(dash, &id)),
        Command::RoomStatus { room, status } => {
            Response::toast(rooms::set_status(dash, &room, &status))
        }
        Command::Clean(room) => Response::toast(rooms::advance_housekeeping(dash, &room)),
        Command::Issue { room, text } => Response::toast(rooms::report_issue(dash, &room, text)),
        Command::Resolve(room) => Response::toast(rooms::resolve_issues(dash, &room)),
        Command::Read(id) => Response::toast(notifications::mark_read(dash, &id)),
        Command::ReadAll => Response::toast(notifications::mark_all_read(dash)),
        Command::Action { name, confirmed } => Response {
            toasts: vec![quick_action(&name, confirmed)],
            redraw: false,
        },
        Command::Save(path) => match dash.save(&path) {
            Ok(()) => Response {
                toasts: vec![Toast::Success(format!("Snapshot saved to {}", path.display()))],
                redraw: false,
            },
            Err(e) => Response::toast(Toast::from_error(e)),
        },
        Command::Help => Response {
            toasts: vec![Toast::Info(HELP.to_string())],
            redraw: false,
        },
        // The console loop exits before dispatching quit
        Command::Quit => Response::default(),
    }
}

fn quick_action(name: &str, confirmed: bool) -> Toast {
    let action = match name.parse::<QuickAction>() {
        Ok(action) => action,
        Err(e) => return Toast::from_error(e),
    };
    if action.is_emergency() && !confirmed {
        return Toast::Info(format!(
            "{} needs confirmation: `action {} confirm`",
            action.name(),
            action.id()
        ));
    }
    let message = action.dispatch().to_string();
    if action.is_emergency() {
        Toast::Alert(message)
    } else {
        Toast::Success(message)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::rc::Rc;

    use chrono::NaiveDate;
    use pms_core::{DashboardConfig, FixedClock};

    pub(crate) fn state() -> AppState {
        let clock = Rc::new(FixedClock(
            NaiveDate::from_ymd_opt(2025, 1, 16)
                .unwrap()
                .and_hms_opt(13, 50, 0)
                .unwrap(),
        ));
        AppState::with_clock(DashboardConfig::default(), clock).unwrap()
    }

    #[test]
    fn test_switch_tab_and_render() {
        let mut state = state();
        let response = handle(&mut state, Command::Tab("rooms".into()));
        assert!(response.redraw);
        let screen = render(&state).join("\n");
        assert!(screen.contains("Room 304"));
    }

    #[test]
    fn test_bad_tab_keeps_screen() {
        let mut state = state();
        let response = handle(&mut state, Command::Tab("reports".into()));
        assert!(!response.redraw);
        assert_eq!(response.toasts, vec![Toast::Error("Invalid tab: reports".into())]);
    }

    #[test]
    fn test_filter_applies_to_active_tab() {
        let mut state = state();
        handle(&mut state, Command::Filter("completed".into()));
        assert_eq!(state.dashboard.active_filter(Tab::Tasks), "completed");
        assert_eq!(state.dashboard.active_filter(Tab::Notifications), "unread");
    }

    #[test]
    fn test_show_uses_active_tab() {
        let mut state = state();
        let response = handle(&mut state, Command::Show("task-003".into()));
        assert!(matches!(&response.toasts[0], Toast::Info(card) if card.contains("Welcome Package Delivery")));

        let response = handle(&mut state, Command::Show("room-304".into()));
        assert_eq!(response.toasts, vec![Toast::Error("task not found: room-304".into())]);

        handle(&mut state, Command::Tab("rooms".into()));
        let response = handle(&mut state, Command::Show("room-304".into()));
        assert!(matches!(&response.toasts[0], Toast::Info(card) if card.starts_with("Room 304")));
    }

    #[test]
    fn test_goto_then_list_shows_target_tab() {
        let mut state = state();
        let response = handle(&mut state, Command::Goto("notif-003".into()));
        assert_eq!(response.toasts[0], Toast::Success("Navigating to Suite 508".into()));
        assert!(render(&state).join("\n").contains("Room 508"));
    }

    #[test]
    fn test_emergency_needs_confirmation() {
        assert!(matches!(quick_action("security_alert", false), Toast::Info(_)));
        assert_eq!(
            quick_action("security_alert", true),
            Toast::Alert("Security alert sent!".into())
        );
        assert_eq!(
            quick_action("scan_qr", false),
            Toast::Success("QR Scanner opened".into())
        );
        assert!(matches!(quick_action("fly", true), Toast::Error(_)));
    }

    #[test]
    fn test_quick_action_leaves_state_alone() {
        let mut state = state();
        let before = state.dashboard.snapshot();
        handle(
            &mut state,
            Command::Action {
                name: "maintenance_emergency".into(),
                confirmed: true,
            },
        );
        assert_eq!(state.dashboard.snapshot(), before);
    }

    #[test]
    fn test_save_snapshot() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("shift.json");
        let mut state = state();
        let response = handle(&mut state, Command::Save(path.clone()));
        assert!(matches!(response.toasts[0], Toast::Success(_)));
        assert!(path.exists());
    }
}
