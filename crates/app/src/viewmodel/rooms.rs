//! Room status board

use pms_core::{Dashboard, HousekeepingStatus, Room, RoomStatus, Tab};

use super::Toast;

pub fn render(dash: &Dashboard) -> Vec<String> {
    let active = dash.active_filter(Tab::Rooms);
    let mut bar = vec![if active == "all" {
        "[all]".to_string()
    } else {
        "all".to_string()
    }];
    for floor in dash.rooms().floors() {
        let name = floor.to_string();
        bar.push(if name == active { format!("[{}]", name) } else { name });
    }

    let mut lines = vec![format!("Floor: {}", bar.join(" "))];
    for room in dash.visible_rooms() {
        lines.extend(room_lines(room));
    }
    lines
}

fn room_lines(room: &Room) -> Vec<String> {
    let mut lines = vec![format!(
        "Room {} ({}, floor {})  {}",
        room.number,
        room.room_type.as_str(),
        room.floor,
        room.status.label()
    )];
    if let Some(guest) = &room.guest_name {
        let stay = match (room.check_in, room.check_out) {
            (Some(check_in), Some(check_out)) => format!(" {} to {}", check_in, check_out),
            _ => String::new(),
        };
        lines.push(format!("    guest: {}{}", guest, stay));
    }

    let mut housekeeping = format!("    housekeeping: {}", room.housekeeping_status.label());
    if let Some(last_cleaned) = &room.last_cleaned {
        housekeeping.push_str(&format!(" (last cleaned {})", last_cleaned));
    }
    lines.push(housekeeping);

    for issue in &room.maintenance_issues {
        lines.push(format!("    ! {}", issue));
    }
    if let Some(notes) = &room.notes {
        lines.push(format!("    note: {}", notes));
    }
    match room.housekeeping_status {
        HousekeepingStatus::Pending => lines.push(format!("    > clean {} (start cleaning)", room.id)),
        HousekeepingStatus::InProgress => lines.push(format!("    > clean {} (mark clean)", room.id)),
        HousekeepingStatus::Completed => {}
    }
    lines
}

/// Full card for one room
pub fn details(dash: &Dashboard, id: &str) -> pms_core::Result<Vec<String>> {
    dash.rooms().lookup(id).map(room_lines)
}

pub fn set_status(dash: &mut Dashboard, id: &str, status: &str) -> Toast {
    let status = match status.parse::<RoomStatus>() {
        Ok(status) => status,
        Err(e) => return Toast::from_error(e),
    };
    match dash.rooms_mut().set_status(id, status) {
        Ok(room) => Toast::Success(format!(
            "Room {} status updated to {}",
            room.number,
            room.status.as_str().replace('_', " ")
        )),
        Err(e) => Toast::from_error(e),
    }
}

pub fn advance_housekeeping(dash: &mut Dashboard, id: &str) -> Toast {
    match dash.rooms_mut().advance_housekeeping(id) {
        Ok(room) => Toast::Success(format!(
            "Room {} housekeeping marked as {}",
            room.number,
            room.housekeeping_status.as_str().replace('_', " ")
        )),
        Err(e) => Toast::from_error(e),
    }
}

pub fn report_issue(dash: &mut Dashboard, id: &str, issue: String) -> Toast {
    match dash.rooms_mut().report_issue(id, issue) {
        Ok(room) => Toast::Success(format!(
            "Room {} now has {} open issue(s)",
            room.number,
            room.maintenance_issues.len()
        )),
        Err(e) => Toast::from_error(e),
    }
}

pub fn resolve_issues(dash: &mut Dashboard, id: &str) -> Toast {
    match dash.rooms_mut().resolve_issues(id) {
        Ok(room) => Toast::Success(format!("Room {} issues resolved", room.number)),
        Err(e) => Toast::from_error(e),
    }
}
