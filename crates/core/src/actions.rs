//! Quick actions
//!
//! Scanning, photos, calls and alerts are handled by the device, not by this
//! crate. Dispatching one only logs it and returns the feedback line to show;
//! no task, room or notification changes.

use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    ScanQr,
    TakePhoto,
    CallManager,
    ReportIssue,
    Inventory,
    StaffDirectory,
    MaintenanceEmergency,
    SecurityAlert,
}

impl QuickAction {
    pub const ALL: [QuickAction; 8] = [
        QuickAction::ScanQr,
        QuickAction::TakePhoto,
        QuickAction::CallManager,
        QuickAction::ReportIssue,
        QuickAction::Inventory,
        QuickAction::StaffDirectory,
        QuickAction::MaintenanceEmergency,
        QuickAction::SecurityAlert,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuickAction::ScanQr => "scan_qr",
            QuickAction::TakePhoto => "take_photo",
            QuickAction::CallManager => "call_manager",
            QuickAction::ReportIssue => "report_issue",
            QuickAction::Inventory => "inventory",
            QuickAction::StaffDirectory => "staff_directory",
            QuickAction::MaintenanceEmergency => "maintenance_emergency",
            QuickAction::SecurityAlert => "security_alert",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuickAction::ScanQr => "Scan QR",
            QuickAction::TakePhoto => "Photo",
            QuickAction::CallManager => "Call Manager",
            QuickAction::ReportIssue => "Report Issue",
            QuickAction::Inventory => "Inventory",
            QuickAction::StaffDirectory => "Staff",
            QuickAction::MaintenanceEmergency => "Maintenance Emergency",
            QuickAction::SecurityAlert => "Security Alert",
        }
    }

    /// Emergency actions want a confirmation before dispatch
    pub fn is_emergency(&self) -> bool {
        matches!(
            self,
            QuickAction::MaintenanceEmergency | QuickAction::SecurityAlert
        )
    }

    /// Fire and forget. Returns the feedback message for the operator.
    pub fn dispatch(&self) -> &'static str {
        if self.is_emergency() {
            tracing::warn!(action = self.id(), "Emergency action dispatched");
        } else {
            tracing::info!(action = self.id(), "Quick action dispatched");
        }
        match self {
            QuickAction::ScanQr => "QR Scanner opened",
            QuickAction::TakePhoto => "Camera opened",
            QuickAction::CallManager => "Calling Manager...",
            QuickAction::ReportIssue => "Issue reporting form opened",
            QuickAction::Inventory => "Inventory system opened",
            QuickAction::StaffDirectory => "Staff directory opened",
            QuickAction::MaintenanceEmergency => "Emergency maintenance alert sent!",
            QuickAction::SecurityAlert => "Security alert sent!",
        }
    }
}

impl FromStr for QuickAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        for action in QuickAction::ALL {
            assert_eq!(action.id().parse::<QuickAction>().unwrap(), action);
        }
        assert!(matches!(
            "teleport".parse::<QuickAction>(),
            Err(Error::UnknownAction(_))
        ));
    }

    #[test]
    fn test_dispatch_feedback() {
        assert_eq!(QuickAction::ScanQr.dispatch(), "QR Scanner opened");
        assert!(QuickAction::SecurityAlert.is_emergency());
        assert!(!QuickAction::Inventory.is_emergency());
    }
}
