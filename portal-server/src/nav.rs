//! Navigation Composer
//!
//! Builds the sidebar menu for the current role by concatenating static
//! item sets. Order is the displayed order and is never resorted.

use serde::Serialize;

use shared::Role;

use crate::auth::PageId;

/// One sidebar entry. `icon` is the frontend's icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub target: PageId,
    pub icon: &'static str,
}

const fn item(title: &'static str, target: PageId, icon: &'static str) -> NavItem {
    NavItem {
        title,
        target,
        icon,
    }
}

/// Items every role starts from.
const COMMON_NAV: &[NavItem] = &[
    item("Dashboard", PageId::Dashboard, "layout-dashboard"),
    item("Updates", PageId::Updates, "megaphone"),
];

/// Admin-only items, in display order.
const ADMIN_NAV: &[NavItem] = &[
    item("Manage Employees", PageId::ManageEmployees, "users"),
    item("Daily Attendance", PageId::ManageAttendance, "calendar"),
    item("Log Performance", PageId::ManagePerformance, "clipboard-list"),
    item("Incentives & Bonus", PageId::ManageIncentives, "award"),
    item("Send Notification", PageId::SendNotification, "mail"),
    item("Post Update", PageId::ManageUpdates, "megaphone"),
];

/// Employee self-service items, in display order.
const EMPLOYEE_NAV: &[NavItem] = &[
    item("My Performance", PageId::MyPerformance, "bar-chart"),
    item("My Attendance", PageId::MyAttendance, "calendar"),
    item("My Incentives", PageId::MyIncentives, "award"),
];

/// Menu for `role`.
///
/// Admins see the common set minus "Updates" (they post updates instead
/// of acknowledging them), then the admin set. Employees see the common
/// set — it carries no admin dashboard link to strip — then the
/// self-service set.
pub fn build_menu(role: Role) -> Vec<NavItem> {
    match role {
        Role::Admin => COMMON_NAV
            .iter()
            .filter(|entry| entry.title != "Updates")
            .chain(ADMIN_NAV)
            .copied()
            .collect(),
        Role::Employee => COMMON_NAV.iter().chain(EMPLOYEE_NAV).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_menu_has_every_admin_item_exactly_once() {
        let menu = build_menu(Role::Admin);
        for entry in ADMIN_NAV {
            assert_eq!(
                menu.iter().filter(|m| m.target == entry.target).count(),
                1,
                "{}",
                entry.title
            );
        }
    }

    #[test]
    fn admin_menu_excludes_updates() {
        let menu = build_menu(Role::Admin);
        assert!(menu.iter().all(|m| m.title != "Updates"));
        assert!(menu.iter().all(|m| m.target != PageId::Updates));
    }

    #[test]
    fn menus_preserve_concatenation_order() {
        let admin: Vec<_> = build_menu(Role::Admin)
            .iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(
            admin,
            vec![
                "Dashboard",
                "Manage Employees",
                "Daily Attendance",
                "Log Performance",
                "Incentives & Bonus",
                "Send Notification",
                "Post Update",
            ]
        );

        let employee: Vec<_> = build_menu(Role::Employee)
            .iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(
            employee,
            vec![
                "Dashboard",
                "Updates",
                "My Performance",
                "My Attendance",
                "My Incentives",
            ]
        );
    }
}
