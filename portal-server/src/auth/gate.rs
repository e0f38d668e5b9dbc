//! Access-Control Gate
//!
//! 每个页面渲染主体前都要过一次门禁。策略表是静态的：管理页要求
//! `Role::Admin`，其余页面只要求会话已解析。结果不缓存，每次请求
//! 重新判定。

use serde::Serialize;

use shared::UserProfile;

/// 门户页面标识
///
/// Serialized as the page name the frontend routes on
/// (e.g. `"ManageEmployees"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageId {
    Dashboard,
    Updates,
    ManageEmployees,
    ManageAttendance,
    ManagePerformance,
    ManageIncentives,
    ManageUpdates,
    SendNotification,
    MyPerformance,
    MyAttendance,
    MyIncentives,
}

impl PageId {
    pub const ALL: [PageId; 11] = [
        PageId::Dashboard,
        PageId::Updates,
        PageId::ManageEmployees,
        PageId::ManageAttendance,
        PageId::ManagePerformance,
        PageId::ManageIncentives,
        PageId::ManageUpdates,
        PageId::SendNotification,
        PageId::MyPerformance,
        PageId::MyAttendance,
        PageId::MyIncentives,
    ];

    /// 管理页集合：仅 HR Admin 可见
    pub fn is_admin_page(&self) -> bool {
        matches!(
            self,
            PageId::ManageEmployees
                | PageId::ManageAttendance
                | PageId::ManagePerformance
                | PageId::ManageIncentives
                | PageId::ManageUpdates
                | PageId::SendNotification
        )
    }
}

/// 门禁判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

impl Access {
    pub fn is_denied(&self) -> bool {
        matches!(self, Access::Deny)
    }
}

/// 页面访问判定
///
/// - 会话未解析 (`None`) ⇒ Deny
/// - 管理页且非 admin ⇒ Deny
/// - 其余 ⇒ Allow
///
/// Deny 的呈现方式是用固定提示替换页面主体，不重定向、不记日志
/// (见 [`crate::pages::PageView`])。
pub fn authorize(user: Option<&UserProfile>, page: PageId) -> Access {
    match user {
        None => Access::Deny,
        Some(profile) if page.is_admin_page() && !profile.role.is_admin() => Access::Deny,
        Some(_) => Access::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            email: "someone@corp.test".into(),
            full_name: "Someone".into(),
            role,
            employee_id: None,
            phone_number: None,
            job_title: None,
            department: None,
            hire_date: None,
            salary: None,
            address: None,
            profile_picture_url: None,
        }
    }

    #[test]
    fn employees_are_denied_every_admin_page() {
        let employee = profile(Role::Employee);
        for page in PageId::ALL.iter().filter(|p| p.is_admin_page()) {
            assert_eq!(authorize(Some(&employee), *page), Access::Deny, "{page:?}");
        }
    }

    #[test]
    fn admins_reach_every_page() {
        let admin = profile(Role::Admin);
        for page in PageId::ALL {
            assert_eq!(authorize(Some(&admin), page), Access::Allow, "{page:?}");
        }
    }

    #[test]
    fn employees_reach_non_admin_pages() {
        let employee = profile(Role::Employee);
        for page in PageId::ALL.iter().filter(|p| !p.is_admin_page()) {
            assert_eq!(authorize(Some(&employee), *page), Access::Allow, "{page:?}");
        }
    }

    #[test]
    fn unresolved_session_is_denied_everywhere() {
        for page in PageId::ALL {
            assert_eq!(authorize(None, page), Access::Deny, "{page:?}");
        }
    }
}
