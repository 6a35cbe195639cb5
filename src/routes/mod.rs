//! Route table shared by the router, the guard, and every redirect site.

pub mod guard;

use crate::net::types::Role;

/// Public landing page.
pub const HOME: &str = "/";
/// Login form.
pub const LOGIN: &str = "/login";
/// Student self-registration.
pub const REGISTER_STUDENT: &str = "/register/student";
/// Company self-registration.
pub const REGISTER_COMPANY: &str = "/register/company";
/// Administrator dashboard.
pub const ADMIN_HOME: &str = "/admin";
/// Area management screen.
pub const ADMIN_AREAS: &str = "/admin/areas";
/// Company dashboard.
pub const COMPANY_HOME: &str = "/company";
/// Job-offer creation form.
pub const COMPANY_NEW_OFFER: &str = "/company/new-offer";
/// Student dashboard.
pub const STUDENT_HOME: &str = "/student";
/// Student profile editor.
pub const STUDENT_PROFILE: &str = "/student/profile";

/// Home route for a role. Unrecognized or absent roles land on the public
/// page, so the mapping is total over everything the store can hold.
pub fn role_home(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => ADMIN_HOME,
        Some(Role::Company) => COMPANY_HOME,
        Some(Role::Student) => STUDENT_HOME,
        None => HOME,
    }
}
