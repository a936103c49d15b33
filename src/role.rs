//! Caller roles and the document view rule.

use std::fmt;

use crate::documents::{DocumentStatus, ResourceItem};

/// Role of the user viewing the page, as carried by `data-user-role`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    DepartmentHead,
    Supervisor,
    Reviewer,
    CommissionMember,
    Student,
    Guest,
    /// A role string this crate does not know. Treated like a guest.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "admin" => Self::Admin,
            "department_head" => Self::DepartmentHead,
            "supervisor" => Self::Supervisor,
            "reviewer" => Self::Reviewer,
            "commission_member" => Self::CommissionMember,
            "student" => Self::Student,
            "guest" | "" => Self::Guest,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::DepartmentHead => "department_head",
            Self::Supervisor => "supervisor",
            Self::Reviewer => "reviewer",
            Self::CommissionMember => "commission_member",
            Self::Student => "student",
            Self::Guest => "guest",
            Self::Other(raw) => raw,
        }
    }

    /// Staff roles may open any document regardless of its status.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::DepartmentHead | Self::Supervisor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `role` gets a "view" action for `item`.
#[must_use]
pub fn can_view(role: &Role, item: &ResourceItem) -> bool {
    role.is_staff() || item.status == DocumentStatus::Approved
}

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;
