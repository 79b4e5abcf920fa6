use serde::{Deserialize, Serialize};

/// Ranked user roles, highest privilege first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::User];

    /// Roles an actor holding `self` may assign to other users.
    pub fn assignable(self) -> &'static [Role] {
        match self {
            Role::Admin => &[Role::Admin, Role::Manager, Role::User],
            Role::Manager => &[Role::Manager, Role::User],
            Role::User => &[Role::User],
        }
    }

    pub fn may_assign(self, other: Role) -> bool {
        self.assignable().contains(&other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::User => "User",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::User => "User",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::Admin => "Full system access",
            Role::Manager => "Manage users",
            Role::User => "Basic access",
        }
    }

    pub fn permission_description(self) -> &'static str {
        match self {
            Role::Admin => "Can manage all users and settings.",
            Role::Manager => "Can manage users and view reports.",
            Role::User => "Standard user permissions.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Role::Admin => "admin_panel_settings",
            Role::Manager => "supervisor_account",
            Role::User => "person",
        }
    }
}

/// One entry in the role selector, annotated for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleOption {
    pub value: Role,
    pub label: &'static str,
    pub description: &'static str,
    pub permission_description: &'static str,
    pub icon: &'static str,
}

impl RoleOption {
    fn for_role(role: Role) -> Self {
        RoleOption {
            value: role,
            label: role.label(),
            description: role.description(),
            permission_description: role.permission_description(),
            icon: role.icon(),
        }
    }
}

/// Selectable role options for an actor. Roles outside the actor's
/// hierarchy allowance are omitted.
pub fn options_for(actor: Role) -> Vec<RoleOption> {
    Role::ALL
        .iter()
        .copied()
        .filter(|r| actor.may_assign(*r))
        .map(RoleOption::for_role)
        .collect()
}

/// Startup check on the hierarchy table: every role must have a non-empty
/// assignable set that includes the role itself.
pub fn verify_hierarchy() -> Result<(), String> {
    for role in Role::ALL {
        let allowed = role.assignable();
        if allowed.is_empty() {
            return Err(format!("role {} has no assignable roles", role.as_str()));
        }
        if !allowed.contains(&role) {
            return Err(format!("role {} cannot assign itself", role.as_str()));
        }
    }
    Ok(())
}
