use serde::{Deserialize, Serialize};

/// Capability resolved once per session from the role password. Handlers
/// receive the role, never the raw password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Admin,
    KitchenStaff,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::KitchenStaff => "kitchen_staff",
        };
        write!(f, "{s}")
    }
}

/// JWT claims for a staff session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

/// A verified staff session, extracted from the Authorization header.
#[derive(Debug, Clone, Copy)]
pub struct StaffSession {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}
