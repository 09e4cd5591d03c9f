use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::{
    config::Config,
    models::auth::{Claims, Role},
};

pub struct AuthService;

impl AuthService {
    /// Resolve a staff role from the submitted password. Plaintext equality
    /// against the two configured role secrets; a mismatch resolves to Guest
    /// and the login route answers 401 (no lockout, no attempt log).
    pub fn resolve_role(config: &Config, password: &str) -> Role {
        if password == config.admin_password {
            Role::Admin
        } else if password == config.kitchen_password {
            Role::KitchenStaff
        } else {
            Role::Guest
        }
    }

    /// Issue a short-lived session token carrying the resolved role. The
    /// password itself never travels past the login handler.
    pub fn issue_session_token(config: &Config, role: Role) -> anyhow::Result<String> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            role,
            iat: now,
            exp: now + config.session_ttl_seconds as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".into(),
            port: 0,
            jwt_secret: "test-secret".into(),
            session_ttl_seconds: 60,
            sheets_api_base: String::new(),
            spreadsheet_id: String::new(),
            sheets_api_token: String::new(),
            menu_sheet: String::new(),
            feedback_sheet: String::new(),
            report_archive_sheet: String::new(),
            gemini_api_base: String::new(),
            gemini_api_key: String::new(),
            default_model: String::new(),
            admin_password: "admin-pass".into(),
            kitchen_password: "kitchen-pass".into(),
            upstream_timeout_seconds: 1,
        }
    }

    #[test]
    fn resolves_roles_by_password_equality() {
        let config = test_config();
        assert_eq!(AuthService::resolve_role(&config, "admin-pass"), Role::Admin);
        assert_eq!(
            AuthService::resolve_role(&config, "kitchen-pass"),
            Role::KitchenStaff
        );
        assert_eq!(AuthService::resolve_role(&config, "wrong"), Role::Guest);
        assert_eq!(AuthService::resolve_role(&config, ""), Role::Guest);
    }

    #[test]
    fn issued_token_decodes_to_same_role() {
        let config = test_config();
        let token = AuthService::issue_session_token(&config, Role::KitchenStaff).unwrap();
        let session =
            crate::middleware::auth::decode_session_token(&token, &config.jwt_secret).unwrap();
        assert_eq!(session.role, Role::KitchenStaff);
    }
}
