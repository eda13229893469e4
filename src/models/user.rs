use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("User")
    }
}

/// Response body of `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    pub user: AuthenticatedUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name() {
        let user = AuthenticatedUser {
            id: "u1".to_string(),
            name: Some("Dana".to_string()),
            email: "dana@example.org".to_string(),
        };
        assert_eq!(user.display_name(), "Dana");
    }

    #[test]
    fn display_name_falls_back_without_name() {
        let user = AuthenticatedUser {
            id: "u1".to_string(),
            name: None,
            email: "dana@example.org".to_string(),
        };
        assert_eq!(user.display_name(), "User");
    }
}
