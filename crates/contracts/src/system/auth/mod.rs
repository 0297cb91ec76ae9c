use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserInfo,
}

/// The logged-in operator, stored JSON-serialized in localStorage under
/// the `user` key for the duration of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_round_trips() {
        let user = UserInfo {
            id: 3,
            nombre: "Ana".into(),
            apellido: "Rojas".into(),
            username: "arojas".into(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        let back: UserInfo = serde_json::from_str(&raw).unwrap();
        assert_eq!(user, back);
    }
}
