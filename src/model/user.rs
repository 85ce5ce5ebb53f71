use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Type-safe identifier for Users.
///
/// Serialized as a bare integer, issued from 1 upward and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text that is not a plain run of ASCII digits fitting in a `u64`.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid user id: {0:?}")]
pub struct InvalidUserId(pub String);

impl FromStr for UserId {
    type Err = InvalidUserId;

    /// Accepts digits only; `u64::from_str` alone would also take a leading `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidUserId(s.to_string()));
        }
        s.parse()
            .map(Self)
            .map_err(|_| InvalidUserId(s.to_string()))
    }
}

/// One directory record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new user.
///
/// Both fields are required; `None` or an empty string is rejected by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCreate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Payload for updating an existing user. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Sample records loaded at startup, in creation order.
pub const DEFAULT_USERS: [(&str, &str); 3] = [
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Charlie", "charlie@example.com"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_to_flat_json() {
        let user = User {
            id: UserId(7),
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Ada", "email": "ada@example.com"})
        );
    }

    #[test]
    fn user_id_parses_only_plain_integers() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId(42));
        assert!("abc".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
        assert_eq!("+5".parse::<UserId>(), Err(InvalidUserId("+5".into())));
        assert!(" 5".parse::<UserId>().is_err());
        assert!("18446744073709551616".parse::<UserId>().is_err());
    }
}
