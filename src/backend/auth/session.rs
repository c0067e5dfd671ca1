//! Session data as observed by the shell.

use crate::utils::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMembership {
    #[serde(default)]
    pub is_owner: bool,
    pub organization: Option<Organization>,
}

/// GraphQL connection wrapper (`{ nodes: [...] }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// The signed-in user.
///
/// The server may describe admin rights as a `role` string or as a legacy
/// `isAdmin` flag; both decode into [`UserRole`], with `role` taking
/// precedence when both are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawUser")]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    pub organization_memberships: Connection<OrganizationMembership>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    id: String,
    username: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    role: Option<UserRole>,
    #[serde(default)]
    is_admin: Option<bool>,
    #[serde(default)]
    is_verified: bool,
    #[serde(default)]
    organization_memberships: Connection<OrganizationMembership>,
}

impl From<RawUser> for CurrentUser {
    fn from(raw: RawUser) -> Self {
        let role = raw.role.unwrap_or(match raw.is_admin {
            Some(true) => UserRole::Admin,
            _ => UserRole::User,
        });

        Self {
            id: raw.id,
            username: raw.username,
            name: raw.name,
            avatar_url: raw.avatar_url,
            role,
            is_verified: raw.is_verified,
            organization_memberships: raw.organization_memberships,
        }
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Name shown in menus; falls back to the username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }

    /// Single-letter avatar placeholder, taken from [`Self::display_name`].
    pub fn initial(&self) -> char {
        self.display_name().chars().next().unwrap_or('?')
    }

    pub fn organizations(&self) -> impl Iterator<Item = (&Organization, bool)> {
        self.organization_memberships
            .nodes
            .iter()
            .filter_map(|m| m.organization.as_ref().map(|o| (o, m.is_owner)))
    }
}

/// Error attached to a session query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&Error> for QueryError {
    fn from(err: &Error) -> Self {
        Self::new(err.message())
    }
}

impl From<Error> for QueryError {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

/// Data every page query carries for the layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedData {
    pub current_user: Option<CurrentUser>,
}

/// Query result as delivered by the session cache.
///
/// `data: None` means nothing has been loaded yet; `Some` with no
/// `current_user` is the server saying nobody is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionQuery {
    pub data: Option<SharedData>,
    pub loading: bool,
    pub error: Option<QueryError>,
}

impl Default for SessionQuery {
    fn default() -> Self {
        Self::pending()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    Unknown,
    Authenticated(&'a CurrentUser),
    Anonymous,
}

impl SessionQuery {
    /// Nothing loaded, fetch in flight.
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            data: Some(SharedData {
                current_user: Some(user),
            }),
            loading: false,
            error: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            data: Some(SharedData { current_user: None }),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: impl Into<QueryError>) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error.into()),
        }
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.data.as_ref().and_then(|d| d.current_user.as_ref())
    }

    /// Known user, known absence, or nothing loaded yet.
    pub fn state(&self) -> SessionState<'_> {
        match &self.data {
            Some(SharedData {
                current_user: Some(user),
            }) => SessionState::Authenticated(user),
            Some(SharedData { current_user: None }) => SessionState::Anonymous,
            None => SessionState::Unknown,
        }
    }
}
