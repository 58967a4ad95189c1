//! Caller identity supplied by the upstream authenticator.

use axum::{extract::FromRequestParts, http::request::Parts};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::ActiveEnum;

use crate::server::{
    error::{auth::AuthError, Error},
    util::status::parse_status,
};

/// Header carrying the authenticated user ID
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the authenticated user's role (Admin, Volunteer or User)
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Immutable `{user_id, role}` pair passed into every service operation.
///
/// Built once per request by the extractor below. Services never look the caller up
/// again, they only check the role against the operation's gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    user_id: i32,
    role: UserRole,
}

impl RequestContext {
    /// Context for an already authenticated caller
    pub fn new(user_id: i32, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// ID of the calling user
    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    /// Role of the calling user
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Fail with [`AuthError::Forbidden`] unless the caller holds one of `allowed`.
    pub fn require_role(&self, allowed: &[UserRole], action: &'static str) -> Result<(), Error> {
        if allowed.contains(&self.role) {
            return Ok(());
        }

        Err(AuthError::Forbidden {
            user_id: self.user_id,
            role: self.role.to_value(),
            action,
        }
        .into())
    }

    /// Like [`Self::require_role`], but the user owning the data always passes
    pub fn require_role_or_self(
        &self,
        allowed: &[UserRole],
        owner_user_id: i32,
        action: &'static str,
    ) -> Result<(), Error> {
        if self.user_id == owner_user_id {
            return Ok(());
        }

        self.require_role(allowed, action)
    }

    /// Only admins pass
    pub fn require_admin(&self, action: &'static str) -> Result<(), Error> {
        self.require_role(&[UserRole::Admin], action)
    }

    /// Admins and volunteers run the aid lifecycle
    pub fn require_staff(&self, action: &'static str) -> Result<(), Error> {
        self.require_role(&[UserRole::Admin, UserRole::Volunteer], action)
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, USER_ID_HEADER)?;
        let user_id = user_id
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidContext {
                header: USER_ID_HEADER,
                value: user_id.clone(),
            })?;

        let role = header_value(parts, USER_ROLE_HEADER)?;
        let role =
            parse_status::<UserRole>("role", &role).map_err(|_| AuthError::InvalidContext {
                header: USER_ROLE_HEADER,
                value: role.clone(),
            })?;

        Ok(Self::new(user_id, role))
    }
}

fn header_value(parts: &Parts, header: &'static str) -> Result<String, AuthError> {
    let value = parts
        .headers
        .get(header)
        .ok_or(AuthError::MissingContext(header))?;

    value
        .to_str()
        .map(str::to_string)
        .map_err(|_| AuthError::InvalidContext {
            header,
            value: String::from_utf8_lossy(value.as_bytes()).to_string(),
        })
}
