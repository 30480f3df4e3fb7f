//! Per-request caller identity threaded through the service layer.

use uuid::Uuid;

use courtyard_entity::user::UserRole;

/// Identity of the authenticated caller, extracted from the access
/// token by the API layer.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Authenticated user ID.
    pub user_id: Uuid,
    /// Role at token-issuance time.
    pub role: UserRole,
    /// Username for logging.
    pub username: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, username: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            username: username.into(),
        }
    }

    /// Whether the caller holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
