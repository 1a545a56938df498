//! RBAC API trait.

use pe_sdk::ClientError;

use crate::models::{NewRole, Role, User};

/// Roles and users of the RBAC service.
///
/// Every method returns the normalized [`ClientError`] of a failed call.
#[allow(clippy::missing_errors_doc)]
pub trait RbacApi: Send + Sync {
    fn roles(&self) -> Result<Vec<Role>, ClientError>;

    fn role(&self, id: u64) -> Result<Role, ClientError>;

    /// Create a role and return the `Location` of the new resource.
    ///
    /// The service answers `303 See Other`; no role body is returned.
    fn create_role(&self, role: &NewRole) -> Result<String, ClientError>;

    fn delete_role(&self, id: u64) -> Result<(), ClientError>;

    fn users(&self) -> Result<Vec<User>, ClientError>;

    /// `id` is the user's UUID.
    fn user(&self, id: &str) -> Result<User, ClientError>;
}
