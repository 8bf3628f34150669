//! Role names as stored in user documents and JWT claims.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
