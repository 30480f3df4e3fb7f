//! Authentication primitives: Argon2id password hashing and JWT
//! access-token issuance/validation.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtCodec};
pub use password::PasswordHasher;
