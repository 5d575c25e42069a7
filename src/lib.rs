//! # Anagrafe
//!
//! `anagrafe` is a small account registry: it exposes registration and login
//! over HTTP and stores one record per email address.
//!
//! ## Accounts
//!
//! An account is `{name, email, password_hash, age, address}`. The email is
//! globally unique, enforced by a unique index in the store rather than by
//! application-level locking. Accounts are created once and never updated or
//! deleted.
//!
//! ## Credentials
//!
//! Passwords are hashed with Argon2id (random salt, PHC-format output) before
//! they reach the store; the plaintext is never persisted. Login failures are
//! indistinguishable between "no such email" and "wrong password" to prevent
//! account enumeration.

pub mod anagrafe;
pub mod cli;

#[cfg(test)]
mod tests {
    #[test]
    fn test_pkg_name() {
        assert_eq!(env!("CARGO_PKG_NAME"), "anagrafe");
    }
}
