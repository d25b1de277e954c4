//! Static credential table for the administrative principal.

use std::collections::HashMap;

use domain::{DomainResult, Password, ADMIN_PASSWORD, ADMIN_USERNAME};

/// Well-formed Argon2 hash that no password matches. Verified against when
/// the username is unknown so both rejection paths cost the same.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Username to password-hash table, fixed at construction.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    accounts: HashMap<String, Password>,
}

impl CredentialStore {
    /// Table holding only the built-in admin principal.
    pub fn admin() -> DomainResult<Self> {
        let mut accounts = HashMap::new();
        accounts.insert(ADMIN_USERNAME.to_string(), Password::new(ADMIN_PASSWORD)?);
        Ok(Self { accounts })
    }

    /// Check a username/password pair.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.accounts.get(username) {
            Some(stored) => stored.verify(password),
            None => {
                Password::from_hash(DUMMY_HASH).verify(password);
                false
            }
        }
    }
}
