//! Account Repository
//!
//! Email/password sign-in accounts. Emails are stored lowercased.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::{Database, tables::ACCOUNTS};
use serde::{Deserialize, Serialize};
use shared::util::{new_record_id, now_millis};

/// Sign-in account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub created_at: i64,
}

impl Account {
    /// Check a password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        crate::auth::credentials::verify_password(password, &self.password_hash)
    }
}

#[derive(Debug, Clone, Serialize)]
struct AccountContent {
    email: String,
    password_hash: String,
    created_at: i64,
}

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Database) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, record::id(id) AS id FROM accounts WHERE email = $email")
            .bind(("email", email.trim().to_lowercase()))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Create an account with an already-hashed password
    pub async fn create(&self, email: &str, password_hash: String) -> RepoResult<Account> {
        let email = email.trim().to_lowercase();
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!("Account {} already exists", email)));
        }

        let id = new_record_id();
        self.base
            .db()
            .query("CREATE type::thing($table, $id) CONTENT $data RETURN NONE")
            .bind(("table", ACCOUNTS))
            .bind(("id", id))
            .bind((
                "data",
                AccountContent {
                    email: email.clone(),
                    password_hash,
                    created_at: now_millis(),
                },
            ))
            .await?
            .check()?;

        self.find_by_email(&email)
            .await?
            .ok_or_else(|| RepoError::Database(format!("Failed to create account {}", email)))
    }

    /// Replace the password hash of an existing account
    pub async fn set_password_hash(&self, id: &str, password_hash: String) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE type::thing($table, $id) MERGE { password_hash: $hash } RETURN NONE")
            .bind(("table", ACCOUNTS))
            .bind(("id", id.to_string()))
            .bind(("hash", password_hash))
            .await?
            .check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::hash_password;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_create_and_lookup_case_insensitive() {
        let service = DbService::memory().await.unwrap();
        let repo = AccountRepository::new(service.db);

        let hash = hash_password("rahasia123").unwrap();
        let account = repo.create("Admin@NakuByte.com", hash).await.unwrap();
        assert_eq!(account.email, "admin@nakubyte.com");
        assert_eq!(account.id.len(), 32);

        let found = repo.find_by_email("ADMIN@nakubyte.com").await.unwrap().unwrap();
        assert!(found.verify_password("rahasia123"));
        assert!(!found.verify_password("salah"));

        let dup = repo
            .create("admin@nakubyte.com", hash_password("x").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(dup, RepoError::Duplicate(_)));
    }
}
