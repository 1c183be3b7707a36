//! Authentication service - signup and login against the Store.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::domain::{institutional_email_message, is_institutional_email, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

/// Hash verified when the email is unknown, so both login failure paths
/// pay for one Argon2 verification.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::new("dummy-password-for-unknown-users")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn signup(&self, email: String, password: String) -> AppResult<User>;

    /// Check credentials; unknown email and wrong password fail identically
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService over any Store.
pub struct Authenticator {
    store: Arc<dyn Store>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Look a user up by email and password together.
    ///
    /// Returns `None` both when the email is unknown and when the password
    /// does not verify against the stored hash.
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let user = self.store.find_user(email).await?;

        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_HASH.clone()),
        };
        let password_valid = stored.verify(password);

        Ok(user.filter(|_| password_valid))
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn signup(&self, email: String, password: String) -> AppResult<User> {
        if !is_institutional_email(&email) {
            return Err(AppError::validation(institutional_email_message()));
        }

        // Length is checked before hashing
        let password = Password::new(&password)?;

        if self.store.find_user(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        // The store still rejects a duplicate that races past the check above
        let user = self.store.create_user(email, password.into_string()).await?;
        tracing::info!(email = %user.email, "user signed up");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<User> {
        let user = self
            .find_by_credentials(&email, &password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        tracing::info!(email = %user.email, "user logged in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockStore;

    fn stored_user(email: &str, plain: &str) -> User {
        User::new(
            email.to_string(),
            Password::new(plain).unwrap().into_string(),
        )
    }

    #[tokio::test]
    async fn test_signup_hashes_password() {
        let mut store = MockStore::new();
        store.expect_find_user().returning(|_| Ok(None));
        store
            .expect_create_user()
            .times(1)
            .returning(|email, hash| Ok(User::new(email, hash)));

        let auth = Authenticator::new(Arc::new(store));
        let user = auth
            .signup("a@kletech.ac.in".into(), "password123".into())
            .await
            .unwrap();

        assert_ne!(user.password_hash, "password123");
        assert!(Password::from_hash(user.password_hash).verify("password123"));
    }

    #[tokio::test]
    async fn test_signup_rejects_foreign_domain_before_touching_store() {
        let mut store = MockStore::new();
        store.expect_find_user().never();
        store.expect_create_user().never();

        let auth = Authenticator::new(Arc::new(store));
        let err = auth
            .signup("a@gmail.com".into(), "password123".into())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Email must end with @kletech.ac.in");
    }

    #[tokio::test]
    async fn test_signup_rejects_short_password() {
        let mut store = MockStore::new();
        store.expect_create_user().never();

        let auth = Authenticator::new(Arc::new(store));
        let err = auth
            .signup("a@kletech.ac.in".into(), "short".into())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Password must be at least 8 characters");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let mut store = MockStore::new();
        store
            .expect_find_user()
            .returning(|email| Ok(Some(User::new(email.to_string(), "hash".into()))));
        store.expect_create_user().never();

        let auth = Authenticator::new(Arc::new(store));
        let err = auth
            .signup("a@kletech.ac.in".into(), "password123".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), "User already exists");
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = stored_user("a@kletech.ac.in", "password123");
        let mut store = MockStore::new();
        store
            .expect_find_user()
            .returning(move |_| Ok(Some(user.clone())));

        let auth = Authenticator::new(Arc::new(store));
        let logged_in = auth
            .login("a@kletech.ac.in".into(), "password123".into())
            .await
            .unwrap();

        assert_eq!(logged_in.email, "a@kletech.ac.in");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let user = stored_user("a@kletech.ac.in", "password123");
        let mut store = MockStore::new();
        store.expect_find_user().returning(move |email| {
            Ok((email == "a@kletech.ac.in").then(|| user.clone()))
        });

        let auth = Authenticator::new(Arc::new(store));
        let wrong_password = auth
            .login("a@kletech.ac.in".into(), "not-the-password".into())
            .await
            .unwrap_err();
        let unknown_email = auth
            .login("b@kletech.ac.in".into(), "password123".into())
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }
}
