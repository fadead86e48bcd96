use super::repository::UserRepository;
use super::validator::EmailValidator;
use crate::error::UserError;

/// Orchestrates user creation: validate, then persist. Validation and storage
/// are injected at construction and owned by the caller.
pub struct UserCreator<'a, V: ?Sized, R: ?Sized> {
    validator: &'a V,
    repository: &'a R,
}

impl<'a, V, R> UserCreator<'a, V, R>
where
    V: EmailValidator + ?Sized,
    R: UserRepository + ?Sized,
{
    pub fn new(validator: &'a V, repository: &'a R) -> Self {
        UserCreator {
            validator,
            repository,
        }
    }

    pub fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), UserError> {
        if !self.validator.validate_email(email) {
            tracing::debug!(username, "rejected user with invalid email");
            return Err(UserError::invalid_email(email));
        }

        self.repository.save_user(username, email, password)?;
        tracing::info!(username, "user created");
        Ok(())
    }
}
