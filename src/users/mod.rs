//! User creation split by responsibility: `validator` decides whether an email
//! is acceptable, `repository` stores users, `creator` wires the two together.

pub mod creator;
pub mod repository;
pub mod validator;

pub use creator::UserCreator;
pub use repository::{InMemoryUserRepository, SqliteUserRepository, UserRecord, UserRepository};
pub use validator::{EmailValidator, UserValidator};
