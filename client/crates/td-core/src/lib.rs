pub mod error;
pub mod models;
pub mod profile;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::avatar::Avatar;
pub use models::identity::Identity;
pub use models::notification::Notification;
pub use models::profile_links::ProfileLinks;
pub use models::project::Project;
pub use models::task::Task;
pub use profile::is_profile_complete;
pub use validation::forms::{ProfileForm, SignInForm, SignUpForm};
pub use validation::rule::Rule;
pub use validation::validation_failure::ValidationFailure;
pub use validation::{validate_email, validate_password};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[cfg(test)]
mod tests;
