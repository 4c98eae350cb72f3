//! Input forms and the ordered rules that guard them.

use crate::validation::rule::{Rule, first_violation};
use crate::{
    Avatar, CoreError, ProfileLinks, Result as CoreResult, validate_email, validate_password,
};

/// Registration input.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

/// Sign-in input.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

/// Profile completion input.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub username: String,
    pub bio: String,
    pub avatar: Option<Avatar>,
    pub links: Option<ProfileLinks>,
}

pub const SIGN_UP_RULES: [Rule<SignUpForm>; 4] = [
    Rule::new(
        "all_fields_present",
        "All fields are required.",
        all_sign_up_fields_present,
    ),
    Rule::new("email_shape", "Invalid email address.", sign_up_email_valid),
    Rule::new(
        "password_length",
        "Password must be at least 6 characters long.",
        sign_up_password_long_enough,
    ),
    Rule::new(
        "passwords_match",
        "Passwords do not match.",
        sign_up_passwords_match,
    ),
];

pub const SIGN_IN_RULES: [Rule<SignInForm>; 1] = [Rule::new(
    "credentials_present",
    "Username and password are required.",
    sign_in_credentials_present,
)];

pub const PROFILE_RULES: [Rule<ProfileForm>; 1] = [Rule::new(
    "required_fields",
    "Please fill out all required fields.",
    profile_required_fields_present,
)];

fn all_sign_up_fields_present(form: &SignUpForm) -> bool {
    !form.username.is_empty()
        && !form.email.is_empty()
        && !form.password.is_empty()
        && !form.repeat_password.is_empty()
}

fn sign_up_email_valid(form: &SignUpForm) -> bool {
    validate_email(&form.email)
}

fn sign_up_password_long_enough(form: &SignUpForm) -> bool {
    validate_password(&form.password)
}

fn sign_up_passwords_match(form: &SignUpForm) -> bool {
    form.password == form.repeat_password
}

fn sign_in_credentials_present(form: &SignInForm) -> bool {
    !form.username.is_empty() && !form.password.is_empty()
}

fn profile_required_fields_present(form: &ProfileForm) -> bool {
    !form.username.trim().is_empty() && !form.bio.trim().is_empty()
}

impl SignUpForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        repeat_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            repeat_password: repeat_password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        check(&SIGN_UP_RULES, self)
    }
}

impl SignInForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        check(&SIGN_IN_RULES, self)
    }
}

impl ProfileForm {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        check(&PROFILE_RULES, self)
    }
}

#[track_caller]
fn check<F>(rules: &[Rule<F>], form: &F) -> CoreResult<()> {
    match first_violation(rules, form) {
        Some(failure) => Err(CoreError::validation(failure)),
        None => Ok(()),
    }
}
