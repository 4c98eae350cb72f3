use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account
    SignUp {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        repeat_password: String,
    },

    /// Sign in and show where the account lands
    SignIn {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Sign in, then submit the profile form
    Profile {
        #[command(flatten)]
        credentials: Credentials,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Sign in, then load the dashboard
    Dashboard {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Restore the current session and show the routed screen
    Session,
}

#[derive(Args, Debug, Clone)]
pub struct Credentials {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,
}

/// Profile fields; anything omitted keeps its stored value.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// New username
    #[arg(long)]
    pub new_username: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    /// URI of the picked avatar image
    #[arg(long)]
    pub avatar_uri: Option<String>,

    /// MIME type of the avatar image
    #[arg(long, default_value = "image/jpeg")]
    pub avatar_type: String,

    /// Profile link as provider=url (repeatable)
    #[arg(long = "link", value_parser = parse_link)]
    pub links: Vec<(String, String)>,
}

/// Parse a `provider=url` pair
pub fn parse_link(s: &str) -> Result<(String, String), String> {
    let (provider, url) = s
        .split_once('=')
        .ok_or_else(|| format!("expected provider=url, got '{s}'"))?;

    let provider = provider.trim();
    if provider.is_empty() {
        return Err(format!("missing provider in '{s}'"));
    }

    Ok((provider.to_lowercase(), url.trim().to_string()))
}
