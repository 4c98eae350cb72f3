use crate::{Commands, Credentials, ProfileArgs, Report, Result as AppResult};

use td_auth::{AuthError, AuthMachine, AuthState, Navigator};
use td_config::SessionConfig;
use td_core::{Avatar, ProfileLinks, SignInForm, SignUpForm};
use td_dashboard::Dashboard;
use td_remote::RemoteDataService;

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};

const DASHBOARD_DISCARDED: &str = "Session changed while loading; dashboard discarded.";

/// One client run: an auth machine over a remote service.
pub struct App {
    remote: Arc<dyn RemoteDataService>,
    machine: Arc<AuthMachine>,
    session: SessionConfig,
}

impl App {
    pub fn new(remote: Arc<dyn RemoteDataService>, session: SessionConfig) -> Self {
        let machine = Arc::new(AuthMachine::new(remote.clone()));
        Self {
            remote,
            machine,
            session,
        }
    }

    pub fn machine(&self) -> &AuthMachine {
        &self.machine
    }

    /// Start following screen changes and restore any existing session
    pub async fn start(&self) -> AppResult<()> {
        let mut navigator = Navigator::new(self.machine.subscribe());
        debug!("Initial screen: {}", navigator.current());
        tokio::spawn(async move {
            while let Some(screen) = navigator.follow().await {
                info!("Screen: {screen}");
            }
        });

        if self.session.restore_on_startup {
            self.machine.initialize().await?;
        }
        Ok(())
    }

    /// Report for the current auth snapshot
    pub fn report(&self) -> Report {
        Report::from_snapshot(&self.machine.snapshot())
    }

    pub async fn run(&self, command: Commands) -> AppResult<Report> {
        match command {
            Commands::SignUp {
                username,
                email,
                password,
                repeat_password,
            } => {
                let form = SignUpForm::new(username, email, password, repeat_password);
                self.machine.sign_up(&form).await?;
                Ok(self.report())
            }
            Commands::SignIn { credentials } => {
                self.sign_in(&credentials).await?;
                Ok(self.report())
            }
            Commands::Profile {
                credentials,
                profile,
            } => {
                self.sign_in(&credentials).await?;
                self.submit_profile(profile).await?;
                Ok(self.report())
            }
            Commands::Dashboard { credentials } => {
                self.sign_in(&credentials).await?;
                self.dashboard().await
            }
            Commands::Session => {
                if !self.session.restore_on_startup {
                    self.machine.initialize().await?;
                }
                let report = self.report();
                Ok(match self.machine.current_identity() {
                    Some(identity) => {
                        report.with_body(format!("Signed in as {}\n", identity.display_name()))
                    }
                    None => report.with_body("No active session.\n"),
                })
            }
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> AppResult<AuthState> {
        let form = SignInForm::new(credentials.username.as_str(), credentials.password.as_str());
        Ok(self.machine.sign_in(&form).await?)
    }

    /// Prefill from the stored profile, overlay the given fields, submit
    async fn submit_profile(&self, args: ProfileArgs) -> AppResult<AuthState> {
        let mut form = self.machine.load_profile().await?;

        if let Some(username) = args.new_username {
            form.username = username;
        }
        if let Some(bio) = args.bio {
            form.bio = bio;
        }
        if let Some(uri) = args.avatar_uri {
            let identity_id = self
                .machine
                .current_identity()
                .map(|identity| identity.id)
                .ok_or_else(AuthError::not_signed_in)?;
            form.avatar = Some(
                Avatar::picked(identity_id, uri, Utc::now().timestamp_millis())
                    .with_mime_type(args.avatar_type),
            );
        }
        if !args.links.is_empty() {
            let links = form.links.get_or_insert_with(ProfileLinks::new);
            for (provider, url) in args.links {
                links.insert(provider, url);
            }
        }

        Ok(self.machine.complete_profile(&form).await?)
    }

    async fn dashboard(&self) -> AppResult<Report> {
        let dashboard = Dashboard::new(self.remote.clone(), self.machine.subscribe());

        match dashboard.load().await? {
            Some(data) => Ok(self.report().with_body(data.to_string())),
            None => Ok(self.report().with_message(DASHBOARD_DISCARDED)),
        }
    }
}
