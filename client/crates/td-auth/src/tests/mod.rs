mod navigation;
mod password;

use crate::{AuthMachine, hash_password};

use td_core::{Avatar, Identity, ProfileLinks};
use td_remote::MockRemote;

use std::sync::Arc;

use uuid::Uuid;

pub(crate) const PASSWORD: &str = "secret1";

pub(crate) fn machine() -> (Arc<MockRemote>, AuthMachine) {
    let remote = Arc::new(MockRemote::new());
    let machine = AuthMachine::new(remote.clone());
    (remote, machine)
}

/// Seed a user whose password is `PASSWORD`
pub(crate) async fn seed(remote: &MockRemote, username: &str, complete: bool) -> Identity {
    let id = Uuid::new_v4();
    let mut identity = Identity::new(id, username.to_string(), Some(format!("{username}@b.com")));

    if complete {
        let mut links = ProfileLinks::new();
        links.insert("website", "https://example.com");
        identity.bio = Some("Builds things".into());
        identity.avatar = Some(Avatar::picked(id, "file:///avatar.jpg", 1_704_067_200_000));
        identity.links = Some(links);
    }

    remote
        .seed_identity(identity.clone(), hash_password(PASSWORD).unwrap())
        .await;
    identity
}
