//! Profile completeness - the derived flag gating dashboard access.

use crate::Identity;

/// Whether `identity` has everything the dashboard requires.
///
/// Complete means a non-blank bio, an avatar, and a links map. The flag is
/// never stored; call this after every sign-in and every profile write.
pub fn is_profile_complete(identity: &Identity) -> bool {
    let has_bio = identity
        .bio
        .as_deref()
        .is_some_and(|bio| !bio.trim().is_empty());

    has_bio && identity.avatar.is_some() && identity.links.is_some()
}
