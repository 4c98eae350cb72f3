//! td-remote
//!
//! Boundary to the hosted data service: the `RemoteDataService` trait the
//! rest of the workspace depends on, and `RestClient`, its HTTP
//! implementation against a PostgREST-style API.

pub(crate) mod credential_record;
pub(crate) mod error;
#[cfg(feature = "mock")]
pub(crate) mod mock_remote;
pub(crate) mod new_identity;
pub(crate) mod profile_update;
pub(crate) mod remote_data_service;
pub(crate) mod rest_client;
pub(crate) mod session_file;

#[cfg(test)]
mod tests;

pub use credential_record::CredentialRecord;
pub use error::{RemoteError, Result as RemoteResult};
#[cfg(feature = "mock")]
pub use mock_remote::{MockRemote, Operation};
pub use new_identity::NewIdentity;
pub use profile_update::ProfileUpdate;
pub use remote_data_service::RemoteDataService;
pub use rest_client::RestClient;
pub use session_file::SESSION_FILENAME;
