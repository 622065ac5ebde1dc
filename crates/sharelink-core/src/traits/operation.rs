//! Remote operation abstraction.

use async_trait::async_trait;

use crate::envelope::RemoteOperationResult;
use crate::traits::session::SessionConnection;

/// A single remote operation executed once against a session.
///
/// Implementations build their request, hand it to the session, and fold
/// the outcome — including transport errors — into a
/// [`RemoteOperationResult`]. Executing an operation never panics and never
/// returns a bare error; every path ends in an envelope.
#[async_trait]
pub trait RemoteOperation: Send + Sync {
    /// Payload type carried by the envelope on success.
    type Output: Default + Send;

    /// Execute the operation against `session` and return its envelope.
    async fn execute(
        &self,
        session: &dyn SessionConnection,
    ) -> RemoteOperationResult<Self::Output>;
}
