/// Outcome of an app-level sync against the generic authenticated store.
///
/// Transport errors are collapsed here at the call boundary: only the
/// 401 case is distinguished, because it clears the cached credential and
/// requires the user to re-authenticate. There is no retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The snapshot was pushed (or pulled) successfully.
    Synced,
    /// No credential is cached; sync was not attempted.
    NoCredential,
    /// The store rejected the credential; it has been cleared and the user
    /// must re-authenticate before the next attempt.
    NeedsReauth,
    /// Any other failure: network error, non-success status, malformed payload.
    Failed,
}
