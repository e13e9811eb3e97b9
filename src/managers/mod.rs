// CloudNav state managers
// Managers handle stateful operations: the authoritative record set and its
// observers, the local cache, and per-run category locks.

pub mod cache_manager;
pub mod lock_manager;
pub mod state_manager;
