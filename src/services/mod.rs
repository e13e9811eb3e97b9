// CloudNav services
// Services wrap the network transports: the generic authenticated store
// and the WebDAV-style remote-document backup.

pub mod store_sync;
pub mod webdav_backup;
