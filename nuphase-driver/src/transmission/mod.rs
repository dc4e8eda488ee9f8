mod sender;
mod sync;

pub use sender::Sender;
pub use sync::SyncState;
