mod error;
mod frame;
mod sync;

pub use error::LinkError;
pub use frame::Frame;
#[doc(inline)]
pub use sync::*;
