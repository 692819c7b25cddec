mod channel;
mod checkout;
mod notifications;
mod session;

pub use channel::*;
pub use checkout::*;
pub use notifications::*;
pub use session::*;
