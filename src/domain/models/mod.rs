mod booking;
mod connection;
mod customer;
mod event;
mod movie;
mod notification;
mod payment;
mod seat;
mod session;
mod transport;

pub use booking::*;
pub use connection::*;
pub use customer::*;
pub use event::*;
pub use movie::*;
pub use notification::*;
pub use payment::*;
pub use seat::*;
pub use session::*;
pub use transport::*;
