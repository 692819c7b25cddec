pub mod gateway;
pub mod realtime;
