pub mod service_info;
pub mod waitlist;
