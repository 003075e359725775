pub mod landing_stats;
pub mod waitlist_submission;
