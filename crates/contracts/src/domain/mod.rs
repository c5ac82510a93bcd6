pub mod a001_activity;
pub mod a002_booking;
pub mod a003_user;
pub mod a004_payment;
pub mod a005_setting;
pub mod a006_blog_post;
pub mod a007_media_file;
pub mod a008_audit_log;
