pub mod booking_widget;
pub mod list;
