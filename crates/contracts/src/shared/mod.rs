pub mod api_response;
pub mod bulk;
pub mod record;
