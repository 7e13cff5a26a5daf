pub mod api_utils;
pub mod form;
pub mod modal;
pub mod request_sequence;
pub mod results;
