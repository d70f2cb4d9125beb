pub mod attachment;
pub mod draft;
pub mod notification;
pub mod request;
