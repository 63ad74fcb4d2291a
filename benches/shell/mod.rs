pub mod dispatch;
pub mod input;
