pub mod completion;
pub mod message;
