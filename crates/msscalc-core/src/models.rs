pub mod demographics;
pub mod derived;
pub mod inputs;
pub mod request;
pub mod result;
