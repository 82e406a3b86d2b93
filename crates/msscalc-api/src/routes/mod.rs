pub mod compute;
pub mod health;
pub mod percentile;
