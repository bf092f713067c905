pub mod customize;
pub mod generate;
pub mod health;
