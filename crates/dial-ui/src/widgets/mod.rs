pub mod body;
pub mod hands;
