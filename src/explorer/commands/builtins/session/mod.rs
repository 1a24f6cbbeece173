pub mod exit;
pub mod help;
