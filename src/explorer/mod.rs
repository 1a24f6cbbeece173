pub mod commands;
pub mod context;
pub mod error;
pub mod guard;
pub mod input;
pub mod nav;
pub mod ops;
pub mod parser;
pub mod path;
pub mod shell;
pub mod walker;
