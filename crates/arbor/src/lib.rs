use thiserror::Error;

pub mod algorithms;
pub mod tree;

pub use tree::{
    Tree,
    iter::Elements,
    node::{Node, NodeRef},
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("root already exists")]
    RootAlreadyExists,
    #[error("cannot {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },
}
