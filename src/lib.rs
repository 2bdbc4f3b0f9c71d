#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::{
    ast::ast::TreeNode,
    errors::errors::Error,
    lexer::lexer::{scan, ScanResult},
    parser::parser::build,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into the source, or token index once the categories are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

static TRACING_INIT: Once = Once::new();

/// Installs the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set, e.g. `RUST_LOG=toyfront=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Output of a full run over one source string.
#[derive(Debug)]
pub struct Analysis {
    pub scan: ScanResult,
    pub tree: Result<TreeNode, Error>,
}

/// Scans `source`, flattens the buckets in category order and builds the tree.
pub fn analyze(source: &str) -> Analysis {
    let scan = scan(source);
    let tokens = scan.buckets.flatten();
    let tree = build(&tokens);

    Analysis { scan, tree }
}
