//! Compiles typed condition trees into SQL `WHERE` fragments.

pub mod query;

pub use query::condition::{
    CompileError, Compiler, Fragments, ParamFragments, compile, render_leaf,
};
