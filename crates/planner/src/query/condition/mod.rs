//! Compiles a [`Cond`] into the two fragments a caller splices into
//! `SELECT ... WHERE (and) [OR (or)]`.
//!
//! Every leaf is normalized, checked against the operator/type matrix and
//! rendered. The first invalid leaf aborts the whole compilation.
//!
//! Column names are trusted: they are quoted for the dialect but never
//! escaped, so they must be whitelisted upstream. Values are safe to splice
//! only because numeric ones are forced to base-10 literals and string ones
//! are quoted; prefer [`Compiler::compile_params`] where the execution layer
//! supports bound parameters.

use crate::query::{
    ast::predicate::Literal,
    dialect::Dialect,
    renderer::{RenderMode, Renderer},
};
use model::core::{
    condition::{Column, Cond},
    utils::join_bracketed,
};
use serde::Serialize;
use tracing::debug;

pub mod error;
pub mod normalize;
pub mod options;
pub mod plan;

pub use error::CompileError;
pub use options::{CompilerOptions, DialectKind, NotInKeyword, OrJoin};

/// The rendered AND group and OR group. `or` is empty when the tree has no
/// OR leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragments {
    pub and: String,
    pub or: String,
}

impl Fragments {
    /// `(and)` or `(and) OR (or)`, i.e. the body of a `WHERE` clause.
    pub fn where_clause(&self) -> String {
        where_clause(&self.and, &self.or)
    }
}

/// Fragments with placeholders in value positions, plus the values to bind
/// in placeholder order (AND group first, then OR group).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParamFragments {
    pub and: String,
    pub or: String,
    pub params: Vec<Literal>,
}

impl ParamFragments {
    pub fn where_clause(&self) -> String {
        where_clause(&self.and, &self.or)
    }
}

fn where_clause(and: &str, or: &str) -> String {
    if or.is_empty() {
        format!("({and})")
    } else {
        format!("({and}) OR ({or})")
    }
}

/// Compiles `cond` with the default options (MySQL quoting, inline values).
pub fn compile(cond: &Cond) -> Result<Fragments, CompileError> {
    Compiler::default().compile(cond)
}

/// Validates and renders a single leaf with the default options.
pub fn render_leaf(column: &Column) -> Result<String, CompileError> {
    Compiler::default().render_leaf(column)
}

pub struct Compiler {
    dialect: Box<dyn Dialect>,
    options: CompilerOptions,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompilerOptions::default())
    }
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            dialect: options.dialect.dialect(),
            options,
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn compile(&self, cond: &Cond) -> Result<Fragments, CompileError> {
        let (and, or, _) = self.render(cond, RenderMode::Inline)?;
        Ok(Fragments { and, or })
    }

    pub fn compile_params(&self, cond: &Cond) -> Result<ParamFragments, CompileError> {
        let (and, or, params) = self.render(cond, RenderMode::Params)?;
        Ok(ParamFragments { and, or, params })
    }

    pub fn render_leaf(&self, column: &Column) -> Result<String, CompileError> {
        let mut renderer = self.renderer(RenderMode::Inline);
        render_column(column, &mut renderer)
    }

    fn renderer(&self, mode: RenderMode) -> Renderer<'_> {
        Renderer::new(&*self.dialect, mode).with_not_in(self.options.not_in)
    }

    fn render(
        &self,
        cond: &Cond,
        mode: RenderMode,
    ) -> Result<(String, String, Vec<Literal>), CompileError> {
        let mut renderer = self.renderer(mode);

        let ands = render_group(&cond.and, &mut renderer)?;
        if ands.is_empty() {
            return Err(CompileError::MissingRequired);
        }
        let ors = render_group(&cond.or, &mut renderer)?;

        let and = join_bracketed(&ands, " AND ", ["", ""]);
        let or = join_bracketed(&ors, self.options.or_join.separator(), ["", ""]);
        let (_, params) = renderer.finish();

        debug!(
            dialect = %self.dialect.name(),
            and_leaves = ands.len(),
            or_leaves = ors.len(),
            params = params.len(),
            "compiled condition tree"
        );

        Ok((and, or, params))
    }
}

fn render_group(columns: &[Column], r: &mut Renderer) -> Result<Vec<String>, CompileError> {
    columns.iter().map(|column| render_column(column, r)).collect()
}

fn render_column(column: &Column, r: &mut Renderer) -> Result<String, CompileError> {
    let predicate = plan::plan_leaf(column)?;
    let fragment = r.fragment(&predicate);
    debug!(col = %column.col, oper = %column.oper, %fragment, "rendered condition");
    Ok(fragment)
}
