//! Defines the core rendering trait and context for converting AST to SQL.

use crate::query::{ast::predicate::Literal, condition::options::NotInKeyword, dialect::Dialect};

pub mod predicate;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Whether values are spliced into the SQL text or bound as parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Inline,
    Params,
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Literal>,
    pub dialect: &'a dyn Dialect,
    pub mode: RenderMode,
    pub not_in: NotInKeyword,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, mode: RenderMode) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            mode,
            not_in: NotInKeyword::default(),
        }
    }

    pub fn with_not_in(mut self, not_in: NotInKeyword) -> Self {
        self.not_in = not_in;
        self
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Literal>) {
        (self.sql, self.params)
    }

    /// Renders `node` on its own and returns just its SQL. Parameters keep
    /// accumulating, so placeholder numbering continues across fragments.
    pub fn fragment<R: Render + ?Sized>(&mut self, node: &R) -> String {
        let start = self.sql.len();
        node.render(self);
        self.sql.split_off(start)
    }

    pub fn push_ident(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    pub fn add_value(&mut self, value: Literal) {
        let sql = self.value_sql(value);
        self.sql.push_str(&sql);
    }

    /// Returns the text that stands for `value`: the literal itself, or a
    /// placeholder after recording the parameter.
    pub fn value_sql(&mut self, value: Literal) -> String {
        match self.mode {
            RenderMode::Inline => value.to_sql(),
            RenderMode::Params => {
                self.params.push(value);
                self.dialect.get_placeholder(self.params.len() - 1)
            }
        }
    }
}
