use crate::query::{
    ast::predicate::{Literal, Predicate},
    renderer::{Render, Renderer},
};
use model::core::utils::join_bracketed;

impl Render for Predicate {
    fn render(&self, r: &mut Renderer) {
        match self {
            Predicate::Compare { col, op, value } => {
                r.push_ident(&col.name);
                r.sql.push(' ');
                r.sql.push_str(op.as_sql());
                r.sql.push(' ');
                r.add_value(value.clone());
            }
            Predicate::Between {
                col,
                negated,
                low,
                high,
            } => {
                r.push_ident(&col.name);
                r.sql
                    .push_str(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                r.add_value(low.clone());
                r.sql.push_str(" AND ");
                r.add_value(high.clone());
            }
            Predicate::Like {
                col,
                negated,
                needle,
            } => {
                r.push_ident(&col.name);
                r.sql.push_str(if *negated { " NOT LIKE " } else { " LIKE " });
                // substring match
                r.add_value(Literal::Text(format!("%{needle}%")));
            }
            Predicate::InList {
                col,
                negated,
                values,
            } => {
                let items: Vec<String> = values.iter().map(|v| r.value_sql(v.clone())).collect();
                let keyword = if *negated { r.not_in.keyword() } else { "IN" };

                r.push_ident(&col.name);
                r.sql.push(' ');
                r.sql.push_str(keyword);
                r.sql.push_str(" (");
                r.sql.push_str(&join_bracketed(&items, ",", ["", ""]));
                r.sql.push(')');
            }
            Predicate::IsNull { col, negated } => {
                r.push_ident(&col.name);
                r.sql
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
        }
    }
}
