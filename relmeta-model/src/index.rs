use crate::column::Column;
use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IndexOrder {
    Asc = 0,
    Desc = 1,
}

impl TryFrom<u8> for IndexOrder {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<IndexOrder> {
        match value {
            0 => Ok(IndexOrder::Asc),
            1 => Ok(IndexOrder::Desc),
            _ => Err(Error::InvalidState("index order out of range")),
        }
    }
}

/// What an index key slot sorts on: a plain column or an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexColumnExpr {
    Column(Arc<Column>),
    Expression(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumn {
    expr: IndexColumnExpr,
    order: IndexOrder,
    dependent_columns: Vec<Arc<Column>>,
}

impl IndexColumn {
    /// A plain column reference; the column is its own dependency.
    #[inline]
    pub fn column(column: Arc<Column>, order: IndexOrder) -> IndexColumn {
        IndexColumn {
            dependent_columns: vec![Arc::clone(&column)],
            expr: IndexColumnExpr::Column(column),
            order,
        }
    }

    /// An expression slot with the columns it was resolved to depend on.
    /// A pure expression carries no dependencies.
    pub fn expression(
        expression: &str,
        dependent_columns: Vec<Arc<Column>>,
        order: IndexOrder,
    ) -> Result<IndexColumn> {
        if expression.trim().is_empty() {
            return Err(Error::InvalidArgument("blank index expression"));
        }
        Ok(IndexColumn {
            expr: IndexColumnExpr::Expression(expression.to_string()),
            order,
            dependent_columns,
        })
    }

    #[inline]
    pub fn expr(&self) -> &IndexColumnExpr {
        &self.expr
    }

    #[inline]
    pub fn order(&self) -> IndexOrder {
        self.order
    }

    #[inline]
    pub fn dependent_columns(&self) -> &[Arc<Column>] {
        &self.dependent_columns
    }

    /// Textual form compared against key column sequences: the column
    /// name for plain references, the expression text otherwise.
    #[inline]
    pub fn expression_text(&self) -> &str {
        match &self.expr {
            IndexColumnExpr::Column(c) => c.name(),
            IndexColumnExpr::Expression(e) => e,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    name: Option<Identifier>,
    unique: bool,
    columns: Vec<IndexColumn>,
    included_columns: Vec<Arc<Column>>,
    enabled: bool,
}

impl Index {
    pub fn new(
        name: Option<Identifier>,
        unique: bool,
        columns: Vec<IndexColumn>,
        included_columns: Vec<Arc<Column>>,
        enabled: bool,
    ) -> Result<Index> {
        if columns.is_empty() {
            return Err(Error::InvalidArgument("index without key columns"));
        }
        Ok(Index {
            name,
            unique,
            columns,
            included_columns,
            enabled,
        })
    }

    #[inline]
    pub fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    #[inline]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    #[inline]
    pub fn columns(&self) -> &[IndexColumn] {
        &self.columns
    }

    #[inline]
    pub fn included_columns(&self) -> &[Arc<Column>] {
        &self.included_columns
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
