use crate::column::Column;
use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;
use std::sync::Arc;

/// A view as read from a catalog. Materialized views are a distinct
/// variant because consumers branch on them exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Simple(ViewDef),
    Materialized(ViewDef),
}

/// Shared body of both view variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDef {
    name: Identifier,
    columns: Vec<Arc<Column>>,
    definition: String,
}

impl ViewDef {
    fn new(name: Identifier, columns: Vec<Arc<Column>>, definition: &str) -> Result<ViewDef> {
        if columns.is_empty() {
            return Err(Error::InvalidArgument("view without columns"));
        }
        if definition.trim().is_empty() {
            return Err(Error::InvalidArgument("blank view definition"));
        }
        Ok(ViewDef {
            name,
            columns,
            definition: definition.to_string(),
        })
    }

    #[inline]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    #[inline]
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    #[inline]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

impl View {
    #[inline]
    pub fn simple(
        name: Identifier,
        columns: Vec<Arc<Column>>,
        definition: &str,
    ) -> Result<View> {
        Ok(View::Simple(ViewDef::new(name, columns, definition)?))
    }

    #[inline]
    pub fn materialized(
        name: Identifier,
        columns: Vec<Arc<Column>>,
        definition: &str,
    ) -> Result<View> {
        Ok(View::Materialized(ViewDef::new(name, columns, definition)?))
    }

    #[inline]
    fn def(&self) -> &ViewDef {
        match self {
            View::Simple(def) | View::Materialized(def) => def,
        }
    }

    #[inline]
    pub fn name(&self) -> &Identifier {
        self.def().name()
    }

    #[inline]
    pub fn columns(&self) -> &[Arc<Column>] {
        self.def().columns()
    }

    #[inline]
    pub fn definition(&self) -> &str {
        self.def().definition()
    }

    #[inline]
    pub fn is_materialized(&self) -> bool {
        matches!(self, View::Materialized(_))
    }
}
