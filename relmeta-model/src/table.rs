use crate::check::Check;
use crate::column::Column;
use crate::index::Index;
use crate::key::{Key, KeyType, RelationalKey};
use crate::trigger::Trigger;
use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;
use std::sync::Arc;

/// A table as read from a catalog.
///
/// Every collection preserves catalog-declared order; generators depend
/// on it for deterministic output. At most one primary key exists by
/// representation, not by runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: Identifier,
    columns: Vec<Arc<Column>>,
    primary_key: Option<Key>,
    unique_keys: Vec<Key>,
    parent_keys: Vec<RelationalKey>,
    child_keys: Vec<RelationalKey>,
    indexes: Vec<Index>,
    checks: Vec<Check>,
    triggers: Vec<Trigger>,
}

impl Table {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Identifier,
        columns: Vec<Arc<Column>>,
        primary_key: Option<Key>,
        unique_keys: Vec<Key>,
        parent_keys: Vec<RelationalKey>,
        child_keys: Vec<RelationalKey>,
        indexes: Vec<Index>,
        checks: Vec<Check>,
        triggers: Vec<Trigger>,
    ) -> Result<Table> {
        if columns.is_empty() {
            return Err(Error::InvalidArgument("table without columns"));
        }
        if primary_key
            .as_ref()
            .is_some_and(|k| k.key_type() != KeyType::Primary)
        {
            return Err(Error::InvalidArgument(
                "primary key slot holds a non-primary key",
            ));
        }
        if unique_keys.iter().any(|k| k.key_type() != KeyType::Unique) {
            return Err(Error::InvalidArgument(
                "unique key list holds a non-unique key",
            ));
        }
        Ok(Table {
            name,
            columns,
            primary_key,
            unique_keys,
            parent_keys,
            child_keys,
            indexes,
            checks,
            triggers,
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
    pub fn primary_key(&self) -> Option<&Key> {
        self.primary_key.as_ref()
    }

    #[inline]
    pub fn unique_keys(&self) -> &[Key] {
        &self.unique_keys
    }

    /// Relational keys where this table is the child, pointing at parent
    /// tables.
    #[inline]
    pub fn parent_keys(&self) -> &[RelationalKey] {
        &self.parent_keys
    }

    /// Relational keys where this table is the parent, pointed at by
    /// child tables.
    #[inline]
    pub fn child_keys(&self) -> &[RelationalKey] {
        &self.child_keys
    }

    #[inline]
    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    #[inline]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    #[inline]
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    #[inline]
    pub fn find_column(&self, column_name: &str) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| c.name() == column_name)
    }

    /// True when the key's column sequence exactly backs the primary
    /// key, a unique key, or a unique index of this table.
    ///
    /// The comparison is order-sensitive and case-ordinal: differently
    /// ordered composite keys are not interchangeable. Downstream this
    /// decides one-to-one against one-to-many relationships.
    pub fn is_child_key_unique(&self, key: &Key) -> bool {
        if let Some(pk) = &self.primary_key {
            if key.column_names().eq(pk.column_names()) {
                return true;
            }
        }
        if self
            .unique_keys
            .iter()
            .any(|uk| key.column_names().eq(uk.column_names()))
        {
            return true;
        }
        self.indexes.iter().filter(|ix| ix.is_unique()).any(|ix| {
            key.column_names()
                .eq(ix.columns().iter().map(|ic| ic.expression_text()))
        })
    }
}
