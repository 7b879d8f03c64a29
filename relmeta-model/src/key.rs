use crate::column::Column;
use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyType {
    Primary = 0,
    Unique = 1,
    Foreign = 2,
}

impl TryFrom<u8> for KeyType {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<KeyType> {
        match value {
            0 => Ok(KeyType::Primary),
            1 => Ok(KeyType::Unique),
            2 => Ok(KeyType::Foreign),
            _ => Err(Error::InvalidState("key type out of range")),
        }
    }
}

/// A primary, unique or foreign key over an ordered column list.
/// Column order is the catalog-declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    name: Option<Identifier>,
    key_type: KeyType,
    columns: Vec<Arc<Column>>,
    enabled: bool,
}

impl Key {
    pub fn new(
        name: Option<Identifier>,
        key_type: KeyType,
        columns: Vec<Arc<Column>>,
        enabled: bool,
    ) -> Result<Key> {
        if columns.is_empty() {
            return Err(Error::InvalidArgument("key without columns"));
        }
        Ok(Key {
            name,
            key_type,
            columns,
            enabled,
        })
    }

    #[inline]
    pub fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    #[inline]
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    #[inline]
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    #[inline]
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name())
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ReferentialAction {
    NoAction = 0,
    Cascade = 1,
    SetNull = 2,
    SetDefault = 3,
    Restrict = 4,
}

impl TryFrom<u8> for ReferentialAction {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<ReferentialAction> {
        match value {
            0 => Ok(ReferentialAction::NoAction),
            1 => Ok(ReferentialAction::Cascade),
            2 => Ok(ReferentialAction::SetNull),
            3 => Ok(ReferentialAction::SetDefault),
            4 => Ok(ReferentialAction::Restrict),
            _ => Err(Error::InvalidState("referential action out of range")),
        }
    }
}

/// A foreign-to-candidate-key link between two tables.
///
/// Tables are cross-referenced by identifier, not owned; a catalog
/// lookup turns the reference back into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalKey {
    child_table: Identifier,
    child_key: Key,
    parent_table: Identifier,
    parent_key: Key,
    delete_action: ReferentialAction,
    update_action: ReferentialAction,
}

impl RelationalKey {
    /// The child key must be a foreign key and the parent key a primary
    /// or unique key; no catalog can represent anything else.
    pub fn new(
        child_table: Identifier,
        child_key: Key,
        parent_table: Identifier,
        parent_key: Key,
        delete_action: ReferentialAction,
        update_action: ReferentialAction,
    ) -> Result<RelationalKey> {
        if child_key.key_type() != KeyType::Foreign {
            return Err(Error::InvalidArgument("child key must be a foreign key"));
        }
        if !matches!(parent_key.key_type(), KeyType::Primary | KeyType::Unique) {
            return Err(Error::InvalidArgument(
                "parent key must be a primary or unique key",
            ));
        }
        Ok(RelationalKey {
            child_table,
            child_key,
            parent_table,
            parent_key,
            delete_action,
            update_action,
        })
    }

    #[inline]
    pub fn child_table(&self) -> &Identifier {
        &self.child_table
    }

    #[inline]
    pub fn child_key(&self) -> &Key {
        &self.child_key
    }

    #[inline]
    pub fn parent_table(&self) -> &Identifier {
        &self.parent_table
    }

    #[inline]
    pub fn parent_key(&self) -> &Key {
        &self.parent_key
    }

    #[inline]
    pub fn delete_action(&self) -> ReferentialAction {
        self.delete_action
    }

    #[inline]
    pub fn update_action(&self) -> ReferentialAction {
        self.update_action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::DbType;

    fn col(name: &str) -> Arc<Column> {
        let ty = DbType::new("integer", true, Some(4), None, None).unwrap();
        Arc::new(Column::data(name, ty, false, None, None).unwrap())
    }

    fn key(key_type: KeyType, names: &[&str]) -> Key {
        Key::new(None, key_type, names.iter().map(|n| col(n)).collect(), true).unwrap()
    }

    #[test]
    fn test_key_requires_columns() {
        assert_eq!(
            Key::new(None, KeyType::Primary, vec![], true),
            Err(Error::InvalidArgument("key without columns"))
        );
    }

    #[test]
    fn test_key_accessors() {
        let name = Identifier::new("pk_users").unwrap();
        let k = Key::new(Some(name.clone()), KeyType::Primary, vec![col("id")], true).unwrap();
        assert_eq!(k.name(), Some(&name));
        assert_eq!(k.key_type(), KeyType::Primary);
        assert_eq!(k.column_names().collect::<Vec<_>>(), vec!["id"]);
        assert!(k.is_enabled());
    }

    #[test]
    fn test_key_type_from_raw() {
        assert_eq!(KeyType::try_from(0), Ok(KeyType::Primary));
        assert_eq!(KeyType::try_from(2), Ok(KeyType::Foreign));
        assert_eq!(
            KeyType::try_from(3),
            Err(Error::InvalidState("key type out of range"))
        );
    }

    #[test]
    fn test_referential_action_from_raw() {
        assert_eq!(ReferentialAction::try_from(4), Ok(ReferentialAction::Restrict));
        assert!(ReferentialAction::try_from(5).is_err());
    }

    #[test]
    fn test_relational_key_invariants() {
        let child = Identifier::new("orders").unwrap();
        let parent = Identifier::new("users").unwrap();

        // child must be foreign
        let res = RelationalKey::new(
            child.clone(),
            key(KeyType::Primary, &["user_id"]),
            parent.clone(),
            key(KeyType::Primary, &["id"]),
            ReferentialAction::NoAction,
            ReferentialAction::NoAction,
        );
        assert_eq!(
            res,
            Err(Error::InvalidArgument("child key must be a foreign key"))
        );

        // parent must be primary or unique
        let res = RelationalKey::new(
            child.clone(),
            key(KeyType::Foreign, &["user_id"]),
            parent.clone(),
            key(KeyType::Foreign, &["id"]),
            ReferentialAction::NoAction,
            ReferentialAction::NoAction,
        );
        assert_eq!(
            res,
            Err(Error::InvalidArgument(
                "parent key must be a primary or unique key"
            ))
        );

        let rk = RelationalKey::new(
            child.clone(),
            key(KeyType::Foreign, &["user_id"]),
            parent.clone(),
            key(KeyType::Unique, &["id"]),
            ReferentialAction::Cascade,
            ReferentialAction::SetNull,
        )
        .unwrap();
        assert_eq!(rk.child_table(), &child);
        assert_eq!(rk.parent_table(), &parent);
        assert_eq!(rk.delete_action(), ReferentialAction::Cascade);
        assert_eq!(rk.update_action(), ReferentialAction::SetNull);
    }
}
