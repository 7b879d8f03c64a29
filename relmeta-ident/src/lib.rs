pub mod error;
mod resolve;

pub use resolve::*;

use crate::error::{Error, Result};
use semistr::SemiStr;
use std::cmp::Ordering;
use std::fmt;

/// A partially-qualified four-part database object name.
///
/// Parts are optional from the left only: a server requires a database,
/// a database requires a schema. The local name is mandatory and never
/// blank. Identifiers are immutable value objects; equality, hash and
/// ordering compare all four parts ordinally with no case folding.
/// Folding belongs to [`IdentifierResolver`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    server: Option<SemiStr>,
    database: Option<SemiStr>,
    schema: Option<SemiStr>,
    local_name: SemiStr,
}

impl Identifier {
    /// Create an identifier with only a local name.
    #[inline]
    pub fn new(local_name: &str) -> Result<Identifier> {
        Self::qualified(None, None, None, local_name)
    }

    #[inline]
    pub fn schema_qualified(schema: &str, local_name: &str) -> Result<Identifier> {
        Self::qualified(None, None, Some(schema), local_name)
    }

    #[inline]
    pub fn database_qualified(
        database: &str,
        schema: &str,
        local_name: &str,
    ) -> Result<Identifier> {
        Self::qualified(None, Some(database), Some(schema), local_name)
    }

    #[inline]
    pub fn server_qualified(
        server: &str,
        database: &str,
        schema: &str,
        local_name: &str,
    ) -> Result<Identifier> {
        Self::qualified(Some(server), Some(database), Some(schema), local_name)
    }

    /// Create an identifier from any combination of parts.
    /// A provided part must be non-blank, and parts may only be absent
    /// from the left.
    pub fn qualified(
        server: Option<&str>,
        database: Option<&str>,
        schema: Option<&str>,
        local_name: &str,
    ) -> Result<Identifier> {
        if server.is_some() && database.is_none() {
            return Err(Error::InvalidArgument("server requires database"));
        }
        if database.is_some() && schema.is_none() {
            return Err(Error::InvalidArgument("database requires schema"));
        }
        Ok(Identifier {
            server: server.map(|p| name_part(p, "blank server name")).transpose()?,
            database: database
                .map(|p| name_part(p, "blank database name"))
                .transpose()?,
            schema: schema.map(|p| name_part(p, "blank schema name")).transpose()?,
            local_name: name_part(local_name, "blank local name")?,
        })
    }

    #[inline]
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    #[inline]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    #[inline]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    #[inline]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Canonical four-part form with absent parts rendered empty,
    /// e.g. `..dbo.users`.
    #[inline]
    pub fn canonical_name(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.server().unwrap_or(""),
            self.database().unwrap_or(""),
            self.schema().unwrap_or(""),
            self.local_name(),
        )
    }

    /// Part-wise comparison where a part absent on either side matches
    /// anything. Local names always compare exactly. This is a lookup
    /// aid for resolution-side probing and is never used by `Eq`.
    #[inline]
    pub fn matches(&self, other: &Identifier) -> bool {
        #[inline]
        fn part(a: Option<&str>, b: Option<&str>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
        }
        self.local_name() == other.local_name()
            && part(self.schema(), other.schema())
            && part(self.database(), other.database())
            && part(self.server(), other.server())
    }
}

impl fmt::Display for Identifier {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(server) = self.server() {
            write!(f, "{}.", server)?;
        }
        if let Some(database) = self.database() {
            write!(f, "{}.", database)?;
        }
        if let Some(schema) = self.schema() {
            write!(f, "{}.", schema)?;
        }
        f.write_str(self.local_name())
    }
}

impl PartialOrd for Identifier {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.server(), self.database(), self.schema(), self.local_name()).cmp(&(
            other.server(),
            other.database(),
            other.schema(),
            other.local_name(),
        ))
    }
}

#[inline]
fn name_part(part: &str, blank: &'static str) -> Result<SemiStr> {
    if part.trim().is_empty() {
        return Err(Error::InvalidArgument(blank));
    }
    Ok(SemiStr::new(part))
}

/// Connection-ambient name parts used to qualify partial identifiers
/// before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierDefaults {
    server: Option<SemiStr>,
    database: Option<SemiStr>,
    schema: Option<SemiStr>,
}

impl IdentifierDefaults {
    pub fn new(
        server: Option<&str>,
        database: Option<&str>,
        schema: Option<&str>,
    ) -> Result<IdentifierDefaults> {
        Ok(IdentifierDefaults {
            server: server.map(|p| name_part(p, "blank server name")).transpose()?,
            database: database
                .map(|p| name_part(p, "blank database name"))
                .transpose()?,
            schema: schema.map(|p| name_part(p, "blank schema name")).transpose()?,
        })
    }

    #[inline]
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    #[inline]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    #[inline]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Fill absent parts of `id` from these defaults. Present parts are
    /// never overridden. The result passes through normal identifier
    /// validation, so a combination that skips a middle part fails.
    #[inline]
    pub fn qualify(&self, id: &Identifier) -> Result<Identifier> {
        Identifier::qualified(
            id.server().or(self.server()),
            id.database().or(self.database()),
            id.schema().or(self.schema()),
            id.local_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_required() {
        assert_eq!(
            Identifier::new(""),
            Err(Error::InvalidArgument("blank local name"))
        );
        assert_eq!(
            Identifier::new("   "),
            Err(Error::InvalidArgument("blank local name"))
        );
        assert!(Identifier::new("users").is_ok());
    }

    #[test]
    fn test_parts_optional_from_the_left_only() {
        assert!(Identifier::qualified(Some("srv"), None, Some("dbo"), "t").is_err());
        assert!(Identifier::qualified(Some("srv"), Some("db"), None, "t").is_err());
        assert!(Identifier::qualified(None, Some("db"), None, "t").is_err());
        assert!(Identifier::qualified(None, Some("db"), Some("dbo"), "t").is_ok());
        assert!(Identifier::qualified(None, None, Some("dbo"), "t").is_ok());
    }

    #[test]
    fn test_blank_optional_part_rejected() {
        assert_eq!(
            Identifier::schema_qualified(" ", "t"),
            Err(Error::InvalidArgument("blank schema name"))
        );
        assert_eq!(
            Identifier::database_qualified("", "dbo", "t"),
            Err(Error::InvalidArgument("blank database name"))
        );
    }

    #[test]
    fn test_accessors_and_display() {
        let id = Identifier::server_qualified("srv", "db", "dbo", "Users").unwrap();
        assert_eq!(id.server(), Some("srv"));
        assert_eq!(id.database(), Some("db"));
        assert_eq!(id.schema(), Some("dbo"));
        assert_eq!(id.local_name(), "Users");
        assert_eq!(id.to_string(), "srv.db.dbo.Users");

        let id = Identifier::schema_qualified("dbo", "Users").unwrap();
        assert_eq!(id.to_string(), "dbo.Users");
        assert_eq!(id.canonical_name(), "..dbo.Users");
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Identifier::schema_qualified("dbo", "users").unwrap();
        let b = Identifier::schema_qualified("dbo", "users").unwrap();
        let c = Identifier::schema_qualified("dbo", "Users").unwrap();
        let d = Identifier::new("users").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        // absent parts are not wildcards for Eq
        assert_ne!(a, d);
    }

    #[test]
    fn test_ordering_is_ordinal() {
        // byte order, no folding: upper-case sorts before lower-case
        let upper = Identifier::new("Users").unwrap();
        let lower = Identifier::new("users").unwrap();
        assert!(upper < lower);
        // absent part sorts before any present part
        let plain = Identifier::new("users").unwrap();
        let qualified = Identifier::schema_qualified("dbo", "users").unwrap();
        assert!(plain < qualified);
    }

    #[test]
    fn test_wildcard_matches() {
        let partial = Identifier::new("users").unwrap();
        let full = Identifier::database_qualified("db", "dbo", "users").unwrap();
        assert!(partial.matches(&full));
        assert!(full.matches(&partial));
        let other = Identifier::database_qualified("db", "dbo", "orders").unwrap();
        assert!(!partial.matches(&other));
        let schema_mismatch = Identifier::schema_qualified("app", "users").unwrap();
        assert!(!schema_mismatch.matches(&full));
    }

    #[test]
    fn test_defaults_fill_absent_parts() {
        let defaults = IdentifierDefaults::new(None, Some("db"), Some("public")).unwrap();
        let id = Identifier::new("users").unwrap();
        let qualified = defaults.qualify(&id).unwrap();
        assert_eq!(
            qualified,
            Identifier::database_qualified("db", "public", "users").unwrap()
        );

        // present parts win over defaults
        let id = Identifier::schema_qualified("app", "users").unwrap();
        let qualified = defaults.qualify(&id).unwrap();
        assert_eq!(
            qualified,
            Identifier::database_qualified("db", "app", "users").unwrap()
        );
    }

    #[test]
    fn test_defaults_cannot_skip_parts() {
        // a server default without a database default cannot qualify a
        // bare local name
        let defaults = IdentifierDefaults::new(Some("srv"), None, None).unwrap();
        let id = Identifier::new("users").unwrap();
        assert!(defaults.qualify(&id).is_err());
    }
}
