use relmeta_ident::error::{Error, Result};
use semistr::SemiStr;

/// Catalog-shaped column type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbType {
    type_name: SemiStr,
    is_fixed_length: bool,
    max_length: Option<u32>,
    precision: Option<NumericPrecision>,
    collation: Option<SemiStr>,
}

impl DbType {
    pub fn new(
        type_name: &str,
        is_fixed_length: bool,
        max_length: Option<u32>,
        precision: Option<NumericPrecision>,
        collation: Option<&str>,
    ) -> Result<DbType> {
        if type_name.trim().is_empty() {
            return Err(Error::InvalidArgument("blank type name"));
        }
        if collation.is_some_and(|c| c.trim().is_empty()) {
            return Err(Error::InvalidArgument("blank collation name"));
        }
        Ok(DbType {
            type_name: SemiStr::new(type_name),
            is_fixed_length,
            max_length,
            precision,
            collation: collation.map(SemiStr::new),
        })
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn is_fixed_length(&self) -> bool {
        self.is_fixed_length
    }

    #[inline]
    pub fn max_length(&self) -> Option<u32> {
        self.max_length
    }

    #[inline]
    pub fn precision(&self) -> Option<NumericPrecision> {
        self.precision
    }

    #[inline]
    pub fn collation(&self) -> Option<&str> {
        self.collation.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericPrecision {
    precision: u16,
    scale: u16,
}

impl NumericPrecision {
    #[inline]
    pub fn new(precision: u16, scale: u16) -> Result<NumericPrecision> {
        if scale > precision {
            return Err(Error::InvalidArgument("scale exceeds precision"));
        }
        Ok(NumericPrecision { precision, scale })
    }

    #[inline]
    pub fn precision(&self) -> u16 {
        self.precision
    }

    #[inline]
    pub fn scale(&self) -> u16 {
        self.scale
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoIncrement {
    initial_value: i64,
    increment: i64,
}

impl AutoIncrement {
    #[inline]
    pub fn new(initial_value: i64, increment: i64) -> Result<AutoIncrement> {
        if increment == 0 {
            return Err(Error::InvalidArgument("zero auto-increment step"));
        }
        Ok(AutoIncrement {
            initial_value,
            increment,
        })
    }

    #[inline]
    pub fn initial_value(&self) -> i64 {
        self.initial_value
    }

    #[inline]
    pub fn increment(&self) -> i64 {
        self.increment
    }
}

/// A table or view column. Computed columns are a distinct variant so
/// consumers match exhaustively instead of probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Data(DataColumn),
    Computed(ComputedColumn),
}

impl Column {
    pub fn data(
        name: &str,
        column_type: DbType,
        nullable: bool,
        default_value: Option<&str>,
        auto_increment: Option<AutoIncrement>,
    ) -> Result<Column> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("blank column name"));
        }
        if default_value.is_some_and(|d| d.trim().is_empty()) {
            return Err(Error::InvalidArgument("blank default value expression"));
        }
        Ok(Column::Data(DataColumn {
            name: SemiStr::new(name),
            column_type,
            nullable,
            default_value: default_value.map(str::to_string),
            auto_increment,
        }))
    }

    pub fn computed(
        name: &str,
        column_type: DbType,
        nullable: bool,
        definition: Option<&str>,
    ) -> Result<Column> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("blank column name"));
        }
        if definition.is_some_and(|d| d.trim().is_empty()) {
            return Err(Error::InvalidArgument("blank computed column definition"));
        }
        Ok(Column::Computed(ComputedColumn {
            name: SemiStr::new(name),
            column_type,
            nullable,
            definition: definition.map(str::to_string),
        }))
    }

    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Column::Data(c) => &c.name,
            Column::Computed(c) => &c.name,
        }
    }

    #[inline]
    pub fn column_type(&self) -> &DbType {
        match self {
            Column::Data(c) => &c.column_type,
            Column::Computed(c) => &c.column_type,
        }
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        match self {
            Column::Data(c) => c.nullable,
            Column::Computed(c) => c.nullable,
        }
    }

    #[inline]
    pub fn default_value(&self) -> Option<&str> {
        match self {
            Column::Data(c) => c.default_value.as_deref(),
            Column::Computed(_) => None,
        }
    }

    #[inline]
    pub fn auto_increment(&self) -> Option<AutoIncrement> {
        match self {
            Column::Data(c) => c.auto_increment,
            Column::Computed(_) => None,
        }
    }

    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(self, Column::Computed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataColumn {
    name: SemiStr,
    column_type: DbType,
    nullable: bool,
    default_value: Option<String>,
    auto_increment: Option<AutoIncrement>,
}

impl DataColumn {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn column_type(&self) -> &DbType {
        &self.column_type
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    #[inline]
    pub fn auto_increment(&self) -> Option<AutoIncrement> {
        self.auto_increment
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedColumn {
    name: SemiStr,
    column_type: DbType,
    nullable: bool,
    definition: Option<String>,
}

impl ComputedColumn {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn column_type(&self) -> &DbType {
        &self.column_type
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Some engines hide the computing expression from the catalog.
    #[inline]
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_type() -> DbType {
        DbType::new("integer", true, Some(4), None, None).unwrap()
    }

    #[test]
    fn test_db_type_validation() {
        assert!(DbType::new("", true, None, None, None).is_err());
        assert!(DbType::new("text", false, None, None, Some(" ")).is_err());
        let ty = DbType::new(
            "numeric",
            true,
            None,
            Some(NumericPrecision::new(10, 2).unwrap()),
            Some("C"),
        )
        .unwrap();
        assert_eq!(ty.type_name(), "numeric");
        assert_eq!(ty.precision().unwrap().precision(), 10);
        assert_eq!(ty.precision().unwrap().scale(), 2);
        assert_eq!(ty.collation(), Some("C"));
    }

    #[test]
    fn test_numeric_precision_scale_bound() {
        assert_eq!(
            NumericPrecision::new(2, 3),
            Err(Error::InvalidArgument("scale exceeds precision"))
        );
        assert!(NumericPrecision::new(3, 3).is_ok());
    }

    #[test]
    fn test_auto_increment_step() {
        assert!(AutoIncrement::new(1, 0).is_err());
        let ai = AutoIncrement::new(100, -2).unwrap();
        assert_eq!(ai.initial_value(), 100);
        assert_eq!(ai.increment(), -2);
    }

    #[test]
    fn test_data_column() {
        assert!(Column::data("", int_type(), false, None, None).is_err());
        assert!(Column::data("id", int_type(), false, Some("  "), None).is_err());
        let col = Column::data(
            "id",
            int_type(),
            false,
            None,
            Some(AutoIncrement::new(1, 1).unwrap()),
        )
        .unwrap();
        assert_eq!(col.name(), "id");
        assert!(!col.is_nullable());
        assert!(!col.is_computed());
        assert!(col.auto_increment().is_some());
        assert_eq!(col.default_value(), None);
    }

    #[test]
    fn test_computed_column() {
        let col = Column::computed("total", int_type(), true, Some("price * qty")).unwrap();
        assert!(col.is_computed());
        assert_eq!(col.default_value(), None);
        assert_eq!(col.auto_increment(), None);
        match &col {
            Column::Computed(c) => assert_eq!(c.definition(), Some("price * qty")),
            Column::Data(_) => unreachable!(),
        }
        // hidden definition is allowed
        assert!(Column::computed("total", int_type(), true, None).is_ok());
        assert!(Column::computed("total", int_type(), true, Some(" ")).is_err());
    }
}
