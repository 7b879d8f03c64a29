use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;

/// A check constraint. Catalogs report system-generated checks without a
/// name, so the name is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    name: Option<Identifier>,
    definition: String,
    enabled: bool,
}

impl Check {
    pub fn new(name: Option<Identifier>, definition: &str, enabled: bool) -> Result<Check> {
        if definition.trim().is_empty() {
            return Err(Error::InvalidArgument("blank check definition"));
        }
        Ok(Check {
            name,
            definition: definition.to_string(),
            enabled,
        })
    }

    #[inline]
    pub fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    #[inline]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
