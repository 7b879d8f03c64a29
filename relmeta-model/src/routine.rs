use relmeta_ident::error::{Error, Result};
use relmeta_ident::Identifier;

/// A stored routine: a procedure or function body as the catalog reports
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    name: Identifier,
    definition: String,
}

impl Routine {
    pub fn new(name: Identifier, definition: &str) -> Result<Routine> {
        if definition.trim().is_empty() {
            return Err(Error::InvalidArgument("blank routine definition"));
        }
        Ok(Routine {
            name,
            definition: definition.to_string(),
        })
    }

    #[inline]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    #[inline]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}
