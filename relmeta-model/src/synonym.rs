use relmeta_ident::Identifier;

/// An alias for another database object. Both ends are identifiers; the
/// target may live in another schema or database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synonym {
    name: Identifier,
    target: Identifier,
}

impl Synonym {
    #[inline]
    pub fn new(name: Identifier, target: Identifier) -> Synonym {
        Synonym { name, target }
    }

    #[inline]
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    #[inline]
    pub fn target(&self) -> &Identifier {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_round_trip() {
        let name = Identifier::schema_qualified("dbo", "clients").unwrap();
        let target = Identifier::schema_qualified("sales", "customers").unwrap();
        let syn = Synonym::new(name.clone(), target.clone());
        assert_eq!(syn.name(), &name);
        assert_eq!(syn.target(), &target);
    }
}
