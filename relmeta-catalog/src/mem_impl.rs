use crate::error::{Error, Result};
use crate::Catalog;
use indexmap::IndexMap;
use log::{debug, trace};
use parking_lot::RwLock;
use relmeta_ident::{Identifier, IdentifierDefaults, IdentifierResolver};
use relmeta_model::{Routine, Sequence, Synonym, Table, View};
use std::sync::Arc;

/// In-memory catalog keyed by qualified identifier.
///
/// Names are qualified with the configured defaults on the way in and
/// on lookup; lookup then probes the resolver's candidates first-to-last
/// and falls back to a wildcard scan in insertion order for names that
/// remain partially qualified.
pub struct MemCatalog {
    defaults: IdentifierDefaults,
    resolver: Arc<dyn IdentifierResolver + Send + Sync>,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    tables: IndexMap<Identifier, Arc<Table>>,
    views: IndexMap<Identifier, Arc<View>>,
    sequences: IndexMap<Identifier, Arc<Sequence>>,
    synonyms: IndexMap<Identifier, Arc<Synonym>>,
    routines: IndexMap<Identifier, Arc<Routine>>,
}

impl MemCatalog {
    #[inline]
    pub fn new(
        defaults: IdentifierDefaults,
        resolver: Arc<dyn IdentifierResolver + Send + Sync>,
    ) -> Self {
        MemCatalog {
            defaults,
            resolver,
            inner: RwLock::new(Inner::default()),
        }
    }

    #[inline]
    pub fn defaults(&self) -> &IdentifierDefaults {
        &self.defaults
    }

    #[inline]
    fn qualify(&self, name: &Identifier) -> Result<Identifier> {
        Ok(self.defaults.qualify(name)?)
    }
}

fn add_in<T>(
    map: &mut IndexMap<Identifier, Arc<T>>,
    name: Identifier,
    value: T,
    exists: fn(Identifier) -> Error,
) -> Result<Identifier> {
    if map.contains_key(&name) {
        return Err(exists(name));
    }
    map.insert(name.clone(), Arc::new(value));
    debug!("registered {}", name);
    Ok(name)
}

fn drop_in<T>(
    map: &mut IndexMap<Identifier, Arc<T>>,
    resolver: &dyn IdentifierResolver,
    name: &Identifier,
    missing: fn(Identifier) -> Error,
) -> Result<()> {
    for candidate in resolver.resolve_order(name) {
        // shift keeps insertion order for the remaining objects
        if map.shift_remove(&candidate).is_some() {
            return Ok(());
        }
    }
    Err(missing(name.clone()))
}

fn find_in<T>(
    map: &IndexMap<Identifier, Arc<T>>,
    resolver: &dyn IdentifierResolver,
    name: &Identifier,
) -> Option<Arc<T>> {
    for candidate in resolver.resolve_order(name) {
        trace!("probing {}", candidate);
        if let Some(v) = map.get(&candidate) {
            return Some(Arc::clone(v));
        }
    }
    // parts still absent after qualification match any stored name
    map.iter()
        .find(|(stored, _)| name.matches(stored))
        .map(|(_, v)| Arc::clone(v))
}

impl Catalog for MemCatalog {
    #[inline]
    fn add_table(&self, table: Table) -> Result<Identifier> {
        let name = self.qualify(table.name())?;
        let mut inner = self.inner.write();
        add_in(&mut inner.tables, name, table, Error::TableAlreadyExists)
    }

    #[inline]
    fn drop_table(&self, name: &Identifier) -> Result<()> {
        let name = self.qualify(name)?;
        let mut inner = self.inner.write();
        drop_in(&mut inner.tables, &*self.resolver, &name, Error::TableNotExists)
    }

    #[inline]
    fn all_tables(&self) -> Vec<Arc<Table>> {
        let inner = self.inner.read();
        inner.tables.values().cloned().collect()
    }

    #[inline]
    fn exists_table(&self, name: &Identifier) -> bool {
        self.find_table(name).is_some()
    }

    #[inline]
    fn find_table(&self, name: &Identifier) -> Option<Arc<Table>> {
        let name = self.qualify(name).ok()?;
        let inner = self.inner.read();
        find_in(&inner.tables, &*self.resolver, &name)
    }

    #[inline]
    fn add_view(&self, view: View) -> Result<Identifier> {
        let name = self.qualify(view.name())?;
        let mut inner = self.inner.write();
        add_in(&mut inner.views, name, view, Error::ViewAlreadyExists)
    }

    #[inline]
    fn drop_view(&self, name: &Identifier) -> Result<()> {
        let name = self.qualify(name)?;
        let mut inner = self.inner.write();
        drop_in(&mut inner.views, &*self.resolver, &name, Error::ViewNotExists)
    }

    #[inline]
    fn all_views(&self) -> Vec<Arc<View>> {
        let inner = self.inner.read();
        inner.views.values().cloned().collect()
    }

    #[inline]
    fn exists_view(&self, name: &Identifier) -> bool {
        self.find_view(name).is_some()
    }

    #[inline]
    fn find_view(&self, name: &Identifier) -> Option<Arc<View>> {
        let name = self.qualify(name).ok()?;
        let inner = self.inner.read();
        find_in(&inner.views, &*self.resolver, &name)
    }

    #[inline]
    fn add_sequence(&self, sequence: Sequence) -> Result<Identifier> {
        let name = self.qualify(sequence.name())?;
        let mut inner = self.inner.write();
        add_in(
            &mut inner.sequences,
            name,
            sequence,
            Error::SequenceAlreadyExists,
        )
    }

    #[inline]
    fn drop_sequence(&self, name: &Identifier) -> Result<()> {
        let name = self.qualify(name)?;
        let mut inner = self.inner.write();
        drop_in(
            &mut inner.sequences,
            &*self.resolver,
            &name,
            Error::SequenceNotExists,
        )
    }

    #[inline]
    fn all_sequences(&self) -> Vec<Arc<Sequence>> {
        let inner = self.inner.read();
        inner.sequences.values().cloned().collect()
    }

    #[inline]
    fn exists_sequence(&self, name: &Identifier) -> bool {
        self.find_sequence(name).is_some()
    }

    #[inline]
    fn find_sequence(&self, name: &Identifier) -> Option<Arc<Sequence>> {
        let name = self.qualify(name).ok()?;
        let inner = self.inner.read();
        find_in(&inner.sequences, &*self.resolver, &name)
    }

    #[inline]
    fn add_synonym(&self, synonym: Synonym) -> Result<Identifier> {
        let name = self.qualify(synonym.name())?;
        let mut inner = self.inner.write();
        add_in(
            &mut inner.synonyms,
            name,
            synonym,
            Error::SynonymAlreadyExists,
        )
    }

    #[inline]
    fn drop_synonym(&self, name: &Identifier) -> Result<()> {
        let name = self.qualify(name)?;
        let mut inner = self.inner.write();
        drop_in(
            &mut inner.synonyms,
            &*self.resolver,
            &name,
            Error::SynonymNotExists,
        )
    }

    #[inline]
    fn all_synonyms(&self) -> Vec<Arc<Synonym>> {
        let inner = self.inner.read();
        inner.synonyms.values().cloned().collect()
    }

    #[inline]
    fn exists_synonym(&self, name: &Identifier) -> bool {
        self.find_synonym(name).is_some()
    }

    #[inline]
    fn find_synonym(&self, name: &Identifier) -> Option<Arc<Synonym>> {
        let name = self.qualify(name).ok()?;
        let inner = self.inner.read();
        find_in(&inner.synonyms, &*self.resolver, &name)
    }

    #[inline]
    fn add_routine(&self, routine: Routine) -> Result<Identifier> {
        let name = self.qualify(routine.name())?;
        let mut inner = self.inner.write();
        add_in(
            &mut inner.routines,
            name,
            routine,
            Error::RoutineAlreadyExists,
        )
    }

    #[inline]
    fn drop_routine(&self, name: &Identifier) -> Result<()> {
        let name = self.qualify(name)?;
        let mut inner = self.inner.write();
        drop_in(
            &mut inner.routines,
            &*self.resolver,
            &name,
            Error::RoutineNotExists,
        )
    }

    #[inline]
    fn all_routines(&self) -> Vec<Arc<Routine>> {
        let inner = self.inner.read();
        inner.routines.values().cloned().collect()
    }

    #[inline]
    fn exists_routine(&self, name: &Identifier) -> bool {
        self.find_routine(name).is_some()
    }

    #[inline]
    fn find_routine(&self, name: &Identifier) -> Option<Arc<Routine>> {
        let name = self.qualify(name).ok()?;
        let inner = self.inner.read();
        find_in(&inner.routines, &*self.resolver, &name)
    }
}
