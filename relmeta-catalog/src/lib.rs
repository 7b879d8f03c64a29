pub mod error;
pub mod mem_impl;

use crate::error::Result;
use relmeta_ident::Identifier;
use relmeta_model::{Routine, Sequence, Synonym, Table, View};
use std::sync::Arc;

pub use mem_impl::MemCatalog;

/// Catalog maintains metadata of schema objects read from a database.
/// It could be shared between threads.
///
/// Objects are stored under their qualified name. Lookup accepts
/// partially-qualified, possibly case-mismatched names and resolves them
/// through the store's identifier resolver; a miss is `None`, never an
/// error.
pub trait Catalog: Send + Sync {
    /// Register a table under its qualified name, returned on success.
    fn add_table(&self, table: Table) -> Result<Identifier>;

    fn drop_table(&self, name: &Identifier) -> Result<()>;

    fn all_tables(&self) -> Vec<Arc<Table>>;

    fn exists_table(&self, name: &Identifier) -> bool;

    fn find_table(&self, name: &Identifier) -> Option<Arc<Table>>;

    fn add_view(&self, view: View) -> Result<Identifier>;

    fn drop_view(&self, name: &Identifier) -> Result<()>;

    fn all_views(&self) -> Vec<Arc<View>>;

    fn exists_view(&self, name: &Identifier) -> bool;

    fn find_view(&self, name: &Identifier) -> Option<Arc<View>>;

    fn add_sequence(&self, sequence: Sequence) -> Result<Identifier>;

    fn drop_sequence(&self, name: &Identifier) -> Result<()>;

    fn all_sequences(&self) -> Vec<Arc<Sequence>>;

    fn exists_sequence(&self, name: &Identifier) -> bool;

    fn find_sequence(&self, name: &Identifier) -> Option<Arc<Sequence>>;

    fn add_synonym(&self, synonym: Synonym) -> Result<Identifier>;

    fn drop_synonym(&self, name: &Identifier) -> Result<()>;

    fn all_synonyms(&self) -> Vec<Arc<Synonym>>;

    fn exists_synonym(&self, name: &Identifier) -> bool;

    fn find_synonym(&self, name: &Identifier) -> Option<Arc<Synonym>>;

    fn add_routine(&self, routine: Routine) -> Result<Identifier>;

    fn drop_routine(&self, name: &Identifier) -> Result<()>;

    fn all_routines(&self) -> Vec<Arc<Routine>>;

    fn exists_routine(&self, name: &Identifier) -> bool;

    fn find_routine(&self, name: &Identifier) -> Option<Arc<Routine>>;
}
