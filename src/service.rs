//! Edit flow: loading a stored pattern into its country + local split and
//! saving an edited split back into storage form.

use crate::countries::{CountryTable, CountryTableError};
use crate::resolver::{combine, find_by_dial_code, strip_dial_code};
use crate::store::{BlocklistEntry, NumberStore};
use crate::wildcard::{storage_to_view, view_to_storage};
use std::error::Error as StdError;
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Errors from the edit flow.
#[derive(Debug, Error)]
pub enum EditError<E: StdError + Send + Sync + 'static> {
    /// Error from the underlying store.
    #[error("blocklist store error: {0}")]
    Store(#[source] E),

    /// Invalid country index argument.
    #[error(transparent)]
    Table(#[from] CountryTableError),

    /// The entry name is empty.
    #[error("entry name must not be empty")]
    EmptyName,

    /// Neither a local number nor a country was given.
    #[error("entry needs a number or a selected country")]
    EmptyNumber,
}

/// What the edit screen shows and collects: a label, a selected country
/// index into the table, and the locally-typed number fragment (view form,
/// may contain the view wildcard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// User-given label.
    pub name: String,
    /// Index into the country table; 0 means no country selected.
    pub country_index: usize,
    /// Number fragment without the dial code, in view form.
    pub local_number: String,
}

impl EditForm {
    /// Create a form.
    pub fn new(
        name: impl Into<String>,
        country_index: usize,
        local_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country_index,
            local_number: local_number.into(),
        }
    }
}

/// Edit service over a [`NumberStore`] and a country table.
///
/// Glues the resolver and wildcard conversion to the persistence seam:
/// load converts storage form into the country + local split the screen
/// renders, save reassembles and writes the storage form back.
#[derive(Debug, Clone)]
pub struct EditService<'t, S: NumberStore> {
    store: S,
    table: &'t CountryTable,
}

impl<'t, S: NumberStore> EditService<'t, S> {
    /// Create a service over the given store and table.
    pub fn new(store: S, table: &'t CountryTable) -> Self {
        Self { store, table }
    }

    /// Create a service over the built-in country catalog.
    pub fn with_builtin_table(store: S) -> EditService<'static, S> {
        EditService::new(store, CountryTable::builtin())
    }

    /// Reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the entry stored under `number` (storage form) and split it for
    /// editing. `None` when no such entry exists.
    pub fn load_for_edit(&self, number: &str) -> Result<Option<EditForm>, EditError<S::Error>> {
        let Some(entry) = self.store.load(number).map_err(EditError::Store)? else {
            return Ok(None);
        };

        let view_number = storage_to_view(&entry.number);
        let country_index = find_by_dial_code(self.table, &view_number);
        let local_number = strip_dial_code(self.table, &view_number, country_index)?;

        #[cfg(feature = "tracing")]
        debug!(number, country_index, "loaded entry for editing");

        Ok(Some(EditForm {
            name: entry.name,
            country_index,
            local_number,
        }))
    }

    /// Validate and persist a form.
    ///
    /// `original_number` is the storage-form key the entry was loaded under,
    /// or `None` when creating a new entry. Returns the storage-form string
    /// that was written.
    pub fn save(
        &mut self,
        form: &EditForm,
        original_number: Option<&str>,
    ) -> Result<String, EditError<S::Error>> {
        if form.name.is_empty() {
            return Err(EditError::EmptyName);
        }
        if form.local_number.is_empty() && form.country_index == 0 {
            return Err(EditError::EmptyNumber);
        }

        let combined = combine(self.table, form.country_index, &form.local_number)?;
        let storage_number = view_to_storage(&combined);
        let entry = BlocklistEntry::new(&form.name, &storage_number);

        match original_number {
            Some(original) => self
                .store
                .update(original, entry)
                .map_err(EditError::Store)?,
            None => self.store.insert(entry).map_err(EditError::Store)?,
        }

        #[cfg(feature = "tracing")]
        debug!(number = %storage_number, "saved entry");

        Ok(storage_number)
    }
}
