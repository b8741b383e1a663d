//! Serde plumbing shared by the record types.
//!
//! Records are read from JSON objects whose key spelling varies between
//! stores. Each scoring field is lifted out of the document under whichever
//! spelling was present, and the spelling plus raw value are remembered so
//! the document can be written back as it arrived.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Key the record types use for their identifier.
pub(crate) const ID_FIELD: &str = "id";
/// Identifier key used by the document store; preferred over [`ID_FIELD`].
pub(crate) const STORE_ID_FIELD: &str = "_id";

/// A scoring field as it appeared in the source document.
#[derive(Debug, Clone, PartialEq)]
struct SourceField {
    key: String,
    raw: Value,
}

/// Where each scoring field of a record was read from.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Provenance {
    fields: BTreeMap<&'static str, SourceField>,
}

impl Provenance {
    /// Remove a scoring field from `document` and decode it.
    ///
    /// `alias` wins over `canonical` when both keys are present; the losing
    /// key stays in `document`. A missing key or an explicit `null` decodes
    /// to the type's default.
    pub(crate) fn take<T>(
        &mut self,
        document: &mut Map<String, Value>,
        canonical: &'static str,
        alias: Option<&'static str>,
    ) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned + Default,
    {
        let key = alias
            .filter(|spelling| document.contains_key(*spelling))
            .unwrap_or(canonical);
        let Some(raw) = document.remove(key) else {
            return Ok(T::default());
        };
        let value = decode(&raw)?;
        self.fields.insert(
            canonical,
            SourceField {
                key: key.to_owned(),
                raw,
            },
        );
        Ok(value)
    }

    /// Write a scoring field back into `document`.
    ///
    /// A field read from the source keeps its key and, while its value is
    /// unchanged, its raw JSON. A field absent from the source is written
    /// under `canonical` only once it differs from the default.
    pub(crate) fn restore<T>(
        &self,
        document: &mut Map<String, Value>,
        canonical: &'static str,
        value: &T,
    ) -> Result<(), serde_json::Error>
    where
        T: Serialize + DeserializeOwned + Default + PartialEq,
    {
        match self.fields.get(canonical) {
            Some(source) => {
                let unchanged = decode::<T>(&source.raw).is_ok_and(|original| original == *value);
                let raw = if unchanged {
                    source.raw.clone()
                } else {
                    serde_json::to_value(value)?
                };
                document.insert(source.key.clone(), raw);
            }
            None if *value != T::default() => {
                document.insert(canonical.to_owned(), serde_json::to_value(value)?);
            }
            None => {}
        }
        Ok(())
    }
}

fn decode<T>(raw: &Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    Option::<T>::deserialize(raw).map(Option::unwrap_or_default)
}
