use std::collections::BTreeSet;

use alloy::{
    json_abi::{AbiItem, Constructor, Error, Event, Function, JsonAbi},
    primitives::{Selector, B256},
};
use derive_more::Display;
use serde::Deserialize;
use strum::{EnumIter, EnumString};

use crate::{error::VaultAbiError, validate::validate, version::VaultVersion};

/// Kind tag of an ABI entry.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    #[display("constructor")]
    Constructor,
    #[display("function")]
    Function,
    #[display("event")]
    Event,
    #[display("error")]
    Error,
    #[display("fallback")]
    Fallback,
    #[display("receive")]
    Receive,
}

impl EntryKind {
    pub fn of(item: &AbiItem<'_>) -> Self {
        match item {
            AbiItem::Constructor(_) => Self::Constructor,
            AbiItem::Function(_) => Self::Function,
            AbiItem::Event(_) => Self::Event,
            AbiItem::Error(_) => Self::Error,
            AbiItem::Fallback(_) => Self::Fallback,
            AbiItem::Receive(_) => Self::Receive,
        }
    }
}

/// Name of a function, event or error entry. Constructor, fallback and receive are unnamed.
pub fn entry_name<'a>(item: &'a AbiItem<'_>) -> Option<&'a str> {
    match item {
        AbiItem::Function(f) => Some(&f.name),
        AbiItem::Event(e) => Some(&e.name),
        AbiItem::Error(e) => Some(&e.name),
        AbiItem::Constructor(_) | AbiItem::Fallback(_) | AbiItem::Receive(_) => None,
    }
}

/// The complete, ordered interface of one vault contract version.
///
/// A `VaultAbi` can only be obtained through [`VaultAbi::from_json`], which validates the entries,
/// and exposes no way to change them afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultAbi {
    version: VaultVersion,
    entries: Vec<AbiItem<'static>>,
}

impl VaultAbi {
    /// Parse an ABI-JSON array and validate its structure.
    pub fn from_json(version: VaultVersion, json: &str) -> Result<Self, VaultAbiError> {
        // Going through `Value` detaches the entries from the lifetime of `json`.
        let value: serde_json::Value = serde_json::from_str(json)?;
        let entries = Vec::<AbiItem<'static>>::deserialize(value)?;
        validate(&entries)?;
        tracing::debug!(%version, entries = entries.len(), "loaded vault ABI table");
        Ok(Self { version, entries })
    }

    pub fn version(&self) -> VaultVersion {
        self.version
    }

    /// All entries in artifact order.
    pub fn entries(&self) -> &[AbiItem<'static>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries_of(&self, kind: EntryKind) -> impl Iterator<Item = &AbiItem<'static>> + '_ {
        self.entries
            .iter()
            .filter(move |item| EntryKind::of(item) == kind)
    }

    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries_of(kind).count()
    }

    /// Distinct names of the entries of one kind, sorted.
    pub fn names(&self, kind: EntryKind) -> BTreeSet<&str> {
        self.entries_of(kind).filter_map(entry_name).collect()
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.entries.iter().find_map(|item| match item {
            AbiItem::Constructor(c) => Some(&**c),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> + '_ {
        self.entries.iter().filter_map(|item| match item {
            AbiItem::Function(f) => Some(&**f),
            _ => None,
        })
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.entries.iter().filter_map(|item| match item {
            AbiItem::Event(e) => Some(&**e),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &Error> + '_ {
        self.entries.iter().filter_map(|item| match item {
            AbiItem::Error(e) => Some(&**e),
            _ => None,
        })
    }

    /// Every overload of the function `name`, in table order.
    pub fn functions_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Function> + 'a {
        self.functions().filter(move |f| f.name == name)
    }

    /// The overload of `name` taking exactly `arity` inputs.
    pub fn function(&self, name: &str, arity: usize) -> Option<&Function> {
        self.functions()
            .find(|f| f.name == name && f.inputs.len() == arity)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions().any(|f| f.name == name)
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events().find(|e| e.name == name)
    }

    pub fn error(&self, name: &str) -> Option<&Error> {
        self.errors().find(|e| e.name == name)
    }

    pub fn function_by_selector(&self, selector: Selector) -> Option<&Function> {
        self.functions().find(|f| f.selector() == selector)
    }

    /// Match revert data prefix against the declared custom errors.
    pub fn error_by_selector(&self, selector: Selector) -> Option<&Error> {
        self.errors().find(|e| e.selector() == selector)
    }

    /// Match a log's first topic against the non-anonymous events.
    pub fn event_by_topic(&self, topic: B256) -> Option<&Event> {
        self.events()
            .filter(|e| !e.anonymous)
            .find(|e| e.selector() == topic)
    }

    /// Canonical compact ABI-JSON.
    pub fn to_json(&self) -> Result<String, VaultAbiError> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, VaultAbiError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Convert into alloy's lookup-oriented representation for encoders and decoders.
    ///
    /// Overloads are kept, table order is not.
    pub fn to_json_abi(&self) -> JsonAbi {
        self.entries.iter().cloned().collect()
    }
}

/// For every version, the input arities of the functions named `name`.
///
/// An empty list means the version has no such function.
pub fn find_across_versions(name: &str) -> Vec<(VaultVersion, Vec<usize>)> {
    VaultVersion::all()
        .map(|version| {
            let arities = version
                .abi()
                .functions_named(name)
                .map(|f| f.inputs.len())
                .collect();
            (version, arities)
        })
        .collect()
}
