//! Structural checks applied to every table before it is handed out.

use std::collections::HashSet;

use alloy::{
    dyn_abi::Specifier,
    json_abi::{AbiItem, EventParam, Param},
};

use crate::{error::VaultAbiError, table::EntryKind};

/// Topics available to event parameters, after topic 0 is taken by the signature hash.
const MAX_INDEXED: usize = 3;
const MAX_INDEXED_ANONYMOUS: usize = 4;

/// Check that `entries` form a well-formed ABI.
///
/// Every parameter type must resolve to an ABI type, tuples must carry components, there is at
/// most one constructor, fallback and receive, no two entries share a kind and signature, and
/// events fit their indexed parameters into the available topics.
pub fn validate(entries: &[AbiItem<'_>]) -> Result<(), VaultAbiError> {
    let mut seen = HashSet::new();
    for item in entries {
        let kind = EntryKind::of(item);
        let signature = match item {
            AbiItem::Constructor(c) => {
                check_params("constructor", &c.inputs)?;
                kind.to_string()
            },
            AbiItem::Fallback(_) | AbiItem::Receive(_) => kind.to_string(),
            AbiItem::Function(f) => {
                check_params(&f.name, &f.inputs)?;
                check_params(&f.name, &f.outputs)?;
                f.signature()
            },
            AbiItem::Error(e) => {
                check_params(&e.name, &e.inputs)?;
                e.signature()
            },
            AbiItem::Event(e) => {
                for param in &e.inputs {
                    check_event_param(&e.name, param)?;
                }
                let count = e.inputs.iter().filter(|p| p.indexed).count();
                let max = if e.anonymous {
                    MAX_INDEXED_ANONYMOUS
                } else {
                    MAX_INDEXED
                };
                if count > max {
                    return Err(VaultAbiError::TooManyIndexed {
                        event: e.name.clone(),
                        count,
                        max,
                    });
                }
                e.signature()
            },
        };

        if !seen.insert((kind, signature.clone())) {
            return Err(match kind {
                EntryKind::Constructor | EntryKind::Fallback | EntryKind::Receive => {
                    VaultAbiError::MultipleSpecial(kind)
                },
                _ => VaultAbiError::DuplicateEntry { kind, signature },
            });
        }
    }
    Ok(())
}

fn check_params(entry: &str, params: &[Param]) -> Result<(), VaultAbiError> {
    params.iter().try_for_each(|param| check_param(entry, param))
}

fn check_param(entry: &str, param: &Param) -> Result<(), VaultAbiError> {
    check_components(entry, &param.name, &param.ty, &param.components)?;
    param
        .resolve()
        .map_err(|source| invalid_type(entry, &param.name, &param.ty, source))?;
    Ok(())
}

fn check_event_param(entry: &str, param: &EventParam) -> Result<(), VaultAbiError> {
    check_components(entry, &param.name, &param.ty, &param.components)?;
    param
        .resolve()
        .map_err(|source| invalid_type(entry, &param.name, &param.ty, source))?;
    Ok(())
}

fn check_components(
    entry: &str,
    name: &str,
    ty: &str,
    components: &[Param],
) -> Result<(), VaultAbiError> {
    // alloy refuses components on a type not prefixed with `tuple` while decoding, so only the
    // missing case is left. `tuple`, `tuple[]` and `tuple[N]` all carry their members here.
    if ty.starts_with("tuple") && components.is_empty() {
        return Err(VaultAbiError::MissingComponents {
            entry: entry.to_string(),
            param: name.to_string(),
        });
    }
    check_params(entry, components)
}

fn invalid_type(
    entry: &str,
    name: &str,
    ty: &str,
    source: alloy::dyn_abi::Error,
) -> VaultAbiError {
    VaultAbiError::InvalidType {
        entry: entry.to_string(),
        param: name.to_string(),
        ty: ty.to_string(),
        source,
    }
}
