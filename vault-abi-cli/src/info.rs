use std::io::Write;

use alloy::json_abi::{AbiItem, EventParam, Param, StateMutability};
use anyhow::{bail, Context as _, Result};
use vault_abi::{find_across_versions, EntryKind, VaultAbi, VaultVersion};

use crate::parse::{EntryId, OutputFormat};

pub fn display_versions(out: &mut impl Write) -> Result<()> {
    for version in VaultVersion::all() {
        let abi = version.abi();
        writeln!(
            out,
            "{version}\t{}\tconstructor={} functions={} events={} errors={}",
            version.constant_name(),
            abi.count(EntryKind::Constructor),
            abi.count(EntryKind::Function),
            abi.count(EntryKind::Event),
            abi.count(EntryKind::Error),
        )?;
    }
    Ok(())
}

pub fn display_table(
    out: &mut impl Write,
    version: VaultVersion,
    kind: Option<EntryKind>,
    format: OutputFormat,
) -> Result<()> {
    let abi = version.abi();
    let entries = abi
        .entries()
        .iter()
        .filter(|item| kind.map_or(true, |kind| EntryKind::of(item) == kind))
        .collect::<Vec<_>>();
    tracing::debug!(%version, ?kind, entries = entries.len(), "displaying ABI table");

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        },
        OutputFormat::Signatures => {
            for item in entries {
                writeln!(out, "{}", describe(item))?;
            }
        },
    }
    Ok(())
}

/// Human readable one-line rendering of an entry, e.g.
/// `function deposit(uint256 assets, address receiver) nonpayable returns (uint256)`.
pub fn describe(item: &AbiItem<'_>) -> String {
    match item {
        AbiItem::Constructor(c) => format!(
            "constructor({}) {}",
            params(&c.inputs),
            mutability(c.state_mutability)
        ),
        AbiItem::Function(f) => {
            let mut line = format!(
                "function {}({}) {}",
                f.name,
                params(&f.inputs),
                mutability(f.state_mutability)
            );
            if !f.outputs.is_empty() {
                line.push_str(&format!(" returns ({})", params(&f.outputs)));
            }
            line
        },
        AbiItem::Event(e) => {
            let anonymous = if e.anonymous { " anonymous" } else { "" };
            format!("event {}({}){anonymous}", e.name, event_params(&e.inputs))
        },
        AbiItem::Error(e) => format!("error {}({})", e.name, params(&e.inputs)),
        AbiItem::Fallback(f) => format!("fallback() {}", mutability(f.state_mutability)),
        AbiItem::Receive(r) => format!("receive() {}", mutability(r.state_mutability)),
    }
}

fn params(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| named(&p.selector_type(), &p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn event_params(params: &[EventParam]) -> String {
    params
        .iter()
        .map(|p| {
            let ty = p.selector_type();
            if p.indexed {
                named(&format!("{ty} indexed"), &p.name)
            } else {
                named(&ty, &p.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn named(ty: &str, name: &str) -> String {
    if name.is_empty() {
        ty.to_string()
    } else {
        format!("{ty} {name}")
    }
}

fn mutability(m: StateMutability) -> &'static str {
    match m {
        StateMutability::Pure => "pure",
        StateMutability::View => "view",
        StateMutability::NonPayable => "nonpayable",
        StateMutability::Payable => "payable",
    }
}

/// Report, per version, the function overloads, event and error named `name`.
pub fn display_presence(out: &mut impl Write, name: &str) -> Result<()> {
    let mut found = false;
    for (version, arities) in find_across_versions(name) {
        let abi = version.abi();
        let mut kinds = Vec::new();
        if !arities.is_empty() {
            let arities = arities
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            kinds.push(format!("function (arity {arities})"));
        }
        if abi.event(name).is_some() {
            kinds.push(EntryKind::Event.to_string());
        }
        if abi.error(name).is_some() {
            kinds.push(EntryKind::Error.to_string());
        }

        if kinds.is_empty() {
            writeln!(out, "{version}\t{name}: absent")?;
        } else {
            found = true;
            writeln!(out, "{version}\t{name}: {}", kinds.join("; "))?;
        }
    }
    if !found {
        tracing::warn!("`{name}` is not declared by any vault version");
    }
    Ok(())
}

pub fn display_selectors(out: &mut impl Write, version: VaultVersion) -> Result<()> {
    let abi = version.abi();
    for f in abi.functions() {
        writeln!(out, "{}\tfunction\t{}", f.selector(), f.signature())?;
    }
    for e in abi.events().filter(|e| !e.anonymous) {
        writeln!(out, "{}\tevent\t{}", e.selector(), e.signature())?;
    }
    for e in abi.errors() {
        writeln!(out, "{}\terror\t{}", e.selector(), e.signature())?;
    }
    Ok(())
}

/// Find the entries matching a selector or topic in every version.
pub fn lookup(out: &mut impl Write, id: EntryId) -> Result<()> {
    let mut matches = 0;
    for version in VaultVersion::all() {
        let abi = version.abi();
        let found = match id {
            EntryId::Selector(selector) => {
                let mut found = Vec::new();
                if let Some(f) = abi.function_by_selector(selector) {
                    found.push((EntryKind::Function, f.signature()));
                }
                if let Some(e) = abi.error_by_selector(selector) {
                    found.push((EntryKind::Error, e.signature()));
                }
                found
            },
            EntryId::Topic(topic) => abi
                .event_by_topic(topic)
                .map(|e| (EntryKind::Event, e.signature()))
                .into_iter()
                .collect(),
        };
        for (kind, signature) in found {
            matches += 1;
            writeln!(out, "{version}\t{kind}\t{signature}")?;
        }
    }
    if matches == 0 {
        bail!("No vault ABI entry matches {id}");
    }
    Ok(())
}

/// Re-validate every embedded artifact from its raw text.
pub fn check_all(out: &mut impl Write) -> Result<()> {
    for version in VaultVersion::all() {
        let abi = VaultAbi::from_json(version, version.artifact())
            .with_context(|| format!("Vault ABI {version} is malformed"))?;
        tracing::info!(%version, entries = abi.len(), "ABI table is well-formed");
        writeln!(out, "{version}: ok ({} entries)", abi.len())?;
    }
    Ok(())
}
