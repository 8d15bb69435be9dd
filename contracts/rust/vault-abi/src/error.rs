use crate::table::EntryKind;

/// Errors encountered when loading or validating a vault ABI table
#[derive(Debug, thiserror::Error)]
pub enum VaultAbiError {
    #[error("Failed to parse ABI JSON")]
    Json(#[from] serde_json::Error),
    #[error("{entry}: parameter `{param}` has unrecognized type `{ty}`")]
    InvalidType {
        entry: String,
        param: String,
        ty: String,
        #[source]
        source: alloy::dyn_abi::Error,
    },
    #[error("{entry}: tuple parameter `{param}` has no components")]
    MissingComponents { entry: String, param: String },
    #[error("ABI declares more than one {0}")]
    MultipleSpecial(EntryKind),
    #[error("duplicate {kind} `{signature}`")]
    DuplicateEntry { kind: EntryKind, signature: String },
    #[error("event `{event}` has {count} indexed parameters, at most {max} allowed")]
    TooManyIndexed {
        event: String,
        count: usize,
        max: usize,
    },
    #[error("Unknown vault ABI version: {0}")]
    UnknownVersion(String),
}
