use std::str::FromStr;

use derive_more::Display;
use strum::{EnumIter, IntoEnumIterator};

use crate::{artifacts::*, error::VaultAbiError, table::VaultAbi};

/// Released versions of the vault contract with a published ABI.
///
/// Every version is an independent snapshot. Ordering follows release order.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum VaultVersion {
    #[display("v0.1.0")]
    V0_1_0,
    #[display("v0.2.0")]
    V0_2_0,
    #[display("v0.3.0")]
    V0_3_0,
    #[display("v0.4.0")]
    V0_4_0,
    #[default]
    #[display("v0.5.0")]
    V0_5_0,
}

impl VaultVersion {
    /// The newest released version.
    pub const LATEST: Self = Self::V0_5_0;

    /// All versions, oldest first.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn semver(self) -> semver::Version {
        match self {
            Self::V0_1_0 => semver::Version::new(0, 1, 0),
            Self::V0_2_0 => semver::Version::new(0, 2, 0),
            Self::V0_3_0 => semver::Version::new(0, 3, 0),
            Self::V0_4_0 => semver::Version::new(0, 4, 0),
            Self::V0_5_0 => semver::Version::new(0, 5, 0),
        }
    }

    /// Name under which the table is conventionally exported, e.g. `vaultAbi_v0_5_0`.
    pub fn constant_name(self) -> String {
        let v = self.semver();
        format!("vaultAbi_v{}_{}_{}", v.major, v.minor, v.patch)
    }

    /// File name of the embedded artifact, e.g. `vault_v0_5_0.json`.
    pub fn artifact_file_name(self) -> String {
        let v = self.semver();
        format!("vault_v{}_{}_{}.json", v.major, v.minor, v.patch)
    }

    /// Raw ABI-JSON artifact for this version.
    pub fn artifact(self) -> &'static str {
        match self {
            Self::V0_1_0 => VAULT_ABI_V0_1_0_JSON,
            Self::V0_2_0 => VAULT_ABI_V0_2_0_JSON,
            Self::V0_3_0 => VAULT_ABI_V0_3_0_JSON,
            Self::V0_4_0 => VAULT_ABI_V0_4_0_JSON,
            Self::V0_5_0 => VAULT_ABI_V0_5_0_JSON,
        }
    }

    /// The validated table for this version.
    pub fn abi(self) -> &'static VaultAbi {
        match self {
            Self::V0_1_0 => &VAULT_ABI_V0_1_0,
            Self::V0_2_0 => &VAULT_ABI_V0_2_0,
            Self::V0_3_0 => &VAULT_ABI_V0_3_0,
            Self::V0_4_0 => &VAULT_ABI_V0_4_0,
            Self::V0_5_0 => &VAULT_ABI_V0_5_0,
        }
    }
}

impl TryFrom<semver::Version> for VaultVersion {
    type Error = VaultAbiError;

    fn try_from(value: semver::Version) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|version| version.semver() == value)
            .ok_or_else(|| VaultAbiError::UnknownVersion(value.to_string()))
    }
}

impl FromStr for VaultVersion {
    type Err = VaultAbiError;

    /// Accepts `v0.5.0`, `0.5.0` or the constant name `vaultAbi_v0_5_0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(version) = Self::iter().find(|v| v.constant_name() == s) {
            return Ok(version);
        }
        let version = semver::Version::parse(s.strip_prefix('v').unwrap_or(s))
            .map_err(|_| VaultAbiError::UnknownVersion(s.to_string()))?;
        Self::try_from(version).map_err(|_| VaultAbiError::UnknownVersion(s.to_string()))
    }
}
