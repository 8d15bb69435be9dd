use lazy_static::lazy_static;

use crate::{table::VaultAbi, version::VaultVersion};

pub const VAULT_ABI_V0_1_0_JSON: &str = include_str!("../abi/vault_v0_1_0.json");
pub const VAULT_ABI_V0_2_0_JSON: &str = include_str!("../abi/vault_v0_2_0.json");
pub const VAULT_ABI_V0_3_0_JSON: &str = include_str!("../abi/vault_v0_3_0.json");
pub const VAULT_ABI_V0_4_0_JSON: &str = include_str!("../abi/vault_v0_4_0.json");
pub const VAULT_ABI_V0_5_0_JSON: &str = include_str!("../abi/vault_v0_5_0.json");

lazy_static! {
    /// `vaultAbi_v0_1_0`
    pub static ref VAULT_ABI_V0_1_0: VaultAbi = embedded(VaultVersion::V0_1_0);
    /// `vaultAbi_v0_2_0`
    pub static ref VAULT_ABI_V0_2_0: VaultAbi = embedded(VaultVersion::V0_2_0);
    /// `vaultAbi_v0_3_0`
    pub static ref VAULT_ABI_V0_3_0: VaultAbi = embedded(VaultVersion::V0_3_0);
    /// `vaultAbi_v0_4_0`
    pub static ref VAULT_ABI_V0_4_0: VaultAbi = embedded(VaultVersion::V0_4_0);
    /// `vaultAbi_v0_5_0`
    pub static ref VAULT_ABI_V0_5_0: VaultAbi = embedded(VaultVersion::V0_5_0);
}

// The artifacts are checked by the test suite, a failure here means a corrupted build.
fn embedded(version: VaultVersion) -> VaultAbi {
    VaultAbi::from_json(version, version.artifact())
        .unwrap_or_else(|err| panic!("embedded vault ABI {version} is malformed: {err}"))
}
