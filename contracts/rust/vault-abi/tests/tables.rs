use std::collections::HashSet;

use alloy::{
    json_abi::{InternalType, StateMutability},
    primitives::{keccak256, Selector},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use vault_abi::{
    find_across_versions, validate::validate, EntryKind, VaultAbi, VaultVersion, VAULT_ABI_V0_1_0,
    VAULT_ABI_V0_2_0, VAULT_ABI_V0_4_0, VAULT_ABI_V0_5_0,
};

#[rstest]
fn test_table_is_well_formed(
    #[values(
        VaultVersion::V0_1_0,
        VaultVersion::V0_2_0,
        VaultVersion::V0_3_0,
        VaultVersion::V0_4_0,
        VaultVersion::V0_5_0
    )]
    version: VaultVersion,
) {
    let abi = version.abi();
    assert_eq!(abi.version(), version);
    validate(abi.entries()).unwrap();

    assert_eq!(abi.count(EntryKind::Constructor), 1);
    assert_eq!(abi.count(EntryKind::Fallback), 0);
    assert_eq!(abi.count(EntryKind::Receive), 0);
    assert!(abi.count(EntryKind::Function) > 60);
    assert!(abi.count(EntryKind::Event) > 20);
    assert!(abi.count(EntryKind::Error) > 40);
}

#[rstest]
fn test_no_duplicate_signatures(
    #[values(
        VaultVersion::V0_1_0,
        VaultVersion::V0_2_0,
        VaultVersion::V0_3_0,
        VaultVersion::V0_4_0,
        VaultVersion::V0_5_0
    )]
    version: VaultVersion,
) {
    let abi = version.abi();
    let mut seen = HashSet::new();
    let signatures = abi
        .functions()
        .map(|f| (EntryKind::Function, f.signature()))
        .chain(abi.events().map(|e| (EntryKind::Event, e.signature())))
        .chain(abi.errors().map(|e| (EntryKind::Error, e.signature())));
    for (kind, signature) in signatures {
        assert!(
            seen.insert((kind, signature.clone())),
            "{version}: duplicate {kind} {signature}"
        );
    }
}

/// Read the artifact as plain JSON so that defaults filled in by the decoder cannot hide a
/// missing flag.
#[rstest]
fn test_event_flags_are_explicit(
    #[values(
        VaultVersion::V0_1_0,
        VaultVersion::V0_2_0,
        VaultVersion::V0_3_0,
        VaultVersion::V0_4_0,
        VaultVersion::V0_5_0
    )]
    version: VaultVersion,
) {
    let raw: serde_json::Value = serde_json::from_str(version.artifact()).unwrap();
    let events = raw
        .as_array()
        .unwrap()
        .iter()
        .filter(|entry| entry["type"] == "event")
        .collect::<Vec<_>>();
    assert_eq!(events.len(), version.abi().count(EntryKind::Event));

    for event in events {
        let name = event["name"].as_str().unwrap();
        assert!(
            event["anonymous"].is_boolean(),
            "{version}: {name} lacks anonymous"
        );
        for param in event["inputs"].as_array().unwrap() {
            assert!(
                param["indexed"].is_boolean(),
                "{version}: {name}.{} lacks indexed",
                param["name"]
            );
        }
    }
}

#[rstest]
fn test_json_round_trip(
    #[values(
        VaultVersion::V0_1_0,
        VaultVersion::V0_2_0,
        VaultVersion::V0_3_0,
        VaultVersion::V0_4_0,
        VaultVersion::V0_5_0
    )]
    version: VaultVersion,
) -> anyhow::Result<()> {
    let abi = version.abi();
    let json = abi.to_json()?;
    let reparsed = VaultAbi::from_json(version, &json)?;
    assert_eq!(&reparsed, abi);
    assert_eq!(reparsed.to_json()?, json);

    let pretty = VaultAbi::from_json(version, &abi.to_json_pretty()?)?;
    assert_eq!(&pretty, abi);

    // Nothing in the artifact is lost or invented on the way through the decoder.
    let artifact: serde_json::Value = serde_json::from_str(version.artifact())?;
    let encoded: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(encoded, artifact);
    Ok(())
}

#[test]
fn test_initialize_shape_changes_between_versions() {
    let v1 = VAULT_ABI_V0_1_0
        .functions_named("initialize")
        .collect::<Vec<_>>();
    assert_eq!(v1.len(), 1);
    let init = &v1[0].inputs;
    assert_eq!(init.len(), 1);
    assert_eq!(init[0].ty, "tuple");
    assert!(matches!(
        &init[0].internal_type,
        Some(InternalType::Struct { ty, .. }) if ty == "InitStruct"
    ));
    assert!(!init[0].components.is_empty());

    for abi in [&*VAULT_ABI_V0_4_0, &*VAULT_ABI_V0_5_0] {
        let overloads = abi.functions_named("initialize").collect::<Vec<_>>();
        assert_eq!(overloads.len(), 1, "{}", abi.version());
        let types = overloads[0]
            .inputs
            .iter()
            .map(|p| (p.name.as_str(), p.ty.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            types,
            [
                ("data", "bytes"),
                ("feeRegistry", "address"),
                ("wrappedNativeToken", "address"),
            ]
        );
        assert_eq!(
            overloads[0].signature(),
            "initialize(bytes,address,address)"
        );
    }

    // A consumer dispatching on the version can tell the two apart by arity alone.
    assert!(VAULT_ABI_V0_1_0.function("initialize", 1).is_some());
    assert!(VAULT_ABI_V0_1_0.function("initialize", 3).is_none());
    assert!(VAULT_ABI_V0_5_0.function("initialize", 1).is_none());
    assert!(VAULT_ABI_V0_5_0.function("initialize", 3).is_some());
    assert_ne!(
        VAULT_ABI_V0_1_0.function("initialize", 1).unwrap().selector(),
        VAULT_ABI_V0_5_0.function("initialize", 3).unwrap().selector()
    );
}

#[test]
fn test_version_function_presence() {
    assert!(VAULT_ABI_V0_5_0.has_function("version"));
    assert!(!VAULT_ABI_V0_2_0.has_function("version"));
    assert!(!VAULT_ABI_V0_1_0.has_function("version"));

    let version = VAULT_ABI_V0_5_0.function("version", 0).unwrap();
    assert_eq!(version.state_mutability, StateMutability::Pure);
    assert_eq!(version.outputs[0].ty, "string");

    let presence = find_across_versions("version")
        .into_iter()
        .map(|(version, arities)| (version, !arities.is_empty()))
        .collect::<Vec<_>>();
    assert_eq!(
        presence,
        [
            (VaultVersion::V0_1_0, false),
            (VaultVersion::V0_2_0, false),
            (VaultVersion::V0_3_0, false),
            (VaultVersion::V0_4_0, true),
            (VaultVersion::V0_5_0, true),
        ]
    );
}

#[test]
fn test_overloads_in_latest() {
    let abi = &*VAULT_ABI_V0_5_0;
    let mut deposit = abi
        .functions_named("deposit")
        .map(|f| f.inputs.len())
        .collect::<Vec<_>>();
    deposit.sort();
    assert_eq!(deposit, [2, 3]);

    let mut request = abi
        .functions_named("requestDeposit")
        .map(|f| f.inputs.len())
        .collect::<Vec<_>>();
    request.sort();
    assert_eq!(request, [3, 4]);
    for f in abi.functions_named("requestDeposit") {
        assert_eq!(f.state_mutability, StateMutability::Payable);
    }

    // The alloy view keeps both overloads under one name.
    let json_abi = abi.to_json_abi();
    assert_eq!(json_abi.function("requestDeposit").map(Vec::len), Some(2));
    assert_eq!(json_abi.function("deposit").map(Vec::len), Some(2));
}

#[test]
fn test_latest_additions_absent_from_first_release() {
    for name in [
        "acceptOwnership",
        "pendingOwner",
        "pause",
        "unpause",
        "updateTotalAssetsLifespan",
        "expireTotalAssets",
        "syncDeposit",
        "version",
    ] {
        assert!(VAULT_ABI_V0_5_0.has_function(name), "{name}");
        assert!(!VAULT_ABI_V0_1_0.has_function(name), "{name}");
    }
    for name in ["Referral", "Paused", "Unpaused", "OwnershipTransferStarted"] {
        assert!(VAULT_ABI_V0_5_0.event(name).is_some(), "{name}");
        assert!(VAULT_ABI_V0_1_0.event(name).is_none(), "{name}");
    }
    for name in ["EnforcedPause", "ExpectedPause", "OnlySyncDepositAllowed"] {
        assert!(VAULT_ABI_V0_5_0.error(name).is_some(), "{name}");
        assert!(VAULT_ABI_V0_1_0.error(name).is_none(), "{name}");
    }
}

#[rstest]
fn test_revert_errors_are_decodable(
    #[values(
        VaultVersion::V0_1_0,
        VaultVersion::V0_2_0,
        VaultVersion::V0_3_0,
        VaultVersion::V0_4_0,
        VaultVersion::V0_5_0
    )]
    version: VaultVersion,
) {
    let abi = version.abi();

    let not_whitelisted = abi.error("NotWhitelisted").unwrap();
    assert!(not_whitelisted.inputs.is_empty());

    let signature = "ERC4626ExceededMaxDeposit(address,uint256,uint256)";
    let selector = Selector::from_slice(&keccak256(signature)[..4]);
    let err = abi.error_by_selector(selector).unwrap();
    assert_eq!(err.name, "ERC4626ExceededMaxDeposit");
    assert_eq!(err.signature(), signature);
}

#[rstest]
fn test_event_topics(
    #[values(
        VaultVersion::V0_1_0,
        VaultVersion::V0_2_0,
        VaultVersion::V0_3_0,
        VaultVersion::V0_4_0,
        VaultVersion::V0_5_0
    )]
    version: VaultVersion,
) {
    let abi = version.abi();
    let topic = keccak256("Transfer(address,address,uint256)");
    let transfer = abi.event_by_topic(topic).unwrap();
    assert_eq!(transfer.name, "Transfer");
    assert_eq!(
        transfer.inputs.iter().map(|p| p.indexed).collect::<Vec<_>>(),
        [true, true, false]
    );

    // Struct-typed event parameters expand to their component types in the signature.
    let rates = abi.event("RatesUpdated").unwrap();
    assert_eq!(
        rates.signature(),
        "RatesUpdated((uint16,uint16),(uint16,uint16),uint256)"
    );
}

#[test]
fn test_statics_match_versions() {
    for version in VaultVersion::all() {
        assert_eq!(version.abi().version(), version);
        let reloaded = VaultAbi::from_json(version, version.artifact()).unwrap();
        assert_eq!(&reloaded, version.abi());
    }
}
