use alloy::{
    hex,
    primitives::{Selector, B256},
};
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use derive_more::Display;

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical ABI-JSON.
    #[default]
    #[display("json")]
    Json,
    /// One human readable signature per line.
    #[display("signatures")]
    Signatures,
}

/// A function or error selector, or an event topic.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum EntryId {
    #[display("selector {_0}")]
    Selector(Selector),
    #[display("topic {_0}")]
    Topic(B256),
}

/// Parse a hex selector or topic. At most one `0x` prefix is accepted.
pub fn parse_entry_id(s: &str) -> Result<EntryId> {
    let bytes = hex::decode(s.trim())?;
    match bytes.len() {
        4 => Ok(EntryId::Selector(Selector::from_slice(&bytes))),
        32 => Ok(EntryId::Topic(B256::from_slice(&bytes))),
        len => Err(anyhow!(
            "invalid selector or topic length: {len} bytes (expected 4 or 32)"
        )),
    }
}

#[cfg(test)]
mod test {
    use alloy::primitives::{b256, fixed_bytes};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0x6e553f65")]
    #[case("6e553f65")]
    #[case(" 0x6E553F65 ")]
    fn test_parse_selector(#[case] input: &str) {
        assert_eq!(
            parse_entry_id(input).unwrap(),
            EntryId::Selector(fixed_bytes!("6e553f65"))
        );
    }

    #[test]
    fn test_parse_topic() {
        let topic = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
        assert_eq!(
            parse_entry_id(topic).unwrap(),
            EntryId::Topic(b256!(
                "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
            ))
        );
    }

    #[rstest]
    #[case("0x6e553f")]
    #[case("0xzz553f65")]
    #[case("0x0x6e553f65")]
    #[case("0x")]
    #[case("")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(parse_entry_id(input).is_err());
    }
}
