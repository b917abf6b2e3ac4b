mod account;
mod block;
mod transaction;

pub use account::Account;
pub use block::BlockHeader;
pub use transaction::Transaction;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, U256};
    use std::str::FromStr;

    #[test]
    fn transaction_from_hex_fixture() {
        // Word valued fields may come with or without the 0x prefix, and
        // calldata comes as a bare hex string.
        let tx: Transaction = serde_json::from_str(
            r#"{
                "to": "0x1000000000000000000000000000000000000aaa",
                "from": "0x2000000000000000000000000000000000000bbb",
                "origin": "0x2000000000000000000000000000000000000bbb",
                "gasprice": "0x1",
                "value": "ff",
                "data": "aabbcc"
            }"#,
        )
        .unwrap();

        assert_eq!(
            tx.to,
            Address::from_str("1000000000000000000000000000000000000aaa").unwrap()
        );
        assert_eq!(tx.gas_price, U256::one());
        assert_eq!(tx.value, U256::from(0xff));
        assert_eq!(tx.data.as_ref(), &[0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn block_header_defaults_missing_fields() {
        let header: BlockHeader =
            serde_json::from_str(r#"{"timestamp": "0x64", "chainid": "1"}"#).unwrap();
        assert_eq!(header.timestamp, U256::from(100));
        assert_eq!(header.chain_id, U256::one());
        assert_eq!(header.number, U256::zero());
        assert_eq!(header.coinbase, Address::zero());
    }

    #[test]
    fn account_defaults_to_empty() {
        let account: Account = serde_json::from_str("{}").unwrap();
        assert!(account.is_empty());
        assert!(!account.has_code());

        let funded: Account =
            serde_json::from_str(r#"{"balance": "0x0de0b6b3a7640000", "nonce": "0x1"}"#).unwrap();
        assert_eq!(funded.balance, U256::from(10u64.pow(18)));
        assert!(funded.has_nonce());
        assert!(!funded.is_empty());
    }
}
