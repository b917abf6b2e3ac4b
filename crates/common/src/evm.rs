use crate::{Address, utils::keccak};
use solovm_rlp::structs::Encoder;

/// Address of a contract deployed through CREATE: the low 20 bytes of
/// `keccak256(rlp([deployer, deployer_nonce]))`.
pub fn calculate_create_address(deployer: Address, nonce: u64) -> Address {
    let mut buf = vec![];
    Encoder::new()
        .encode_field(&deployer)
        .encode_field(&nonce)
        .finish(&mut buf);
    Address::from_slice(&keccak(&buf).as_bytes()[12..])
}

#[cfg(test)]
mod tests {
    use super::calculate_create_address;
    use crate::Address;
    use std::str::FromStr;

    #[test]
    fn create_address_known_vector() {
        let deployer = Address::from_str("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0").unwrap();
        assert_eq!(
            calculate_create_address(deployer, 0),
            Address::from_str("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d").unwrap()
        );
        // The nonce participates in the hash.
        assert_ne!(
            calculate_create_address(deployer, 1),
            calculate_create_address(deployer, 0)
        );
    }
}
