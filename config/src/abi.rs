pub const CREATE_FN_NAME: &str = "create";

pub const TOKEN_BUNDLER_ABI: &str = r#"[
    {
        "inputs": [
            {
                "components": [
                    {
                        "internalType": "enum MultiToken.Category",
                        "name": "category",
                        "type": "uint8"
                    },
                    {
                        "internalType": "address",
                        "name": "assetAddress",
                        "type": "address"
                    },
                    {
                        "internalType": "uint256",
                        "name": "id",
                        "type": "uint256"
                    },
                    {
                        "internalType": "uint256",
                        "name": "amount",
                        "type": "uint256"
                    }
                ],
                "internalType": "struct MultiToken.Asset[]",
                "name": "_assets",
                "type": "tuple[]"
            }
        ],
        "name": "create",
        "outputs": [
            {
                "internalType": "uint256",
                "name": "bundleId",
                "type": "uint256"
            }
        ],
        "stateMutability": "nonpayable",
        "type": "function"
    },
    {
        "inputs": [
            {
                "internalType": "uint256",
                "name": "_bundleId",
                "type": "uint256"
            }
        ],
        "name": "unwrap",
        "outputs": [],
        "stateMutability": "nonpayable",
        "type": "function"
    }
]"#;
