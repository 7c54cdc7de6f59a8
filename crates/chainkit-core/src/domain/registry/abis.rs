//! Canned ABI JSON per contract.
//!
//! The blobs are opaque to the generator: they are written verbatim to
//! `lib/__abis__/abis/<Contract>.json`. Aave and DyDx have none registered.

use tracing::warn;

use crate::domain::{entities::AbiRecord, value_objects::ProtocolId};

const BANCOR_NETWORK: &str = r#"[
  {"type":"function","name":"convertByPath","stateMutability":"payable","inputs":[{"name":"_path","type":"address[]"},{"name":"_amount","type":"uint256"},{"name":"_minReturn","type":"uint256"},{"name":"_beneficiary","type":"address"},{"name":"_affiliateAccount","type":"address"},{"name":"_affiliateFee","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]},
  {"type":"function","name":"rateByPath","stateMutability":"view","inputs":[{"name":"_path","type":"address[]"},{"name":"_amount","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]},
  {"type":"function","name":"conversionPath","stateMutability":"view","inputs":[{"name":"_sourceToken","type":"address"},{"name":"_targetToken","type":"address"}],"outputs":[{"name":"","type":"address[]"}]}
]"#;

const CONTRACT_REGISTRY: &str = r#"[
  {"type":"function","name":"addressOf","stateMutability":"view","inputs":[{"name":"_contractName","type":"bytes32"}],"outputs":[{"name":"","type":"address"}]}
]"#;

const KYBER_NETWORK_PROXY: &str = r#"[
  {"type":"function","name":"getExpectedRate","stateMutability":"view","inputs":[{"name":"src","type":"address"},{"name":"dest","type":"address"},{"name":"srcQty","type":"uint256"}],"outputs":[{"name":"expectedRate","type":"uint256"},{"name":"worstRate","type":"uint256"}]},
  {"type":"function","name":"swapEtherToToken","stateMutability":"payable","inputs":[{"name":"token","type":"address"},{"name":"minConversionRate","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]},
  {"type":"function","name":"swapTokenToEther","stateMutability":"nonpayable","inputs":[{"name":"token","type":"address"},{"name":"srcAmount","type":"uint256"},{"name":"minConversionRate","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]},
  {"type":"function","name":"swapTokenToToken","stateMutability":"nonpayable","inputs":[{"name":"src","type":"address"},{"name":"srcAmount","type":"uint256"},{"name":"dest","type":"address"},{"name":"minConversionRate","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]}
]"#;

const ONE_SPLIT: &str = r#"[
  {"type":"function","name":"getExpectedReturn","stateMutability":"view","inputs":[{"name":"fromToken","type":"address"},{"name":"destToken","type":"address"},{"name":"amount","type":"uint256"},{"name":"parts","type":"uint256"},{"name":"flags","type":"uint256"}],"outputs":[{"name":"returnAmount","type":"uint256"},{"name":"distribution","type":"uint256[]"}]},
  {"type":"function","name":"swap","stateMutability":"payable","inputs":[{"name":"fromToken","type":"address"},{"name":"destToken","type":"address"},{"name":"amount","type":"uint256"},{"name":"minReturn","type":"uint256"},{"name":"distribution","type":"uint256[]"},{"name":"flags","type":"uint256"}],"outputs":[{"name":"returnAmount","type":"uint256"}]}
]"#;

const ONE_SPLIT_MULTI: &str = r#"[
  {"type":"function","name":"getExpectedReturnWithGasMulti","stateMutability":"view","inputs":[{"name":"tokens","type":"address[]"},{"name":"amount","type":"uint256"},{"name":"parts","type":"uint256[]"},{"name":"flags","type":"uint256[]"},{"name":"destTokenEthPriceTimesGasPrices","type":"uint256[]"}],"outputs":[{"name":"returnAmounts","type":"uint256[]"},{"name":"estimateGasAmount","type":"uint256"},{"name":"distribution","type":"uint256[]"}]},
  {"type":"function","name":"swapMulti","stateMutability":"payable","inputs":[{"name":"tokens","type":"address[]"},{"name":"amount","type":"uint256"},{"name":"minReturn","type":"uint256"},{"name":"distribution","type":"uint256[]"},{"name":"flags","type":"uint256[]"}],"outputs":[{"name":"returnAmount","type":"uint256"}]}
]"#;

const UNISWAP_V2_ROUTER_01: &str = r#"[
  {"type":"function","name":"factory","stateMutability":"pure","inputs":[],"outputs":[{"name":"","type":"address"}]},
  {"type":"function","name":"WETH","stateMutability":"pure","inputs":[],"outputs":[{"name":"","type":"address"}]},
  {"type":"function","name":"swapExactTokensForTokens","stateMutability":"nonpayable","inputs":[{"name":"amountIn","type":"uint256"},{"name":"amountOutMin","type":"uint256"},{"name":"path","type":"address[]"},{"name":"to","type":"address"},{"name":"deadline","type":"uint256"}],"outputs":[{"name":"amounts","type":"uint256[]"}]},
  {"type":"function","name":"swapExactETHForTokens","stateMutability":"payable","inputs":[{"name":"amountOutMin","type":"uint256"},{"name":"path","type":"address[]"},{"name":"to","type":"address"},{"name":"deadline","type":"uint256"}],"outputs":[{"name":"amounts","type":"uint256[]"}]},
  {"type":"function","name":"getAmountsOut","stateMutability":"view","inputs":[{"name":"amountIn","type":"uint256"},{"name":"path","type":"address[]"}],"outputs":[{"name":"amounts","type":"uint256[]"}]}
]"#;

const UNISWAP_V2_ROUTER_02: &str = r#"[
  {"type":"function","name":"factory","stateMutability":"pure","inputs":[],"outputs":[{"name":"","type":"address"}]},
  {"type":"function","name":"WETH","stateMutability":"pure","inputs":[],"outputs":[{"name":"","type":"address"}]},
  {"type":"function","name":"swapExactTokensForTokens","stateMutability":"nonpayable","inputs":[{"name":"amountIn","type":"uint256"},{"name":"amountOutMin","type":"uint256"},{"name":"path","type":"address[]"},{"name":"to","type":"address"},{"name":"deadline","type":"uint256"}],"outputs":[{"name":"amounts","type":"uint256[]"}]},
  {"type":"function","name":"swapExactETHForTokens","stateMutability":"payable","inputs":[{"name":"amountOutMin","type":"uint256"},{"name":"path","type":"address[]"},{"name":"to","type":"address"},{"name":"deadline","type":"uint256"}],"outputs":[{"name":"amounts","type":"uint256[]"}]},
  {"type":"function","name":"getAmountsOut","stateMutability":"view","inputs":[{"name":"amountIn","type":"uint256"},{"name":"path","type":"address[]"}],"outputs":[{"name":"amounts","type":"uint256[]"}]},
  {"type":"function","name":"swapExactTokensForTokensSupportingFeeOnTransferTokens","stateMutability":"nonpayable","inputs":[{"name":"amountIn","type":"uint256"},{"name":"amountOutMin","type":"uint256"},{"name":"path","type":"address[]"},{"name":"to","type":"address"},{"name":"deadline","type":"uint256"}],"outputs":[]}
]"#;

/// Registered ABI of one contract.
pub fn lookup(protocol: ProtocolId, contract: &str) -> Option<&'static str> {
    match (protocol, contract) {
        (ProtocolId::Bancor, "BancorNetwork") => Some(BANCOR_NETWORK),
        (ProtocolId::Bancor, "ContractRegistry") => Some(CONTRACT_REGISTRY),
        (ProtocolId::Kyber, "IKyberNetworkProxy") => Some(KYBER_NETWORK_PROXY),
        (ProtocolId::OneInch, "IOneSplit") => Some(ONE_SPLIT),
        (ProtocolId::OneInch, "IOneSplitMulti") => Some(ONE_SPLIT_MULTI),
        (ProtocolId::Uniswap, "IUniswapV2Router01") => Some(UNISWAP_V2_ROUTER_01),
        (ProtocolId::Uniswap, "IUniswapV2Router02") => Some(UNISWAP_V2_ROUTER_02),
        _ => None,
    }
}

/// ABI records for `contracts`.
///
/// Contracts without a registered ABI are dropped; when nothing is left a
/// warning names the protocol and pack and the list is empty.
pub fn resolve(protocol: ProtocolId, pack: &str, contracts: &[&str]) -> Vec<AbiRecord> {
    let records: Vec<AbiRecord> = contracts
        .iter()
        .filter_map(|contract| {
            lookup(protocol, contract).map(|abi| AbiRecord {
                contract_name: (*contract).to_string(),
                abi: abi.to_string(),
            })
        })
        .collect();

    if records.is_empty() {
        warn!(%protocol, %pack, "No ABI registered yet, skipping ABI export");
    }
    records
}
