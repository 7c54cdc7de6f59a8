//! Solidity interface and library stubs.

use super::{SOLIDITY_VERSION, render};

fn solidity(source: &str, version: &str) -> String {
    render(source, &[(SOLIDITY_VERSION, version)])
}

// ── OpenZeppelin ─────────────────────────────────────────────────────────────

const IERC20: &str = r#"
// SPDX-License-Identifier: MIT
pragma solidity ^{{SOLIDITY_VERSION}};

interface IERC20 {
  function totalSupply() external view returns (uint256);

  function balanceOf(address account) external view returns (uint256);

  function transfer(address recipient, uint256 amount) external returns (bool);

  function allowance(address owner, address spender) external view returns (uint256);

  function approve(address spender, uint256 amount) external returns (bool);

  function transferFrom(
    address sender,
    address recipient,
    uint256 amount
  ) external returns (bool);

  event Transfer(address indexed from, address indexed to, uint256 value);

  event Approval(address indexed owner, address indexed spender, uint256 value);
}
"#;

pub fn ierc20(version: &str) -> String {
    solidity(IERC20, version)
}

// ── Aave ─────────────────────────────────────────────────────────────────────

const AAVE_ILENDING_POOL_ADDRESSES_PROVIDER: &str = r#"
// SPDX-License-Identifier: AGPL-3.0
pragma solidity ^{{SOLIDITY_VERSION}};

interface ILendingPoolAddressesProvider {
  function getMarketId() external view returns (string memory);

  function getLendingPool() external view returns (address);

  function getLendingPoolConfigurator() external view returns (address);

  function getPriceOracle() external view returns (address);

  function getLendingRateOracle() external view returns (address);
}
"#;

const AAVE_ILENDING_POOL: &str = r#"
// SPDX-License-Identifier: AGPL-3.0
pragma solidity ^{{SOLIDITY_VERSION}};
pragma experimental ABIEncoderV2;

import "./ILendingPoolAddressesProvider.sol";
import "../../libraries/Aave/DataTypes.sol";

interface ILendingPool {
  function deposit(
    address asset,
    uint256 amount,
    address onBehalfOf,
    uint16 referralCode
  ) external;

  function withdraw(
    address asset,
    uint256 amount,
    address to
  ) external returns (uint256);

  function borrow(
    address asset,
    uint256 amount,
    uint256 interestRateMode,
    uint16 referralCode,
    address onBehalfOf
  ) external;

  function repay(
    address asset,
    uint256 amount,
    uint256 rateMode,
    address onBehalfOf
  ) external returns (uint256);

  function flashLoan(
    address receiverAddress,
    address[] calldata assets,
    uint256[] calldata amounts,
    uint256[] calldata modes,
    address onBehalfOf,
    bytes calldata params,
    uint16 referralCode
  ) external;

  function getUserAccountData(address user)
    external
    view
    returns (
      uint256 totalCollateralETH,
      uint256 totalDebtETH,
      uint256 availableBorrowsETH,
      uint256 currentLiquidationThreshold,
      uint256 ltv,
      uint256 healthFactor
    );

  function getReserveData(address asset) external view returns (DataTypes.ReserveData memory);

  function getAddressesProvider() external view returns (ILendingPoolAddressesProvider);
}
"#;

const AAVE_DATA_TYPES: &str = r#"
// SPDX-License-Identifier: AGPL-3.0
pragma solidity ^{{SOLIDITY_VERSION}};

library DataTypes {
  struct ReserveData {
    ReserveConfigurationMap configuration;
    uint128 liquidityIndex;
    uint128 variableBorrowIndex;
    uint128 currentLiquidityRate;
    uint128 currentVariableBorrowRate;
    uint128 currentStableBorrowRate;
    uint40 lastUpdateTimestamp;
    address aTokenAddress;
    address stableDebtTokenAddress;
    address variableDebtTokenAddress;
    address interestRateStrategyAddress;
    uint8 id;
  }

  struct ReserveConfigurationMap {
    uint256 data;
  }

  enum InterestRateMode { NONE, STABLE, VARIABLE }
}
"#;

pub fn aave_ilending_pool_addresses_provider(version: &str) -> String {
    solidity(AAVE_ILENDING_POOL_ADDRESSES_PROVIDER, version)
}

pub fn aave_ilending_pool(version: &str) -> String {
    solidity(AAVE_ILENDING_POOL, version)
}

pub fn aave_data_types(version: &str) -> String {
    solidity(AAVE_DATA_TYPES, version)
}

// ── Bancor ───────────────────────────────────────────────────────────────────

const BANCOR_IBANCOR_NETWORK: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

import "../@OpenZeppelin/IERC20.sol";

interface IBancorNetwork {
  function convertByPath(
    address[] memory _path,
    uint256 _amount,
    uint256 _minReturn,
    address _beneficiary,
    address _affiliateAccount,
    uint256 _affiliateFee
  ) external payable returns (uint256);

  function rateByPath(
    address[] memory _path,
    uint256 _amount
  ) external view returns (uint256);

  function conversionPath(
    IERC20 _sourceToken,
    IERC20 _targetToken
  ) external view returns (address[] memory);
}
"#;

const BANCOR_ICONTRACT_REGISTRY: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

interface IContractRegistry {
  function addressOf(
    bytes32 contractName
  ) external returns(address);
}
"#;

pub fn bancor_ibancor_network(version: &str) -> String {
    solidity(BANCOR_IBANCOR_NETWORK, version)
}

pub fn bancor_icontract_registry(version: &str) -> String {
    solidity(BANCOR_ICONTRACT_REGISTRY, version)
}

// ── DyDx ─────────────────────────────────────────────────────────────────────

const DYDX_ICALLEE: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};
pragma experimental ABIEncoderV2;

import "../../libraries/DyDx/Account.sol";

interface ICallee {
  function callFunction(address sender, Account.Info calldata accountInfo, bytes calldata data) external;
}
"#;

const DYDX_ISOLO_MARGIN: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};
pragma experimental ABIEncoderV2;

import "../../libraries/DyDx/Account.sol";
import "../../libraries/DyDx/Actions.sol";

interface ISoloMargin {
  function operate(Account.Info[] calldata accounts, Actions.ActionArgs[] calldata actions) external;
}
"#;

const DYDX_ACCOUNT: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

library Account {
  struct Info {
    address owner;
    uint256 number;
  }
}
"#;

const DYDX_ACTIONS: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

import "./Types.sol";

library Actions {
  enum ActionType { Deposit, Withdraw, Transfer, Buy, Sell, Trade, Liquidate, Vaporize, Call }

  struct ActionArgs {
    ActionType actionType;
    uint256 accountId;
    Types.AssetAmount amount;
    uint256 primaryMarketId;
    uint256 secondaryMarketId;
    address otherAddress;
    uint256 otherAccountId;
    bytes data;
  }
}
"#;

const DYDX_TYPES: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

library Types {
  enum AssetDenomination { Wei, Par }
  enum AssetReference { Delta, Target }

  struct AssetAmount {
    bool sign;
    AssetDenomination denomination;
    AssetReference ref;
    uint256 value;
  }
}
"#;

const DYDX_FLASHLOAN: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};
pragma experimental ABIEncoderV2;

import "./interfaces/@OpenZeppelin/IERC20.sol";

import "./interfaces/DyDx/ISoloMargin.sol";
import "./interfaces/DyDx/ICallee.sol";

import "./libraries/DyDx/Actions.sol";
import "./libraries/DyDx/Account.sol";

contract FlashLoan is ICallee {
  mapping(address => uint) public DyDxCurrencyMarketIDs;
  address immutable SoloAddress;

  constructor(
    address ISoloMarginAddress, address USDC,
    address WETH, address DAI, address SAI
  ) {
    IERC20(USDC).approve(ISoloMarginAddress, type(uint256).max);
    IERC20(WETH).approve(ISoloMarginAddress, type(uint256).max);
    IERC20(DAI).approve(ISoloMarginAddress, type(uint256).max);
    IERC20(SAI).approve(ISoloMarginAddress, type(uint256).max);
    SoloAddress = ISoloMarginAddress;

    DyDxCurrencyMarketIDs[WETH] = 0;
    DyDxCurrencyMarketIDs[SAI] = 1;
    DyDxCurrencyMarketIDs[USDC] = 2;
    DyDxCurrencyMarketIDs[DAI] = 3;
  }

  // Add desired parameters here
  struct CallFuncParam {
    uint256 amount;
    address currency;
  }

  function callFunction(
    address _sender,
    Account.Info calldata _accountInfo,
    bytes calldata _data
  ) external override {
    CallFuncParam memory data = abi.decode(_data, (CallFuncParam));

    // Enter your custom logic here
  }

  function flashloan(
    CallFuncParam calldata param
  ) external {
    Actions.ActionArgs[] memory operations = new Actions.ActionArgs[](3);

    operations[0] = Actions.ActionArgs({
      actionType: Actions.ActionType.Withdraw,
      accountId: 0,
      amount: Types.AssetAmount({
        sign: false,
        denomination: Types.AssetDenomination.Wei,
        ref: Types.AssetReference.Delta,
        value: param.amount
      }),
      primaryMarketId: DyDxCurrencyMarketIDs[param.currency],
      secondaryMarketId: 0,
      otherAddress: address(this),
      otherAccountId: 0,
      data: ""
    });

    operations[1] = Actions.ActionArgs({
      actionType: Actions.ActionType.Call,
      accountId: 0,
      amount: Types.AssetAmount({
        sign: false,
        denomination: Types.AssetDenomination.Wei,
        ref: Types.AssetReference.Delta,
        value: 0
      }),
      primaryMarketId: 0,
      secondaryMarketId: 0,
      otherAddress: address(this),
      otherAccountId: 0,
      data: abi.encode(param)
    });

    operations[2] = Actions.ActionArgs({
      actionType: Actions.ActionType.Deposit,
      accountId: 0,
      amount: Types.AssetAmount({
        sign: true,
        denomination: Types.AssetDenomination.Wei,
        ref: Types.AssetReference.Delta,
        value: param.amount + 2
      }),
      primaryMarketId: DyDxCurrencyMarketIDs[param.currency],
      secondaryMarketId: 0,
      otherAddress: address(this),
      otherAccountId: 0,
      data: ""
    });

    Account.Info[] memory accountInfos = new Account.Info[](1);
    accountInfos[0] = Account.Info({ owner: address(this), number: 1 });

    this.SoloFac().operate(accountInfos, operations);
  }

  function SoloFac() external view returns(ISoloMargin solo) {
    return ISoloMargin(SoloAddress);
  }
}
"#;

pub fn dydx_icallee(version: &str) -> String {
    solidity(DYDX_ICALLEE, version)
}

pub fn dydx_isolo_margin(version: &str) -> String {
    solidity(DYDX_ISOLO_MARGIN, version)
}

pub fn dydx_account(version: &str) -> String {
    solidity(DYDX_ACCOUNT, version)
}

pub fn dydx_actions(version: &str) -> String {
    solidity(DYDX_ACTIONS, version)
}

pub fn dydx_types(version: &str) -> String {
    solidity(DYDX_TYPES, version)
}

pub fn dydx_flashloan(version: &str) -> String {
    solidity(DYDX_FLASHLOAN, version)
}

// ── Kyber ────────────────────────────────────────────────────────────────────

const KYBER_INETWORK_PROXY: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

import "../@OpenZeppelin/IERC20.sol";

interface IKyberNetworkProxy {
  function getExpectedRate(
    IERC20 src,
    IERC20 dest,
    uint256 srcQty
  ) external view returns (uint256 expectedRate, uint256 worstRate);

  function swapEtherToToken(
    IERC20 token,
    uint256 minConversionRate
  ) external payable returns (uint256);

  function swapTokenToEther(
    IERC20 token,
    uint256 srcAmount,
    uint256 minConversionRate
  ) external returns (uint256);

  function swapTokenToToken(
    IERC20 src,
    uint256 srcAmount,
    IERC20 dest,
    uint256 minConversionRate
  ) external returns (uint256);
}
"#;

pub fn kyber_inetwork_proxy(version: &str) -> String {
    solidity(KYBER_INETWORK_PROXY, version)
}

// ── OneInch ──────────────────────────────────────────────────────────────────

const ONEINCH_IONE_SPLIT: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

import "../@OpenZeppelin/IERC20.sol";

interface IOneSplit {
  function getExpectedReturn(
    IERC20 fromToken,
    IERC20 destToken,
    uint256 amount,
    uint256 parts,
    uint256 flags
  ) external view returns (uint256 returnAmount, uint256[] memory distribution);

  function swap(
    IERC20 fromToken,
    IERC20 destToken,
    uint256 amount,
    uint256 minReturn,
    uint256[] memory distribution,
    uint256 flags
  ) external payable returns (uint256 returnAmount);
}
"#;

const ONEINCH_IONE_SPLIT_MULTI: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

import "../@OpenZeppelin/IERC20.sol";
import "./IOneSplit.sol";

interface IOneSplitMulti is IOneSplit {
  function getExpectedReturnWithGasMulti(
    IERC20[] memory tokens,
    uint256 amount,
    uint256[] memory parts,
    uint256[] memory flags,
    uint256[] memory destTokenEthPriceTimesGasPrices
  ) external view returns (
    uint256[] memory returnAmounts,
    uint256 estimateGasAmount,
    uint256[] memory distribution
  );

  function swapMulti(
    IERC20[] memory tokens,
    uint256 amount,
    uint256 minReturn,
    uint256[] memory distribution,
    uint256[] memory flags
  ) external payable returns (uint256 returnAmount);
}
"#;

pub fn oneinch_ione_split(version: &str) -> String {
    solidity(ONEINCH_IONE_SPLIT, version)
}

pub fn oneinch_ione_split_multi(version: &str) -> String {
    solidity(ONEINCH_IONE_SPLIT_MULTI, version)
}

// ── Uniswap ──────────────────────────────────────────────────────────────────

const UNISWAP_V2_ROUTER_01: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

interface IUniswapV2Router01 {
  function factory() external pure returns (address);

  function WETH() external pure returns (address);

  function swapExactTokensForTokens(
    uint256 amountIn,
    uint256 amountOutMin,
    address[] calldata path,
    address to,
    uint256 deadline
  ) external returns (uint256[] memory amounts);

  function swapExactETHForTokens(
    uint256 amountOutMin,
    address[] calldata path,
    address to,
    uint256 deadline
  ) external payable returns (uint256[] memory amounts);

  function getAmountsOut(
    uint256 amountIn,
    address[] calldata path
  ) external view returns (uint256[] memory amounts);
}
"#;

const UNISWAP_V2_ROUTER_02: &str = r#"
// SPDX-License-Identifier: UNLICENSED
pragma solidity ^{{SOLIDITY_VERSION}};

import "./IUniswapV2Router01.sol";

interface IUniswapV2Router02 is IUniswapV2Router01 {
  function swapExactTokensForTokensSupportingFeeOnTransferTokens(
    uint256 amountIn,
    uint256 amountOutMin,
    address[] calldata path,
    address to,
    uint256 deadline
  ) external;
}
"#;

pub fn uniswap_v2_router01(version: &str) -> String {
    solidity(UNISWAP_V2_ROUTER_01, version)
}

pub fn uniswap_v2_router02(version: &str) -> String {
    solidity(UNISWAP_V2_ROUTER_02, version)
}

// ── Truffle ──────────────────────────────────────────────────────────────────

const TRUFFLE_MIGRATIONS: &str = r#"
// SPDX-License-Identifier: UNLICENSED
// This file is part of Truffle suite and helps keep track of your deployments
pragma solidity {{SOLIDITY_VERSION}};

contract Migrations {
  address public owner;
  uint public last_completed_migration;

  constructor() {
    owner = msg.sender;
  }

  modifier restricted() {
    if (msg.sender == owner) _;
  }

  function setCompleted(
    uint completed
  ) public restricted {
    last_completed_migration = completed;
  }
}
"#;

pub fn truffle_migrations(version: &str) -> String {
    solidity(TRUFFLE_MIGRATIONS, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_substituted() {
        let source = ierc20("0.8.6");
        assert!(source.starts_with("// SPDX-License-Identifier"));
        assert!(source.contains("pragma solidity ^0.8.6;"));
        assert!(!source.contains("{{"));
    }

    #[test]
    fn migrations_pins_exact_version() {
        assert!(truffle_migrations("0.8.6").contains("pragma solidity 0.8.6;"));
    }

    #[test]
    fn bancor_network_imports_shared_erc20() {
        assert!(bancor_ibancor_network("0.8.6").contains("import \"../@OpenZeppelin/IERC20.sol\";"));
    }
}
