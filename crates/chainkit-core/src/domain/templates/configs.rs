//! Tooling configuration files written by the assembler.

use super::{CONTRACT_WRITE_DIR, SOLIDITY_VERSION, render};

const TRUFFLE_CONFIG: &str = r#"
// eslint-disable-next-line
require('dotenv').config()
// eslint-disable-next-line
const HDWalletProvider = require('@truffle/hdwallet-provider')

// eslint-disable-next-line
module.exports = {
  /**
   * Networks define how you connect to your ethereum client. Run
   * `truffle test --network <name>` to target a specific one.
   */
  networks: {
    development: {
      host: 'localhost',
      port: 7545,
      network_id: '*',
      websockets: true,
      networkCheckTimeout: 6000
    },
    kovan: {
      provider: () => new HDWalletProvider(process.env.PRIVATE_KEY_KOVAN, process.env.ETH_NODE_URL_KOVAN), // eslint-disable-line
      network_id: 42,
      gas: 5500000,
      confirmations: 2,
      timeoutBlocks: 200,
      skipDryRun: true
    },
    mainnet: { // eslint-disable-next-line
      provider: () => new HDWalletProvider(process.env.PRIVATE_KEY, process.env.ETH_NODE_URL),
      network_id: 1,
      networkCheckTimeout: 20000,
    },
  },

  mocha: {
    // timeout: 100000
  },

  compilers: {
    solc: {
      version: '{{SOLIDITY_VERSION}}',
    },
  },

  contracts_directory: './contracts/',
  contracts_build_directory: '{{CONTRACT_WRITE_DIR}}',
}
"#;

const INITIAL_MIGRATION: &str = r#"
// eslint-disable-next-line
const Migrations = artifacts.require('Migrations')

// eslint-disable-next-line
module.exports = deployer => {
  deployer.deploy(Migrations)
}
"#;

const FORK_CHAIN: &str = r#"
/* eslint-disable */
const ganache = require('ganache-cli')
const Web3 = require('web3')
require('dotenv').config()

if (!process.env.ETH_NODE_URL) throw new Error(
  'ETH_NODE_URL undefined.'
)

const PORT = 7545
const line = '===================='

const server = ganache.server({
  port: PORT,
  default_balance_ether: 100,
  fork: new Web3.providers.WebsocketProvider(process.env.ETH_NODE_URL),
  ws: true,
  debug: true,
  vmErrorsOnRPCResponse: true,
  verbose: true,
  logger: console
})

server.listen(PORT, onboot)

function onboot(err, blockchain) {
  if (err) {
    console.error('Error booting ganache', err)
    return process.exit(1)
  }

  let count = 1
  console.log('Accounts')
  console.log(line)

  for (let [key, value] of Object.entries(blockchain.accounts)) {
    const privateKey = '0x' + value.secretKey.toString('hex')
    console.log(count, 'Account:', key, '::: Private Key:', privateKey)
    count++
  }

  console.log()
  console.log('Forked Chain')
  console.log(line)
  console.log('Block:       ', blockchain.blockchain.forkBlockNumber)
  console.log('Network ID:  ', blockchain.net_version)
  console.log('Time:        ', (blockchain.blockchain.startTime || new Date()).toString())
  console.log()
  console.log('Ganache booted successfully -> http://localhost:' + PORT)
}
/* eslint-enable */
"#;

const ESLINT_IGNORE: &str = r#"
node_modules
dist
tests
migrations
"#;

const ESLINT_RC: &str = r#"
{
  "root": true,
  "parser": "@typescript-eslint/parser",
  "plugins": ["@typescript-eslint"],
  "rules": {
    "@typescript-eslint/no-extraneous-class": "error",
    "@typescript-eslint/no-explicit-any": "error",
    "@typescript-eslint/no-namespace": "off",
    "no-irregular-whitespace": "error",
    "no-await-in-loop": "error",
    "guard-for-in": "error"
  },
  "extends": [
    "eslint:recommended",
    "plugin:@typescript-eslint/eslint-recommended",
    "plugin:@typescript-eslint/recommended"
  ]
}
"#;

const GIT_IGNORE: &str = r#"
node_modules
.env
infura.txt
artifacts
"#;

const GIT_ATTRIBUTES: &str = r#"
contracts/interfaces/@OpenZeppelin/IERC20.sol* linguist-vendored

contracts/interfaces/Aave/ILendingPool.sol* linguist-vendored
contracts/interfaces/Aave/ILendingPoolAddressesProvider.sol* linguist-vendored
contracts/libraries/Aave/DataTypes.sol* linguist-vendored

contracts/interfaces/Uniswap/IUniswapV2Router01.sol* linguist-vendored
contracts/interfaces/Uniswap/IUniswapV2Router02.sol* linguist-vendored

contracts/interfaces/Kyber/IKyberNetworkProxy.sol* linguist-vendored

contracts/interfaces/Bancor/IContractRegistry.sol* linguist-vendored
contracts/interfaces/Bancor/IBancorNetwork.sol* linguist-vendored

contracts/interfaces/OneInch/IOneSplit.sol* linguist-vendored
contracts/interfaces/OneInch/IOneSplitMulti.sol* linguist-vendored

contracts/libraries/DyDx/Types.sol* linguist-vendored
contracts/libraries/DyDx/Actions.sol* linguist-vendored
contracts/libraries/DyDx/Account.sol* linguist-vendored

contracts/interfaces/DyDx/ISoloMargin.sol* linguist-vendored
contracts/interfaces/DyDx/ICallee.sol* linguist-vendored
"#;

const TSCONFIG: &str = r#"
{
  "compilerOptions": {
    "target": "es2019",
    "module": "commonjs",
    "lib": ["es2019"],
    "declaration": true,
    "outDir": "./dist",
    "rootDir": "./",
    "strict": true,
    "esModuleInterop": true,
    "resolveJsonModule": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true
  },
  "include": ["lib/**/*.ts", "tests/**/*.ts"],
  "exclude": ["node_modules", "dist"]
}
"#;

const MOCHA_TEST_SCAFFOLD: &str = r#"
import { expect } from 'chai'
import { Addresses } from '../lib/addresses'

describe('Addresses', () => {
  it('exports the generated address table', () => {
    expect(Addresses).to.be.an('object')
  })
})
"#;

pub fn truffle_config(solidity_version: &str, contract_write_dir: &str) -> String {
    render(
        TRUFFLE_CONFIG,
        &[
            (SOLIDITY_VERSION, solidity_version),
            (CONTRACT_WRITE_DIR, contract_write_dir),
        ],
    )
}

pub fn initial_migration() -> String {
    render(INITIAL_MIGRATION, &[])
}

pub fn fork_chain() -> String {
    render(FORK_CHAIN, &[])
}

pub fn eslint_ignore() -> String {
    render(ESLINT_IGNORE, &[])
}

pub fn eslint_rc() -> String {
    render(ESLINT_RC, &[])
}

pub fn git_ignore() -> String {
    render(GIT_IGNORE, &[])
}

pub fn git_attributes() -> String {
    render(GIT_ATTRIBUTES, &[])
}

pub fn tsconfig() -> String {
    render(TSCONFIG, &[])
}

pub fn mocha_test_scaffold() -> String {
    render(MOCHA_TEST_SCAFFOLD, &[])
}

pub fn dotenv(eth_node_url: &str) -> String {
    format!("ETH_NODE_URL={eth_node_url}")
}
