//! `chainkit quick`: write one pack into an existing project.

use std::sync::Arc;

use chainkit_adapters::{LocalFilesystem, SystemProcessRunner};
use chainkit_core::{
    application::{
        services::{QuickWriteRequest, QuickWriteService, abi_snippet, address_snippet},
        writers,
    },
    domain::ProtocolId,
    error::ChainkitError,
};
use tracing::instrument;

use crate::{
    cli::{GlobalArgs, QuickArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(protocol = %args.protocol, pack = ?args.pack))]
pub async fn execute(
    args: QuickArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let protocol: ProtocolId = args
        .protocol
        .parse()
        .map_err(ChainkitError::from)
        .with_cli_context(|| "parsing protocol")?;

    let Some(pack) = args.pack else {
        return list_packs(protocol, &output);
    };

    let request = QuickWriteRequest {
        protocol: args.protocol,
        pack,
        solidity_version: args
            .sol_version
            .unwrap_or_else(|| config.defaults.solidity_version.clone()),
        network: match args.network {
            Some(network) => network,
            None => config.network()?,
        },
        include_abi: args.abi,
        omit_npm_pack: args.omit_npm_pack,
    };

    let dir = global.project_dir();
    let pb = output.spinner(&format!("Writing {} {}...", protocol, request.pack));
    let result = QuickWriteService::new(
        Arc::new(LocalFilesystem::new()),
        Arc::new(SystemProcessRunner::new()),
    )
    .write(&dir, &request)
    .await;
    pb.finish_and_clear();
    let written = result.with_cli_context(|| "writing pack")?;

    let addresses = address_snippet(protocol, &written.addresses);
    let abis = abi_snippet(protocol, &written.abis);

    output.json(&serde_json::json!({
        "protocol": protocol.to_string(),
        "pack": request.pack,
        "addresses": addresses,
        "abis": abis,
        "packages": written.packages,
    }))?;

    output.success(&format!(
        "Wrote {} {} into {}",
        protocol,
        request.pack.to_ascii_uppercase(),
        dir.display()
    ))?;
    output.snippet("Add to lib/addresses.ts:", &addresses)?;
    if !abis.is_empty() {
        output.snippet("Add to lib/__abis__/abis.ts:", &abis)?;
    } else if request.include_abi {
        output.warning(&format!("No ABIs are bundled for {protocol}"))?;
    }
    Ok(())
}

fn list_packs(protocol: ProtocolId, output: &OutputManager) -> CliResult<()> {
    let packs = writers::supported_packs(protocol);

    output.json(&serde_json::json!({
        "protocol": protocol.to_string(),
        "packs": packs,
    }))?;

    output.header(&format!("{protocol} packs:"))?;
    output.list(&packs)?;
    output.print(&format!(
        "\nRun: chainkit quick {} <PACK>",
        protocol.to_string().to_ascii_lowercase()
    ))?;
    Ok(())
}
