use shine_client::{
    re_exports::eyre,
    rpc::{PushResponse, RpcClient, DEFAULT_NODE_URL},
};

use crate::object::Network;

pub fn create_rpc_from_network(network: &Network, wallet_url: &str) -> eyre::Result<RpcClient> {
    match network {
        Network::Local => RpcClient::new(DEFAULT_NODE_URL, Some(wallet_url)),
        Network::Custom(url) => RpcClient::new(url.as_str(), Some(wallet_url)),
    }
}

pub fn print_push_response(response: &PushResponse) -> eyre::Result<()> {
    println!("Transaction hash: {}", response.transaction_id);
    if !response.processed.is_null() {
        println!("{}", serde_json::to_string_pretty(&response.processed)?);
    }
    Ok(())
}
