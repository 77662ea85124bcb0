use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use eyre::{eyre, Error};
use futures::FutureExt;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::action::Action;

pub type Rpc<T> = Pin<Box<dyn Future<Output = Result<T, Error>> + Send + 'static>>;

pub const DEFAULT_NODE_URL: &str = "http://localhost:8888";
pub const DEFAULT_WALLET_URL: &str = "http://localhost:6667";

const SIGN_ACTION_PATH: &str = "v1/wallet/sign_action";
const PUSH_ACTION_PATH: &str = "v1/chain/push_action";

/// Node's report for an accepted action
#[derive(Clone, Debug, Deserialize)]
pub struct PushResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub processed: Value,
}

/// Submission capability injected into the client, the node and its wallet
/// own signing and the wire format behind it
pub trait Submit: Clone + Send + Sync {
    fn push_action(&self, action: &Action) -> Rpc<PushResponse>;
}

#[derive(Clone)]
pub struct RpcClient {
    raw: Client,
    node_uri: Url,
    wallet_uri: Url,
}

impl RpcClient {
    pub fn new(node_uri: &str, wallet_uri: Option<&str>) -> Result<Self, Error> {
        let wallet_uri = Url::parse(wallet_uri.unwrap_or(DEFAULT_WALLET_URL))
            .map_err(|_| eyre!("wallet uri, e.g. \"{DEFAULT_WALLET_URL}\""))?;
        let node_uri =
            Url::parse(node_uri).map_err(|_| eyre!("node uri, e.g. \"{DEFAULT_NODE_URL}\""))?;
        Ok(RpcClient {
            raw: Client::new(),
            node_uri,
            wallet_uri,
        })
    }

    pub fn new_local() -> Self {
        RpcClient::new(DEFAULT_NODE_URL, None).expect("default uris")
    }
}

impl Submit for RpcClient {
    fn push_action(&self, action: &Action) -> Rpc<PushResponse> {
        let sign = self
            .wallet_uri
            .join(SIGN_ACTION_PATH)
            .map(|url| self.raw.post(url).json(action));
        let push = self.node_uri.join(PUSH_ACTION_PATH).map(|url| (self.raw.clone(), url));
        async move {
            let sign = sign.map_err(|_| eyre!("bad wallet request url"))?;
            let (raw, push_url) = push.map_err(|_| eyre!("bad node request url"))?;
            let resp = sign
                .send()
                .await
                .map_err(|_| eyre!("failed to reach wallet"))?;
            if !resp.status().is_success() {
                return Err(eyre!("wallet refused to sign action: {}", resp.status()));
            }
            let signed = resp
                .json::<Value>()
                .await
                .map_err(|_| eyre!("failed to parse wallet response"))?;
            let resp = raw
                .post(push_url)
                .json(&signed)
                .send()
                .await
                .map_err(|_| eyre!("failed to reach node"))?;
            if !resp.status().is_success() {
                return Err(eyre!("node rejected action: {}", resp.status()));
            }
            resp.json::<PushResponse>()
                .await
                .map_err(|_| eyre!("failed to parse node response"))
        }
        .boxed()
    }
}

/// In-memory double that records every pushed envelope, in order
#[derive(Clone, Default)]
pub struct FakeRpcClient {
    pushed: Arc<Mutex<Vec<Action>>>,
}

impl FakeRpcClient {
    pub fn pushed(&self) -> Vec<Action> {
        self.pushed.lock().expect("pushed actions").clone()
    }
}

impl Submit for FakeRpcClient {
    fn push_action(&self, action: &Action) -> Rpc<PushResponse> {
        let mut pushed = self.pushed.lock().expect("pushed actions");
        pushed.push(action.clone());
        let response = PushResponse {
            transaction_id: format!("{:064x}", pushed.len()),
            processed: Value::Null,
        };
        futures::future::ready(Ok(response)).boxed()
    }
}
