use shine_client::{
    action::{Post, Vote},
    re_exports::eyre,
    translator::{Config, Shine},
};

use crate::object::Network;

mod helper;
pub use helper::*;

/// Submit a named-account post to the rewards contract
pub async fn submit_post(
    network: Network,
    wallet_url: String,
    config: Config,
    to: String,
    memo: String,
) -> eyre::Result<()> {
    let rpc = create_rpc_from_network(&network, &wallet_url)?;
    let post = Post {
        from: config.actor.clone(),
        to: to.parse()?,
        memo,
    };
    let response = Shine::new(config, rpc).push(post).await?;
    print_push_response(&response)
}

/// Vote for an existing post by id
pub async fn submit_vote(
    network: Network,
    wallet_url: String,
    config: Config,
    post_id: u64,
) -> eyre::Result<()> {
    let rpc = create_rpc_from_network(&network, &wallet_url)?;
    let vote = Vote {
        voter: config.actor.clone(),
        post_id,
    };
    let response = Shine::new(config, rpc).push(vote).await?;
    print_push_response(&response)
}

/// Relay a chat command (`/recognize`, `/upvote`, `/register`, `/unregister`)
/// through the command translator
pub async fn relay_chat_command(
    network: Network,
    wallet_url: String,
    config: Config,
    from_user: String,
    context: String,
    command_line: Vec<String>,
) -> eyre::Result<()> {
    let rpc = create_rpc_from_network(&network, &wallet_url)?;
    let command = command_line.join(" ");
    let response = Shine::new(config, rpc)
        .handle_command(&from_user, &context, &command)
        .await?;
    print_push_response(&response)
}
