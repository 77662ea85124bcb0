use clap::{Parser, Subcommand};
use shine_client::{re_exports::eyre, translator::Config};

use crate::handle::{relay_chat_command, submit_post, submit_vote};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Chain network, options are `local` or URL (e.g. http://localhost:8888)
    #[arg(short, long, default_value_t = String::from("local"))]
    network: String,

    /// URL of the wallet service that signs submitted actions
    #[arg(long, default_value_t = String::from("http://localhost:6667"))]
    wallet_url: String,

    /// Account the rewards contract is deployed under
    #[arg(long, default_value_t = String::from("shine"))]
    contract: String,

    /// Account whose active permission authorizes submitted actions
    #[arg(short, long)]
    actor: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a new post to the rewards system
    Post {
        /// Account that receives the post
        #[arg(long)]
        to: String,
        /// Free-text message attached to the post
        #[arg(long)]
        memo: String,
    },
    /// Vote for an existing post
    Vote {
        /// Id of the post that receives the vote
        #[arg(short, long)]
        post_id: u64,
    },
    /// Relay a chat command, e.g. `/recognize user.2 nice work`
    Chat {
        /// Chat user the command originates from
        #[arg(long)]
        from_user: String,
        /// What the command refers to, a message id or the member's own identifier
        #[arg(long)]
        context: String,
        /// The command itself, keyword first
        command_line: Vec<String>,
    },
}

/// Parse and dispatch commands
pub async fn dispatch_commands() -> eyre::Result<()> {
    let cli = Cli::parse();
    let network = cli.network.parse()?;
    let config = Config {
        contract: cli.contract.parse()?,
        actor: cli.actor.parse()?,
    };
    match cli.command {
        Commands::Post { to, memo } => {
            submit_post(network, cli.wallet_url, config, to, memo).await
        }
        Commands::Vote { post_id } => {
            submit_vote(network, cli.wallet_url, config, post_id).await
        }
        Commands::Chat {
            from_user,
            context,
            command_line,
        } => {
            relay_chat_command(
                network,
                cli.wallet_url,
                config,
                from_user,
                context,
                command_line,
            )
            .await
        }
    }
}
