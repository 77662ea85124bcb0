mod command;
mod handle;
mod object;

#[tokio::main]
pub async fn main() -> shine_client::re_exports::eyre::Result<()> {
    command::dispatch_commands().await
}
