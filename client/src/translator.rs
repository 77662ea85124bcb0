use thiserror::Error;

use crate::{
    action::{AccountName, Action, ActionData, AddPraise, AddVote, BindMember, UnbindMember},
    digest::Checksum256,
    rpc::{PushResponse, Submit},
};

/// Explicit construction-time configuration, `actor` authorizes every
/// submitted action with its active permission
#[derive(Clone, Debug)]
pub struct Config {
    pub contract: AccountName,
    pub actor: AccountName,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unrecognized command [{0}]")]
    UnrecognizedCommand(String),

    #[error("invalid arguments for [{command}]: expected at least {expected}, found {found}")]
    InvalidArguments {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid account name [{0}]")]
    InvalidAccount(String),
}

/// Stateless mapping from a chat command to one contract action envelope
#[derive(Clone, Debug)]
pub struct Translator {
    config: Config,
}

impl Translator {
    pub fn new(config: Config) -> Self {
        Translator { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate one command into its envelope.
    ///
    /// `from_user` is the chat identity issuing the command and `context` is
    /// what the command refers to, a message id for praises and votes, the
    /// member's own identifier (e.g. email) for registrations. Keywords are
    /// accepted with or without their leading slash.
    pub fn translate(
        &self,
        from_user: &str,
        context: &str,
        command: &str,
    ) -> Result<Action, TranslateError> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let keyword = parts
            .first()
            .ok_or_else(|| TranslateError::UnrecognizedCommand(command.to_string()))?;
        let data: ActionData = match keyword.strip_prefix('/').unwrap_or(keyword) {
            "recognize" => {
                let praisee = required_argument(&parts, 1, "recognize")?;
                AddPraise {
                    author: Checksum256::hash(from_user),
                    post: Checksum256::hash(context),
                    praisee: Checksum256::hash(praisee),
                    memo: parts[2..].join(" "),
                }
                .into()
            }
            "upvote" => AddVote {
                post: Checksum256::hash(context),
                voter: Checksum256::hash(from_user),
            }
            .into(),
            "register" => {
                let account = required_argument(&parts, 1, "register")?;
                let account = account
                    .parse()
                    .map_err(|_| TranslateError::InvalidAccount(account.to_string()))?;
                BindMember {
                    member: Checksum256::hash(context),
                    account,
                }
                .into()
            }
            "unregister" => UnbindMember {
                member: Checksum256::hash(context),
            }
            .into(),
            _ => return Err(TranslateError::UnrecognizedCommand(command.to_string())),
        };
        Ok(Action::new(
            self.config.contract.clone(),
            self.config.actor.clone(),
            data,
        ))
    }
}

fn required_argument<'a>(
    parts: &[&'a str],
    index: usize,
    command: &'static str,
) -> Result<&'a str, TranslateError> {
    parts.get(index).copied().ok_or(TranslateError::InvalidArguments {
        command,
        expected: index,
        found: parts.len() - 1,
    })
}

/// Client front: translates commands and hands envelopes to the injected
/// submission capability, one at a time
pub struct Shine<T: Submit> {
    translator: Translator,
    rpc: T,
}

impl<T: Submit> Shine<T> {
    pub fn new(config: Config, rpc: T) -> Self {
        Shine {
            translator: Translator::new(config),
            rpc,
        }
    }

    pub fn config(&self) -> &Config {
        self.translator.config()
    }

    /// Translate a chat command and submit the resulting action
    pub async fn handle_command(
        &self,
        from_user: &str,
        context: &str,
        command: &str,
    ) -> eyre::Result<PushResponse> {
        let action = self.translator.translate(from_user, context, command)?;
        self.rpc.push_action(&action).await
    }

    /// Submit an already-built payload under the configured contract and actor
    pub async fn push(&self, data: impl Into<ActionData>) -> eyre::Result<PushResponse> {
        let config = self.translator.config();
        let action = Action::new(config.contract.clone(), config.actor.clone(), data);
        self.rpc.push_action(&action).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        action::{Post, Vote},
        rpc::FakeRpcClient,
    };

    use super::*;

    fn translator() -> Translator {
        Translator::new(Config {
            contract: "shine".parse().unwrap(),
            actor: "shine".parse().unwrap(),
        })
    }

    #[test]
    fn recognize_builds_praise_from_positional_arguments() {
        let action = translator()
            .translate("user.1", "msg.id.1", "recognize user.2 nice work")
            .unwrap();
        assert_eq!(action.name, "addpraise".into());
        assert_eq!(
            action.data,
            AddPraise {
                author: Checksum256::hash("user.1"),
                post: Checksum256::hash("msg.id.1"),
                praisee: Checksum256::hash("user.2"),
                memo: "nice work".to_string(),
            }
            .into()
        );
    }

    #[test]
    fn recognize_joins_remaining_arguments_into_memo() {
        let action = translator()
            .translate("user.1", "msg.id.1", "/recognize user.2 for doing so and so")
            .unwrap();
        let ActionData::AddPraise(praise) = action.data else {
            panic!("expected a praise payload");
        };
        assert_eq!(praise.memo, "for doing so and so");
    }

    #[test]
    fn recognize_without_praisee_is_invalid() {
        assert_eq!(
            translator().translate("user.1", "msg.id.1", "/recognize"),
            Err(TranslateError::InvalidArguments {
                command: "recognize",
                expected: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn upvote_hashes_voter_and_context() {
        let action = translator().translate("user.1", "post.1", "/upvote").unwrap();
        assert_eq!(action.name, "addvote".into());
        assert_eq!(
            action.data,
            AddVote {
                post: Checksum256::hash("post.1"),
                voter: Checksum256::hash("user.1"),
            }
            .into()
        );
    }

    #[test]
    fn register_binds_member_to_chain_account() {
        let action = translator()
            .translate("user.3", "user3@example.com", "register eos.user3")
            .unwrap();
        assert_eq!(action.name, "bindmember".into());
        assert_eq!(
            action.data,
            BindMember {
                member: Checksum256::hash("user3@example.com"),
                account: "eos.user3".parse().unwrap(),
            }
            .into()
        );
    }

    #[test]
    fn register_rejects_malformed_account_names() {
        assert_eq!(
            translator().translate("user.3", "user3@example.com", "/register Not_An_Account"),
            Err(TranslateError::InvalidAccount("Not_An_Account".to_string()))
        );
    }

    #[test]
    fn unregister_releases_member_binding() {
        let action = translator()
            .translate("user.3", "user3@example.com", "/unregister")
            .unwrap();
        assert_eq!(
            action.data,
            UnbindMember {
                member: Checksum256::hash("user3@example.com"),
            }
            .into()
        );
    }

    #[test]
    fn unknown_keywords_are_unrecognized() {
        for command in ["/reward user.2", "recognise user.2", ""] {
            assert_eq!(
                translator().translate("user.1", "msg.id.1", command),
                Err(TranslateError::UnrecognizedCommand(command.to_string())),
                "{command}"
            );
        }
    }

    #[test]
    fn envelope_carries_configured_contract_and_actor() {
        let translator = Translator::new(Config {
            contract: "shine.prod".parse().unwrap(),
            actor: "relay.bot".parse().unwrap(),
        });
        let action = translator.translate("user.1", "post.1", "/upvote").unwrap();
        assert_eq!(action.account, "shine.prod".parse().unwrap());
        assert_eq!(action.authorization.len(), 1);
        assert_eq!(
            action.authorization[0].actor,
            "relay.bot".parse().unwrap()
        );
        assert_eq!(action.authorization[0].permission, "active".into());
    }

    #[tokio::test]
    async fn commands_submit_in_input_order() {
        let rpc = FakeRpcClient::default();
        let shine = Shine::new(
            Config {
                contract: "shine".parse().unwrap(),
                actor: "shine".parse().unwrap(),
            },
            rpc.clone(),
        );
        let commands = [
            ("user.1", "post.1", "/recognize user.2 for doing so and so"),
            ("user.2", "post.2", "/recognize user.3 for doing so and so"),
            ("user.1", "post.2", "/upvote"),
            ("user.2", "post.1", "/upvote"),
            ("user.3", "user3@example.com", "/register eos.user3"),
        ];
        for (from_user, context, command) in commands {
            shine.handle_command(from_user, context, command).await.unwrap();
        }
        let pushed = rpc.pushed();
        assert_eq!(pushed.len(), 5);
        let names: Vec<String> = pushed.iter().map(|a| a.name.to_string()).collect();
        assert_eq!(
            names,
            ["addpraise", "addpraise", "addvote", "addvote", "bindmember"]
        );
        assert_eq!(
            pushed[2].data,
            AddVote {
                post: Checksum256::hash("post.2"),
                voter: Checksum256::hash("user.1"),
            }
            .into()
        );
    }

    #[tokio::test]
    async fn failed_translation_submits_nothing() {
        let rpc = FakeRpcClient::default();
        let shine = Shine::new(
            Config {
                contract: "shine".parse().unwrap(),
                actor: "shine".parse().unwrap(),
            },
            rpc.clone(),
        );
        let result = shine.handle_command("user.1", "post.1", "/downvote").await;
        assert!(result.is_err());
        assert!(rpc.pushed().is_empty());
    }

    #[tokio::test]
    async fn named_account_payloads_push_under_configured_actor() {
        let rpc = FakeRpcClient::default();
        let shine = Shine::new(
            Config {
                contract: "shine".parse().unwrap(),
                actor: "user.1".parse().unwrap(),
            },
            rpc.clone(),
        );
        shine
            .push(Post {
                from: "user.1".parse().unwrap(),
                to: "user.2".parse().unwrap(),
                memo: "great demo".to_string(),
            })
            .await
            .unwrap();
        shine
            .push(Vote {
                voter: "user.1".parse().unwrap(),
                post_id: 1,
            })
            .await
            .unwrap();
        let pushed = rpc.pushed();
        assert_eq!(pushed[0].name, "post".into());
        assert_eq!(pushed[1].name, "vote".into());
        assert_eq!(pushed[1].authorization[0].actor, "user.1".parse().unwrap());
    }
}
