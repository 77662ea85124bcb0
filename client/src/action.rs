use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::digest::Checksum256;

/// On-chain account name, restricted to the base-32 name alphabet
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountName {
    type Err = eyre::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Names hold up to 12 chars of [.1-5a-z], plus an optional 13th char limited to [.a-p]
        let valid_len = matches!(value.len(), 1..=13);
        let valid_body = value
            .chars()
            .take(12)
            .all(|c| matches!(c, '.' | '1'..='5' | 'a'..='z'));
        let valid_tail = value.len() < 13
            || value
                .chars()
                .nth(12)
                .is_some_and(|c| matches!(c, '.' | 'a'..='p'));
        if valid_len && valid_body && valid_tail {
            Ok(AccountName(value.to_string()))
        } else {
            Err(eyre::eyre!("invalid account name [{value}]"))
        }
    }
}

impl Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for AccountName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl Serialize for AccountName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionName(String);

impl From<&str> for ActionName {
    fn from(value: &str) -> Self {
        ActionName(value.to_string())
    }
}

impl Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionName(String);

impl From<&str> for PermissionName {
    fn from(value: &str) -> Self {
        PermissionName(value.to_string())
    }
}

/// Authorization tuple asserting who is allowed to submit an action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionLevel {
    pub actor: AccountName,
    pub permission: PermissionName,
}

impl PermissionLevel {
    pub fn active(actor: AccountName) -> Self {
        PermissionLevel {
            actor,
            permission: "active".into(),
        }
    }
}

/// Recognize a member for something they did
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPraise {
    pub author: Checksum256,
    pub post: Checksum256,
    pub praisee: Checksum256,
    pub memo: String,
}

/// Second a praise someone else posted
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddVote {
    pub post: Checksum256,
    pub voter: Checksum256,
}

/// Bind a member identifier to its chain account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindMember {
    pub member: Checksum256,
    pub account: AccountName,
}

/// Release a member identifier from its chain account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbindMember {
    pub member: Checksum256,
}

/// Post a new reward message between two named accounts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub from: AccountName,
    pub to: AccountName,
    pub memo: String,
}

/// Vote for an existing post by its sequential id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub voter: AccountName,
    pub post_id: u64,
}

/// Payload of one contract action
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionData {
    AddPraise(AddPraise),
    AddVote(AddVote),
    BindMember(BindMember),
    UnbindMember(UnbindMember),
    Post(Post),
    Vote(Vote),
}

impl ActionData {
    /// Action name the contract dispatches on
    pub fn name(&self) -> ActionName {
        match self {
            ActionData::AddPraise(_) => "addpraise".into(),
            ActionData::AddVote(_) => "addvote".into(),
            ActionData::BindMember(_) => "bindmember".into(),
            ActionData::UnbindMember(_) => "unbindmember".into(),
            ActionData::Post(_) => "post".into(),
            ActionData::Vote(_) => "vote".into(),
        }
    }
}

macro_rules! action_data {
    ($variant:ident) => {
        impl From<$variant> for ActionData {
            fn from(value: $variant) -> Self {
                ActionData::$variant(value)
            }
        }
    };
}

action_data!(AddPraise);
action_data!(AddVote);
action_data!(BindMember);
action_data!(UnbindMember);
action_data!(Post);
action_data!(Vote);

/// Submission envelope handed to the chain node, pairing a payload with the
/// target contract account and a single active-permission authorization
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Action {
    pub account: AccountName,
    pub name: ActionName,
    pub authorization: Vec<PermissionLevel>,
    pub data: ActionData,
}

impl Action {
    pub fn new(contract: AccountName, actor: AccountName, data: impl Into<ActionData>) -> Self {
        let data = data.into();
        Action {
            account: contract,
            name: data.name(),
            authorization: vec![PermissionLevel::active(actor)],
            data,
        }
    }
}
