use std::{fmt::Display, str::FromStr};

use reqwest::Url;
use shine_client::re_exports::eyre;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Network {
    Local,
    Custom(Url),
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Local => write!(f, "local"),
            Network::Custom(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for Network {
    type Err = eyre::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Network::Local),
            _ => Ok(Network::Custom(value.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_and_custom_networks() {
        assert_eq!("local".parse::<Network>().unwrap(), Network::Local);
        let network: Network = "http://testnet.example.com:8888".parse().unwrap();
        assert!(matches!(network, Network::Custom(_)));
        assert!("not a url".parse::<Network>().is_err());
    }
}
