pub mod action;
pub mod digest;
pub mod rpc;
pub mod translator;

// Re-exports to eliminate the need for downstream dependencies to specify the version of these crates
pub mod re_exports {
    pub use eyre;
    pub use futures;
    pub use serde_json;
}
