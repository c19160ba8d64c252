pub mod acl;
pub mod audit;
pub mod auth;
pub mod dispatch;
pub mod fs;
pub mod object;
pub mod principal;
pub mod query;
pub mod rag;
pub mod relationship;
pub mod repo;
pub mod shared;
pub mod version;
pub mod webhook;
