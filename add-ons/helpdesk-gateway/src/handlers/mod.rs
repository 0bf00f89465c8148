//! HTTP handlers. Catalog routes are the structured query API; chat is a stateless single turn.

pub mod catalog;
pub mod chat;
