//! # Console state library
//!
//! Client-side state stores for the cluster console. Each store caches the
//! resources of a single Kubernetes kind and proxies mutations to the API
//! server through an injected client, refreshing its cache after each one.

pub mod k8s;
pub mod store;
