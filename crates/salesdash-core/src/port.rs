// ── Data-access ports ──
//
// A port is the only thing a store knows about where data comes from.
// `adapter::HttpAdapter` implements it against the backend; tests plug
// in in-memory ports.

use std::future::Future;

use crate::error::CoreError;
use crate::resource::Resource;

/// Fetch capability for one resource domain.
pub trait ResourcePort<R: Resource>: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<R::Payload, CoreError>> + Send;
}
