use std::ops::Deref;

use async_trait::async_trait;

use crate::sync::{ChangeResponse, DnsChangeRequest};

#[async_trait]
pub trait DnsRecordStore {
    async fn change_record(&self, change: &DnsChangeRequest) -> anyhow::Result<ChangeResponse>;
}

#[async_trait]
impl<S, T> DnsRecordStore for T
where
    T: Deref<Target = S> + Send + Sync,
    S: DnsRecordStore + Sync,
{
    async fn change_record(&self, change: &DnsChangeRequest) -> anyhow::Result<ChangeResponse> {
        self.deref().change_record(change).await
    }
}
