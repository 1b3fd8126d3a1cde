use std::ops::Deref;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerRecord {
    pub name: String,
    pub canonical_dns_name: String,
}

/// Read-only lookup of load balancers by name.
#[async_trait]
pub trait LoadBalancerDirectory {
    /// Returns `Ok(None)` when no load balancer has this name.
    async fn describe_load_balancer(&self, name: &str)
        -> anyhow::Result<Option<LoadBalancerRecord>>;
}

#[async_trait]
impl<D, T> LoadBalancerDirectory for T
where
    T: Deref<Target = D> + Send + Sync,
    D: LoadBalancerDirectory + Sync,
{
    async fn describe_load_balancer(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<LoadBalancerRecord>> {
        self.deref().describe_load_balancer(name).await
    }
}
