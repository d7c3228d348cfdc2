use super::error::K8sError;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::PersistentVolume;
use kube::{
    api::{DeleteParams, ListParams, Patch, PatchParams, PostParams},
    config::KubeConfigOptions,
    Api, Client, Config,
};
use tracing::debug;

const CONSOLE_ACTOR: &str = "console-state-patch";

/// Everything the console needs to do with PersistentVolumes.
///
/// Stores depend on this trait rather than on [kube] directly, so the
/// collaborator can be swapped for a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistentVolumeApi {
    async fn list_persistent_volume(&self) -> Result<Vec<PersistentVolume>, K8sError>;

    async fn get_persistent_volume(&self, name: &str) -> Result<PersistentVolume, K8sError>;

    async fn create_persistent_volume(
        &self,
        pv: &PersistentVolume,
    ) -> Result<PersistentVolume, K8sError>;

    async fn apply_persistent_volume(
        &self,
        pv: &PersistentVolume,
    ) -> Result<PersistentVolume, K8sError>;

    async fn delete_persistent_volume(&self, name: &str) -> Result<(), K8sError>;
}

pub struct K8sPersistentVolumeClient {
    api: Api<PersistentVolume>,
}

impl K8sPersistentVolumeClient {
    /// Constructs a client against the real API server.
    ///
    /// If loading from the inCluster config fail we fall back to kube-config
    /// This will respect the `$KUBECONFIG` envvar, but otherwise default to `~/.kube/config`.
    /// Not leveraging infer() to check inClusterConfig first
    pub async fn try_default() -> Result<Self, K8sError> {
        debug!("trying inClusterConfig for k8s client");

        let config = match Config::incluster() {
            Ok(c) => c,
            Err(e) => {
                debug!(
                    "inClusterConfig failed {}, trying kubeconfig for k8s client",
                    e
                );
                Config::from_kubeconfig(&KubeConfigOptions::default()).await?
            }
        };

        let client = Client::try_from(config)?;
        debug!("client creation succeeded");

        Ok(Self::new(client))
    }

    pub fn new(client: Client) -> Self {
        // PersistentVolumes are cluster-scoped.
        Self {
            api: Api::all(client),
        }
    }
}

#[async_trait]
impl PersistentVolumeApi for K8sPersistentVolumeClient {
    async fn list_persistent_volume(&self) -> Result<Vec<PersistentVolume>, K8sError> {
        let pv_list = self.api.list(&ListParams::default()).await?;

        Ok(pv_list.items)
    }

    async fn get_persistent_volume(&self, name: &str) -> Result<PersistentVolume, K8sError> {
        Ok(self.api.get(name).await?)
    }

    async fn create_persistent_volume(
        &self,
        pv: &PersistentVolume,
    ) -> Result<PersistentVolume, K8sError> {
        Ok(self.api.create(&PostParams::default(), pv).await?)
    }

    async fn apply_persistent_volume(
        &self,
        pv: &PersistentVolume,
    ) -> Result<PersistentVolume, K8sError> {
        let name = pv.metadata.name.as_deref().ok_or(K8sError::MissingName)?;

        Ok(self
            .api
            .patch(
                name,
                &PatchParams::apply(CONSOLE_ACTOR).force(),
                &Patch::Apply(pv),
            )
            .await?)
    }

    async fn delete_persistent_volume(&self, name: &str) -> Result<(), K8sError> {
        self.api.delete(name, &DeleteParams::default()).await?;
        debug!("deleted PersistentVolume {}", name);

        Ok(())
    }
}
