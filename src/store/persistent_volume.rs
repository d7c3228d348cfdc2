use crate::k8s::client::PersistentVolumeApi;
use crate::store::error::StoreError;
use k8s_openapi::api::core::v1::PersistentVolume;
use tracing::debug;

/// Kind label handed to the generic console widgets rendering the selection.
const RESOURCE_KIND_PV: &str = "PV";

/// The PersistentVolume currently open for inspection or editing.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPersistentVolume {
    /// Whether this volume has been persisted to the cluster yet.
    pub is_new: bool,
    pub item: PersistentVolume,
    pub resource_kind: &'static str,
    pub is_deletable: bool,
}

/// Caches the cluster's PersistentVolumes and mediates every mutation through
/// the injected [PersistentVolumeApi] collaborator. The cached list is
/// replaced wholesale after each successful fetch, never patched in place.
///
/// The store is single-owner mutable state: no locking, no cancellation, and
/// overlapping refreshes resolve last-writer-wins.
pub struct PersistentVolumeStore<C> {
    client: C,
    pvs: Vec<PersistentVolume>,
    selected: Option<SelectedPersistentVolume>,
}

impl<C: PersistentVolumeApi> PersistentVolumeStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            pvs: Vec::new(),
            selected: None,
        }
    }

    /// The cached volumes, in the order the API server returned them.
    pub fn pvs(&self) -> &[PersistentVolume] {
        &self.pvs
    }

    pub fn count(&self) -> usize {
        self.pvs.len()
    }

    pub fn selected(&self) -> Option<&SelectedPersistentVolume> {
        self.selected.as_ref()
    }

    /// Opens `pv` for inspection. `None` leaves the current selection in
    /// place; clearing goes through [Self::reset_selected] only.
    pub fn select(&mut self, pv: Option<PersistentVolume>, is_new: bool) {
        if let Some(item) = pv {
            self.selected = Some(SelectedPersistentVolume {
                is_new,
                item,
                resource_kind: RESOURCE_KIND_PV,
                is_deletable: true,
            });
        }
    }

    pub fn reset_selected(&mut self) {
        self.selected = None;
    }

    /// Replaces the cached list with a fresh one from the API server.
    pub async fn fetch_list(&mut self) -> Result<(), StoreError> {
        self.pvs = self.client.list_persistent_volume().await?;

        Ok(())
    }

    /// Re-fetches the selection from the API server. Does nothing unless a
    /// persisted, named volume is currently selected.
    pub async fn fetch_selected(&mut self) -> Result<(), StoreError> {
        let name = match &self.selected {
            Some(selected) if !selected.is_new => match &selected.item.metadata.name {
                Some(name) => name.clone(),
                None => return Ok(()),
            },
            _ => return Ok(()),
        };

        let pv = self.client.get_persistent_volume(&name).await?;
        self.select(Some(pv), false);

        Ok(())
    }

    /// Persists `pv`, then refreshes the cached list. Named volumes go
    /// through server-side apply; a volume carrying only
    /// `metadata.generateName` can be expected to be newly created, so it
    /// goes through create and the server assigns the name.
    pub async fn apply(&mut self, pv: PersistentVolume) -> Result<(), StoreError> {
        if pv.metadata.name.is_some() {
            self.client.apply_persistent_volume(&pv).await?;
        } else if pv.metadata.generate_name.is_some() {
            self.client.create_persistent_volume(&pv).await?;
        } else {
            return Err(StoreError::MissingObjectName);
        }

        self.fetch_list().await
    }

    /// Deletes the named volume, then refreshes the cached list. A failed
    /// delete leaves the cache untouched.
    pub async fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        self.client.delete_persistent_volume(name).await?;
        debug!("deleted PersistentVolume {}, refreshing list", name);

        self.fetch_list().await
    }
}
