use crate::k8s;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(
        "failed to apply persistentvolume: persistentvolume should have metadata.name or metadata.generateName"
    )]
    MissingObjectName,

    #[error(transparent)]
    Client(#[from] k8s::Error),
}
