use super::*;
use crate::modules::blob;

fn only_blob(name: &str) -> Option<&'static ModuleHandle> {
    (name == "BlobModule").then(blob::blob_manager_cls)
}

#[test]
fn starts_unsealed() {
    let registry = HostRegistry::new();
    assert!(!registry.is_installed());
}

#[test]
fn defers_to_installed_provider() {
    let registry = HostRegistry::new();
    registry.install(only_blob).unwrap();
    assert!(registry.is_installed());

    let found = registry.resolve("BlobModule").unwrap();
    assert!(ModuleHandle::same(found, blob::blob_manager_cls()));
    assert!(registry.resolve("FileReaderModule").is_none());
}

#[test]
fn second_install_is_rejected() {
    let registry = HostRegistry::new();
    registry.install(only_blob).unwrap();
    let err = registry.install(blob::blob_class_provider).unwrap_err();
    assert!(matches!(err, FabricError::HostProviderInstalled));

    // First provider stays in effect.
    assert!(registry.resolve("FileReaderModule").is_none());
}

#[test]
fn accepts_a_table_as_provider() {
    let registry = HostRegistry::new();
    registry
        .install(crate::modules::ModuleTable::from_static(blob::PLUGINS))
        .unwrap();
    assert!(registry.resolve("FileReaderModule").is_some());
}

#[test]
fn early_lookup_seals_the_registry() {
    let registry = HostRegistry::new();
    assert!(registry.resolve("BlobModule").is_none());
    assert!(registry.is_installed());

    let err = registry.install(only_blob).unwrap_err();
    assert!(matches!(err, FabricError::HostProviderInstalled));

    // The answer given before the install attempt still holds.
    assert!(registry.resolve("BlobModule").is_none());
}
