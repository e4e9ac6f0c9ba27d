//! Blob plugin set: the blob manager and the file reader.

use crate::modules::{ModuleHandle, NativeModule};

const BLOB_MANAGER_METHODS: &[&str] = &[
    "addNetworkingHandler",
    "addWebSocketHandler",
    "removeWebSocketHandler",
    "sendOverSocket",
    "createFromParts",
    "release",
];

const FILE_READER_METHODS: &[&str] = &["readAsText", "readAsDataURL"];

#[derive(Debug, Default)]
struct BlobManager;

impl NativeModule for BlobManager {
    fn name(&self) -> &'static str {
        "BlobModule"
    }

    fn method_names(&self) -> &'static [&'static str] {
        BLOB_MANAGER_METHODS
    }
}

#[derive(Debug, Default)]
struct FileReaderModule;

impl NativeModule for FileReaderModule {
    fn name(&self) -> &'static str {
        "FileReaderModule"
    }

    fn method_names(&self) -> &'static [&'static str] {
        FILE_READER_METHODS
    }
}

fn new_blob_manager() -> Box<dyn NativeModule> {
    Box::new(BlobManager)
}

fn new_file_reader() -> Box<dyn NativeModule> {
    Box::new(FileReaderModule)
}

static BLOB_MANAGER: ModuleHandle =
    ModuleHandle::new("BlobModule", BLOB_MANAGER_METHODS, new_blob_manager);

static FILE_READER_MODULE: ModuleHandle =
    ModuleHandle::new("FileReaderModule", FILE_READER_METHODS, new_file_reader);

/// Descriptors contributed by this plugin set, sorted by name.
pub static PLUGINS: [&ModuleHandle; 2] = [&BLOB_MANAGER, &FILE_READER_MODULE];

/// Resolve a module name within the blob plugin set.
pub fn blob_class_provider(name: &str) -> Option<&'static ModuleHandle> {
    PLUGINS.iter().copied().find(|h| h.name() == name)
}

/// Dedicated accessor for the blob manager.
pub fn blob_manager_cls() -> &'static ModuleHandle {
    &BLOB_MANAGER
}

/// Dedicated accessor for the file reader.
pub fn file_reader_module_cls() -> &'static ModuleHandle {
    &FILE_READER_MODULE
}

#[cfg(test)]
#[path = "../../tests/unit/modules/blob.rs"]
mod tests;
