use super::*;
use crate::modules::NativeModule;

struct Probe;

impl NativeModule for Probe {
    fn name(&self) -> &'static str {
        "ModuleX"
    }

    fn method_names(&self) -> &'static [&'static str] {
        &["ping"]
    }
}

fn new_probe() -> Box<dyn NativeModule> {
    Box::new(Probe)
}

static MODULE_X: ModuleHandle = ModuleHandle::new("ModuleX", &["ping"], new_probe);
static MODULE_X_AGAIN: ModuleHandle = ModuleHandle::new("ModuleX", &[], new_probe);
static MODULE_A: ModuleHandle = ModuleHandle::new("ModuleA", &[], new_probe);
static UNNAMED: ModuleHandle = ModuleHandle::new("  ", &[], new_probe);

#[test]
fn resolves_registered_and_misses_unknown() {
    let table = ModuleTable::try_new([&MODULE_X]).unwrap();
    let found = table.resolve("ModuleX").unwrap();
    assert!(ModuleHandle::same(found, &MODULE_X));
    assert!(table.resolve("ModuleY").is_none());
    assert!(table.contains("ModuleX"));
    assert_eq!(table.len(), 1);
}

#[test]
fn repeated_resolution_is_identical() {
    let table = ModuleTable::try_new([&MODULE_X]).unwrap();
    let a = table.resolve("ModuleX").unwrap();
    let b = table.resolve("ModuleX").unwrap();
    assert!(ModuleHandle::same(a, b));
}

#[test]
fn try_new_rejects_duplicates_and_empty_names() {
    let err = ModuleTable::try_new([&MODULE_X, &MODULE_X_AGAIN]).unwrap_err();
    assert!(matches!(err, FabricError::DuplicateModule(ref n) if n == "ModuleX"));

    let err = ModuleTable::try_new([&UNNAMED]).unwrap_err();
    assert!(matches!(err, FabricError::InvalidModuleName(_)));
}

#[test]
fn from_static_keeps_first_entry() {
    let table = ModuleTable::from_static([&MODULE_X, &MODULE_X_AGAIN, &UNNAMED]);
    assert_eq!(table.names(), vec!["ModuleX"]);
    assert!(ModuleHandle::same(table.resolve("ModuleX").unwrap(), &MODULE_X));
}

#[test]
fn empty_table_resolves_nothing() {
    let table = ModuleTable::default();
    assert!(table.is_empty());
    assert!(table.resolve("ModuleX").is_none());
}

#[test]
fn table_is_a_provider() {
    let table = ModuleTable::try_new([&MODULE_X]).unwrap();
    let provider: &dyn ModuleProvider = &table;
    assert!(provider.resolve("ModuleX").is_some());
    assert!(provider.resolve("ModuleY").is_none());
}

#[test]
fn runtime_tables_are_sorted_for_lookup() {
    let table = ModuleTable::try_new([&MODULE_X, &MODULE_A]).unwrap();
    assert_eq!(table.names(), vec!["ModuleA", "ModuleX"]);
    assert!(ModuleHandle::same(table.resolve("ModuleA").unwrap(), &MODULE_A));
    assert!(ModuleHandle::same(table.resolve("ModuleX").unwrap(), &MODULE_X));

    let table = ModuleTable::from_static([&MODULE_X, &MODULE_A]);
    assert_eq!(table.handles().count(), 2);
    assert!(table.contains("ModuleA"));
}

#[test]
fn static_table_needs_no_startup_work() {
    static ENTRIES: [&ModuleHandle; 2] = [&MODULE_A, &MODULE_X];
    static TABLE: ModuleTable = ModuleTable::from_sorted(&ENTRIES);
    assert_eq!(TABLE.len(), 2);
    assert!(TABLE.resolve("ModuleX").is_some());
    assert!(TABLE.resolve("ModuleB").is_none());
}
