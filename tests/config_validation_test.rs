use todo_api::config::{AppConfig, LocalStoreSection, StoreBackendKind, StoreSection};
use todo_api::store::StoreConfig;

#[test]
fn defaults_resolve_to_local_store() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);

    match config.store_runtime().expect("defaults should be valid") {
        StoreConfig::Local { root_path } => assert_eq!(root_path, "./data"),
        other => panic!("Unexpected store config: {other:?}"),
    }
}

#[test]
fn memory_backend_resolves() {
    let config = AppConfig {
        store: StoreSection {
            backend: StoreBackendKind::Memory,
            local: None,
        },
        ..Default::default()
    };

    match config.store_runtime().expect("memory backend is valid") {
        StoreConfig::Memory => {}
        other => panic!("Unexpected store config: {other:?}"),
    }
}

#[test]
fn local_backend_uses_configured_root() {
    let config = AppConfig {
        store: StoreSection {
            backend: StoreBackendKind::Local,
            local: Some(LocalStoreSection {
                root_path: "/var/lib/todos".to_string(),
            }),
        },
        ..Default::default()
    };

    match config.store_runtime().expect("local backend is valid") {
        StoreConfig::Local { root_path } => assert_eq!(root_path, "/var/lib/todos"),
        other => panic!("Unexpected store config: {other:?}"),
    }
}
