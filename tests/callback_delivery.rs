mod common;

use common::{RecordingTransport, configured_client, unconfigured_client};
use identity_registry_client::RegistryError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;

#[tokio::test]
async fn completion_runs_once_with_the_result() {
    let transport = RecordingTransport::ok(200, r#"{"bob.id": {"profile": {}, "verifications": []}}"#);
    let client = configured_client(transport.clone());
    let invocations = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = oneshot::channel();

    let counter = invocations.clone();
    let handle = client.spawn_lookup_users(vec!["bob.id".to_string()], move |result| {
        counter.fetch_add(1, Ordering::SeqCst);
        let _ = tx.send(result);
    });

    let lookup = rx.await.unwrap().unwrap();
    handle.await.unwrap();
    assert!(lookup.contains_key("bob.id"));
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn completion_receives_configuration_error_instead_of_silence() {
    let transport = RecordingTransport::ok(200, "[]");
    let client = unconfigured_client(transport.clone());
    let (tx, rx) = oneshot::channel();

    client.spawn_names_owned_by_address("1BoB".to_string(), move |result| {
        let _ = tx.send(result);
    });

    let err = rx.await.unwrap().unwrap_err();
    assert!(matches!(err, RegistryError::Configuration(_)));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn completion_receives_empty_body_error() {
    let transport = RecordingTransport::ok(200, "");
    let client = configured_client(transport);
    let (tx, rx) = oneshot::channel();

    client.spawn_dkim_public_key_for_domain("example.com".to_string(), move |result| {
        let _ = tx.send(result);
    });

    assert!(matches!(rx.await.unwrap(), Err(RegistryError::EmptyBody(_))));
}

#[tokio::test]
async fn every_spawn_helper_delivers() {
    let transport = RecordingTransport::ok(500, "{}");
    let client = configured_client(transport.clone());
    let delivered = Arc::new(AtomicUsize::new(0));

    let handles = vec![
        {
            let d = delivered.clone();
            client.spawn_search("bob".to_string(), move |r| {
                assert!(r.is_err());
                d.fetch_add(1, Ordering::SeqCst);
            })
        },
        {
            let d = delivered.clone();
            client.spawn_list_all_users(move |r| {
                assert!(r.is_err());
                d.fetch_add(1, Ordering::SeqCst);
            })
        },
        {
            let d = delivered.clone();
            client.spawn_unspent_outputs("1BoB".to_string(), move |r| {
                assert!(r.is_err());
                d.fetch_add(1, Ordering::SeqCst);
            })
        },
    ];

    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(delivered.load(Ordering::SeqCst), 3);
    assert_eq!(transport.calls(), 3);
}
