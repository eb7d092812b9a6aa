use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use karuta_core::cache::{DEFAULT_TTL_MS, LookupCache};
use karuta_core::dictionary::{DICTIONARY_KEY, LocalDictionary};
use karuta_core::remote::RemoteResolver;
use karuta_core::resolver::Resolver;
use karuta_lookup::{LookupError, RemoteLookup};
use karuta_store::{MemoryStore, write_key};
use karuta_types::{DictionaryEntry, RemoteEntry, ResolutionSource, epoch_ms};

/// Scripted transport that answers after a short delay
struct SlowJisho {
    calls: AtomicUsize,
    entries: HashMap<String, RemoteEntry>,
}

impl SlowJisho {
    fn new(entries: &[(&str, &str, Option<&str>)]) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            entries: entries
                .iter()
                .map(|(term, word, definition)| {
                    (
                        term.to_string(),
                        RemoteEntry {
                            word: word.to_string(),
                            reading: String::new(),
                            definition: definition.map(str::to_string),
                            fetched_at_ms: epoch_ms(),
                        },
                    )
                })
                .collect(),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteLookup for SlowJisho {
    async fn lookup(&self, term: &str) -> Result<Option<RemoteEntry>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;
        Ok(self.entries.get(term).cloned())
    }
}

async fn resolver_with(transport: Arc<SlowJisho>, dictionary: &[(&str, &str, &[&str])]) -> Resolver {
    let store = Arc::new(MemoryStore::new());

    let entries: HashMap<String, DictionaryEntry> = dictionary
        .iter()
        .map(|(key, reading, definitions)| {
            (
                key.to_string(),
                DictionaryEntry {
                    reading: reading.to_string(),
                    definitions: definitions.iter().map(|d| d.to_string()).collect(),
                },
            )
        })
        .collect();
    write_key(store.as_ref(), DICTIONARY_KEY, &entries)
        .await
        .unwrap();

    let dictionary = LocalDictionary::load(store.as_ref()).await.unwrap();
    let cache = LookupCache::new(store, DEFAULT_TTL_MS);

    Resolver::new(dictionary, RemoteResolver::new(transport, cache))
}

#[tokio::test]
async fn empty_input_resolves_to_nothing() {
    let transport = SlowJisho::new(&[]);
    let resolver = resolver_with(transport.clone(), &[]).await;

    assert!(resolver.resolve("").await.is_none());
    assert!(resolver.resolve(" \u{3000}\t ").await.is_none());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn local_dictionary_wins_without_network() {
    let transport = SlowJisho::new(&[("食べる", "食べる", Some("networked"))]);
    let resolver = resolver_with(
        transport.clone(),
        &[("食べる", "たべる", &["to eat", "to consume"])],
    )
    .await;

    let got = resolver.resolve(" 食べる ").await.unwrap();
    assert_eq!(got.source, ResolutionSource::Local);
    assert_eq!(got.found_for, "食べる");
    assert_eq!(got.reading, "たべる");
    assert_eq!(got.definition, "to eat ; to consume");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn suru_form_resolves_through_its_stem() {
    let transport = SlowJisho::new(&[]);
    let resolver = resolver_with(transport.clone(), &[("勉強", "べんきょう", &["study"])]).await;

    let got = resolver.resolve("勉強する").await.unwrap();
    assert_eq!(got.source, ResolutionSource::Local);
    assert_eq!(got.found_for, "勉強");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn remote_fallback_carries_the_returned_headword() {
    let transport = SlowJisho::new(&[("猫", "猫", Some("cat"))]);
    let resolver = resolver_with(transport.clone(), &[]).await;

    let got = resolver.resolve("猫").await.unwrap();
    assert_eq!(got.source, ResolutionSource::Remote);
    assert_eq!(got.found_for, "猫");
    assert_eq!(got.definition, "cat");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn remote_entry_without_headword_falls_back_to_the_term() {
    let transport = SlowJisho::new(&[("ねこ", "", Some("cat"))]);
    let resolver = resolver_with(transport.clone(), &[]).await;

    let got = resolver.resolve("ねこ").await.unwrap();
    assert_eq!(got.found_for, "ねこ");
}

#[tokio::test]
async fn unknown_term_resolves_to_nothing() {
    let transport = SlowJisho::new(&[]);
    let resolver = resolver_with(transport.clone(), &[]).await;

    assert!(resolver.resolve("河童").await.is_none());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn concurrent_duplicates_share_one_network_call() {
    let transport = SlowJisho::new(&[("猫", "猫", Some("cat"))]);
    let resolver = resolver_with(transport.clone(), &[]).await;

    // whitespace variants normalize to the same term and share the flight
    let (a, b) = tokio::join!(resolver.resolve("猫"), resolver.resolve("\u{3000}猫\u{3000}"));

    let a = a.unwrap();
    let b = b.unwrap();
    assert_eq!(transport.calls(), 1);
    assert_eq!(a.definition, b.definition);
    assert_eq!(a.found_for, b.found_for);

    // later lookups come from the cache, not the deduplicator
    assert_eq!(resolver.resolve("猫").await.unwrap().definition, "cat");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn entries_without_glosses_resolve_to_nothing_but_stay_cached() {
    let transport = SlowJisho::new(&[("謎", "謎", None)]);
    let resolver = resolver_with(transport.clone(), &[]).await;

    assert!(resolver.resolve("謎").await.is_none());
    assert!(resolver.resolve("謎").await.is_none());
    assert_eq!(transport.calls(), 1);
}
