use resource_store::{Entity, KeyedStore, SequencedStore, StoreError};
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

// --- Test Entity ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct BoothNumber(u32);

impl fmt::Display for BoothNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "booth_{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Booth {
    number: BoothNumber,
    seats: u32,
}

impl Entity for Booth {
    type Id = BoothNumber;

    fn id(&self) -> BoothNumber {
        self.number
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TicketId(u32);

impl From<u32> for TicketId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ticket_{}", self.0)
    }
}

fn booth(number: u32, seats: u32) -> Booth {
    Booth {
        number: BoothNumber(number),
        seats,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Collects formatted log lines so tests can assert on them.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(run: impl FnOnce()) -> String {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    capture.contents()
}

// --- Tests ---

#[test]
fn test_keyed_store_full_lifecycle() {
    init_tracing();
    let mut store = KeyedStore::new();

    // 1. Insert
    assert_eq!(store.insert(booth(3, 4)).unwrap(), BoothNumber(3));
    assert_eq!(store.insert(booth(1, 2)).unwrap(), BoothNumber(1));
    assert_eq!(store.len(), 2);

    // 2. Duplicate keys are rejected and leave the store untouched
    let err = store.insert(booth(3, 8)).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { entity: "Booth", .. }));
    assert_eq!(store.get(&BoothNumber(3)).unwrap().seats, 4);

    // 3. Listing follows insertion order, not key order
    let numbers: Vec<u32> = store.iter().map(|b| b.number.0).collect();
    assert_eq!(numbers, vec![3, 1]);

    // 4. Mutate in place
    store.get_mut(&BoothNumber(1)).unwrap().seats = 6;
    assert_eq!(store.find(&BoothNumber(1)).map(|b| b.seats), Some(6));

    // 5. Remove
    assert!(store.remove(&BoothNumber(3)).is_some());
    assert!(store.remove(&BoothNumber(3)).is_none());
    assert!(!store.contains(&BoothNumber(3)));

    let err = store.get(&BoothNumber(3)).unwrap_err();
    assert_eq!(err.to_string(), "Booth not found: booth_3");
}

#[test]
fn test_sequenced_store_never_reuses_ids() {
    init_tracing();
    let mut store: SequencedStore<TicketId, &str> = SequencedStore::new();

    let first = store.insert("espresso");
    let second = store.insert("latte");
    assert_eq!(first, TicketId(1));
    assert_eq!(second, TicketId(2));

    store.remove(&second).unwrap();
    assert_eq!(store.insert("mocha"), TicketId(3));

    let err = store.remove(&second).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert!(store.get(&second).is_err());

    let listed: Vec<_> = store.iter().map(|(id, name)| (*id, *name)).collect();
    assert_eq!(
        listed,
        vec![(TicketId(1), "espresso"), (TicketId(3), "mocha")]
    );
}

#[test]
fn test_insert_with_sees_the_minted_id() {
    let mut store: SequencedStore<TicketId, String> = SequencedStore::new();
    store.insert("warmup".to_string());

    let id = store.insert_with(|id| format!("stamped {id}"));
    assert_eq!(store.get(&id).unwrap(), "stamped ticket_2");
}

#[test]
fn test_keyed_store_remove_is_traced() {
    let mut store = KeyedStore::new();
    store.insert(booth(2, 4)).unwrap();

    let logs = capture_logs(|| {
        assert!(store.remove(&BoothNumber(2)).is_some());
    });
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(logs.contains("Remove"), "{logs}");
    assert!(logs.contains("Removed"), "{logs}");

    let logs = capture_logs(|| {
        assert!(store.remove(&BoothNumber(2)).is_none());
    });
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("Not found"), "{logs}");
    assert!(logs.contains("booth_2"), "{logs}");
}
