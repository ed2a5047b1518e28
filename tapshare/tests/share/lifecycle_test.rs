use tapshare::reader::MockProvider;
use tapshare::share::ContactShare;

#[test]
fn initialize_reports_unavailable_environment() {
    let mut share = ContactShare::new(Box::new(MockProvider::unsupported()));
    assert!(!share.initialize());
    assert!(!share.is_ready());
}

#[test]
fn initialize_succeeds_and_reports_ready() {
    let provider = MockProvider::new();
    let handle = provider.reader().clone();
    let mut share = ContactShare::new(Box::new(provider));

    assert!(!share.is_ready());
    assert!(share.initialize());
    assert!(share.is_ready());
    assert_eq!(handle.scan_count(), 1);
}

#[test]
fn acquisition_failure_surfaces_as_false() {
    let mut provider = MockProvider::new();
    provider.fail_next_acquires(1);
    let mut share = ContactShare::new(Box::new(provider));

    assert!(!share.initialize());
    assert!(!share.is_ready());
}

#[test]
fn scan_failure_surfaces_as_false_and_allows_retry() {
    let provider = MockProvider::new();
    provider.reader().fail_next_scans(1);
    let handle = provider.reader().clone();
    let mut share = ContactShare::new(Box::new(provider));

    assert!(!share.initialize());
    assert!(!share.is_ready());
    assert_eq!(handle.scan_count(), 0);

    // The failure is not terminal; a second attempt goes through.
    assert!(share.initialize());
    assert!(share.is_ready());
    assert_eq!(handle.scan_count(), 1);
}

#[test]
fn repeated_initialize_does_not_scan_again() {
    let provider = MockProvider::new();
    let handle = provider.reader().clone();
    let mut share = ContactShare::new(Box::new(provider));

    assert!(share.initialize());
    assert!(share.initialize());
    assert!(share.initialize());
    assert_eq!(handle.scan_count(), 1);
}
