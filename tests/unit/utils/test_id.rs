use v20_client::utils::id::{CLIENT_ID_LENGTH, client_id};

#[test]
fn test_client_id_length() {
    assert_eq!(client_id().len(), CLIENT_ID_LENGTH);
}

#[test]
fn test_client_id_contains_valid_chars() {
    let valid_chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    for c in client_id().chars() {
        assert!(valid_chars.contains(c), "Invalid character: {c}");
    }
}

#[test]
fn test_client_id_uniqueness() {
    let ids: std::collections::HashSet<String> = (0..100).map(|_| client_id()).collect();
    assert_eq!(ids.len(), 100);
}
