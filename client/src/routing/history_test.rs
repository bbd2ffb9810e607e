use super::*;

#[test]
fn new_history_has_single_entry() {
    let history = MemoryHistory::new("/");
    assert_eq!(history.current_path(), "/");
    assert_eq!(history.entries().len(), 1);
}

#[test]
fn push_then_back_returns_previous() {
    let history = MemoryHistory::new("/");
    history.push("/auth");
    assert_eq!(history.back().as_deref(), Some("/"));
    assert_eq!(history.current_path(), "/");
    assert_eq!(history.back(), None);
}

#[test]
fn push_after_back_drops_forward_entries() {
    let history = MemoryHistory::new("/");
    history.push("/a");
    history.push("/b");
    history.back();
    history.push("/c");
    assert_eq!(history.entries(), vec!["/".to_owned(), "/a".to_owned(), "/c".to_owned()]);
}

#[test]
fn redirect_replaces_current_entry() {
    let history = MemoryHistory::new("/");
    history.push("/profile");
    history.redirect("/auth");
    assert_eq!(history.current_path(), "/auth");
    assert_eq!(history.entries().len(), 2);
    assert_eq!(history.back().as_deref(), Some("/"));
}
