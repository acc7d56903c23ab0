use store::Store;

/// Shared state handed to every handler.
pub struct AppState {
    pub store: Store,
}
