//!
//! The bare JSON output format.
//!

use crate::store::Store;

///
/// The bare JSON output format: the store without the dashboard
/// script wrapper, pretty-printed.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<Store> for Json {
    fn from(store: Store) -> Self {
        let content = serde_json::to_string_pretty(&store).expect("Always valid");
        Self { content }
    }
}
