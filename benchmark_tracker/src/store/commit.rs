//!
//! The commit descriptor recorded with every sample.
//!

use std::path::PathBuf;

use chrono::DateTime;
use chrono::FixedOffset;

///
/// An identity attached to a commit, as the forge reports it.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Signature {
    /// The e-mail address.
    pub email: String,
    /// The display name.
    pub name: String,
    /// The forge account name; absent for identities without an account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

///
/// The commit descriptor recorded with every sample.
/// Purely descriptive; never referenced by key elsewhere in the store.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: Signature,
    /// The commit committer.
    pub committer: Signature,
    /// Whether the commit is distinct from any previously pushed one;
    /// the forge omits the flag for some event types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// The commit hash.
    pub id: String,
    /// The commit message.
    pub message: String,
    /// The commit time, ISO 8601 with the author's UTC offset.
    pub timestamp: DateTime<FixedOffset>,
    /// The tree hash.
    pub tree_id: String,
    /// The commit page URL.
    pub url: String,
}

impl Commit {
    ///
    /// Checks that the descriptor is well-formed.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.id.is_empty() {
            anyhow::bail!("The `id` field of the commit descriptor is empty");
        }
        if self.url.is_empty() {
            anyhow::bail!("The `url` field of the commit descriptor is empty");
        }
        Ok(())
    }
}

impl TryFrom<PathBuf> for Commit {
    type Error = anyhow::Error;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} reading: {error}"))?;
        let commit: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} parsing: {error}"))?;
        Ok(commit)
    }
}
