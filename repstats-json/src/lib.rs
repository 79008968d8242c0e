use async_trait::async_trait;
use parking_lot::RwLock;
use repstats_core::{dedup_by_id, CardId, CardProvider, CoreError, Flashcard};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{debug, warn};

pub mod decode;
pub mod paths;

pub use decode::{decode_export, Dropped, Export};

#[derive(Default)]
struct State {
    cards: Vec<Flashcard>,
    scopes: HashMap<String, Vec<CardId>>,
}

/// Read-only provider over a JSON card export. The file is read on open and
/// on [`JsonCardSource::reload`]; it is never written.
pub struct JsonCardSource {
    path: PathBuf,
    state: RwLock<State>,
}

impl JsonCardSource {
    pub async fn open_default() -> Result<Self, CoreError> {
        Self::open(paths::default_export_file()).await
    }

    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let state = load(&path).await?;
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the export. On error the previous cards are kept.
    pub async fn reload(&self) -> Result<(), CoreError> {
        let state = load(&self.path).await?;
        *self.state.write() = state;
        Ok(())
    }
}

async fn load(path: &Path) -> Result<State, CoreError> {
    let p = path.to_path_buf();
    let root = task::spawn_blocking(move || {
        let buf = fs::read_to_string(&p).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CoreError::NotFound(format!("card export {}", p.display())),
            _ => CoreError::Storage(e.to_string()),
        })?;
        serde_json::from_str::<serde_json::Value>(&buf)
            .map_err(|e| CoreError::Storage(format!("invalid JSON: {e}")))
    })
    .await
    .map_err(|e| CoreError::Storage(e.to_string()))??;

    let export = decode_export(root);
    if export.dropped != Dropped::default() {
        warn!(
            path = %path.display(),
            cards = export.dropped.cards,
            reviews = export.dropped.reviews,
            "skipped malformed entries in card export"
        );
    }
    debug!(path = %path.display(), cards = export.cards.len(), scopes = export.scopes.len(), "card export loaded");
    Ok(State {
        cards: export.cards,
        scopes: export.scopes,
    })
}

#[async_trait]
impl CardProvider for JsonCardSource {
    async fn all_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
        Ok(self.state.read().cards.clone())
    }

    async fn cards_in_scope(&self, scope: &str) -> Result<Vec<Flashcard>, CoreError> {
        let s = self.state.read();
        let ids = s
            .scopes
            .get(scope)
            .ok_or_else(|| CoreError::NotFound(format!("scope {scope}")))?;
        let by_id: HashMap<&str, &Flashcard> = s.cards.iter().map(|c| (c.id.as_str(), c)).collect();
        Ok(dedup_by_id(
            ids.iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|c| (*c).clone())),
        ))
    }
}
