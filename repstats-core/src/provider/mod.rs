use crate::{CoreError, Flashcard, StatsContext};
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryProvider;

/// Source of flashcards for the statistics. Hosts implement this over their
/// own storage; the aggregation functions only ever see the returned cards.
#[async_trait]
pub trait CardProvider: Send + Sync {
    async fn all_cards(&self) -> Result<Vec<Flashcard>, CoreError>;

    /// Cards belonging to `scope` (a document, folder, or similar), each card
    /// at most once.
    async fn cards_in_scope(&self, scope: &str) -> Result<Vec<Flashcard>, CoreError>;
}

/// Loads the cards a given statistics context covers.
pub async fn load_cards<P: CardProvider + ?Sized>(
    provider: &P,
    context: StatsContext,
    scope: Option<&str>,
) -> Result<Vec<Flashcard>, CoreError> {
    match context {
        StatsContext::Global => provider.all_cards().await,
        StatsContext::CurrentRem => {
            let scope = scope.ok_or(CoreError::Invalid("Current Rem context needs a scope"))?;
            provider.cards_in_scope(scope).await
        }
    }
}

/// Keeps the first occurrence of each card id, preserving order.
pub fn dedup_by_id(cards: impl IntoIterator<Item = Flashcard>) -> Vec<Flashcard> {
    let mut seen = std::collections::HashSet::new();
    cards
        .into_iter()
        .filter(|c| seen.insert(c.id.clone()))
        .collect()
}
