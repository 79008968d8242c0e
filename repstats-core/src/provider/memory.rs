use crate::{provider::dedup_by_id, CardId, CardProvider, CoreError, Flashcard};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory card set with named scopes.
#[derive(Default)]
pub struct MemoryProvider {
    cards: RwLock<Vec<Flashcard>>,
    scopes: RwLock<HashMap<String, Vec<CardId>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Flashcard>) -> Self {
        Self {
            cards: RwLock::new(cards),
            scopes: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts `card`, replacing any card with the same id.
    pub fn upsert_card(&self, card: Flashcard) {
        let mut cards = self.cards.write();
        match cards.iter_mut().find(|c| c.id == card.id) {
            Some(existing) => *existing = card,
            None => cards.push(card),
        }
    }

    /// Adds card ids to a scope, creating it if needed. Ids may repeat or
    /// refer to cards not yet inserted.
    pub fn assign_scope<I, S>(&self, scope: &str, card_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<CardId>,
    {
        self.scopes
            .write()
            .entry(scope.to_string())
            .or_default()
            .extend(card_ids.into_iter().map(Into::into));
    }
}

#[async_trait]
impl CardProvider for MemoryProvider {
    async fn all_cards(&self) -> Result<Vec<Flashcard>, CoreError> {
        Ok(self.cards.read().clone())
    }

    async fn cards_in_scope(&self, scope: &str) -> Result<Vec<Flashcard>, CoreError> {
        let scopes = self.scopes.read();
        let ids = scopes
            .get(scope)
            .ok_or_else(|| CoreError::NotFound(format!("scope {scope}")))?;
        let cards = self.cards.read();
        let by_id: HashMap<&str, &Flashcard> = cards.iter().map(|c| (c.id.as_str(), c)).collect();
        Ok(dedup_by_id(
            ids.iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|c| (*c).clone())),
        ))
    }
}
