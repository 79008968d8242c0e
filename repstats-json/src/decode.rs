//! Lenient decoding of a host card export.
//!
//! The export is either a bare array of cards or an object with `cards` and
//! an optional `scopes` map of scope id to card ids. Entries that cannot be
//! read are dropped and counted instead of failing the whole file.

use repstats_core::{CardId, Flashcard, ReviewRecord};
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dropped {
    pub cards: usize,
    pub reviews: usize,
}

#[derive(Debug, Default, Clone)]
pub struct Export {
    pub cards: Vec<Flashcard>,
    pub scopes: HashMap<String, Vec<CardId>>,
    pub dropped: Dropped,
}

pub fn decode_export(root: Value) -> Export {
    let mut export = Export::default();
    let (cards, scopes) = match root {
        Value::Array(cards) => (cards, None),
        Value::Object(mut obj) => {
            let cards = match obj.remove("cards") {
                Some(Value::Array(c)) => c,
                _ => Vec::new(),
            };
            (cards, obj.remove("scopes"))
        }
        _ => (Vec::new(), None),
    };

    for entry in cards {
        match entry {
            Value::Object(obj) => match decode_card(&obj, &mut export.dropped) {
                Some(card) => export.cards.push(card),
                None => export.dropped.cards += 1,
            },
            _ => export.dropped.cards += 1,
        }
    }

    if let Some(Value::Object(scopes)) = scopes {
        for (scope, ids) in scopes {
            let ids = match ids {
                Value::Array(ids) => ids.iter().filter_map(id_of).collect(),
                _ => Vec::new(),
            };
            export.scopes.insert(scope, ids);
        }
    }
    export
}

fn decode_card(obj: &Map<String, Value>, dropped: &mut Dropped) -> Option<Flashcard> {
    let id = field(obj, &["id", "_id"]).and_then(id_of)?;
    let mut card = Flashcard::with_id(id);
    card.next_due = field(obj, &["next_due", "nextRepetitionTime"]).and_then(millis);

    if let Some(Value::Array(history)) = field(obj, &["history", "repetitionHistory"]) {
        for rep in history {
            match decode_review(rep) {
                Some(r) => card.history.push(r),
                None => dropped.reviews += 1,
            }
        }
    }
    Some(card)
}

fn decode_review(rep: &Value) -> Option<ReviewRecord> {
    let obj = rep.as_object()?;
    let timestamp = field(obj, &["timestamp", "date"]).and_then(millis)?;
    let score = field(obj, &["score"]).and_then(Value::as_f64)?;
    Some(ReviewRecord::new(timestamp, score))
}

fn field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|n| obj.get(*n)).filter(|v| !v.is_null())
}

fn id_of(v: &Value) -> Option<CardId> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Epoch milliseconds; hosts sometimes write them as floats.
fn millis(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
            .map(|f| f.trunc() as i64)
    })
}
