use serde::Serialize;
use torrust_hyper_collection::core::collection::Collection;
use torrust_hyper_collection::core::envelope::Envelope;
use torrust_hyper_collection::core::resource::{AttributeValue, Resource, Schema};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub score: Option<i64>,
}

impl Resource for User {
    fn key(&self) -> String {
        format!("/users/{}", self.id)
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "score" => self.score.map(AttributeValue::from),
            _ => None,
        }
    }
}

/// `count` users, up to 1000, with unique names in a scrambled order, and a
/// score with many ties that every fifth user lacks.
pub fn users(count: u32) -> Vec<User> {
    (1..=count)
        .map(|id| User {
            id,
            name: format!("user-{:03}", (id * 7919) % 1000),
            score: if id % 5 == 0 { None } else { Some(i64::from(id % 7)) },
        })
        .collect()
}

pub fn schema() -> Schema {
    Schema::new(["id", "name", "score"])
}

pub fn collection(users: &[User]) -> Collection<'_, User> {
    Collection::new(users, schema())
}

pub fn references<T>(envelope: &Envelope<T>) -> Vec<String> {
    envelope.references().map(ToOwned::to_owned).collect()
}
