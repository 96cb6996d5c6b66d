//! # List Commands
//!
//! Handlers that turn typed commands into store intents.
//!
//! ## Lifecycle of a Line
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "toggle 2" ──► resolve_ref("2") ──► Intent::Toggle(id) ──► dispatch   │
//! │                                                                 │       │
//! │                                                                 ▼       │
//! │                              ListResponse { items, summary } ◄──┘       │
//! │                              (re-read after every mutation)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shoplist_core::validation::parse_item_id;
use shoplist_core::{CoreError, Intent, ItemId, ListStore, ListSummary, ShoppingItem};
use tracing::debug;

use crate::error::AppError;
use crate::state::Session;

/// List contents plus derived counts, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub items: Vec<ShoppingItem>,
    pub summary: ListSummary,
}

impl From<&ListStore> for ListResponse {
    fn from(store: &ListStore) -> Self {
        ListResponse {
            items: store.items().to_vec(),
            summary: store.summary(),
        }
    }
}

/// Resolves a typed reference to an item id.
///
/// ## Rules
/// - A number within `1..=len` is a position in the rendered list
/// - Anything else is taken as an id (unknown ids become no-ops later)
///
/// With sequential ids, positions win over ids of the same spelling.
pub fn resolve_ref(store: &ListStore, reference: &str) -> Result<ItemId, AppError> {
    let reference = reference.trim();

    if let Some(id) = reference
        .parse::<usize>()
        .ok()
        .and_then(|position| store.id_at(position))
    {
        return Ok(id.clone());
    }

    let id = parse_item_id(reference).map_err(CoreError::from)?;
    Ok(id)
}

/// Returns the current list.
pub fn get_list(session: &Session) -> ListResponse {
    ListResponse::from(session.store())
}

/// Adds an item. Blank names are ignored.
pub fn add_item(session: &mut Session, name: &str) -> ListResponse {
    debug!(name = %name, "add command");
    session.dispatch(Intent::Add(name.to_string()));
    get_list(session)
}

/// Toggles an item. Unknown references are ignored.
pub fn toggle_item(session: &mut Session, reference: &str) -> Result<ListResponse, AppError> {
    debug!(reference = %reference, "toggle command");
    let id = resolve_ref(session.store(), reference)?;
    session.dispatch(Intent::Toggle(id));
    Ok(get_list(session))
}

/// Asks for confirmation before deleting.
///
/// Returns the item to confirm, or `None` if the reference matches nothing.
pub fn request_delete(
    session: &mut Session,
    reference: &str,
) -> Result<Option<ShoppingItem>, AppError> {
    debug!(reference = %reference, "delete command");
    let id = resolve_ref(session.store(), reference)?;
    Ok(session.request_delete(id).cloned())
}

/// Handles the answer to a pending delete confirmation.
pub fn answer_delete(session: &mut Session, answer: &str) -> ListResponse {
    session.answer_delete(answer);
    get_list(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_core::IdStrategy;

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::new(IdStrategy::Sequential);
        for name in names {
            add_item(&mut session, name);
        }
        session
    }

    #[test]
    fn test_resolve_position_then_id() {
        let mut session = session_with(&["A", "B", "C"]);
        // Drop "A" so positions and sequential ids diverge.
        session.request_delete(ItemId::new("1"));
        session.answer_delete("y");

        let store = session.store();
        assert_eq!(resolve_ref(store, "1").unwrap(), ItemId::new("2"));
        assert_eq!(resolve_ref(store, "2").unwrap(), ItemId::new("3"));
        assert_eq!(resolve_ref(store, "3").unwrap(), ItemId::new("3"));
        assert_eq!(resolve_ref(store, "abc").unwrap(), ItemId::new("abc"));
        assert!(resolve_ref(store, "  ").is_err());
    }

    #[test]
    fn test_add_and_toggle() {
        let mut session = session_with(&["Milk"]);

        let response = toggle_item(&mut session, "1").unwrap();
        assert!(response.items[0].completed);
        assert_eq!(
            response.summary,
            ListSummary {
                remaining: 0,
                total: 1
            }
        );
    }

    #[test]
    fn test_blank_add_leaves_list() {
        let mut session = session_with(&["Milk"]);
        let response = add_item(&mut session, "   ");
        assert_eq!(response.items.len(), 1);
    }

    #[test]
    fn test_toggle_unknown_is_silent() {
        let mut session = session_with(&["Milk"]);
        let response = toggle_item(&mut session, "ghost").unwrap();
        assert!(!response.items[0].completed);
    }

    #[test]
    fn test_delete_requires_answer() {
        let mut session = session_with(&["Milk", "Eggs"]);

        let asked = request_delete(&mut session, "2").unwrap().unwrap();
        assert_eq!(asked.name, "Eggs");
        assert_eq!(session.store().len(), 2);

        let response = answer_delete(&mut session, "y");
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Milk");
    }

    #[test]
    fn test_delete_unknown_asks_nothing() {
        let mut session = session_with(&["Milk"]);
        assert!(request_delete(&mut session, "9").unwrap().is_none());
        assert!(!session.is_confirming());
    }

    #[test]
    fn test_response_json_shape() {
        let session = session_with(&["Milk"]);
        let json = serde_json::to_value(get_list(&session)).unwrap();

        assert_eq!(json["items"][0]["name"], "Milk");
        assert_eq!(json["summary"]["remaining"], 1);
        assert_eq!(json["summary"]["total"], 1);
    }
}
