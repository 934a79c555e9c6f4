//! Mutation operations over a to-do list.
//!
//! Every function takes the list as an owned buffer (`&mut Vec<Item>`) and
//! validates its input before touching it, so a returned error always leaves
//! the list exactly as it was. No I/O happens here.

use chrono::Utc;

use crate::enums::Status;
use crate::errors::CoreError;
use crate::item::Item;

/// Next ID for `items`: `max(id) + 1`, or 1 for an empty list.
///
/// Uses the maximum rather than the length so IDs stay unique after deletions.
/// Returns `None` once the highest ID is `u64::MAX`.
#[must_use]
pub fn next_id(items: &[Item]) -> Option<u64> {
    items.iter().map(|item| item.id).max().unwrap_or(0).checked_add(1)
}

/// Find an item by ID.
#[must_use]
pub fn find_by_id(items: &[Item], id: u64) -> Option<&Item> {
    items.iter().find(|item| item.id == id)
}

/// Validate input and append a new item, returning a copy of it.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the description is empty after trimming,
/// the status is not one of the allowed values, or no ID above the current
/// maximum is left.
pub fn add(items: &mut Vec<Item>, description: &str, status: &str) -> Result<Item, CoreError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(CoreError::validation("description cannot be empty"));
    }
    let status = Status::parse(status)?;
    let id = next_id(items)
        .ok_or_else(|| CoreError::validation("no ids left above the current maximum"))?;

    let item = Item {
        id,
        description: description.to_string(),
        status,
        created_at: Utc::now(),
    };
    items.push(item.clone());
    Ok(item)
}

/// Replace the description of the item with `id`.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `description` trims to empty (checked
/// before lookup), or `CoreError::NotFound` if no item has `id`.
pub fn update_description(
    items: &mut [Item],
    id: u64,
    description: &str,
) -> Result<(), CoreError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(CoreError::validation("new description cannot be empty"));
    }
    let item = find_mut(items, id)?;
    item.description = description.to_string();
    Ok(())
}

/// Replace the status of the item with `id`.
///
/// # Errors
///
/// Returns `CoreError::Validation` for an unknown status (checked before
/// lookup), or `CoreError::NotFound` if no item has `id`.
pub fn update_status(items: &mut [Item], id: u64, status: &str) -> Result<(), CoreError> {
    let status = Status::parse(status)?;
    let item = find_mut(items, id)?;
    item.status = status;
    Ok(())
}

/// Remove the item with `id`, keeping the order of the remaining items.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no item has `id`.
pub fn delete(items: &mut Vec<Item>, id: u64) -> Result<Item, CoreError> {
    let index = items
        .iter()
        .position(|item| item.id == id)
        .ok_or(CoreError::NotFound { id })?;
    Ok(items.remove(index))
}

fn find_mut(items: &mut [Item], id: u64) -> Result<&mut Item, CoreError> {
    items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(CoreError::NotFound { id })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn list_with_ids(ids: &[u64]) -> Vec<Item> {
        ids.iter()
            .map(|&id| Item {
                id,
                description: format!("item {id}"),
                status: Status::NotStarted,
                created_at: Utc::now(),
            })
            .collect()
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn add_to_empty_list_assigns_id_one() {
        let mut items = Vec::new();
        let item = add(&mut items, "Buy milk", "not started").unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.description, "Buy milk");
        assert_eq!(item.status, Status::NotStarted);
        assert_eq!(items, vec![item]);
    }

    #[test]
    fn add_uses_max_id_not_length() {
        let mut items = list_with_ids(&[1, 3]);
        let item = add(&mut items, "next", "started").unwrap();
        assert_eq!(item.id, 4);
        assert_eq!(ids(&items), vec![1, 3, 4]);
    }

    #[test]
    fn add_after_delete_never_reuses_lower_ids() {
        let mut items = list_with_ids(&[1, 2, 3]);
        delete(&mut items, 2).unwrap();
        let item = add(&mut items, "after delete", "started").unwrap();
        assert_eq!(item.id, 4);
    }

    #[test]
    fn add_trims_description_and_lowercases_status() {
        let mut items = Vec::new();
        let item = add(&mut items, "  Walk the dog \n", "StArTeD").unwrap();
        assert_eq!(item.description, "Walk the dog");
        assert_eq!(item.status, Status::Started);
        assert_eq!(item.status.as_str(), "started");
    }

    #[test]
    fn add_rejects_blank_description_without_mutating() {
        let mut items = list_with_ids(&[1]);
        let before = items.clone();
        let err = add(&mut items, "   ", "started").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(items, before);
    }

    #[test]
    fn add_rejects_invalid_status_without_mutating() {
        let mut items = list_with_ids(&[1]);
        let before = items.clone();
        let err = add(&mut items, "valid", "done").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(items, before);
    }

    #[test]
    fn update_description_replaces_in_place() {
        let mut items = list_with_ids(&[1, 2]);
        update_description(&mut items, 2, "  Buy oat milk ").unwrap();
        assert_eq!(items[1].description, "Buy oat milk");
        assert_eq!(items[0].description, "item 1");
    }

    #[test]
    fn update_description_validation_precedes_lookup() {
        let mut items = list_with_ids(&[1]);
        let before = items.clone();
        let err = update_description(&mut items, 99, " \t ").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(items, before);
    }

    #[test]
    fn update_description_missing_id_is_not_found() {
        let mut items = list_with_ids(&[1]);
        let err = update_description(&mut items, 7, "x").unwrap_err();
        assert_eq!(err, CoreError::NotFound { id: 7 });
    }

    #[test]
    fn update_status_replaces_in_place() {
        let mut items = list_with_ids(&[1, 2]);
        update_status(&mut items, 1, "COMPLETED").unwrap();
        assert_eq!(items[0].status, Status::Completed);
        assert_eq!(items[1].status, Status::NotStarted);
    }

    #[test]
    fn update_status_rejects_invalid_and_missing() {
        let mut items = list_with_ids(&[1]);
        assert!(matches!(
            update_status(&mut items, 1, "paused"),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(
            update_status(&mut items, 2, "started"),
            Err(CoreError::NotFound { id: 2 })
        );
        assert_eq!(items[0].status, Status::NotStarted);
    }

    #[test]
    fn delete_preserves_order_and_reports_missing() {
        let mut items = list_with_ids(&[1, 2, 3]);
        let removed = delete(&mut items, 2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(ids(&items), vec![1, 3]);

        let err = delete(&mut items, 2).unwrap_err();
        assert_eq!(err, CoreError::NotFound { id: 2 });
        assert_eq!(ids(&items), vec![1, 3]);
    }

    #[test]
    fn find_by_id_and_next_id() {
        let items = list_with_ids(&[5, 2]);
        assert_eq!(find_by_id(&items, 2).map(|item| item.id), Some(2));
        assert!(find_by_id(&items, 3).is_none());
        assert_eq!(next_id(&items), Some(6));
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn add_after_max_id_fails_without_mutating() {
        let json = format!(
            r#"[{{"id": {}, "description": "last", "status": "started",
                 "created_at": "2024-01-01T00:00:00Z"}}]"#,
            u64::MAX
        );
        let mut items: Vec<Item> = serde_json::from_str(&json).unwrap();
        let before = items.clone();

        assert_eq!(next_id(&items), None);
        let err = add(&mut items, "y", "started").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(items, before);
    }
}
