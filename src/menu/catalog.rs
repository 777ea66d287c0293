//! Menu catalog operations

use super::models::{MenuItem, NewMenuItem};
use crate::{db, Result};
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_MENU_ITEM: &str = "SELECT id, description, name, price, image_id FROM menu_items";

/// Persist a new menu item and return it with its generated id.
///
/// Inputs are stored as given: no check on price sign or image existence.
pub fn add(conn: &mut Connection, item: &NewMenuItem) -> Result<MenuItem> {
    let tx = db::begin_write(conn)?;
    tx.execute(
        "INSERT INTO menu_items (description, name, price, image_id) VALUES (?1, ?2, ?3, ?4)",
        params![item.description, item.name, item.price, item.image_id],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    let created = MenuItem {
        description: item.description.clone(),
        id,
        image_id: item.image_id,
        name: item.name.clone(),
        price: item.price,
    };
    tracing::debug!("Added menu item {} ({})", created, created.name);
    Ok(created)
}

/// Snapshot of every stored menu item, ordered by id
pub fn query_all(conn: &Connection) -> Result<Vec<MenuItem>> {
    let mut stmt = conn.prepare(&format!("{SELECT_MENU_ITEM} ORDER BY id"))?;
    let items = stmt
        .query_map([], row_to_menu_item)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(items)
}

/// Look up a menu item; a miss is `None`, not an error
pub fn query_by_id(conn: &Connection, id: i64) -> Result<Option<MenuItem>> {
    conn.query_row(
        &format!("{SELECT_MENU_ITEM} WHERE id = ?1"),
        [id],
        row_to_menu_item,
    )
    .optional()
    .map_err(Into::into)
}

/// Helper to convert a row to a MenuItem
pub(crate) fn row_to_menu_item(row: &rusqlite::Row) -> rusqlite::Result<MenuItem> {
    Ok(MenuItem {
        id: row.get(0)?,
        description: row.get(1)?,
        name: row.get(2)?,
        price: row.get(3)?,
        image_id: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn burger() -> NewMenuItem {
        NewMenuItem::new("Beef burger", "Burger", 9.5, 1)
    }

    #[test]
    fn test_add_then_query_by_id() {
        let mut db = Database::open_in_memory().unwrap();

        let created = add(&mut db, &burger()).unwrap();
        let fetched = query_by_id(&db, created.id).unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Burger");
        assert_eq!(fetched.description, "Beef burger");
        assert_eq!(fetched.price, 9.5);
        assert_eq!(fetched.image_id, 1);
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut db = Database::open_in_memory().unwrap();

        let first = add(&mut db, &burger()).unwrap();
        let second = add(&mut db, &burger()).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_add_does_not_validate_inputs() {
        let mut db = Database::open_in_memory().unwrap();

        let odd = NewMenuItem::new("", "Refund", -3.0, 4242);
        let created = add(&mut db, &odd).unwrap();

        let fetched = query_by_id(&db, created.id).unwrap().unwrap();
        assert_eq!(fetched.price, -3.0);
        assert_eq!(fetched.image_id, 4242);
    }

    #[test]
    fn test_query_by_id_miss_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(query_by_id(&db, 99).unwrap().is_none());
    }

    #[test]
    fn test_query_all_is_a_snapshot() {
        let mut db = Database::open_in_memory().unwrap();
        assert!(query_all(&db).unwrap().is_empty());

        add(&mut db, &burger()).unwrap();
        add(&mut db, &NewMenuItem::new("Crispy", "Fries", 3.25, 2)).unwrap();

        let snapshot = query_all(&db).unwrap();
        add(&mut db, &NewMenuItem::new("Cold", "Soda", 1.5, 3)).unwrap();

        let names: Vec<_> = snapshot.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger", "Fries"]);
        assert_eq!(query_all(&db).unwrap().len(), 3);
    }

    #[test]
    fn test_new_menu_item_rejects_caller_id() {
        let payload = serde_json::json!({
            "id": 7,
            "description": "Beef burger",
            "name": "Burger",
            "price": 9.5,
            "imageId": 1
        });
        assert!(serde_json::from_value::<NewMenuItem>(payload).is_err());
    }

    #[test]
    fn test_menu_item_serialized_shape() {
        let item = MenuItem {
            description: "Beef burger".into(),
            id: 3,
            image_id: 1,
            name: "Burger".into(),
            price: 9.5,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Beef burger",
                "id": 3,
                "imageId": 1,
                "name": "Burger",
                "price": 9.5
            })
        );
        assert_eq!(item.to_string(), "<id 3>");
    }
}
