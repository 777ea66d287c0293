//! Cart registry operations
//!
//! Carts are keyed by host and created on the first add. Membership lives in
//! `cart_items`, one row per add, so repeated adds are kept as repeated rows
//! rather than a quantity.

use super::models::Cart;
use crate::menu::catalog::{self, row_to_menu_item};
use crate::{db, Error, Result};
use rusqlite::{params, Connection, OptionalExtension};

/// Add one entry for `menu_item_id` to the cart of `host`, creating the cart
/// if this host has none yet.
///
/// Fails with [`Error::MenuItemNotFound`] when the menu item does not exist;
/// in that case nothing is written, not even the cart.
pub fn add_item(conn: &mut Connection, host: &str, menu_item_id: i64) -> Result<()> {
    let tx = db::begin_write(conn)?;

    let item = catalog::query_by_id(&tx, menu_item_id)?
        .ok_or(Error::MenuItemNotFound(menu_item_id))?;

    let created = tx.execute("INSERT OR IGNORE INTO carts (host) VALUES (?1)", [host])?;
    if created > 0 {
        tracing::debug!("Created cart for host {}", host);
    }

    tx.execute(
        "INSERT INTO cart_items (cart_host, menu_item_id) VALUES (?1, ?2)",
        params![host, item.id],
    )?;
    tx.commit()?;

    tracing::debug!("Added {} to cart of {}", item, host);
    Ok(())
}

/// Remove one entry for `item_id` from the cart of `host`.
///
/// Only the earliest matching entry is removed, so a duplicated item loses
/// one copy per call. An id that is not in the cart leaves it untouched and
/// is not an error. A host with no cart is [`Error::CartNotFound`].
pub fn delete_item_by_id(conn: &mut Connection, host: &str, item_id: i64) -> Result<()> {
    let tx = db::begin_write(conn)?;

    if !cart_exists(&tx, host)? {
        return Err(Error::CartNotFound(host.to_string()));
    }

    let entry: Option<i64> = tx
        .query_row(
            "SELECT id FROM cart_items WHERE cart_host = ?1 AND menu_item_id = ?2 \
             ORDER BY id LIMIT 1",
            params![host, item_id],
            |row| row.get(0),
        )
        .optional()?;

    match entry {
        Some(entry_id) => {
            tx.execute("DELETE FROM cart_items WHERE id = ?1", [entry_id])?;
            tracing::debug!("Removed item {} from cart of {}", item_id, host);
        }
        None => tracing::debug!("Item {} not in cart of {}; nothing removed", item_id, host),
    }

    tx.commit()?;
    Ok(())
}

/// Look up the cart of `host`; a miss is `None`, not an error
pub fn query_by_host(conn: &Connection, host: &str) -> Result<Option<Cart>> {
    if !cart_exists(conn, host)? {
        return Ok(None);
    }

    let mut stmt = conn.prepare(
        "SELECT m.id, m.description, m.name, m.price, m.image_id \
         FROM cart_items c JOIN menu_items m ON m.id = c.menu_item_id \
         WHERE c.cart_host = ?1 ORDER BY c.id",
    )?;
    let items = stmt
        .query_map([host], row_to_menu_item)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Some(Cart {
        host: host.to_string(),
        items,
    }))
}

fn cart_exists(conn: &Connection, host: &str) -> Result<bool> {
    let found = conn
        .query_row("SELECT 1 FROM carts WHERE host = ?1", [host], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::models::{MenuItem, NewMenuItem};
    use crate::Database;

    fn seed(db: &mut Database, name: &str, price: f64) -> MenuItem {
        catalog::add(db, &NewMenuItem::new(format!("{name} description"), name, price, 1)).unwrap()
    }

    fn item_ids(cart: &Cart) -> Vec<i64> {
        cart.items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_unseen_host_has_no_cart() {
        let db = Database::open_in_memory().unwrap();
        assert!(query_by_host(&db, "host-A").unwrap().is_none());
    }

    #[test]
    fn test_add_item_creates_cart_lazily() {
        let mut db = Database::open_in_memory().unwrap();
        let burger = seed(&mut db, "Burger", 9.5);

        add_item(&mut db, "host-A", burger.id).unwrap();

        let cart = query_by_host(&db, "host-A").unwrap().unwrap();
        assert_eq!(cart.host, "host-A");
        assert_eq!(cart.items, vec![burger]);
    }

    #[test]
    fn test_carts_are_isolated_per_host() {
        let mut db = Database::open_in_memory().unwrap();
        let burger = seed(&mut db, "Burger", 9.5);
        let fries = seed(&mut db, "Fries", 3.0);

        add_item(&mut db, "host-A", burger.id).unwrap();
        add_item(&mut db, "host-B", fries.id).unwrap();

        let a = query_by_host(&db, "host-A").unwrap().unwrap();
        let b = query_by_host(&db, "host-B").unwrap().unwrap();
        assert_eq!(item_ids(&a), vec![burger.id]);
        assert_eq!(item_ids(&b), vec![fries.id]);
    }

    #[test]
    fn test_duplicate_adds_are_kept_and_removed_one_at_a_time() {
        let mut db = Database::open_in_memory().unwrap();
        let burger = seed(&mut db, "Burger", 9.5);

        add_item(&mut db, "host-A", burger.id).unwrap();
        add_item(&mut db, "host-A", burger.id).unwrap();
        let cart = query_by_host(&db, "host-A").unwrap().unwrap();
        assert_eq!(cart.count_of(burger.id), 2);

        delete_item_by_id(&mut db, "host-A", burger.id).unwrap();
        let cart = query_by_host(&db, "host-A").unwrap().unwrap();
        assert_eq!(cart.count_of(burger.id), 1);
    }

    #[test]
    fn test_delete_removes_earliest_match_only() {
        let mut db = Database::open_in_memory().unwrap();
        let burger = seed(&mut db, "Burger", 9.5);
        let fries = seed(&mut db, "Fries", 3.0);

        add_item(&mut db, "host-A", burger.id).unwrap();
        add_item(&mut db, "host-A", fries.id).unwrap();
        add_item(&mut db, "host-A", burger.id).unwrap();

        delete_item_by_id(&mut db, "host-A", burger.id).unwrap();

        let cart = query_by_host(&db, "host-A").unwrap().unwrap();
        assert_eq!(item_ids(&cart), vec![fries.id, burger.id]);
    }

    #[test]
    fn test_delete_missing_item_is_noop() {
        let mut db = Database::open_in_memory().unwrap();
        let burger = seed(&mut db, "Burger", 9.5);
        add_item(&mut db, "host-A", burger.id).unwrap();

        let before = query_by_host(&db, "host-A").unwrap().unwrap();
        delete_item_by_id(&mut db, "host-A", burger.id + 100).unwrap();
        let after = query_by_host(&db, "host-A").unwrap().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_without_cart_is_cart_not_found() {
        let mut db = Database::open_in_memory().unwrap();
        let burger = seed(&mut db, "Burger", 9.5);

        let err = delete_item_by_id(&mut db, "nobody", burger.id).unwrap_err();
        assert!(matches!(err, Error::CartNotFound(ref host) if host == "nobody"));
        assert!(query_by_host(&db, "nobody").unwrap().is_none());
    }

    #[test]
    fn test_add_missing_menu_item_writes_nothing() {
        let mut db = Database::open_in_memory().unwrap();

        let err = add_item(&mut db, "host-A", 404).unwrap_err();
        assert!(matches!(err, Error::MenuItemNotFound(404)));
        assert!(err.is_not_found());
        assert!(query_by_host(&db, "host-A").unwrap().is_none());
    }

    #[test]
    fn test_cart_survives_removing_last_item() {
        let mut db = Database::open_in_memory().unwrap();
        let burger = seed(&mut db, "Burger", 9.5);

        add_item(&mut db, "host-A", burger.id).unwrap();
        delete_item_by_id(&mut db, "host-A", burger.id).unwrap();

        let cart = query_by_host(&db, "host-A").unwrap().unwrap();
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_burger_scenario() {
        let mut db = Database::open_in_memory().unwrap();

        let burger = catalog::add(&mut db, &NewMenuItem::new("Beef burger", "Burger", 9.5, 1)).unwrap();
        let fetched = catalog::query_by_id(&db, burger.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Burger");
        assert_eq!(fetched.price, 9.5);
        assert_eq!(fetched.description, "Beef burger");
        assert_eq!(fetched.image_id, 1);

        add_item(&mut db, "host-A", burger.id).unwrap();
        let cart = query_by_host(&db, "host-A").unwrap().unwrap();
        assert_eq!(item_ids(&cart), vec![burger.id]);

        delete_item_by_id(&mut db, "host-A", burger.id).unwrap();
        let cart = query_by_host(&db, "host-A").unwrap().unwrap();
        assert!(cart.items.is_empty());
    }
}
