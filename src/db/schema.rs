//! Database schema definitions

/// SQL to create the menu_items table
///
/// `image_id` is a soft pointer into `images`: there is no foreign key, so an
/// item may keep referencing an image that was deleted or never existed.
pub const CREATE_MENU_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS menu_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    image_id INTEGER NOT NULL
)
"#;

/// SQL to create the carts table
pub const CREATE_CARTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS carts (
    host TEXT PRIMARY KEY
)
"#;

/// SQL to create the cart_items association table
/// One row per membership; the same menu item may appear several times.
pub const CREATE_CART_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cart_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cart_host TEXT NOT NULL REFERENCES carts(host),
    menu_item_id INTEGER NOT NULL REFERENCES menu_items(id)
)
"#;

/// SQL to create the images table
pub const CREATE_IMAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    data BLOB NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_cart_items_host ON cart_items(cart_host)",
    "CREATE INDEX IF NOT EXISTS idx_cart_items_menu_item ON cart_items(menu_item_id)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_MENU_ITEMS_TABLE,
        CREATE_CARTS_TABLE,
        CREATE_CART_ITEMS_TABLE,
        CREATE_IMAGES_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
