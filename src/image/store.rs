//! Image store operations

use super::models::Image;
use crate::{db, Error, Result};
use rusqlite::{Connection, OptionalExtension};

/// Persist a blob and return it with its generated id.
/// The bytes are stored as-is; no format check is made.
pub fn add(conn: &mut Connection, data: &[u8]) -> Result<Image> {
    let tx = db::begin_write(conn)?;
    tx.execute("INSERT INTO images (data) VALUES (?1)", [data])?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    tracing::debug!("Stored image {} ({} bytes)", id, data.len());
    Ok(Image {
        id,
        data: data.to_vec(),
    })
}

/// Look up an image; a miss is `None`, not an error
pub fn get_image(conn: &Connection, id: i64) -> Result<Option<Image>> {
    conn.query_row("SELECT id, data FROM images WHERE id = ?1", [id], |row| {
        Ok(Image {
            id: row.get(0)?,
            data: row.get(1)?,
        })
    })
    .optional()
    .map_err(Into::into)
}

/// Delete an image.
///
/// Unlike removing an item from a cart, deleting an id that does not exist is
/// reported as [`Error::ImageNotFound`].
pub fn delete_image(conn: &mut Connection, id: i64) -> Result<()> {
    let tx = db::begin_write(conn)?;
    let deleted = tx.execute("DELETE FROM images WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(Error::ImageNotFound(id));
    }
    tx.commit()?;

    tracing::debug!("Deleted image {}", id);
    Ok(())
}
