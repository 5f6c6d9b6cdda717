//! Room design repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over saved `designs` and their `design_items`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `RoomDesign::validate()` before SQL mutations.
//! - Items are written and read back in collection order.
//! - Item replacement on update is atomic.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::item::{Dimensions, PlacedItem, Position};
use crate::model::room::{
    DesignId, FloorType, RoomDesign, RoomDimensions, RoomValidationError, WallColor,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const DESIGN_SELECT_SQL: &str = "SELECT
    id,
    name,
    width,
    length,
    height,
    wall_color,
    floor_type,
    created_at,
    updated_at
FROM designs";

const ITEM_SELECT_SQL: &str = "SELECT
    item_id,
    name,
    type,
    category,
    pos_x,
    pos_y,
    pos_z,
    rotation,
    width,
    height,
    depth,
    image
FROM design_items
WHERE design_id = ?1
ORDER BY sort_order ASC";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for design persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(RoomValidationError),
    Db(DbError),
    NotFound(DesignId),
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "design not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted design data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "design repository requires schema version {expected_version}, got {actual_version}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<RoomValidationError> for RepoError {
    fn from(value: RoomValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Pagination options for listing designs.
#[derive(Debug, Clone, Default)]
pub struct DesignListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for saved room designs.
pub trait DesignRepository {
    fn create_design(&self, design: &RoomDesign) -> RepoResult<DesignId>;
    fn update_design(&self, design: &RoomDesign) -> RepoResult<()>;
    fn get_design(&self, id: DesignId) -> RepoResult<Option<RoomDesign>>;
    /// Lists designs ordered by `updated_at DESC, id ASC`.
    fn list_designs(&self, query: &DesignListQuery) -> RepoResult<Vec<RoomDesign>>;
    fn delete_design(&self, id: DesignId) -> RepoResult<()>;
}

/// SQLite-backed design repository.
pub struct SqliteDesignRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDesignRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl DesignRepository for SqliteDesignRepository<'_> {
    fn create_design(&self, design: &RoomDesign) -> RepoResult<DesignId> {
        design.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO designs (
                id,
                name,
                width,
                length,
                height,
                wall_color,
                floor_type,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                design.id.to_string(),
                design.name.as_str(),
                design.dimensions.width,
                design.dimensions.length,
                design.dimensions.height,
                design.wall_color.as_str(),
                design.floor_type.as_str(),
                design.created_at,
                design.updated_at,
            ],
        )?;
        insert_items(&tx, design)?;
        tx.commit()?;

        Ok(design.id)
    }

    fn update_design(&self, design: &RoomDesign) -> RepoResult<()> {
        design.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute(
            "UPDATE designs
             SET
                name = ?1,
                width = ?2,
                length = ?3,
                height = ?4,
                wall_color = ?5,
                floor_type = ?6,
                updated_at = ?7
             WHERE id = ?8;",
            params![
                design.name.as_str(),
                design.dimensions.width,
                design.dimensions.length,
                design.dimensions.height,
                design.wall_color.as_str(),
                design.floor_type.as_str(),
                design.updated_at,
                design.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(design.id));
        }

        tx.execute(
            "DELETE FROM design_items WHERE design_id = ?1;",
            [design.id.to_string()],
        )?;
        insert_items(&tx, design)?;
        tx.commit()?;

        Ok(())
    }

    fn get_design(&self, id: DesignId) -> RepoResult<Option<RoomDesign>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DESIGN_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            let mut design = parse_design_row(row)?;
            design.furniture = load_items(self.conn, design.id)?;
            design.validate()?;
            return Ok(Some(design));
        }

        Ok(None)
    }

    fn list_designs(&self, query: &DesignListQuery) -> RepoResult<Vec<RoomDesign>> {
        let mut sql = format!("{DESIGN_SELECT_SQL} ORDER BY updated_at DESC, id ASC");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut designs = Vec::new();

        while let Some(row) = rows.next()? {
            designs.push(parse_design_row(row)?);
        }

        for design in &mut designs {
            design.furniture = load_items(self.conn, design.id)?;
            design.validate()?;
        }

        Ok(designs)
    }

    fn delete_design(&self, id: DesignId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM designs WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn insert_items(tx: &Transaction<'_>, design: &RoomDesign) -> RepoResult<()> {
    let mut stmt = tx.prepare(
        "INSERT INTO design_items (
            design_id,
            sort_order,
            item_id,
            name,
            type,
            category,
            pos_x,
            pos_y,
            pos_z,
            rotation,
            width,
            height,
            depth,
            image
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14);",
    )?;

    let design_id = design.id.to_string();
    let items = &design.furniture;
    for (sort_order, item) in items.iter().enumerate() {
        let sort_order = i64::try_from(sort_order)
            .map_err(|_| RepoError::InvalidData("too many items in design".to_string()))?;
        stmt.execute(params![
            design_id.as_str(),
            sort_order,
            item.id.as_str(),
            item.name.as_str(),
            item.kind.as_str(),
            item.category.as_str(),
            item.position.x,
            item.position.y,
            item.position.z,
            item.rotation,
            item.dimensions.width,
            item.dimensions.height,
            item.dimensions.depth,
            item.image.as_deref(),
        ])?;
    }

    Ok(())
}

fn load_items(conn: &Connection, design_id: DesignId) -> RepoResult<Vec<PlacedItem>> {
    let mut stmt = conn.prepare(ITEM_SELECT_SQL)?;
    let mut rows = stmt.query([design_id.to_string()])?;
    let mut items = Vec::new();

    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }

    Ok(items)
}

fn parse_design_row(row: &Row<'_>) -> RepoResult<RoomDesign> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in designs.id"))
    })?;

    let color_text: String = row.get("wall_color")?;
    let wall_color = WallColor::parse(&color_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid wall color `{color_text}` in designs.wall_color"
        ))
    })?;

    let floor_text: String = row.get("floor_type")?;
    let floor_type = FloorType::parse(&floor_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid floor type `{floor_text}` in designs.floor_type"
        ))
    })?;

    Ok(RoomDesign {
        id,
        name: row.get("name")?,
        dimensions: RoomDimensions {
            width: row.get("width")?,
            length: row.get("length")?,
            height: row.get("height")?,
        },
        furniture: Vec::new(),
        wall_color,
        floor_type,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<PlacedItem> {
    Ok(PlacedItem {
        id: row.get("item_id")?,
        name: row.get("name")?,
        kind: row.get("type")?,
        category: row.get("category")?,
        position: Position {
            x: row.get("pos_x")?,
            y: row.get("pos_y")?,
            z: row.get("pos_z")?,
        },
        rotation: row.get("rotation")?,
        dimensions: Dimensions {
            width: row.get("width")?,
            height: row.get("height")?,
            depth: row.get("depth")?,
        },
        image: row.get("image")?,
    })
}
