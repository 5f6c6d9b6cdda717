//! Room-size scaling for reference layouts.
//!
//! Reference layouts are authored for a square room of
//! [`REFERENCE_ROOM_SIZE`] meters. Floor coordinates scale with the target
//! room; height never does.

use crate::model::item::{PlacedItem, Position};
use crate::model::room::RoomDimensions;

/// Side length, in meters, of the room reference layouts are authored for.
pub const REFERENCE_ROOM_SIZE: f64 = 5.0;

/// Maps a reference-room position into `room`.
pub fn scale_position(position: Position, room: &RoomDimensions) -> Position {
    Position {
        x: position.x * (room.width / REFERENCE_ROOM_SIZE),
        y: position.y,
        z: position.z * (room.length / REFERENCE_ROOM_SIZE),
    }
}

/// Returns a copy of `items` with every position scaled into `room`.
pub fn scale_layout(items: &[PlacedItem], room: &RoomDimensions) -> Vec<PlacedItem> {
    items
        .iter()
        .map(|item| PlacedItem {
            position: scale_position(item.position, room),
            ..item.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{scale_layout, scale_position};
    use crate::model::item::{Dimensions, PlacedItem, Position};
    use crate::model::room::RoomDimensions;

    #[test]
    fn scales_floor_axes_independently() {
        let room = RoomDimensions::new(10.0, 5.0, 3.0);
        let scaled = scale_position(Position::new(-1.5, 0.4, 0.0), &room);
        assert_eq!(scaled, Position::new(-3.0, 0.4, 0.0));
    }

    #[test]
    fn height_is_never_scaled() {
        let room = RoomDimensions::new(2.5, 7.5, 4.0);
        let scaled = scale_position(Position::new(2.0, 1.2, -2.0), &room);
        assert_eq!(scaled, Position::new(1.0, 1.2, -3.0));
    }

    #[test]
    fn scale_layout_leaves_input_untouched() {
        let original = vec![PlacedItem::new(
            "Desk",
            "table",
            "Tables",
            Dimensions::new(1.6, 0.75, 0.9),
        )
        .with_id("table-2")
        .at(Position::new(0.0, 0.375, -1.0))];
        let scaled = scale_layout(&original, &RoomDimensions::new(5.0, 10.0, 3.0));

        assert_eq!(original[0].position.z, -1.0);
        assert_eq!(scaled[0].position.z, -2.0);
        assert_eq!(scaled[0].id, "table-2");
        assert_eq!(scaled[0].dimensions, original[0].dimensions);
    }
}
