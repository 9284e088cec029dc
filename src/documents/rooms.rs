use crate::config::RoomScheme;
use crate::constants::layout::{PRIMARY_COLOR, SECONDARY_COLOR};

/// Room labels and text colours for one row of the changing-room sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomAssignment {
    pub home_room: &'static str,
    pub away_room: &'static str,
    pub home_color: &'static str,
    pub away_color: &'static str,
}

/// Assigns rooms and colours to the row at `index` (0-based, after sorting).
///
/// Colours alternate with the row parity in every scheme so neighbouring
/// rows are easy to tell apart.
pub fn assign_rooms(scheme: RoomScheme, index: usize) -> RoomAssignment {
    let even = index % 2 == 0;

    let (home_room, away_room) = match scheme {
        RoomScheme::Paired if even => ("A", "1"),
        RoomScheme::Paired => ("B", "2"),
        RoomScheme::Unlabeled => ("", ""),
        RoomScheme::Fixed => ("T", "U"),
    };

    let (home_color, away_color) = if even {
        (PRIMARY_COLOR, SECONDARY_COLOR)
    } else {
        (SECONDARY_COLOR, PRIMARY_COLOR)
    };

    RoomAssignment {
        home_room,
        away_room,
        home_color,
        away_color,
    }
}
