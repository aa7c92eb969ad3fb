//! Block classification tags.

use crate::core::{Error, Result};

/// Position of a cell within a vertical liquid or pit column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Column is one cell high.
    Single,
    Top,
    Middle,
    Bottom,
}

impl Layer {
    /// Pick the layer from the cell's position in its column.
    pub fn from_position(is_top: bool, is_bottom: bool) -> Self {
        match (is_top, is_bottom) {
            (true, true) => Layer::Single,
            (true, false) => Layer::Top,
            (false, true) => Layer::Bottom,
            (false, false) => Layer::Middle,
        }
    }

    pub fn is_top(self) -> bool {
        matches!(self, Layer::Single | Layer::Top)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, Layer::Single | Layer::Bottom)
    }

    fn offset(self) -> u8 {
        match self {
            Layer::Single => 0,
            Layer::Top => 1,
            Layer::Middle => 2,
            Layer::Bottom => 3,
        }
    }

    fn from_offset(offset: u8) -> Option<Self> {
        match offset {
            0 => Some(Layer::Single),
            1 => Some(Layer::Top),
            2 => Some(Layer::Middle),
            3 => Some(Layer::Bottom),
            _ => None,
        }
    }
}

/// Contents category of a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Block {
    /// Outside the map, or never reached.
    #[default]
    Void,
    /// Occupied by a full-cell brush.
    Solid,
    /// Occupied by smaller embedded brushes.
    Embed,
    /// Embedded space with no walls, e.g. observation rooms.
    EmbedOccupied,
    /// Manually set: open, but filled by some item.
    Occupied,
    /// Open playable space.
    Air,
    /// Toxic liquid column.
    Liquid(Layer),
    /// Bottomless pit column.
    Pit(Layer),
}

impl Block {
    /// Every tag, in id order.
    pub const ALL: [Block; 14] = [
        Block::Void,
        Block::Solid,
        Block::Embed,
        Block::Occupied,
        Block::EmbedOccupied,
        Block::Air,
        Block::Liquid(Layer::Single),
        Block::Liquid(Layer::Top),
        Block::Liquid(Layer::Middle),
        Block::Liquid(Layer::Bottom),
        Block::Pit(Layer::Single),
        Block::Pit(Layer::Top),
        Block::Pit(Layer::Middle),
        Block::Pit(Layer::Bottom),
    ];

    /// Liquid or pit tag for a cell, chosen from its column position.
    pub fn from_column(is_pit: bool, is_top: bool, is_bottom: bool) -> Self {
        let layer = Layer::from_position(is_top, is_bottom);
        if is_pit {
            Block::Pit(layer)
        } else {
            Block::Liquid(layer)
        }
    }

    /// Is this inside the map - would entities leak here?
    pub fn inside_map(self) -> bool {
        !matches!(self, Block::Void)
    }

    /// Can physics objects be in this cell? Embeds count as solid.
    pub fn traversable(self) -> bool {
        matches!(self, Block::Air | Block::Liquid(_) | Block::Pit(_))
    }

    /// Is this a solid brush?
    pub fn is_solid(self) -> bool {
        matches!(self, Block::Solid | Block::Embed)
    }

    pub fn is_liquid(self) -> bool {
        matches!(self, Block::Liquid(_))
    }

    pub fn is_pit(self) -> bool {
        matches!(self, Block::Pit(_))
    }

    /// Top cell of a liquid or pit column.
    pub fn is_top(self) -> bool {
        self.layer().is_some_and(Layer::is_top)
    }

    /// Bottom cell of a liquid or pit column.
    pub fn is_bottom(self) -> bool {
        self.layer().is_some_and(Layer::is_bottom)
    }

    /// Column layer, for liquid and pit cells.
    pub fn layer(self) -> Option<Layer> {
        match self {
            Block::Liquid(layer) | Block::Pit(layer) => Some(layer),
            _ => None,
        }
    }

    /// Stable numeric id used in snapshots.
    pub fn id(self) -> u8 {
        match self {
            Block::Void => 0,
            Block::Solid => 1,
            Block::Embed => 2,
            Block::Occupied => 3,
            Block::EmbedOccupied => 4,
            Block::Air => 5,
            Block::Liquid(layer) => 10 + layer.offset(),
            Block::Pit(layer) => 20 + layer.offset(),
        }
    }

    /// Parse a numeric id. Fails with `InvalidTag` outside the known set.
    pub fn from_id(id: u8) -> Result<Self> {
        let block = match id {
            0 => Some(Block::Void),
            1 => Some(Block::Solid),
            2 => Some(Block::Embed),
            3 => Some(Block::Occupied),
            4 => Some(Block::EmbedOccupied),
            5 => Some(Block::Air),
            10..=13 => Layer::from_offset(id - 10).map(Block::Liquid),
            20..=23 => Layer::from_offset(id - 20).map(Block::Pit),
            _ => None,
        };
        block.ok_or(Error::InvalidTag(id))
    }

    /// Upper-case name, e.g. `LIQUID_TOP`.
    pub fn name(self) -> &'static str {
        match self {
            Block::Void => "VOID",
            Block::Solid => "SOLID",
            Block::Embed => "EMBED",
            Block::EmbedOccupied => "EMBED_OCCUPIED",
            Block::Occupied => "OCCUPIED",
            Block::Air => "AIR",
            Block::Liquid(Layer::Single) => "LIQUID_SINGLE",
            Block::Liquid(Layer::Top) => "LIQUID_TOP",
            Block::Liquid(Layer::Middle) => "LIQUID_MID",
            Block::Liquid(Layer::Bottom) => "LIQUID_BOTTOM",
            Block::Pit(Layer::Single) => "PIT_SINGLE",
            Block::Pit(Layer::Top) => "PIT_TOP",
            Block::Pit(Layer::Middle) => "PIT_MID",
            Block::Pit(Layer::Bottom) => "PIT_BOTTOM",
        }
    }
}

impl TryFrom<u8> for Block {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Block::from_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_selection() {
        assert_eq!(Block::from_column(false, true, true), Block::Liquid(Layer::Single));
        assert_eq!(Block::from_column(false, true, false), Block::Liquid(Layer::Top));
        assert_eq!(Block::from_column(false, false, false), Block::Liquid(Layer::Middle));
        assert_eq!(Block::from_column(true, false, true), Block::Pit(Layer::Bottom));
    }

    #[test]
    fn test_predicates() {
        assert!(!Block::Void.inside_map());
        assert!(Block::Solid.inside_map());
        assert!(Block::EmbedOccupied.inside_map());

        assert!(Block::Air.traversable());
        assert!(Block::Pit(Layer::Middle).traversable());
        assert!(!Block::Embed.traversable());
        assert!(!Block::EmbedOccupied.traversable());
        assert!(!Block::Occupied.traversable());

        assert!(Block::Solid.is_solid() && Block::Embed.is_solid());
        assert!(!Block::EmbedOccupied.is_solid());

        assert!(Block::Liquid(Layer::Top).is_liquid());
        assert!(!Block::Liquid(Layer::Top).is_pit());
    }

    #[test]
    fn test_top_and_bottom() {
        let single = Block::Pit(Layer::Single);
        assert!(single.is_top() && single.is_bottom());
        assert!(Block::Liquid(Layer::Top).is_top());
        assert!(!Block::Liquid(Layer::Middle).is_top());
        assert!(!Block::Liquid(Layer::Middle).is_bottom());
        assert!(!Block::Air.is_top());
    }

    #[test]
    fn test_ids() {
        for block in Block::ALL {
            assert_eq!(Block::from_id(block.id()).unwrap(), block);
        }
        assert!(matches!(Block::from_id(6), Err(Error::InvalidTag(6))));
        assert!(matches!(Block::try_from(24), Err(Error::InvalidTag(24))));
    }
}
