use crate::error::GridError;

/// One of the six faces of a pointy-top hexagon.
///
/// Numbered counter-clockwise on screen starting from the right face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Right = 0,
    TopRight = 1,
    TopLeft = 2,
    Left = 3,
    BottomLeft = 4,
    BottomRight = 5,
}

impl Face {
    /// All faces in numbering order.
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::TopRight,
        Face::TopLeft,
        Face::Left,
        Face::BottomLeft,
        Face::BottomRight,
    ];

    /// Axial `(dq, dr)` step to the neighbor across this face.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Face::Right => (1, 0),
            Face::TopRight => (1, -1),
            Face::TopLeft => (0, -1),
            Face::Left => (-1, 0),
            Face::BottomLeft => (-1, 1),
            Face::BottomRight => (0, 1),
        }
    }

    /// The face pointing the other way.
    #[must_use]
    pub fn opposite(self) -> Face {
        Face::ALL[(self.index() + 3) % 6]
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two corners delimiting this face, in counter-clockwise screen order.
    #[must_use]
    pub fn corners(self) -> (Corner, Corner) {
        let first = (self.index() + 4) % 6;
        (Corner::ALL[first], Corner::ALL[(first + 1) % 6])
    }
}

impl TryFrom<usize> for Face {
    type Error = GridError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Face::ALL
            .get(index)
            .copied()
            .ok_or(GridError::InvalidFace(index))
    }
}

/// One of the six corners of a pointy-top hexagon.
///
/// Numbered counter-clockwise on screen starting from the top corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    Top = 0,
    TopLeft = 1,
    BottomLeft = 2,
    Bottom = 3,
    BottomRight = 4,
    TopRight = 5,
}

impl Corner {
    /// All corners in numbering order.
    pub const ALL: [Corner; 6] = [
        Corner::Top,
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::Bottom,
        Corner::BottomRight,
        Corner::TopRight,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit offset of this corner from the hex centre, in circumradii.
    ///
    /// Screen y grows downward, so the top corner is at `(0, -1)`.
    #[must_use]
    pub fn unit_offset(self) -> (f64, f64) {
        let half_width = crate::math::SQRT_3 / 2.0;
        match self {
            Corner::Top => (0.0, -1.0),
            Corner::TopLeft => (-half_width, -0.5),
            Corner::BottomLeft => (-half_width, 0.5),
            Corner::Bottom => (0.0, 1.0),
            Corner::BottomRight => (half_width, 0.5),
            Corner::TopRight => (half_width, -0.5),
        }
    }
}

impl TryFrom<usize> for Corner {
    type Error = GridError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Corner::ALL
            .get(index)
            .copied()
            .ok_or(GridError::InvalidCorner(index))
    }
}

/// Set of faces, one bit per face index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FaceMask(u8);

impl FaceMask {
    pub const EMPTY: FaceMask = FaceMask(0);

    #[must_use]
    pub fn with(self, face: Face) -> Self {
        Self(self.0 | (1 << face.index()))
    }

    #[must_use]
    pub fn contains(self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl FromIterator<Face> for FaceMask {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        iter.into_iter().fold(FaceMask::EMPTY, FaceMask::with)
    }
}
