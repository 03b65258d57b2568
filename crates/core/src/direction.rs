use crate::error::GridError;

/// Common surface for the per-tessellation direction enums.
///
/// Implementors list their variants in rotational order, so stepping
/// through [Self::ALL] walks the compass one sector at a time and
/// [Self::rotated] is plain index arithmetic.
pub trait GridDirection: Copy + Sized + 'static {
    /// Every direction, in rotational order
    const ALL: &'static [Self];

    /// Position of this direction within [Self::ALL]
    fn index(self) -> usize;

    /// Look up a direction by its index. Errors on anything outside
    /// `0..ALL.len()` rather than wrapping.
    fn from_index(index: usize) -> Result<Self, GridError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GridError::InvalidDirection {
                index,
                max: Self::ALL.len() - 1,
            })
    }

    /// The direction `steps` sectors around the compass from this one
    fn rotated(self, steps: usize) -> Self {
        Self::ALL[(self.index() + steps) % Self::ALL.len()]
    }
}
