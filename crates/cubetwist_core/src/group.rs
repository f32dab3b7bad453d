//! Face groups: rigid sets of cubies that rotate together.

use cubemath::AxisRotation;

use crate::cubie::Cubie;
use crate::error::CubeError;
use crate::face::{Face, TwistDirection};
use crate::lattice::{CubeLattice, members_of};

/// Set of nine cubies that rotate rigidly about a face's axis.
///
/// A group starts empty. Populating it claims the nine cubies in the face's
/// layer; twisting it accumulates quarter turns in the group's transform.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGroup {
    face: Face,
    members: Option<[Cubie; 9]>,
    transform: AxisRotation,
}

impl FaceGroup {
    /// Constructs an empty group for `face`.
    pub fn new(face: Face) -> Self {
        FaceGroup {
            face,
            members: None,
            transform: AxisRotation::identity(face.axis()),
        }
    }

    /// Returns the face the group belongs to.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the cubies claimed by the group, or `None` if the group is
    /// not populated.
    ///
    /// This is the claim list from populate time; when groups overlap, the
    /// lattice's [`CubieInfo::claimed_by`](crate::CubieInfo) field is
    /// authoritative.
    pub fn members(&self) -> Option<&[Cubie; 9]> {
        self.members.as_ref()
    }

    /// Returns whether the group currently holds its cubies.
    pub fn is_populated(&self) -> bool {
        self.members.is_some()
    }

    /// Returns the group's accumulated rotation.
    pub fn transform(&self) -> AxisRotation {
        self.transform
    }

    /// Claims the nine cubies in the group's layer.
    pub fn populate(&mut self, lattice: &mut CubeLattice) -> Result<(), CubeError> {
        if self.members.is_some() {
            return Err(CubeError::AlreadyPopulated(self.face));
        }
        lattice.claim(self.face);
        self.members = Some(members_of(self.face));
        Ok(())
    }

    /// Rotates the group one quarter turn in its face's fixed direction.
    pub fn rotate(&mut self, direction: TwistDirection) -> Result<(), CubeError> {
        if self.members.is_none() {
            return Err(CubeError::NotPopulated(self.face));
        }
        let sign = direction
            .sign_for(self.face)
            .ok_or(CubeError::UntwistableFace(self.face))?;
        self.transform.turns += sign;
        Ok(())
    }
}
