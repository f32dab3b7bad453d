//! Interactive session tying together the lattice, face groups, move log,
//! and camera.

use cgmath::{Matrix4, SquareMatrix, Vector3};
use cubemath::Axis;
use cubetwist_core::{CubeError, CubeLattice, Face, FaceGroup, TwistDirection};
use cubetwist_log::{LogFile, MoveLog};
use eyre::{Result, ensure};
use indexmap::IndexMap;

use crate::camera::OrbitCamera;
use crate::commands::Command;
use crate::draw::{DrawCubie, DrawGroup, DrawState};

/// State of one interactive cube session.
///
/// At most one axis has populated face groups at a time; populating a new
/// axis discards the groups of the old one.
#[derive(Debug, Clone)]
pub struct CubeSession {
    lattice: CubeLattice,
    groups: IndexMap<Face, FaceGroup>,
    log: MoveLog,
    camera: OrbitCamera,
}

impl Default for CubeSession {
    fn default() -> Self {
        CubeSession::new()
    }
}

impl CubeSession {
    /// Constructs a session with a solved cube, no populated groups, and the
    /// default camera orientation.
    pub fn new() -> Self {
        CubeSession {
            lattice: CubeLattice::new(),
            groups: IndexMap::new(),
            log: MoveLog::new(),
            camera: OrbitCamera::default(),
        }
    }

    /// Returns the cubie lattice.
    pub fn lattice(&self) -> &CubeLattice {
        &self.lattice
    }

    /// Returns the log of twists applied so far.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Returns the current camera orientation.
    pub fn camera(&self) -> OrbitCamera {
        self.camera
    }

    /// Returns the axis whose layers are currently populated, if any.
    pub fn active_axis(&self) -> Option<Axis> {
        self.groups.values().next().map(|group| group.face().axis())
    }

    /// Returns the face group for `face`, if it is populated.
    pub fn group(&self, face: Face) -> Option<&FaceGroup> {
        self.groups.get(&face)
    }

    /// Executes `command`, or returns an error explaining why it cannot be
    /// executed in the current state.
    pub fn apply(&mut self, command: Command) -> Result<(), CubeError> {
        match command {
            Command::PopulateFrontBack => self.populate_axis(Axis::Z),
            Command::TwistFront => self.twist(Face::Front),
            Command::TwistBack => self.twist(Face::Back),
            Command::PopulateLeftRight => self.populate_axis(Axis::X),
            Command::TwistLeft => self.twist(Face::Left),
            Command::TwistRight => self.twist(Face::Right),
            Command::PopulateUpDown => self.populate_axis(Axis::Y),
            Command::TwistUp => self.twist(Face::Up),
            Command::TwistDown => self.twist(Face::Down),
            Command::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Executes `command`, logging and discarding any error.
    pub fn handle(&mut self, command: Command) {
        if let Err(e) = self.apply(command) {
            log::warn!("ignoring command {command:?}: {e}");
        }
    }

    /// Executes the command bound to `key`, if any.
    pub fn handle_key(&mut self, key: char) {
        match Command::from_key(key) {
            Some(command) => self.handle(command),
            None => log::debug!("ignoring key {key:?}"),
        }
    }

    /// Applies a mouse drag to the orbit camera.
    pub fn orbit_drag(&mut self, dx: f32, dy: f32) {
        self.camera.drag(dx, dy);
    }

    /// Returns the cube to its initial state, keeping the camera where the
    /// user left it.
    pub fn reset(&mut self) {
        let camera = self.camera;
        *self = CubeSession::new();
        self.camera = camera;
    }

    fn populate_axis(&mut self, axis: Axis) -> Result<(), CubeError> {
        for group in self.groups.values() {
            if !group.transform().is_identity() {
                log::warn!("discarding rotation of face {}", group.face());
            }
        }
        self.groups.clear();
        self.lattice.release_all();
        for face in Face::layers_along(axis) {
            let mut group = FaceGroup::new(face);
            group.populate(&mut self.lattice)?;
            self.groups.insert(face, group);
        }
        Ok(())
    }

    fn twist(&mut self, face: Face) -> Result<(), CubeError> {
        let group = self
            .groups
            .get_mut(&face)
            .ok_or(CubeError::NotPopulated(face))?;
        group.rotate(TwistDirection::Clockwise)?;
        self.log.record(face, TwistDirection::Clockwise);
        Ok(())
    }

    /// Assembles the draw state for the current frame.
    ///
    /// Every cubie appears in exactly one group: the group of the face that
    /// claims it, or the identity rest group at the end.
    pub fn draw_state(&self) -> DrawState {
        let mut groups: Vec<DrawGroup> = self
            .groups
            .values()
            .map(|group| DrawGroup {
                face: Some(group.face()),
                rotation: group.transform().matrix(),
                members: vec![],
            })
            .collect();
        let rest = groups.len();
        groups.push(DrawGroup {
            face: None,
            rotation: Matrix4::identity(),
            members: vec![],
        });
        for (cubie, info) in self.lattice.iter() {
            let slot = info
                .claimed_by
                .and_then(|owner| self.groups.get_index_of(&owner))
                .unwrap_or(rest);
            groups[slot].members.push(DrawCubie {
                cubie,
                translation: Vector3::from(info.coord.translation()),
            });
        }
        DrawState {
            view: self.camera.view_matrix(),
            groups,
        }
    }

    /// Rebuilds a session by replaying the moves of a log file.
    ///
    /// Layers are populated on demand as the moves require them. The rebuilt
    /// session re-records each move, so its log carries fresh timestamps.
    pub fn replay(log_file: &LogFile) -> Result<CubeSession> {
        let mut session = CubeSession::new();
        for (i, record) in log_file.moves.iter().enumerate() {
            ensure!(
                record.seq as usize == i,
                "move {i} has sequence number {}",
                record.seq,
            );
            let face = record.face;
            ensure!(face.twist_sign().is_some(), "face {face} cannot be twisted");
            if session.group(face).is_none() {
                session.populate_axis(face.axis())?;
            }
            session.twist(face)?;
        }
        Ok(session)
    }
}
