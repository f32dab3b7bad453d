use cubemath::{Axis, IndexNewtype, Sign};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use crate::*;

#[test]
fn test_partition_agrees_with_coords() {
    let lattice = CubeLattice::new();
    for face in Face::iter() {
        let derived: Vec<Cubie> = lattice
            .iter()
            .filter(|(_, info)| info.coord[face.axis()] == face.lattice_layer())
            .map(|(id, _)| id)
            .collect();
        assert_eq!(members_of(face).to_vec(), derived, "face {face}");
    }
}

#[test]
fn test_partition_covers_cube() {
    for (id, _) in CubeLattice::new().iter() {
        let owners: Vec<Face> = Face::iter()
            .filter(|&face| members_of(face).contains(&id))
            .collect();
        assert_eq!(owners.len(), 3, "cubie {id}");

        let mut axes: Vec<Axis> = owners.iter().map(|face| face.axis()).collect();
        axes.sort();
        axes.dedup();
        assert_eq!(axes.len(), 3, "cubie {id}");
    }
}

#[test]
fn test_face_geometry() {
    assert_eq!(Face::iter().count(), Face::COUNT);
    for (i, face) in Face::iter().enumerate() {
        assert_eq!(face.index(), i);
        assert_eq!(Face::at(face.axis(), face.position_sign()), face);
        match face.position_sign() {
            Sign::Zero => {
                assert_eq!(face.twist_sign(), None);
                assert_eq!(face.color(), None);
                assert_eq!(face.lattice_layer(), 1);
            }
            sign => {
                assert_eq!(face.twist_sign(), Some(-sign));
                assert!(face.color().is_some());
                assert_eq!(face.lattice_layer(), if sign == Sign::Neg { 0 } else { 2 });
            }
        }
    }

    assert_eq!(
        Face::layers_along(Axis::Z),
        [Face::Front, Face::Back, Face::Standing]
    );
    assert_eq!(
        Face::layers_along(Axis::X),
        [Face::Left, Face::Right, Face::Middle]
    );
    assert_eq!(
        Face::layers_along(Axis::Y),
        [Face::Up, Face::Down, Face::Equator]
    );
}

#[test]
fn test_facelet_colors() {
    let lattice = CubeLattice::new();

    // front-up-left corner
    let corner = lattice.cubie_at(0, 0, 0).unwrap();
    assert_eq!(
        corner.facelet_colors,
        [
            Color::Blue,
            Color::Gray,
            Color::Yellow,
            Color::Gray,
            Color::Orange,
            Color::Gray,
        ],
    );

    // center of the cube
    let center = lattice.cubie_at(1, 1, 1).unwrap();
    assert_eq!(center.facelet_colors, [Color::Gray; 6]);

    // back-down-right corner
    let corner = lattice.cubie_at(2, 2, 2).unwrap();
    assert_eq!(
        corner.facelet_colors,
        [
            Color::Gray,
            Color::Red,
            Color::Gray,
            Color::Green,
            Color::Gray,
            Color::White,
        ],
    );

    // every face contributes exactly nine colored facelets
    let colored = lattice
        .iter()
        .flat_map(|(_, info)| info.facelet_colors)
        .filter(|&color| color != Color::Gray)
        .count();
    assert_eq!(colored, 54);
}

#[test]
fn test_cubie_mesh() {
    let colors = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::White,
    ];
    let mesh = CubieMesh::new(colors);

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.uv_coords.len(), 2 * Color::ATLAS_COLUMNS);
    assert_eq!(mesh.triangle_uv_slots.len(), 12);

    // swatch centers are evenly spaced along the middle of the atlas
    assert_eq!(mesh.uv_coords[0], 0.5 / 7.0);
    assert_eq!(mesh.uv_coords[12], 6.5 / 7.0);
    assert!(mesh.uv_coords.iter().all(|&c| (0.0..=1.0).contains(&c)));

    for (t, triangle) in mesh.triangles.iter().enumerate() {
        let facelet = t / 2;
        let face = FACELET_FACES[facelet];
        assert_eq!(
            mesh.triangle_uv_slots[t],
            colors[facelet].atlas_column() as u32
        );

        // all three corners lie on the facelet's side of the cubie
        for &corner in triangle {
            let position = mesh.vertex_positions[corner as usize * 3 + face.axis().int()];
            assert_eq!(position, face.position_sign().float() * 0.5);
        }
    }
}

#[test]
fn test_populate_and_steal() {
    let mut lattice = CubeLattice::new();
    let mut front = FaceGroup::new(Face::Front);

    assert!(!front.is_populated());
    front.populate(&mut lattice).unwrap();
    assert!(front.is_populated());
    assert_eq!(front.members(), Some(&members_of(Face::Front)));
    assert_eq!(
        front.populate(&mut lattice),
        Err(CubeError::AlreadyPopulated(Face::Front))
    );

    let front_owned = lattice
        .iter()
        .filter(|(_, info)| info.claimed_by == Some(Face::Front))
        .count();
    assert_eq!(front_owned, 9);

    // the up layer shares three cubies with the front layer and steals them
    let mut up = FaceGroup::new(Face::Up);
    up.populate(&mut lattice).unwrap();
    let front_owned = lattice
        .iter()
        .filter(|(_, info)| info.claimed_by == Some(Face::Front))
        .count();
    assert_eq!(front_owned, 6);
    assert_eq!(lattice.cubie(Cubie(0)).unwrap().claimed_by, Some(Face::Up));
    // the stolen cubie is still on the front group's claim list
    assert!(front.members().unwrap().contains(&Cubie(0)));

    lattice.release_all();
    assert!(lattice.iter().all(|(_, info)| info.claimed_by.is_none()));
}

#[test]
fn test_rotate_accumulates_turns() {
    let mut lattice = CubeLattice::new();

    let mut front = FaceGroup::new(Face::Front);
    assert_eq!(
        front.rotate(TwistDirection::Clockwise),
        Err(CubeError::NotPopulated(Face::Front))
    );

    front.populate(&mut lattice).unwrap();
    front.rotate(TwistDirection::Clockwise).unwrap();
    assert_eq!(front.transform().axis, Axis::Z);
    assert_eq!(front.transform().turns.degrees(), 90);

    // the right face turns the other way; two twists make a half turn
    let mut right = FaceGroup::new(Face::Right);
    right.populate(&mut lattice).unwrap();
    right.rotate(TwistDirection::Clockwise).unwrap();
    right.rotate(TwistDirection::Clockwise).unwrap();
    assert_eq!(right.transform().axis, Axis::X);
    assert_eq!(right.transform().turns.degrees(), -180);

    // middle slices can be populated but not twisted
    let mut equator = FaceGroup::new(Face::Equator);
    equator.populate(&mut lattice).unwrap();
    assert_eq!(
        equator.rotate(TwistDirection::Clockwise),
        Err(CubeError::UntwistableFace(Face::Equator))
    );
    assert!(equator.transform().is_identity());
}

#[test]
fn test_four_rotations_make_identity() {
    // regardless of axis or twist sign
    for face in [Face::Front, Face::Down] {
        let mut lattice = CubeLattice::new();
        let mut group = FaceGroup::new(face);
        group.populate(&mut lattice).unwrap();
        for _ in 0..4 {
            group.rotate(TwistDirection::Clockwise).unwrap();
        }
        assert!(group.transform().is_identity(), "face {face}");
        assert_eq!(group.transform().turns.degrees(), 0);
    }
}

#[test]
fn test_cubie_lookup() {
    let lattice = CubeLattice::new();

    assert_eq!(
        lattice.cubie_at(0, 0, 0).unwrap().coord,
        LatticeCoord([0, 0, 0])
    );
    assert_eq!(
        lattice.cubie_at(3, 0, 0).map(|info| info.coord),
        Err(CubeError::OutOfRange { x: 3, y: 0, z: 0 })
    );

    for (id, info) in lattice.iter() {
        assert_eq!(info.coord.index(), id.to_usize());
        let LatticeCoord([x, y, z]) = info.coord;
        assert_eq!(lattice.cubie_at(x, y, z).unwrap().coord, info.coord);
    }
}

#[test]
fn test_translation() {
    assert_eq!(LatticeCoord([0, 1, 2]).translation(), [-1.1, 0.0, 1.1]);
    assert_eq!(LatticeCoord([1, 1, 1]).translation(), [0.0, 0.0, 0.0]);
}
