//! Aligns a cursor to two edges of a tilted box corner and prints the result.
//!
//! Run with `RUST_LOG=debug cargo run --example align` to see the operation's logs.

use edge_align::math::{Matrix4, Point3, UnitQuaternion, Vector3};
use edge_align::operations::{AlignCursorToEdges, AlignParams};
use edge_align::placement::{Cursor, RotationMode};
use edge_align::topology::{EdgeData, TopologyStore, VertexData};
use tracing_subscriber::EnvFilter;

fn main() -> edge_align::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut store = TopologyStore::new();
    let corner = store.add_vertex(VertexData::new(Point3::new(1.0, 0.0, 0.0)));
    let along_x = store.add_vertex(VertexData::new(Point3::new(0.0, 0.1, 0.0)));
    let along_y = store.add_vertex(VertexData::new(Point3::new(1.05, 1.0, 0.0)));
    let bottom = store.add_edge(EdgeData::new(along_x, corner))?;
    let side = store.add_edge(EdgeData::new(corner, along_y))?;

    let world = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.2).to_homogeneous()
        * Matrix4::new_translation(&Vector3::new(0.0, 0.0, 1.5));
    let params = AlignParams::default()
        .with_move_position(true)
        .with_world_transform(world);

    let mut cursor = Cursor::new(RotationMode::EulerXyz);
    let placement =
        AlignCursorToEdges::from_selected(&[bottom, side], Some(side), params)?
            .execute(&store, &mut cursor)?;

    let basis = placement.basis;
    println!("x axis:   {:?}", basis.x_axis().as_slice());
    println!("y axis:   {:?}", basis.y_axis().as_slice());
    println!("z axis:   {:?}", basis.z_axis().as_slice());
    println!("location: {:?}", cursor.location().coords.as_slice());
    println!("rotation: {:?}", cursor.rotation_value());
    Ok(())
}
