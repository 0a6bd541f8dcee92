/// Wavefront OBJ vertex loading
use std::path::Path;

use nom::{
    bytes::complete::tag,
    character::complete::{space0, space1},
    combinator::{all_consuming, opt},
    number::complete::double,
    sequence::preceded,
    IResult,
};

use crate::error::ModelError;
use crate::geometry::{Model, Vertex};

/// Parse the `v` records of an OBJ file into a model.
///
/// Coordinates are multiplied by `scale` and rounded to local units. OBJ
/// is y-up while scene heights grow downward, so `y` is negated. Faces,
/// normals, texture coordinates and every other record are ignored. A
/// coordinate that does not fit local units after scaling is a parse error.
pub fn parse_obj(input: &str, scale: f64) -> Result<Model, ModelError> {
    let mut model = Model::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if !is_vertex_record(line) {
            continue;
        }
        let (_, (x, y, z)) = all_consuming(vertex_record)(line).map_err(|e| ModelError::Parse {
            line: index + 1,
            message: e.to_string(),
        })?;
        let out_of_range = || ModelError::Parse {
            line: index + 1,
            message: format!("coordinate out of range at scale {scale}"),
        };
        model.add_vertex(Vertex::new(
            to_local(x, scale).ok_or_else(out_of_range)?,
            to_local(-y, scale).ok_or_else(out_of_range)?,
            to_local(z, scale).ok_or_else(out_of_range)?,
        ));
    }

    if model.is_empty() {
        return Err(ModelError::Empty);
    }
    tracing::debug!(vertices = model.len(), "parsed OBJ model");
    Ok(model)
}

/// Read and parse an OBJ file.
pub fn load_model(path: impl AsRef<Path>, scale: f64) -> Result<Model, ModelError> {
    let text = std::fs::read_to_string(path)?;
    parse_obj(&text, scale)
}

fn is_vertex_record(line: &str) -> bool {
    line.strip_prefix('v')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Scaled and rounded, or `None` if the result is not a finite `i32`.
fn to_local(value: f64, scale: f64) -> Option<i32> {
    let scaled = (value * scale).round();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&scaled)
        .then_some(scaled as i32)
}

fn vertex_record(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(space1, double)(input)?;
    let (input, y) = preceded(space1, double)(input)?;
    let (input, z) = preceded(space1, double)(input)?;
    // Optional homogeneous weight, unused.
    let (input, _) = opt(preceded(space1, double))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (x, y, z)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TETRA: &str = "\
# tetrahedron
o tetra
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.5 0.0
v 0.0 0.0 -2.25 1.0
vn 0 0 1
vt 0.5 0.5
f 1 2 3
f 1 3 4
";

    #[test]
    fn test_parse_vertices_only() {
        let model = parse_obj(TETRA, 100.0).unwrap();
        assert_eq!(
            model.vertices,
            vec![
                Vertex::new(0, 0, 0),
                Vertex::new(100, 0, 0),
                Vertex::new(0, -150, 0),
                Vertex::new(0, 0, -225),
            ]
        );
    }

    #[test]
    fn test_rejects_malformed_vertex() {
        let err = parse_obj("v 1 2 3\nv 1 two 3\n", 1.0).unwrap_err();
        match err {
            ModelError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_rejects_out_of_range_coordinate() {
        let err = parse_obj("v 1e10 0 0\nv 0 1 0\nv 0 0 1\n", 1.0).unwrap_err();
        match err {
            ModelError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("out of range"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
        // In range at unit scale, but not once scaled up.
        assert!(matches!(
            parse_obj("v 0 0 0\nv 0 0 3e7\n", 100.0),
            Err(ModelError::Parse { line: 2, .. })
        ));
        assert!(parse_obj("v 0 0 3e7\n", 1.0).is_ok());
        assert!(matches!(
            parse_obj("v 1 0 0\n", f64::INFINITY),
            Err(ModelError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_no_vertices_is_empty() {
        assert!(matches!(parse_obj("# nothing\nf 1 2 3\n", 1.0), Err(ModelError::Empty)));
    }

    #[test]
    fn test_tabs_and_scientific_notation() {
        let model = parse_obj("v\t1e1\t-2.5E0 3\n", 2.0).unwrap();
        assert_eq!(model.vertices, vec![Vertex::new(20, 5, 6)]);
    }

    #[test]
    fn test_load_model_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TETRA.as_bytes()).unwrap();
        let model = load_model(file.path(), 10.0).unwrap();
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_model(dir.path().join("missing.obj"), 1.0).unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }
}
