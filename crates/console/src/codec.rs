//! Plain-text snapshot codec.
//!
//! The serialized form doubles as the on-disk save format and as the
//! history stack's comparison key, so it must be deterministic and
//! round-trip exactly:
//!
//! ```text
//! background_color: gray
//!
//! 0: cube 1 2 3 1 1 1 0 redCube
//! 1: sphere -0.5 0 2 2 2 2 45 blueSphere
//! ```
//!
//! One background line, then one line per object in index order: index,
//! shape, position (3), scale (3), angle, color key, space-separated.
//! Floats use `Display`, the shortest form that parses back to the same
//! value.

use std::fmt::Write as _;

use shared::{Scene, SceneObject, ShapeKind};

use crate::error::CodecError;

pub const BACKGROUND_MARKER: &str = "background_color:";

/// Fields on an object record after the index token.
const OBJECT_FIELDS: usize = 9;

pub fn serialize(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", BACKGROUND_MARKER, scene.background);
    out.push('\n');
    for (i, obj) in scene.objects.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}: {} {} {} {} {} {} {} {} {}",
            i,
            obj.shape,
            obj.position[0],
            obj.position[1],
            obj.position[2],
            obj.scale[0],
            obj.scale[1],
            obj.scale[2],
            obj.angle,
            obj.color,
        );
    }
    out
}

/// Parse a snapshot back into a scene. Blank lines are skipped; everything
/// else must be the background line or an object record. The first
/// unparseable record aborts with an error rather than truncating.
pub fn deserialize(text: &str) -> Result<Scene, CodecError> {
    let mut scene = Scene::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let mut tokens = raw.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };

        if first == BACKGROUND_MARKER {
            scene.background = tokens
                .next()
                .ok_or_else(|| malformed(line, "missing background color name"))?
                .to_string();
            if tokens.next().is_some() {
                return Err(malformed(line, "trailing tokens after background color"));
            }
            continue;
        }

        let index_token = first.strip_suffix(':').unwrap_or(first);
        if index_token.parse::<usize>().is_err() {
            return Err(malformed(line, format!("unrecognized record '{first}'")));
        }

        let fields: Vec<&str> = tokens.collect();
        if fields.len() != OBJECT_FIELDS {
            return Err(malformed(
                line,
                format!("expected {OBJECT_FIELDS} fields, got {}", fields.len()),
            ));
        }

        let shape = ShapeKind::parse(fields[0])
            .ok_or_else(|| malformed(line, format!("unknown shape '{}'", fields[0])))?;
        let position = [
            float(fields[1], line)?,
            float(fields[2], line)?,
            float(fields[3], line)?,
        ];
        let scale = [
            float(fields[4], line)?,
            float(fields[5], line)?,
            float(fields[6], line)?,
        ];
        let angle = float(fields[7], line)?;

        // The index token itself is ignored: identity is the record's
        // position in the file.
        scene.objects.push(SceneObject {
            shape,
            position,
            scale,
            angle,
            color: fields[8].to_string(),
        });
    }
    Ok(scene)
}

fn float(token: &str, line: usize) -> Result<f32, CodecError> {
    token
        .parse::<f32>()
        .map_err(|_| malformed(line, format!("'{token}' is not a number")))
}

fn malformed(line: usize, reason: impl Into<String>) -> CodecError {
    CodecError::Malformed {
        line,
        reason: reason.into(),
    }
}
