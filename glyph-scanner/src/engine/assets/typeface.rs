use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Typeface description in the common `typeface.json` layout.
/// Loaded once at startup through the JSON asset loader.
#[derive(Asset, Resource, TypePath, Debug, Clone, Deserialize)]
pub struct Typeface {
    pub glyphs: HashMap<String, TypefaceGlyph>,
    #[serde(rename = "familyName", default)]
    pub family_name: String,
    /// Font units per em.
    pub resolution: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypefaceGlyph {
    /// Horizontal advance in font units.
    #[serde(default)]
    pub ha: f32,
    #[serde(default)]
    pub x_min: f32,
    #[serde(default)]
    pub x_max: f32,
    /// Outline command string. Absent for blank glyphs such as space.
    #[serde(default)]
    pub o: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum TypefaceError {
    #[error("unknown outline command `{0}`")]
    UnknownCommand(String),
    #[error("outline command `{command}` is missing operands")]
    MissingOperand { command: char },
    #[error("invalid outline number `{0}`")]
    InvalidNumber(String),
}

/// One drawing instruction of a glyph outline, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
}

impl Typeface {
    pub fn glyph(&self, character: char) -> Option<&TypefaceGlyph> {
        self.glyphs.get(&character.to_string())
    }

    /// Characters from `characters` that have no drawable outline.
    pub fn missing_glyphs(&self, characters: &[char]) -> Vec<char> {
        characters
            .iter()
            .copied()
            .filter(|c| self.glyph(*c).and_then(|g| g.o.as_ref()).is_none())
            .collect()
    }

    /// World units per font unit for a glyph rendered at `size`.
    pub fn scale_for(&self, size: f32) -> f32 {
        if self.resolution > 0.0 {
            size / self.resolution
        } else {
            1.0
        }
    }
}

impl TypefaceGlyph {
    pub fn outline(&self) -> Result<Vec<OutlineCommand>, TypefaceError> {
        match &self.o {
            Some(source) => parse_outline(source),
            None => Ok(Vec::new()),
        }
    }
}

/// Parse an outline string such as `m 0 0 l 0 700 q 100 700 0 600`.
///
/// Curve commands list the end point first, then the control point(s):
/// `q x y cx cy` and `b x y c1x c1y c2x c2y`.
pub fn parse_outline(source: &str) -> Result<Vec<OutlineCommand>, TypefaceError> {
    let mut tokens = source.split_whitespace();
    let mut commands = Vec::new();

    while let Some(token) = tokens.next() {
        let command = match token {
            "m" => OutlineCommand::MoveTo(next_point(&mut tokens, 'm')?),
            "l" => OutlineCommand::LineTo(next_point(&mut tokens, 'l')?),
            "q" => {
                let to = next_point(&mut tokens, 'q')?;
                let ctrl = next_point(&mut tokens, 'q')?;
                OutlineCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = next_point(&mut tokens, 'b')?;
                let ctrl1 = next_point(&mut tokens, 'b')?;
                let ctrl2 = next_point(&mut tokens, 'b')?;
                OutlineCommand::CubicTo { ctrl1, ctrl2, to }
            }
            other => return Err(TypefaceError::UnknownCommand(other.to_string())),
        };
        commands.push(command);
    }

    Ok(commands)
}

fn next_point<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: char,
) -> Result<Vec2, TypefaceError> {
    let x = next_number(tokens, command)?;
    let y = next_number(tokens, command)?;
    Ok(Vec2::new(x, y))
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: char,
) -> Result<f32, TypefaceError> {
    let token = tokens
        .next()
        .ok_or(TypefaceError::MissingOperand { command })?;
    token
        .parse::<f32>()
        .map_err(|_| TypefaceError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "familyName": "Fixture",
        "resolution": 1000,
        "glyphs": {
            "I": { "ha": 160, "x_min": 0, "x_max": 120, "o": "m 0 0 l 0 700 l 120 700 l 120 0" },
            " ": { "ha": 300, "x_min": 0, "x_max": 0 }
        }
    }"#;

    #[test]
    fn parses_line_and_curve_commands() {
        let commands = parse_outline("m 0 0 l 10 0 q 20 10 20 0 b 0 20 10 20 0 25").unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], OutlineCommand::MoveTo(Vec2::ZERO));
        assert_eq!(
            commands[2],
            OutlineCommand::QuadTo {
                ctrl: Vec2::new(20.0, 0.0),
                to: Vec2::new(20.0, 10.0),
            }
        );
        assert_eq!(
            commands[3],
            OutlineCommand::CubicTo {
                ctrl1: Vec2::new(10.0, 20.0),
                ctrl2: Vec2::new(0.0, 25.0),
                to: Vec2::new(0.0, 20.0),
            }
        );
    }

    #[test]
    fn rejects_malformed_outlines() {
        assert_eq!(
            parse_outline("m 0 0 z"),
            Err(TypefaceError::UnknownCommand("z".into()))
        );
        assert_eq!(
            parse_outline("m 0 0 l 5"),
            Err(TypefaceError::MissingOperand { command: 'l' })
        );
        assert_eq!(
            parse_outline("m 0 x"),
            Err(TypefaceError::InvalidNumber("x".into()))
        );
    }

    #[test]
    fn loads_typeface_json_and_reports_missing_glyphs() {
        let typeface: Typeface = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(typeface.family_name, "Fixture");
        assert!(typeface.glyph('I').is_some());
        assert_eq!(typeface.scale_for(500.0), 0.5);

        // Space exists but has no outline, Q does not exist at all.
        assert_eq!(typeface.missing_glyphs(&['I', ' ', 'Q']), vec![' ', 'Q']);
    }
}
