use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{Atom, AtomRole};
use crate::core::models::element::Element;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: SdfParseErrorKind,
    },
    #[error("File ended before the atom block was complete")]
    UnexpectedEof,
}

#[derive(Debug, Error)]
pub enum SdfParseErrorKind {
    #[error("Invalid counts line (value: '{value}')")]
    InvalidCountsLine { value: String },
    #[error("Invalid float format in atom line (value: '{value}')")]
    InvalidFloat { value: String },
    #[error("Atom line is too short")]
    LineTooShort,
}

/// Reader for MDL V2000 structure files (`.sdf`, `.mol`).
///
/// Only the first molecule of an SD file is read: the header block, the
/// counts line, and the atom block. Bonds and properties are skipped, since
/// the pipeline infers connectivity geometrically. Every atom comes out as
/// [`AtomRole::Other`]; the loader assigns the final role.
pub struct SdfFile;

impl StructureFile for SdfFile {
    type Error = SdfError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut lines = reader.lines().enumerate();

        // Three header lines: title, program stamp, comment.
        for _ in 0..3 {
            match lines.next() {
                Some((_, line)) => {
                    line?;
                }
                None => return Err(SdfError::UnexpectedEof),
            }
        }
        let (counts_idx, counts) = lines.next().ok_or(SdfError::UnexpectedEof)?;
        let counts = counts?;
        let counts_line_num = counts_idx + 1;

        let atom_count: usize = counts
            .get(0..3)
            .map(str::trim)
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| SdfError::Parse {
                line: counts_line_num,
                kind: SdfParseErrorKind::InvalidCountsLine {
                    value: counts.clone(),
                },
            })?;

        let mut structure = Structure::new("");
        for _ in 0..atom_count {
            let (idx, line) = lines.next().ok_or(SdfError::UnexpectedEof)?;
            let line = line?;
            let line_num = idx + 1;

            if line.len() < 34 {
                return Err(SdfError::Parse {
                    line: line_num,
                    kind: SdfParseErrorKind::LineTooShort,
                });
            }

            let parse_float = |start: usize, end: usize| -> Result<f64, SdfError> {
                let value = line.get(start..end).unwrap_or("").trim();
                value.parse().map_err(|_| SdfError::Parse {
                    line: line_num,
                    kind: SdfParseErrorKind::InvalidFloat {
                        value: value.into(),
                    },
                })
            };

            let x = parse_float(0, 10)?;
            let y = parse_float(10, 20)?;
            let z = parse_float(20, 30)?;
            let symbol = line.get(31..34).unwrap_or("").trim();
            let element: Element = symbol.parse().unwrap_or(Element::Other);

            structure.push(Atom::new(
                symbol,
                element,
                Point3::new(x, y, z),
                AtomRole::Other,
            ));
        }

        Ok(structure)
    }
}
