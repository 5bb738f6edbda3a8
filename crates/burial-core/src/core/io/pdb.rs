use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{Atom, AtomRole};
use crate::core::models::element::{Element, is_solvent_residue};
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coord(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

/// Reader for PDB-format coordinate files.
///
/// Only ATOM and HETATM records contribute atoms; everything else (REMARK,
/// TER, CONECT, ...) is skipped. Water residues are classified as
/// [`AtomRole::Water`] at parse time; all other atoms come out as
/// [`AtomRole::Other`] and are reclassified by the loader.
pub struct PdbFile;

impl PdbFile {
    fn element_for(record_type: &str, name: &str, element_field: &str) -> Element {
        if !element_field.is_empty() {
            if let Ok(element) = element_field.parse() {
                return element;
            }
        }
        if record_type == "ATOM" {
            // Protein atom names lead with the element letter (CA is an
            // alpha-carbon here, not calcium).
            let first = name
                .chars()
                .find(|c| !c.is_ascii_digit())
                .unwrap_or('X');
            first
                .to_string()
                .parse()
                .unwrap_or_else(|_| Element::from_atom_name(name))
        } else {
            Element::from_atom_name(name)
        }
    }
}

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut structure = Structure::new("");

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 54 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let name = slice_and_trim(&line, 12, 16);
                    if name.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "13-16".into(),
                            },
                        });
                    }
                    let res_name = slice_and_trim(&line, 17, 20);
                    let element_field = slice_and_trim(&line, 76, 78);

                    let x = parse_coord(&line, line_num, 30, 38)?;
                    let y = parse_coord(&line, line_num, 38, 46)?;
                    let z = parse_coord(&line, line_num, 46, 54)?;

                    let role = if is_solvent_residue(res_name) {
                        AtomRole::Water
                    } else {
                        AtomRole::Other
                    };
                    let element = Self::element_for(record_type, name, element_field);

                    structure.push(Atom::new(name, element, Point3::new(x, y, z), role));
                }
                "END" | "ENDMDL" => break,
                _ => {}
            }
        }

        if structure.is_empty() {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(structure)
    }
}
