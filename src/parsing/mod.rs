//! parser for the Cooklang recipe markup

use std::path::Path;
use tracing::{debug, trace};

use crate::language::{LoadingError, Recipe};

pub mod annotation;
pub mod assembler;
pub mod metadata;
pub mod scanner;

use scanner::Line;

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Recipe object created by parse() below can borrow
/// from it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: filename
                        .display()
                        .to_string(),
                    filename,
                }),
                std::io::ErrorKind::InvalidData => Err(LoadingError {
                    problem: "Invalid content".to_string(),
                    details: "file is not valid UTF-8 text".to_string(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Check that bytes obtained some other way (standard input, a network
/// buffer) are text before handing them to parse().
pub fn decode<'i, 'b>(filename: &'i Path, bytes: &'b [u8]) -> Result<&'b str, LoadingError<'i>> {
    std::str::from_utf8(bytes).map_err(|error| {
        debug!(?error);
        LoadingError {
            problem: "Invalid content".to_string(),
            details: format!(
                "not valid UTF-8 text after byte {}",
                error.valid_up_to()
            ),
            filename,
        }
    })
}

/// Parse recipe text into a Recipe. This never fails: anything not
/// recognized as markup is kept as narration.
pub fn parse(content: &str) -> Recipe<'_> {
    let mut recipe = Recipe::default();
    let mut block: Vec<Vec<&str>> = Vec::new();

    for line in scanner::scan(content) {
        match line {
            Line::Metadata(content) => match metadata::read_metadata(content) {
                Some((key, value)) => {
                    recipe
                        .metadata
                        .insert(key, value);
                }
                None => {
                    trace!("ignoring malformed metadata line: {:?}", content);
                }
            },
            Line::Comment => {}
            Line::Blank => {
                if !block.is_empty() {
                    recipe
                        .steps
                        .push(assembler::assemble_step(&block));
                    block.clear();
                }
            }
            Line::Narration(pieces) => {
                block.push(pieces);
            }
        }
    }

    if !block.is_empty() {
        recipe
            .steps
            .push(assembler::assemble_step(&block));
    }

    debug!(
        "Found {} step{} and {} metadata entr{}",
        recipe
            .steps
            .len(),
        if recipe
            .steps
            .len()
            == 1
        {
            ""
        } else {
            "s"
        },
        recipe
            .metadata
            .len(),
        if recipe
            .metadata
            .len()
            == 1
        {
            "y"
        } else {
            "ies"
        }
    );

    recipe
}
