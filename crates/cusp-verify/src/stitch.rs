//! Hole-file stitching: reassembles a directory of certificate fragments
//! into one logical stream.
//!
//! A fragment covers the subtree rooted at the boxcode it is named by.
//! Inside a fragment, an `H` line stands for a hole: the subtree at the
//! current cursor position continues in its own fragment file, which is
//! spliced in transparently (and may itself contain holes). The cursor
//! follows the tree exactly as the replay driver does: descend on 'X',
//! otherwise climb past completed right branches and flip the first left
//! branch; when the cursor returns to the fragment's base the fragment is
//! complete.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read, Write};
use std::path::Path;

use cusp_core::{CuspError, ErrorInfo};
use zip::ZipArchive;

/// Hard ceiling on the stitched boxcode length.
pub const MAX_STITCH_DEPTH: usize = 512;

fn stitch_error(code: &str, message: impl Into<String>, boxcode: &str) -> CuspError {
    CuspError::Stitch(ErrorInfo::new(code, message).with_context("boxcode", boxcode))
}

fn io_error(err: std::io::Error, path: &Path) -> CuspError {
    CuspError::Io(
        ErrorInfo::new("stitch-io", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

/// Stitches the fragment tree under `tree` starting at `root`, writing
/// the reassembled stream to `out`.
pub fn stitch_tree(tree: &Path, root: &str, out: &mut dyn Write) -> Result<(), CuspError> {
    let reader = open_fragment(tree, root)?;
    let mut boxcode = root.to_owned();
    let complete = process_fragment(tree, reader, &mut boxcode, out)?;
    if !complete {
        return Err(stitch_error(
            "incomplete-tree",
            "the stream ended before the tree closed",
            root,
        ));
    }
    Ok(())
}

/// Opens the fragment holding the subtree at `boxcode`: `<code>.out`
/// plain, or `<code>.out.zip` transport-compressed. The root fragment is
/// named `root.out`.
fn open_fragment(tree: &Path, boxcode: &str) -> Result<Box<dyn BufRead>, CuspError> {
    let stem = if boxcode.is_empty() { "root" } else { boxcode };
    let plain = tree.join(format!("{stem}.out"));
    if plain.is_file() {
        let file = File::open(&plain).map_err(|err| io_error(err, &plain))?;
        return Ok(Box::new(BufReader::new(file)));
    }
    let zipped = tree.join(format!("{stem}.out.zip"));
    if zipped.is_file() {
        let file = File::open(&zipped).map_err(|err| io_error(err, &zipped))?;
        let mut archive = ZipArchive::new(file).map_err(|err| {
            stitch_error("fragment-archive", err.to_string(), boxcode)
        })?;
        let mut entry = archive.by_index(0).map_err(|err| {
            stitch_error("fragment-archive", err.to_string(), boxcode)
        })?;
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|err| io_error(err, &zipped))?;
        return Ok(Box::new(Cursor::new(bytes)));
    }
    Err(stitch_error(
        "fragment-missing",
        "no fragment file for this boxcode",
        boxcode,
    ))
}

/// Replays one fragment. Returns true when its subtree closed, false on
/// a bare end of stream; trailing instructions after the close are a
/// completeness violation.
fn process_fragment(
    tree: &Path,
    mut reader: Box<dyn BufRead>,
    boxcode: &mut String,
    out: &mut dyn Write,
) -> Result<bool, CuspError> {
    let base = boxcode.len();
    let mut depth = 0usize;
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|err| io_error(err, tree))?;
        if read == 0 {
            return Ok(false);
        }
        let lead = line.chars().next().unwrap_or('\0');
        if lead == 'H' {
            if depth == 0 {
                return Err(stitch_error(
                    "hole-recursive",
                    "a fragment may not immediately delegate to itself",
                    boxcode,
                ));
            }
            let hole = open_fragment(tree, boxcode)?;
            let complete = process_fragment(tree, hole, boxcode, out)?;
            if !complete {
                return Err(stitch_error(
                    "hole-incomplete",
                    "a hole fragment ended before its subtree closed",
                    boxcode,
                ));
            }
        } else {
            out.write_all(line.as_bytes())
                .map_err(|err| io_error(err, tree))?;
        }
        if lead == 'X' {
            if boxcode.len() >= MAX_STITCH_DEPTH {
                return Err(stitch_error(
                    "depth-exceeded",
                    "stitched tree descends past the depth ceiling",
                    boxcode,
                ));
            }
            boxcode.push('0');
            depth += 1;
        } else {
            // Climb past completed right branches, then flip the first
            // pending left branch to its right sibling.
            while depth > 0 && boxcode.ends_with('1') {
                boxcode.pop();
                depth -= 1;
            }
            if depth > 0 {
                boxcode.pop();
                boxcode.push('1');
            } else {
                boxcode.truncate(base);
                // The subtree closed; anything further in this fragment
                // is unconsumed and breaks completeness.
                line.clear();
                let trailing = reader
                    .read_line(&mut line)
                    .map_err(|err| io_error(err, tree))?;
                if trailing != 0 {
                    return Err(stitch_error(
                        "fragment-trailing",
                        "fragment continues after its subtree closed",
                        boxcode,
                    ));
                }
                return Ok(true);
            }
        }
    }
}
