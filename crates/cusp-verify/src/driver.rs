//! Recursive descent over a certificate stream.

use std::io::BufRead;

use cusp_core::roundoff;
use cusp_core::{CuspError, ErrorInfo};
use cusp_elim::{
    verify_bad_parabolic, verify_killed, verify_lattice_cover, verify_len, verify_out_of_bounds,
    verify_variety,
};
use cusp_word::{parse_word, parse_word_pair};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hard ceiling on the subdivision depth a certificate may request.
pub const MAX_DEPTH: usize = 256;

/// Options for a certificate replay.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Boxcode of the subtree root the certificate describes.
    pub root: String,
    /// Maximum accepted boxcode length.
    pub max_depth: usize,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            root: String::new(),
            max_depth: MAX_DEPTH,
        }
    }
}

/// Summary of a completed replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Boxcode the replay started from.
    pub root: String,
    /// Number of certified leaf nodes (branch instructions not counted).
    pub verified_leaves: u64,
    /// Total instructions consumed.
    pub instructions: u64,
    /// Digest of the consumed certificate bytes.
    pub certificate_sha256: String,
}

struct CertificateStream<R> {
    inner: R,
    hasher: Sha256,
    instructions: u64,
}

impl<R: BufRead> CertificateStream<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            instructions: 0,
        }
    }

    fn next_instruction(&mut self, boxcode: &str) -> Result<String, CuspError> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line).map_err(|err| {
            CuspError::Io(
                ErrorInfo::new("certificate-read", err.to_string())
                    .with_context("boxcode", boxcode),
            )
        })?;
        if read == 0 {
            return Err(CuspError::Certificate(
                ErrorInfo::new("unexpected-eof", "certificate ended inside the tree")
                    .with_context("boxcode", boxcode),
            ));
        }
        self.hasher.update(line.as_bytes());
        self.instructions += 1;
        Ok(line.trim_end().to_owned())
    }
}

/// Replays a certificate stream over the subtree rooted at
/// `options.root`, returning the run summary.
///
/// Every instruction either branches ('X'), certifies a leaf, or is a
/// malformed-certificate failure. After the traversal the arithmetic
/// anomaly flags are swept once: an overflow or underflow anywhere
/// invalidates the whole run.
pub fn run_certificate<R: BufRead>(
    reader: R,
    options: &DriverOptions,
) -> Result<RunSummary, CuspError> {
    if let Some(bad) = options.root.chars().find(|&c| c != '0' && c != '1') {
        return Err(CuspError::Boxcode(
            ErrorInfo::new("invalid-boxcode", format!("'{bad}' is not a boxcode digit"))
                .with_context("boxcode", options.root.clone()),
        ));
    }
    let mut stream = CertificateStream::new(reader);
    let mut boxcode = options.root.clone();
    let mut leaves = 0u64;
    descend(&mut stream, &mut boxcode, options, &mut leaves)?;
    if !roundoff::sweep_ok() {
        return Err(CuspError::Arithmetic(
            ErrorInfo::new(
                "arithmetic-anomaly",
                "overflow or underflow observed during the run",
            )
            .with_context("overflow", roundoff::overflow_seen().to_string())
            .with_context("underflow", roundoff::underflow_seen().to_string()),
        ));
    }
    Ok(RunSummary {
        root: options.root.clone(),
        verified_leaves: leaves,
        instructions: stream.instructions,
        certificate_sha256: hex::encode(stream.hasher.clone().finalize()),
    })
}

fn descend<R: BufRead>(
    stream: &mut CertificateStream<R>,
    boxcode: &mut String,
    options: &DriverOptions,
    leaves: &mut u64,
) -> Result<(), CuspError> {
    if boxcode.len() >= options.max_depth {
        return Err(CuspError::Certificate(
            ErrorInfo::new("depth-exceeded", "certificate descends past the depth ceiling")
                .with_context("boxcode", boxcode.clone())
                .with_context("max_depth", options.max_depth.to_string()),
        ));
    }
    let instruction = stream.next_instruction(boxcode)?;
    let lead = instruction.chars().next().unwrap_or('\0');
    match lead {
        'X' => {
            // Branch nodes are not counted toward the leaf tally.
            boxcode.push('0');
            descend(stream, boxcode, options, leaves)?;
            boxcode.pop();
            boxcode.push('1');
            descend(stream, boxcode, options, leaves)?;
            boxcode.pop();
            Ok(())
        }
        '0'..='6' => {
            verify_out_of_bounds(boxcode, lead)?;
            *leaves += 1;
            Ok(())
        }
        'K' => {
            let word = parse_word(&instruction)?;
            verify_killed(boxcode, &word)?;
            *leaves += 1;
            Ok(())
        }
        'S' => {
            let word = parse_word(&instruction)?;
            verify_len(boxcode, &word, 7)?;
            *leaves += 1;
            Ok(())
        }
        'T' => {
            // T carries either a single bounded-length word or, with a
            // comma, a variety pair.
            if instruction.contains(',') {
                let (first, second) = parse_word_pair(&instruction)?;
                verify_variety(boxcode, &first)?;
                verify_variety(boxcode, &second)?;
            } else {
                let word = parse_word(&instruction)?;
                verify_len(boxcode, &word, 3)?;
            }
            *leaves += 1;
            Ok(())
        }
        'I' => {
            let (first, second) = parse_word_pair(&instruction)?;
            verify_variety(boxcode, &first)?;
            verify_variety(boxcode, &second)?;
            *leaves += 1;
            Ok(())
        }
        'B' => {
            let word = parse_word(&instruction)?;
            verify_bad_parabolic(boxcode, &word)?;
            *leaves += 1;
            Ok(())
        }
        '9' => {
            verify_lattice_cover(boxcode)?;
            *leaves += 1;
            Ok(())
        }
        // Failing on anything else guarantees completeness of the tree.
        other => Err(CuspError::Certificate(
            ErrorInfo::new(
                "malformed-instruction",
                format!("'{other}' does not begin an instruction"),
            )
            .with_context("boxcode", boxcode.clone())
            .with_context("instruction", instruction),
        )),
    }
}
