use cusp_core::{CuspError, ErrorInfo};

fn malformed(code: &str, reason: &str) -> CuspError {
    CuspError::Certificate(
        ErrorInfo::new("malformed-word", reason).with_context("instruction", code),
    )
}

/// Extracts the word from an instruction of the form `K(word)`.
pub fn parse_word(code: &str) -> Result<String, CuspError> {
    let open = code
        .find('(')
        .ok_or_else(|| malformed(code, "missing opening parenthesis"))?;
    let close = code
        .rfind(')')
        .filter(|&close| close > open)
        .ok_or_else(|| malformed(code, "missing closing parenthesis"))?;
    Ok(code[open + 1..close].to_owned())
}

/// Extracts the two words from an instruction of the form `I(first,second)`.
pub fn parse_word_pair(code: &str) -> Result<(String, String), CuspError> {
    let inner = parse_word(code)?;
    let comma = inner
        .find(',')
        .ok_or_else(|| malformed(code, "missing comma between words"))?;
    Ok((
        inner[..comma].to_owned(),
        inner[comma + 1..].to_owned(),
    ))
}

/// Number of generator letters in a word, ignoring which generator and
/// which direction.
pub fn g_length(word: &str) -> usize {
    word.chars().filter(|&c| c == 'g' || c == 'G').count()
}
