//! Form input loading: job description and resume text from files or stdin.

use std::io::Read;
use std::path::Path;

use regex::Regex;

use crate::errors::ClientError;

/// Path value that means "read from stdin".
pub const STDIN_MARKER: &str = "-";

lazy_static::lazy_static! {
    /// `\cmd{arg}` or `\cmd[opt]{arg}` → `arg`.
    static ref LATEX_COMMAND: Regex = Regex::new(r"\\[a-zA-Z]+(?:\[.*?\])?\{([^}]*)\}").unwrap();
    static ref LATEX_LEFTOVERS: Regex = Regex::new(r"[\\{}]").unwrap();
}

/// Reads one form field. `-` reads all of stdin.
pub fn read_field(source: &str) -> Result<String, ClientError> {
    if source == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| ClientError::Input(format!("failed to read stdin: {e}")))?;
        return Ok(text);
    }

    read_file(Path::new(source))
}

fn read_file(path: &Path) -> Result<String, ClientError> {
    std::fs::read_to_string(path)
        .map_err(|e| ClientError::Input(format!("failed to read {}: {e}", path.display())))
}

/// Rejects `--job - --resume -`: stdin can only feed one field.
pub fn check_sources(job: &str, resume: &str) -> Result<(), ClientError> {
    if job == STDIN_MARKER && resume == STDIN_MARKER {
        return Err(ClientError::Input(
            "only one of --job and --resume may read from stdin".to_string(),
        ));
    }
    Ok(())
}

/// Strips LaTeX markup from a resume so the backend sees plain prose.
pub fn strip_latex(latex: &str) -> String {
    let unwrapped = LATEX_COMMAND.replace_all(latex, "$1");
    LATEX_LEFTOVERS.replace_all(&unwrapped, "").into_owned()
}
