//! Obtains a password from the user without echoing it.

use std::io::{BufRead, IsTerminal, Write};

/// Prompts for a password on the terminal, hiding the input. When stdin is
/// not a terminal (e.g. in scripts), one line is read from stdin instead.
/// The returned string carries no trailing newline.
pub fn read_password(prompt_out: &mut impl Write) -> anyhow::Result<String> {
    if std::io::stdin().is_terminal() {
        writeln!(prompt_out, "Enter password: ")?;
        prompt_out.flush()?;
        Ok(rpassword::read_password()?)
    } else {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
