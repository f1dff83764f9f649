//! Terminal implementations of the confirmation and toast seams.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use backoffice_store::{Confirm, Notifier, Toast, ToastKind};

/// Asks on `output` and reads a yes/no answer from `input`.
///
/// Anything other than `y`/`yes` (including end of input) declines.
pub struct LineConfirm<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl LineConfirm<io::StdinLock<'static>, io::Stderr> {
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&self, prompt: &str) -> bool {
        let mut output = self.output.borrow_mut();
        if write!(output, "{prompt} [y/N] ").and_then(|()| output.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        match self.input.borrow_mut().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

/// Prints toasts to stderr, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, toast: Toast) {
        eprintln!("{}", render_toast(&toast));
    }
}

pub fn render_toast(toast: &Toast) -> String {
    let marker = match toast.kind {
        ToastKind::Success => "ok",
        ToastKind::Error => "error",
        ToastKind::Info => "note",
    };
    format!("{marker}: {}", toast.message)
}

/// Read one trimmed line from stdin after printing `prompt` to stderr.
pub fn read_line(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let confirm = LineConfirm::new(input.as_bytes(), Vec::new());
        let answer = confirm.confirm("Delete this FAQ?");
        (answer, String::from_utf8(confirm.into_output()).unwrap())
    }

    #[test]
    fn accepts_only_explicit_yes() {
        assert!(ask("y\n").0);
        assert!(ask(" YES \n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn shows_the_prompt() {
        assert_eq!(ask("y\n").1, "Delete this FAQ? [y/N] ");
    }

    #[test]
    fn toasts_are_prefixed() {
        assert_eq!(render_toast(&Toast::success("FAQ deleted")), "ok: FAQ deleted");
        assert_eq!(render_toast(&Toast::error("FAQ not found")), "error: FAQ not found");
    }
}
