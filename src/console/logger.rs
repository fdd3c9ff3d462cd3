use std::cell::RefCell;

use super::printer::Printer;

/// A [`Printer`] capturing the output, for tests.
pub struct Logger {
    output: RefCell<String>,
    errors: RefCell<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
            errors: RefCell::new(String::new()),
        }
    }

    /// What was printed to the standard output.
    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }

    /// What was printed to the standard error.
    #[must_use]
    pub fn errors(&self) -> String {
        self.errors.borrow().clone()
    }
}

impl Printer for Logger {
    fn print(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }

    fn eprint(&self, output: &str) {
        self.errors.borrow_mut().push_str(output);
    }

    fn println(&self, output: &str) {
        self.print(&format!("{output}\n"));
    }

    fn eprintln(&self, output: &str) {
        self.eprint(&format!("{output}\n"));
    }
}
