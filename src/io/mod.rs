//! Output abstractions
//!
//! Provides a trait for terminal output, enabling testing by allowing
//! mock implementations. Simulation events go to the logger; this is
//! the channel for the reports a player is meant to read.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    #[allow(dead_code)]
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output implementation using stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Mock output writer for testing
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl Default for MockOutput {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self {
                messages: Vec::new(),
            }
        }
    }

    impl OutputWriter for MockOutput {
        fn write(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn writeln(&mut self, message: &str) {
            self.messages.push(format!("{}\n", message));
        }
    }
}
