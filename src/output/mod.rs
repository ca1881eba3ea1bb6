//! Output control module with leveled status reporting

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct OutputManager {
    pub verbose: bool,
    start_time: Instant,
}

impl OutputManager {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            start_time: Instant::now(),
        }
    }

    pub fn info(&self, message: &str) {
        self.print_with_timestamp("INFO", message, "ℹ️");
    }

    pub fn success(&self, message: &str) {
        self.print_with_timestamp("SUCCESS", message, "✅");
    }

    pub fn warning(&self, message: &str) {
        self.print_with_timestamp("WARN", message, "⚠️");
    }

    pub fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    // Section headers
    pub fn section(&self, title: &str) {
        if self.verbose {
            let separator = "━".repeat(60);
            println!("\n{}", separator);
            println!("📋 {}", title);
            println!("{}", separator);
        } else {
            println!("\n📋 {}", title);
        }
    }

    pub fn step(&self, step: &str) {
        if self.verbose {
            println!("    🔸 {}", step);
        }
    }

    pub fn detail(&self, detail: &str) {
        if self.verbose {
            println!("      📝 {}", detail);
        }
    }

    fn print_with_timestamp(&self, level: &str, message: &str, emoji: &str) {
        if self.verbose {
            let timestamp = format!("[{:8.3}s]", self.start_time.elapsed().as_secs_f64());
            println!("{} {} {} {}", timestamp, emoji, level, message);
        } else {
            println!("{} {}", emoji, message);
        }
    }
}
