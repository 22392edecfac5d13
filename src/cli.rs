//! CLI interface for the interview client

use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Parser)]
#[command(name = "ai-interviewer")]
#[command(about = "Take an AI-driven interview from the terminal")]
#[command(long_about = "Register for an interview, answer questions chat-style, and review the completion summary")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register with the backend and store a new interview session
    Start {
        /// Candidate name
        #[arg(short, long)]
        name: String,

        /// Candidate email
        #[arg(short, long)]
        email: String,

        /// Invitation code received from the recruiter
        #[arg(short, long)]
        invitation_code: Option<String>,

        /// Candidate id, if already known to the backend
        #[arg(long)]
        candidate_id: Option<u64>,
    },

    /// Run the interview for the stored session
    Interview,

    /// Show the summary of the last completed interview
    Complete {
        /// Output format: console, json, markdown, text
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Clear stored session and completion records
    Reset,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "interview.follow_up_threshold")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "text" | "txt" => Ok(crate::config::OutputFormat::Text),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, text", format)),
    }
}

/// Names need at least two characters once trimmed
pub fn validate_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.chars().count() < 2 {
        return Err("姓名至少需要2个字符".to_string());
    }
    Ok(name.to_string())
}

pub fn validate_email(email: &str) -> Result<String, String> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

    let email = email.trim();
    if re.is_match(email) {
        Ok(email.to_string())
    } else {
        Err("请输入有效的邮箱地址".to_string())
    }
}

/// Blank invitation codes count as absent
pub fn normalize_invitation_code(code: Option<String>) -> Option<String> {
    code.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())
}
