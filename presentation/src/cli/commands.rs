//! CLI command definitions

use clap::{Parser, ValueEnum};
use regform_domain::RegistrationForm;
use std::path::PathBuf;

/// Output format for dry runs and submitted payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// The exact JSON body
    Json,
}

/// CLI arguments for regform
#[derive(Parser, Debug)]
#[command(name = "regform")]
#[command(author, version, about = "Validate a registration and submit it to the web-hook")]
#[command(long_about = r#"
regform validates a recruitment-drive registration and posts it as JSON to
the configured web-hook.

Fields are checked in order and the first problem is reported:
full name, phone, qualification, expertise, other expertise, CV,
M-PESA transaction ID. The CV is checked but never uploaded.

Configuration files are loaded from (in priority order):
1. REGFORM_* environment variables
2. --config <path>     Explicit config file
3. ./regform.toml      Project-level config
4. ~/.config/regform/config.toml   Global config

Example:
  regform --full-name "John Doe" --phone 0712345678 --qualification Bachelor \
          --expertise finance --transaction-id QWE12345
  regform --interactive
  regform --dry-run --output json --full-name "Jane Doe" ...
"#)]
pub struct Cli {
    /// Full name (first and last)
    #[arg(long, value_name = "NAME")]
    pub full_name: Option<String>,

    /// Email address
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Phone number, 10 digits without separators
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Highest qualification
    #[arg(long, value_name = "QUALIFICATION")]
    pub qualification: Option<String>,

    /// Years or description of experience
    #[arg(long, value_name = "TEXT")]
    pub experience: Option<String>,

    /// Area of expertise ("other" requires --other-expertise)
    #[arg(long, value_name = "EXPERTISE")]
    pub expertise: Option<String>,

    /// Area of expertise when --expertise is "other"
    #[arg(long, value_name = "TEXT")]
    pub other_expertise: Option<String>,

    /// CV file (.pdf, .doc, .docx; at most 5 MiB). Checked, not uploaded
    #[arg(long, value_name = "PATH")]
    pub cv: Option<PathBuf>,

    /// M-PESA transaction ID (at least 8 characters)
    #[arg(long, value_name = "ID")]
    pub transaction_id: Option<String>,

    /// Prompt for every field, using given flags as defaults
    #[arg(short, long)]
    pub interactive: bool,

    /// Validate and print the payload without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for the payload
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Override the web-hook URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Collect the text fields into a form. Missing flags become empty
    /// values; the CV is resolved separately.
    pub fn to_form(&self) -> RegistrationForm {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        RegistrationForm {
            full_name: value(&self.full_name),
            email: value(&self.email),
            phone: value(&self.phone),
            qualification: value(&self.qualification),
            experience: value(&self.experience),
            expertise: value(&self.expertise),
            other_expertise: value(&self.other_expertise),
            transaction_id: value(&self.transaction_id),
            cv: None,
        }
    }
}
