use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use formguard_core::{
    audit_security_headers, detect_sql_injection, detect_xss, sanitize_input, validate_email,
    validate_iban, validate_message, validate_name, validate_phone, validate_sinpe,
    validate_time_format, validate_time_range, validate_url, validate_password_strength,
    ThreatReport, ValidationResult,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formguard")]
#[command(about = "Form input validation and threat-detection toolkit", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan input for XSS and SQL-injection indicators
    Scan {
        /// Input string to scan
        input: Option<String>,

        /// Read input from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Entity-escape the input before scanning
        #[arg(long)]
        sanitize: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Run a single field validator
    Validate {
        /// Field type: name, email, phone, message, iban, sinpe, url, time, time-range
        field: String,

        /// Value to validate
        value: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Score password strength
    Password {
        /// Password to score
        value: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Audit a list of response header names for required security headers
    Headers {
        /// Header names present on the response
        names: Vec<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Scan {
            input,
            file,
            sanitize,
            format,
        } => scan_command(input, file, sanitize, &format),
        Commands::Validate {
            field,
            value,
            format,
        } => validate_command(&field, &value, &format),
        Commands::Password { value, format } => password_command(&value, &format),
        Commands::Headers { names, format } => headers_command(&names, &format),
    }
}

fn scan_command(
    input: Option<String>,
    file: Option<PathBuf>,
    sanitize: bool,
    format: &str,
) -> Result<()> {
    let raw = match (input, file) {
        (Some(s), _) => s,
        (None, Some(path)) => fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?,
        (None, None) => anyhow::bail!("Provide an input string or --file"),
    };

    let subject = if sanitize {
        sanitize_input(Some(&raw))
    } else {
        raw
    };

    let xss = detect_xss(Some(&subject));
    let sql = detect_sql_injection(Some(&subject));
    let found = xss.has_threat || sql.has_threat;

    if format == "json" {
        let output = json!({
            "xss": xss,
            "sql_injection": sql,
            "has_threat": found,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report_human("XSS", &xss);
        print_report_human("SQL injection", &sql);
        if found {
            println!("{}", "Threat patterns detected.".red().bold());
        } else {
            println!("{}", "No known threat patterns found.".green().bold());
        }
    }

    // Exit code 1 when any pattern matched, 0 otherwise
    std::process::exit(if found { 1 } else { 0 });
}

fn print_report_human(label: &str, report: &ThreatReport) {
    if report.has_threat {
        println!("{} {}:", "[THREAT]".red().bold(), label);
        for category in &report.threats {
            println!("  → {}", category);
        }
    } else {
        println!("{} {}: clean", "[OK]".green(), label);
    }
}

fn validate_command(field: &str, value: &str, format: &str) -> Result<()> {
    let result = run_field_validator(field, value)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid {
        println!("{} {} is valid", "[OK]".green().bold(), field);
    } else {
        println!(
            "{} {}",
            "[INVALID]".red().bold(),
            result.error.as_deref().unwrap_or_default()
        );
    }

    std::process::exit(if result.is_valid { 0 } else { 1 });
}

fn run_field_validator(field: &str, value: &str) -> Result<ValidationResult> {
    let value = Some(value);
    let result = match field {
        "name" => validate_name(value),
        "email" => validate_email(value),
        "phone" => validate_phone(value),
        "message" => validate_message(value),
        "iban" => validate_iban(value),
        "sinpe" => validate_sinpe(value),
        "url" => validate_url(value),
        "time" => validate_time_format(value),
        "time-range" => validate_time_range(value),
        other => anyhow::bail!(
            "Unknown field type '{}'. Expected one of: name, email, phone, message, \
             iban, sinpe, url, time, time-range",
            other
        ),
    };
    Ok(result)
}

fn password_command(value: &str, format: &str) -> Result<()> {
    let score = validate_password_strength(Some(value));

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        let verdict = if score.is_strong {
            "strong".green().bold()
        } else {
            "weak".red().bold()
        };
        println!("Password is {} (score {}/6)", verdict, score.score);
        for error in &score.errors {
            println!("  → {}", error);
        }
    }

    std::process::exit(if score.is_strong { 0 } else { 1 });
}

fn headers_command(names: &[String], format: &str) -> Result<()> {
    let audit = audit_security_headers(names);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&audit)?);
    } else if audit.is_secure {
        println!("{}", "All required security headers present.".green().bold());
    } else {
        println!("{}", "Missing security headers:".yellow().bold());
        for header in &audit.missing_headers {
            println!("  → {}", header);
        }
    }

    std::process::exit(if audit.is_secure { 0 } else { 1 });
}
