//! CLI tool for exercising the card entry engine.
//!
//! # Usage
//!
//! ```bash
//! # Classify a (partial) card number
//! ccentry classify 2720
//!
//! # Format a card number and render its preview
//! ccentry format 378282246310005
//!
//! # Validate an expiry date
//! ccentry expiry 12/30
//!
//! # Validate a whole form
//! ccentry validate --number "4111 1111 1111 1111" --expiry 12/30 --cvc 123 --name "Jane Doe"
//!
//! # Replay keystrokes into a field (<bs>, <del>, <left>, <right>, <home>, <end>)
//! ccentry type card-number "41111<bs><home><right>9"
//!
//! # Check the Luhn checksum only
//! ccentry luhn 4111111111111111
//! ```
//!
//! Set `RUST_LOG=cc_entry=trace` to see the engine's events on stderr.

use std::path::PathBuf;
use std::process;

use cc_entry::replay::{Key, TypingExt};
use cc_entry::{classify, expiry, format, luhn, CardEntry, CardPreview, EntryConfig, Field};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ccentry")]
#[command(author, version, about = "Keystroke-level credit card entry formatting and validation")]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    /// JSON file with presentation settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the network of a (partial) card number
    Classify {
        /// Card number or prefix
        card_number: String,
    },

    /// Format a card number and render its preview
    Format {
        /// Card number to format
        card_number: String,
    },

    /// Validate an expiry date (MM/YY or MM/YYYY)
    Expiry {
        /// Expiry date
        date: String,
    },

    /// Validate all fields of a card form
    Validate {
        /// Card number
        #[arg(long, default_value = "")]
        number: String,

        /// Expiry date
        #[arg(long, default_value = "")]
        expiry: String,

        /// Security code
        #[arg(long, default_value = "")]
        cvc: String,

        /// Cardholder name
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Replay keystrokes into a field and show each step
    Type {
        /// Field to type into
        field: FieldArg,

        /// Keys to press; `<bs>`, `<del>`, `<left>`, `<right>`, `<home>`
        /// and `<end>` name special keys
        keys: String,
    },

    /// Check if a card passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    CardNumber,
    Expiry,
    Cvc,
    Name,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::CardNumber => Field::CardNumber,
            FieldArg::Expiry => Field::Expiry,
            FieldArg::Cvc => Field::Cvc,
            FieldArg::Name => Field::Name,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Classify { card_number } => cmd_classify(&card_number, cli.output),
        Commands::Format { card_number } => cmd_format(&card_number, &config, cli.output),
        Commands::Expiry { date } => cmd_expiry(&date, cli.output),
        Commands::Validate {
            number,
            expiry,
            cvc,
            name,
        } => cmd_validate(config, &number, &expiry, &cvc, &name, cli.output),
        Commands::Type { field, keys } => cmd_type(config, field.into(), &keys, cli.output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
    }
}

fn load_config(path: Option<&PathBuf>) -> EntryConfig {
    let Some(path) = path else {
        return EntryConfig::default();
    };

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", path.display(), e);
            process::exit(2);
        }
    };

    match EntryConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid config {}: {}", path.display(), e);
            process::exit(2);
        }
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn cmd_classify(card_number: &str, output: OutputFormat) {
    let network = classify(card_number);

    match output {
        OutputFormat::Text => {
            println!("Network: {}", network.name());
            println!("Icon: {}", network.icon());
            println!("Label: {}", network.preview_label());
            println!("PAN Length: {}", network.pan_length());
            println!("CVC Length: {}", network.cvc_length());
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "network": network,
            "icon": network.icon(),
            "label": network.preview_label(),
            "pan_length": network.pan_length(),
            "cvc_length": network.cvc_length(),
        })),
    }
}

fn cmd_format(card_number: &str, config: &EntryConfig, output: OutputFormat) {
    let formatted = format::format_card_number(card_number);
    let preview = CardPreview::with_config(card_number, "", "", config);

    match output {
        OutputFormat::Text => {
            println!("Formatted: {}", formatted);
            println!("Preview: {}", preview.card_number);
            println!("Network: {}", preview.network_label);
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "formatted": formatted,
            "preview": preview,
        })),
    }
}

fn cmd_expiry(date: &str, output: OutputFormat) {
    let today = expiry::current_date();
    let result = expiry::validate_expiry_on(date, today);

    match (&result, output) {
        (Ok(exp), OutputFormat::Text) => {
            println!("Valid: yes");
            println!("Month: {:02}", exp.month());
            println!("Year: {}", exp.year());
            println!("Formatted: {}", exp.format_short());
            println!("Months Until Expiry: {}", exp.months_until_expiry_on(today));
        }
        (Ok(exp), OutputFormat::Json) => print_json(&serde_json::json!({
            "valid": true,
            "month": exp.month(),
            "year": exp.year(),
            "formatted": exp.format_short(),
        })),
        (Err(e), OutputFormat::Text) => {
            println!("Valid: no");
            println!("Error: {}", e);
        }
        (Err(e), OutputFormat::Json) => print_json(&serde_json::json!({
            "valid": false,
            "error": e.to_string(),
        })),
    }

    process::exit(if result.is_ok() { 0 } else { 1 });
}

fn cmd_validate(
    config: EntryConfig,
    number: &str,
    expiry: &str,
    cvc: &str,
    name: &str,
    output: OutputFormat,
) {
    let mut entry = CardEntry::with_config(config);
    entry.edit_card_number(number, number.chars().count());
    entry.edit_expiry(expiry, expiry.chars().count());
    entry.edit_cvc(cvc);
    entry.edit_name(name);
    let state = entry.validate_all().clone();

    match output {
        OutputFormat::Text => {
            for field in Field::ALL {
                let mark = if state.get(field) { "ok" } else { "invalid" };
                println!("{:<12} {}", field.name(), mark);
            }
            if state.valid {
                println!("Valid: yes");
            } else {
                println!("Valid: no ({})", state.message);
            }
        }
        OutputFormat::Json => print_json(&state),
    }

    process::exit(if state.valid { 0 } else { 1 });
}

/// Splits `<name>` tokens from plain characters.
fn parse_keys(input: &str) -> Result<Vec<Key>, String> {
    let mut keys = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            if let Some(end) = rest.find('>') {
                let name = &rest[..=end];
                let key = Key::from_name(name).ok_or_else(|| format!("unknown key {}", name))?;
                keys.push(key);
                rest = &rest[end + 1..];
                continue;
            }
        }
        keys.push(Key::Char(c));
        rest = &rest[c.len_utf8()..];
    }

    Ok(keys)
}

fn cmd_type(config: EntryConfig, field: Field, input: &str, output: OutputFormat) {
    let keys = match parse_keys(input) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let mut entry = CardEntry::with_config(config);
    let steps: Vec<_> = keys.into_iter().type_into(&mut entry, field).collect();

    match output {
        OutputFormat::Text => {
            for step in &steps {
                let (before, after) = step
                    .text
                    .char_indices()
                    .nth(step.cursor)
                    .map_or((step.text.as_str(), ""), |(i, _)| step.text.split_at(i));
                println!("{:<10} {}|{}", format!("{:?}", step.key), before, after);
            }
            println!("Network: {}", entry.network());
        }
        OutputFormat::Json => {
            let steps: Vec<_> = steps
                .iter()
                .map(|step| serde_json::json!({ "text": step.text, "cursor": step.cursor }))
                .collect();
            print_json(&serde_json::json!({
                "steps": steps,
                "network": entry.network(),
                "preview": entry.preview(),
            }));
        }
    }
}

fn cmd_luhn(card_number: &str) {
    if luhn::is_valid_str(card_number) {
        println!("Luhn check: PASS");
        process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        process::exit(1);
    }
}
