use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use regdecode_core::{
    ByteOrder, DEFAULT_GENERATED_AT, InputSpec, PayloadInput, Report, ReportError, decode_report,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("REGDECODE_BUILD_COMMIT"),
    " ",
    env!("REGDECODE_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "regdecode")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for field-bus payload buffers (registers / coils / raw bytes).",
    long_about = None,
    after_help = "Examples:\n  regdecode payload decode input.json -o report.json\n  regdecode payload decode --registers 0x0102,0x0304 --layout 16bit_uint,16bit_uint --stdout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on payload buffers.
    Payload {
        #[command(subcommand)]
        command: PayloadCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PayloadCommands {
    /// Decode a payload per a field layout and generate a versioned JSON report.
    #[command(
        after_help = "Examples:\n  regdecode payload decode input.json -o report.json\n  regdecode payload decode --hex 0102deadbeef --layout 16bit_uint,32bit_float --stdout\n  regdecode payload decode --coils 1,0,1,0 --layout bits --stdout"
    )]
    Decode {
        /// Path to a JSON input spec ("byte_order", "payload", "layout")
        input: Option<PathBuf>,

        /// Inline hex payload (whitespace tolerated)
        #[arg(long, conflicts_with_all = ["registers", "coils"])]
        hex: Option<String>,

        /// Inline register words, comma separated (decimal or 0x-prefixed)
        #[arg(long, conflicts_with = "coils")]
        registers: Option<String>,

        /// Inline coil states, comma separated (1/0, true/false, on/off)
        #[arg(long)]
        coils: Option<String>,

        /// Field layout for inline payloads, comma separated catalogue names
        #[arg(long, value_delimiter = ',')]
        layout: Vec<String>,

        /// Byte order for inline payloads
        #[arg(long, value_enum, default_value = "big")]
        byte_order: OrderArg,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// List decoded fields after the report is produced
        #[arg(long)]
        list_fields: bool,

        /// Exit with a non-zero code if trailing bytes remain undecoded
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Big,
    Little,
}

impl From<OrderArg> for ByteOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Big => ByteOrder::Big,
            OrderArg::Little => ByteOrder::Little,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Payload { command } => match command {
            PayloadCommands::Decode {
                input,
                hex,
                registers,
                coils,
                layout,
                byte_order,
                report,
                stdout,
                pretty,
                compact,
                quiet,
                list_fields,
                strict,
            } => cmd_payload_decode(
                input,
                hex,
                registers,
                coils,
                layout,
                byte_order,
                report,
                stdout,
                pretty,
                compact,
                quiet,
                list_fields,
                strict,
            ),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_payload_decode(
    input: Option<PathBuf>,
    hex: Option<String>,
    registers: Option<String>,
    coils: Option<String>,
    layout: Vec<String>,
    byte_order: OrderArg,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    list_fields: bool,
    strict: bool,
) -> Result<(), CliError> {
    let spec = build_spec(input, hex, registers, coils, layout, byte_order)?;
    let mut rep = decode_report(&spec)
        .map_err(|err| CliError::new(format!("decode failed: {}", err), decode_hint(&err)))?;
    rep.generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string());

    let json = serialize_report(&rep, pretty, compact)?;

    if stdout {
        print!("{}", json);
        if list_fields && !quiet {
            print_fields(&rep);
        }
        return strict_gate(&rep, strict);
    }

    let report = report.expect("report required when not using stdout");
    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if list_fields && !quiet {
        print_fields(&rep);
    }
    if !quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    strict_gate(&rep, strict)
}

fn build_spec(
    input: Option<PathBuf>,
    hex: Option<String>,
    registers: Option<String>,
    coils: Option<String>,
    layout: Vec<String>,
    byte_order: OrderArg,
) -> Result<InputSpec, CliError> {
    let inline = hex.is_some() || registers.is_some() || coils.is_some();
    if let Some(path) = input {
        if inline || !layout.is_empty() {
            return Err(CliError::new(
                "cannot combine an input spec file with inline payload flags",
                Some(
                    "pass either a .json spec or --hex/--registers/--coils with --layout"
                        .to_string(),
                ),
            ));
        }
        validate_input_file(&path)?;
        return InputSpec::load(&path).map_err(|err| {
            CliError::new(
                format!("failed to load {}: {}", path.display(), err),
                Some("check the input spec JSON".to_string()),
            )
        });
    }

    let payload = if let Some(text) = hex {
        PayloadInput::Hex(text)
    } else if let Some(text) = registers {
        PayloadInput::Registers(parse_registers(&text)?)
    } else if let Some(text) = coils {
        PayloadInput::Coils(parse_coils(&text)?)
    } else {
        return Err(CliError::new(
            "missing input",
            Some("pass a .json input spec or one of --hex/--registers/--coils".to_string()),
        ));
    };

    if layout.is_empty() {
        return Err(CliError::new(
            "missing field layout",
            Some("use --layout 16bit_uint,32bit_float".to_string()),
        ));
    }

    Ok(InputSpec {
        byte_order: byte_order.into(),
        payload,
        layout,
    })
}

fn parse_registers(text: &str) -> Result<Vec<u16>, CliError> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let parsed = match part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
                Some(digits) => u16::from_str_radix(digits, 16),
                None => part.parse::<u16>(),
            };
            parsed.map_err(|_| {
                CliError::new(
                    format!("invalid register value '{}'", part),
                    Some("use decimal or 0x-prefixed 16-bit values".to_string()),
                )
            })
        })
        .collect()
}

fn parse_coils(text: &str) -> Result<Vec<bool>, CliError> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part {
            "1" | "true" | "on" => Ok(true),
            "0" | "false" | "off" => Ok(false),
            _ => Err(CliError::new(
                format!("invalid coil value '{}'", part),
                Some("use 1/0, true/false or on/off".to_string()),
            )),
        })
        .collect()
}

fn decode_hint(err: &ReportError) -> Option<String> {
    match err {
        ReportError::Source(_) => Some("check the payload encoding in the input spec".to_string()),
        ReportError::Catalog(_) => {
            Some("check the field layout against the catalogue names".to_string())
        }
    }
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn strict_gate(rep: &Report, strict: bool) -> Result<(), CliError> {
    if strict && rep.trailing_bytes > 0 {
        return Err(CliError::new(
            format!("{} trailing bytes left undecoded", rep.trailing_bytes),
            Some("extend the layout or drop --strict".to_string()),
        ));
    }
    Ok(())
}

fn print_fields(rep: &Report) {
    eprintln!("Decoded fields:");
    for field in &rep.fields {
        let value = serde_json::to_string(&field.value)
            .unwrap_or_else(|_| "<unserializable>".to_string());
        eprintln!("  {} {} = {}", field.index, field.kind, value);
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .json input spec".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "json" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .json input spec".to_string()),
        ));
    }
    Ok(())
}
