//! Texview CLI - LaTeX-subset to HTML preview renderer

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use texview::utils::diagnostics::{diagnostics_to_json, format_diagnostics, RenderDiagnostic};
#[cfg(feature = "cli")]
use texview::{HtmlConverter, L2HOptions};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tex2html")]
#[command(version)]
#[command(about = "Texview - LaTeX-subset to HTML preview renderer", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Emit a bare fragment without the titled preview container
    #[arg(long)]
    fragment: bool,

    /// Extra class hint for the outer preview container
    #[arg(long)]
    container_class: Option<String>,

    /// Skip the output sanitizer (raw pipeline output, for debugging only)
    #[arg(long)]
    no_sanitize: bool,

    /// Check mode - report conversion diagnostics without writing output
    #[arg(long)]
    check: bool,

    /// Emit diagnostics as JSON (with --check or --verbose)
    #[arg(long)]
    json: bool,

    /// Print diagnostics to stderr alongside the output
    #[arg(short, long)]
    verbose: bool,

    /// Use colored output for diagnostics
    #[arg(long, default_value_t = true)]
    color: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = L2HOptions {
        container_class: cli.container_class.clone(),
        sanitize: !cli.no_sanitize,
        wrap_document: !cli.fragment,
    };
    let mut converter = HtmlConverter::with_options(options);
    let result = converter.convert_document_with_diagnostics(&input);

    let diagnostics: Vec<RenderDiagnostic> = result
        .warnings
        .iter()
        .cloned()
        .map(RenderDiagnostic::from)
        .collect();

    // Check mode: report and exit without writing the HTML
    if cli.check {
        if cli.json {
            let json = diagnostics_to_json(&diagnostics)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            println!("{}", json);
        } else if diagnostics.is_empty() {
            println!("No issues found.");
        } else {
            print!("{}", format_diagnostics(&diagnostics, cli.color));
        }
        return Ok(());
    }

    if cli.verbose && !diagnostics.is_empty() {
        if cli.json {
            let json = diagnostics_to_json(&diagnostics)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            eprintln!("{}", json);
        } else {
            eprint!("{}", format_diagnostics(&diagnostics, cli.color));
        }
    }

    // Write output
    match cli.output {
        Some(ref path) => fs::write(path, &result.output)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(result.output.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texview --features cli");
    eprintln!("  tex2html [OPTIONS] [INPUT_FILE]");
}
