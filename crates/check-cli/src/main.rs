//! check-print - Print a bank check to a single-page PDF
//!
//! Fields come from command line flags, optionally layered over a JSON form
//! file. The layout can be replaced with a JSON layout file.

use anyhow::{Context, Result};
use check::{CheckError, CheckForm, CheckLayout, CheckRenderer, INVALID_AMOUNT_MESSAGE};
use clap::{ArgAction, Parser};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Print a bank check to a single-page PDF.
#[derive(Parser, Debug)]
#[command(name = "check-print")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Date printed on the check (default: today, dd/mm/yyyy)
    #[arg(long)]
    date: Option<String>,

    /// Name of the payee
    #[arg(long)]
    payee: Option<String>,

    /// Amount, e.g. 123.45
    #[arg(long)]
    amount: Option<String>,

    /// Memo line
    #[arg(long)]
    memo: Option<String>,

    /// Bank name
    #[arg(long)]
    bank: Option<String>,

    /// Routing number
    #[arg(long)]
    routing: Option<String>,

    /// Account number
    #[arg(long)]
    account: Option<String>,

    /// Check number
    #[arg(long = "check-number")]
    check_number: Option<String>,

    /// Signature image (PNG, JPEG or BMP)
    #[arg(long)]
    signature: Option<String>,

    /// JSON file with form values; flags take precedence
    #[arg(long, value_name = "JSON")]
    form: Option<PathBuf>,

    /// JSON file with a custom layout
    #[arg(long, value_name = "JSON")]
    layout: Option<PathBuf>,

    /// Output PDF path (".pdf" is added when there is no extension)
    #[arg(short, long, required_unless_present = "dump_layout")]
    output: Option<PathBuf>,

    /// Print the effective layout as JSON and exit
    #[arg(long = "dump-layout", action = ArgAction::SetTrue)]
    dump_layout: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CheckError>() {
                Some(CheckError::InvalidAmount(_)) => eprintln!("{INVALID_AMOUNT_MESSAGE}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> Result<()> {
    let layout = load_layout(args.layout.as_deref())?;

    if args.dump_layout {
        println!("{}", layout.to_json()?);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .map(with_pdf_extension)
        .context("No output path given")?;

    let record = collect_form(args)?.into_record()?;
    info!("Printing check for {:?}, amount {}", record.payee, record.amount);

    CheckRenderer::new(layout)
        .render(&record, &output)
        .with_context(|| format!("Failed to save check to {}", output.display()))?;

    println!("Saved check to {}", output.display());
    Ok(())
}

fn load_layout(path: Option<&Path>) -> Result<CheckLayout> {
    match path {
        Some(path) => {
            debug!("Loading layout from {}", path.display());
            CheckLayout::from_file(path)
                .with_context(|| format!("Failed to load layout {}", path.display()))
        }
        None => Ok(CheckLayout::default()),
    }
}

/// Form values from the form file (if any) overlaid with the flags
fn collect_form(args: &Args) -> Result<CheckForm> {
    let base = match &args.form {
        Some(path) => {
            debug!("Loading form from {}", path.display());
            CheckForm::from_file(path)
                .with_context(|| format!("Failed to load form {}", path.display()))?
        }
        None => CheckForm::default(),
    };

    let flags = CheckForm {
        date: args.date.clone(),
        payee: args.payee.clone(),
        amount: args.amount.clone(),
        memo: args.memo.clone(),
        bank: args.bank.clone(),
        routing_number: args.routing.clone(),
        account_number: args.account.clone(),
        check_number: args.check_number.clone(),
        signature_path: args.signature.clone(),
    };

    let mut form = base.merge(flags);
    if form.date.as_deref().map_or(true, str::is_empty) {
        form.date = Some(today());
    }

    Ok(form)
}

fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

fn with_pdf_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("check-print").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_output_is_required() {
        assert!(Args::try_parse_from(["check-print", "--amount", "1"]).is_err());
        assert!(Args::try_parse_from(["check-print", "--dump-layout"]).is_ok());
    }

    #[test]
    fn test_with_pdf_extension() {
        assert_eq!(with_pdf_extension("check".into()), PathBuf::from("check.pdf"));
        assert_eq!(
            with_pdf_extension("out/check.pdf".into()),
            PathBuf::from("out/check.pdf")
        );
        assert_eq!(
            with_pdf_extension("out/check.PDF".into()),
            PathBuf::from("out/check.PDF")
        );
    }

    #[test]
    fn test_flags_build_form() {
        let args = parse(&[
            "--date",
            "02/03/2025",
            "--payee",
            "Jane",
            "--amount",
            "12.5",
            "--check-number",
            "77",
            "-o",
            "out",
        ]);

        let form = collect_form(&args).unwrap();
        assert_eq!(form.date.as_deref(), Some("02/03/2025"));
        assert_eq!(form.payee.as_deref(), Some("Jane"));
        assert_eq!(form.amount.as_deref(), Some("12.5"));
        assert_eq!(form.check_number.as_deref(), Some("77"));
        assert_eq!(form.memo, None);
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let args = parse(&["--amount", "1", "-o", "out"]);
        let form = collect_form(&args).unwrap();
        assert_eq!(form.date, Some(today()));
    }

    #[test]
    fn test_flags_override_form_file() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = dir.path().join("form.json");
        std::fs::write(
            &form_path,
            r#"{ "payee": "From File", "amount": "9.99", "memo": "Kept", "date": "01/01/2025" }"#,
        )
        .unwrap();

        let form_arg = form_path.to_str().unwrap();
        let args = parse(&["--form", form_arg, "--payee", "From Flag", "-o", "out"]);

        let form = collect_form(&args).unwrap();
        assert_eq!(form.payee.as_deref(), Some("From Flag"));
        assert_eq!(form.amount.as_deref(), Some("9.99"));
        assert_eq!(form.memo.as_deref(), Some("Kept"));
        assert_eq!(form.date.as_deref(), Some("01/01/2025"));
    }

    #[test]
    fn test_missing_form_file_is_an_error() {
        let args = parse(&["--form", "/no/such/form.json", "-o", "out"]);
        assert!(collect_form(&args).is_err());
    }

    #[test]
    fn test_run_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("check");
        let output_arg = output.to_str().unwrap();

        let args = parse(&["--payee", "Jane", "--amount", "100", "-o", output_arg]);
        run(&args).unwrap();

        let bytes = std::fs::read(dir.path().join("check.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_run_rejects_invalid_amount() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("check.pdf");
        let output_arg = output.to_str().unwrap();

        let args = parse(&["--amount", "12.3.4", "-o", output_arg]);
        let err = run(&args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CheckError>(),
            Some(CheckError::InvalidAmount(_))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("check.pdf");
        let output_arg = output.to_str().unwrap();

        let args = parse(&["--amount", "5", "-o", output_arg]);
        let err = run(&args).unwrap_err();

        assert!(format!("{err:#}").starts_with("Failed to save check to"));
        assert!(!output.exists());
    }

    #[test]
    fn test_load_custom_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "micrSeparator": " / " }"#).unwrap();

        let layout = load_layout(Some(path.as_path())).unwrap();
        assert_eq!(layout.micr_separator, " / ");
        assert_eq!(load_layout(None).unwrap(), CheckLayout::default());
    }
}
