use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use clap_complete_nushell::Nushell;
use clap_mangen::Man;
use pretty_string::cli::Args; // Import Args from the library

use std::io::Write;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct XtaskArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate man page and shell completions.
    GenerateDocs,
    /// Run cargo check.
    Check,
    /// Run cargo test.
    Test,
    /// Run cargo clippy.
    Clippy,
    /// Run cargo fmt --check.
    FmtCheck,
}

fn main() -> Result<()> {
    let args = XtaskArgs::parse();

    match args.command {
        Commands::GenerateDocs => generate_docs().context("Failed to generate docs"),
        Commands::Check => run_cargo("check", &["--workspace"]).context("cargo check failed"),
        Commands::Test => run_cargo("test", &["--workspace"]).context("cargo test failed"),
        Commands::Clippy => run_cargo("clippy", &["--workspace", "--", "-D", "warnings"])
            .context("cargo clippy failed"),
        Commands::FmtCheck => run_cargo("fmt", &["--", "--check"]).context("cargo fmt failed"),
    }
}

fn run_cargo(command: &str, args: &[&str]) -> Result<()> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let mut cmd = Command::new(cargo);
    cmd.arg(command);
    cmd.args(args);
    // Run in the workspace root
    cmd.current_dir(project_root()?);

    let status = cmd
        .status()
        .with_context(|| format!("Failed to execute cargo {command}"))?;

    if !status.success() {
        anyhow::bail!("cargo {command} command failed");
    }
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .context("xtask manifest directory has no parent")
}

fn generate_docs() -> Result<()> {
    let docs_dir = project_root()?.join("docs");
    let man_dir = docs_dir.join("man");
    let completions_dir = docs_dir.join("completions");

    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;
    fs::create_dir_all(&completions_dir).context("Failed to create completions directory")?;

    let cmd = Args::command();
    let bin_name = cmd.get_name().to_string();

    // --- Generate Man Page ---
    let man_path = man_dir.join(format!("{bin_name}.1"));
    println!("Generating man page: {man_path:?}");
    generate_man_page(&cmd, &man_path)?;

    // --- Generate Shell Completions ---
    generate_completions(&cmd, &completions_dir)?;

    println!(
        "Successfully generated man page and completions in: {}",
        docs_dir.display()
    );
    Ok(())
}

// --- Man Page Content Constants ---
// Note: Using roff formatting. \fB...\fR = bold, \fI...\fR = italic, \- = hyphen, \(bu = bullet

const MAN_DURATIONS: &str = r#"
Durations are shown in the coarsest unit that keeps three or four significant digits.
All rounding is half away from zero, done on an integer nanosecond count.
.IP \(bu 4
Below 10ms: milliseconds with up to two decimals (\fB0.99 millis\fR, \fB9.99 millis\fR). The word is \fBmilli\fR only for magnitudes in [0.995ms, 1.005ms), which display as exactly \fB1\fR.
.IP \(bu 4
10ms to 100ms: one decimal (\fB99.9 millis\fR). 100ms to 1s: whole milliseconds.
.IP \(bu 4
1s to 10s: seconds with up to two decimals. The word is \fBsecond\fR only below 1.004s.
.IP \(bu 4
10s to 1min: seconds with one decimal (\fB59.9 seconds\fR).
.IP \(bu 4
1min to 1h: \fBM minutes, S seconds\fR, truncated; the seconds clause is omitted when zero.
.IP \(bu 4
1h and above: \fBH hours, M minutes\fR, truncated; the minutes clause is omitted when zero.
.PP
Trailing fractional zeros are never shown. Negative durations carry a leading \fB\-\fR unless they round to zero.
"#;

const MAN_COLLECTIONS: &str = r#"
Items are joined as \fIbefore\fR, a space, the items separated by \fIseparator\fR, a space, then \fIafter\fR.
An empty collection prints \fIbefore\fR directly followed by \fIafter\fR.
The separator is inserted verbatim; include spaces in it if you want them.
.IP \(bu 4
Sequences default to \fB[\fR, \fB, \fR, \fB]\fR.
.IP \(bu 4
Sets (\fB\-\-set\fR) are deduplicated, sorted and default to \fB{\fR, \fB, \fR, \fB}\fR.
.IP \(bu 4
Mappings print each pair as \fIkey\fR\fIjoiner\fR\fIvalue\fR, defaulting to \fB{ k: v, k2: v2 }\fR.
"#;

const MAN_EXAMPLES: &str = r#"
.PP
.B Durations:
.IP
.nf
{bin_name} duration 0.995            # 1 milli
{bin_name} duration \-1.5 \-\-unit s  # \-1.5 seconds
{bin_name} duration 65 \-\-unit min   # 1 hour, 5 minutes
.fi
.PP
.B Reference table:
.IP
.nf
{bin_name} demo
.fi
.PP
.B Collections:
.IP
.nf
{bin_name} list 1 2 3                    # [ 1, 2, 3 ]
{bin_name} list \-\-set 3 1 3             # { 1, 3 }
{bin_name} map 1=one 2=two               # { 1: one, 2: two }
{bin_name} \-\-json map a=1 \-\-joiner =    # {"input":"a=1","formatted":"{ a=1 }"}
.fi
"#;

const MAN_LOGGING: &str = r#"
Logs go to standard error through the \fBtracing\fR framework; results go to standard output.
The default filter is \fBpretty_string=info\fR, raised to \fBdebug\fR by \fB\-\-verbose\fR.
\fB\-\-log\-filter\fR or \fBRUST_LOG\fR override both.
.IP "\fBRUST_LOG=pretty_string=trace\fR" 4
Also show unit selection and collection dispatch decisions.
.IP "\fBRUST_LOG=warn\fR" 4
Silence the startup and configuration lines.
"#;

const MAN_EXIT_STATUS: &str = r#"
.IP 0 4
Success.
.IP 2 4
Invalid input, such as a duration amount that cannot be represented as a signed nanosecond count, or a malformed command line.
"#;

const MAN_ENVIRONMENT: &str = r#"
.TP
.B RUST_LOG
Controls the logging verbosity and filtering. Uses the \fBtracing_subscriber::EnvFilter\fR format.
"#;

const MAN_SEE_ALSO: &str = r#"
Project Repository & README: https://github.com/sinity/pretty-string
"#;

/// Generates the man page with custom sections.
fn generate_man_page(cmd: &clap::Command, path: &Path) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    // Format date like 'Month Day, Year' e.g., "July 18, 2024"
    let date = chrono::Local::now().format("%B %d, %Y").to_string();
    let app_name_uppercase = cmd.get_name().to_uppercase();
    let bin_name = cmd.get_name();

    let mut buffer: Vec<u8> = Vec::new();

    writeln!(buffer, r#".TH "{app_name_uppercase}" 1 "{date}" "{version}" "User Commands""#)?;
    Man::new(cmd.clone()).render(&mut buffer)?;

    // --- Append Custom Sections ---
    let custom_sections = [
        ("DURATIONS", MAN_DURATIONS),
        ("COLLECTIONS", MAN_COLLECTIONS),
        ("EXAMPLES", MAN_EXAMPLES),
        ("LOGGING", MAN_LOGGING),
        ("EXIT STATUS", MAN_EXIT_STATUS),
        ("ENVIRONMENT", MAN_ENVIRONMENT),
        ("SEE ALSO", MAN_SEE_ALSO),
    ];

    for (title, content_template) in custom_sections {
        writeln!(buffer, ".SH {title}")?;
        let formatted_content = content_template.replace("{bin_name}", bin_name);
        writeln!(buffer, "{formatted_content}")?;
    }

    fs::write(path, buffer).with_context(|| format!("Failed to write man page to {path:?}"))?;
    Ok(())
}

/// Generates shell completion files.
fn generate_completions(cmd: &clap::Command, completions_dir: &Path) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    let shells = [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ];

    for shell in shells {
        let ext = match shell {
            Shell::Bash => "bash",
            Shell::Elvish => "elv",
            Shell::Fish => "fish",
            Shell::PowerShell => "ps1",
            Shell::Zsh => "zsh",
            _ => continue,
        };
        let completions_path = completions_dir.join(format!("{bin_name}.{ext}"));
        println!("Generating completion file: {completions_path:?}");
        let mut file = fs::File::create(&completions_path)
            .with_context(|| format!("Failed to create completion file: {completions_path:?}"))?;
        generate(shell, &mut cmd.clone(), bin_name.clone(), &mut file);
    }

    // --- Generate Nushell Completion ---
    let nu_path = completions_dir.join(format!("{bin_name}.nu"));
    println!("Generating Nushell completion file: {nu_path:?}");
    let mut nu_file = fs::File::create(&nu_path)
        .with_context(|| format!("Failed to create Nushell completion file: {nu_path:?}"))?;
    generate(Nushell, &mut cmd.clone(), bin_name, &mut nu_file);

    Ok(())
}
