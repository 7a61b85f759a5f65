use anyhow::Context;
use clap::Parser;
use gpa_ledger::config::Command;
use gpa_ledger::core::report::render_grade_table;
use gpa_ledger::utils::error::{ErrorSeverity, LedgerError};
use gpa_ledger::utils::{logger, validation::Validate};
use gpa_ledger::{Calculator, CliConfig, ConfigProvider, CourseLedger, LocalStorage, Session};
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };
    if let Err(e) = settings.validate() {
        exit_with(e);
    }

    match &cli.command {
        Command::Session => {
            let ledger = CourseLedger::from_config(&settings);
            let stdin = std::io::stdin();
            let mut session =
                Session::new(ledger, settings.precision()).with_prompt(stdin.is_terminal());
            let mut stdout = std::io::stdout().lock();
            session
                .run(stdin.lock(), &mut stdout)
                .context("interactive session failed")?;
        }
        Command::Calc {
            input,
            format,
            export,
        } => {
            let calculator = Calculator::new(LocalStorage::default(), settings);
            let mut stdout = std::io::stdout().lock();
            match calculator.run(input, *format, export.as_deref(), &mut stdout) {
                Ok((ledger, report)) => {
                    tracing::info!(
                        "✅ Calculated GPA over {} course(s) from {}",
                        ledger.len(),
                        input
                    );
                    if !report.is_clean() {
                        tracing::warn!("{} row(s) were skipped", report.rejected.len());
                    }
                }
                Err(e) => exit_with(e),
            }
        }
        Command::Grades => {
            print!("{}", render_grade_table(&settings.grade_table()));
        }
    }

    Ok(())
}

fn exit_with(e: LedgerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    };
    std::process::exit(exit_code);
}
