//! Salon Desk CLI
//!
//! Terminal host for the front-desk widgets:
//! - Show today's schedule and one appointment's detail
//! - Fill in and submit the customer intake form
//! - Drive both widgets interactively from stdin
//! - Generate a default config file

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::cell::RefCell;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use salon_desk::config::{generate_default_config, Config, LoggingConfig};
use salon_desk::{
    appointments_on, load_schedule, render_html, render_text, AppointmentRecord, FieldValues,
    FormMsg, Host, IntakeForm, Node, ScheduleMsg, ScheduleSelector, TimeFormatter,
};

#[derive(Parser)]
#[command(name = "salon-desk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Front-desk schedule and customer intake for a salon")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// View output format (default: from config)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the day's appointments
    Day {
        /// Schedule file (.json or .csv)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Position of the appointment to show in detail
        #[arg(short, long)]
        select: Option<usize>,
        /// Day to show (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Fill in the customer form and print what gets submitted
    Intake {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        /// Field edits applied after the initial values, as name=value
        #[arg(long = "set", value_name = "NAME=VALUE")]
        edits: Vec<String>,
    },

    /// Drive the schedule and form with commands read from stdin
    Session {
        /// Schedule file (.json or .csv)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print or write a default config file
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

impl OutputFormat {
    fn from_config(value: &str) -> Self {
        match value {
            "html" => Self::Html,
            "text" => Self::Text,
            other => {
                tracing::warn!("Unknown display format {:?}, using text", other);
                Self::Text
            }
        }
    }

    fn render<M>(self, node: &Node<M>) -> String {
        match self {
            Self::Text => render_text(node),
            Self::Html => {
                let mut html = render_html(node);
                html.push('\n');
                html
            }
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("salon_desk={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    // Views go to stdout, logs to stderr
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    let format = cli
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.display.format));
    let formatter = TimeFormatter::from_offset_minutes(config.display.utc_offset_minutes);

    match cli.command {
        Commands::Day { file, select, date } => {
            let day = load_day(&config, file.as_deref(), date, &formatter)?;
            let mut host = Host::new(ScheduleSelector::with_formatter(day, formatter));
            if let Some(index) = select {
                if host.dispatch(ScheduleMsg::SelectIndex(index)).rejected > 0 {
                    bail!("No appointment at position {} ({} scheduled)", index, host.widget().len());
                }
            }
            print!("{}", format.render(host.view()));
        }

        Commands::Intake {
            first_name,
            last_name,
            phone_number,
            edits,
        } => {
            let values = run_intake(first_name, last_name, phone_number, &edits)?;
            println!("{}", serde_json::to_string_pretty(&values)?);
        }

        Commands::Session { file } => {
            let day = load_day(&config, file.as_deref(), None, &formatter)?;
            let mut session = Session::new(day, formatter, format);

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match session.execute(&line?)? {
                    Some(output) => print!("{}", output),
                    None => break,
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Appointments to show: from the given file or the configured source,
/// narrowed to one day when asked to
fn load_day(
    config: &Config,
    file: Option<&Path>,
    date: Option<NaiveDate>,
    formatter: &TimeFormatter,
) -> anyhow::Result<Vec<AppointmentRecord>> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => match &config.schedule.source {
            Some(source) => PathBuf::from(source),
            None => {
                tracing::info!("No schedule source configured, showing an empty day");
                return Ok(Vec::new());
            }
        },
    };

    let report = load_schedule(&path)?;
    let day = match date {
        Some(date) => appointments_on(&report.records, date, formatter),
        None if config.schedule.today_only => {
            appointments_on(&report.records, formatter.today(), formatter)
        }
        None => {
            let mut all = report.records;
            all.sort_by_key(|appt| appt.starts_at);
            all
        }
    };

    Ok(day)
}

fn parse_edit(edit: &str) -> anyhow::Result<(&str, &str)> {
    match edit.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("Invalid field edit {:?}, expected NAME=VALUE", edit),
    }
}

fn run_intake(
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
    edits: &[String],
) -> anyhow::Result<FieldValues> {
    let submitted = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&submitted);

    let customer = salon_desk::CustomerRecord {
        first_name,
        last_name,
        phone_number,
    };
    let mut form = IntakeForm::from_customer(&customer, move |values: FieldValues| {
        *sink.borrow_mut() = Some(values);
    });

    for edit in edits {
        let (name, value) = parse_edit(edit)?;
        form.update_field(name, value)?;
    }
    form.submit();

    let values = submitted.borrow_mut().take();
    values.context("Form was not submitted")
}

/// Line-driven host for both widgets
struct Session {
    schedule: Host<ScheduleSelector>,
    form: Host<IntakeForm>,
    submitted: Rc<RefCell<Vec<FieldValues>>>,
    format: OutputFormat,
}

const SESSION_HELP: &str = "Commands: select I | set NAME VALUE | submit | show | form | schedule | quit\n";

impl Session {
    fn new(day: Vec<AppointmentRecord>, formatter: TimeFormatter, format: OutputFormat) -> Self {
        let submitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&submitted);
        let form = IntakeForm::new(Vec::<(String, String)>::new(), move |values: FieldValues| {
            sink.borrow_mut().push(values);
        });

        Self {
            schedule: Host::new(ScheduleSelector::with_formatter(day, formatter)),
            form: Host::new(form),
            submitted,
            format,
        }
    }

    /// Run one command. `None` ends the session.
    ///
    /// Only leading whitespace is dropped: `set` passes everything after the
    /// field name through as the value, trailing spaces included.
    fn execute(&mut self, line: &str) -> anyhow::Result<Option<String>> {
        let line = line.trim_start();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        let output = match command.trim_end() {
            "" => String::new(),
            "quit" | "exit" => return Ok(None),
            "select" => match rest.trim().parse::<usize>() {
                Ok(index) => {
                    if self.schedule.dispatch(ScheduleMsg::SelectIndex(index)).rejected > 0 {
                        format!("No appointment at position {}\n", index)
                    } else {
                        self.format.render(self.schedule.view())
                    }
                }
                Err(_) => format!("Invalid position {:?}\n", rest.trim()),
            },
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                let msg = FormMsg::FieldChanged {
                    name: name.to_string(),
                    value: value.to_string(),
                };
                if self.form.dispatch(msg).rejected > 0 {
                    format!("Unknown form field: {}\n", name)
                } else {
                    String::new()
                }
            }
            "submit" => {
                self.form.dispatch(FormMsg::Submit);
                match self.submitted.borrow().last() {
                    Some(values) => format!("{}\n", serde_json::to_string(values)?),
                    None => String::new(),
                }
            }
            "show" => self.format.render(self.schedule.view()),
            "form" => self.format.render(self.form.view()),
            "schedule" => format!(
                "{}\n",
                serde_json::to_string_pretty(&self.schedule.widget().snapshot())?
            ),
            "help" => SESSION_HELP.to_string(),
            other => format!("Unknown command: {}\n{}", other, SESSION_HELP),
        };

        Ok(Some(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};
    use salon_desk::CustomerRecord;

    fn session() -> Session {
        let day = vec![
            AppointmentRecord::new(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap())
                .customer(CustomerRecord::new().first_name("Ashley")),
            AppointmentRecord::new(Utc.with_ymd_and_hms(2026, 10, 16, 13, 0, 0).unwrap())
                .customer(CustomerRecord::new().first_name("Jordan")),
        ];
        let utc = TimeFormatter::fixed(FixedOffset::east_opt(0).unwrap());
        Session::new(day, utc, OutputFormat::Text)
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["salon-desk", "day", "--select", "1", "--format", "html"]);
        assert_eq!(cli.format, Some(OutputFormat::Html));
        assert!(matches!(cli.command, Commands::Day { select: Some(1), .. }));
    }

    #[test]
    fn test_session_select_and_show() {
        let mut session = session();
        let shown = session.execute("show").unwrap().unwrap();
        assert!(shown.contains("Today's appointment at 12:00"));

        let selected = session.execute("select 1").unwrap().unwrap();
        assert!(selected.contains("Jordan"));
        assert!(!selected.contains("Ashley"));

        let rejected = session.execute("select 9").unwrap().unwrap();
        assert_eq!(rejected, "No appointment at position 9\n");
        assert_eq!(session.schedule.widget().selected_index(), Some(1));
    }

    #[test]
    fn test_session_form_round() {
        let mut session = session();
        assert_eq!(session.execute("set firstName Jamie Lee").unwrap(), Some(String::new()));
        assert_eq!(
            session.execute("set email x@y.z").unwrap(),
            Some("Unknown form field: email\n".to_string())
        );

        let submitted = session.execute("submit").unwrap().unwrap();
        assert_eq!(
            submitted,
            "{\"firstName\":\"Jamie Lee\",\"lastName\":\"\",\"phoneNumber\":\"\"}\n"
        );
    }

    #[test]
    fn test_session_set_keeps_value_verbatim() {
        let mut session = session();
        session.execute("  set firstName Ashley ").unwrap();
        session.execute("set lastName   Jones").unwrap();

        let submitted = session.execute("submit").unwrap().unwrap();
        assert_eq!(
            submitted,
            "{\"firstName\":\"Ashley \",\"lastName\":\"  Jones\",\"phoneNumber\":\"\"}\n"
        );
    }

    #[test]
    fn test_session_commands_tolerate_surrounding_whitespace() {
        let mut session = session();
        assert!(session.execute("  show  ").unwrap().unwrap().contains("12:00"));
        assert!(session.execute("select 1 ").unwrap().unwrap().contains("Jordan"));
        assert_eq!(session.execute("quit ").unwrap(), None);
    }

    #[test]
    fn test_session_quit_and_unknown() {
        let mut session = session();
        assert!(session.execute("bogus").unwrap().unwrap().starts_with("Unknown command: bogus"));
        assert_eq!(session.execute("quit").unwrap(), None);
    }

    #[test]
    fn test_run_intake() {
        let values = run_intake(
            Some("Ashley".to_string()),
            None,
            None,
            &["firstName=Jamie".to_string(), "phoneNumber=1112223456".to_string()],
        )
        .unwrap();
        assert_eq!(values.get("firstName"), Some("Jamie"));
        assert_eq!(values.get("lastName"), Some(""));
        assert_eq!(values.get("phoneNumber"), Some("1112223456"));

        assert!(run_intake(None, None, None, &["nope".to_string()]).is_err());
        assert!(run_intake(None, None, None, &["email=x".to_string()]).is_err());
    }
}
