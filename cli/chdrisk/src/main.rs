mod config;

use std::fs;
use std::path::{Path, PathBuf};

use chd_report::bars::TOP_FACTORS;
use chd_report::{
    importance_bars, render_about_text, render_dashboard, render_json_report, render_model_text,
    render_text_report, Branding, DashboardView,
};
use chd_risk::domain::{self, FieldDomain, DEFAULT_SMOKER_CIGS_PER_DAY};
use chd_risk::{
    explain, ArtifactPaths, AssessmentContext, Gender, PatientFeatures, RiskError,
    LOAD_FAILURE_MESSAGE,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::config::{Config, ConfigError, CONFIG_FILE, DEFAULT_CONFIG};

const EXIT_OK: i32 = 0;
const EXIT_INVALID_PATIENT: i32 = 1;
const EXIT_FAILURE: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "chdrisk",
    version,
    about = "10-year coronary heart disease risk assessment",
    long_about = "chdrisk scores a patient's 10-year coronary heart disease (CHD) risk with a\n\
        logistic regression model trained on the Framingham Heart Study cohort.\n\n\
        The result is a probability in percent and a LOW, ELEVATED or HIGH risk tier\n\
        with a recommendation. Reports are printed as text or JSON, or written as a\n\
        self-contained HTML dashboard.\n\n\
        EXAMPLES:\n\
        \n  chdrisk assess --age 62 --smoker --cigs-per-day 20     Score one patient\n\
        \n  chdrisk assess --input patient.json --format json      Score a JSON form\n\
        \n  chdrisk dashboard --age 55 --hypertension -o out.html  Write the dashboard\n\
        \n  chdrisk model                                          Show model performance",
    after_help = "Decision-support tool for education and research. Not for clinical use."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./chdrisk.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Trained model artifact (overrides CHDRISK_MODEL_PATH and the config file)
    #[arg(long, value_name = "FILE", global = true)]
    model: Option<PathBuf>,

    /// Fitted scaler artifact (overrides CHDRISK_SCALER_PATH and the config file)
    #[arg(long, value_name = "FILE", global = true)]
    scaler: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one patient and print the assessment report
    #[command(
        about = "Score one patient and print the assessment report",
        long_about = "Builds the patient's feature vector from the flags (or a JSON form given\n\
            with --input), scales it, runs the model and prints the probability, risk tier\n\
            and recommendation."
    )]
    Assess(AssessArgs),

    /// Write the HTML dashboard
    #[command(about = "Write the self-contained HTML dashboard")]
    Dashboard(DashboardArgs),

    /// Show model performance metrics and the strongest risk factors
    #[command(about = "Show model performance metrics and the strongest risk factors")]
    Model,

    /// Show background on the Framingham Heart Study
    #[command(about = "Show background on the Framingham Heart Study")]
    About,

    /// Write a default chdrisk.toml
    #[command(about = "Write a default chdrisk.toml")]
    Init(InitArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum ReportFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Debug, Args, Clone)]
struct PatientArgs {
    /// JSON patient form; the patient flags are ignored when given
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = GenderArg::Male)]
    gender: GenderArg,

    /// Age in years (30-80)
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(30..=80))]
    age: u8,

    /// Current smoker
    #[arg(long)]
    smoker: bool,

    /// Cigarettes per day (0-70; 1-70 with --smoker), ignored without --smoker
    #[arg(
        long,
        default_value_t = DEFAULT_SMOKER_CIGS_PER_DAY,
        value_parser = clap::value_parser!(u8).range(0..=70)
    )]
    cigs_per_day: u8,

    /// Systolic blood pressure in mmHg (80-250)
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u16).range(80..=250))]
    sys_bp: u16,

    /// Diastolic blood pressure in mmHg (40-140)
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(40..=140))]
    dia_bp: u16,

    /// Body mass index in kg/m² (15.0-50.0)
    #[arg(long, default_value_t = 25.0, value_parser = parse_bmi)]
    bmi: f64,

    /// Resting heart rate in bpm (40-120)
    #[arg(long, default_value_t = 72, value_parser = clap::value_parser!(u8).range(40..=120))]
    heart_rate: u8,

    /// Total cholesterol in mg/dL (100-600)
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u16).range(100..=600))]
    tot_chol: u16,

    /// Glucose in mg/dL (40-400)
    #[arg(long, default_value_t = 85, value_parser = clap::value_parser!(u16).range(40..=400))]
    glucose: u16,

    /// On blood pressure medication
    #[arg(long)]
    bp_meds: bool,

    /// Diagnosed diabetes
    #[arg(long)]
    diabetes: bool,

    /// History of stroke
    #[arg(long)]
    prior_stroke: bool,

    /// Diagnosed hypertension
    #[arg(long)]
    hypertension: bool,
}

#[derive(Debug, Args, Clone)]
struct AssessArgs {
    #[command(flatten)]
    patient: PatientArgs,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
struct DashboardArgs {
    #[command(flatten)]
    patient: PatientArgs,

    /// Output file (defaults to [report] output, then dashboard.html)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
struct InitArgs {
    /// Where to write the config file
    #[arg(value_name = "FILE", default_value = CONFIG_FILE)]
    path: PathBuf,
}

fn parse_bounded_real(s: &str, domain: &FieldDomain) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if domain.contains(value) {
        Ok(value)
    } else {
        Err(format!(
            "{value} is not in {} ({})",
            domain.describe_bounds(),
            domain.label
        ))
    }
}

fn parse_bmi(s: &str) -> Result<f64, String> {
    parse_bounded_real(s, &domain::BMI)
}

impl PatientArgs {
    fn to_features(&self) -> PatientFeatures {
        PatientFeatures {
            gender: self.gender.into(),
            age: self.age,
            current_smoker: self.smoker,
            cigs_per_day: if self.smoker { self.cigs_per_day } else { 0 },
            bp_meds: self.bp_meds,
            prevalent_stroke: self.prior_stroke,
            prevalent_hyp: self.hypertension,
            diabetes: self.diabetes,
            tot_chol: self.tot_chol,
            sys_bp: self.sys_bp,
            dia_bp: self.dia_bp,
            bmi: self.bmi,
            heart_rate: self.heart_rate,
            glucose: self.glucose,
        }
    }

    fn resolve(&self) -> Result<PatientFeatures, RiskError> {
        match &self.input {
            Some(path) => {
                log::info!("reading patient form from {}", path.display());
                PatientFeatures::load(path)
            }
            None => {
                let features = self.to_features();
                features.validate().map_err(RiskError::InvalidPatient)?;
                Ok(features)
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    let _ = builder.try_init();
}

/// Load the artifact pair, reporting the single user-facing message on failure.
fn load_context(paths: &ArtifactPaths) -> Option<AssessmentContext> {
    match AssessmentContext::load(paths) {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            log::debug!(
                "loading model '{}' with scaler '{}' failed: {e}",
                paths.model.display(),
                paths.scaler.display()
            );
            eprintln!("error: {LOAD_FAILURE_MESSAGE}");
            None
        }
    }
}

fn report_invalid_patient(err: &RiskError) -> i32 {
    match err {
        RiskError::InvalidPatient(problems) => {
            for p in problems {
                eprintln!("error: {p}");
            }
            EXIT_INVALID_PATIENT
        }
        other => {
            eprintln!("error: {other}");
            EXIT_FAILURE
        }
    }
}

fn emit(out: Option<&Path>, text: &str) -> i32 {
    match out {
        Some(path) => match fs::write(path, text) {
            Ok(()) => {
                log::info!("wrote {}", path.display());
                EXIT_OK
            }
            Err(e) => {
                eprintln!("error: failed to write '{}': {e}", path.display());
                EXIT_FAILURE
            }
        },
        None => {
            print!("{text}");
            EXIT_OK
        }
    }
}

fn run_assess(args: &AssessArgs, paths: &ArtifactPaths, branding: &Branding) -> i32 {
    let Some(ctx) = load_context(paths) else {
        return EXIT_FAILURE;
    };
    let features = match args.patient.resolve() {
        Ok(f) => f,
        Err(e) => return report_invalid_patient(&e),
    };
    let (assessment, explanation) = match ctx
        .evaluate(&features)
        .and_then(|a| Ok((a, explain(&ctx, &features)?)))
    {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };

    let text = match args.format {
        ReportFormat::Text => render_text_report(&assessment, Some(&explanation)),
        ReportFormat::Json => match render_json_report(&assessment) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return EXIT_FAILURE;
            }
        },
        ReportFormat::Html => render_dashboard(&DashboardView {
            branding,
            context: Some(&ctx),
            assessment: Some(&assessment),
            explanation: Some(&explanation),
            unavailable_message: LOAD_FAILURE_MESSAGE,
        }),
    };
    emit(args.out.as_deref(), &text)
}

fn run_dashboard(args: &DashboardArgs, paths: &ArtifactPaths, config: &Config) -> i32 {
    let out = config.output_path(args.out.as_deref());
    let branding = config.branding();
    let ctx = load_context(paths);

    let mut evaluated = None;
    if let Some(ctx) = &ctx {
        let features = match args.patient.resolve() {
            Ok(f) => f,
            Err(e) => return report_invalid_patient(&e),
        };
        match ctx
            .evaluate(&features)
            .and_then(|a| Ok((a, explain(ctx, &features)?)))
        {
            Ok(pair) => evaluated = Some(pair),
            Err(e) => {
                eprintln!("error: {e}");
                return EXIT_FAILURE;
            }
        }
    }

    let page = render_dashboard(&DashboardView {
        branding: &branding,
        context: ctx.as_ref(),
        assessment: evaluated.as_ref().map(|(a, _)| a),
        explanation: evaluated.as_ref().map(|(_, e)| e),
        unavailable_message: LOAD_FAILURE_MESSAGE,
    });
    let rc = emit(Some(out.as_path()), &page);
    if ctx.is_none() {
        return EXIT_FAILURE;
    }
    if rc == EXIT_OK {
        println!("{}", out.display());
    }
    rc
}

fn run_model(paths: &ArtifactPaths) -> i32 {
    let Some(ctx) = load_context(paths) else {
        return EXIT_FAILURE;
    };
    let bars = importance_bars(ctx.model(), TOP_FACTORS);
    print!("{}", render_model_text(ctx.card(), &bars));
    EXIT_OK
}

fn run_init(args: &InitArgs) -> i32 {
    if args.path.exists() {
        eprintln!("error: '{}' already exists", args.path.display());
        return EXIT_FAILURE;
    }
    if let Err(e) = fs::write(&args.path, DEFAULT_CONFIG) {
        eprintln!("error: failed to write '{}': {e}", args.path.display());
        return EXIT_FAILURE;
    }
    println!("wrote {}", args.path.display());
    EXIT_OK
}

/// Config and artifact locations for the subcommands that score patients
fn load_settings(cli: &Cli) -> Result<(Config, ArtifactPaths), ConfigError> {
    let config = Config::load(cli.config.as_deref())?;
    let paths = config.artifact_paths(cli.model.as_deref(), cli.scaler.as_deref(), |var| {
        std::env::var(var).ok()
    });
    log::debug!(
        "model artifact '{}', scaler artifact '{}'",
        paths.model.display(),
        paths.scaler.display()
    );
    Ok((config, paths))
}

fn run(cli: Cli) -> i32 {
    match &cli.command {
        Command::About => {
            print!("{}", render_about_text());
            return EXIT_OK;
        }
        Command::Init(args) => return run_init(args),
        _ => {}
    }

    let (config, paths) = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };
    match &cli.command {
        Command::Assess(args) => run_assess(args, &paths, &config.branding()),
        Command::Dashboard(args) => run_dashboard(args, &paths, &config),
        Command::Model => run_model(&paths),
        Command::About | Command::Init(_) => EXIT_OK,
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn assets() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets")
    }

    fn asset_flags(dir: &Path) -> Vec<String> {
        vec![
            "--model".into(),
            dir.join("heart_disease_model.json").display().to_string(),
            "--scaler".into(),
            dir.join("heart_disease_scaler.json").display().to_string(),
        ]
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chdrisk").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_help_contains_expected_content() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        cmd.write_long_help(&mut buf).unwrap();
        let help = String::from_utf8(buf).unwrap();
        assert!(help.contains("coronary heart disease"));
        assert!(help.contains("EXAMPLES"));
        assert!(help.contains("assess"));
        assert!(help.contains("dashboard"));
        assert!(help.contains("--version"));
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = parse(&["-vvv", "about"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn default_patient_flags() {
        let cli = parse(&["assess"]);
        let Command::Assess(args) = cli.command else {
            panic!("expected Assess command");
        };
        assert_eq!(args.patient.to_features(), PatientFeatures::default());
        assert_eq!(args.format, ReportFormat::Text);
    }

    #[test]
    fn patient_flags_map_to_features() {
        let cli = parse(&[
            "assess",
            "--gender",
            "female",
            "--age",
            "64",
            "--smoker",
            "--cigs-per-day",
            "20",
            "--bmi",
            "31.5",
            "--hypertension",
            "--prior-stroke",
        ]);
        let Command::Assess(args) = cli.command else {
            panic!("expected Assess command");
        };
        let f = args.patient.to_features();
        assert_eq!(f.gender, Gender::Female);
        assert_eq!(f.age, 64);
        assert!(f.current_smoker);
        assert_eq!(f.cigs_per_day, 20);
        assert_eq!(f.bmi, 31.5);
        assert!(f.prevalent_hyp);
        assert!(f.prevalent_stroke);
        assert!(!f.diabetes);
    }

    #[test]
    fn out_of_domain_flags_are_rejected() {
        for args in [
            ["assess", "--age", "29"],
            ["assess", "--age", "81"],
            ["assess", "--sys-bp", "251"],
            ["assess", "--bmi", "14.9"],
            ["assess", "--glucose", "39"],
            ["assess", "--cigs-per-day", "71"],
        ] {
            assert!(
                Cli::try_parse_from(std::iter::once("chdrisk").chain(args)).is_err(),
                "{args:?} should be rejected"
            );
        }
    }

    #[test]
    fn bmi_parser_messages() {
        assert_eq!(parse_bmi("50.0"), Ok(50.0));
        assert!(parse_bmi("abc").unwrap_err().contains("not a number"));
        assert!(parse_bmi("51").unwrap_err().contains("15.0-50.0"));
    }

    #[test]
    fn assess_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let mut args = vec!["assess".to_string(), "--format".into(), "json".into()];
        args.extend(["--out".to_string(), out.display().to_string()]);
        args.extend(asset_flags(&assets()));
        let cli = Cli::try_parse_from(std::iter::once("chdrisk".to_string()).chain(args)).unwrap();

        assert_eq!(run(cli), EXIT_OK);
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["tier"], "LOW_RISK");
    }

    #[test]
    fn assess_with_missing_artifacts_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.txt");
        let mut args = vec!["assess".to_string(), "--out".into(), out.display().to_string()];
        args.extend(asset_flags(dir.path()));
        let cli = Cli::try_parse_from(std::iter::once("chdrisk".to_string()).chain(args)).unwrap();

        assert_eq!(run(cli), EXIT_FAILURE);
        assert!(!out.exists());
    }

    #[test]
    fn invalid_patient_form_exits_with_one() {
        let dir = tempfile::tempdir().unwrap();
        let form = dir.path().join("patient.json");
        fs::write(&form, r#"{"age": 95}"#).unwrap();
        let mut args = vec!["assess".to_string(), "--input".into(), form.display().to_string()];
        args.extend(asset_flags(&assets()));
        let cli = Cli::try_parse_from(std::iter::once("chdrisk".to_string()).chain(args)).unwrap();

        assert_eq!(run(cli), EXIT_INVALID_PATIENT);
    }

    #[test]
    fn dashboard_is_written_even_when_loading_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dash.html");
        let mut args = vec![
            "dashboard".to_string(),
            "--out".into(),
            out.display().to_string(),
        ];
        args.extend(asset_flags(dir.path()));
        let cli = Cli::try_parse_from(std::iter::once("chdrisk".to_string()).chain(args)).unwrap();

        assert_eq!(run(cli), EXIT_FAILURE);
        let page = fs::read_to_string(&out).unwrap();
        assert!(page.contains(LOAD_FAILURE_MESSAGE));
        assert!(!page.contains(r#"class="report-container""#));
    }

    #[test]
    fn zero_cigarettes_only_rejected_for_smokers() {
        let cli = parse(&["assess", "--cigs-per-day", "0"]);
        let Command::Assess(args) = cli.command else {
            panic!("expected Assess command");
        };
        assert!(args.patient.resolve().is_ok());

        let cli = parse(&["assess", "--smoker", "--cigs-per-day", "0"]);
        let Command::Assess(args) = cli.command else {
            panic!("expected Assess command");
        };
        assert!(matches!(
            args.patient.resolve(),
            Err(RiskError::InvalidPatient(_))
        ));
    }

    #[test]
    fn malformed_config_only_blocks_scoring_commands() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("broken.toml");
        fs::write(&config, "[model\nmodel_path = ").unwrap();
        let config = config.display().to_string();

        assert_eq!(run(parse(&["--config", &config, "about"])), EXIT_OK);

        let fresh = dir.path().join("fresh.toml").display().to_string();
        assert_eq!(run(parse(&["--config", &config, "init", &fresh])), EXIT_OK);
        assert!(Path::new(&fresh).exists());

        assert_eq!(run(parse(&["--config", &config, "model"])), EXIT_FAILURE);
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let args = InitArgs { path: path.clone() };
        assert_eq!(run_init(&args), EXIT_OK);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert_eq!(run_init(&args), EXIT_FAILURE);
    }
}
