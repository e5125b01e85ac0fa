use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use vrf_ip_audit::audit_topology;
use vrf_ip_audit::config::{self, AuditPolicy};
use vrf_ip_audit::output::{print_report, OutputFormat};
use vrf_ip_audit::source::{self, NqeClient};

/// Finds IPs that are applied to multiple interfaces within a VRF.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The URL of a Forward Networks instance, e.g. https://fwd.app
    #[arg(env = "FWD_URL")]
    url: Option<String>,

    /// The username of an account on the instance
    #[arg(env = "FWD_USERNAME")]
    username: Option<String>,

    /// The password of an account on the instance
    #[arg(env = "FWD_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// The snapshotId of a snapshot on the instance
    #[arg(env = "FWD_SNAPSHOT_ID")]
    snapshot_id: Option<String>,

    /// Verify the certificate on the instance
    #[arg(long)]
    verify: bool,

    /// Device to exclude from the audit (repeatable, replaces the default list)
    #[arg(long = "exclude", value_name = "DEVICE")]
    exclude: Vec<String>,

    /// Do not apply the default device exclusion list
    #[arg(long)]
    no_default_excludes: bool,

    /// Holders a primary address may have within a VRF
    #[arg(long, default_value_t = config::DEFAULT_PRIMARY_THRESHOLD)]
    primary_threshold: usize,

    /// Holders a shared-virtual (FHRP) address may have within a VRF
    #[arg(long, default_value_t = config::DEFAULT_SHARED_VIRTUAL_THRESHOLD)]
    shared_virtual_threshold: usize,

    /// Read the topology from this snapshot file instead of querying the instance
    #[arg(long)]
    cache_file: Option<String>,

    /// Report format: table or csv
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

impl Args {
    fn policy(&self) -> AuditPolicy {
        let base = if !self.exclude.is_empty() {
            AuditPolicy::with_excluded(self.exclude.iter().cloned())
        } else if self.no_default_excludes {
            AuditPolicy::no_exclusions()
        } else {
            AuditPolicy::default()
        };
        AuditPolicy {
            primary_threshold: self.primary_threshold,
            shared_virtual_threshold: self.shared_virtual_threshold,
            ..base
        }
    }

    fn client(&self) -> Result<(NqeClient, &str), Box<dyn Error>> {
        match (&self.url, &self.username, &self.password, &self.snapshot_id) {
            (Some(url), Some(username), Some(password), Some(snapshot_id)) => Ok((
                NqeClient {
                    url: url.clone(),
                    username: username.clone(),
                    password: password.clone(),
                    verify: self.verify,
                },
                snapshot_id.as_str(),
            )),
            _ => Err(
                "url, username, password and snapshotId are required unless --cache-file is given"
                    .into(),
            ),
        }
    }
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(config::LOG_CONFIG_FILE).exists() {
        log4rs::init_file(config::LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

async fn run(args: Args) -> Result<bool, Box<dyn Error>> {
    let policy = args.policy();
    log::info!(
        "Policy: excluded={:?} primary_threshold={} shared_virtual_threshold={}",
        policy.excluded_devices,
        policy.primary_threshold,
        policy.shared_virtual_threshold
    );

    let topology = match &args.cache_file {
        Some(file) => source::load_topology_file(file)?,
        None => {
            let (client, snapshot_id) = args.client()?;
            source::read_topology_cache(None, &client, snapshot_id).await?
        }
    };

    let report = audit_topology(&topology, &policy);
    print_report(&report, args.format)?;
    Ok(report.is_clean())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    if let Err(e) = init_logging() {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
