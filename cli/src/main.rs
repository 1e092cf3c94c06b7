use std::{io::Write, path::PathBuf, time::Duration};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use client::{DirectoryClient, LoginForm, Route, submit};
use server::{DbConfig, NodeEnv, Redacted, ServerOpts, serve};

#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the visitor record service.
    ///
    /// Missing database settings do not stop the service; they are reported
    /// by `GET /api/health` and the data endpoints answer 503.
    Server {
        /// The port number on which the server will listen for incoming connections.
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,

        /// `production` verifies the database certificate; anything else trusts it.
        #[arg(long, env = "NODE_ENV")]
        node_env: Option<String>,

        /// Database host.
        /// Example: `resume.postgres.database.azure.com`
        #[arg(long, env = "DB_SERVER")]
        db_server: Option<String>,

        /// Database port, driver default when omitted.
        #[arg(long, env = "DB_PORT")]
        db_port: Option<u16>,

        #[arg(long, env = "DB_USER")]
        db_user: Option<String>,

        #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
        db_password: Option<String>,

        #[arg(long, env = "DB_NAME")]
        db_name: Option<String>,

        /// Directory holding the built client bundle, served for any path
        /// outside `/api`.
        /// Example: `./dist` or `/var/www/html`
        #[arg(long, env = "UI_DIR")]
        ui_dir: Option<PathBuf>,
    },

    /// Sign the guestbook from the terminal against a running service.
    Visit {
        /// Base url of the service.
        #[arg(long, env = "VISITOR_SERVICE_URL", default_value = "http://localhost:3000")]
        url: String,

        /// How long the welcome screen stays up, in milliseconds.
        #[arg(long, default_value_t = Route::WELCOME_DURATION.as_millis() as u64)]
        welcome_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().cmd {
        Command::Server {
            port,
            node_env,
            db_server,
            db_port,
            db_user,
            db_password,
            db_name,
            ui_dir,
        } => {
            serve(ServerOpts {
                port,
                node_env: NodeEnv::from(node_env),
                db: DbConfig {
                    server: db_server,
                    port: db_port,
                    user: db_user,
                    password: db_password.map(Redacted::from),
                    name: db_name,
                },
                ui_dir,
            })
            .await?
        }
        Command::Visit { url, welcome_ms } => visit(url, Duration::from_millis(welcome_ms)).await?,
    }

    Ok(())
}

async fn visit(url: String, welcome: Duration) -> anyhow::Result<()> {
    let client = DirectoryClient::new(url)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut route = Route::Welcome;
    println!("Welcome to My Website");
    tokio::time::sleep(welcome).await;
    if let Some(next) = route.after_timeout() {
        route = next;
    }
    tracing::debug!("route :: {}", route.path());

    let mut form = LoginForm::new(client.load_visitors().await);
    println!("Please enter your name and reason for viewing:");

    let submission = loop {
        form.set_name(prompt(&mut lines, "Name").await?);
        if let Some(hint) = form.welcome_hint() {
            println!("{hint}");
        }

        let label = format!("Reason {}", form.reason_placeholder());
        form.set_reason(prompt(&mut lines, &label).await?);

        match submit(&client, &form).await {
            Ok(submission) => break submission,
            Err(e) => println!("{e}"),
        }
    };

    println!("{}", submission.outcome.report());
    println!("{}", submission.next.path());
    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush().context("flush stdout")?;

    match lines.next_line().await.context("read stdin")? {
        Some(line) => Ok(line),
        None => bail!("input closed"),
    }
}
