mod errors;
mod session_store;

use api::{
    api::WalletApi,
    http::HttpWalletApi,
    session::StaticSession,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use types::{amount::format_btc, errors::ApiError, notice::NoticeLevel};
use workflow::{FormEvent, Phase, driver::WorkflowDriver, fees::tier_catalog};

use crate::{errors::CliError, session_store::SessionStore};

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Parser)]
#[command(name = "satsdash")]
#[command(about = "Dashboard CLI for a hosted Bitcoin wallet service.")]
#[command(version = "0.1.0")]
struct Cli {
    /// Base URL of the wallet service. Falls back to WALLET_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login { username: String },
    /// Forget the stored session
    Logout,
    /// List the wallets on the account
    Wallets,
    /// Show a wallet's confirmed balance
    Balance { wallet_id: String },
    /// Show the current fee tiers
    Fees,
    /// Ask the service whether an address is valid
    Validate { address: String },
    /// Show a fresh receive address for a wallet
    Receive { wallet_id: String },
    /// Show recent transactions for a wallet
    History {
        wallet_id: String,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Send Bitcoin from a wallet
    Send {
        wallet_id: String,
        /// Recipient address
        to: String,
        /// Amount in BTC, e.g. 0.001. Omit when using --max
        amount: Option<String>,
        /// Send the whole spendable balance (fee deducted when known)
        #[arg(long)]
        max: bool,
        /// Fee tier: economy, standard, priority or express
        #[arg(short, long, default_value = "standard")]
        tier: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let base_url = cli
        .api_url
        .or_else(|| std::env::var("WALLET_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let store = SessionStore::open_default()?;

    match run(&cli.command, &base_url, &store).await {
        Err(CliError::Api(ApiError::SessionExpired)) => {
            store.clear()?;
            eprintln!("{}", ApiError::SessionExpired);
            Err(CliError::Api(ApiError::SessionExpired))
        }
        other => other,
    }
}

async fn run(command: &Commands, base_url: &str, store: &SessionStore) -> Result<(), CliError> {
    match command {
        Commands::Login { username } => login(base_url, store, username).await,
        Commands::Logout => {
            store.clear()?;
            println!("Session cleared.");
            Ok(())
        }
        Commands::Wallets => {
            let client = authenticated_client(base_url, store)?;
            let wallets = client.list_wallets().await?;
            if wallets.is_empty() {
                println!("No wallets on this account.");
            }
            for wallet in wallets {
                match wallet.name {
                    Some(name) => println!("{}  {}", wallet.id, name),
                    None => println!("{}", wallet.id),
                }
            }
            Ok(())
        }
        Commands::Balance { wallet_id } => {
            let client = authenticated_client(base_url, store)?;
            let balance = client.wallet_balance(wallet_id).await?;
            println!(
                "{} BTC ({} sat confirmed)",
                format_btc(balance.confirmed),
                balance.confirmed.to_sat()
            );
            Ok(())
        }
        Commands::Fees => {
            let client = authenticated_client(base_url, store)?;
            let rates = client.fee_rates().await?;
            for tier in tier_catalog(rates) {
                println!(
                    "{:<10} {:>4} sat/vB  {}",
                    tier.display_name, tier.rate_sat_per_vb, tier.eta
                );
            }
            Ok(())
        }
        Commands::Validate { address } => {
            let client = authenticated_client(base_url, store)?;
            let check = client.validate_address(address).await?;
            if check.is_valid {
                println!("Address is valid.");
            } else {
                println!("Address is not valid.");
            }
            if let Some(warning) = check.warning {
                println!("Warning: {warning}");
            }
            Ok(())
        }
        Commands::Receive { wallet_id } => {
            let client = authenticated_client(base_url, store)?;
            let address = client.next_address(wallet_id).await?;
            println!("{address}");
            Ok(())
        }
        Commands::History { wallet_id, limit } => {
            let client = authenticated_client(base_url, store)?;
            let entries = client.transaction_history(wallet_id, *limit).await?;
            if entries.is_empty() {
                println!("No transactions.");
            }
            for entry in entries {
                let address = entry
                    .to_address
                    .or(entry.address)
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<9} {:>14.8} BTC  {:<10} {}",
                    entry.direction, entry.amount, entry.status, address
                );
            }
            Ok(())
        }
        Commands::Send {
            wallet_id,
            to,
            amount,
            max,
            tier,
        } => {
            let client = authenticated_client(base_url, store)?;
            send(Box::new(client), wallet_id, to, amount.as_deref(), *max, tier).await
        }
    }
}

async fn login(base_url: &str, store: &SessionStore, username: &str) -> Result<(), CliError> {
    let password = rpassword::prompt_password("Password: ")?;
    let client = HttpWalletApi::new(base_url, Box::new(StaticSession::anonymous()));
    let response = client.login(username, &password).await?;
    store.save(&response.token)?;
    println!("Logged in as {username}.");
    Ok(())
}

fn authenticated_client(base_url: &str, store: &SessionStore) -> Result<HttpWalletApi, CliError> {
    let token = store
        .load()?
        .ok_or_else(|| CliError::Input("No session. Run `satsdash login <username>` first.".to_string()))?;
    Ok(HttpWalletApi::new(
        base_url,
        Box::new(StaticSession::new(token)),
    ))
}

/// Drives the send form the way the dashboard does: open, validate the
/// recipient, set the amount, then submit. Each settle() waits for the
/// requests the previous inputs triggered.
async fn send(
    client: Box<dyn WalletApi>,
    wallet_id: &str,
    to: &str,
    amount: Option<&str>,
    max: bool,
    tier: &str,
) -> Result<(), CliError> {
    if amount.is_none() && !max {
        return Err(CliError::Input(
            "Provide an amount in BTC or pass --max.".to_string(),
        ));
    }

    let mut driver = WorkflowDriver::new(client, wallet_id);

    driver.dispatch(FormEvent::Opened);
    driver.settle().await;
    print_notices(&mut driver);

    if driver.form().tiers().is_empty() {
        return Err(CliError::Input(
            "Fee tiers are unavailable; try again later.".to_string(),
        ));
    }
    if !driver.form().tiers().iter().any(|t| t.id == tier) {
        return Err(CliError::Input(format!(
            "Unknown fee tier '{tier}'. Use economy, standard, priority or express."
        )));
    }
    driver.dispatch(FormEvent::TierSelected(tier.to_string()));

    driver.dispatch(FormEvent::RecipientEdited(to.to_string()));
    driver.dispatch(FormEvent::RecipientBlurred);
    driver.settle().await;
    print_notices(&mut driver);

    if max {
        driver.dispatch(FormEvent::SendMaxRequested);
    } else if let Some(amount) = amount {
        driver.dispatch(FormEvent::AmountEdited(amount.to_string()));
    }
    driver.settle().await;
    print_notices(&mut driver);

    let form = driver.form();
    println!(
        "Sending {} BTC to {} ({} tier)",
        form.draft().amount_text,
        form.draft().recipient,
        tier
    );
    if let Some(estimate) = form.estimate() {
        println!("Estimated fee: {} BTC", format_btc(estimate.fee));
    }

    driver.dispatch(FormEvent::SubmitRequested);
    driver.settle().await;
    print_notices(&mut driver);

    match driver.form().phase() {
        Phase::Succeeded(submission) => {
            println!("Transaction ID: {}", submission.txid);
            println!("Amount:         {} BTC", format_btc(submission.amount));
            println!("Recipient:      {}", submission.to_address);
            println!("Fee:            {} BTC", format_btc(submission.fee));
            println!(
                "New balance:    {} BTC",
                format_btc(driver.form().confirmed_balance())
            );
            Ok(())
        }
        _ => Err(CliError::SendFailed),
    }
}

fn print_notices(driver: &mut WorkflowDriver) {
    for notice in driver.take_notices() {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Warning => println!("Warning: {}", notice.message),
            NoticeLevel::Error => eprintln!("Error: {}", notice.message),
        }
    }
}
