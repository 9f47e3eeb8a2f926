//! LBR protocol flow runner
//!
//! Replays the full protocol flow against a simulated clock: deploy the
//! ledgers, treasury, and staking engine in dependency order, fund the
//! float, then stake, accrue, claim, burn, lock, and unlock as a user
//! would. Every run is deterministic; the clock starts at a fixed genesis
//! and only moves when the flow says so.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

use ledger::{TokenLedger, WrappedToken, UNIT};
use staking::constants::{BASIS_POINTS, SECONDS_PER_DAY};
use staking::{StakingConfig, StakingEngine};
use treasury::Treasury;

const DEPLOYER: &str = "deployer";
const USER: &str = "user";
const TREASURY: &str = "treasury";
const ENGINE: &str = "staking-engine";

const TREASURY_FUNDING: u64 = 6_000_000 * UNIT;

#[derive(Parser)]
#[command(name = "lbr-flow")]
#[command(about = "LBR protocol end-to-end flow runner", version)]
struct Cli {
    /// Staking config TOML override
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dump the final protocol state as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full protocol flow (default)
    Flow,

    /// Print the configured lock tier table
    Tiers,
}

/// Simulated block clock. Starts at a fixed genesis so runs reproduce.
struct SimClock {
    now: u64,
}

impl SimClock {
    const GENESIS: u64 = 1_700_000_000;

    fn new() -> Self {
        Self { now: Self::GENESIS }
    }

    fn now(&self) -> u64 {
        self.now
    }

    fn advance_days(&mut self, days: u64) {
        self.now += days * SECONDS_PER_DAY;
        println!("⏰ Fast-forwarded {} days", days);
    }
}

#[derive(Serialize)]
struct FlowSummary {
    final_user_reward_balance: u64,
    final_user_receipt_balance: u64,
    treasury_float: u64,
    reward_total_supply: u64,
    engine_stats: staking::StakingStats,
    treasury_stats: treasury::TreasuryStats,
    user_locks: Vec<staking::Lock>,
}

fn amount(units: u64) -> String {
    format!("{:.8}", units as f64 / UNIT as f64)
}

fn timestamp(ts: u64) -> String {
    match chrono::DateTime::from_timestamp(ts as i64, 0) {
        Some(dt) => dt.to_rfc3339(),
        None => format!("{}s", ts),
    }
}

fn print_tiers(config: &StakingConfig) {
    println!("\n📊 Lock tiers");
    println!("═══════════════════════════════════");
    for tier in &config.lock_tiers {
        println!(
            "{:>4} days    {:>5.2}% APY",
            tier.duration / SECONDS_PER_DAY,
            tier.apy_bps as f64 / 100.0
        );
    }
    println!(
        "\nStaking yield: {:.2}% APR",
        config.reward_rate_bps as f64 / 100.0
    );
    println!(
        "Burn bonus:    {:.0}% of burned amount",
        config.burn_bonus_bps as f64 / 100.0
    );
    println!(
        "Early exit:    {:.0}% penalty, yield forfeited",
        config.early_exit_penalty_bps as f64 / 100.0
    );
    println!();
}

fn run_flow(config: StakingConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut clock = SimClock::new();

    // SECTION 1: deployment, in dependency order
    println!("{}", "🚀 Deploying protocol components...".bold());
    let mut receipt = WrappedToken::new("lbrETH");
    let mut reward = TokenLedger::new("LBR");
    let mut treasury = Treasury::new(TREASURY, DEPLOYER);
    let mut engine = StakingEngine::new(ENGINE, config);
    println!("✅ lbrETH, LBR, treasury, and staking engine ready");

    // SECTION 2: wire the treasury to the engine and fund the float
    treasury.set_staking_contract(DEPLOYER, ENGINE)?;
    println!("🔗 Staking engine authorized on treasury");

    reward.mint(DEPLOYER, TREASURY_FUNDING)?;
    reward.approve(DEPLOYER, TREASURY, TREASURY_FUNDING);
    treasury.deposit(&mut reward, DEPLOYER, TREASURY_FUNDING)?;
    println!(
        "💰 Treasury funded with {} LBR",
        amount(treasury.float(&reward)).green()
    );

    // SECTION 3: user mints receipt tokens from a base-asset deposit
    receipt.deposit(USER, UNIT)?;
    println!(
        "\n🔵 User deposited {} base units, received {} lbrETH",
        amount(UNIT),
        amount(receipt.token().balance_of(USER)).green()
    );

    // SECTION 4: stake
    receipt.token_mut().approve(USER, ENGINE, UNIT);
    engine.stake(
        receipt.token_mut(),
        &mut reward,
        &mut treasury,
        USER,
        UNIT,
        clock.now(),
    )?;
    let stake = engine
        .stake_of(USER)
        .ok_or("stake record missing after stake")?;
    println!("⭐ Staked {} lbrETH", amount(stake.amount).green());
    println!("   Checkpoint: {}", timestamp(stake.last_claimed));

    // SECTION 5: accrue for 7 days, then claim
    clock.advance_days(7);
    let earned = engine.earned(USER, clock.now())?;
    println!("💎 Earned so far: {} LBR", amount(earned).green());

    let paid = engine.claim_reward(&mut reward, &mut treasury, USER, clock.now())?;
    println!(
        "🎁 Claimed {} LBR (balance {})",
        amount(paid).green(),
        amount(reward.balance_of(USER))
    );

    // SECTION 6: burn for reward
    let burn_amount = reward.balance_of(USER) / 2;
    reward.approve(USER, ENGINE, burn_amount);
    let payout = engine.burn_for_reward(&mut reward, &mut treasury, USER, burn_amount)?;
    println!(
        "🔥 Burned {} LBR for a {} payout ({}% bonus)",
        amount(burn_amount),
        amount(payout).green(),
        (engine.config().burn_bonus_bps - BASIS_POINTS) / 100
    );

    // SECTION 7: lock a quarter for 90 days
    let lock_amount = reward.balance_of(USER) / 4;
    reward.approve(USER, ENGINE, lock_amount);
    let first = engine.lock_reward(
        &mut reward,
        USER,
        lock_amount,
        90 * SECONDS_PER_DAY,
        clock.now(),
    )?;
    let lock = engine.user_locks(USER)[first];
    println!("\n🔒 Locked {} LBR for 90 days", amount(lock.amount).green());
    println!("   Unlocks: {}", timestamp(lock.unlock_time));
    println!("   APY: {:.2}%", lock.apy_bps as f64 / 100.0);

    // SECTION 8: early unlock after 30 days, penalty applies
    clock.advance_days(30);
    let early_paid = engine.unlock(&mut reward, &mut treasury, USER, first, clock.now())?;
    println!(
        "⚠️  Early unlock returned {} of {} LBR ({} withheld)",
        amount(early_paid).yellow(),
        amount(lock_amount),
        amount(lock_amount - early_paid).red()
    );

    // SECTION 9: a fresh lock held to maturity
    let new_lock_amount = reward.balance_of(USER) / 2;
    reward.approve(USER, ENGINE, new_lock_amount);
    let second = engine.lock_reward(
        &mut reward,
        USER,
        new_lock_amount,
        90 * SECONDS_PER_DAY,
        clock.now(),
    )?;
    println!(
        "\n🔒 Locked {} LBR for the full 90-day term",
        amount(new_lock_amount).green()
    );

    clock.advance_days(90);
    let mature_paid = engine.unlock(&mut reward, &mut treasury, USER, second, clock.now())?;
    println!(
        "🔓 Mature unlock paid {} LBR ({} yield)",
        amount(mature_paid).green(),
        amount(mature_paid - new_lock_amount)
    );

    // SECTION 10: final state
    println!("\n{}", "🎉 Flow complete".bold().green());
    println!(
        "💵 User: {} LBR, {} lbrETH staked",
        amount(reward.balance_of(USER)),
        amount(engine.stake_of(USER).map(|s| s.amount).unwrap_or(0))
    );
    println!("🏦 Treasury float: {} LBR", amount(treasury.float(&reward)));

    if json {
        let summary = FlowSummary {
            final_user_reward_balance: reward.balance_of(USER),
            final_user_receipt_balance: receipt.token().balance_of(USER),
            treasury_float: treasury.float(&reward),
            reward_total_supply: reward.total_supply(),
            engine_stats: engine.stats(),
            treasury_stats: treasury.stats(),
            user_locks: engine.user_locks(USER).to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => StakingConfig::load(path)?,
        None => StakingConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Flow) {
        Commands::Flow => run_flow(config, cli.json),
        Commands::Tiers => {
            print_tiers(&config);
            Ok(())
        }
    }
}
