//! mrr-desk: revenue-tracking desk for monthly recurring revenue.
//!
//! Usage:
//!   mrr-desk [--data-dir ./data] [--target 10000] [--growth 15] report
//!   mrr-desk add "Acme Corp" 99 Pro
//!   mrr-desk remove <id>
//!   mrr-desk clear
//!   mrr-desk --ipc-mode        (newline-JSON commands on stdin)

use anyhow::{bail, Result};
use mrr_core::{
    config::DeskConfig,
    customer::{CustomerDraft, CustomerRecord},
    desk::Desk,
    format::format_currency,
    metrics::{DeskMetrics, TargetOutlook},
    milestone::MilestoneStatus,
    store::FileStore,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    AddCustomer {
        name: String,
        mrr: String,
        #[serde(default)]
        plan: String,
    },
    RemoveCustomer {
        id: String,
    },
    ClearAll,
    SetTarget {
        value: f64,
    },
    SetGrowth {
        value: f64,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    target_mrr: f64,
    growth_rate_pct: f64,
    customers: &'a [CustomerRecord],
    metrics: &'a DeskMetrics,
    milestones: Vec<MilestoneStatus>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let mut config = DeskConfig::load(Path::new(data_dir))?;
    if let Some(target) = parse_flag(&args, "--target") {
        config.target_mrr = target;
    }
    if let Some(growth) = parse_flag(&args, "--growth") {
        config.growth_rate_pct = growth;
    }

    let store = FileStore::open(Path::new(data_dir), &config.storage_key)?;
    let mut desk = Desk::open(Box::new(store), &config)?;

    if ipc_mode {
        return run_ipc_loop(&mut desk);
    }

    let positionals = positional_args(&args);
    let command = positionals.first().map(String::as_str).unwrap_or("report");
    match command {
        "report" => print_report(&desk, &config),
        "list" => print_list(&desk, &config),
        "add" => {
            let draft = CustomerDraft {
                name: positionals.get(1).cloned().unwrap_or_default(),
                mrr: positionals.get(2).cloned().unwrap_or_default(),
                plan: positionals.get(3).cloned().unwrap_or_default(),
            };
            match desk.add_customer(&draft)? {
                Some(id) => {
                    println!("Added {} ({id})", draft.name.trim());
                    print_report(&desk, &config);
                }
                None => println!("Rejected: name must be non-empty and fee a non-negative number"),
            }
        }
        "remove" => {
            let id = positionals.get(1).map(String::as_str).unwrap_or_default();
            if desk.remove_customer(id)? {
                println!("Removed {id}");
                print_report(&desk, &config);
            } else {
                println!("No customer with id {id}");
            }
        }
        "clear" => {
            desk.clear_all()?;
            println!("Cleared all customers.");
        }
        other => bail!("unknown command: {other}"),
    }

    Ok(())
}

fn run_ipc_loop(desk: &mut Desk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::AddCustomer { name, mrr, plan } => {
                let draft = CustomerDraft { name, mrr, plan };
                if desk.add_customer(&draft)?.is_none() {
                    log::debug!("ipc add rejected");
                }
            }
            IpcCommand::RemoveCustomer { id } => {
                desk.remove_customer(&id)?;
            }
            IpcCommand::ClearAll => desk.clear_all()?,
            IpcCommand::SetTarget { value } => desk.set_target(value),
            IpcCommand::SetGrowth { value } => desk.set_growth_rate(value),
        }

        let state = build_ui_state(desk);
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(desk: &Desk) -> UiState<'_> {
    UiState {
        target_mrr: desk.target_mrr(),
        growth_rate_pct: desk.growth_rate_pct(),
        customers: desk.customers(),
        metrics: desk.metrics(),
        milestones: desk.milestones(),
    }
}

fn print_report(desk: &Desk, config: &DeskConfig) {
    let m = desk.metrics();
    let sym = &config.currency_symbol;

    println!("=== MRR DESK ===");
    println!("  MRR:        {}", format_currency(m.total_mrr, sym));
    println!("  ARR:        {}", format_currency(m.arr, sym));
    println!("  Customers:  {}", m.customer_count);
    println!("  ARPU:       {}/mo", format_currency(m.arpu, sym));
    println!("  Daily:      {}", format_currency(m.daily_revenue, sym));
    println!("  Weekly:     {}", format_currency(m.weekly_revenue, sym));

    println!();
    println!(
        "=== 12-MONTH PROJECTION ({}% MoM) ===",
        desk.growth_rate_pct()
    );
    let max = desk.metrics().max_projected_mrr().max(1);
    for point in &m.projection {
        let width = ((point.mrr as f64 / max as f64) * 40.0).round() as usize;
        let label = if point.period == 0 {
            "Now".to_string()
        } else {
            format!("+{:>2}", point.period)
        };
        println!(
            "  {label} | {:<40} {}",
            "#".repeat(width.max(1)),
            format_currency(point.mrr as f64, sym)
        );
    }

    println!();
    match m.periods_to_target {
        TargetOutlook::Reached => println!(
            "  Target {} already reached.",
            format_currency(desk.target_mrr(), sym)
        ),
        TargetOutlook::InPeriods(n) => println!(
            "  Target {}: {n} months at {}% MoM growth.",
            format_currency(desk.target_mrr(), sym),
            desk.growth_rate_pct()
        ),
        TargetOutlook::Unreachable => {
            println!("  Target unreachable at current revenue and growth rate.")
        }
    }

    println!();
    println!("=== MILESTONES ===");
    for milestone in desk.milestones() {
        let mark = if milestone.reached { "x" } else { " " };
        println!(
            "  [{mark}] {} MRR",
            format_currency(milestone.threshold, sym)
        );
    }
}

fn print_list(desk: &Desk, config: &DeskConfig) {
    if desk.customers().is_empty() {
        println!("No customers yet.");
        return;
    }
    for c in desk.customers() {
        println!(
            "  {} | {:<24} {:<10} {}/mo  since {}",
            c.id,
            c.name,
            c.plan,
            format_currency(c.mrr, &config.currency_symbol),
            c.start_date
        );
    }
}

/// Positional words left over after flags (and their values) are removed.
fn positional_args(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut skip_value = false;
    for arg in &args[1..] {
        if skip_value {
            skip_value = false;
            continue;
        }
        if let Some(flag) = arg.strip_prefix("--") {
            skip_value = matches!(flag, "data-dir" | "target" | "growth");
            continue;
        }
        out.push(arg.clone());
    }
    out
}

fn parse_flag(args: &[String], flag: &str) -> Option<f64> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}
