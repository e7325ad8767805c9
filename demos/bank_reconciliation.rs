//! Bank reconciliation walkthrough over the bundled demo period

use recon_core::utils::demo_data::{demo_bank, demo_ledger, demo_start_balance};
use recon_core::{
    explain_or_fallback, match_transactions, suggest_adjustments, summarize, UnavailableAnalyzer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 Recon Core - Bank Reconciliation Example\n");

    // 1. Load the demo period (normally produced by an upstream ingestion step)
    let ledger = demo_ledger();
    let bank = demo_bank();
    let start_balance = demo_start_balance();
    println!(
        "📥 Loaded {} ledger entries and {} bank entries, opening balance {}\n",
        ledger.len(),
        bank.len(),
        start_balance
    );

    // 2. Run the matching pass
    println!("🔍 Matching ledger against bank statement...\n");
    let (ledger, bank) = match_transactions(&ledger, &bank);

    for transaction in ledger.iter().chain(bank.iter()) {
        let marker = if transaction.is_matched() { "✓" } else { "✗" };
        println!(
            "  {} [{:?}] {:<10} {:<22} {:?} {}",
            marker,
            transaction.source,
            transaction.reference.as_deref().unwrap_or("-"),
            transaction.description,
            transaction.direction,
            transaction.amount
        );
    }
    println!();

    // 3. Derive the balance summary
    let summary = summarize(&ledger, &bank, &start_balance);
    println!("📊 Reconciliation Summary");
    println!("  Book balance:          {}", summary.ledger_end_balance);
    println!("  Bank balance:          {}", summary.bank_end_balance);
    println!("  Unmatched (books):     {}", summary.unmatched_ledger_total);
    println!("  Unmatched (bank):      {}", summary.unmatched_bank_total);
    println!("  Adjusted book balance: {}", summary.adjusted_ledger_balance);
    println!("  Adjusted bank balance: {}", summary.adjusted_bank_balance);
    if summary.is_reconciled() {
        println!("  ✓ Adjusted balances agree\n");
    } else {
        println!(
            "  ⚠ Difference of {} remains\n",
            summary.adjusted_difference()
        );
    }

    // 4. Suggested adjusting entries for bank items missing from the books
    println!("📝 Suggested Adjusting Entries");
    for entry in suggest_adjustments(&bank) {
        println!(
            "  {}  Dr {:<22} Cr {:<22} {}  ({})",
            entry.date, entry.debit_account, entry.credit_account, entry.amount, entry.description
        );
    }
    println!();

    // 5. Ask the analysis hook about each unmatched bank item. No service is
    //    configured here, so every call falls back to the fixed message.
    println!("🤖 Discrepancy Analysis");
    let analyzer = UnavailableAnalyzer;
    for transaction in bank.iter().filter(|t| !t.is_matched()) {
        let explanation = explain_or_fallback(&analyzer, transaction).await;
        println!("  {}: {}", transaction.description, explanation);
    }

    Ok(())
}
