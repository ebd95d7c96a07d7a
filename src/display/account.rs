//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Account;

/// Format a list of accounts as an identifier/balance table
pub fn format_account_list(accounts: &[&Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts.".to_string();
    }

    let id_width = accounts
        .iter()
        .map(|a| a.identifier().len())
        .max()
        .unwrap_or(10)
        .max(10);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:>14}\n",
        "Identifier",
        "Balance",
        id_width = id_width,
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:->14}\n",
        "",
        "",
        id_width = id_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<id_width$}  {:>14}\n",
            account.identifier(),
            account.balance().format_with_symbol(symbol),
            id_width = id_width,
        ));
    }

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.identifier()));
    output.push_str(&format!(
        "  Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output
}
