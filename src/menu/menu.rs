//! Interactive text menu over the banking core.
//!
//! Thin front end: it parses and validates user input, calls the core with
//! clean numeric amounts, and renders results. Generic over reader/writer so
//! tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::bank::Bank;

/// Drive `bank` through the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, output: &mut W) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "==== Virtual Banking Menu ====")?;
        writeln!(output, "1. Create Account")?;
        writeln!(output, "2. Deposit Money")?;
        writeln!(output, "3. Withdraw Money")?;
        writeln!(output, "4. Add Payee")?;
        writeln!(output, "5. Transfer Money")?;
        writeln!(output, "6. View Account Details")?;
        writeln!(output, "7. View Transaction History")?;
        writeln!(output, "8. Exit")?;

        let Some(choice) = prompt(input, output, "Select an option (1-8): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => create_account(bank, input, output)?,
            "2" | "3" | "4" | "5" | "6" | "7" => {
                let Some(account_id) = prompt(input, output, "Enter Your Account ID: ")? else {
                    break;
                };
                if bank.find_account(&account_id).is_none() {
                    writeln!(output, "Account not found.")?;
                    continue;
                }

                match choice.as_str() {
                    "2" => deposit(bank, &account_id, input, output)?,
                    "3" => withdraw(bank, &account_id, input, output)?,
                    "4" => add_payee(bank, &account_id, input, output)?,
                    "5" => transfer(bank, &account_id, input, output)?,
                    "6" => view_details(bank, &account_id, output)?,
                    _ => view_history(bank, &account_id, output)?,
                }
            }
            "8" => {
                writeln!(output, "Thank you for using Virtual Banking. Goodbye!")?;
                break;
            }
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }

    Ok(())
}

/// Print `message`, read one line, return it trimmed. `None` means EOF.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn create_account<R: BufRead, W: Write>(
    bank: &mut Bank,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt(input, output, "Enter Account Holder Name: ")? else {
        return Ok(());
    };
    let Some(raw) = prompt(input, output, "Enter Initial Balance (or press Enter for $0): ")?
    else {
        return Ok(());
    };

    let balance = if raw.is_empty() {
        Decimal::ZERO
    } else {
        match Decimal::from_str(&raw) {
            Ok(balance) => balance,
            Err(_) => {
                writeln!(output, "Invalid amount. Defaulting to $0.")?;
                Decimal::ZERO
            }
        }
    };

    match bank.create_account(&name, balance) {
        Ok(id) => writeln!(output, "Account Created Successfully! Account ID: {}", id),
        Err(e) => writeln!(output, "{}", e),
    }
}

fn deposit<R: BufRead, W: Write>(
    bank: &mut Bank,
    account_id: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(amount) = prompt_amount(input, output, "Enter deposit amount: ")? else {
        return Ok(());
    };
    match bank.deposit(account_id, amount) {
        Ok(balance) => writeln!(
            output,
            "Deposited ${}. Current Balance: ${}",
            amount, balance
        ),
        Err(e) => writeln!(output, "{}", e),
    }
}

fn withdraw<R: BufRead, W: Write>(
    bank: &mut Bank,
    account_id: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(amount) = prompt_amount(input, output, "Enter withdrawal amount: ")? else {
        return Ok(());
    };
    match bank.withdraw(account_id, amount) {
        Ok(balance) => writeln!(output, "Withdrew ${}. Current Balance: ${}", amount, balance),
        Err(e) => writeln!(output, "{}", e),
    }
}

fn add_payee<R: BufRead, W: Write>(
    bank: &mut Bank,
    account_id: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(payee_id) = prompt(input, output, "Enter Payee Account ID to add: ")? else {
        return Ok(());
    };
    match bank.add_payee(account_id, &payee_id) {
        Ok(()) => writeln!(output, "Payee added successfully."),
        Err(e) => writeln!(output, "{}", e),
    }
}

fn transfer<R: BufRead, W: Write>(
    bank: &mut Bank,
    account_id: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(payee_id) = prompt(input, output, "Enter Payee Account ID: ")? else {
        return Ok(());
    };
    let Some(recipient_name) = bank.find_account(&payee_id).map(|a| a.name().to_string()) else {
        writeln!(output, "Payee account not found.")?;
        return Ok(());
    };
    let Some(amount) = prompt_amount(input, output, "Enter amount to transfer: ")? else {
        return Ok(());
    };

    match bank.transfer(account_id, &payee_id, amount) {
        Ok(()) => writeln!(
            output,
            "Transferred ${} to {} (ID: {})",
            amount, recipient_name, payee_id
        ),
        Err(e) => writeln!(output, "{}", e),
    }
}

fn view_details<W: Write>(bank: &Bank, account_id: &str, output: &mut W) -> io::Result<()> {
    let Some(account) = bank.find_account(account_id) else {
        return writeln!(output, "Account not found.");
    };

    let payees: Vec<&str> = account.payees().iter().map(String::as_str).collect();
    writeln!(output)?;
    writeln!(output, "Account Holder: {}", account.name())?;
    writeln!(output, "Account ID: {}", account.id())?;
    writeln!(output, "Balance: ${}", account.balance())?;
    writeln!(
        output,
        "Payees: {}",
        if payees.is_empty() {
            "None".to_string()
        } else {
            payees.join(", ")
        }
    )
}

fn view_history<W: Write>(bank: &Bank, account_id: &str, output: &mut W) -> io::Result<()> {
    let Some(account) = bank.find_account(account_id) else {
        return writeln!(output, "Account not found.");
    };

    writeln!(output)?;
    writeln!(
        output,
        "Transaction History for {} (ID: {})",
        account.name(),
        account.id()
    )?;
    if account.transactions().is_empty() {
        writeln!(output, " - No transactions yet.")?;
    }
    for entry in account.transactions() {
        writeln!(output, " - {}", entry)?;
    }
    Ok(())
}

fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<Decimal>> {
    let Some(raw) = prompt(input, output, message)? else {
        return Ok(None);
    };
    match Decimal::from_str(&raw) {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            writeln!(output, "Invalid amount.")?;
            Ok(None)
        }
    }
}
