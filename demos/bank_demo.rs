use interest_bank::{
    AccountID,
    AccountKind,
    Bank,
    error::Result,
    num,
    util::time,
};
use chrono::Datelike;
use rust_decimal::Decimal;

/// Print what happened, the way a teller would read it out. Failures are part
/// of the demo and don't stop it.
fn report<T, F>(res: Result<T>, ok: F)
    where F: FnOnce(T) -> String,
{
    match res {
        Ok(val) => println!("{}", ok(val)),
        Err(e) => println!("{}", e),
    }
}

fn example() -> Result<()> {
    let mut bank = Bank::new();
    let currency = bank.parameters().currency().clone();

    // benefits are shown as of today
    let today = time::today();
    bank.set_current_date(today.day(), today.month(), today.year())?;

    let accounts: [(AccountKind, u32, Decimal); 4] = [
        (AccountKind::ShortTerm, 1, num!(2000)),
        (AccountKind::LongTerm, 2, num!(3000)),
        (AccountKind::Special, 3, num!(4000)),
        (AccountKind::Current, 4, num!(5000)),
    ];
    for (kind, id, balance) in accounts.iter() {
        let res = bank.create(*kind, AccountID::new(*id), *balance);
        report(res, |id| format!("{} account created. Account number: {}", kind.title(), id));
    }

    report(bank.deposit(AccountID::new(1), num!(1000)), |r| r.describe(&currency));
    report(bank.deposit(AccountID::new(2), num!(2000)), |r| r.describe(&currency));
    report(bank.withdraw(AccountID::new(3), num!(1500)), |r| r.describe(&currency));
    report(bank.withdraw(AccountID::new(4), num!(2000)), |r| r.describe(&currency));

    for id in 1..=4 {
        report(bank.show_account(AccountID::new(id)), |r| r.describe(&currency));
    }

    report(bank.sortition(), |id| format!("Lottery result: Winning account number is {}", id));

    println!("All account numbers in the system:");
    for id in bank.list_account_ids() {
        println!("{}", id);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")
    ).init();
    if let Err(e) = example() {
        eprintln!("bank demo failed: {}", e);
        std::process::exit(1);
    }
}
