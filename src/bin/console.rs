// src/bin/console.rs

//! The interactive text-menu front end.  All simulation state lives in the
//! library; this binary only reads commands, dispatches, and formats output.

use std::io::{self, BufRead, Write};
use stock_sim::{
    HoldingSnapshot, RandomWalkModel, StockMarket, StockSnapshot, UserPortfolio,
};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut market = StockMarket::new();
    let mut portfolio = UserPortfolio::new();
    let mut model = RandomWalkModel::new();

    loop {
        println!("\n~ This is investment simulator ~");
        println!("1. Show market");
        println!("2. Buy stock");
        println!("3. Sell stock");
        println!("4. Show portfolio");
        println!("5. Simulate next day");
        println!("0. Exit");
        let choice = prompt(&mut input, "Please, choose an action(number): ")?;

        match choice.as_str() {
            "1" => {
                println!("\n~ Market Stocks ~");
                print_market(&market);
            }
            "2" => {
                println!("Enter stock ID to buy: ");
                print_market(&market);
                let id = prompt(&mut input, "")?;
                let quantity = prompt(&mut input, "Enter quantity: ")?;
                buy(&market, &mut portfolio, &id, &quantity);
            }
            "3" => {
                let name = prompt(&mut input, "Enter stock name to sell: ")?;
                let quantity = prompt(&mut input, "Enter quantity: ")?;
                match quantity.parse::<u32>() {
                    Ok(quantity) => {
                        if let Err(err) = portfolio.sell(&name, quantity) {
                            println!("{err}");
                        }
                    }
                    Err(_) => println!("Invalid quantity."),
                }
            }
            "4" => print_portfolio(&portfolio),
            "5" => {
                println!("Simulating next day...");
                market.advance_day(&mut model);
                portfolio.advance_day(&mut model);
                println!("Changes simulated! Here's your updated portfolio:");
                print_portfolio(&portfolio);
            }
            "0" => {
                println!("Goodbye! Please return later!");
                return Ok(());
            }
            _ => println!("Invalid option."),
        }
    }
}

fn buy(market: &StockMarket, portfolio: &mut UserPortfolio, id: &str, quantity: &str) {
    // The id is range-checked here; the portfolio never sees a bad one.
    let stock = match id.parse::<u32>().ok().and_then(|id| market.get(id)) {
        Some(stock) => stock,
        None => {
            println!("Invalid ID.");
            return;
        }
    };
    match quantity.parse::<u32>() {
        Ok(quantity) => {
            if let Err(err) = portfolio.buy(stock, quantity) {
                println!("{err}");
            }
        }
        Err(_) => println!("Invalid quantity."),
    }
}

fn print_market(market: &StockMarket) {
    for row in market.snapshots() {
        println!("{}", market_row(&row));
    }
}

fn print_portfolio(portfolio: &UserPortfolio) {
    println!("\n~ This is Your Portfolio ~");
    println!("Balance: ${:.2}", portfolio.balance());
    if portfolio.is_empty() {
        println!("No stocks owned yet");
    } else {
        for row in portfolio.snapshots() {
            println!("{}", holding_row(&row));
        }
    }
}

fn market_row(row: &StockSnapshot) -> String {
    format!(
        "{:>2}. {:>12} | ${:>8.2} | Risk: {} | Day {}",
        row.id, row.name, row.price, row.risk, row.day
    )
}

fn holding_row(row: &HoldingSnapshot) -> String {
    format!(
        "{:>2}. {:>12} | ${:>8.2} | Risk: {} | Day {} | Quantity: {} | Value: ${:.2}",
        row.id, row.name, row.price, row.risk, row.day, row.quantity, row.total_value
    )
}

/// Prints a prompt (if any) and reads one trimmed line.
fn prompt<R: BufRead>(input: &mut R, text: &str) -> io::Result<String> {
    if !text.is_empty() {
        print!("{text}");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
