// src/portfolio.rs

//! The user's portfolio: a cash balance plus the stocks they own.
//!
//! A purchased stock is copied out of the market catalog and random-walks on
//! its own from that point — the portfolio's view of "Apple" and the
//! market's drift apart. Sales are priced at the portfolio's own tracked
//! price, not the live market price.

use crate::config::INITIAL_BALANCE;
use crate::simulators::random_walk::RandomWalkModel;
use crate::stocks::definitions::{RiskTier, SimulatedStock};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a buy or sell was refused. Every refusal leaves the portfolio
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TradeError {
    #[error("Insufficient balance.")]
    InsufficientBalance,
    #[error("Not enough quantity.")]
    InsufficientQuantity,
    #[error("Stock not found in portfolio.")]
    NotFound,
    #[error("Quantity must be at least 1.")]
    InvalidQuantity,
}

/// A stock the user owns: the copied stock plus how many shares of it.
/// Never exists with a quantity of zero.
#[derive(Debug, Clone)]
pub struct OwnedStock {
    stock: SimulatedStock,
    quantity: u32,
}

impl OwnedStock {
    fn new(stock: SimulatedStock, quantity: u32) -> Self {
        Self { stock, quantity }
    }

    pub fn stock(&self) -> &SimulatedStock {
        &self.stock
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Shares times the holding's own tracked price.
    pub fn total_value(&self) -> f64 {
        self.quantity as f64 * self.stock.price
    }
}

/// A read-only row for the "show portfolio" boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingSnapshot {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub risk: RiskTier,
    pub day: usize,
    pub quantity: u32,
    pub total_value: f64,
}

impl HoldingSnapshot {
    fn of(owned: &OwnedStock) -> Self {
        Self {
            id: owned.stock.id,
            name: owned.stock.name.clone(),
            price: owned.stock.price,
            risk: owned.stock.risk,
            day: owned.stock.day(),
            quantity: owned.quantity,
            total_value: owned.total_value(),
        }
    }
}

/// Cash balance plus owned stocks, keyed by stock name, in purchase order.
#[derive(Debug)]
pub struct UserPortfolio {
    balance: f64,
    owned: Vec<OwnedStock>,
}

impl UserPortfolio {
    pub fn new() -> Self {
        Self::with_balance(INITIAL_BALANCE)
    }

    pub fn with_balance(balance: f64) -> Self {
        Self {
            balance,
            owned: Vec::new(),
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn holdings(&self) -> &[OwnedStock] {
        &self.owned
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    /// Buys `quantity` shares at the stock's current market price.
    ///
    /// The whole cost must fit in the balance, otherwise nothing changes.
    /// A repeat purchase tops up the existing holding; a first purchase
    /// copies the stock into the portfolio as-is, history included.
    pub fn buy(&mut self, stock: &SimulatedStock, quantity: u32) -> Result<(), TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let cost = stock.price * quantity as f64;
        if cost > self.balance {
            return Err(TradeError::InsufficientBalance);
        }
        self.balance -= cost;

        if let Some(owned) = self.owned.iter_mut().find(|o| o.stock.name == stock.name) {
            owned.quantity += quantity;
        } else {
            self.owned.push(OwnedStock::new(stock.clone(), quantity));
        }
        Ok(())
    }

    /// Sells `quantity` shares of the named holding at the holding's own
    /// tracked price. Selling a holding down to zero removes it entirely.
    pub fn sell(&mut self, name: &str, quantity: u32) -> Result<(), TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let pos = self
            .owned
            .iter()
            .position(|o| o.stock.name == name)
            .ok_or(TradeError::NotFound)?;

        let owned = &mut self.owned[pos];
        if quantity > owned.quantity {
            return Err(TradeError::InsufficientQuantity);
        }
        self.balance += quantity as f64 * owned.stock.price;
        owned.quantity -= quantity;
        if owned.quantity == 0 {
            self.owned.remove(pos);
        }
        Ok(())
    }

    /// Advances every holding's price by one simulated day, independently of
    /// whatever the market catalog does with its own copies.
    pub fn advance_day(&mut self, model: &mut RandomWalkModel) {
        for owned in &mut self.owned {
            model.advance(&mut owned.stock);
        }
    }

    /// Snapshot rows for the display layer, in purchase order.
    pub fn snapshots(&self) -> Vec<HoldingSnapshot> {
        self.owned.iter().map(HoldingSnapshot::of).collect()
    }
}

impl Default for UserPortfolio {
    fn default() -> Self {
        Self::new()
    }
}
