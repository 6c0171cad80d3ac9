//! Structs - methods, mutable state, and guarded transitions

/// A toy bank account in integer cents.
#[derive(Debug)]
pub struct Account {
    owner: String,
    balance_cents: i64,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance_cents: i64) -> Self {
        Self {
            owner: owner.into(),
            balance_cents,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance_cents(&self) -> i64 {
        self.balance_cents
    }

    pub fn deposit(&mut self, amount_cents: i64) {
        self.balance_cents += amount_cents;
    }

    /// Withdraw, refusing to overdraw.
    pub fn withdraw(&mut self, amount_cents: i64) -> Result<(), String> {
        if amount_cents > self.balance_cents {
            return Err(format!(
                "insufficient funds: balance {} < withdrawal {}",
                self.balance_cents, amount_cents
            ));
        }
        self.balance_cents -= amount_cents;
        Ok(())
    }
}
