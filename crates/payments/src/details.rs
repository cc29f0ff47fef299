/// Card details entered at checkout.
///
/// Used for a single authorization and never stored. `Debug` masks the card
/// number and hides the CVV.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    card_number: String,
    holder_name: String,
    expiry: String,
    cvv: String,
}

impl PaymentDetails {
    pub fn new(
        card_number: impl Into<String>,
        holder_name: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            holder_name: holder_name.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Expiry as entered, expected as `MM/YY`.
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Last (up to) four characters of the card number.
    pub fn last_four(&self) -> &str {
        let start = self
            .card_number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(i, _)| i);
        &self.card_number[start..]
    }
}

impl core::fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_number", &format_args!("****{}", self.last_four()))
            .field("holder_name", &self.holder_name)
            .field("expiry", &self.expiry)
            .field("cvv", &"***")
            .finish()
    }
}
